#![doc = r#"
Control bindings that map a track timeline onto continuous output values
"#]

mod curve;
pub use curve::*;

mod envelope;
pub use envelope::*;

mod note_filter;
pub use note_filter::*;

/// How a [`MidiControl`] turns the timeline into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlMode {
    /// Interpolate a control-change lane.
    #[default]
    ControlChange,
    /// Shape matching notes with an ADSR envelope.
    NoteEnvelope,
    /// Evaluate a response curve from each matching note's onset.
    NoteCurve,
}

/// A binding from a track timeline to one continuous output value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiControl {
    /// Value generation mode.
    pub mode: ControlMode,
    /// Controller number sampled in [`ControlMode::ControlChange`].
    pub cc_number: u8,
    /// Which notes the envelope and curve modes respond to.
    pub note_filter: NoteFilter,
    /// Envelope applied in [`ControlMode::NoteEnvelope`].
    pub envelope: Envelope,
    /// Curve evaluated in [`ControlMode::NoteCurve`].
    pub curve: ResponseCurve,
}
