#![doc = r#"
Convenient re-exports for typical use of the crate
"#]

pub use crate::{
    control::{ControlMode, Envelope, MidiControl, NoteFilter, NoteName, ResponseCurve},
    event::MidiEvent,
    file::{DecodeOptions, DuplicatePolicy, MidiFile, TrackTimeline},
    player::{EvaluationMode, MidiSignal, PlaybackCursor, TimelinePlayer},
    reader::{ParseError, ReadResult, Reader, ReaderError, ReaderErrorKind},
};
