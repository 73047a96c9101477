use num_enum::TryFromPrimitive;

use crate::event::MidiEvent;

/// Chromatic pitch class of a MIDI key number (key modulo 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum NoteName {
    /// C
    C = 0,
    /// C♯ / D♭
    CSharp,
    /// D
    D,
    /// D♯ / E♭
    DSharp,
    /// E
    E,
    /// F
    F,
    /// F♯ / G♭
    FSharp,
    /// G
    G,
    /// G♯ / A♭
    GSharp,
    /// A
    A,
    /// A♯ / B♭
    ASharp,
    /// B
    B,
}

impl NoteName {
    /// Pitch class of a raw MIDI key number.
    pub fn of_key(key: u8) -> Self {
        Self::try_from(key % 12).unwrap_or(Self::C)
    }
}

/// Selects which note events a control responds to.
///
/// Unset fields match everything, so the default filter accepts any note
/// event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteFilter {
    /// Match only this pitch class, if set.
    pub note: Option<NoteName>,
    /// Match only this octave (key number / 12), if set.
    pub octave: Option<u8>,
}

impl NoteFilter {
    /// True if `event` is a note event accepted by this filter.
    pub fn matches(&self, event: &MidiEvent) -> bool {
        if !event.is_note() {
            return false;
        }
        if let Some(note) = self.note {
            if NoteName::of_key(event.data1) != note {
                return false;
            }
        }
        if let Some(octave) = self.octave {
            if event.data1 / 12 != octave {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_on(key: u8) -> MidiEvent {
        MidiEvent {
            time: 0.0,
            tick: 0,
            status: 0x90,
            data1: key,
            data2: 100,
        }
    }

    #[test]
    fn default_filter_accepts_any_note() {
        let filter = NoteFilter::default();
        assert!(filter.matches(&note_on(60)));
        assert!(filter.matches(&note_on(0)));

        let cc = MidiEvent {
            time: 0.0,
            tick: 0,
            status: 0xb0,
            data1: 1,
            data2: 64,
        };
        assert!(!filter.matches(&cc));
    }

    #[test]
    fn pitch_class_and_octave_narrow_the_match() {
        // Middle C is key 60: pitch class C, octave 5.
        let filter = NoteFilter {
            note: Some(NoteName::C),
            octave: Some(5),
        };
        assert!(filter.matches(&note_on(60)));
        assert!(!filter.matches(&note_on(61)));
        assert!(!filter.matches(&note_on(48)));

        let any_octave = NoteFilter {
            note: Some(NoteName::C),
            octave: None,
        };
        assert!(any_octave.matches(&note_on(48)));
    }

    #[test]
    fn pitch_class_wraps_modulo_twelve() {
        assert_eq!(NoteName::of_key(0), NoteName::C);
        assert_eq!(NoteName::of_key(61), NoteName::CSharp);
        assert_eq!(NoteName::of_key(127), NoteName::G);
    }
}
