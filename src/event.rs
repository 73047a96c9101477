#![doc = r#"
The decoded MIDI event record and its derived classification
"#]

use core::fmt;

/// A single decoded MIDI event, stamped with both its absolute tick and its
/// tempo-resolved time in seconds.
///
/// Classification is derived from the raw status byte rather than stored.
/// Within one track, events are ordered by non-decreasing `tick` and `time`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiEvent {
    /// Seconds from the start of the track, resolved against the tempo map.
    pub time: f32,
    /// Absolute tick count from the start of the track.
    pub tick: u32,
    /// Raw status byte.
    pub status: u8,
    /// First payload byte; holds the meta type for meta events.
    pub data1: u8,
    /// Second payload byte; holds the resolved BPM for tempo-set events.
    pub data2: u8,
}

impl MidiEvent {
    /// Control change message (`0xBn`).
    pub const fn is_cc(&self) -> bool {
        self.status & 0xb0 == 0xb0
    }

    /// Note-on or note-off message.
    pub const fn is_note(&self) -> bool {
        self.status & 0xe0 == 0x80
    }

    /// Note-on message (`0x9n`).
    pub const fn is_note_on(&self) -> bool {
        self.status & 0xf0 == 0x90
    }

    /// Note-off message (`0x8n`).
    pub const fn is_note_off(&self) -> bool {
        self.status & 0xf0 == 0x80
    }

    /// Meta event (`0xFF`).
    pub const fn is_meta(&self) -> bool {
        self.status == 0xff
    }

    /// Tempo-set meta event; `data2` carries the resolved BPM.
    pub const fn is_tempo_set(&self) -> bool {
        self.is_meta() && self.data1 == 0x51
    }
}

impl fmt::Display for MidiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}: {:X}, {}, {}]",
            self.tick, self.status, self.data1, self.data2
        )
    }
}
