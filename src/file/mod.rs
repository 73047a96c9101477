#![doc = r#"
SMF decoding into per-track timelines

# Overview

MIDI files are organized into chunks, each identified by a 4-character ASCII
tag followed by a 32-bit big-endian length and the chunk data. The decoder
expects the fixed 14-byte `MThd` header chunk first, then one `MTrk` chunk
per track in file order. Each track chunk is a stream of variable-length
delta-time/event pairs, decoded here into an ordered
[`MidiEvent`](crate::event::MidiEvent) sequence with every event stamped in
both ticks and tempo-resolved seconds.

Decoding is all-or-nothing: the first structural error aborts the whole
file and no tracks are returned.
"#]

mod decoder;

mod track;
pub use track::*;

use crate::reader::{ParseError, ReadResult, Reader, ReaderError};

/// How the decoder treats a channel-voice event landing on a (tick, status)
/// pair that is already occupied in the track.
///
/// Malformed files occasionally retrigger the same note at the same tick;
/// which copy survives is a format-permissive choice, so it is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuplicatePolicy {
    /// Drop the later event.
    #[default]
    Suppress,
    /// Keep every decoded event.
    Keep,
}

/// Decoder configuration.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeOptions {
    /// Policy for same-(tick, status) channel-voice events.
    pub duplicate_notes: DuplicatePolicy,
}

/// An ordered collection of [`TrackTimeline`]s decoded from one SMF buffer.
///
/// Created once at parse time and immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFile {
    tracks: Vec<TrackTimeline>,
}

impl MidiFile {
    /// Parse an SMF byte buffer with default options.
    pub fn parse(bytes: &[u8]) -> ReadResult<Self> {
        Self::parse_with(bytes, DecodeOptions::default())
    }

    /// Parse an SMF byte buffer.
    pub fn parse_with(bytes: &[u8], options: DecodeOptions) -> ReadResult<Self> {
        let mut reader = Reader::from_byte_slice(bytes);

        if &reader.read_tag()? != b"MThd" {
            return Err(ReaderError::parse_error(
                reader.buffer_position(),
                ParseError::BadHeader,
            ));
        }
        if reader.read_u32_be()? != 6 {
            return Err(ReaderError::parse_error(
                reader.buffer_position(),
                ParseError::BadHeaderLength,
            ));
        }

        // Format word is irrelevant to the timeline model.
        reader.skip(2)?;

        let track_count = reader.read_u16_be()?;

        let division = reader.read_u16_be()?;
        if division & 0x8000 != 0 {
            return Err(ReaderError::parse_error(
                reader.buffer_position(),
                ParseError::UnsupportedTimeFormat,
            ));
        }
        let ticks_per_quarter_note = division & 0x7fff;

        let mut tracks = Vec::with_capacity(usize::from(track_count));
        for _ in 0..track_count {
            tracks.push(decoder::read_track(
                &mut reader,
                ticks_per_quarter_note,
                options,
            )?);
        }

        Ok(Self { tracks })
    }

    /// The decoded tracks, in file order.
    pub fn tracks(&self) -> &[TrackTimeline] {
        &self.tracks
    }

    /// Consume the file, handing the tracks to their long-term owner.
    pub fn into_tracks(self) -> Vec<TrackTimeline> {
        self.tracks
    }
}
