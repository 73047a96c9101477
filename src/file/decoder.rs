use tracing::debug;

use super::{DecodeOptions, DuplicatePolicy, TrackTimeline};
use crate::{
    event::MidiEvent,
    reader::{ParseError, ReadResult, Reader, ReaderError},
};

const META_TEMPO: u8 = 0x51;
const SYSEX_END: u8 = 0xf7;

/// Decode one `MTrk` chunk into a [`TrackTimeline`].
///
/// Maintains the running tick, the running tempo-integrated time, the tempo
/// in effect, and the running-status byte across the chunk's event stream.
pub(super) fn read_track(
    reader: &mut Reader<'_>,
    ticks_per_quarter_note: u16,
    options: DecodeOptions,
) -> ReadResult<TrackTimeline> {
    if &reader.read_tag()? != b"MTrk" {
        return Err(ReaderError::parse_error(
            reader.buffer_position(),
            ParseError::BadTrackHeader,
        ));
    }

    let chunk_length = reader.read_u32_be()? as usize;
    let chunk_end = reader.buffer_position() + chunk_length;

    let mut events: Vec<MidiEvent> = Vec::new();
    let mut tick = 0u32;
    let mut time = 0f32;
    let mut tempo = 120f32;
    let mut status = 0u8;

    while reader.buffer_position() < chunk_end {
        let delta = reader.read_var_len()?;
        tick += delta;

        // Deltas are integrated with the tempo in effect before this event,
        // so a tempo change never reaches backward in time.
        let seconds_per_beat = 60.0 / tempo;
        time += seconds_per_beat * delta as f32 / f32::from(ticks_per_quarter_note);

        // Running status: a clear high bit means the previous status byte
        // still applies and this byte already belongs to the payload.
        if reader.peek_u8()? & 0x80 != 0 {
            status = reader.read_u8()?;
        }

        if status == 0xff {
            let meta = reader.read_u8()?;
            if meta == META_TEMPO {
                let _length = reader.read_var_len()?;
                let micros_per_quarter_note = reader.read_u24_be()?;
                let bpm = (60_000_000.0 / f64::from(micros_per_quarter_note)).round();
                debug!(tick, tempo = bpm, "tempo set");
                tempo = bpm as f32;
                events.push(MidiEvent {
                    time,
                    tick,
                    status,
                    data1: meta,
                    data2: bpm.min(255.0) as u8,
                });
            } else {
                let length = reader.read_var_len()?;
                reader.skip(length as usize)?;
                events.push(MidiEvent {
                    time,
                    tick,
                    status,
                    data1: meta,
                    data2: 0,
                });
            }
        } else if status == 0xf0 {
            // SysEx payload is irrelevant here; scan past the terminator
            // and keep only the tick/time mark.
            while reader.read_u8()? != SYSEX_END {}
            events.push(MidiEvent {
                time,
                tick,
                status,
                data1: 0,
                data2: 0,
            });
        } else {
            let data1 = reader.read_u8()?;
            // Program change and channel pressure carry a single data byte.
            let data2 = if status & 0xe0 == 0xc0 {
                0
            } else {
                reader.read_u8()?
            };

            let duplicate = options.duplicate_notes == DuplicatePolicy::Suppress
                && events.iter().any(|e| e.tick == tick && e.status == status);
            if !duplicate {
                events.push(MidiEvent {
                    time,
                    tick,
                    status,
                    data1,
                    data2,
                });
            }
        }
    }

    // Quantize the track length up to whole 4-beat bars.
    let bar = u32::from(ticks_per_quarter_note) * 4;
    let duration = if bar == 0 { 0 } else { tick.div_ceil(bar) * bar };

    debug!(
        events = events.len(),
        duration, ticks_per_quarter_note, "track decoded"
    );

    Ok(TrackTimeline::new(events, duration, ticks_per_quarter_note))
}
