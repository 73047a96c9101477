use crate::{control::NoteFilter, event::MidiEvent};

/// One track's immutable timeline: the decoded event sequence plus the
/// scalars needed to map between ticks and seconds.
///
/// Shared read-only between any number of playback instances; all mutable
/// playback state lives in each instance's
/// [`PlaybackCursor`](crate::player::PlaybackCursor).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackTimeline {
    tempo: f32,
    duration: u32,
    ticks_per_quarter_note: u16,
    events: Vec<MidiEvent>,
}

impl TrackTimeline {
    pub(crate) fn new(events: Vec<MidiEvent>, duration: u32, ticks_per_quarter_note: u16) -> Self {
        Self {
            tempo: 120.0,
            duration,
            ticks_per_quarter_note,
            events,
        }
    }

    /// Baseline tempo in beats per minute, in effect until the first
    /// tempo-set event.
    pub const fn tempo(&self) -> f32 {
        self.tempo
    }

    /// Total length in ticks, quantized up to whole 4-beat bars.
    pub const fn duration(&self) -> u32 {
        self.duration
    }

    /// Tick resolution from the file header, shared by all tracks of a file.
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        self.ticks_per_quarter_note
    }

    /// The decoded event sequence, ordered by non-decreasing tick.
    pub fn events(&self) -> &[MidiEvent] {
        &self.events
    }

    /// Total length in seconds at the baseline tempo.
    pub fn duration_secs(&self) -> f32 {
        self.duration as f32 / self.tempo * 60.0 / f32::from(self.ticks_per_quarter_note)
    }

    /// Map a playback time to the tick of the last event stamped before it.
    ///
    /// Events carry their own tempo-resolved times, so this is a scan over
    /// the sequence rather than a closed-form conversion; tempo may change
    /// mid-stream. Times before the first event map to tick 0.
    pub fn seconds_to_tick(&self, time: f32) -> u32 {
        let mut tick = 0;
        for event in &self.events {
            if time <= event.time {
                break;
            }
            tick = event.tick;
        }
        tick
    }

    /// Closed-form tick to seconds conversion at a caller-supplied tempo.
    ///
    /// The caller keeps `tempo` in sync with whatever tempo-set events it
    /// has already played through.
    pub fn ticks_to_seconds(&self, tick: u32, tempo: f32) -> f32 {
        tick as f32 * 60.0 / (tempo * f32::from(self.ticks_per_quarter_note))
    }

    /// Indices of the nearest matching CC events at-or-before and strictly
    /// after `tick` for the given controller number.
    pub(crate) fn cc_events_around_tick(
        &self,
        tick: u32,
        cc_number: u8,
    ) -> (Option<usize>, Option<usize>) {
        let mut last = None;
        for (i, event) in self.events.iter().enumerate() {
            if !event.is_cc() || event.data1 != cc_number {
                continue;
            }
            if event.tick > tick {
                return (last, Some(i));
            }
            last = Some(i);
        }
        (last, None)
    }

    /// Most recent matching note-on and note-off indices at-or-before
    /// `tick`, from a single scan of the sequence.
    pub(crate) fn note_events_before_tick(
        &self,
        tick: u32,
        filter: &NoteFilter,
    ) -> (Option<usize>, Option<usize>) {
        let mut on = None;
        let mut off = None;
        for (i, event) in self.events.iter().enumerate() {
            if event.tick > tick {
                break;
            }
            if !filter.matches(event) {
                continue;
            }
            if event.is_note_on() {
                on = Some(i);
            } else {
                off = Some(i);
            }
        }
        (on, off)
    }
}
