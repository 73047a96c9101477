#![doc = r#"
Per-frame playback evaluation over a parsed track timeline

The host scheduler owns the clock: once per output frame it calls
[`TimelinePlayer::evaluate`] with the current playback time and an
[`EvaluationMode`], and consumes the note signals fired inside that frame's
trigger window. Continuous values are queried separately through
[`TimelinePlayer::value`] with a [`MidiControl`] binding.

Every player owns its own [`PlaybackCursor`]; any number of players may
evaluate the same shared [`TrackTimeline`] independently.
"#]

mod cursor;
pub use cursor::*;

mod trigger;
mod value;

use crate::{
    control::{ControlMode, MidiControl},
    event::MidiEvent,
    file::TrackTimeline,
};

/// How the host is driving the current evaluation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationMode {
    /// Ordinary forward playback.
    Playback,
    /// Editor-style scrubbing or seeking.
    Scrub,
}

/// A discrete note signal fired by the trigger engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MidiSignal {
    /// The note event that fired.
    pub event: MidiEvent,
}

/// A playback instance over one shared, immutable [`TrackTimeline`].
#[derive(Debug, Clone)]
pub struct TimelinePlayer<'a> {
    timeline: &'a TrackTimeline,
    cursor: PlaybackCursor,
    signals: Vec<MidiSignal>,
}

impl<'a> TimelinePlayer<'a> {
    /// Maximum forward gap still treated as continuous scrubbing.
    const MAX_SCRUB_GAP: f32 = 0.1;

    /// Create a player positioned at the start of the timeline.
    pub fn new(timeline: &'a TrackTimeline) -> Self {
        Self {
            timeline,
            cursor: PlaybackCursor::new(timeline.tempo()),
            signals: Vec::new(),
        }
    }

    /// The timeline this player evaluates.
    pub const fn timeline(&self) -> &'a TrackTimeline {
        self.timeline
    }

    /// Tempo currently in effect, tracking tempo-set events as they fire.
    pub const fn current_tempo(&self) -> f32 {
        self.cursor.tempo
    }

    /// Reset the cursor for a playback (re)start at `time`.
    pub fn restart(&mut self, time: f32) {
        self.cursor.reset(time, self.timeline.tempo());
    }

    /// Advance the playhead to `time` and return the note signals fired
    /// this frame.
    ///
    /// In [`EvaluationMode::Playback`] the trigger window runs from the
    /// previous frame's tick to the current one, wrapping through the loop
    /// point as needed. In [`EvaluationMode::Scrub`] a forward gap smaller
    /// than 0.1 s is treated as continuous scrubbing and triggers normally;
    /// a larger gap is a discontinuous jump and only the 0.1 s right before
    /// the target is replayed, so a seek does not flood the output with
    /// every signal in between.
    pub fn evaluate(&mut self, time: f32, mode: EvaluationMode) -> &[MidiSignal] {
        self.signals.clear();
        let current_tick = self.cursor.seconds_to_tick(self.timeline, time);

        match mode {
            EvaluationMode::Playback => {
                self.trigger_signals(self.cursor.previous_tick, current_tick);
            }
            EvaluationMode::Scrub => {
                if time - self.cursor.previous_time < Self::MAX_SCRUB_GAP {
                    self.trigger_signals(self.cursor.previous_tick, current_tick);
                } else {
                    let from = self
                        .timeline
                        .seconds_to_tick((time - Self::MAX_SCRUB_GAP).max(0.0));
                    self.trigger_signals(from, current_tick);
                }
            }
        }

        self.cursor.previous_time = time;
        self.cursor.previous_tick = current_tick;
        &self.signals
    }

    /// Flush every signal left between the last fired tick and the end of
    /// the clip, for when the host reports playback finished.
    pub fn finish(&mut self, duration_secs: f32) -> &[MidiSignal] {
        self.signals.clear();
        let end_tick = self.timeline.seconds_to_tick(duration_secs);
        self.trigger_signals(self.cursor.previous_tick, end_tick);
        &self.signals
    }

    /// Continuous value of `control` at `time`, with the query time wrapped
    /// into the clip's duration.
    ///
    /// Out-of-range queries degrade to 0 rather than failing; playback time
    /// can legitimately fall outside the authored range.
    pub fn value(&self, control: &MidiControl, time: f32) -> f32 {
        if self.timeline.events().is_empty() {
            return 0.0;
        }
        let duration = self.timeline.duration_secs();
        let t = if duration > 0.0 { time % duration } else { 0.0 };

        match control.mode {
            ControlMode::NoteEnvelope => self.note_envelope_value(control, t),
            ControlMode::NoteCurve => self.note_curve_value(control, t),
            ControlMode::ControlChange => self.cc_value(control, t),
        }
    }
}
