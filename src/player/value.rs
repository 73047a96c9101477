use super::TimelinePlayer;
use crate::control::MidiControl;

impl TimelinePlayer<'_> {
    /// Control-change lane value: the two matching CC events bracketing the
    /// query tick, linearly interpolated on the fractional position of the
    /// query time between their tick-derived seconds.
    pub(super) fn cc_value(&self, control: &MidiControl, time: f32) -> f32 {
        let timeline = self.timeline;
        let tick = timeline.seconds_to_tick(time);
        let (i0, i1) = timeline.cc_events_around_tick(tick, control.cc_number);

        let Some(i0) = i0 else {
            return 0.0;
        };
        let e0 = timeline.events()[i0];
        let v0 = f32::from(e0.data2) / 127.0;

        let Some(i1) = i1 else {
            return v0;
        };
        let e1 = timeline.events()[i1];
        let v1 = f32::from(e1.data2) / 127.0;

        let t0 = timeline.ticks_to_seconds(e0.tick, self.cursor.tempo);
        let t1 = timeline.ticks_to_seconds(e1.tick, self.cursor.tempo);

        let blend = ((time - t0) / (t1 - t0)).clamp(0.0, 1.0);
        v0 + (v1 - v0) * blend
    }

    /// ADSR envelope over the most recent matching note, scaled by its
    /// velocity. While no note-off has arrived the note is still
    /// sustaining, so the off time defaults to the query time.
    pub(super) fn note_envelope_value(&self, control: &MidiControl, time: f32) -> f32 {
        let timeline = self.timeline;
        let tick = timeline.seconds_to_tick(time);
        let (on, off) = timeline.note_events_before_tick(tick, &control.note_filter);

        let Some(on) = on else {
            return 0.0;
        };
        let note_on = timeline.events()[on];
        let on_time = timeline.ticks_to_seconds(note_on.tick, self.cursor.tempo);

        let off_time = match off {
            Some(off) if off > on => {
                timeline.ticks_to_seconds(timeline.events()[off].tick, self.cursor.tempo)
            }
            _ => time,
        };

        let level = control.envelope.level(
            (off_time - on_time).max(0.0),
            (time - off_time).max(0.0),
        );

        level * f32::from(note_on.data2) / 127.0
    }

    /// Response curve evaluated from the most recent matching note's onset,
    /// scaled by its velocity.
    pub(super) fn note_curve_value(&self, control: &MidiControl, time: f32) -> f32 {
        let timeline = self.timeline;
        let tick = timeline.seconds_to_tick(time);
        let (on, _) = timeline.note_events_before_tick(tick, &control.note_filter);

        let Some(on) = on else {
            return 0.0;
        };
        let note_on = timeline.events()[on];
        let on_time = timeline.ticks_to_seconds(note_on.tick, self.cursor.tempo);

        let curve = control.curve.evaluate((time - on_time).max(0.0));
        curve * f32::from(note_on.data2) / 127.0
    }
}
