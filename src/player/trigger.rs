use super::{MidiSignal, TimelinePlayer};

impl TimelinePlayer<'_> {
    /// Fire every signal between the `previous` and `current` ticks,
    /// resolving loop wrap-around and multi-lap jumps.
    ///
    /// Tempo-set events inside the window update the cursor's running
    /// tempo instead of being forwarded; only note events become signals.
    pub(super) fn trigger_signals(&mut self, previous: u32, current: u32) {
        let duration = self.timeline.duration();
        if duration == 0 {
            return;
        }

        let mut t0 = previous;
        let mut t1 = current;

        // The window wrapped when the host looped playback; offset the
        // right edge back into monotonic order.
        if t1 < t0 {
            t1 += (t0 / duration + 1) * duration;
        }

        // Shift both edges so the left one lands inside [0, duration).
        let offset = (t0 / duration) * duration;
        t0 -= offset;
        t1 -= offset;

        // A jump can span whole laps: fire each full tail, then wrap.
        while t1 >= duration {
            self.trigger_signals_tick(t0, u32::MAX);
            t0 = 0;
            t1 -= duration;
        }

        self.trigger_signals_tick(t0, t1);

        self.cursor.previous_tick = t1;
    }

    fn trigger_signals_tick(&mut self, previous: u32, current: u32) {
        let timeline = self.timeline;
        for event in timeline.events() {
            if event.tick >= current {
                break;
            }
            if event.tick < previous {
                continue;
            }
            if event.is_tempo_set() {
                self.cursor.tempo = f32::from(event.data2);
                continue;
            }
            if !event.is_note() {
                continue;
            }
            self.signals.push(MidiSignal { event: *event });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event::MidiEvent, file::TrackTimeline};

    fn note(tick: u32, time: f32, key: u8) -> MidiEvent {
        MidiEvent {
            time,
            tick,
            status: 0x90,
            data1: key,
            data2: 100,
        }
    }

    fn timeline() -> TrackTimeline {
        TrackTimeline::new(
            vec![
                note(0, 0.0, 60),
                note(96, 0.5, 62),
                note(192, 1.0, 64),
                note(288, 1.5, 65),
            ],
            384,
            96,
        )
    }

    fn fired(player: &mut TimelinePlayer<'_>, previous: u32, current: u32) -> Vec<u32> {
        player.signals.clear();
        player.trigger_signals(previous, current);
        player.signals.iter().map(|s| s.event.tick).collect()
    }

    #[test]
    fn window_is_left_inclusive_right_exclusive() {
        let track = timeline();
        let mut player = TimelinePlayer::new(&track);

        assert_eq!(fired(&mut player, 0, 96), vec![0]);
        assert_eq!(fired(&mut player, 96, 96), Vec::<u32>::new());
        assert_eq!(fired(&mut player, 96, 289), vec![96, 192, 288]);
    }

    #[test]
    fn wrapped_window_fires_tail_then_head_exactly_once() {
        let track = timeline();
        let mut player = TimelinePlayer::new(&track);

        // [D-1, D+1) resolves to [D-1, D) then [0, 1): nothing repeats.
        assert_eq!(fired(&mut player, 383, 1), vec![0]);
        assert_eq!(fired(&mut player, 288, 97), vec![288, 0, 96]);
    }

    #[test]
    fn multi_lap_jump_fires_each_lap() {
        let track = timeline();
        let mut player = TimelinePlayer::new(&track);

        // Two whole laps ahead of the left edge.
        let ticks = fired(&mut player, 0, 768 + 96);
        assert_eq!(ticks, vec![0, 96, 192, 288, 0, 96, 192, 288, 0]);
        assert_eq!(player.cursor.previous_tick, 96);
    }

    #[test]
    fn tempo_set_updates_cursor_without_firing() {
        let events = vec![
            MidiEvent {
                time: 0.0,
                tick: 0,
                status: 0xff,
                data1: 0x51,
                data2: 60,
            },
            note(96, 1.0, 60),
        ];
        let track = TrackTimeline::new(events, 384, 96);
        let mut player = TimelinePlayer::new(&track);

        assert_eq!(fired(&mut player, 0, 97), vec![96]);
        assert_eq!(player.current_tempo(), 60.0);
    }

    #[test]
    fn zero_duration_timeline_triggers_nothing() {
        let track = TrackTimeline::new(vec![], 0, 96);
        let mut player = TimelinePlayer::new(&track);
        assert_eq!(fired(&mut player, 0, 100), Vec::<u32>::new());
    }
}
