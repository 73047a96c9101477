use crate::file::TrackTimeline;

/// Mutable per-playback-instance state over one shared
/// [`TrackTimeline`].
///
/// Holds the trigger window's left edge, the running tempo scalar, and a
/// forward-scan cache for time-to-tick mapping. Reset whenever the host
/// (re)starts playback; never persisted.
#[derive(Debug, Clone)]
pub struct PlaybackCursor {
    pub(crate) previous_tick: u32,
    pub(crate) previous_time: f32,
    pub(crate) tempo: f32,
    cache_time: f32,
    cache_index: usize,
    cache_tick: u32,
}

impl PlaybackCursor {
    pub(crate) fn new(tempo: f32) -> Self {
        Self {
            previous_tick: 0,
            previous_time: 0.0,
            tempo,
            cache_time: 0.0,
            cache_index: 0,
            cache_tick: 0,
        }
    }

    pub(crate) fn reset(&mut self, time: f32, tempo: f32) {
        *self = Self::new(tempo);
        self.previous_time = time;
    }

    /// Cached variant of [`TrackTimeline::seconds_to_tick`].
    ///
    /// Playback queries are predominantly monotonic non-decreasing, so the
    /// scan resumes from the previous stop point whenever the new query
    /// time is not earlier than the cached one. A backward query bypasses
    /// the cache with a full scan: the cache may only ever change the cost
    /// of an answer, never the answer.
    pub(crate) fn seconds_to_tick(&mut self, timeline: &TrackTimeline, time: f32) -> u32 {
        let (mut index, mut tick) = if self.cache_time <= time {
            (self.cache_index, self.cache_tick)
        } else {
            (0, 0)
        };

        let events = timeline.events();
        while index < events.len() {
            if time <= events[index].time {
                break;
            }
            tick = events[index].tick;
            index += 1;
        }

        self.cache_time = time;
        self.cache_index = index;
        self.cache_tick = tick;
        tick
    }
}
