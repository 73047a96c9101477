/// ADSR amplitude envelope applied over a note's active duration.
///
/// The raw fields keep whatever the author set; the accessors clamp them
/// into usable ranges (times floored away from zero, sustain into `[0, 1]`)
/// so evaluation never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Envelope {
    /// Attack time in seconds.
    pub attack: f32,
    /// Decay time in seconds.
    pub decay: f32,
    /// Sustain level, normalized.
    pub sustain: f32,
    /// Release time in seconds.
    pub release: f32,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            attack: 0.0,
            decay: 0.0,
            sustain: 1.0,
            release: 0.0,
        }
    }
}

impl Envelope {
    const MIN_TIME: f32 = 1e-5;

    /// Attack time, floored away from zero.
    pub fn attack_time(&self) -> f32 {
        self.attack.max(Self::MIN_TIME)
    }

    /// Decay time, floored away from zero.
    pub fn decay_time(&self) -> f32 {
        self.decay.max(Self::MIN_TIME)
    }

    /// Sustain level clamped into `[0, 1]`.
    pub fn sustain_level(&self) -> f32 {
        self.sustain.clamp(0.0, 1.0)
    }

    /// Release time, floored away from zero.
    pub fn release_time(&self) -> f32 {
        self.release.max(Self::MIN_TIME)
    }

    /// Envelope level `on_time` seconds into the note, `off_time` seconds
    /// after its release (zero while the note is still held).
    ///
    /// Rises linearly through the attack, decays linearly to the sustain
    /// level, holds, and subtracts the elapsed release fraction, floored
    /// at zero.
    pub fn level(&self, on_time: f32, off_time: f32) -> f32 {
        let attack_time = self.attack_time();
        let attack_rate = 1.0 / attack_time;

        let decay_time = self.decay_time();
        let decay_rate = 1.0 / decay_time;

        let mut level = -off_time / self.release_time();

        if on_time < attack_time {
            level += on_time * attack_rate;
        } else if on_time < attack_time + decay_time {
            level += 1.0 - (on_time - attack_time) * decay_rate * (1.0 - self.sustain_level());
        } else {
            level += self.sustain_level();
        }

        level.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn adsr() -> Envelope {
        Envelope {
            attack: 0.1,
            decay: 0.2,
            sustain: 0.5,
            release: 0.2,
        }
    }

    #[test]
    fn attack_rises_linearly() {
        let env = adsr();
        assert!((env.level(0.05, 0.0) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn decay_falls_to_sustain() {
        let env = adsr();
        // Halfway through the decay: 1 - 0.5 * (1 - sustain).
        assert!((env.level(0.2, 0.0) - 0.75).abs() < EPSILON);
        assert!((env.level(1.0, 0.0) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn release_subtracts_and_floors_at_zero() {
        let env = adsr();
        assert!((env.level(1.0, 0.05) - 0.25).abs() < EPSILON);
        assert_eq!(env.level(1.0, 1.0), 0.0);
    }

    #[test]
    fn default_envelope_holds_full_level() {
        let env = Envelope::default();
        assert_eq!(env.level(0.5, 0.0), 1.0);
    }
}
