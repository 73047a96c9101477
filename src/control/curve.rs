/// Piecewise-linear response curve, evaluated from a note's onset.
///
/// Keys are (time, value) pairs kept sorted by time; evaluation holds the
/// first and last key values outside the covered range.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResponseCurve {
    keys: Vec<(f32, f32)>,
}

impl ResponseCurve {
    /// Build a curve from (time, value) keys, sorting them by time.
    pub fn new(mut keys: Vec<(f32, f32)>) -> Self {
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { keys }
    }

    /// The curve's keys, in time order.
    pub fn keys(&self) -> &[(f32, f32)] {
        &self.keys
    }

    /// Curve value at `t`; 0 for an empty curve.
    pub fn evaluate(&self, t: f32) -> f32 {
        let (Some(&(first_t, first_v)), Some(&(last_t, last_v))) =
            (self.keys.first(), self.keys.last())
        else {
            return 0.0;
        };

        if t <= first_t {
            return first_v;
        }
        if t >= last_t {
            return last_v;
        }

        for pair in self.keys.windows(2) {
            let (t0, v0) = pair[0];
            let (t1, v1) = pair[1];
            if t < t1 {
                let span = t1 - t0;
                if span <= 0.0 {
                    return v1;
                }
                return v0 + (v1 - v0) * ((t - t0) / span);
            }
        }

        last_v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_between_keys() {
        let curve = ResponseCurve::new(vec![(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(curve.evaluate(0.5), 0.5);
        assert_eq!(curve.evaluate(0.25), 0.25);
    }

    #[test]
    fn holds_end_values_outside_the_range() {
        let curve = ResponseCurve::new(vec![(0.0, 1.0), (0.5, 0.0)]);
        assert_eq!(curve.evaluate(-1.0), 1.0);
        assert_eq!(curve.evaluate(2.0), 0.0);
    }

    #[test]
    fn keys_are_sorted_on_construction() {
        let curve = ResponseCurve::new(vec![(1.0, 1.0), (0.0, 0.0)]);
        assert_eq!(curve.keys()[0], (0.0, 0.0));
        assert_eq!(curve.evaluate(0.5), 0.5);
    }

    #[test]
    fn empty_curve_is_silent() {
        assert_eq!(ResponseCurve::default().evaluate(0.5), 0.0);
    }
}
