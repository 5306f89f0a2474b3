/// Easing functions shaping normalized animation time.
///
/// Each variant maps `t in [0, 1]` to eased progress in `[0, 1]` and is
/// non-decreasing over the unit interval, so eased target distances never
/// run backwards as progress advances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    /// Constant velocity.
    #[default]
    Linear,
    /// Quadratic ease-in: slow start, accelerate.
    EaseIn,
    /// Quadratic ease-out: fast start, decelerate.
    EaseOut,
    /// Quadratic ease-in-out.
    EaseInOut,
}

impl Ease {
    /// All variants, in UI/export order.
    pub const ALL: [Ease; 4] = [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut];

    /// Apply the easing curve. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }

    /// The easing's identifier as it appears in exported snippets.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "easeIn",
            Self::EaseOut => "easeOut",
            Self::EaseInOut => "easeInOut",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_stable() {
        for ease in Ease::ALL {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn monotonic_spot_check() {
        for ease in Ease::ALL {
            let a = ease.apply(0.25);
            let b = ease.apply(0.5);
            let c = ease.apply(0.75);
            assert!(a < b);
            assert!(b < c);
        }
    }

    #[test]
    fn input_is_clamped() {
        for ease in Ease::ALL {
            assert_eq!(ease.apply(-1.0), 0.0);
            assert_eq!(ease.apply(2.0), 1.0);
        }
    }

    #[test]
    fn css_names_round_trip_through_serde() {
        for ease in Ease::ALL {
            let json = serde_json::to_string(&ease).unwrap();
            assert_eq!(json, format!("\"{}\"", ease.css_name()));
            let back: Ease = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ease);
        }
    }
}
