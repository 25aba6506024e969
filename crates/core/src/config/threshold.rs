use serde::{Deserialize, Serialize};

/// Inclusive `[low, high]` bounds for one HSV channel.
///
/// No ordering invariant is enforced: membership is a literal inclusive
/// range test, so `low > high` matches nothing. In particular there is no
/// hue wrap-around — a hue band of `[170, 10]` is empty, not the red arc
/// across zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelBounds {
    pub low: u8,
    pub high: u8,
}

impl ChannelBounds {
    pub fn new(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: u8) -> bool {
        self.low <= value && value <= self.high
    }
}

/// Per-channel HSV classification bounds.
///
/// Hue uses the 8-bit convention where 0-180 covers the full wheel;
/// saturation and value span 0-255.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThresholdRange {
    pub hue: ChannelBounds,
    pub saturation: ChannelBounds,
    pub value: ChannelBounds,
}

impl ThresholdRange {
    /// True when all three channels fall within their bounds
    /// simultaneously.
    pub fn contains(&self, (h, s, v): (u8, u8, u8)) -> bool {
        self.hue.contains(h) && self.saturation.contains(s) && self.value.contains(v)
    }
}

/// Reconfiguration payload: the full threshold set plus the ROI toggle.
///
/// Every field is required, so an update always replaces the live
/// configuration wholesale — there is no partial update for a concurrent
/// filter pass to observe half-applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdUpdate {
    pub hue_low: u8,
    pub hue_high: u8,
    pub saturation_low: u8,
    pub saturation_high: u8,
    pub value_low: u8,
    pub value_high: u8,
    pub use_roi: bool,
}

impl ThresholdUpdate {
    /// Parses a JSON payload. Type errors are surfaced to the caller and
    /// leave any live configuration untouched.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// The live filter configuration: threshold range plus ROI enablement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterConfig {
    pub range: ThresholdRange,
    pub use_roi: bool,
}

impl Default for FilterConfig {
    /// Startup defaults: every bound collapsed to zero and ROI off. Only
    /// pixels that are already pure black match, so an unconfigured filter
    /// passes frames through unchanged.
    fn default() -> Self {
        Self {
            range: ThresholdRange {
                hue: ChannelBounds::new(0, 0),
                saturation: ChannelBounds::new(0, 0),
                value: ChannelBounds::new(0, 0),
            },
            use_roi: false,
        }
    }
}

impl From<ThresholdUpdate> for FilterConfig {
    fn from(update: ThresholdUpdate) -> Self {
        Self {
            range: ThresholdRange {
                hue: ChannelBounds::new(update.hue_low, update.hue_high),
                saturation: ChannelBounds::new(update.saturation_low, update.saturation_high),
                value: ChannelBounds::new(update.value_low, update.value_high),
            },
            use_roi: update.use_roi,
        }
    }
}

impl From<&FilterConfig> for ThresholdUpdate {
    /// Echo form for acknowledging an applied configuration.
    fn from(config: &FilterConfig) -> Self {
        Self {
            hue_low: config.range.hue.low,
            hue_high: config.range.hue.high,
            saturation_low: config.range.saturation.low,
            saturation_high: config.range.saturation.high,
            value_low: config.range.value.low,
            value_high: config.range.value.high,
            use_roi: config.use_roi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn range(hue: (u8, u8), sat: (u8, u8), val: (u8, u8)) -> ThresholdRange {
        ThresholdRange {
            hue: ChannelBounds::new(hue.0, hue.1),
            saturation: ChannelBounds::new(sat.0, sat.1),
            value: ChannelBounds::new(val.0, val.1),
        }
    }

    // ── ChannelBounds ────────────────────────────────────────────────

    #[rstest]
    #[case::interior(50, true)]
    #[case::low_edge(10, true)]
    #[case::high_edge(100, true)]
    #[case::below(9, false)]
    #[case::above(101, false)]
    fn test_bounds_inclusive(#[case] value: u8, #[case] expected: bool) {
        let bounds = ChannelBounds::new(10, 100);
        assert_eq!(bounds.contains(value), expected);
    }

    #[test]
    fn test_inverted_bounds_match_nothing() {
        let bounds = ChannelBounds::new(170, 10);
        for v in 0..=255u8 {
            assert!(!bounds.contains(v), "value {v} should not match [170, 10]");
        }
    }

    #[test]
    fn test_collapsed_bounds_match_single_value() {
        let bounds = ChannelBounds::new(42, 42);
        assert!(bounds.contains(42));
        assert!(!bounds.contains(41));
        assert!(!bounds.contains(43));
    }

    // ── ThresholdRange ───────────────────────────────────────────────

    #[test]
    fn test_range_requires_all_three_channels() {
        let r = range((0, 10), (100, 255), (100, 255));
        assert!(r.contains((0, 255, 255)));
        assert!(!r.contains((11, 255, 255))); // hue out
        assert!(!r.contains((0, 99, 255))); // saturation out
        assert!(!r.contains((0, 255, 99))); // value out
    }

    #[test]
    fn test_inverted_hue_band_is_empty_not_wrapped() {
        // A wrap-around reading of [170, 10] would include hue 0 and 180;
        // the literal inclusive-range semantics include neither.
        let r = range((170, 10), (0, 255), (0, 255));
        assert!(!r.contains((0, 255, 255)));
        assert!(!r.contains((180, 255, 255)));
        assert!(!r.contains((90, 255, 255)));
    }

    // ── ThresholdUpdate (serde) ──────────────────────────────────────

    #[test]
    fn test_update_json_round_trip() {
        let update = ThresholdUpdate {
            hue_low: 40,
            hue_high: 90,
            saturation_low: 110,
            saturation_high: 255,
            value_low: 50,
            value_high: 255,
            use_roi: true,
        };
        let json = serde_json::to_string(&update).unwrap();
        let parsed = ThresholdUpdate::from_json(&json).unwrap();
        assert_eq!(parsed, update);
    }

    #[test]
    fn test_update_rejects_missing_field() {
        let json = r#"{"hue_low": 0, "hue_high": 10}"#;
        assert!(ThresholdUpdate::from_json(json).is_err());
    }

    #[test]
    fn test_update_rejects_wrong_type() {
        let json = r#"{
            "hue_low": "zero", "hue_high": 10,
            "saturation_low": 0, "saturation_high": 255,
            "value_low": 0, "value_high": 255,
            "use_roi": false
        }"#;
        assert!(ThresholdUpdate::from_json(json).is_err());
    }

    #[test]
    fn test_update_rejects_unknown_field() {
        let json = r#"{
            "hue_low": 0, "hue_high": 10,
            "saturation_low": 0, "saturation_high": 255,
            "value_low": 0, "value_high": 255,
            "use_roi": false, "gain": 3
        }"#;
        assert!(ThresholdUpdate::from_json(json).is_err());
    }

    #[test]
    fn test_update_accepts_inverted_bounds() {
        // Semantically odd ranges are accepted; they just match nothing.
        let json = r#"{
            "hue_low": 170, "hue_high": 10,
            "saturation_low": 0, "saturation_high": 255,
            "value_low": 0, "value_high": 255,
            "use_roi": false
        }"#;
        let update = ThresholdUpdate::from_json(json).unwrap();
        assert_eq!(update.hue_low, 170);
        assert_eq!(update.hue_high, 10);
    }

    // ── FilterConfig ─────────────────────────────────────────────────

    #[test]
    fn test_default_matches_only_black() {
        let config = FilterConfig::default();
        assert!(!config.use_roi);
        assert!(config.range.contains((0, 0, 0)));
        assert!(!config.range.contains((0, 0, 1)));
        assert!(!config.range.contains((1, 0, 0)));
    }

    #[test]
    fn test_config_update_round_trip() {
        let update = ThresholdUpdate {
            hue_low: 40,
            hue_high: 90,
            saturation_low: 110,
            saturation_high: 255,
            value_low: 50,
            value_high: 255,
            use_roi: true,
        };
        let config = FilterConfig::from(update);
        assert_eq!(config.range.hue, ChannelBounds::new(40, 90));
        assert!(config.use_roi);
        assert_eq!(ThresholdUpdate::from(&config), update);
    }
}
