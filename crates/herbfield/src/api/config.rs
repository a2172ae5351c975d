use serde::{Deserialize, Serialize};

fn check(ok: bool, what: &str) -> Result<(), String> {
    if ok {
        Ok(())
    } else {
        Err(format!("invalid {}", what))
    }
}

/// `lo <= hi`, both finite and at least `min`.
fn check_range(range: (f32, f32), min: f32, what: &str) -> Result<(), String> {
    let (lo, hi) = range;
    check(
        lo.is_finite() && hi.is_finite() && lo >= min && lo <= hi,
        what,
    )
}

fn check_non_negative(value: f32, what: &str) -> Result<(), String> {
    check(value.is_finite() && value >= 0.0, what)
}

/// Tuning for the herb field: particles, pulses and the emblem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HerbFieldConfig {
    /// Number of herbs (default: 12).
    pub count: usize,
    /// Base size range, sampled uniformly.
    pub size_range: (f32, f32),
    /// Linear speed range in pixels per tick.
    pub speed_range: (f32, f32),
    /// Rotation speed is sampled from [-max, max] radians per tick.
    pub max_rotation_speed: f32,
    /// Alpha range of the jade fill color.
    pub alpha_range: (f32, f32),
    /// Size oscillation phase advance per tick.
    pub pulse_phase_step: f32,
    /// Distance past an edge before a herb wraps to the opposite side.
    pub wrap_margin: f32,
    /// Wall-clock period of the pulse spawn timer.
    pub spawn_interval_ms: u32,
    /// Chance that a spawn period produces a pulse.
    pub spawn_probability: f32,
    pub pulse_max_radius: f32,
    /// Pulse radius growth per frame.
    pub pulse_growth: f32,
    /// Emblem rotation per frame in radians.
    pub emblem_spin: f32,
    /// Fixed RNG seed. `None` lets the host pick one.
    pub seed: Option<u64>,
}

impl Default for HerbFieldConfig {
    fn default() -> Self {
        Self {
            count: 12,
            size_range: (6.0, 14.0),
            speed_range: (0.2, 0.8),
            max_rotation_speed: 0.0075,
            alpha_range: (0.4, 0.8),
            pulse_phase_step: 0.05,
            wrap_margin: 20.0,
            spawn_interval_ms: 1200,
            spawn_probability: 0.7,
            pulse_max_radius: 50.0,
            pulse_growth: 1.5,
            emblem_spin: 0.005,
            seed: None,
        }
    }
}

impl HerbFieldConfig {
    /// Reject values that break the field's invariants: negative sizes,
    /// pulses that never expire, a zero spawn period.
    pub fn validate(&self) -> Result<(), String> {
        check_range(self.size_range, 0.0, "herb.size_range")?;
        check_range(self.speed_range, 0.0, "herb.speed_range")?;
        check_range(self.alpha_range, 0.0, "herb.alpha_range")?;
        check(self.alpha_range.1 <= 1.0, "herb.alpha_range")?;
        check_non_negative(self.max_rotation_speed, "herb.max_rotation_speed")?;
        check_non_negative(self.pulse_phase_step, "herb.pulse_phase_step")?;
        check_non_negative(self.wrap_margin, "herb.wrap_margin")?;
        check(self.spawn_interval_ms > 0, "herb.spawn_interval_ms")?;
        check(
            (0.0..=1.0).contains(&self.spawn_probability),
            "herb.spawn_probability",
        )?;
        check(
            self.pulse_max_radius.is_finite() && self.pulse_max_radius > 0.0,
            "herb.pulse_max_radius",
        )?;
        check(
            self.pulse_growth.is_finite() && self.pulse_growth > 0.0,
            "herb.pulse_growth",
        )?;
        check(self.emblem_spin.is_finite(), "herb.emblem_spin")
    }
}

/// Tuning for the rising bubble field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleFieldConfig {
    /// Number of bubbles (default: 25).
    pub count: usize,
    pub radius_range: (f32, f32),
    /// Upward speed range in pixels per tick.
    pub speed_range: (f32, f32),
    /// Bubbles start up to this far below the bottom edge.
    pub initial_spread: f32,
    /// A bubble respawns once it is this far above the top edge.
    pub respawn_margin: f32,
    /// Respawned bubbles restart this far below the bottom edge.
    pub respawn_offset: f32,
    /// Paint the background gradient under the bubbles.
    pub background: bool,
    pub seed: Option<u64>,
}

impl Default for BubbleFieldConfig {
    fn default() -> Self {
        Self {
            count: 25,
            radius_range: (3.0, 9.0),
            speed_range: (0.5, 1.0),
            initial_spread: 200.0,
            respawn_margin: 20.0,
            respawn_offset: 10.0,
            background: false,
            seed: None,
        }
    }
}

impl BubbleFieldConfig {
    pub fn validate(&self) -> Result<(), String> {
        check_range(self.radius_range, 0.0, "bubble.radius_range")?;
        check_range(self.speed_range, 0.0, "bubble.speed_range")?;
        check_non_negative(self.initial_spread, "bubble.initial_spread")?;
        check_non_negative(self.respawn_margin, "bubble.respawn_margin")?;
        check_non_negative(self.respawn_offset, "bubble.respawn_offset")
    }
}

/// Page behavior around the canvases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page name used when the host page does not set one.
    pub default_page: String,
    /// Header gets the `scrolled` class past this vertical offset.
    pub scroll_threshold: f64,
    pub card_selector: String,
    /// Intersection-observer threshold for card reveal reports.
    pub card_threshold: f64,
    /// Initial downward offset of hidden cards.
    pub card_offset_px: f64,
    pub card_transition_s: f64,
    /// Loader starts fading after this long.
    pub loader_delay_ms: u32,
    /// Loader is removed this long after the fade starts.
    pub loader_fade_ms: u32,
    /// Source of the looping background video. `None` skips the video.
    pub video_src: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_page: "index".to_string(),
            scroll_threshold: 50.0,
            card_selector: ".card, .herb-card, .ai-panel, .upload-panel".to_string(),
            card_threshold: 0.1,
            card_offset_px: 30.0,
            card_transition_s: 0.6,
            loader_delay_ms: 1500,
            loader_fade_ms: 500,
            video_src: Some("images/bg.MP4".to_string()),
        }
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<(), String> {
        check(self.scroll_threshold.is_finite(), "page.scroll_threshold")?;
        check(
            (0.0..=1.0).contains(&self.card_threshold),
            "page.card_threshold",
        )?;
        check(
            self.card_offset_px.is_finite(),
            "page.card_offset_px",
        )?;
        check(
            self.card_transition_s.is_finite() && self.card_transition_s >= 0.0,
            "page.card_transition_s",
        )
    }
}

/// Top-level configuration for everything the decoration layer does.
/// Every field has a default, so partial JSON only overrides what it names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorConfig {
    pub herb: HerbFieldConfig,
    pub bubble: BubbleFieldConfig,
    pub page: PageConfig,
}

impl DecorConfig {
    /// Parse a configuration from a JSON string. Well-formed JSON with
    /// out-of-range values is rejected too.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        config
            .validate()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.herb.validate()?;
        self.bubble.validate()?;
        self.page.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        let config = DecorConfig::from_json("{}").unwrap();
        assert_eq!(config, DecorConfig::default());
        assert_eq!(config.herb.count, 12);
        assert_eq!(config.bubble.count, 25);
        assert_eq!(config.herb.spawn_interval_ms, 1200);
    }

    #[test]
    fn partial_override() {
        let json = r#"{
            "herb": { "count": 30, "seed": 7 },
            "page": { "scroll_threshold": 120 }
        }"#;
        let config = DecorConfig::from_json(json).unwrap();
        assert_eq!(config.herb.count, 30);
        assert_eq!(config.herb.seed, Some(7));
        assert_eq!(config.herb.size_range, (6.0, 14.0));
        assert_eq!(config.page.scroll_threshold, 120.0);
        assert_eq!(config.page.default_page, "index");
        assert_eq!(config.bubble, BubbleFieldConfig::default());
    }

    #[test]
    fn ranges_parse_from_arrays() {
        let json = r#"{ "bubble": { "radius_range": [1, 2] } }"#;
        let config = DecorConfig::from_json(json).unwrap();
        assert_eq!(config.bubble.radius_range, (1.0, 2.0));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(DecorConfig::from_json("{ herb: ").is_err());
        assert!(DecorConfig::from_json(r#"{ "herb": { "count": -1 } }"#).is_err());
    }

    #[test]
    fn defaults_are_valid() {
        assert!(DecorConfig::default().validate().is_ok());
    }

    #[test]
    fn pulses_that_never_expire_are_rejected() {
        for growth in ["0.0", "-1.5"] {
            let json = format!(r#"{{ "herb": {{ "pulse_growth": {} }} }}"#, growth);
            let err = DecorConfig::from_json(&json).unwrap_err();
            assert!(err.to_string().contains("herb.pulse_growth"), "{}", err);
        }
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let bad = [
            r#"{ "herb": { "spawn_interval_ms": 0 } }"#,
            r#"{ "herb": { "spawn_probability": 1.5 } }"#,
            r#"{ "herb": { "size_range": [14, 6] } }"#,
            r#"{ "herb": { "size_range": [-4, 6] } }"#,
            r#"{ "herb": { "pulse_max_radius": 0 } }"#,
            r#"{ "bubble": { "radius_range": [-3, 9] } }"#,
            r#"{ "bubble": { "speed_range": [1, 0.5] } }"#,
            r#"{ "page": { "card_threshold": 2 } }"#,
        ];
        for json in bad {
            assert!(DecorConfig::from_json(json).is_err(), "accepted {}", json);
        }
    }

    #[test]
    fn video_source_can_be_disabled() {
        let config = DecorConfig::from_json(r#"{ "page": { "video_src": null } }"#).unwrap();
        assert_eq!(config.page.video_src, None);
        assert_eq!(
            DecorConfig::default().page.video_src.as_deref(),
            Some("images/bg.MP4")
        );
    }
}
