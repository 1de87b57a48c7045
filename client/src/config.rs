use serde::{Deserialize, Serialize};

/// Ticks between positional territory checks. A throttle on the (potentially
/// expensive) lookup, not a correctness knob.
pub const CHECK_INTERVAL_TICKS: u32 = 10;

/// Opacity below which a frame is not worth drawing.
pub const MIN_RENDER_OPACITY: u8 = 8;

/// Full settings snapshot for the territory title HUD.
///
/// Replaced wholesale via [`TerritoryTitles::apply_config`]: animation spans
/// and styling take effect on the next notification, the cache capacity
/// immediately.
///
/// [`TerritoryTitles::apply_config`]: crate::engine::TerritoryTitles::apply_config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    pub enabled: bool,
    /// When set, only territories in the significant set are announced;
    /// everything else is tracked silently.
    pub show_only_significant: bool,
    pub appearance: AppearanceConfig,
    pub positioning: PositioningConfig,
    pub animation: AnimationConfig,
    pub significant: SignificantStyleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Default title color as a 6-hex-digit RGB string.
    pub text_color: String,
    pub text_size: f64,
    pub subtitle_size: f64,
    pub render_shadow: bool,
    pub show_subtitles: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositioningConfig {
    pub text_x_offset: i32,
    pub text_y_offset: i32,
    pub subtitle_x_offset: i32,
    pub subtitle_y_offset: i32,
    pub center_text: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub fade_in_ticks: u32,
    pub display_ticks: u32,
    pub fade_out_ticks: u32,
    pub cooldown_ticks: u32,
    /// How many recently entered territories are remembered for
    /// re-entry suppression.
    pub recent_cache_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignificantStyleConfig {
    pub use_enhanced_styling: bool,
    pub title_size_multiplier: f64,
    pub subtitle_size_multiplier: f64,
    /// Allow per-territory colors from the localization layer.
    pub use_custom_colors: bool,
    /// Fallback color for significant territories, 6-hex-digit RGB.
    pub default_color: String,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_only_significant: true,
            appearance: AppearanceConfig::default(),
            positioning: PositioningConfig::default(),
            animation: AnimationConfig::default(),
            significant: SignificantStyleConfig::default(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            text_color: "ffffff".to_string(),
            text_size: 2.1,
            subtitle_size: 1.3,
            render_shadow: true,
            show_subtitles: true,
        }
    }
}

impl Default for PositioningConfig {
    fn default() -> Self {
        Self {
            text_x_offset: 0,
            text_y_offset: -300,
            subtitle_x_offset: 0,
            subtitle_y_offset: -240,
            center_text: true,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fade_in_ticks: 10,
            display_ticks: 50,
            fade_out_ticks: 10,
            cooldown_ticks: 80,
            recent_cache_size: 3,
        }
    }
}

impl Default for SignificantStyleConfig {
    fn default() -> Self {
        Self {
            use_enhanced_styling: true,
            title_size_multiplier: 1.2,
            subtitle_size_multiplier: 1.1,
            use_custom_colors: true,
            default_color: "ffcc00".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TitleConfig;

    #[test]
    fn defaults_match_shipped_settings() {
        let config = TitleConfig::default();
        assert!(config.enabled);
        assert!(config.show_only_significant);
        assert_eq!(config.appearance.text_color, "ffffff");
        assert_eq!(config.animation.fade_in_ticks, 10);
        assert_eq!(config.animation.display_ticks, 50);
        assert_eq!(config.animation.fade_out_ticks, 10);
        assert_eq!(config.animation.cooldown_ticks, 80);
        assert_eq!(config.animation.recent_cache_size, 3);
        assert_eq!(config.significant.default_color, "ffcc00");
    }

    #[test]
    fn deserializes_partial_config_with_defaults() {
        let config: TitleConfig =
            serde_json::from_str(r#"{"animation": {"cooldown_ticks": 200}}"#).unwrap();
        assert_eq!(config.animation.cooldown_ticks, 200);
        assert_eq!(config.animation.fade_in_ticks, 10);
        assert!(config.appearance.show_subtitles);
    }

    #[test]
    fn round_trips_through_json() {
        let config = TitleConfig {
            show_only_significant: false,
            ..TitleConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: TitleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
