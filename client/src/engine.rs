use tracing::{debug, warn};

use waymark_shared::TerritoryProfile;
use waymark_shared::colors::{WHITE, parse_hex_rgb};

use crate::cache::RecentTerritoryCache;
use crate::config::{CHECK_INTERVAL_TICKS, TitleConfig};
use crate::significant::{is_significant, locale_slug};
use crate::title::{FadeSpans, TitleFrame, TitlePayload, TitleState, TitleStyle};

/// The host's view of the world, queried on the territory-check cadence.
/// The engine never caches lookup results across checks.
pub trait WorldView {
    /// Whether a valid world context is active. When false, a tick mutates
    /// no engine state at all.
    fn in_world(&self) -> bool;

    fn player_position(&self) -> Option<[f64; 3]>;

    /// Territory containing `position`, if any. A failure here is logged and
    /// treated as "no transition this check".
    fn territory_at(&self, position: [f64; 3]) -> Result<Option<TerritoryProfile>, String>;

    /// Player-facing territory name. `None` or an empty string means the
    /// territory cannot be announced.
    fn display_name(&self, territory: &TerritoryProfile) -> Option<String>;
}

/// Localization collaborator, injected once at construction. Returns `None`
/// for keys without an entry; the engine carries English fallbacks for every
/// key it uses, so a host without localization still gets sensible text.
pub trait Localizer {
    fn localize(&self, key: &str, args: &[&str]) -> Option<String>;
}

const KEY_ENTERING_TITLE: &str = "waymark.territory.entering.title";
const KEY_ENTERING_SUBTITLE: &str = "waymark.territory.entering.subtitle";
const KEY_SIGNIFICANT_TITLE: &str = "waymark.territory.significant.title";
const KEY_SIGNIFICANT_SUBTITLE: &str = "waymark.territory.significant.subtitle";

const FALLBACK_ENTERING_SUBTITLE: &str = "The Province of Wynn";
const FALLBACK_SIGNIFICANT_SUBTITLE: &str = "A place of renown";

/// Per-territory localization key: `waymark.territory.<slug>.<field>`.
fn territory_key(slug: &str, field: &str) -> String {
    format!("waymark.territory.{slug}.{field}")
}

/// The territory title HUD engine.
///
/// The host drives it from its tick callback (`tick`, mutating) and its frame
/// callback (`frame`, read-only, any number of times between ticks). Every
/// tenth tick the player position is resolved against the territory lookup;
/// crossing into a new territory arms a fading title unless the entry was
/// recent enough to be suppressed.
pub struct TerritoryTitles<L> {
    config: TitleConfig,
    localizer: L,
    cache: RecentTerritoryCache,
    title: TitleState,
    /// Most recently observed territory, for enter/leave edge detection.
    /// `None` whenever the player stands in no territory.
    last_territory: Option<TerritoryProfile>,
    tick_counter: u32,
}

impl<L: Localizer> TerritoryTitles<L> {
    pub fn new(config: TitleConfig, localizer: L) -> Self {
        let cache = RecentTerritoryCache::new(config.animation.recent_cache_size);
        Self {
            config,
            localizer,
            cache,
            title: TitleState::new(),
            last_territory: None,
            tick_counter: 0,
        }
    }

    pub fn config(&self) -> &TitleConfig {
        &self.config
    }

    /// Replace the settings snapshot wholesale. The cache capacity applies
    /// immediately; spans and styling apply to the next notification.
    /// Disabling clears the in-flight title and the edge-detection state, but
    /// keeps the recent-entry cache for a later re-enable.
    pub fn apply_config(&mut self, config: TitleConfig) {
        self.cache.set_capacity(config.animation.recent_cache_size);
        if !config.enabled {
            self.title.clear();
            self.last_territory = None;
            self.tick_counter = 0;
        }
        self.config = config;
    }

    /// One logical game tick. Skips all work, mutating nothing, when the
    /// feature is disabled or no world is active.
    pub fn tick(&mut self, world: &impl WorldView) {
        if !self.config.enabled || !world.in_world() {
            return;
        }

        self.tick_counter += 1;
        if self.tick_counter >= CHECK_INTERVAL_TICKS {
            self.tick_counter = 0;
            self.check_territory(world);
        }

        self.title.tick();
    }

    /// The per-frame render query. `partial_ticks` is the sub-tick
    /// interpolation fraction in `[0, 1]`.
    pub fn frame(&self, partial_ticks: f32, debug_overlay: bool) -> Option<TitleFrame<'_>> {
        if !self.config.enabled {
            return None;
        }
        self.title.frame(partial_ticks, debug_overlay)
    }

    fn check_territory(&mut self, world: &impl WorldView) {
        let Some(position) = world.player_position() else {
            return;
        };

        let current = match world.territory_at(position) {
            Ok(current) => current,
            Err(error) => {
                warn!(error = %error, "territory lookup failed, skipping check");
                return;
            }
        };

        if let Some(current) = current {
            if self.last_territory.as_ref() != Some(&current) {
                self.enter_territory(world, current);
            }
        } else if self.last_territory.is_some() {
            // Left all territories; not itself worth announcing.
            self.last_territory = None;
        }
    }

    fn enter_territory(&mut self, world: &impl WorldView, current: TerritoryProfile) {
        if self.title.cooldown_active() && self.cache.contains(&current) {
            debug!(territory = %current.name, "re-entry within cooldown, suppressed");
            self.last_territory = Some(current);
            return;
        }

        let name = world.display_name(&current).unwrap_or_default();
        if name.is_empty() {
            // A nameless lookup result must not become a blank notification.
            self.last_territory = None;
            return;
        }

        if self.config.show_only_significant && !is_significant(&name) {
            self.last_territory = Some(current);
            return;
        }

        debug!(territory = %name, "announcing territory entry");
        let payload = self.build_payload(&name);
        let animation = &self.config.animation;
        let spans = FadeSpans {
            fade_in: animation.fade_in_ticks,
            display: animation.display_ticks,
            fade_out: animation.fade_out_ticks,
        };
        self.title.arm(payload, spans, animation.cooldown_ticks);
        self.last_territory = Some(current.clone());
        self.cache.add(current);
    }

    fn build_payload(&self, name: &str) -> TitlePayload {
        let significant = is_significant(name);
        let enhanced = significant && self.config.significant.use_enhanced_styling;

        let (title, subtitle, color) = if significant {
            self.significant_content(name)
        } else {
            let title = self
                .localizer
                .localize(KEY_ENTERING_TITLE, &[name])
                .unwrap_or_else(|| format!("Entering {name}"));
            let subtitle = self
                .localizer
                .localize(KEY_ENTERING_SUBTITLE, &[])
                .unwrap_or_else(|| FALLBACK_ENTERING_SUBTITLE.to_string());
            (title, subtitle, self.parse_color_or_white(&self.config.appearance.text_color))
        };

        let appearance = &self.config.appearance;
        let positioning = &self.config.positioning;
        let sig = &self.config.significant;
        let title_multiplier = if enhanced { sig.title_size_multiplier } else { 1.0 };
        let subtitle_multiplier = if enhanced { sig.subtitle_size_multiplier } else { 1.0 };

        TitlePayload {
            title,
            subtitle: appearance.show_subtitles.then_some(subtitle),
            color,
            significant,
            style: TitleStyle {
                title_scale: appearance.text_size * title_multiplier,
                subtitle_scale: appearance.subtitle_size * subtitle_multiplier,
                x_offset: positioning.text_x_offset,
                y_offset: positioning.text_y_offset,
                subtitle_x_offset: positioning.subtitle_x_offset,
                subtitle_y_offset: positioning.subtitle_y_offset,
                center_text: positioning.center_text,
                render_shadow: appearance.render_shadow,
            },
        }
    }

    /// Title, subtitle, and color for a significant territory: per-territory
    /// localization first, then the generic significant texts, then built-in
    /// English.
    fn significant_content(&self, name: &str) -> (String, String, u32) {
        let slug = locale_slug(name);

        let title = self
            .localizer
            .localize(&territory_key(&slug, "title"), &[])
            .or_else(|| self.localizer.localize(KEY_SIGNIFICANT_TITLE, &[name]))
            .unwrap_or_else(|| format!("Welcome to {name}"));
        let subtitle = self
            .localizer
            .localize(&territory_key(&slug, "subtitle"), &[])
            .or_else(|| self.localizer.localize(KEY_SIGNIFICANT_SUBTITLE, &[name]))
            .unwrap_or_else(|| FALLBACK_SIGNIFICANT_SUBTITLE.to_string());

        let significant = &self.config.significant;
        let custom_color = if significant.use_custom_colors {
            self.localizer
                .localize(&territory_key(&slug, "color"), &[])
                .and_then(|text| parse_hex_rgb(&text))
        } else {
            None
        };
        let color = custom_color.unwrap_or_else(|| {
            if significant.use_enhanced_styling {
                self.parse_color_or_white(&significant.default_color)
            } else {
                self.parse_color_or_white(&self.config.appearance.text_color)
            }
        });

        (title, subtitle, color)
    }

    fn parse_color_or_white(&self, text: &str) -> u32 {
        parse_hex_rgb(text).unwrap_or_else(|| {
            warn!(color = text, "not a valid RGB color, defaulting to white");
            WHITE
        })
    }
}
