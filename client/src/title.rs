use waymark_shared::colors::with_alpha;

use crate::config::MIN_RENDER_OPACITY;

/// Fade-in/display/fade-out spans of one notification, in ticks.
///
/// Snapshotted into [`TitleState`] at arm time so a config change mid-display
/// cannot reinterpret an in-flight timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FadeSpans {
    pub fade_in: u32,
    pub display: u32,
    pub fade_out: u32,
}

impl FadeSpans {
    pub const fn total(self) -> u32 {
        self.fade_in + self.display + self.fade_out
    }
}

/// Style values captured when a payload is built. Config replacement never
/// restyles a notification that is already on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleStyle {
    pub title_scale: f64,
    pub subtitle_scale: f64,
    pub x_offset: i32,
    pub y_offset: i32,
    pub subtitle_x_offset: i32,
    pub subtitle_y_offset: i32,
    pub center_text: bool,
    pub render_shadow: bool,
}

/// The textual/styling bundle armed for display. Replaced wholesale on each
/// notification, never partially mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct TitlePayload {
    pub title: String,
    pub subtitle: Option<String>,
    /// 24-bit RGB title color; alpha is applied per frame.
    pub color: u32,
    pub significant: bool,
    pub style: TitleStyle,
}

/// What the renderer draws for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleFrame<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    /// Packed ARGB with the frame's fade alpha applied.
    pub title_color: u32,
    pub subtitle_color: u32,
    pub opacity: u8,
    pub style: &'a TitleStyle,
}

const SUBTITLE_RGB: u32 = 0xFF_FF_FF;

/// Title display state machine.
///
/// Idle (`title_timer == 0`) → Active (`> 0`) → Idle when the timer runs out.
/// The cooldown is an orthogonal counter, not a state: it keeps running after
/// the title has faded and may outlive it.
#[derive(Debug, Default)]
pub struct TitleState {
    payload: Option<TitlePayload>,
    title_timer: u32,
    cooldown_timer: u32,
    spans: FadeSpans,
}

impl TitleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start displaying a notification. Re-arming while one is already active
    /// replaces it immediately, with no cross-fade.
    pub fn arm(&mut self, payload: TitlePayload, spans: FadeSpans, cooldown: u32) {
        self.payload = Some(payload);
        self.spans = spans;
        self.title_timer = spans.total();
        self.cooldown_timer = cooldown;
    }

    /// Advance both timers by one tick. Called unconditionally once per tick.
    pub fn tick(&mut self) {
        if self.cooldown_timer > 0 {
            self.cooldown_timer -= 1;
        }
        if self.title_timer > 0 {
            self.title_timer -= 1;
            if self.title_timer == 0 {
                self.payload = None;
            }
        }
    }

    /// Drop any in-flight notification. The cooldown keeps running so a
    /// just-announced territory stays suppressed.
    pub fn clear(&mut self) {
        self.title_timer = 0;
        self.payload = None;
    }

    pub fn is_active(&self) -> bool {
        self.title_timer > 0
    }

    pub fn cooldown_active(&self) -> bool {
        self.cooldown_timer > 0
    }

    pub fn payload(&self) -> Option<&TitlePayload> {
        self.payload.as_ref()
    }

    /// Current fade opacity, smoothed with the sub-tick fraction.
    pub fn opacity(&self, partial_ticks: f32) -> u8 {
        compute_opacity(
            self.title_timer,
            partial_ticks,
            self.spans.fade_in,
            self.spans.display,
            self.spans.fade_out,
        )
    }

    /// The per-frame render query. Returns `None` when there is nothing worth
    /// drawing: no payload, debug overlay up, or near-invisible text.
    pub fn frame(&self, partial_ticks: f32, debug_overlay: bool) -> Option<TitleFrame<'_>> {
        if debug_overlay || self.title_timer == 0 {
            return None;
        }
        let payload = self.payload.as_ref()?;
        let opacity = self.opacity(partial_ticks);
        if opacity < MIN_RENDER_OPACITY {
            return None;
        }
        Some(TitleFrame {
            title: &payload.title,
            subtitle: payload.subtitle.as_deref(),
            title_color: with_alpha(payload.color, opacity),
            subtitle_color: with_alpha(SUBTITLE_RGB, opacity),
            opacity,
            style: &payload.style,
        })
    }
}

/// Derive the fade opacity from ticks remaining until expiry.
///
/// `age = remaining - partial_ticks` counts down through three bands: fade-in
/// while `age > fade_out + display`, fade-out while `age <= fade_out`, and
/// full opacity in between. The band formulas agree at both boundaries, so
/// the fade has no visible pop.
pub fn compute_opacity(
    remaining: u32,
    partial_ticks: f32,
    fade_in: u32,
    display: u32,
    fade_out: u32,
) -> u8 {
    let age = remaining as f32 - partial_ticks;

    let opacity = if age > (fade_out + display) as f32 {
        if fade_in == 0 {
            255.0
        } else {
            let progress = fade_in as f32 - (age - (display + fade_out) as f32);
            progress.clamp(0.0, fade_in as f32) * 255.0 / fade_in as f32
        }
    } else if age <= fade_out as f32 {
        if fade_out == 0 {
            0.0
        } else {
            age.clamp(0.0, fade_out as f32) * 255.0 / fade_out as f32
        }
    } else {
        255.0
    };

    opacity.clamp(0.0, 255.0) as u8
}
