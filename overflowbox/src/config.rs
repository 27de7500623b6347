//! Widget options and presets.
//!
//! ## Usage
//!
//! Start from [`OverflowboxConfig::default`] or a [`Preset`] and adjust with
//! the generated setters.
//!
//! ```
//! use overflowbox::{OverflowboxConfig, Preset, PushBack, Px};
//!
//! let config = OverflowboxConfig::default()
//!     .width(Px(500))
//!     .height(Px(500))
//!     .smooth_scrolling(true);
//! assert!(config.enabled_axes().any());
//!
//! let preset: OverflowboxConfig = "two-way".parse::<Preset>().unwrap().into();
//! assert_eq!(preset.push_back, PushBack::Coalesced);
//! ```

use std::{fmt, str::FromStr, time::Duration};

use derive_setters::Setters;

use crate::{error::OverflowboxError, px::Px};

/// Quiet period after the last native scroll event before the surface counts
/// as settled.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// How long a press must be held before `on_start` fires.
pub const DEFAULT_PRESS_HOLD_DELAY: Duration = Duration::from_millis(250);

/// Pointer cursor shown over the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CursorIcon {
    /// Platform default arrow.
    Default,
    /// Pointing hand.
    Pointer,
    /// Open hand.
    #[default]
    Grab,
    /// Closed hand.
    Grabbing,
    /// Four-way arrow.
    Move,
    /// Scroll in all directions.
    AllScroll,
    /// Interaction is unavailable.
    NotAllowed,
}

impl CursorIcon {
    /// CSS keyword for this cursor.
    pub fn as_css(self) -> &'static str {
        match self {
            CursorIcon::Default => "default",
            CursorIcon::Pointer => "pointer",
            CursorIcon::Grab => "grab",
            CursorIcon::Grabbing => "grabbing",
            CursorIcon::Move => "move",
            CursorIcon::AllScroll => "all-scroll",
            CursorIcon::NotAllowed => "not-allowed",
        }
    }
}

/// When coordinates derived from pointer drags are pushed back to the
/// external owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PushBack {
    /// Once per episode, when scrolling settles.
    #[default]
    Coalesced,
    /// After every move event that wrote the native offset.
    PerMove,
}

/// Whether end callbacks still fire when `disable` is set at release time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EndCallbackPolicy {
    /// Every start is paired with its end.
    #[default]
    Symmetric,
    /// End callbacks are skipped while the widget is disabled.
    SuppressWhenDisabled,
}

/// Axes that pointer drags and programmatic centering may move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axes {
    /// Horizontal axis is live.
    pub x: bool,
    /// Vertical axis is live.
    pub y: bool,
}

impl Axes {
    /// True if at least one axis is live.
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Options for an [`Overflowbox`](crate::Overflowbox).
#[derive(Debug, Clone, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverflowboxConfig {
    /// Fixed container width. `None` leaves sizing to the host.
    #[setters(strip_option)]
    pub width: Option<Px>,
    /// Fixed container height. `None` leaves sizing to the host.
    #[setters(strip_option)]
    pub height: Option<Px>,
    /// Suppresses all pointer-driven interaction.
    pub disable: bool,
    /// Freezes the horizontal axis.
    pub disable_x: bool,
    /// Freezes the vertical axis.
    pub disable_y: bool,
    /// Swallows wheel input while the pointer is over the surface.
    pub disable_scroll_wheel: bool,
    /// Shows the native scrollbar affordance.
    pub show_scrollbar: bool,
    /// Animates programmatic repositioning after the first one.
    pub smooth_scrolling: bool,
    /// Cursor while idle.
    pub cursor: CursorIcon,
    /// Cursor while pressed or dragging.
    pub grab_cursor: CursorIcon,
    /// Extra class names passed through to the container.
    #[setters(into)]
    pub class_name: String,
    /// Hides children until the readiness gate opens.
    pub hide_until_ready: bool,
    /// Distance the pointer must travel from the press origin before a drag
    /// is established.
    pub drag_threshold: Px,
    /// Quiet period that ends a scroll episode.
    pub settle_delay: Duration,
    /// Hold time before `on_start` fires.
    pub press_hold_delay: Duration,
    /// Cadence of coordinate push-back in two-way mode.
    pub push_back: PushBack,
    /// End callback behavior while disabled.
    pub end_callback_policy: EndCallbackPolicy,
}

impl Default for OverflowboxConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            disable: false,
            disable_x: false,
            disable_y: false,
            disable_scroll_wheel: false,
            show_scrollbar: false,
            smooth_scrolling: false,
            cursor: CursorIcon::Grab,
            grab_cursor: CursorIcon::Grabbing,
            class_name: String::new(),
            hide_until_ready: false,
            drag_threshold: Px::ZERO,
            settle_delay: DEFAULT_SETTLE_DELAY,
            press_hold_delay: DEFAULT_PRESS_HOLD_DELAY,
            push_back: PushBack::Coalesced,
            end_callback_policy: EndCallbackPolicy::Symmetric,
        }
    }
}

impl OverflowboxConfig {
    /// Axes that are not frozen.
    pub fn enabled_axes(&self) -> Axes {
        Axes {
            x: !self.disable_x,
            y: !self.disable_y,
        }
    }

    /// Whether a new gesture session may start.
    pub fn accepts_gestures(&self) -> bool {
        !self.disable && self.enabled_axes().any()
    }
}

/// Named configurations covering the common ways the widget is wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Programmatic positioning only, no push-back expected.
    ReadOnly,
    /// Two-way binding with push-back at settle.
    TwoWay,
    /// Two-way binding with animated programmatic moves.
    SmoothTwoWay,
    /// Two-way binding with per-move push-back.
    Live,
    /// Only the horizontal axis moves.
    HorizontalOnly,
    /// Only the vertical axis moves.
    VerticalOnly,
    /// Interaction disabled, wheel swallowed.
    Locked,
}

impl Preset {
    /// All presets, in declaration order.
    pub const ALL: [Preset; 7] = [
        Preset::ReadOnly,
        Preset::TwoWay,
        Preset::SmoothTwoWay,
        Preset::Live,
        Preset::HorizontalOnly,
        Preset::VerticalOnly,
        Preset::Locked,
    ];

    /// Kebab-case name of the preset.
    pub fn name(self) -> &'static str {
        match self {
            Preset::ReadOnly => "read-only",
            Preset::TwoWay => "two-way",
            Preset::SmoothTwoWay => "smooth-two-way",
            Preset::Live => "live",
            Preset::HorizontalOnly => "horizontal-only",
            Preset::VerticalOnly => "vertical-only",
            Preset::Locked => "locked",
        }
    }

    /// Builds the configuration for this preset.
    pub fn config(self) -> OverflowboxConfig {
        let base = OverflowboxConfig::default();
        match self {
            Preset::ReadOnly | Preset::TwoWay => base,
            Preset::SmoothTwoWay => base.smooth_scrolling(true),
            Preset::Live => base.push_back(PushBack::PerMove),
            Preset::HorizontalOnly => base.disable_y(true),
            Preset::VerticalOnly => base.disable_x(true),
            Preset::Locked => base
                .disable(true)
                .disable_scroll_wheel(true)
                .cursor(CursorIcon::NotAllowed)
                .grab_cursor(CursorIcon::NotAllowed),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = OverflowboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| OverflowboxError::UnknownPreset(s.to_owned()))
    }
}

impl From<Preset> for OverflowboxConfig {
    fn from(preset: Preset) -> Self {
        preset.config()
    }
}
