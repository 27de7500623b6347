//! Logical positions and the controller that maps them onto native offsets.
//!
//! A logical position names the point of the content that should sit in the
//! middle of the viewport. The matching native offset is
//! `position - viewport / 2` on every live axis.

use tracing::{debug, trace};

use crate::{
    config::Axes,
    px::{Px, PxPosition, PxSize},
    surface::{ScrollBehavior, ScrollSurface},
};

/// The caller-visible center point of the viewport.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogicalPosition {
    /// Horizontal center coordinate.
    pub x: Px,
    /// Vertical center coordinate.
    pub y: Px,
}

impl LogicalPosition {
    /// Creates a logical position.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// The logical position shown by a native `offset` in a viewport of
    /// `viewport` size.
    ///
    /// ```
    /// use overflowbox::{LogicalPosition, Px, PxPosition, PxSize};
    ///
    /// let shown = LogicalPosition::from_offset(
    ///     PxPosition::new(Px(710), Px(290)),
    ///     PxSize::new(Px(500), Px(500)),
    /// );
    /// assert_eq!(shown, LogicalPosition::new(Px(960), Px(540)));
    /// ```
    pub fn from_offset(offset: PxPosition, viewport: PxSize) -> Self {
        let center = offset + viewport.half();
        Self::new(center.x, center.y)
    }

    /// The native offset that centers this position, before clamping.
    pub fn to_offset(self, viewport: PxSize) -> PxPosition {
        PxPosition::new(self.x, self.y) - viewport.half()
    }
}

impl From<PxPosition> for LogicalPosition {
    fn from(position: PxPosition) -> Self {
        Self::new(position.x, position.y)
    }
}

/// Computes the native offset that centers `position`, leaving frozen axes at
/// their `current` value.
pub fn centering_offset(
    position: LogicalPosition,
    viewport: PxSize,
    axes: Axes,
    current: PxPosition,
) -> PxPosition {
    let target = position.to_offset(viewport);
    PxPosition {
        x: if axes.x { target.x } else { current.x },
        y: if axes.y { target.y } else { current.y },
    }
}

/// Outcome of a positioning request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionWrite {
    /// The surface already shows the target; nothing was written.
    Skipped,
    /// The surface was asked to move.
    Written {
        /// Requested native offset.
        target: PxPosition,
        /// Transition used.
        behavior: ScrollBehavior,
    },
}

impl PositionWrite {
    /// True if the surface was written.
    pub fn is_written(self) -> bool {
        matches!(self, PositionWrite::Written { .. })
    }
}

/// Applies external logical positions to a surface.
///
/// The first write after mount is always instant so the initial frame is
/// already centered; later writes glide when smooth scrolling is enabled.
#[derive(Debug, Clone, Default)]
pub struct PositionController {
    positioned: bool,
}

impl PositionController {
    /// Creates a controller that has not positioned anything yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the initial positioning, e.g. after the surface is detached.
    pub fn reset(&mut self) {
        self.positioned = false;
    }

    /// Centers `position` on `surface`, skipping the write when the surface
    /// already shows the target offset.
    pub fn apply<S: ScrollSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        position: LogicalPosition,
        axes: Axes,
        smooth: bool,
    ) -> PositionWrite {
        let viewport = surface.viewport_size();
        let current = surface.scroll_offset();
        let target = centering_offset(position, viewport, axes, current);
        let behavior = if smooth && self.positioned {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        };
        self.positioned = true;

        if target == current {
            trace!(?target, "surface already centered; skipping write");
            return PositionWrite::Skipped;
        }

        debug!(?position, ?target, ?behavior, "centering surface");
        surface.set_scroll_offset(target, behavior);
        PositionWrite::Written { target, behavior }
    }
}
