//! The scrollable surface the viewport drives.
//!
//! ## Usage
//!
//! Implement [`ScrollSurface`] for whatever owns the real scroll container
//! (a DOM element, a native scroll view, a canvas with a camera) and hand it
//! to [`Overflowbox::mount`](crate::Overflowbox::mount). [`MemorySurface`] is
//! a headless implementation with browser-like clamping, used by tests and
//! demos.

use tracing::trace;

use crate::px::{Px, PxPosition, PxSize};

/// How a programmatic offset write should reach its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Jump straight to the target offset.
    #[default]
    Instant,
    /// Glide towards the target; the surface animates on its own clock.
    Smooth,
}

/// A mounted container with a readable and writable native scroll offset.
///
/// Writes that change the offset are expected to produce native scroll
/// notifications, which the host forwards to
/// [`Overflowbox::handle_scroll`](crate::Overflowbox::handle_scroll).
pub trait ScrollSurface {
    /// Current native scroll offset (`scrollLeft`, `scrollTop`).
    fn scroll_offset(&self) -> PxPosition;

    /// Requests a new native scroll offset. The surface clamps it to its own
    /// scroll bounds.
    fn set_scroll_offset(&mut self, offset: PxPosition, behavior: ScrollBehavior);

    /// Visible size of the container, measured now.
    fn viewport_size(&self) -> PxSize;

    /// Position of the container's top-left corner in page coordinates.
    fn page_origin(&self) -> PxPosition {
        PxPosition::ZERO
    }

    /// Installs or removes the listener that swallows wheel input over the
    /// container.
    fn set_wheel_interception(&mut self, _enabled: bool) {}
}

/// Clamps one axis of a scroll offset to `[0, content - viewport]`.
fn constrain_axis(offset: Px, content_len: Px, viewport_len: Px) -> Px {
    if content_len <= viewport_len {
        return Px::ZERO;
    }

    let max = content_len.saturating_sub(viewport_len);
    if offset < Px::ZERO {
        Px::ZERO
    } else if offset > max {
        max
    } else {
        offset
    }
}

fn constrain_offset(offset: PxPosition, content: PxSize, viewport: PxSize) -> PxPosition {
    PxPosition {
        x: constrain_axis(offset.x, content.width, viewport.width),
        y: constrain_axis(offset.y, content.height, viewport.height),
    }
}

/// A headless scroll container.
///
/// Offsets are clamped to the content bounds like a browser clamps
/// `scrollLeft`/`scrollTop`. Every change of the visible offset queues a
/// native scroll notification that the host drains with
/// [`take_scroll_notifications`](Self::take_scroll_notifications). Smooth
/// writes glide towards their target as [`advance`](Self::advance) is called
/// with frame timestamps.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    viewport_size: PxSize,
    content_size: PxSize,
    page_origin: PxPosition,
    /// Offset currently visible.
    offset: PxPosition,
    /// Destination of an in-flight smooth scroll.
    target: PxPosition,
    /// Glide smoothing factor (0.0 = instant, 1.0 = very smooth).
    smoothing: f32,
    last_frame_nanos: Option<u64>,
    notifications: Vec<PxPosition>,
    write_count: usize,
    wheel_intercepted: bool,
}

impl MemorySurface {
    /// Creates a surface showing `viewport_size` of a `content_size` area.
    pub fn new(viewport_size: PxSize, content_size: PxSize) -> Self {
        Self {
            viewport_size,
            content_size,
            page_origin: PxPosition::ZERO,
            offset: PxPosition::ZERO,
            target: PxPosition::ZERO,
            smoothing: 0.5,
            last_frame_nanos: None,
            notifications: Vec::new(),
            write_count: 0,
            wheel_intercepted: false,
        }
    }

    /// Places the container at `origin` in page coordinates.
    pub fn with_page_origin(mut self, origin: PxPosition) -> Self {
        self.page_origin = origin;
        self
    }

    /// Sets the glide smoothing factor used by smooth writes.
    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing.clamp(0.0, 0.99);
        self
    }

    /// Resizes the visible area, re-clamping the offset.
    pub fn resize(&mut self, viewport_size: PxSize) {
        self.viewport_size = viewport_size;
        let clamped = constrain_offset(self.offset, self.content_size, self.viewport_size);
        self.target = constrain_offset(self.target, self.content_size, self.viewport_size);
        self.show(clamped);
    }

    /// Simulates the user scrolling the container natively (scrollbar,
    /// keyboard, momentum), bypassing the viewport.
    pub fn scroll_natively(&mut self, offset: PxPosition) {
        let clamped = constrain_offset(offset, self.content_size, self.viewport_size);
        self.target = clamped;
        self.show(clamped);
    }

    /// Advances an in-flight smooth scroll to the given frame time.
    ///
    /// Returns true if the visible offset changed.
    pub fn advance(&mut self, frame_nanos: u64) -> bool {
        let delta_time = if let Some(last_frame_nanos) = self.last_frame_nanos {
            frame_nanos.saturating_sub(last_frame_nanos) as f32 / 1_000_000_000.0
        } else {
            0.016
        };
        self.last_frame_nanos = Some(frame_nanos);

        let diff_x = self.target.x.to_f32() - self.offset.x.to_f32();
        let diff_y = self.target.y.to_f32() - self.offset.y.to_f32();

        if diff_x.abs() < 1.0 && diff_y.abs() < 1.0 {
            if self.offset != self.target {
                let target = self.target;
                self.show(target);
                return true;
            }
            return false;
        }

        let movement_factor = ((1.0 - self.smoothing) * delta_time * 60.0).min(1.0);
        // Always move at least one pixel so the glide cannot stall short of
        // its target.
        let step = |diff: f32| {
            let step = (diff * movement_factor).round();
            if step == 0.0 { diff.signum() * diff.abs().min(1.0) } else { step }
        };
        let next = PxPosition {
            x: Px::saturating_from_f32(self.offset.x.to_f32() + step(diff_x)),
            y: Px::saturating_from_f32(self.offset.y.to_f32() + step(diff_y)),
        };
        let old = self.offset;
        self.show(next);
        old != self.offset
    }

    /// True while a smooth scroll has not reached its target.
    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }

    /// Drains the native scroll notifications produced since the last call,
    /// oldest first. Each entry is the offset the container moved to.
    pub fn take_scroll_notifications(&mut self) -> Vec<PxPosition> {
        std::mem::take(&mut self.notifications)
    }

    /// Number of offset writes requested through [`ScrollSurface`].
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Whether the wheel interception listener is installed.
    pub fn wheel_intercepted(&self) -> bool {
        self.wheel_intercepted
    }

    fn show(&mut self, offset: PxPosition) {
        if offset == self.offset {
            return;
        }
        self.offset = offset;
        self.notifications.push(offset);
    }
}

impl ScrollSurface for MemorySurface {
    fn scroll_offset(&self) -> PxPosition {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: PxPosition, behavior: ScrollBehavior) {
        self.write_count += 1;
        let clamped = constrain_offset(offset, self.content_size, self.viewport_size);
        trace!(?offset, ?clamped, ?behavior, "memory surface offset write");
        self.target = clamped;
        match behavior {
            ScrollBehavior::Instant => self.show(clamped),
            ScrollBehavior::Smooth => self.last_frame_nanos = None,
        }
    }

    fn viewport_size(&self) -> PxSize {
        self.viewport_size
    }

    fn page_origin(&self) -> PxPosition {
        self.page_origin
    }

    fn set_wheel_interception(&mut self, enabled: bool) {
        self.wheel_intercepted = enabled;
    }
}
