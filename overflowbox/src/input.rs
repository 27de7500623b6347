//! Input events delivered by the host.
//!
//! Pointer and touch positions are page coordinates; the viewport subtracts
//! the surface's [`page_origin`](crate::ScrollSurface::page_origin) to get
//! container-relative positions. Every event carries the instant it was
//! observed so delayed behavior (press hold, scroll settle) stays
//! deterministic under test.
//!
//! ```
//! use std::time::Instant;
//!
//! use overflowbox::{PointerEvent, PointerEventContent, Px, PxPosition};
//!
//! let now = Instant::now();
//! let press = PointerEvent::pressed(now, PxPosition::new(Px(120), Px(80)));
//! assert!(matches!(press.content, PointerEventContent::Pressed(_)));
//! ```

use std::time::Instant;

use crate::px::PxPosition;

/// A pointer or touch event.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// When the event was observed.
    pub timestamp: Instant,
    /// What happened.
    pub content: PointerEventContent,
}

/// The kind of pointer or touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventContent {
    /// Primary mouse button went down at a page position.
    Pressed(PxPosition),
    /// Mouse moved to a page position.
    Moved(PxPosition),
    /// Primary mouse button went up.
    Released,
    /// The pointer entered the container.
    Entered,
    /// The pointer left the container.
    Left,
    /// A touch point started.
    TouchStart {
        /// Identifier of the touch point.
        id: u64,
        /// Page position of the touch point.
        position: PxPosition,
    },
    /// A touch point moved.
    TouchMove {
        /// Identifier of the touch point.
        id: u64,
        /// Page position of the touch point.
        position: PxPosition,
    },
    /// A touch point lifted or was cancelled.
    TouchEnd {
        /// Identifier of the touch point.
        id: u64,
    },
}

impl PointerEvent {
    /// Creates a mouse press event.
    pub fn pressed(timestamp: Instant, position: PxPosition) -> Self {
        Self {
            timestamp,
            content: PointerEventContent::Pressed(position),
        }
    }

    /// Creates a mouse move event.
    pub fn moved(timestamp: Instant, position: PxPosition) -> Self {
        Self {
            timestamp,
            content: PointerEventContent::Moved(position),
        }
    }

    /// Creates a mouse release event.
    pub fn released(timestamp: Instant) -> Self {
        Self {
            timestamp,
            content: PointerEventContent::Released,
        }
    }

    /// Creates a pointer-entered event.
    pub fn entered(timestamp: Instant) -> Self {
        Self {
            timestamp,
            content: PointerEventContent::Entered,
        }
    }

    /// Creates a pointer-left event.
    pub fn left(timestamp: Instant) -> Self {
        Self {
            timestamp,
            content: PointerEventContent::Left,
        }
    }

    /// Creates a touch start event.
    pub fn touch_start(timestamp: Instant, id: u64, position: PxPosition) -> Self {
        Self {
            timestamp,
            content: PointerEventContent::TouchStart { id, position },
        }
    }

    /// Creates a touch move event.
    pub fn touch_move(timestamp: Instant, id: u64, position: PxPosition) -> Self {
        Self {
            timestamp,
            content: PointerEventContent::TouchMove { id, position },
        }
    }

    /// Creates a touch end event.
    pub fn touch_end(timestamp: Instant, id: u64) -> Self {
        Self {
            timestamp,
            content: PointerEventContent::TouchEnd { id },
        }
    }
}

/// A mouse wheel or trackpad scroll request, before the surface applies it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// When the event was observed.
    pub timestamp: Instant,
    /// Horizontal delta.
    pub delta_x: f32,
    /// Vertical delta.
    pub delta_y: f32,
}

/// What the host should do with a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDisposition {
    /// Let the surface scroll natively.
    PassThrough,
    /// Prevent the default action; the wheel input is discarded.
    Consumed,
}
