//! overflowbox is a headless draggable viewport.
//!
//! It turns any scrollable surface into a pannable window over larger
//! content: the user drags with mouse or touch, the owner of the view
//! recenters it programmatically, and lifecycle callbacks report when drags
//! and the scrolls they cause begin and end.
//!
//! # Surfaces
//!
//! The widget never draws. It reads and writes a native scroll offset through
//! the [`ScrollSurface`] trait, which hosts implement for their real scroll
//! container. [`MemorySurface`] is a ready-made headless surface.
//!
//! # Positions
//!
//! Coordinates handed to the widget are *logical*: they name the content
//! point that should sit in the middle of the viewport. A logical position of
//! `(960, 540)` in a `500x500` viewport maps to the native offset
//! `(710, 290)`.
//!
//! ```
//! use overflowbox::{
//!     LogicalPosition, MemorySurface, MediaStatus, Overflowbox, OverflowboxConfig, Px, PxPosition,
//!     PxSize, ScrollSurface,
//! };
//!
//! let surface = MemorySurface::new(PxSize::new(Px(500), Px(500)), PxSize::new(Px(1920), Px(1080)));
//! let mut viewport = Overflowbox::new(OverflowboxConfig::default());
//! viewport.mount(surface, Vec::<MediaStatus>::new());
//! viewport.set_position(LogicalPosition::new(Px(960), Px(540)));
//!
//! let offset = viewport.surface().map(|surface| surface.scroll_offset());
//! assert_eq!(offset, Some(PxPosition::new(Px(710), Px(290))));
//! ```
//!
//! # Two-way binding
//!
//! Give the widget a [`PositionSink`] and it pushes the position the user
//! dragged to back to its owner once scrolling settles. Any
//! `FnMut(LogicalPosition)` closure is a sink; [`AxisSetters`] adapts a pair
//! of per-axis setters and [`PositionStore`] is a shareable store.
//!
//! # Time
//!
//! Delayed behavior (scroll settle, press hold) is driven by the host calling
//! [`Overflowbox::tick`] with the current instant;
//! [`Overflowbox::next_deadline`] says when that next matters.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod appearance;
pub mod binding;
pub mod callbacks;
pub mod config;
pub mod error;
pub mod gesture;
pub mod input;
mod overflowbox;
pub mod position;
pub mod px;
pub mod readiness;
pub mod settle;
pub mod surface;

pub use crate::{
    appearance::Appearance,
    binding::{
        AxisSetters, DEFAULT_STORE_POSITION, PositionSink, PositionStore, provide_position_store,
        use_position_store,
    },
    callbacks::{Callbacks, Lifecycle},
    config::{
        Axes, CursorIcon, DEFAULT_PRESS_HOLD_DELAY, DEFAULT_SETTLE_DELAY, EndCallbackPolicy,
        OverflowboxConfig, Preset, PushBack,
    },
    error::OverflowboxError,
    input::{PointerEvent, PointerEventContent, WheelDisposition, WheelEvent},
    overflowbox::Overflowbox,
    position::LogicalPosition,
    px::{Px, PxPosition, PxSize},
    readiness::{MediaId, MediaOutcome, MediaStatus},
    surface::{MemorySurface, ScrollBehavior, ScrollSurface},
};
