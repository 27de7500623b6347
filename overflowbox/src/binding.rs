//! Two-way binding of the logical position.
//!
//! A widget holding a [`PositionSink`] writes drag-derived positions back to
//! the owner of the coordinates. Without a sink the widget is read-only: it
//! follows programmatic positions but never reports where the user dragged.
//!
//! [`PositionStore`] is a shareable store for hosts that do not already keep
//! the coordinates somewhere; [`provide_position_store`] makes one available
//! to everything built inside a closure.

use std::{cell::RefCell, sync::Arc};

use parking_lot::RwLock;

use crate::{error::OverflowboxError, position::LogicalPosition, px::Px};

/// Receives logical positions derived from user gestures.
pub trait PositionSink {
    /// Stores a new logical position.
    fn push(&mut self, position: LogicalPosition);
}

impl<F> PositionSink for F
where
    F: FnMut(LogicalPosition),
{
    fn push(&mut self, position: LogicalPosition) {
        self(position)
    }
}

/// Adapts a pair of per-axis setters into a [`PositionSink`].
///
/// ```
/// use std::{cell::Cell, rc::Rc};
///
/// use overflowbox::{AxisSetters, LogicalPosition, PositionSink, Px};
///
/// let x = Rc::new(Cell::new(Px(0)));
/// let y = Rc::new(Cell::new(Px(0)));
/// let (sx, sy) = (x.clone(), y.clone());
/// let mut sink = AxisSetters::new(move |v| sx.set(v), move |v| sy.set(v));
///
/// sink.push(LogicalPosition::new(Px(960), Px(540)));
/// assert_eq!((x.get(), y.get()), (Px(960), Px(540)));
/// ```
pub struct AxisSetters<X, Y> {
    set_x: X,
    set_y: Y,
}

impl<X, Y> AxisSetters<X, Y>
where
    X: FnMut(Px),
    Y: FnMut(Px),
{
    /// Wraps the two setters.
    pub fn new(set_x: X, set_y: Y) -> Self {
        Self { set_x, set_y }
    }
}

impl<X, Y> PositionSink for AxisSetters<X, Y>
where
    X: FnMut(Px),
    Y: FnMut(Px),
{
    fn push(&mut self, position: LogicalPosition) {
        (self.set_x)(position.x);
        (self.set_y)(position.y);
    }
}

/// Initial position of a [`PositionStore`].
pub const DEFAULT_STORE_POSITION: LogicalPosition = LogicalPosition::new(Px(50), Px(50));

/// A cloneable handle to a shared logical position.
#[derive(Debug, Clone)]
pub struct PositionStore {
    inner: Arc<RwLock<LogicalPosition>>,
}

impl Default for PositionStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_POSITION)
    }
}

impl PositionStore {
    /// Creates a store holding `position`.
    pub fn new(position: LogicalPosition) -> Self {
        Self {
            inner: Arc::new(RwLock::new(position)),
        }
    }

    /// Current position.
    pub fn get(&self) -> LogicalPosition {
        *self.inner.read()
    }

    /// Replaces the position.
    pub fn set(&self, position: LogicalPosition) {
        *self.inner.write() = position;
    }

    /// Replaces the horizontal coordinate.
    pub fn set_x(&self, x: Px) {
        self.inner.write().x = x;
    }

    /// Replaces the vertical coordinate.
    pub fn set_y(&self, y: Px) {
        self.inner.write().y = y;
    }

    /// True if both handles refer to the same store.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PositionSink for PositionStore {
    fn push(&mut self, position: LogicalPosition) {
        self.set(position);
    }
}

thread_local! {
    static STORE_STACK: RefCell<Vec<PositionStore>> = const { RefCell::new(Vec::new()) };
}

/// Makes `store` available to [`use_position_store`] for the duration of `f`.
///
/// Providers nest; the innermost store wins.
pub fn provide_position_store<F, R>(store: PositionStore, f: F) -> R
where
    F: FnOnce() -> R,
{
    STORE_STACK.with(|stack| stack.borrow_mut().push(store));
    struct StoreScopeGuard;
    impl Drop for StoreScopeGuard {
        fn drop(&mut self) {
            STORE_STACK.with(|stack| {
                let popped = stack.borrow_mut().pop();
                debug_assert!(popped.is_some(), "Position store stack underflow");
            });
        }
    }
    let _guard = StoreScopeGuard;
    f()
}

/// Returns the innermost provided store.
pub fn use_position_store() -> Result<PositionStore, OverflowboxError> {
    STORE_STACK
        .with(|stack| stack.borrow().last().cloned())
        .ok_or(OverflowboxError::MissingPositionStore)
}
