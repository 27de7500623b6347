//! Lifecycle callbacks and the ledger that keeps them paired.
//!
//! Each callback pair (drag, move, press-hold) is an *episode*: the start
//! fires at most once, and the end fires at most once and only after its
//! start. The widget queues [`Lifecycle`] events while it updates state and
//! dispatches them afterwards, so callbacks always observe a consistent
//! widget.

use std::fmt;

use smallvec::SmallVec;
use tracing::trace;

/// A lifecycle notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// A press turned into a drag.
    DragStart,
    /// A drag finished.
    DragEnd,
    /// A gesture-driven scroll period began.
    MoveStart,
    /// A gesture-driven scroll period settled.
    MoveEnd,
    /// A press was held past the hold delay.
    Start,
    /// A held press was released.
    End,
}

/// Callback pairs tracked by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Episode {
    /// `on_drag_start` / `on_drag_end`.
    Drag,
    /// `on_move_start` / `on_move_end`.
    Move,
    /// `on_start` / `on_end`.
    Hold,
}

impl Episode {
    fn index(self) -> usize {
        match self {
            Episode::Drag => 0,
            Episode::Move => 1,
            Episode::Hold => 2,
        }
    }

    /// Start notification of this episode.
    pub fn start(self) -> Lifecycle {
        match self {
            Episode::Drag => Lifecycle::DragStart,
            Episode::Move => Lifecycle::MoveStart,
            Episode::Hold => Lifecycle::Start,
        }
    }

    /// End notification of this episode.
    pub fn end(self) -> Lifecycle {
        match self {
            Episode::Drag => Lifecycle::DragEnd,
            Episode::Move => Lifecycle::MoveEnd,
            Episode::Hold => Lifecycle::End,
        }
    }
}

/// Which episodes are currently open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EpisodeLedger {
    open: [bool; 3],
}

impl EpisodeLedger {
    /// Opens `episode`. Returns false if it was already open.
    pub fn begin(&mut self, episode: Episode) -> bool {
        !std::mem::replace(&mut self.open[episode.index()], true)
    }

    /// Closes `episode`. Returns false if it was not open.
    pub fn finish(&mut self, episode: Episode) -> bool {
        std::mem::replace(&mut self.open[episode.index()], false)
    }

    /// True while `episode` is open.
    pub fn is_open(&self, episode: Episode) -> bool {
        self.open[episode.index()]
    }

    /// Closes every episode without reporting it.
    pub fn abandon(&mut self) {
        self.open = [false; 3];
    }
}

/// Notifications queued during one event, dispatched once it is handled.
pub type Emissions = SmallVec<[Lifecycle; 4]>;

type Callback = Box<dyn FnMut()>;

/// The six optional lifecycle callbacks.
///
/// ```
/// use std::{cell::Cell, rc::Rc};
///
/// use overflowbox::{Callbacks, Lifecycle};
///
/// let drags = Rc::new(Cell::new(0));
/// let counter = drags.clone();
/// let mut callbacks = Callbacks::new().on_drag_start(move || counter.set(counter.get() + 1));
///
/// callbacks.dispatch(Lifecycle::DragStart);
/// callbacks.dispatch(Lifecycle::MoveStart);
/// assert_eq!(drags.get(), 1);
/// ```
#[derive(Default)]
pub struct Callbacks {
    on_drag_start: Option<Callback>,
    on_drag_end: Option<Callback>,
    on_move_start: Option<Callback>,
    on_move_end: Option<Callback>,
    on_start: Option<Callback>,
    on_end: Option<Callback>,
}

impl Callbacks {
    /// Creates an empty callback set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when a press becomes a drag.
    pub fn on_drag_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_drag_start = Some(Box::new(f));
        self
    }

    /// Called when a drag has fully ended.
    pub fn on_drag_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_drag_end = Some(Box::new(f));
        self
    }

    /// Called when a gesture-driven scroll period begins.
    pub fn on_move_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_move_start = Some(Box::new(f));
        self
    }

    /// Called when a gesture-driven scroll period settles.
    pub fn on_move_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_move_end = Some(Box::new(f));
        self
    }

    /// Called once a press has been held past the hold delay.
    pub fn on_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    /// Called when a held press is released.
    pub fn on_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }

    /// Invokes the callback registered for `event`, if any.
    pub fn dispatch(&mut self, event: Lifecycle) {
        let slot = match event {
            Lifecycle::DragStart => &mut self.on_drag_start,
            Lifecycle::DragEnd => &mut self.on_drag_end,
            Lifecycle::MoveStart => &mut self.on_move_start,
            Lifecycle::MoveEnd => &mut self.on_move_end,
            Lifecycle::Start => &mut self.on_start,
            Lifecycle::End => &mut self.on_end,
        };
        trace!(?event, registered = slot.is_some(), "lifecycle");
        if let Some(callback) = slot.as_mut() {
            callback();
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .field("on_move_start", &self.on_move_start.is_some())
            .field("on_move_end", &self.on_move_end.is_some())
            .field("on_start", &self.on_start.is_some())
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}
