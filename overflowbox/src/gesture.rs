//! Pointer and touch gesture tracking.
//!
//! A [`GestureSession`] lives from press (or touch start) to release, leave
//! or touch end. It remembers where the pointer went down and which native
//! offset was showing at that moment; every later move maps the pointer's
//! displacement onto `base_offset - delta`.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::{
    config::Axes,
    px::{Px, PxPosition},
};

/// Which input device owns a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// The mouse (or pen acting as a mouse).
    Mouse,
    /// A touch point with its identifier.
    Touch(u64),
}

/// Progress of a gesture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Pointer is down but has not moved past the drag threshold.
    Pressed,
    /// Pointer has moved; the session is a drag.
    Dragging,
}

/// One continuous pointer or touch interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    /// Pointer position relative to the container at press time.
    pub origin: PxPosition,
    /// Native offset at press time.
    pub base_offset: PxPosition,
    /// Current phase.
    pub phase: GesturePhase,
    /// Device that owns the session.
    pub kind: PointerKind,
    /// When the press happened.
    pub pressed_at: Instant,
    /// Set once the press-hold delay elapsed while still pressed.
    pub held: bool,
    /// Set once a move wrote the native offset.
    pub wrote_offset: bool,
}

impl GestureSession {
    /// True once the session became a drag.
    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    /// Native offset a pointer at `position` asks for, per live axis.
    /// Frozen axes keep `current`.
    pub fn drag_target(&self, position: PxPosition, axes: Axes, current: PxPosition) -> PxPosition {
        let delta = position - self.origin;
        PxPosition {
            x: if axes.x {
                self.base_offset.x.saturating_sub(delta.x)
            } else {
                current.x
            },
            y: if axes.y {
                self.base_offset.y.saturating_sub(delta.y)
            } else {
                current.y
            },
        }
    }
}

/// Result of feeding a move event to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    /// The move does not belong to the active session (or there is none).
    Ignored,
    /// The pointer is still within the drag threshold.
    Pending,
    /// This move turned the session into a drag.
    DragEstablished,
    /// The session was already dragging.
    Dragging,
}

impl TrackOutcome {
    /// True if the move should be applied to the native offset.
    pub fn is_drag(self) -> bool {
        matches!(self, TrackOutcome::DragEstablished | TrackOutcome::Dragging)
    }
}

/// Owns the single active gesture session.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    session: Option<GestureSession>,
    drag_threshold: Px,
}

impl GestureTracker {
    /// Creates a tracker that establishes drags once the pointer travels
    /// further than `drag_threshold` from its press origin.
    pub fn new(drag_threshold: Px) -> Self {
        Self {
            session: None,
            drag_threshold,
        }
    }

    /// Updates the drag threshold for future moves.
    pub fn set_drag_threshold(&mut self, drag_threshold: Px) {
        self.drag_threshold = drag_threshold;
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// True while a session exists.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// True while the active session is dragging.
    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(GestureSession::is_dragging)
    }

    /// Opens a session. Returns false if one is already active.
    pub fn press(
        &mut self,
        kind: PointerKind,
        origin: PxPosition,
        base_offset: PxPosition,
        now: Instant,
    ) -> bool {
        if self.session.is_some() {
            trace!(?kind, "press ignored; a session is already active");
            return false;
        }
        debug!(?kind, ?origin, ?base_offset, "gesture session opened");
        self.session = Some(GestureSession {
            origin,
            base_offset,
            phase: GesturePhase::Pressed,
            kind,
            pressed_at: now,
            held: false,
            wrote_offset: false,
        });
        true
    }

    /// Feeds a move of `kind` to `position` (container-relative).
    pub fn track(&mut self, kind: PointerKind, position: PxPosition) -> TrackOutcome {
        let drag_threshold = self.drag_threshold;
        let Some(session) = self.session.as_mut().filter(|session| session.kind == kind) else {
            return TrackOutcome::Ignored;
        };

        match session.phase {
            GesturePhase::Dragging => TrackOutcome::Dragging,
            GesturePhase::Pressed => {
                let travelled = session.origin.distance_to(position);
                if travelled > drag_threshold.to_f32() {
                    debug!(travelled, "drag established");
                    session.phase = GesturePhase::Dragging;
                    TrackOutcome::DragEstablished
                } else {
                    TrackOutcome::Pending
                }
            }
        }
    }

    /// Records that the active session moved the native offset.
    pub fn mark_wrote_offset(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.wrote_offset = true;
        }
    }

    /// Returns true exactly once, when the active session has been held for
    /// `delay` without being released.
    pub fn poll_hold(&mut self, now: Instant, delay: Duration) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.held || now.saturating_duration_since(session.pressed_at) < delay {
            return false;
        }
        session.held = true;
        true
    }

    /// Closes the session owned by `kind`, returning it.
    pub fn release(&mut self, kind: PointerKind) -> Option<GestureSession> {
        if self.session.as_ref()?.kind != kind {
            return None;
        }
        let session = self.session.take();
        debug!(?kind, "gesture session closed");
        session
    }

    /// Closes whatever session is active.
    pub fn cancel(&mut self) -> Option<GestureSession> {
        self.session.take()
    }
}
