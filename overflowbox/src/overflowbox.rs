//! The draggable viewport widget.
//!
//! ## Usage
//!
//! Create an [`Overflowbox`], mount it on a [`ScrollSurface`], then forward
//! host events to it: pointer and touch input to
//! [`handle_pointer`](Overflowbox::handle_pointer), native scroll
//! notifications to [`handle_scroll`](Overflowbox::handle_scroll), wheel
//! input to [`handle_wheel`](Overflowbox::handle_wheel), and the clock to
//! [`tick`](Overflowbox::tick).
//!
//! ```
//! use std::time::Instant;
//!
//! use overflowbox::{
//!     LogicalPosition, MemorySurface, MediaStatus, Overflowbox, OverflowboxConfig,
//!     PointerEvent, Px, PxPosition, PxSize, ScrollSurface,
//! };
//!
//! let surface = MemorySurface::new(PxSize::new(Px(500), Px(500)), PxSize::new(Px(1920), Px(1080)));
//! let mut viewport = Overflowbox::new(OverflowboxConfig::default())
//!     .with_position(LogicalPosition::new(Px(960), Px(540)));
//! viewport.mount(surface, Vec::<MediaStatus>::new());
//!
//! let t0 = Instant::now();
//! viewport.handle_pointer(PointerEvent::pressed(t0, PxPosition::new(Px(100), Px(100))));
//! viewport.handle_pointer(PointerEvent::moved(t0, PxPosition::new(Px(60), Px(90))));
//! viewport.handle_pointer(PointerEvent::released(t0));
//!
//! let offset = viewport.surface().map(|surface| surface.scroll_offset());
//! assert_eq!(offset, Some(PxPosition::new(Px(750), Px(300))));
//! ```

use std::time::Instant;

use tracing::{debug, trace};

use crate::{
    appearance::Appearance,
    binding::PositionSink,
    callbacks::{Callbacks, Emissions, Episode, EpisodeLedger, Lifecycle},
    config::{EndCallbackPolicy, OverflowboxConfig, PushBack},
    gesture::{GestureTracker, PointerKind},
    input::{PointerEvent, PointerEventContent, WheelDisposition, WheelEvent},
    position::{LogicalPosition, PositionController, PositionWrite},
    px::PxPosition,
    readiness::{MediaId, MediaOutcome, MediaStatus, ReadinessGate},
    settle::{ScrollActivity, ScrollSettleDetector},
    surface::{ScrollBehavior, ScrollSurface},
};

/// The wheel interception listener, attached to the surface only while
/// wanted and always removed on teardown.
#[derive(Debug, Default)]
struct ListenerSlot {
    attached: bool,
}

impl ListenerSlot {
    fn sync<S: ScrollSurface>(&mut self, surface: &mut S, wanted: bool) {
        if self.attached == wanted {
            return;
        }
        debug!(attached = wanted, "wheel interception listener");
        surface.set_wheel_interception(wanted);
        self.attached = wanted;
    }

    fn detach<S: ScrollSurface>(&mut self, surface: &mut S) {
        self.sync(surface, false);
    }
}

/// A viewport whose scroll offset follows both pointer drags and an
/// externally owned center coordinate.
pub struct Overflowbox<S: ScrollSurface> {
    config: OverflowboxConfig,
    callbacks: Callbacks,
    sink: Option<Box<dyn PositionSink>>,
    surface: Option<S>,
    /// Latest logical position known to the external owner.
    position: LogicalPosition,
    /// An external position arrived while it could not be applied.
    deferred: bool,
    controller: PositionController,
    readiness: ReadinessGate,
    tracker: GestureTracker,
    settle: ScrollSettleDetector,
    ledger: EpisodeLedger,
    /// A drag was released while its scroll period had not settled yet.
    drag_end_pending: bool,
    pointer_over: bool,
    wheel_listener: ListenerSlot,
}

impl<S: ScrollSurface> Overflowbox<S> {
    /// Creates an unmounted widget.
    pub fn new(config: OverflowboxConfig) -> Self {
        Self {
            tracker: GestureTracker::new(config.drag_threshold),
            settle: ScrollSettleDetector::new(config.settle_delay),
            config,
            callbacks: Callbacks::new(),
            sink: None,
            surface: None,
            position: LogicalPosition::default(),
            deferred: false,
            controller: PositionController::new(),
            readiness: ReadinessGate::new(),
            ledger: EpisodeLedger::default(),
            drag_end_pending: false,
            pointer_over: false,
            wheel_listener: ListenerSlot::default(),
        }
    }

    /// Sets the initial logical position.
    pub fn with_position(mut self, position: LogicalPosition) -> Self {
        self.position = position;
        self
    }

    /// Installs the lifecycle callbacks.
    pub fn with_callbacks(mut self, callbacks: Callbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Enables two-way binding through `sink`.
    pub fn with_sink(mut self, sink: impl PositionSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Replaces or removes the two-way binding.
    pub fn set_sink(&mut self, sink: Option<Box<dyn PositionSink>>) {
        self.sink = sink;
    }

    /// Current options.
    pub fn config(&self) -> &OverflowboxConfig {
        &self.config
    }

    /// Latest logical position known to the widget.
    pub fn position(&self) -> LogicalPosition {
        self.position
    }

    /// The mounted surface.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// The mounted surface, mutably. Hosts use this to drive the surface's
    /// own clock; offset writes made through it bypass the widget.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// True once mounted and every embedded media item has resolved.
    pub fn is_ready(&self) -> bool {
        self.surface.is_some() && self.readiness.is_ready()
    }

    /// True while a gesture session exists.
    pub fn is_pressed(&self) -> bool {
        self.tracker.is_active()
    }

    /// True while the gesture session is dragging.
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// True between a native scroll event and its settle.
    pub fn is_scrolling(&self) -> bool {
        self.settle.is_scrolling()
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let hold = self
            .tracker
            .session()
            .filter(|session| !session.held)
            .map(|session| session.pressed_at + self.config.press_hold_delay);
        match (self.settle.deadline(), hold) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Presentation state for the host.
    pub fn appearance(&self) -> Appearance {
        let disabled = !self.config.accepts_gestures();
        let pressed = self.tracker.is_active();
        Appearance {
            hide_scroll: !self.config.show_scrollbar,
            is_dragging: pressed,
            disabled,
            cursor: if pressed {
                self.config.grab_cursor
            } else {
                self.config.cursor
            },
            children_visible: !self.config.hide_until_ready || self.is_ready(),
            width: self.config.width,
            height: self.config.height,
            class_name: self.config.class_name.clone(),
        }
    }

    /// Attaches the widget to `surface` containing `media`.
    ///
    /// With no pending media the surface is centered before this returns.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn mount(&mut self, surface: S, media: impl IntoIterator<Item = MediaStatus>) {
        if self.surface.is_some() {
            self.unmount();
        }
        self.surface = Some(surface);
        self.sync_wheel_listener();
        if self.readiness.mount(media) {
            self.on_ready();
        }
    }

    /// Reports the outcome of a pending media item.
    pub fn media_resolved(&mut self, id: MediaId, outcome: MediaOutcome) {
        if self.surface.is_none() {
            return;
        }
        if self.readiness.resolve(id, outcome) {
            self.on_ready();
        } else {
            trace!(pending = self.readiness.pending_count(), "still waiting for media");
        }
    }

    /// Detaches the surface, cancelling pending timers and listeners.
    ///
    /// No callback fires after this returns.
    pub fn unmount(&mut self) -> Option<S> {
        let mut surface = self.surface.take()?;
        self.wheel_listener.detach(&mut surface);
        self.settle.cancel();
        self.tracker.cancel();
        self.ledger.abandon();
        self.readiness.reset();
        self.controller.reset();
        self.drag_end_pending = false;
        self.pointer_over = false;
        debug!("unmounted");
        Some(surface)
    }

    /// Sets the externally owned logical position.
    ///
    /// Applied immediately when the widget is ready and no gesture owns the
    /// surface; otherwise remembered and applied once the gesture and its
    /// scrolling have finished.
    pub fn set_position(&mut self, position: LogicalPosition) {
        self.position = position;
        if !self.is_ready() || self.tracker.is_active() || self.settle.is_attributed() {
            trace!(?position, "deferring external position");
            self.deferred = true;
            return;
        }
        self.deferred = false;
        self.apply_position();
    }

    /// Replaces the options.
    pub fn set_config(&mut self, config: OverflowboxConfig) {
        self.tracker.set_drag_threshold(config.drag_threshold);
        self.settle.set_delay(config.settle_delay);
        self.config = config;
        self.sync_wheel_listener();
    }

    /// Edits the options in place.
    pub fn update_config(&mut self, edit: impl FnOnce(&mut OverflowboxConfig)) {
        let mut config = self.config.clone();
        edit(&mut config);
        self.set_config(config);
    }

    /// Handles a pointer or touch event.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let mut emissions = Emissions::new();
        let now = event.timestamp;
        match event.content {
            PointerEventContent::Pressed(position) => {
                self.press(PointerKind::Mouse, position, now, &mut emissions)
            }
            PointerEventContent::Moved(position) => {
                self.drag(PointerKind::Mouse, position, &mut emissions)
            }
            PointerEventContent::Released => self.release(PointerKind::Mouse, now, &mut emissions),
            PointerEventContent::Entered => self.pointer_over = true,
            PointerEventContent::Left => {
                self.pointer_over = false;
                self.release(PointerKind::Mouse, now, &mut emissions);
            }
            PointerEventContent::TouchStart { id, position } => {
                self.press(PointerKind::Touch(id), position, now, &mut emissions)
            }
            PointerEventContent::TouchMove { id, position } => {
                self.drag(PointerKind::Touch(id), position, &mut emissions)
            }
            PointerEventContent::TouchEnd { id } => {
                self.release(PointerKind::Touch(id), now, &mut emissions)
            }
        }
        self.flush(emissions);
    }

    /// Handles a native scroll notification from the surface.
    pub fn handle_scroll(&mut self, now: Instant) {
        if self.surface.is_none() {
            return;
        }
        let mut emissions = Emissions::new();
        if self.settle.on_scroll(now, self.tracker.is_active()) == ScrollActivity::MoveStarted
            && self.ledger.begin(Episode::Move)
        {
            emissions.push(Lifecycle::MoveStart);
        }
        self.flush(emissions);
    }

    /// Decides whether wheel input over the surface may scroll it.
    pub fn handle_wheel(&self, event: WheelEvent) -> WheelDisposition {
        if self.wheel_listener.attached && self.pointer_over {
            trace!(dx = event.delta_x, dy = event.delta_y, "wheel input consumed");
            WheelDisposition::Consumed
        } else {
            WheelDisposition::PassThrough
        }
    }

    /// Fires any delayed action due at `now`: the press-hold start and the
    /// scroll settle.
    pub fn tick(&mut self, now: Instant) {
        if self.surface.is_none() {
            return;
        }
        let mut emissions = Emissions::new();

        if self.tracker.poll_hold(now, self.config.press_hold_delay)
            && self.ledger.begin(Episode::Hold)
        {
            emissions.push(Lifecycle::Start);
        }

        if let Some(settled) = self.settle.poll(now) {
            // A position set by the owner during the gesture replaces the
            // dragged one instead of being overwritten by it.
            let owner_pending = self.deferred;
            if settled.attributed {
                if !owner_pending {
                    self.push_position();
                }
                self.close(Episode::Move, &mut emissions);
            }
            if std::mem::take(&mut self.drag_end_pending) {
                self.close(Episode::Drag, &mut emissions);
            }
            if owner_pending && self.is_ready() && !self.tracker.is_active() {
                self.deferred = false;
                self.apply_position();
            }
        }

        self.flush(emissions);
    }

    fn on_ready(&mut self) {
        debug!(position = ?self.position, "ready; initial positioning");
        self.deferred = false;
        self.apply_position();
    }

    fn apply_position(&mut self) -> PositionWrite {
        let Some(surface) = self.surface.as_mut() else {
            return PositionWrite::Skipped;
        };
        self.controller.apply(
            surface,
            self.position,
            self.config.enabled_axes(),
            self.config.smooth_scrolling,
        )
    }

    fn sync_wheel_listener(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            self.wheel_listener
                .sync(surface, self.config.disable_scroll_wheel);
        }
    }

    fn press(
        &mut self,
        kind: PointerKind,
        page_position: PxPosition,
        now: Instant,
        emissions: &mut Emissions,
    ) {
        if !self.config.accepts_gestures() {
            trace!(?kind, "press ignored; gestures disabled");
            return;
        }
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        let origin = page_position - surface.page_origin();
        if !self
            .tracker
            .press(kind, origin, surface.scroll_offset(), now)
        {
            return;
        }
        // The previous drag is over once a new session opens, even if its
        // scrolling has not settled yet.
        if std::mem::take(&mut self.drag_end_pending) {
            self.close(Episode::Drag, emissions);
        }
    }

    fn drag(&mut self, kind: PointerKind, page_position: PxPosition, emissions: &mut Emissions) {
        if self.config.disable {
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let position = page_position - surface.page_origin();
        let outcome = self.tracker.track(kind, position);
        if !outcome.is_drag() {
            return;
        }
        if self.ledger.begin(Episode::Drag) {
            emissions.push(Lifecycle::DragStart);
        }

        let Some(session) = self.tracker.session() else {
            return;
        };
        let current = surface.scroll_offset();
        let target = session.drag_target(position, self.config.enabled_axes(), current);
        if target == current {
            return;
        }
        trace!(?target, "drag write");
        surface.set_scroll_offset(target, ScrollBehavior::Instant);
        self.tracker.mark_wrote_offset();

        if self.config.push_back == PushBack::PerMove {
            self.push_position();
        }
    }

    fn release(&mut self, kind: PointerKind, now: Instant, emissions: &mut Emissions) {
        let Some(session) = self.tracker.release(kind) else {
            return;
        };

        if session.held {
            self.close(Episode::Hold, emissions);
        }

        if self.deferred {
            // The owner moved the viewport during the gesture; reconcile now
            // or once the gesture's scrolling settles.
            if self.is_ready() && !self.settle.is_attributed() {
                self.deferred = false;
                self.apply_position();
            }
        } else if session.wrote_offset {
            self.settle.adopt_trailing(now);
            if !self.settle.is_scrolling() {
                self.push_position();
            }
        }

        if session.is_dragging() {
            if self.settle.is_attributed() {
                self.drag_end_pending = true;
            } else {
                self.close(Episode::Drag, emissions);
            }
        }
    }

    /// Pushes the position currently shown by the surface to the sink.
    fn push_position(&mut self) {
        let (Some(surface), Some(sink)) = (self.surface.as_ref(), self.sink.as_mut()) else {
            return;
        };
        let shown = LogicalPosition::from_offset(surface.scroll_offset(), surface.viewport_size());
        let axes = self.config.enabled_axes();
        let derived = LogicalPosition::new(
            if axes.x { shown.x } else { self.position.x },
            if axes.y { shown.y } else { self.position.y },
        );
        if derived == self.position {
            return;
        }
        debug!(?derived, "pushing position to owner");
        self.position = derived;
        sink.push(derived);
    }

    fn close(&mut self, episode: Episode, emissions: &mut Emissions) {
        if !self.ledger.finish(episode) {
            return;
        }
        if self.config.end_callback_policy == EndCallbackPolicy::SuppressWhenDisabled
            && self.config.disable
        {
            trace!(?episode, "end callback suppressed while disabled");
            return;
        }
        emissions.push(episode.end());
    }

    fn flush(&mut self, emissions: Emissions) {
        for event in emissions {
            self.callbacks.dispatch(event);
        }
    }
}

impl<S: ScrollSurface> Drop for Overflowbox<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<S: ScrollSurface> std::fmt::Debug for Overflowbox<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overflowbox")
            .field("config", &self.config)
            .field("position", &self.position)
            .field("mounted", &self.surface.is_some())
            .field("ready", &self.is_ready())
            .field("session", &self.tracker.session())
            .field("scrolling", &self.settle.is_scrolling())
            .field("two_way", &self.sink.is_some())
            .finish()
    }
}
