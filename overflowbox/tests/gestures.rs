use std::{
    cell::RefCell,
    rc::Rc,
    time::{Duration, Instant},
};

use overflowbox::{
    Callbacks, CursorIcon, EndCallbackPolicy, Lifecycle, LogicalPosition, MediaId, MediaOutcome,
    MediaStatus, MemorySurface, Overflowbox, OverflowboxConfig, PointerEvent, PositionStore,
    Preset, Px, PxPosition, PxSize, ScrollSurface, WheelDisposition, WheelEvent,
};

type Log = Rc<RefCell<Vec<Lifecycle>>>;

fn pos(x: i32, y: i32) -> PxPosition {
    PxPosition::new(Px(x), Px(y))
}

fn logical(x: i32, y: i32) -> LogicalPosition {
    LogicalPosition::new(Px(x), Px(y))
}

fn ms(base: Instant, millis: u64) -> Instant {
    base + Duration::from_millis(millis)
}

fn surface() -> MemorySurface {
    MemorySurface::new(PxSize::new(Px(500), Px(500)), PxSize::new(Px(1920), Px(1080)))
}

fn recording_callbacks(log: &Log) -> Callbacks {
    let record = |event: Lifecycle| {
        let log = log.clone();
        move || log.borrow_mut().push(event)
    };
    Callbacks::new()
        .on_drag_start(record(Lifecycle::DragStart))
        .on_drag_end(record(Lifecycle::DragEnd))
        .on_move_start(record(Lifecycle::MoveStart))
        .on_move_end(record(Lifecycle::MoveEnd))
        .on_start(record(Lifecycle::Start))
        .on_end(record(Lifecycle::End))
}

/// Builds a mounted viewport centered on (960, 540).
fn viewport(config: OverflowboxConfig, log: &Log) -> Overflowbox<MemorySurface> {
    let mut viewport = Overflowbox::new(config)
        .with_position(logical(960, 540))
        .with_callbacks(recording_callbacks(log));
    viewport.mount(surface(), Vec::<MediaStatus>::new());
    // Drop the notifications of the initial positioning.
    if let Some(surface) = viewport.surface_mut() {
        surface.take_scroll_notifications();
    }
    viewport
}

/// Forwards the surface's pending native scroll notifications.
fn pump(viewport: &mut Overflowbox<MemorySurface>, now: Instant) {
    let pending = viewport
        .surface_mut()
        .map(|surface| surface.take_scroll_notifications().len())
        .unwrap_or_default();
    for _ in 0..pending {
        viewport.handle_scroll(now);
    }
}

fn offset(viewport: &Overflowbox<MemorySurface>) -> PxPosition {
    viewport
        .surface()
        .map(|surface| surface.scroll_offset())
        .unwrap_or_default()
}

#[test]
fn test_initial_centering() {
    let log = Log::default();
    let viewport = viewport(OverflowboxConfig::default(), &log);
    assert!(viewport.is_ready());
    assert_eq!(offset(&viewport), pos(710, 290));
    assert!(log.borrow().is_empty());
}

#[test]
fn test_centering_clamps_at_origin() {
    let log = Log::default();
    let mut viewport = viewport(OverflowboxConfig::default(), &log);
    viewport.set_position(logical(0, 0));
    assert_eq!(offset(&viewport), pos(0, 0));
}

#[test]
fn test_drag_offset_is_base_minus_delta() {
    let log = Log::default();
    let mut viewport = viewport(OverflowboxConfig::default(), &log);
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(ms(t0, 10), pos(60, 90)));
    assert_eq!(offset(&viewport), pos(750, 300));

    viewport.handle_pointer(PointerEvent::moved(ms(t0, 20), pos(120, 130)));
    assert_eq!(offset(&viewport), pos(690, 260));

    // The surface clamps what the drag asks for.
    viewport.handle_pointer(PointerEvent::moved(ms(t0, 30), pos(-2000, 100)));
    assert_eq!(offset(&viewport), pos(1420, 290));
}

#[test]
fn test_page_origin_does_not_shift_drag() {
    let log = Log::default();
    let mut viewport = Overflowbox::new(OverflowboxConfig::default())
        .with_position(logical(960, 540))
        .with_callbacks(recording_callbacks(&log));
    viewport.mount(surface().with_page_origin(pos(300, 200)), Vec::<MediaStatus>::new());
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(400, 300)));
    viewport.handle_pointer(PointerEvent::moved(t0, pos(360, 290)));
    assert_eq!(offset(&viewport), pos(750, 300));
}

#[test]
fn test_frozen_axis_never_moves() {
    let log = Log::default();
    let mut viewport = viewport(Preset::HorizontalOnly.config(), &log);
    assert_eq!(offset(&viewport), pos(710, 0));

    let t0 = Instant::now();
    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(t0, pos(60, 20)));
    assert_eq!(offset(&viewport), pos(750, 0));

    viewport.handle_pointer(PointerEvent::released(t0));
    viewport.set_position(logical(300, 900));
    assert_eq!(offset(&viewport), pos(50, 0));
}

#[test]
fn test_both_axes_frozen_rejects_presses() {
    let log = Log::default();
    let config = OverflowboxConfig::default().disable_x(true).disable_y(true);
    let mut viewport = viewport(config, &log);
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(t0, pos(0, 0)));
    assert!(!viewport.is_pressed());
    assert_eq!(offset(&viewport), pos(0, 0));
    assert!(viewport.appearance().disabled);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_drag_lifecycle_order() {
    let log = Log::default();
    let mut viewport = viewport(OverflowboxConfig::default(), &log);
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(ms(t0, 10), pos(90, 100)));
    pump(&mut viewport, ms(t0, 10));
    viewport.handle_pointer(PointerEvent::moved(ms(t0, 20), pos(80, 100)));
    pump(&mut viewport, ms(t0, 20));
    viewport.handle_pointer(PointerEvent::released(ms(t0, 30)));

    assert_eq!(*log.borrow(), vec![Lifecycle::DragStart, Lifecycle::MoveStart]);
    assert!(viewport.is_scrolling());

    viewport.tick(ms(t0, 119));
    assert_eq!(log.borrow().len(), 2);

    viewport.tick(ms(t0, 120));
    viewport.tick(ms(t0, 500));
    assert_eq!(
        *log.borrow(),
        vec![
            Lifecycle::DragStart,
            Lifecycle::MoveStart,
            Lifecycle::MoveEnd,
            Lifecycle::DragEnd,
        ]
    );
}

#[test]
fn test_click_without_movement_is_not_a_drag() {
    let log = Log::default();
    let mut viewport = viewport(OverflowboxConfig::default(), &log);
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(ms(t0, 5), pos(100, 100)));
    viewport.handle_pointer(PointerEvent::released(ms(t0, 10)));
    viewport.tick(ms(t0, 1_000));

    assert!(log.borrow().is_empty());
    assert_eq!(offset(&viewport), pos(710, 290));
}

#[test]
fn test_drag_threshold_delays_drag_start() {
    let log = Log::default();
    let mut viewport = viewport(OverflowboxConfig::default().drag_threshold(Px(10)), &log);
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(t0, pos(94, 92)));
    assert!(!viewport.is_dragging());
    assert_eq!(offset(&viewport), pos(710, 290));

    viewport.handle_pointer(PointerEvent::moved(t0, pos(80, 100)));
    assert!(viewport.is_dragging());
    assert_eq!(offset(&viewport), pos(730, 290));
    assert_eq!(*log.borrow(), vec![Lifecycle::DragStart]);
}

#[test]
fn test_leave_ends_the_session() {
    let log = Log::default();
    let mut viewport = viewport(OverflowboxConfig::default(), &log);
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::entered(t0));
    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(t0, pos(50, 100)));
    viewport.handle_pointer(PointerEvent::left(ms(t0, 10)));
    assert!(!viewport.is_pressed());

    // Moves after leaving no longer drag.
    viewport.handle_pointer(PointerEvent::moved(ms(t0, 20), pos(0, 0)));
    assert_eq!(offset(&viewport), pos(760, 290));
    assert_eq!(*log.borrow(), vec![Lifecycle::DragStart, Lifecycle::DragEnd]);
}

#[test]
fn test_programmatic_moves_fire_no_callbacks() {
    let log = Log::default();
    let pushes = Rc::new(RefCell::new(Vec::new()));
    let sink = {
        let pushes = pushes.clone();
        move |position: LogicalPosition| pushes.borrow_mut().push(position)
    };
    let mut viewport = viewport(OverflowboxConfig::default().smooth_scrolling(true), &log);
    viewport.set_sink(Some(Box::new(sink)));
    let t0 = Instant::now();

    viewport.set_position(logical(1200, 700));
    let mut frame = 0;
    while viewport.surface().is_some_and(MemorySurface::is_animating) {
        frame += 1;
        if let Some(surface) = viewport.surface_mut() {
            surface.advance(frame * 16_000_000);
        }
        pump(&mut viewport, ms(t0, frame * 16));
    }
    viewport.tick(ms(t0, frame * 16 + 100));

    assert_eq!(offset(&viewport), pos(950, 450));
    assert!(log.borrow().is_empty());
    assert!(pushes.borrow().is_empty());
}

#[test]
fn test_long_scroll_settles_once() {
    let log = Log::default();
    let mut viewport = viewport(OverflowboxConfig::default(), &log);
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(500, 500)));
    for step in 1..=20 {
        let now = ms(t0, step * 30);
        viewport.handle_pointer(PointerEvent::moved(now, pos(500 - step as i32 * 5, 500)));
        pump(&mut viewport, now);
        viewport.tick(now);
    }
    viewport.handle_pointer(PointerEvent::released(ms(t0, 610)));
    for step in 0..20 {
        viewport.tick(ms(t0, 610 + step * 50));
    }

    let log = log.borrow();
    let count = |event| log.iter().filter(|&&e| e == event).count();
    assert_eq!(count(Lifecycle::MoveStart), 1);
    assert_eq!(count(Lifecycle::MoveEnd), 1);
    assert_eq!(count(Lifecycle::DragStart), 1);
    assert_eq!(count(Lifecycle::DragEnd), 1);
}

#[test]
fn test_readiness_waits_for_all_media() {
    let log = Log::default();
    let mut viewport = Overflowbox::new(OverflowboxConfig::default().hide_until_ready(true))
        .with_callbacks(recording_callbacks(&log));
    viewport.mount(
        surface(),
        [
            MediaStatus::Pending(MediaId(1)),
            MediaStatus::Complete,
            MediaStatus::Pending(MediaId(2)),
            MediaStatus::Pending(MediaId(3)),
        ],
    );
    viewport.set_position(logical(960, 540));
    assert!(!viewport.is_ready());
    assert!(!viewport.appearance().children_visible);
    assert_eq!(offset(&viewport), pos(0, 0));

    viewport.media_resolved(MediaId(1), MediaOutcome::Loaded);
    viewport.media_resolved(MediaId(2), MediaOutcome::Failed);
    assert_eq!(offset(&viewport), pos(0, 0));
    assert_eq!(viewport.surface().map(MemorySurface::write_count), Some(0));

    viewport.media_resolved(MediaId(3), MediaOutcome::Loaded);
    assert!(viewport.is_ready());
    assert!(viewport.appearance().children_visible);
    assert_eq!(offset(&viewport), pos(710, 290));
}

#[test]
fn test_disable_mid_drag_stops_writes() {
    let log = Log::default();
    let mut viewport = viewport(OverflowboxConfig::default(), &log);
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(t0, pos(80, 100)));
    assert_eq!(offset(&viewport), pos(730, 290));

    viewport.update_config(|config| config.disable = true);
    viewport.handle_pointer(PointerEvent::moved(t0, pos(0, 0)));
    assert_eq!(offset(&viewport), pos(730, 290));
    assert!(viewport.is_pressed());

    viewport.handle_pointer(PointerEvent::released(ms(t0, 10)));
    assert_eq!(*log.borrow(), vec![Lifecycle::DragStart, Lifecycle::DragEnd]);

    // New sessions cannot start while disabled.
    viewport.handle_pointer(PointerEvent::pressed(ms(t0, 20), pos(100, 100)));
    assert!(!viewport.is_pressed());
}

#[test]
fn test_end_callbacks_suppressed_when_disabled() {
    let log = Log::default();
    let config = OverflowboxConfig::default()
        .end_callback_policy(EndCallbackPolicy::SuppressWhenDisabled);
    let mut viewport = viewport(config, &log);
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(t0, pos(80, 100)));
    viewport.update_config(|config| config.disable = true);
    viewport.handle_pointer(PointerEvent::released(ms(t0, 10)));
    viewport.tick(ms(t0, 1_000));

    assert_eq!(*log.borrow(), vec![Lifecycle::DragStart]);
}

#[test]
fn test_press_hold_start_and_end() {
    let log = Log::default();
    let mut viewport = viewport(OverflowboxConfig::default(), &log);
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    assert_eq!(viewport.next_deadline(), Some(ms(t0, 250)));
    viewport.tick(ms(t0, 249));
    assert!(log.borrow().is_empty());
    viewport.tick(ms(t0, 250));
    viewport.tick(ms(t0, 260));
    assert_eq!(*log.borrow(), vec![Lifecycle::Start]);

    viewport.handle_pointer(PointerEvent::released(ms(t0, 300)));
    assert_eq!(*log.borrow(), vec![Lifecycle::Start, Lifecycle::End]);
}

#[test]
fn test_short_press_has_no_hold() {
    let log = Log::default();
    let mut viewport = viewport(OverflowboxConfig::default(), &log);
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::released(ms(t0, 100)));
    viewport.tick(ms(t0, 300));
    assert!(log.borrow().is_empty());
}

#[test]
fn test_wheel_interception_follows_config() {
    let log = Log::default();
    let mut viewport = viewport(OverflowboxConfig::default().disable_scroll_wheel(true), &log);
    let t0 = Instant::now();
    let wheel = WheelEvent {
        timestamp: t0,
        delta_x: 0.0,
        delta_y: 40.0,
    };
    assert_eq!(viewport.surface().map(MemorySurface::wheel_intercepted), Some(true));

    assert_eq!(viewport.handle_wheel(wheel), WheelDisposition::PassThrough);
    viewport.handle_pointer(PointerEvent::entered(t0));
    assert_eq!(viewport.handle_wheel(wheel), WheelDisposition::Consumed);
    viewport.handle_pointer(PointerEvent::left(t0));
    assert_eq!(viewport.handle_wheel(wheel), WheelDisposition::PassThrough);

    viewport.handle_pointer(PointerEvent::entered(t0));
    viewport.update_config(|config| config.disable_scroll_wheel = false);
    assert_eq!(viewport.surface().map(MemorySurface::wheel_intercepted), Some(false));
    assert_eq!(viewport.handle_wheel(wheel), WheelDisposition::PassThrough);
}

#[test]
fn test_unmount_cancels_pending_callbacks() {
    let log = Log::default();
    let mut viewport = viewport(Preset::Locked.config().disable(false), &log);
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(ms(t0, 10), pos(50, 100)));
    pump(&mut viewport, ms(t0, 10));

    let surface = viewport.unmount().expect("mounted surface");
    assert!(!surface.wheel_intercepted());
    assert!(!viewport.is_ready());

    viewport.tick(ms(t0, 1_000));
    viewport.handle_pointer(PointerEvent::released(ms(t0, 1_010)));
    assert_eq!(*log.borrow(), vec![Lifecycle::DragStart, Lifecycle::MoveStart]);
}

#[test]
fn test_touch_tracks_first_point_only() {
    let log = Log::default();
    let mut viewport = viewport(OverflowboxConfig::default(), &log);
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::touch_start(t0, 1, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::touch_start(t0, 2, pos(300, 300)));
    viewport.handle_pointer(PointerEvent::touch_move(t0, 2, pos(0, 0)));
    assert_eq!(offset(&viewport), pos(710, 290));

    viewport.handle_pointer(PointerEvent::touch_move(t0, 1, pos(70, 80)));
    assert_eq!(offset(&viewport), pos(740, 310));

    viewport.handle_pointer(PointerEvent::touch_end(t0, 2));
    assert!(viewport.is_dragging());
    viewport.handle_pointer(PointerEvent::touch_end(t0, 1));
    assert_eq!(*log.borrow(), vec![Lifecycle::DragStart, Lifecycle::DragEnd]);
}

#[test]
fn test_coalesced_push_back_at_settle() {
    let log = Log::default();
    let store = PositionStore::new(logical(960, 540));
    let mut viewport = viewport(Preset::TwoWay.config(), &log);
    viewport.set_sink(Some(Box::new(store.clone())));
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(ms(t0, 10), pos(60, 90)));
    pump(&mut viewport, ms(t0, 10));
    viewport.handle_pointer(PointerEvent::released(ms(t0, 20)));
    assert_eq!(store.get(), logical(960, 540));

    viewport.tick(ms(t0, 110));
    assert_eq!(store.get(), logical(1000, 550));
    assert_eq!(viewport.position(), logical(1000, 550));
}

#[test]
fn test_push_back_at_release_without_scroll_events() {
    let log = Log::default();
    let store = PositionStore::new(logical(960, 540));
    let mut viewport = viewport(Preset::TwoWay.config(), &log);
    viewport.set_sink(Some(Box::new(store.clone())));
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(t0, pos(60, 90)));
    viewport.handle_pointer(PointerEvent::released(ms(t0, 10)));
    assert_eq!(store.get(), logical(1000, 550));
}

#[test]
fn test_per_move_push_back() {
    let log = Log::default();
    let pushes = Rc::new(RefCell::new(Vec::new()));
    let sink = {
        let pushes = pushes.clone();
        move |position: LogicalPosition| pushes.borrow_mut().push(position)
    };
    let mut viewport = viewport(Preset::Live.config(), &log);
    viewport.set_sink(Some(Box::new(sink)));
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(ms(t0, 10), pos(60, 90)));
    pump(&mut viewport, ms(t0, 10));
    viewport.handle_pointer(PointerEvent::moved(ms(t0, 20), pos(50, 90)));
    pump(&mut viewport, ms(t0, 20));
    viewport.handle_pointer(PointerEvent::released(ms(t0, 30)));
    viewport.tick(ms(t0, 200));

    assert_eq!(*pushes.borrow(), vec![logical(1000, 550), logical(1010, 550)]);
}

#[test]
fn test_position_set_during_drag_applies_at_release() {
    let log = Log::default();
    let store = PositionStore::new(logical(960, 540));
    let mut viewport = viewport(OverflowboxConfig::default(), &log);
    viewport.set_sink(Some(Box::new(store.clone())));
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(t0, pos(60, 90)));
    viewport.set_position(logical(500, 500));
    assert_eq!(offset(&viewport), pos(750, 300));

    viewport.handle_pointer(PointerEvent::released(ms(t0, 10)));
    viewport.tick(ms(t0, 500));
    assert_eq!(offset(&viewport), pos(250, 250));
    assert_eq!(store.get(), logical(960, 540));
}

#[test]
fn test_appearance_tracks_interaction() {
    let log = Log::default();
    let mut viewport = viewport(OverflowboxConfig::default().class_name("map"), &log);
    let t0 = Instant::now();

    let idle = viewport.appearance();
    assert_eq!(idle.cursor, CursorIcon::Grab);
    assert_eq!(idle.class_list(), "wrapper hide-scroll map");

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    let pressed = viewport.appearance();
    assert_eq!(pressed.cursor, CursorIcon::Grabbing);
    assert_eq!(pressed.class_list(), "wrapper hide-scroll is-dragging map");
}

#[test]
fn test_drop_fires_no_callbacks() {
    let log = Log::default();
    {
        let mut viewport = viewport(OverflowboxConfig::default(), &log);
        let t0 = Instant::now();
        viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
        viewport.handle_pointer(PointerEvent::moved(t0, pos(50, 100)));
    }
    assert_eq!(*log.borrow(), vec![Lifecycle::DragStart]);
}

#[test]
fn test_position_set_while_settling_applies_at_settle() {
    let log = Log::default();
    let store = PositionStore::new(logical(960, 540));
    let mut viewport = viewport(OverflowboxConfig::default(), &log);
    viewport.set_sink(Some(Box::new(store.clone())));
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(ms(t0, 10), pos(60, 90)));
    pump(&mut viewport, ms(t0, 10));
    viewport.set_position(logical(500, 500));
    viewport.handle_pointer(PointerEvent::released(ms(t0, 20)));
    assert_eq!(offset(&viewport), pos(750, 300));

    viewport.tick(ms(t0, 110));
    assert_eq!(offset(&viewport), pos(250, 250));
    assert_eq!(store.get(), logical(960, 540));
    assert_eq!(
        *log.borrow(),
        vec![
            Lifecycle::DragStart,
            Lifecycle::MoveStart,
            Lifecycle::MoveEnd,
            Lifecycle::DragEnd,
        ]
    );
}

#[test]
fn test_regrab_before_settle_ends_previous_drag() {
    let log = Log::default();
    let mut viewport = viewport(OverflowboxConfig::default(), &log);
    let t0 = Instant::now();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(ms(t0, 10), pos(60, 90)));
    pump(&mut viewport, ms(t0, 10));
    viewport.handle_pointer(PointerEvent::released(ms(t0, 20)));
    assert_eq!(*log.borrow(), vec![Lifecycle::DragStart, Lifecycle::MoveStart]);

    // Grabbing again while the first drag's scrolling still runs.
    viewport.handle_pointer(PointerEvent::pressed(ms(t0, 50), pos(100, 100)));
    assert_eq!(
        *log.borrow(),
        vec![Lifecycle::DragStart, Lifecycle::MoveStart, Lifecycle::DragEnd]
    );

    viewport.handle_pointer(PointerEvent::moved(ms(t0, 60), pos(80, 100)));
    pump(&mut viewport, ms(t0, 60));
    viewport.tick(ms(t0, 200));
    assert!(viewport.is_dragging());
    viewport.handle_pointer(PointerEvent::released(ms(t0, 210)));

    assert_eq!(
        *log.borrow(),
        vec![
            Lifecycle::DragStart,
            Lifecycle::MoveStart,
            Lifecycle::DragEnd,
            Lifecycle::DragStart,
            Lifecycle::MoveEnd,
            Lifecycle::DragEnd,
        ]
    );
}

#[test]
fn test_back_to_back_drags_pair_their_callbacks() {
    let log = Log::default();
    let mut viewport = viewport(OverflowboxConfig::default(), &log);
    let t0 = Instant::now();
    let count = |event: Lifecycle| log.borrow().iter().filter(|&&e| e == event).count();

    viewport.handle_pointer(PointerEvent::pressed(t0, pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(ms(t0, 10), pos(60, 90)));
    pump(&mut viewport, ms(t0, 10));
    viewport.handle_pointer(PointerEvent::released(ms(t0, 20)));

    viewport.handle_pointer(PointerEvent::pressed(ms(t0, 50), pos(100, 100)));
    viewport.handle_pointer(PointerEvent::moved(ms(t0, 60), pos(80, 100)));
    pump(&mut viewport, ms(t0, 60));

    // The second session is still held when its scrolling settles.
    viewport.tick(ms(t0, 300));
    assert!(viewport.is_dragging());
    assert_eq!(count(Lifecycle::DragStart), 2);
    assert_eq!(count(Lifecycle::DragEnd), 1);

    viewport.handle_pointer(PointerEvent::released(ms(t0, 310)));
    assert_eq!(count(Lifecycle::DragStart), 2);
    assert_eq!(count(Lifecycle::DragEnd), 2);
    assert_eq!(count(Lifecycle::MoveStart), count(Lifecycle::MoveEnd));
}
