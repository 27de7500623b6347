//! Drives an overflowbox over a headless surface with a scripted drag and
//! logs what happens.
//!
//! Run with a preset name to try a different wiring:
//!
//! ```text
//! RUST_LOG=overflowbox=debug,example=info cargo run -p example -- live
//! ```

use std::time::{Duration, Instant};

use overflowbox::{
    Callbacks, LogicalPosition, MediaId, MediaOutcome, MediaStatus, MemorySurface, Overflowbox,
    OverflowboxConfig, PointerEvent, PositionStore, Preset, Px, PxPosition, PxSize,
    ScrollSurface, provide_position_store, use_position_store,
};
use tracing::info;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let preset = match std::env::args().nth(1) {
        Some(name) => name.parse::<Preset>()?,
        None => Preset::TwoWay,
    };
    let config = OverflowboxConfig::from(preset).hide_until_ready(true);
    info!(%preset, config = %serde_json::to_string(&config)?, "starting");

    let store = PositionStore::new(LogicalPosition::new(Px(960), Px(540)));
    provide_position_store(store.clone(), || run(config))?;
    info!(position = ?store.get(), "final stored position");
    Ok(())
}

fn run(config: OverflowboxConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = use_position_store()?;
    let callbacks = Callbacks::new()
        .on_drag_start(|| info!("drag start"))
        .on_drag_end(|| info!("drag end"))
        .on_move_start(|| info!("move start"))
        .on_move_end(|| info!("move end"))
        .on_start(|| info!("press held"))
        .on_end(|| info!("held press released"));

    let mut viewport = Overflowbox::new(config)
        .with_position(store.get())
        .with_callbacks(callbacks)
        .with_sink(store.clone());

    let surface = MemorySurface::new(
        PxSize::new(Px(500), Px(500)),
        PxSize::new(Px(1920), Px(1080)),
    )
    .with_page_origin(PxPosition::new(Px(40), Px(40)));
    viewport.mount(surface, [MediaStatus::Pending(MediaId(1))]);
    info!(appearance = ?viewport.appearance(), "mounted");

    viewport.media_resolved(MediaId(1), MediaOutcome::Loaded);
    info!(offset = ?current_offset(&viewport), "ready");

    let start = Instant::now();
    let mut now = start;
    let mut pointer = PxPosition::new(Px(300), Px(300));
    viewport.handle_pointer(PointerEvent::entered(now));
    viewport.handle_pointer(PointerEvent::pressed(now, pointer));
    for _ in 0..12 {
        now += FRAME;
        pointer = pointer - PxPosition::new(Px(8), Px(3));
        viewport.handle_pointer(PointerEvent::moved(now, pointer));
        step(&mut viewport, start, now);
    }
    viewport.handle_pointer(PointerEvent::released(now));
    info!(offset = ?current_offset(&viewport), "released");

    while let Some(deadline) = viewport.next_deadline() {
        now = now.max(deadline);
        step(&mut viewport, start, now);
    }

    // Recenter programmatically; no callbacks fire for this.
    viewport.set_position(LogicalPosition::new(Px(600), Px(400)));
    for _ in 0..60 {
        now += FRAME;
        step(&mut viewport, start, now);
    }
    now += viewport.config().settle_delay;
    step(&mut viewport, start, now);
    info!(offset = ?current_offset(&viewport), "recentered");

    viewport.unmount();
    Ok(())
}

/// Advances the surface one frame and forwards what it reported.
fn step(viewport: &mut Overflowbox<MemorySurface>, start: Instant, now: Instant) {
    let elapsed = now.saturating_duration_since(start);
    let frame_nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
    let notifications = match viewport.surface_mut() {
        Some(surface) => {
            surface.advance(frame_nanos);
            surface.take_scroll_notifications()
        }
        None => Vec::new(),
    };
    for _ in notifications {
        viewport.handle_scroll(now);
    }
    viewport.tick(now);
}

fn current_offset(viewport: &Overflowbox<MemorySurface>) -> Option<PxPosition> {
    viewport.surface().map(ScrollSurface::scroll_offset)
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,overflowbox=info,example=info")
        {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
