//! Scroll-settle detection.
//!
//! Native scroll events arrive in bursts: per pointer move, per animation
//! frame of a smooth scroll, per momentum step. The detector folds a burst
//! into one *scroll period* that ends after a quiet window with no events.
//!
//! A period is *attributed* to a gesture when any of its events arrived while
//! a gesture session was active, or shortly after one ended. Only attributed
//! periods produce move callbacks and coordinate push-back.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

/// A single owned deadline.
///
/// Restarting replaces the pending deadline; there is never more than one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettleTimer {
    deadline: Option<Instant>,
}

impl SettleTimer {
    /// Creates an idle timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending deadline and schedules a new one `delay` after
    /// `now`.
    pub fn restart(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Cancels the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True while a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fires the timer if its deadline has passed. Returns true exactly once
    /// per scheduled deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// What a native scroll event meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollActivity {
    /// First attributed event of a period: a move started.
    MoveStarted,
    /// Part of an ongoing period.
    Continued,
}

/// A scroll period that just went quiet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled {
    /// The period belonged to a gesture and reported a move start.
    pub attributed: bool,
}

/// Debounces native scroll events into scroll periods.
#[derive(Debug, Clone)]
pub struct ScrollSettleDetector {
    timer: SettleTimer,
    delay: Duration,
    attributed: bool,
    move_started: bool,
    /// Scroll events before this instant still belong to the session that
    /// just ended.
    trailing_until: Option<Instant>,
}

impl ScrollSettleDetector {
    /// Creates a detector with the given quiet window.
    pub fn new(delay: Duration) -> Self {
        Self {
            timer: SettleTimer::new(),
            delay,
            attributed: false,
            move_started: false,
            trailing_until: None,
        }
    }

    /// Changes the quiet window used for future restarts.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// True between the first event of a period and its settle.
    pub fn is_scrolling(&self) -> bool {
        self.timer.is_pending()
    }

    /// True if the current period belongs to a gesture.
    pub fn is_attributed(&self) -> bool {
        self.is_scrolling() && self.attributed
    }

    /// When the current period will settle if no further event arrives.
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Keeps attributing scroll events to the gesture that ended at `now`
    /// for one more quiet window.
    pub fn adopt_trailing(&mut self, now: Instant) {
        self.trailing_until = Some(now + self.delay);
    }

    /// Records a native scroll event.
    pub fn on_scroll(&mut self, now: Instant, session_active: bool) -> ScrollActivity {
        let trailing = self.trailing_until.is_some_and(|until| now <= until);
        if !self.is_scrolling() {
            trace!("scroll period started");
            self.attributed = false;
            self.move_started = false;
        }
        self.timer.restart(now, self.delay);

        if session_active || trailing {
            self.attributed = true;
        }
        if self.attributed && !self.move_started {
            self.move_started = true;
            debug!("move started");
            return ScrollActivity::MoveStarted;
        }
        ScrollActivity::Continued
    }

    /// Ends the current period if its quiet window elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<Settled> {
        if self.trailing_until.is_some_and(|until| now > until) {
            self.trailing_until = None;
        }
        if !self.timer.poll(now) {
            return None;
        }

        self.trailing_until = None;
        self.move_started = false;
        let settled = Settled {
            attributed: std::mem::take(&mut self.attributed),
        };
        debug!(?settled, "scroll settled");
        Some(settled)
    }

    /// Drops any pending period without reporting it.
    pub fn cancel(&mut self) {
        self.timer.cancel();
        self.attributed = false;
        self.move_started = false;
        self.trailing_until = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    fn ms(base: Instant, millis: u64) -> Instant {
        base + Duration::from_millis(millis)
    }

    #[test]
    fn test_timer_restart_replaces_deadline() {
        let t0 = Instant::now();
        let mut timer = SettleTimer::new();
        timer.restart(t0, DELAY);
        timer.restart(ms(t0, 50), DELAY);

        assert!(!timer.poll(ms(t0, 100)));
        assert!(timer.poll(ms(t0, 150)));
        assert!(!timer.poll(ms(t0, 300)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_burst_settles_once_after_last_event() {
        let t0 = Instant::now();
        let mut detector = ScrollSettleDetector::new(DELAY);

        assert_eq!(detector.on_scroll(t0, true), ScrollActivity::MoveStarted);
        for step in 1..=5 {
            assert_eq!(
                detector.on_scroll(ms(t0, step * 30), true),
                ScrollActivity::Continued
            );
            assert!(detector.poll(ms(t0, step * 30 + 20)).is_none());
        }

        assert!(detector.poll(ms(t0, 249)).is_none());
        let settled = detector.poll(ms(t0, 250)).expect("settled");
        assert!(settled.attributed);
        assert!(detector.poll(ms(t0, 500)).is_none());
        assert!(!detector.is_scrolling());
    }

    #[test]
    fn test_programmatic_scroll_is_not_attributed() {
        let t0 = Instant::now();
        let mut detector = ScrollSettleDetector::new(DELAY);

        assert_eq!(detector.on_scroll(t0, false), ScrollActivity::Continued);
        let settled = detector.poll(ms(t0, 100)).expect("settled");
        assert!(!settled.attributed);
    }

    #[test]
    fn test_trailing_events_belong_to_ended_session() {
        let t0 = Instant::now();
        let mut detector = ScrollSettleDetector::new(DELAY);
        detector.adopt_trailing(t0);

        assert_eq!(detector.on_scroll(ms(t0, 40), false), ScrollActivity::MoveStarted);
        assert!(detector.poll(ms(t0, 140)).is_some_and(|s| s.attributed));

        // Outside the trailing window the next period is programmatic again.
        assert_eq!(detector.on_scroll(ms(t0, 400), false), ScrollActivity::Continued);
    }

    #[test]
    fn test_cancel_drops_pending_period() {
        let t0 = Instant::now();
        let mut detector = ScrollSettleDetector::new(DELAY);
        detector.on_scroll(t0, true);
        detector.cancel();
        assert!(detector.poll(ms(t0, 1_000)).is_none());
        assert!(!detector.is_scrolling());
    }
}
