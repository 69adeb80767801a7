use gloo_timers::callback::Interval;

use super::state::Carousel;

/// What the autoplay effect is keyed on. Any change re-runs [`Autoplay::sync`], so a navigation
/// (which bumps the epoch) restarts a full interval.
pub type TimerDeps = (bool, u64);

pub fn timer_deps<T>(carousel: &Carousel<T>) -> TimerDeps {
    (carousel.autoplay_enabled(), carousel.nav_epoch())
}

/// A running periodic timer. Dropping the handle cancels it.
pub trait IntervalHandle: Sized {
    fn start(millis: u32, tick: Box<dyn FnMut()>) -> Self;
}

impl IntervalHandle for Interval {
    fn start(millis: u32, tick: Box<dyn FnMut()>) -> Self {
        Interval::new(millis, tick)
    }
}

/// Owns at most one live autoplay timer.
///
/// Re-arming always cancels the previous timer first, so the next tick is a full interval after
/// the last (re)start, never a resumed leftover. Dropping the `Autoplay` cancels whatever is live.
pub struct Autoplay<H = Interval> {
    interval_ms: u32,
    live: Option<H>,
}

impl<H: IntervalHandle> Autoplay<H> {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            live: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.live.is_some()
    }

    pub fn arm(&mut self, tick: impl FnMut() + 'static) {
        self.disarm();
        self.live = Some(H::start(self.interval_ms, Box::new(tick)));
    }

    pub fn disarm(&mut self) {
        if self.is_armed() {
            self.live = None;
            log::debug!("autoplay timer cancelled");
        }
    }

    /// Arms a fresh timer when autoplay is enabled in `deps`, cancels it otherwise.
    pub fn sync(&mut self, (enabled, _epoch): TimerDeps, tick: impl FnMut() + 'static) {
        if enabled {
            self.arm(tick);
        } else {
            self.disarm();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::state::{Carousel, CarouselAction};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use yew::Reducible;

    struct Timer {
        id: u64,
        every: u64,
        due: u64,
        tick: Rc<RefCell<Box<dyn FnMut()>>>,
    }

    #[derive(Default)]
    struct VirtualClock {
        now: u64,
        next_id: u64,
        timers: Vec<Timer>,
    }

    thread_local! {
        static CLOCK: RefCell<VirtualClock> = RefCell::new(VirtualClock::default());
    }

    struct FakeInterval {
        id: u64,
    }

    impl IntervalHandle for FakeInterval {
        fn start(millis: u32, tick: Box<dyn FnMut()>) -> Self {
            CLOCK.with(|clock| {
                let mut clock = clock.borrow_mut();
                let id = clock.next_id;
                clock.next_id += 1;
                let due = clock.now + u64::from(millis);
                clock.timers.push(Timer {
                    id,
                    every: u64::from(millis),
                    due,
                    tick: Rc::new(RefCell::new(tick)),
                });
                FakeInterval { id }
            })
        }
    }

    impl Drop for FakeInterval {
        fn drop(&mut self) {
            let id = self.id;
            let _ = CLOCK.try_with(|clock| clock.borrow_mut().timers.retain(|t| t.id != id));
        }
    }

    fn reset_clock() {
        CLOCK.with(|clock| *clock.borrow_mut() = VirtualClock::default());
    }

    fn now() -> u64 {
        CLOCK.with(|clock| clock.borrow().now)
    }

    fn live_timers() -> usize {
        CLOCK.with(|clock| clock.borrow().timers.len())
    }

    /// Fires the earliest timer due at or before `limit`; false when there is none.
    fn fire_next(limit: u64) -> bool {
        let tick = CLOCK.with(|clock| {
            let mut clock = clock.borrow_mut();
            let next = clock
                .timers
                .iter_mut()
                .filter(|t| t.due <= limit)
                .min_by_key(|t| t.due)?;
            let due = next.due;
            next.due += next.every;
            let tick = Rc::clone(&next.tick);
            clock.now = due;
            Some(tick)
        });
        match tick {
            Some(tick) => {
                let mut tick = tick.borrow_mut();
                (&mut **tick)();
                true
            }
            None => false,
        }
    }

    /// Drives a carousel the way `use_carousel` does, on virtual time.
    struct Harness {
        state: Rc<Carousel<u32>>,
        autoplay: Autoplay<FakeInterval>,
        pending_ticks: Rc<Cell<u32>>,
        navigated_at: Vec<u64>,
    }

    impl Harness {
        fn new(interval_ms: u32) -> Self {
            reset_clock();
            let mut harness = Self {
                state: Rc::new(Carousel::new(vec![1, 2, 3, 4, 5, 6], 1)),
                autoplay: Autoplay::new(interval_ms),
                pending_ticks: Rc::new(Cell::new(0)),
                navigated_at: Vec::new(),
            };
            harness.sync();
            harness
        }

        fn sync(&mut self) {
            let pending = Rc::clone(&self.pending_ticks);
            self.autoplay
                .sync(timer_deps(&self.state), move || pending.set(pending.get() + 1));
        }

        // Same contract as the hook's effect: re-run `sync` only when the deps change.
        fn dispatch(&mut self, action: CarouselAction) {
            let epoch = self.state.nav_epoch();
            let deps = timer_deps(&self.state);
            self.state = Rc::clone(&self.state).reduce(action);
            if self.state.nav_epoch() != epoch {
                self.navigated_at.push(now());
            }
            if timer_deps(&self.state) != deps {
                self.sync();
            }
        }

        fn run_until(&mut self, limit: u64) {
            while fire_next(limit) {
                while self.pending_ticks.get() > 0 {
                    self.pending_ticks.set(self.pending_ticks.get() - 1);
                    self.dispatch(CarouselAction::Tick);
                }
            }
            CLOCK.with(|clock| clock.borrow_mut().now = limit);
        }
    }

    #[test]
    fn advances_once_per_interval() {
        let mut h = Harness::new(5000);
        h.run_until(12_000);
        assert_eq!(h.navigated_at, vec![5000, 10_000]);
        assert_eq!(h.state.current_index(), 2);
    }

    #[test]
    fn manual_navigation_restarts_the_interval() {
        let mut h = Harness::new(5000);
        h.run_until(3000);
        h.dispatch(CarouselAction::Advance);
        h.run_until(7999);
        assert_eq!(h.navigated_at, vec![3000]);
        h.run_until(8000);
        assert_eq!(h.navigated_at, vec![3000, 8000]);
        assert_eq!(live_timers(), 1);
    }

    #[test]
    fn hover_pauses_and_leave_waits_a_full_interval() {
        let mut h = Harness::new(5000);
        h.run_until(2000);
        h.dispatch(CarouselAction::SetAutoplay(false));
        assert_eq!(live_timers(), 0);

        h.run_until(12_000);
        assert!(h.navigated_at.is_empty());
        assert_eq!(h.state.current_index(), 0);

        h.dispatch(CarouselAction::SetAutoplay(true));
        h.run_until(16_999);
        assert!(h.navigated_at.is_empty());
        h.run_until(17_000);
        assert_eq!(h.navigated_at, vec![17_000]);
    }

    #[test]
    fn manual_navigation_while_paused_keeps_timer_off() {
        let mut h = Harness::new(5000);
        h.dispatch(CarouselAction::SetAutoplay(false));
        h.dispatch(CarouselAction::JumpTo(4));
        assert_eq!(live_timers(), 0);
        h.run_until(20_000);
        assert_eq!(h.state.current_index(), 4);
    }

    #[test]
    fn timer_deps_change_on_every_navigation() {
        let mut c = Carousel::new(vec![1, 2, 3], 1);
        let start = timer_deps(&c);
        c.jump_to(0);
        assert_ne!(timer_deps(&c), start);
        let moved = timer_deps(&c);
        c.set_autoplay(false);
        assert_eq!(timer_deps(&c), (false, moved.1));
    }

    #[test]
    fn sync_with_autoplay_off_disarms() {
        reset_clock();
        let mut autoplay: Autoplay<FakeInterval> = Autoplay::new(5000);
        autoplay.sync((true, 0), || {});
        assert!(autoplay.is_armed());
        autoplay.sync((false, 0), || {});
        assert!(!autoplay.is_armed());
        assert_eq!(live_timers(), 0);
    }

    #[test]
    fn rearming_keeps_a_single_live_timer() {
        reset_clock();
        let mut autoplay: Autoplay<FakeInterval> = Autoplay::new(5000);
        for _ in 0..3 {
            autoplay.arm(|| {});
        }
        assert_eq!(live_timers(), 1);
        assert!(autoplay.is_armed());
        autoplay.disarm();
        assert_eq!(live_timers(), 0);
        assert!(!autoplay.is_armed());
    }

    #[test]
    fn dropping_autoplay_cancels_its_timer() {
        reset_clock();
        let mut autoplay: Autoplay<FakeInterval> = Autoplay::new(5000);
        autoplay.arm(|| {});
        assert_eq!(live_timers(), 1);
        drop(autoplay);
        assert_eq!(live_timers(), 0);
    }
}
