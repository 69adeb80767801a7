use std::rc::Rc;

use thiserror::Error;
use yew::prelude::*;

/// Which way the last navigation went. Only used to pick the slide animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Forward,
    Backward,
}

impl Direction {
    pub fn enter_class(self) -> &'static str {
        match self {
            Direction::None => "slide-enter",
            Direction::Forward => "slide-enter-forward",
            Direction::Backward => "slide-enter-backward",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("visible count must be at least 1, got {0}")]
    InvalidVisibleCount(usize),
}

/// True when `index` falls inside the window `[current, current + visible)` taken modulo `len`.
pub fn window_contains(len: usize, current: usize, visible: usize, index: usize) -> bool {
    if len == 0 || index >= len {
        return false;
    }
    let offset = (index + len - current % len) % len;
    offset < visible
}

/// A circular list of items with a window of `visible_count` of them on screen.
#[derive(Debug)]
pub struct Carousel<T> {
    items: Rc<[T]>,
    current_index: usize,
    direction: Direction,
    visible_count: usize,
    autoplay_enabled: bool,
    nav_epoch: u64,
}

// Manual impl so that cloning only bumps the item list refcount and `T` needs no `Clone`.
impl<T> Clone for Carousel<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
            current_index: self.current_index,
            direction: self.direction,
            visible_count: self.visible_count,
            autoplay_enabled: self.autoplay_enabled,
            nav_epoch: self.nav_epoch,
        }
    }
}

impl<T> Carousel<T> {
    /// A visible count of zero is raised to one.
    pub fn new(items: impl Into<Rc<[T]>>, visible_count: usize) -> Self {
        if visible_count == 0 {
            log::warn!("carousel created with visible count 0, using 1");
        }
        Self {
            items: items.into(),
            current_index: 0,
            direction: Direction::None,
            visible_count: visible_count.max(1),
            autoplay_enabled: true,
            nav_epoch: 0,
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    /// Bumped on every navigation; the autoplay timer restarts whenever it changes.
    pub fn nav_epoch(&self) -> u64 {
        self.nav_epoch
    }

    // Last index a full window can start from without wrapping.
    fn last_start(&self) -> usize {
        self.items.len().saturating_sub(self.visible_count)
    }

    fn navigated(&mut self) {
        self.nav_epoch = self.nav_epoch.wrapping_add(1);
        log::debug!(
            "carousel at {} ({:?}), window of {}",
            self.current_index,
            self.direction,
            self.visible_count
        );
    }

    pub fn advance(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.direction = Direction::Forward;
        // `>=` rather than `==` so a start left past the end by a visible count change wraps at once.
        self.current_index = if self.current_index >= self.last_start() {
            0
        } else {
            self.current_index + 1
        };
        self.navigated();
    }

    pub fn retreat(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.direction = Direction::Backward;
        self.current_index = if self.current_index == 0 {
            self.last_start()
        } else {
            self.current_index - 1
        };
        self.navigated();
    }

    /// Moves the window to start at `target`. Out of range targets are ignored and return false.
    pub fn jump_to(&mut self, target: usize) -> bool {
        if target >= self.items.len() {
            log::warn!(
                "ignoring jump to {} in a carousel of {} items",
                target,
                self.items.len()
            );
            return false;
        }
        self.direction = if target > self.current_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current_index = target;
        self.navigated();
        true
    }

    /// Exactly `visible_count` items from the current index, wrapping (and repeating when the
    /// window is wider than the list).
    pub fn visible_window(&self) -> Vec<&T> {
        self.items
            .iter()
            .cycle()
            .skip(self.current_index)
            .take(self.visible_count)
            .collect()
    }

    pub fn set_visible_count(&mut self, count: usize) -> Result<(), CarouselError> {
        if count == 0 {
            return Err(CarouselError::InvalidVisibleCount(count));
        }
        self.visible_count = count;
        Ok(())
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        self.autoplay_enabled = enabled;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Advance,
    Retreat,
    JumpTo(usize),
    SetVisibleCount(usize),
    SetAutoplay(bool),
    /// Dispatched by the autoplay timer. Advances only while autoplay is on.
    Tick,
}

impl<T> Reducible for Carousel<T> {
    type Action = CarouselAction;

    // Returning `self` untouched tells yew nothing changed, so no re-render and no timer restart.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Advance => next.advance(),
            CarouselAction::Retreat => next.retreat(),
            CarouselAction::JumpTo(index) => {
                if !next.jump_to(index) {
                    return self;
                }
            }
            CarouselAction::SetVisibleCount(count) => {
                if count == self.visible_count {
                    return self;
                }
                if let Err(err) = next.set_visible_count(count) {
                    log::warn!("{}", err);
                    return self;
                }
            }
            CarouselAction::SetAutoplay(enabled) => {
                if enabled == self.autoplay_enabled {
                    return self;
                }
                next.set_autoplay(enabled);
            }
            CarouselAction::Tick => {
                if !self.autoplay_enabled || self.items.is_empty() {
                    return self;
                }
                next.advance();
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six(visible: usize) -> Carousel<u32> {
        Carousel::new(vec![1, 2, 3, 4, 5, 6], visible)
    }

    fn window(c: &Carousel<u32>) -> Vec<u32> {
        c.visible_window().into_iter().copied().collect()
    }

    #[test]
    fn window_has_exactly_visible_count_items() {
        for n in 1..=7usize {
            let items: Vec<usize> = (0..n).collect();
            for visible in 1..=n {
                let mut c = Carousel::new(items.clone(), visible);
                for _ in 0..(2 * n) {
                    assert_eq!(c.visible_window().len(), visible, "n={n} visible={visible}");
                    assert!(c.current_index() < n);
                    c.advance();
                }
            }
        }
    }

    #[test]
    fn advance_wraps_after_last_full_window() {
        let mut c = six(3);
        let mut seen = vec![c.current_index()];
        for _ in 0..4 {
            c.advance();
            seen.push(c.current_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 0]);
        assert_eq!(c.direction(), Direction::Forward);
    }

    #[test]
    fn window_without_wrap() {
        let mut c = six(3);
        assert!(c.jump_to(2));
        assert_eq!(window(&c), vec![3, 4, 5]);
    }

    #[test]
    fn window_wraps_past_the_end() {
        let mut c = six(3);
        c.jump_to(4);
        assert_eq!(window(&c), vec![5, 6, 1]);
    }

    #[test]
    fn wider_window_than_items_repeats() {
        let c = Carousel::new(vec!['a', 'b'], 5);
        let w: Vec<char> = c.visible_window().into_iter().copied().collect();
        assert_eq!(w, vec!['a', 'b', 'a', 'b', 'a']);
    }

    #[test]
    fn wider_window_than_items_keeps_index_in_range() {
        let mut c = Carousel::new(vec![1, 2], 3);
        c.advance();
        assert_eq!(c.current_index(), 0);
        c.retreat();
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.visible_window().len(), 3);
    }

    #[test]
    fn retreat_from_start_goes_to_last_full_window() {
        let mut c = six(3);
        c.retreat();
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.direction(), Direction::Backward);
        assert_eq!(window(&c), vec![4, 5, 6]);
    }

    #[test]
    fn retreat_then_advance_restores_state() {
        for visible in 1..=6 {
            let last = 6 - visible;
            for start in 0..=last {
                let mut c = six(visible);
                c.jump_to(start);
                let before = window(&c);

                c.retreat();
                c.advance();
                assert_eq!(c.current_index(), start);
                assert_eq!(window(&c), before);

                c.advance();
                c.retreat();
                assert_eq!(c.current_index(), start);
                assert_eq!(window(&c), before);
            }
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut c = six(1);
        c.jump_to(4);
        for _ in 0..6 {
            c.advance();
        }
        assert_eq!(c.current_index(), 4);

        // With a wider window the cycle covers every valid start once.
        let mut c = six(3);
        c.jump_to(1);
        for _ in 0..4 {
            c.advance();
        }
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn jump_to_sets_index_and_window_head() {
        for k in 0..6 {
            let mut c = six(2);
            assert!(c.jump_to(k));
            assert_eq!(c.current_index(), k);
            assert_eq!(*c.visible_window()[0], (k + 1) as u32);
        }
    }

    #[test]
    fn jump_direction_ties_go_backward() {
        let mut c = six(1);
        c.jump_to(3);
        assert_eq!(c.direction(), Direction::Forward);
        c.jump_to(1);
        assert_eq!(c.direction(), Direction::Backward);
        c.jump_to(1);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let mut c = six(2);
        c.jump_to(2);
        let epoch = c.nav_epoch();
        assert!(!c.jump_to(6));
        assert!(!c.jump_to(usize::MAX));
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.nav_epoch(), epoch);
    }

    #[test]
    fn zero_visible_count_is_rejected() {
        let mut c = six(2);
        assert_eq!(c.set_visible_count(0), Err(CarouselError::InvalidVisibleCount(0)));
        assert_eq!(c.visible_count(), 2);
        assert_eq!(Carousel::new(vec![1], 0).visible_count(), 1);
    }

    #[test]
    fn shrinking_viewport_keeps_index_and_self_corrects() {
        let mut c = six(1);
        c.jump_to(5);
        c.set_visible_count(3).unwrap();
        assert_eq!(c.current_index(), 5);
        assert_eq!(window(&c), vec![6, 1, 2]);
        c.advance();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn indicator_range_wraps() {
        let mut c = six(3);
        c.jump_to(4);
        let active: Vec<usize> = (0..6)
            .filter(|&i| window_contains(6, c.current_index(), c.visible_count(), i))
            .collect();
        assert_eq!(active, vec![0, 4, 5]);
        assert!(!window_contains(6, c.current_index(), c.visible_count(), 6));
    }

    #[test]
    fn window_contains_handles_wide_windows() {
        assert!((0..4).all(|i| window_contains(4, 2, 9, i)));
        assert!(!window_contains(0, 0, 1, 0));
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c: Carousel<u8> = Carousel::new(Vec::new(), 3);
        c.advance();
        c.retreat();
        assert!(!c.jump_to(0));
        assert_eq!(c.current_index(), 0);
        assert!(c.visible_window().is_empty());
        assert_eq!(c.nav_epoch(), 0);
    }

    #[test]
    fn navigation_bumps_epoch() {
        let mut c = six(1);
        c.advance();
        c.retreat();
        c.jump_to(3);
        assert_eq!(c.nav_epoch(), 3);
        c.set_autoplay(false);
        c.set_visible_count(2).unwrap();
        assert_eq!(c.nav_epoch(), 3);
    }

    #[test]
    fn reducer_skips_no_op_actions() {
        let state = Rc::new(six(2));
        let same = Rc::clone(&state).reduce(CarouselAction::JumpTo(10));
        assert!(Rc::ptr_eq(&state, &same));
        let same = Rc::clone(&state).reduce(CarouselAction::SetVisibleCount(0));
        assert!(Rc::ptr_eq(&state, &same));
        let same = Rc::clone(&state).reduce(CarouselAction::SetAutoplay(true));
        assert!(Rc::ptr_eq(&state, &same));

        let moved = Rc::clone(&state).reduce(CarouselAction::Advance);
        assert_eq!(moved.current_index(), 1);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn tick_only_advances_while_autoplay_is_on() {
        let state = Rc::new(six(1));
        let paused = state.reduce(CarouselAction::SetAutoplay(false));
        let after_tick = Rc::clone(&paused).reduce(CarouselAction::Tick);
        assert!(Rc::ptr_eq(&paused, &after_tick));

        let resumed = paused.reduce(CarouselAction::SetAutoplay(true));
        let ticked = resumed.reduce(CarouselAction::Tick);
        assert_eq!(ticked.current_index(), 1);
    }

    #[test]
    fn direction_picks_enter_animation() {
        assert_eq!(Direction::default().enter_class(), "slide-enter");
        assert_eq!(Direction::Forward.enter_class(), "slide-enter-forward");
        assert_eq!(Direction::Backward.enter_class(), "slide-enter-backward");
    }
}
