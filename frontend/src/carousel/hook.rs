use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::autoplay::{timer_deps, Autoplay};
use super::state::{Carousel, CarouselAction, Direction};

/// View-side handle on a carousel. Every mutation goes through the reducer, so the owning
/// component re-renders with the new window.
pub struct UseCarouselHandle<T: 'static> {
    state: UseReducerHandle<Carousel<T>>,
}

impl<T: 'static> Clone for UseCarouselHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T: 'static> UseCarouselHandle<T> {
    pub fn advance(&self) {
        self.state.dispatch(CarouselAction::Advance);
    }

    pub fn retreat(&self) {
        self.state.dispatch(CarouselAction::Retreat);
    }

    pub fn jump_to(&self, index: usize) {
        self.state.dispatch(CarouselAction::JumpTo(index));
    }

    pub fn set_autoplay(&self, enabled: bool) {
        self.state.dispatch(CarouselAction::SetAutoplay(enabled));
    }

    pub fn visible_window(&self) -> Vec<&T> {
        self.state.visible_window()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    pub fn item_count(&self) -> usize {
        self.state.item_count()
    }

    pub fn visible_count(&self) -> usize {
        self.state.visible_count()
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.state.autoplay_enabled()
    }
}

/// Carousel over `items` with `visible_count` items on screen and a timer advancing it every
/// `interval_ms` while autoplay is on.
///
/// The timer is re-armed from scratch whenever autoplay is switched on and after every
/// navigation, manual or automatic, and is cancelled when autoplay is switched off or the
/// component unmounts.
#[hook]
pub fn use_carousel<T: 'static>(
    items: Rc<[T]>,
    visible_count: usize,
    interval_ms: u32,
) -> UseCarouselHandle<T> {
    let state = use_reducer(move || Carousel::new(items, visible_count));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |count| {
                state.dispatch(CarouselAction::SetVisibleCount(*count));
                || ()
            },
            visible_count,
        );
    }

    let autoplay = use_mut_ref(|| Autoplay::<Interval>::new(interval_ms));
    let deps = timer_deps(&state);
    {
        let state = state.clone();
        let autoplay = autoplay.clone();
        use_effect_with_deps(
            move |deps| {
                autoplay.borrow_mut().sync(*deps, move || {
                    // Dispatch after the timer callback returns; the dispatch re-arms (and so
                    // drops) this very interval.
                    let state = state.clone();
                    spawn_local(async move { state.dispatch(CarouselAction::Tick) });
                });
                move || autoplay.borrow_mut().disarm()
            },
            deps,
        );
    }

    UseCarouselHandle { state }
}
