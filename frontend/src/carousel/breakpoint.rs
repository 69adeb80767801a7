use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{MEDIUM_MAX_WIDTH, NARROW_MAX_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Narrow,
    Medium,
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width <= NARROW_MAX_WIDTH {
            Breakpoint::Narrow
        } else if width <= MEDIUM_MAX_WIDTH {
            Breakpoint::Medium
        } else {
            Breakpoint::Wide
        }
    }

    /// How many carousel items fit side by side.
    pub fn visible_count(self) -> usize {
        match self {
            Breakpoint::Narrow => 1,
            Breakpoint::Medium => 2,
            Breakpoint::Wide => 3,
        }
    }
}

/// Current breakpoint, re-evaluated on window resize.
#[hook]
pub fn use_breakpoint() -> Breakpoint {
    let (width, _height) = use_window_size();
    Breakpoint::from_width(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_map_to_breakpoints() {
        assert_eq!(Breakpoint::from_width(320.0), Breakpoint::Narrow);
        assert_eq!(Breakpoint::from_width(640.0), Breakpoint::Narrow);
        assert_eq!(Breakpoint::from_width(641.0), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(1024.0), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(1025.0), Breakpoint::Wide);
    }

    #[test]
    fn visible_count_grows_with_width() {
        assert_eq!(Breakpoint::Narrow.visible_count(), 1);
        assert_eq!(Breakpoint::Medium.visible_count(), 2);
        assert_eq!(Breakpoint::Wide.visible_count(), 3);
    }
}
