//! Windowed carousel shared by the gallery and the testimonials slider.

pub mod autoplay;
pub mod breakpoint;
pub mod hook;
pub mod indicators;
pub mod state;

pub use breakpoint::use_breakpoint;
pub use hook::use_carousel;
pub use indicators::CarouselIndicators;

/// Rotating content stays silent for screen readers; once paused, slide changes are announced.
pub fn live_region(autoplay_enabled: bool) -> &'static str {
    if autoplay_enabled {
        "off"
    } else {
        "polite"
    }
}

/// Shared slide/indicator styling, rendered once by each carousel view.
pub const CAROUSEL_STYLE: &str = r#"
.carousel-indicators {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    margin-top: 1.5rem;
}
.carousel-dot {
    width: 12px;
    height: 12px;
    border-radius: 50%;
    border: none;
    background: #f3d9a4;
    cursor: pointer;
    transition: all 0.3s ease;
}
.carousel-dot.active {
    background: #d97706;
    transform: scale(1.25);
}
.carousel-arrow {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    z-index: 10;
    width: 44px;
    height: 44px;
    border-radius: 50%;
    border: none;
    background: #f5efe6;
    box-shadow: 5px 5px 10px #d9d3ca, -5px -5px 10px #ffffff;
    color: #92400e;
    font-size: 1.5rem;
    cursor: pointer;
}
.carousel-arrow.prev { left: 1rem; }
.carousel-arrow.next { right: 1rem; }
@keyframes slideFromRight {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideFromLeft {
    from { transform: translateX(-100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
.slide-enter { animation: fadeIn 0.5s ease-out; }
.slide-enter-forward { animation: slideFromRight 0.5s ease-out; }
.slide-enter-backward { animation: slideFromLeft 0.5s ease-out; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_region_is_announced_only_while_paused() {
        assert_eq!(live_region(true), "off");
        assert_eq!(live_region(false), "polite");
    }
}
