use yew::prelude::*;

use super::state::window_contains;

#[derive(Properties, PartialEq)]
pub struct CarouselIndicatorsProps {
    pub item_count: usize,
    pub current_index: usize,
    pub visible_count: usize,
    pub on_select: Callback<usize>,
    #[prop_or(AttrValue::Static("Go to slide"))]
    pub label: AttrValue,
}

/// One dot per item; the dots covering the visible window are highlighted.
#[function_component(CarouselIndicators)]
pub fn carousel_indicators(props: &CarouselIndicatorsProps) -> Html {
    html! {
        <div class="carousel-indicators">
            { for (0..props.item_count).map(|index| {
                let active = window_contains(
                    props.item_count,
                    props.current_index,
                    props.visible_count,
                    index,
                );
                let on_select = props.on_select.clone();
                html! {
                    <button
                        key={index.to_string()}
                        class={classes!("carousel-dot", active.then(|| "active"))}
                        aria-label={format!("{} {}", props.label, index + 1)}
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(index))}
                    />
                }
            }) }
        </div>
    }
}
