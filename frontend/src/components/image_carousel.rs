use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::catalog::CAROUSEL_IMAGES;
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }
}

pub enum CarouselAction {
    Advance,
    Select(usize),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let index = match action {
            CarouselAction::Advance if self.len > 0 => (self.index + 1) % self.len,
            CarouselAction::Select(index) if index < self.len => index,
            _ => return self,
        };
        Rc::new(Self { index, ..*self })
    }
}

#[function_component(ImageCarousel)]
pub fn image_carousel() -> Html {
    let carousel = use_reducer(|| CarouselState::new(CAROUSEL_IMAGES.len()));

    {
        let carousel = carousel.clone();
        use_interval(
            move || carousel.dispatch(CarouselAction::Advance),
            config::timings().carousel_interval_ms,
        );
    }

    let current = carousel.index;

    html! {
        <div class="carousel">
            <img
                class="carousel-image"
                src={CAROUSEL_IMAGES[current]}
                alt={format!("Ather Electric Scooter {}", current + 1)}
            />
            <div class="carousel-indicators">
                { for (0..CAROUSEL_IMAGES.len()).map(|index| {
                    let onclick = {
                        let carousel = carousel.clone();
                        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Select(index)))
                    };
                    html! {
                        <button
                            class={classes!("carousel-dot", (index == current).then(|| "active"))}
                            aria-label={format!("Show image {}", index + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>
            <div class="carousel-caption">
                <h3>{"Experience Ather"}</h3>
                <p>{"Real riders, real experiences"}</p>
            </div>
        </div>
    }
}
