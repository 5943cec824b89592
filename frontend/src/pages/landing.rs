use std::rc::Rc;

use yew::prelude::*;

use crate::components::cookie_consent::CookieConsent;
use crate::components::image_carousel::ImageCarousel;
use crate::components::lead_form_dialog::LeadFormDialog;
use crate::components::map_section::MapSection;
use crate::components::navigation::Nav;
use crate::components::notification::{ToastAction, ToastQueue, Toaster};
use crate::components::product_showcase::ProductShowcase;
use crate::config;
use crate::engagement::{
    BrowserScheduler, BrowserStorage, BrowserUnloadSignal, EngagementOrchestrator, Notice,
};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_open_form: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let open_form = {
        let on_open_form = props.on_open_form.clone();
        Callback::from(move |_: MouseEvent| on_open_form.emit(()))
    };

    html! {
        <header class="hero" id="rizta">
            <div class="hero-content">
                <span class="badge">{"The Most Awarded Electric Scooter"}</span>
                <h1>{"Meet "}<span class="accent">{"Rizta"}</span>{"."}</h1>
                <p class="hero-subtitle">
                    {"The most awarded electric scooter of the year. Experience the future of mobility with cutting-edge technology and sustainable design."}
                </p>
                <div class="hero-cta-group">
                    <button class="primary-cta" onclick={open_form.clone()}>{"Learn More →"}</button>
                    <button class="secondary-cta" onclick={open_form}>{"Explore Offers"}</button>
                </div>
                <div class="hero-stats">
                    <div><strong>{"120km"}</strong><span>{"True Range"}</span></div>
                    <div><strong>{"3.3s"}</strong><span>{"0-40 kmph"}</span></div>
                    <div><strong>{"90km/h"}</strong><span>{"Top Speed"}</span></div>
                    <div><strong>{"7\""}</strong><span>{"Touchscreen"}</span></div>
                </div>
            </div>
            <div class="hero-media">
                <ImageCarousel />
            </div>
        </header>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let dialog_open = use_state_eq(|| false);
    let orchestrator = use_mut_ref(|| None::<EngagementOrchestrator>);
    let toasts = use_reducer(ToastQueue::default);

    // Arm the lead prompt once per page view
    {
        let dialog_open = dialog_open.clone();
        let orchestrator = orchestrator.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                let engine = EngagementOrchestrator::mount(
                    Rc::new(BrowserStorage),
                    &BrowserScheduler,
                    &BrowserUnloadSignal,
                    &config::timings(),
                    move |open| dialog_open.set(open),
                );
                *orchestrator.borrow_mut() = Some(engine);

                move || {
                    if let Some(engine) = orchestrator.borrow_mut().take() {
                        engine.teardown();
                    }
                }
            },
            (),
        );
    }

    let open_form = {
        let orchestrator = orchestrator.clone();
        Callback::from(move |_: ()| {
            if let Some(engine) = orchestrator.borrow().as_ref() {
                engine.open_dialog();
            }
        })
    };

    let close_form = {
        let orchestrator = orchestrator.clone();
        Callback::from(move |_: ()| {
            if let Some(engine) = orchestrator.borrow().as_ref() {
                engine.close_dialog();
            }
        })
    };

    let on_notify = {
        let toasts = toasts.dispatcher();
        Callback::from(move |notice: Notice| toasts.dispatch(ToastAction::Push(notice)))
    };

    let on_dismiss = {
        let toasts = toasts.dispatcher();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        overflow-x: hidden;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #111827;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        transition: all 0.3s ease;
                        background: transparent;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 4rem;
                        padding: 0 1rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .nav-right { display: flex; align-items: center; gap: 2rem; }
                    .nav-dropdown { position: relative; }
                    .nav-dropdown-menu {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        display: flex;
                        flex-direction: column;
                        min-width: 12rem;
                        padding: 0.5rem;
                        background: #fff;
                        border-radius: 8px;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
                    }
                    .burger-menu { display: none; }
                    .hero, .showcase, .locator { padding: 6rem 1rem 4rem; max-width: 1200px; margin: 0 auto; }
                    .hero { display: flex; flex-wrap: wrap; align-items: center; gap: 2rem; }
                    .hero-content { flex: 1; min-width: 300px; }
                    .hero-media { flex: 1; min-width: 300px; }
                    .hero-stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; margin-top: 3rem; }
                    .hero-stats strong { display: block; font-size: 1.75rem; color: #2563eb; }
                    .accent { color: #2563eb; }
                    .badge { display: inline-block; padding: 0.25rem 0.75rem; border-radius: 999px; background: rgba(37, 99, 235, 0.1); color: #2563eb; font-size: 0.8rem; }
                    .badge.featured { background: #f97316; color: #fff; margin-left: 0.5rem; }
                    .primary-cta, .nav-cta { background: #2563eb; color: #fff; border: none; padding: 0.75rem 2rem; border-radius: 8px; cursor: pointer; }
                    .secondary-cta { background: transparent; color: #2563eb; border: 1px solid #2563eb; padding: 0.75rem 2rem; border-radius: 8px; cursor: pointer; }
                    .hero-cta-group, .model-actions { display: flex; gap: 1rem; margin-top: 2rem; }
                    .carousel { position: relative; border-radius: 16px; overflow: hidden; }
                    .carousel-image { width: 100%; height: 420px; object-fit: cover; display: block; }
                    .carousel-indicators { position: absolute; bottom: 1rem; left: 50%; transform: translateX(-50%); display: flex; gap: 0.5rem; }
                    .carousel-dot { width: 10px; height: 10px; border-radius: 50%; border: none; background: rgba(255, 255, 255, 0.6); cursor: pointer; }
                    .carousel-dot.active { background: #2563eb; transform: scale(1.25); }
                    .carousel-caption { position: absolute; left: 1.5rem; bottom: 2.5rem; color: #fff; }
                    .section-header { text-align: center; margin-bottom: 3rem; }
                    .model-selector { display: flex; justify-content: center; flex-wrap: wrap; gap: 1rem; margin-bottom: 3rem; }
                    .model-button, .city-button { padding: 0.75rem 1.5rem; border-radius: 8px; border: 1px solid #d4d4d8; background: #fff; cursor: pointer; }
                    .model-button.active, .city-button.active { background: #2563eb; color: #fff; border-color: #2563eb; }
                    .model-detail, .locator-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 2rem; }
                    .model-image { display: flex; align-items: center; justify-content: center; min-height: 300px; border-radius: 16px; font-size: 2rem; font-weight: 700; }
                    .original-price { margin-left: 0.75rem; text-decoration: line-through; color: #6b7280; }
                    .feature-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; margin: 1.5rem 0; }
                    .city-button { display: flex; flex-direction: column; width: 100%; margin-bottom: 0.5rem; text-align: left; }
                    .locator-search { width: 100%; padding: 0.6rem 0.75rem; border: 1px solid #d4d4d8; border-radius: 6px; margin-bottom: 1.5rem; }
                    .map-area { position: relative; height: 220px; border-radius: 12px; background: linear-gradient(135deg, #dbeafe, #ffedd5); margin: 1rem 0; }
                    .marker { position: absolute; padding: 0.2rem 0.6rem; border-radius: 999px; background: #fff; font-size: 0.75rem; }
                    .marker-a { top: 25%; left: 20%; }
                    .marker-b { top: 55%; left: 55%; }
                    .marker-c { top: 35%; left: 70%; }
                    .dealer-card { border: 1px solid #e5e7eb; border-radius: 12px; padding: 1rem; margin-bottom: 1rem; }
                    .dealer-head { display: flex; justify-content: space-between; }
                    .dealer-services { display: flex; gap: 0.5rem; flex-wrap: wrap; margin: 0.75rem 0; }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; flex-direction: column; gap: 4px; background: none; border: none; }
                        .burger-menu span { width: 22px; height: 2px; background: #111827; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 4rem;
                            left: 0;
                            right: 0;
                            padding: 1rem;
                            background: #fff;
                        }
                        .hero-stats { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <Nav on_open_form={open_form.clone()} />
            <Hero on_open_form={open_form.clone()} />
            <ProductShowcase on_open_form={open_form.clone()} />
            <MapSection on_open_form={open_form} />
            <LeadFormDialog open={*dialog_open} on_close={close_form} on_notify={on_notify} />
            <CookieConsent />
            <Toaster
                toasts={toasts.toasts.clone()}
                duration_ms={config::timings().toast_ms}
                on_dismiss={on_dismiss}
            />
        </div>
    }
}
