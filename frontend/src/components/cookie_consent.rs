use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::engagement::{BannerState, BrowserScheduler, BrowserStorage, ConsentBanner, StorageError};

const CATEGORIES: [(&str, &str); 3] = [
    ("Essential Cookies", "Required for the website to function properly. These cannot be disabled."),
    ("Analytics Cookies", "Help us understand how visitors interact with our website by collecting and reporting information."),
    ("Marketing Cookies", "Used to track visitors across websites to display relevant and engaging advertisements."),
];

#[function_component(CookieConsent)]
pub fn cookie_consent() -> Html {
    let state = use_state_eq(|| BannerState::Hidden);
    let banner = use_mut_ref(|| None::<ConsentBanner>);

    {
        let state = state.clone();
        let banner = banner.clone();
        use_effect_with_deps(
            move |_| {
                let notify = state.clone();
                let mounted = ConsentBanner::mount(
                    Rc::new(BrowserStorage),
                    &BrowserScheduler,
                    &config::timings(),
                    move |next| notify.set(next),
                );
                state.set(mounted.state());
                *banner.borrow_mut() = Some(mounted);

                move || {
                    if let Some(banner) = banner.borrow_mut().take() {
                        banner.teardown();
                    }
                }
            },
            (),
        );
    }

    // Resolution failures are already logged by the controller.
    let action = |run: fn(&ConsentBanner) -> Result<(), StorageError>| {
        let banner = banner.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(banner) = banner.borrow().as_ref() {
                let _ = run(banner);
            }
        })
    };
    let on_accept = action(ConsentBanner::accept_all);
    let on_reject = action(ConsentBanner::reject_all);
    let on_close = action(ConsentBanner::close);
    let on_customize = {
        let banner = banner.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(banner) = banner.borrow().as_ref() {
                banner.toggle_details();
            }
        })
    };

    if !state.is_visible() {
        return html! {};
    }
    let details = *state == BannerState::VisibleDetailed;

    html! {
        <div class="cookie-overlay">
            <style>
                {r#"
                    .cookie-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: flex-end;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.5);
                        backdrop-filter: blur(4px);
                    }
                    .cookie-card {
                        width: 100%;
                        max-width: 28rem;
                        max-height: 20rem;
                        padding: 1.5rem;
                        border-radius: 12px;
                        background: #1a1a1a;
                        color: #fff;
                        transition: max-height 0.3s ease;
                    }
                    .cookie-card.detailed {
                        max-height: 24rem;
                        overflow-y: auto;
                    }
                    .cookie-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                        margin-bottom: 1rem;
                    }
                    .cookie-category {
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        padding-top: 0.75rem;
                        margin-top: 0.75rem;
                        font-size: 0.875rem;
                    }
                    .cookie-customize {
                        background: none;
                        border: none;
                        color: #f97316;
                        cursor: pointer;
                        padding: 0.5rem 0 0;
                    }
                    .cookie-actions {
                        display: flex;
                        gap: 0.75rem;
                        margin-top: 1.5rem;
                    }
                    .cookie-actions button { flex: 1; padding: 0.6rem; border-radius: 6px; cursor: pointer; }
                    .cookie-reject { background: transparent; color: #fff; border: 1px solid rgba(255, 255, 255, 0.3); }
                    .cookie-accept { background: #f97316; color: #fff; border: none; }
                    .cookie-close { background: none; border: none; color: #fff; cursor: pointer; }
                    .cookie-privacy { display: block; margin-top: 1rem; text-align: center; font-size: 0.75rem; color: rgba(255, 255, 255, 0.7); }
                    @media (min-width: 640px) {
                        .cookie-overlay { align-items: center; }
                    }
                "#}
            </style>
            <div class={classes!("cookie-card", details.then(|| "detailed"))}>
                <div class="cookie-header">
                    <h3>{"🍪 Cookie Settings"}</h3>
                    <button class="cookie-close" onclick={on_close} aria-label="Close">{"✕"}</button>
                </div>
                <p>
                    {"We use cookies to give you a great user experience on our website and to analyze how you interact with our content."}
                </p>
                if details {
                    { for CATEGORIES.iter().map(|(title, text)| html! {
                        <div class="cookie-category">
                            <h4>{ *title }</h4>
                            <p>{ *text }</p>
                        </div>
                    }) }
                }
                <button class="cookie-customize" onclick={on_customize}>
                    { if details { "⚙ Hide Details" } else { "⚙ Customize" } }
                </button>
                <div class="cookie-actions">
                    <button class="cookie-reject" onclick={on_reject}>{"Reject All"}</button>
                    <button class="cookie-accept" onclick={on_accept}>{"Accept All"}</button>
                </div>
                <a class="cookie-privacy" href="#privacy">{"View Privacy Policy"}</a>
            </div>
        </div>
    }
}
