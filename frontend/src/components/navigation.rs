use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::catalog::NAV_ITEMS;

const SCROLL_THRESHOLD_PX: i32 = 10;

/// Clicking the open dropdown closes it; clicking another switches to it.
pub fn toggle_dropdown(current: Option<&'static str>, label: &'static str) -> Option<&'static str> {
    if current == Some(label) {
        None
    } else {
        Some(label)
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_open_form: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);
    let open_dropdown = use_state_eq(|| None::<&'static str>);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let document = window.document();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_top = document
                            .as_ref()
                            .and_then(|d| d.document_element())
                            .map_or(0, |root| root.scroll_top());
                        is_scrolled.set(scroll_top > SCROLL_THRESHOLD_PX);
                    }) as Box<dyn FnMut()>);

                    if let Err(err) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Could not listen for scroll: {:?}", err);
                    }
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        let open_dropdown = open_dropdown.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            open_dropdown.set(None);
        })
    };

    let book_ride = {
        let on_open_form = props.on_open_form.clone();
        let close_menu = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            close_menu.emit(e);
            on_open_form.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">{"ather"}</a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().map(|item| {
                        if item.dropdown.is_empty() {
                            return html! {
                                <a href={item.href} class="nav-link" onclick={close_menu.clone()}>
                                    { item.label }
                                </a>
                            };
                        }
                        let label = item.label;
                        let toggle = {
                            let open_dropdown = open_dropdown.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                open_dropdown.set(toggle_dropdown(*open_dropdown, label));
                            })
                        };
                        let expanded = *open_dropdown == Some(label);
                        html! {
                            <div class="nav-dropdown">
                                <a href={item.href} class="nav-link" onclick={toggle}>
                                    { item.label }{ if expanded { " ▴" } else { " ▾" } }
                                </a>
                                if expanded {
                                    <div class="nav-dropdown-menu">
                                        { for item.dropdown.iter().map(|link| html! {
                                            <a href={link.href} class="nav-dropdown-link" onclick={close_menu.clone()}>
                                                { link.label }
                                            </a>
                                        }) }
                                    </div>
                                }
                            </div>
                        }
                    }) }
                    <button class="nav-cta" onclick={book_ride}>
                        {"Book Test Ride"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_dropdown_open_at_a_time() {
        let open = toggle_dropdown(None, "Ather 450");
        assert_eq!(open, Some("Ather 450"));

        let open = toggle_dropdown(open, "Ather Ecosystem");
        assert_eq!(open, Some("Ather Ecosystem"));

        assert_eq!(toggle_dropdown(open, "Ather Ecosystem"), None);
    }
}
