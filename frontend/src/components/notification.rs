use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::engagement::{Notice, NoticeKind};

/// Only the newest notice stays on screen.
pub const TOAST_LIMIT: usize = 1;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    pub toasts: Vec<(u32, Notice)>,
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(notice) => {
                let mut next = (*self).clone();
                next.toasts.push((next.next_id, notice));
                next.next_id = next.next_id.wrapping_add(1);
                let overflow = next.toasts.len().saturating_sub(TOAST_LIMIT);
                next.toasts.drain(..overflow);
                Rc::new(next)
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|(toast_id, _)| *toast_id == id) {
                    return self;
                }
                let mut next = (*self).clone();
                next.toasts.retain(|(toast_id, _)| *toast_id != id);
                Rc::new(next)
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<(u32, Notice)>,
    pub duration_ms: u32,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster">
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        bottom: 1rem;
                        right: 1rem;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .toast {
                        max-width: 360px;
                        padding: 1rem 1.25rem;
                        border-radius: 8px;
                        background: #fff;
                        color: #111;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
                        cursor: pointer;
                    }
                    .toast.destructive {
                        background: #dc2626;
                        color: #fff;
                    }
                    .toast-title { font-weight: 600; margin-bottom: 0.25rem; }
                    .toast-description { font-size: 0.875rem; opacity: 0.9; }
                "#}
            </style>
            { for props.toasts.iter().map(|(id, notice)| html! {
                <ToastItem
                    key={*id}
                    id={*id}
                    notice={notice.clone()}
                    duration_ms={props.duration_ms}
                    on_dismiss={props.on_dismiss.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    id: u32,
    notice: Notice,
    duration_ms: u32,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let duration_ms = props.duration_ms;
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(duration_ms, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            props.id,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = match props.notice.kind {
        NoticeKind::Info => "toast",
        NoticeKind::Destructive => "toast destructive",
    };

    html! {
        <div {class} {onclick} role="status">
            <div class="toast-title">{ &props.notice.title }</div>
            <div class="toast-description">{ &props.notice.description }</div>
        </div>
    }
}
