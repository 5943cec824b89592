use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

use super::scheduler::Cancellable;

/// Best-effort signal that the page is about to go away.
pub trait UnloadSignal {
    fn subscribe(&self, listener: Box<dyn FnMut()>) -> Cancellable;
}

/// The window `beforeunload` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserUnloadSignal;

impl UnloadSignal for BrowserUnloadSignal {
    fn subscribe(&self, mut listener: Box<dyn FnMut()>) -> Cancellable {
        let Some(window) = window() else {
            warn!("No window, beforeunload listener not installed");
            return Cancellable::noop();
        };

        let callback = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            listener();
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Err(e) = window
            .add_event_listener_with_callback("beforeunload", callback.as_ref().unchecked_ref())
        {
            warn!("Failed to install beforeunload listener: {:?}", e);
            return Cancellable::noop();
        }

        // The closure has to outlive the registration, so it rides along with
        // the handle and is dropped only after removal.
        Cancellable::new(move || {
            let _ = window
                .remove_event_listener_with_callback("beforeunload", callback.as_ref().unchecked_ref());
        })
    }
}
