use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem;">
            <h1 style="font-size: 3rem; font-weight: 700;">{"404"}</h1>
            <p style="color: #6b7280;">{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="primary-cta">
                {"Return to Home"}
            </Link<Route>>
        </div>
    }
}
