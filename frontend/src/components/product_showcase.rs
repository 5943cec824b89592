use yew::prelude::*;

use crate::catalog::{find_model, MODELS};

#[derive(Properties, PartialEq)]
pub struct ProductShowcaseProps {
    pub on_open_form: Callback<()>,
}

#[function_component(ProductShowcase)]
pub fn product_showcase(props: &ProductShowcaseProps) -> Html {
    let active_model = use_state_eq(|| MODELS[0].id);
    let model = find_model(*active_model);

    let open_form = {
        let on_open_form = props.on_open_form.clone();
        Callback::from(move |_: MouseEvent| on_open_form.emit(()))
    };

    html! {
        <section class="showcase" id="models">
            <div class="section-header">
                <span class="badge">{"Our Product Range"}</span>
                <h2>{"Choose Your Perfect "}<span class="accent">{"Ather"}</span></h2>
                <p>{"From family-friendly to performance-focused, find the Ather scooter that matches your lifestyle"}</p>
            </div>

            <div class="model-selector">
                { for MODELS.iter().map(|candidate| {
                    let id = candidate.id;
                    let onclick = {
                        let active_model = active_model.clone();
                        Callback::from(move |_: MouseEvent| active_model.set(id))
                    };
                    html! {
                        <button
                            class={classes!("model-button", (*active_model == id).then(|| "active"))}
                            {onclick}
                        >
                            { candidate.name }
                        </button>
                    }
                }) }
            </div>

            <div class="model-detail" id={model.id}>
                <div class="model-image" style={format!("background-color: {}1a;", model.color)}>
                    <span style={format!("color: {};", model.color)}>{ model.name }</span>
                </div>
                <div class="model-info">
                    <h3>{ model.name }</h3>
                    <p class="model-tagline">{ model.tagline }</p>
                    <div class="model-price">
                        <span class="price">{ model.price }</span>
                        <span class="original-price">{ model.original_price }</span>
                    </div>
                    <div class="feature-grid">
                        { for model.features.iter().map(|feature| html! {
                            <div class="feature">
                                <div class="feature-label">{ feature.label }</div>
                                <div class="feature-value">{ feature.value }</div>
                            </div>
                        }) }
                    </div>
                    <h4>{"Key Highlights:"}</h4>
                    <ul class="highlights">
                        { for model.highlights.iter().map(|highlight| html! { <li>{ *highlight }</li> }) }
                    </ul>
                    <div class="model-actions">
                        <button class="primary-cta" onclick={open_form.clone()}>{"Book Test Ride"}</button>
                        <button class="secondary-cta" onclick={open_form}>{"Get Best Price"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}
