use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::catalog::{find_city, CITIES, NEARBY_DEALERSHIPS};

#[derive(Properties, PartialEq)]
pub struct MapSectionProps {
    pub on_open_form: Callback<()>,
}

/// Dealer locator. The search box is display-only.
#[function_component(MapSection)]
pub fn map_section(props: &MapSectionProps) -> Html {
    let search = use_state(String::new);
    let selected = use_state_eq(|| CITIES[0].id);
    let city = find_city(*selected);

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    html! {
        <section class="locator" id="dealers">
            <div class="section-header">
                <span class="badge">{"Find Us Near You"}</span>
                <h2>{"Visit an Ather "}<span class="accent">{"Experience Center"}</span></h2>
                <p>{"Test ride, explore our scooters, and get expert advice at our experience centers across India"}</p>
            </div>

            <div class="locator-grid">
                <div class="locator-cities">
                    <input
                        class="locator-search"
                        placeholder="Search your city..."
                        value={(*search).clone()}
                        oninput={on_search}
                    />
                    <h3>{"Popular Cities"}</h3>
                    { for CITIES.iter().map(|candidate| {
                        let id = candidate.id;
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(id))
                        };
                        html! {
                            <button
                                class={classes!("city-button", (*selected == id).then(|| "active"))}
                                {onclick}
                            >
                                <span class="city-name">
                                    { candidate.city }
                                    if candidate.featured {
                                        <span class="badge featured">{"Featured"}</span>
                                    }
                                </span>
                                <span class="city-state">{ candidate.state }</span>
                                <span class="city-count">{ format!("{} centers", candidate.dealerships) }</span>
                            </button>
                        }
                    }) }

                    <div class="network-stats">
                        <h3>{ format!("Ather Network in {}", city.city) }</h3>
                        <div class="stat">
                            <span class="stat-value">{ city.dealerships.to_string() }</span>
                            <span class="stat-label">{"Experience Centers"}</span>
                        </div>
                        <div class="stat">
                            <span class="stat-value">{ city.charging_stations.to_string() }</span>
                            <span class="stat-label">{"Charging Points"}</span>
                        </div>
                    </div>
                </div>

                <div class="locator-map">
                    <div class="map-header">
                        <span>{ format!("📍 {}, {}", city.city, city.state) }</span>
                    </div>
                    <div class="map-area">
                        <span class="marker marker-a">{"Koramangala"}</span>
                        <span class="marker marker-b">{"Charging Hub"}</span>
                        <span class="marker marker-c">{"Indiranagar"}</span>
                    </div>

                    <h4>{"Nearby Ather Experience Centers"}</h4>
                    { for NEARBY_DEALERSHIPS.iter().map(|dealer| {
                        let onclick = {
                            let on_open_form = props.on_open_form.clone();
                            Callback::from(move |_: MouseEvent| on_open_form.emit(()))
                        };
                        html! {
                            <div class="dealer-card">
                                <div class="dealer-head">
                                    <h5>{ dealer.name }</h5>
                                    <span class="dealer-distance">{ dealer.distance }</span>
                                </div>
                                <p>{ dealer.address }</p>
                                <p>{ format!("☎ {}  ·  🕒 {}", dealer.phone, dealer.hours) }</p>
                                <div class="dealer-services">
                                    { for dealer.services.iter().map(|service| html! {
                                        <span class="badge">{ *service }</span>
                                    }) }
                                </div>
                                <button class="primary-cta" {onclick}>{"Book Visit"}</button>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
