use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config;
use crate::engagement::{
    BrowserScheduler, BrowserStorage, DraftEdit, LeadForm, ModelInterest, Notice, PrimaryInterest,
};

#[derive(Properties, PartialEq)]
pub struct LeadFormDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_notify: Callback<Notice>,
}

#[function_component(LeadFormDialog)]
pub fn lead_form_dialog(props: &LeadFormDialogProps) -> Html {
    let rerender = use_force_update();
    let form = {
        let on_close = props.on_close.clone();
        let on_notify = props.on_notify.clone();
        let rerender = rerender.clone();
        use_mut_ref(move || {
            LeadForm::new(
                Rc::new(BrowserStorage),
                Rc::new(BrowserScheduler),
                Rc::new(on_notify),
                &config::timings(),
                move || on_close.emit(()),
                move || rerender.force_update(),
            )
        })
    };

    {
        let form = form.clone();
        use_effect_with_deps(move |_| move || form.borrow().teardown(), ());
    }

    if !props.open {
        return html! {};
    }

    let (draft, submitting) = {
        let form = form.borrow();
        (form.draft(), form.is_submitting())
    };

    let text_input = |edit: fn(String) -> DraftEdit| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.borrow().edit(edit(input.value()));
        })
    };
    let on_name = text_input(DraftEdit::Name);
    let on_email = text_input(DraftEdit::Email);
    let on_phone = text_input(DraftEdit::Phone);
    let on_city = text_input(DraftEdit::City);

    let on_model = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.borrow().edit(DraftEdit::Model(select.value().parse().ok()));
        })
    };
    let on_interest = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.borrow().edit(DraftEdit::Interest(select.value().parse().ok()));
        })
    };
    let on_terms = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.borrow().edit(DraftEdit::AgreedToTerms(input.checked()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.borrow().submit();
        })
    };
    let on_cancel = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            form.borrow().cancel();
        })
    };

    html! {
        <div class="lead-overlay">
            <style>
                {r#"
                    .lead-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.6);
                    }
                    .lead-dialog {
                        position: relative;
                        width: 100%;
                        max-width: 28rem;
                        max-height: 90vh;
                        overflow-y: auto;
                        padding: 1.5rem;
                        border-radius: 12px;
                        background: #fff;
                        color: #111;
                    }
                    .lead-dialog h2 { font-size: 1.25rem; margin-bottom: 1rem; }
                    .lead-field { display: flex; flex-direction: column; gap: 0.4rem; margin-bottom: 1rem; }
                    .lead-field input, .lead-field select { padding: 0.55rem 0.75rem; border: 1px solid #d4d4d8; border-radius: 6px; }
                    .lead-terms { display: flex; gap: 0.5rem; align-items: flex-start; font-size: 0.75rem; color: #52525b; }
                    .lead-buttons { display: flex; gap: 0.75rem; padding-top: 1rem; }
                    .lead-buttons button { flex: 1; padding: 0.6rem; border-radius: 6px; cursor: pointer; }
                    .lead-buttons button:disabled { opacity: 0.6; cursor: not-allowed; }
                    .lead-cancel { background: #fff; border: 1px solid #d4d4d8; }
                    .lead-submit { background: #2563eb; color: #fff; border: none; }
                    .lead-dismiss { position: absolute; top: 1rem; right: 1rem; background: none; border: none; cursor: pointer; }
                "#}
            </style>
            <div class="lead-dialog" role="dialog" aria-modal="true">
                <h2>{"🛵 Book Your Test Ride"}</h2>
                <button class="lead-dismiss" onclick={on_cancel.clone()} disabled={submitting} aria-label="Close">{"✕"}</button>
                <form {onsubmit}>
                    <div class="lead-field">
                        <label>{"Full Name *"}</label>
                        <input id="lead-name" type="text" placeholder="Enter your full name"
                            value={draft.name.clone()} oninput={on_name} required=true />
                    </div>
                    <div class="lead-field">
                        <label>{"Email Address *"}</label>
                        <input id="lead-email" type="email" placeholder="your.email@example.com"
                            value={draft.email.clone()} oninput={on_email} required=true />
                    </div>
                    <div class="lead-field">
                        <label>{"Phone Number *"}</label>
                        <input id="lead-phone" type="tel" placeholder="+91 9876543210"
                            value={draft.phone.clone()} oninput={on_phone} required=true />
                    </div>
                    <div class="lead-field">
                        <label>{"City"}</label>
                        <input id="lead-city" type="text" placeholder="Enter your city"
                            value={draft.city.clone()} oninput={on_city} />
                    </div>
                    <div class="lead-field">
                        <label>{"Which model interests you?"}</label>
                        <select id="lead-model" onchange={on_model}>
                            <option value="" selected={draft.model.is_none()}>{"Select a model"}</option>
                            { for ModelInterest::ALL.iter().map(|model| html! {
                                <option value={model.value()} selected={draft.model == Some(*model)}>
                                    { model.label() }
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="lead-field">
                        <label>{"Primary Interest"}</label>
                        <select id="lead-interest" onchange={on_interest}>
                            <option value="" selected={draft.interest.is_none()}>{"What are you looking for?"}</option>
                            { for PrimaryInterest::ALL.iter().map(|interest| html! {
                                <option value={interest.value()} selected={draft.interest == Some(*interest)}>
                                    { interest.label() }
                                </option>
                            }) }
                        </select>
                    </div>
                    <label class="lead-terms">
                        <input type="checkbox" checked={draft.agreed_to_terms} onchange={on_terms} />
                        {"I agree to receive communications from Ather Energy regarding their products and services. I understand that I can unsubscribe at any time. *"}
                    </label>
                    <div class="lead-buttons">
                        <button type="button" class="lead-cancel" onclick={on_cancel} disabled={submitting}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="lead-submit" disabled={submitting}>
                            { if submitting { "Submitting..." } else { "Book Test Ride" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
