//! Multi-Step Form Wizard Component
//!
//! Stepper over `WizardState`: RFP details, requirements, review.
//! All transitions go through the core state machine; this component only
//! renders the snapshot and moves DOM focus where validation points.

use leptos::prelude::*;
use rfp_core::{Advance, FieldKey, SubmitError, WizardState};
use wasm_bindgen::JsCast;

use crate::context::use_app_context;

/// Move keyboard focus to a field's input, if it is on screen
fn focus_field(field: Option<FieldKey>) {
    let Some(field) = field else {
        return;
    };
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(field.as_str()))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(element) = element {
        let _ = element.focus();
    }
}

fn placeholder(field: FieldKey) -> &'static str {
    match field {
        FieldKey::Title => "e.g., Enterprise Software Implementation",
        FieldKey::ClientName => "e.g., Acme Corporation",
        FieldKey::DueDate => "YYYY-MM-DD",
        FieldKey::Requirements => "Describe the submission requirements...",
        FieldKey::Notes => "Internal notes for the team...",
    }
}

fn is_multiline(field: FieldKey) -> bool {
    matches!(field, FieldKey::Requirements | FieldKey::Notes)
}

#[component]
pub fn MultiStepFormWizard() -> impl IntoView {
    let ctx = use_app_context();

    // Fresh form every time the page mounts
    let wizard = RwSignal::new(WizardState::rfp());

    let step_names: Vec<String> = wizard.with_untracked(|w| w.steps().iter().map(|s| s.name.clone()).collect());

    let submit = move || {
        let Some(result) = wizard.try_update(|w| w.submit(&ctx)) else {
            return;
        };
        match result {
            Ok(submission) => {
                let record = serde_json::to_string(&submission).unwrap_or_default();
                tracing::info!(submission = %record, "RFP submitted");
            }
            Err(SubmitError::Invalid(errors)) => {
                tracing::warn!(fields = errors.len(), "submission blocked by validation");
                focus_field(wizard.try_update(|w| w.take_focus()).flatten());
            }
            Err(e) => tracing::warn!(error = %e, "submission rejected"),
        }
    };

    let on_next = move || match wizard.try_update(|w| w.advance()) {
        Some(Advance::Moved(step)) => tracing::debug!(step, "wizard advanced"),
        Some(Advance::Blocked(errors)) => {
            tracing::debug!(fields = errors.len(), "wizard step blocked");
            focus_field(wizard.try_update(|w| w.take_focus()).flatten());
        }
        Some(Advance::AtEnd) => submit(),
        None => {}
    };

    let on_prev = move |_| {
        wizard.update(|w| {
            w.retreat();
        });
    };

    // Enter in a single-line input acts like Next
    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_next();
    };

    let start_over = move |_| wizard.update(WizardState::reset);

    let current_fields = move || wizard.with(|w| w.current_step().fields.clone());
    let is_last = move || wizard.with(|w| w.is_last_step());

    view! {
        <div class="wizard card">
            <ol class="wizard-stepper">
                {step_names
                    .into_iter()
                    .enumerate()
                    .map(|(i, name)| {
                        let step_class = move || {
                            let current = wizard.with(|w| w.step_index());
                            if i == current {
                                "wizard-step active"
                            } else if i < current {
                                "wizard-step done"
                            } else {
                                "wizard-step"
                            }
                        };
                        view! {
                            <li class=step_class>
                                <span class="wizard-step-number">{i + 1}</span>
                                <span class="wizard-step-name">{name}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <Show
                when=move || !wizard.with(|w| w.is_complete())
                fallback=move || view! {
                    <div class="wizard-complete">
                        <h2>"RFP Submitted Successfully!"</h2>
                        <p>"The RFP details have been saved."</p>
                        <button class="btn btn-primary" on:click=start_over>"Start another"</button>
                    </div>
                }
            >
                <form class="wizard-form" on:submit=on_form_submit novalidate=true>
                    <h2 class="wizard-step-title">{move || wizard.with(|w| w.current_step().name.clone())}</h2>

                    <Show
                        when=move || !is_last()
                        fallback=move || view! { <ReviewPanel wizard=wizard /> }
                    >
                        <For
                            each=current_fields
                            key=|field| *field
                            children=move |field| view! { <WizardField wizard=wizard field=field /> }
                        />
                    </Show>

                    <div class="wizard-actions">
                        <button
                            type="button"
                            class="btn btn-outline"
                            disabled=move || wizard.with(|w| w.is_first_step())
                            on:click=on_prev
                        >
                            "Previous"
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {move || if is_last() { "Submit RFP" } else { "Next" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn WizardField(wizard: RwSignal<WizardState>, field: FieldKey) -> impl IntoView {
    let value = move || wizard.with(|w| w.value(field).to_string());
    let error = move || wizard.with(|w| w.error(field).map(str::to_string));
    let required = wizard.with_untracked(|w| w.is_required(field));
    let on_input = move |ev: web_sys::Event| wizard.update(|w| w.set_value(field, event_target_value(&ev)));

    let input_class = move || {
        if error().is_some() {
            "input invalid"
        } else {
            "input"
        }
    };

    let control = if is_multiline(field) {
        view! {
            <textarea
                id=field.as_str()
                class=input_class
                rows="5"
                placeholder=placeholder(field)
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.as_str()
                class=input_class
                type="text"
                placeholder=placeholder(field)
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field">
            <label for=field.as_str()>
                {field.label()}
                {(!required).then_some(view! { <span class="optional">" (optional)"</span> })}
            </label>
            {control}
            {move || error().map(|message| view! { <p class="field-error">{message}</p> })}
        </div>
    }
}

#[component]
fn ReviewPanel(wizard: RwSignal<WizardState>) -> impl IntoView {
    view! {
        <dl class="wizard-review">
            {move || {
                wizard
                    .with(|w| w.review_rows())
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="review-row">
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        </div>
                    })
                    .collect_view()
            }}
        </dl>
    }
}
