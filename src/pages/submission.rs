//! RFP Detail Submission Page

use leptos::prelude::*;

use crate::components::MultiStepFormWizard;

#[component]
pub fn Submission() -> impl IntoView {
    view! {
        <div class="page submission">
            <p class="page-intro muted">
                "Capture the RFP details and requirements, then review before submitting."
            </p>
            <MultiStepFormWizard />
        </div>
    }
}
