//! Section Status Placeholders

use leptos::prelude::*;
use portfolio_content::Section;

/// Shown while a section's request is in flight
#[component]
pub fn SectionLoading(section: Section) -> impl IntoView {
    view! {
        <div class="section-status">
            <div class="section-status__text">{section.loading_message()}</div>
        </div>
    }
}

/// Replaces the whole section when its request failed
#[component]
pub fn SectionError(message: String) -> impl IntoView {
    view! {
        <div class="section-status">
            <div class="section-status__text section-status__text--error">{message}</div>
        </div>
    }
}
