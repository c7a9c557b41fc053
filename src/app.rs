//! Portfolio Frontend App
//!
//! Page shell: every section loads on its own and renders its own status.

use leptos::prelude::*;
use portfolio_content::{Classifier, ClientConfig, ContentClient};

use crate::components::{CertificatesSection, ExperienceSection, TechSection, WorksSection};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    log::info!("content API at {}", config.base_url);

    provide_context(AppContext::new(ContentClient::new(config), Classifier::builtin()));

    view! {
        <main class="portfolio">
            <ExperienceSection />
            <TechSection />
            <WorksSection />
            <CertificatesSection />
        </main>
    }
}
