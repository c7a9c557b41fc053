//! Certificates Section

use leptos::prelude::*;
use portfolio_content::{Certificate, LoadState, Section};

use super::{SectionError, SectionLoading};
use crate::context::use_app_context;
use crate::section::use_section_loader;

#[component]
fn CertificateCard(certificate: Certificate) -> impl IntoView {
    let image = certificate.image_src().map(str::to_string);
    let verify_link = certificate.verify_url().map(str::to_string);
    let Certificate {
        title,
        issuer,
        year,
        kind,
        ..
    } = certificate;
    let alt = format!("{} logo", issuer);

    view! {
        <div class="certificate-card">
            <div class="certificate-card__header">
                {image.map(|src| view! {
                    <img class="certificate-card__logo" src=src alt=alt loading="lazy" />
                })}
                <div>
                    <h3 class="certificate-card__title">{title}</h3>
                    <p class="certificate-card__issuer">{format!("{} • {}", issuer, year)}</p>
                    {verify_link.map(|href| view! {
                        <a class="certificate-card__verify" href=href target="_blank" rel="noopener noreferrer">
                            "Verify"
                        </a>
                    })}
                </div>
            </div>
            <div class="certificate-card__type">{kind}</div>
        </div>
    }
}

#[component]
pub fn CertificatesSection() -> impl IntoView {
    let client = use_app_context().client;
    let state = use_section_loader(Section::Certificates, move || async move {
        client.certificates().await
    });

    view! {
        <section id="certificates" class="section">
            {move || match state.get() {
                LoadState::Idle | LoadState::Loading => {
                    view! { <SectionLoading section=Section::Certificates /> }.into_any()
                }
                LoadState::Failed(message) => view! { <SectionError message=message /> }.into_any(),
                LoadState::Ready(certificates) => view! {
                    <div class="section__content">
                        <p class="section__subtitle">"Achievements"</p>
                        <h2 class="section__title">"Certificates"</h2>
                        <div class="certificate-grid">
                            {certificates
                                .into_iter()
                                .map(|certificate| view! { <CertificateCard certificate=certificate /> })
                                .collect_view()}
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
