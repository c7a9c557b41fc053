//! Experience Section
//!
//! Vertical timeline of work experience.

use leptos::prelude::*;
use portfolio_content::assets::resolve_asset_url;
use portfolio_content::{Experience, LoadState, Section};

use super::{SectionError, SectionLoading};
use crate::browser;
use crate::context::use_app_context;
use crate::section::use_section_loader;

/// Timeline bubble: the logo, or an initial once the logo is missing or broken
#[component]
fn TimelineIcon(logo: Option<String>, alt: String, initial: String) -> impl IntoView {
    let (logo_failed, set_logo_failed) = signal(false);

    move || match logo.clone() {
        Some(src) if !logo_failed.get() => {
            let failed_src = src.clone();
            view! {
                <img
                    class="timeline-entry__logo"
                    src=src
                    alt=alt.clone()
                    on:error=move |_| {
                        log::warn!("Failed to load logo: {}", failed_src);
                        set_logo_failed.set(true);
                    }
                />
            }
            .into_any()
        }
        _ => view! { <span class="timeline-entry__initial">{initial.clone()}</span> }.into_any(),
    }
}

#[component]
fn ExperienceCard(experience: Experience) -> impl IntoView {
    let logo = experience
        .logo
        .as_deref()
        .filter(|path| !path.trim().is_empty())
        .map(|path| resolve_asset_url(path, &browser::page_origin()));
    let alt = format!("{} logo", experience.title);
    let initial = experience.badge_initial();

    let technologies = experience.technologies.map(|techs| {
        view! {
            <div class="timeline-entry__techs">
                {techs
                    .into_iter()
                    .map(|tech| view! { <span class="timeline-entry__tech">{tech}</span> })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class="timeline-entry">
            <div class="timeline-entry__icon">
                <TimelineIcon logo=logo alt=alt initial=initial />
            </div>
            <div class="timeline-entry__date">{experience.date}</div>
            <div class="timeline-entry__card">
                <h3 class="timeline-entry__title">{experience.title}</h3>
                {experience.company.map(|company| view! { <p class="timeline-entry__company">{company}</p> })}
                {experience.location.map(|location| view! { <p class="timeline-entry__location">{location}</p> })}
                {technologies}
                <ul class="timeline-entry__points">
                    {experience
                        .points
                        .into_iter()
                        .map(|point| view! { <li>{point}</li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let client = use_app_context().client;
    let state = use_section_loader(Section::Experience, move || async move {
        client.experiences().await
    });

    view! {
        <section id="work" class="section">
            {move || match state.get() {
                LoadState::Idle | LoadState::Loading => {
                    view! { <SectionLoading section=Section::Experience /> }.into_any()
                }
                LoadState::Failed(message) => view! { <SectionError message=message /> }.into_any(),
                LoadState::Ready(experiences) => view! {
                    <div class="section__content">
                        <p class="section__subtitle section__subtitle--center">"What I have done so far"</p>
                        <h2 class="section__title section__title--center">"Work Experience."</h2>
                        <div class="timeline">
                            {experiences
                                .into_iter()
                                .map(|experience| view! { <ExperienceCard experience=experience /> })
                                .collect_view()}
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
