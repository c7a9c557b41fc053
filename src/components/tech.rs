//! Tech Section
//!
//! Technologies grouped by category, each with its icon or a colored initial.

use leptos::prelude::*;
use portfolio_content::{Category, ContentSource, LoadState, Section, Skill};

use super::{SectionError, SectionLoading};
use crate::context::use_app_context;
use crate::section::use_section_loader;

#[component]
fn TechSkill(skill: Skill) -> impl IntoView {
    let glyph = skill.glyph();
    let Skill { name, icon, color } = skill;
    let (icon_failed, set_icon_failed) = signal(false);

    let badge = {
        let name = name.clone();
        let color = color.clone();
        move || match icon.clone() {
            Some(src) if !icon_failed.get() => view! {
                <img
                    class="tech-skill__icon"
                    src=src
                    alt=name.clone()
                    on:error=move |_| set_icon_failed.set(true)
                />
            }
            .into_any(),
            _ => view! {
                <div class="tech-skill__glyph" style=format!("background-color: {}", color)>{glyph.clone()}</div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="tech-skill" style=format!("--skill-color: {}", color)>
            {badge}
            <span class="tech-skill__name">{name}</span>
        </div>
    }
}

#[component]
fn TechCategory(category: Category) -> impl IntoView {
    view! {
        <div class="tech-category">
            <h3 class="tech-category__title">{category.title}</h3>
            <div class="tech-category__skills">
                {category
                    .skills
                    .into_iter()
                    .map(|skill| view! { <TechSkill skill=skill /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn TechSection() -> impl IntoView {
    let ctx = use_app_context();
    let client = ctx.client;
    let classifier = ctx.classifier;
    let state = use_section_loader(Section::Technologies, move || async move {
        client.categories(&classifier).await
    });

    view! {
        <section id="tech" class="section">
            {move || match state.get() {
                LoadState::Idle | LoadState::Loading => {
                    view! { <SectionLoading section=Section::Technologies /> }.into_any()
                }
                LoadState::Failed(message) => view! { <SectionError message=message /> }.into_any(),
                LoadState::Ready(categories) => view! {
                    <div class="section__content">
                        <p class="section__subtitle section__subtitle--center">"My technical expertise"</p>
                        <h2 class="section__title section__title--center">"Skills & Technologies."</h2>
                        <div class="tech-grid">
                            {categories
                                .into_iter()
                                .map(|category| view! { <TechCategory category=category /> })
                                .collect_view()}
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
