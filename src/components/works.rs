//! Works Section
//!
//! Project cards. The card opens the live deployment, the corner button the source.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;
use portfolio_content::{LoadState, Project, Section};

use super::{SectionError, SectionLoading};
use crate::browser;
use crate::context::use_app_context;
use crate::section::use_section_loader;

const GITHUB_ICON: &str = "/assets/github.png";

/// Whether a key press on the card should open the live site.
/// Presses that bubble up from the card's own buttons do not count.
fn opens_live(key: &str, on_card: bool) -> bool {
    on_card && (key == "Enter" || key == " ")
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let live = project.live_url().map(str::to_string);
    let source = project.source_url().map(str::to_string);
    let has_live = live.is_some();
    let name = project.name.clone();

    let open_live = move || match &live {
        Some(url) => browser::open_in_new_tab(url),
        None => log::debug!("no live link"),
    };
    let on_card_click = {
        let open_live = open_live.clone();
        move |_: MouseEvent| open_live()
    };
    let on_card_key = {
        let open_live = open_live.clone();
        move |ev: KeyboardEvent| {
            if opens_live(&ev.key(), ev.target() == ev.current_target()) {
                open_live();
            }
        }
    };
    let on_badge_click = move |ev: MouseEvent| {
        ev.stop_propagation();
        open_live();
    };
    let on_source_click = move |ev: MouseEvent| {
        ev.stop_propagation();
        match &source {
            Some(url) => browser::open_in_new_tab(url),
            None => log::debug!("no source code link"),
        }
    };

    let (icon_failed, set_icon_failed) = signal(false);

    let tags = project
        .tags
        .iter()
        .map(|tag| {
            let class = format!("project-card__tag {}", tag.color);
            view! { <p class=class>"#"{tag.name.clone()}</p> }
        })
        .collect_view();

    view! {
        <div
            class=if has_live { "project-card project-card--live" } else { "project-card" }
            tabindex=if has_live { "0" } else { "-1" }
            aria-label=has_live.then(|| format!("Open {} live site", name))
            on:click=on_card_click
            on:keydown=on_card_key
        >
            <div class="project-card__media">
                <img src=project.image.clone() alt="project_image" class="project-card__image" />
                <button
                    class="project-card__source"
                    aria-label=format!("Open {} source code", project.name)
                    on:click=on_source_click
                    on:keydown=|ev: KeyboardEvent| ev.stop_propagation()
                >
                    {move || if icon_failed.get() {
                        view! { <span class="project-card__source-label">"GitHub"</span> }.into_any()
                    } else {
                        view! {
                            <img src=GITHUB_ICON alt="source code" on:error=move |_| set_icon_failed.set(true) />
                        }
                        .into_any()
                    }}
                </button>
            </div>
            <div class="project-card__body">
                <h3 class="project-card__title">
                    {project.name.clone()}
                    {has_live.then(|| view! {
                        <span class="project-card__badge" on:click=on_badge_click>"LIVE"</span>
                    })}
                </h3>
                <p class="project-card__description">{project.description.clone()}</p>
            </div>
            <div class="project-card__tags">{tags}</div>
        </div>
    }
}

#[component]
pub fn WorksSection() -> impl IntoView {
    let client = use_app_context().client;
    let state = use_section_loader(Section::Projects, move || async move {
        client.projects().await
    });

    view! {
        <section id="projects" class="section">
            {move || match state.get() {
                LoadState::Idle | LoadState::Loading => {
                    view! { <SectionLoading section=Section::Projects /> }.into_any()
                }
                LoadState::Failed(message) => view! { <SectionError message=message /> }.into_any(),
                LoadState::Ready(projects) => view! {
                    <div class="section__content">
                        <p class="section__subtitle">"My work"</p>
                        <h2 class="section__title">"Projects."</h2>
                        <p class="section__intro">
                            "Following projects showcase my skills and experience through real-world \
                             examples of my work. Each project is briefly described with links to code \
                             repositories and live demos."
                        </p>
                        <div class="project-grid">
                            {projects
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project /> })
                                .collect_view()}
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_keys_open_live() {
        assert!(opens_live("Enter", true));
        assert!(opens_live(" ", true));
        assert!(!opens_live("Tab", true));
    }

    #[test]
    fn test_keys_from_source_button_ignored() {
        assert!(!opens_live("Enter", false));
        assert!(!opens_live(" ", false));
    }
}
