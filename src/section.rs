//! Section Loading
//!
//! Binds a [`SectionLoader`] to the lifetime of the component that calls it.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_content::{ContentResult, LoadState, Resolution, Section, SectionLoader};

/// Start loading `section` once, on mount, and expose its state.
///
/// Unmounting tears the loader down. A response arriving afterwards finds either
/// a torn-down loader or a disposed signal and is dropped.
pub fn use_section_loader<T, F, Fut>(section: Section, fetch: F) -> Signal<LoadState<T>>
where
    T: Clone + Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = ContentResult<Vec<T>>> + 'static,
{
    let loader = RwSignal::new(SectionLoader::new(section));

    if let Some(activation) = loader.try_update(|l| l.activate()).flatten() {
        spawn_local(async move {
            let result = fetch().await;
            match loader.try_update(|l| l.resolve(activation, result)) {
                Some(Resolution::Applied) => {}
                Some(Resolution::Discarded) | None => {
                    log::debug!("[{}] response arrived after unmount", section);
                }
            }
        });
    }

    on_cleanup(move || {
        loader.try_update(|l| l.teardown());
    });

    Signal::derive(move || loader.with(|l| l.state().clone()))
}
