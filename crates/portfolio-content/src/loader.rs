//! Section Loader
//!
//! Fetch lifecycle for one page section:
//!
//! ```text
//! Idle --activate--> Loading --resolve(Ok)--> Ready(items)
//!                            \--resolve(Err)-> Failed(message)
//! ```
//!
//! Activation happens once per loader. There is no retry and no way out of
//! `Ready`/`Failed`; a remount builds a fresh loader. Errors stop here: they are
//! logged and turned into a user-facing message.

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ContentError;

static NEXT_LOADER_ID: AtomicU64 = AtomicU64::new(1);

/// Top-level content area of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Projects,
    Experience,
    Certificates,
    Technologies,
}

impl Section {
    /// Noun used in status messages
    pub fn label(&self) -> &'static str {
        match self {
            Section::Projects => "projects",
            Section::Experience => "experiences",
            Section::Certificates => "certificates",
            Section::Technologies => "technologies",
        }
    }

    pub fn loading_message(&self) -> String {
        format!("Loading {}...", self.label())
    }

    pub fn error_message(&self) -> String {
        format!("Failed to load {}. Please try again later.", self.label())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> LoadState<T> {
    /// Idle and Loading both render as a loading placeholder
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Idle | LoadState::Loading)
    }

    /// Section data; empty unless Ready
    pub fn items(&self) -> &[T] {
        match self {
            LoadState::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Ticket handed out by [`SectionLoader::activate`]; only its own loader accepts it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    loader_id: u64,
}

/// Outcome of handing a result to [`SectionLoader::resolve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// Loader was torn down, not loading, or the ticket belongs elsewhere
    Discarded,
}

#[derive(Debug)]
pub struct SectionLoader<T> {
    id: u64,
    section: Section,
    state: LoadState<T>,
    torn_down: bool,
}

impl<T> SectionLoader<T> {
    pub fn new(section: Section) -> Self {
        Self {
            id: NEXT_LOADER_ID.fetch_add(1, Ordering::Relaxed),
            section,
            state: LoadState::Idle,
            torn_down: false,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        self.state.items()
    }

    pub fn is_active(&self) -> bool {
        !self.torn_down
    }

    /// Idle -> Loading. Returns `None` on every call after the first.
    pub fn activate(&mut self) -> Option<Activation> {
        if self.torn_down || !matches!(self.state, LoadState::Idle) {
            return None;
        }
        self.state = LoadState::Loading;
        log::debug!("[{}] loading", self.section);
        Some(Activation { loader_id: self.id })
    }

    /// Loading -> Ready | Failed
    pub fn resolve(
        &mut self,
        activation: Activation,
        result: Result<Vec<T>, ContentError>,
    ) -> Resolution {
        if activation.loader_id != self.id
            || self.torn_down
            || !matches!(self.state, LoadState::Loading)
        {
            log::debug!("[{}] ignoring stale completion", self.section);
            return Resolution::Discarded;
        }

        self.state = match result {
            Ok(items) => {
                log::debug!("[{}] loaded {} entries", self.section, items.len());
                LoadState::Ready(items)
            }
            Err(err) => {
                log::error!("Failed to fetch {}: {}", self.section, err);
                LoadState::Failed(self.section.error_message())
            }
        };
        Resolution::Applied
    }

    /// Owning view went away; later completions are dropped.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    /// Activate, await `fetch`, resolve. A loader that was already activated
    /// returns its current state without polling `fetch`.
    pub async fn load<F>(&mut self, fetch: F) -> &LoadState<T>
    where
        F: Future<Output = Result<Vec<T>, ContentError>>,
    {
        if let Some(activation) = self.activate() {
            let result = fetch.await;
            self.resolve(activation, result);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> ContentError {
        ContentError::Transport {
            status: 404,
            status_text: "Not Found".to_string(),
        }
    }

    #[test]
    fn test_starts_idle() {
        let loader = SectionLoader::<u32>::new(Section::Projects);
        assert_eq!(loader.state(), &LoadState::Idle);
        assert!(loader.state().is_pending());
        assert!(loader.items().is_empty());
    }

    #[test]
    fn test_activate_only_once() {
        let mut loader = SectionLoader::<u32>::new(Section::Projects);
        assert!(loader.activate().is_some());
        assert_eq!(loader.state(), &LoadState::Loading);
        assert!(loader.activate().is_none());
    }

    #[test]
    fn test_resolve_ok() {
        let mut loader = SectionLoader::new(Section::Certificates);
        let ticket = loader.activate().unwrap();

        assert_eq!(loader.resolve(ticket, Ok(vec![3, 1, 2])), Resolution::Applied);
        assert_eq!(loader.items(), &[3, 1, 2]);
        assert!(loader.state().error().is_none());
    }

    #[test]
    fn test_resolve_err_sets_message_and_clears_data() {
        let mut loader = SectionLoader::<u32>::new(Section::Experience);
        let ticket = loader.activate().unwrap();

        loader.resolve(ticket, Err(not_found()));

        assert_eq!(
            loader.state().error(),
            Some("Failed to load experiences. Please try again later.")
        );
        assert!(loader.items().is_empty());
    }

    #[test]
    fn test_terminal_states_stay_put() {
        let mut loader = SectionLoader::new(Section::Projects);
        let ticket = loader.activate().unwrap();
        loader.resolve(ticket, Ok(vec![1]));

        assert_eq!(loader.resolve(ticket, Err(not_found())), Resolution::Discarded);
        assert_eq!(loader.items(), &[1]);
        assert!(loader.activate().is_none());
    }

    #[test]
    fn test_teardown_discards_completion() {
        let mut loader = SectionLoader::new(Section::Technologies);
        let ticket = loader.activate().unwrap();
        loader.teardown();

        assert_eq!(loader.resolve(ticket, Ok(vec![1, 2])), Resolution::Discarded);
        assert_eq!(loader.state(), &LoadState::Loading);
        assert!(!loader.is_active());
    }

    #[test]
    fn test_foreign_ticket_rejected() {
        let mut projects = SectionLoader::<u32>::new(Section::Projects);
        let mut certificates = SectionLoader::<u32>::new(Section::Certificates);
        let _ = projects.activate().unwrap();
        let cert_ticket = certificates.activate().unwrap();

        assert_eq!(projects.resolve(cert_ticket, Ok(vec![9])), Resolution::Discarded);
        assert_eq!(projects.state(), &LoadState::Loading);
        assert_eq!(certificates.state(), &LoadState::Loading);
    }

    #[test]
    fn test_section_messages() {
        assert_eq!(Section::Projects.loading_message(), "Loading projects...");
        assert_eq!(
            Section::Technologies.error_message(),
            "Failed to load technologies. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_load_runs_fetch_once() {
        let mut loader = SectionLoader::new(Section::Projects);
        loader.load(async { Ok(vec!["a", "b"]) }).await;
        assert_eq!(loader.items(), &["a", "b"]);

        let polled = std::cell::Cell::new(false);
        let state = loader
            .load(async {
                polled.set(true);
                Ok(vec!["c"])
            })
            .await;
        assert_eq!(state.items(), &["a", "b"]);
        assert!(!polled.get());
    }

    #[tokio::test]
    async fn test_loaders_are_independent() {
        let mut projects = SectionLoader::<&str>::new(Section::Projects);
        let mut certificates = SectionLoader::<&str>::new(Section::Certificates);

        let (projects_state, certificates_state) = tokio::join!(
            projects.load(async { Ok(vec!["site"]) }),
            certificates.load(async { Err(not_found()) }),
        );

        assert_eq!(projects_state.items(), &["site"]);
        assert!(certificates_state.error().is_some());
    }
}
