//! Application Context
//!
//! Shared, read-only services provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use portfolio_content::{Classifier, ContentClient};

/// Content client and technology classifier, shared by every section
#[derive(Clone)]
pub struct AppContext {
    pub client: ContentClient,
    pub classifier: Arc<Classifier>,
}

impl AppContext {
    pub fn new(client: ContentClient, classifier: Classifier) -> Self {
        Self {
            client,
            classifier: Arc::new(classifier),
        }
    }
}

/// Get the app context; panics outside `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
