//! Portfolio Content
//!
//! Everything the portfolio front-end does besides rendering:
//! - client: HTTP access to the portfolio REST backend
//! - loader: per-section fetch lifecycle (idle -> loading -> ready | failed)
//! - classifier: grouping of fetched technologies into display categories
//!
//! Nothing in here touches the DOM, so the whole crate is testable natively.

pub mod assets;
pub mod classifier;
pub mod client;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;

pub use classifier::{Category, CategoryRule, Classifier, IconTable, Skill, TechStyle};
pub use client::{ContentClient, ContentSource, RequestOptions};
pub use config::ClientConfig;
pub use error::{ContentError, ContentResult};
pub use loader::{Activation, LoadState, Resolution, Section, SectionLoader};
pub use models::{Certificate, Experience, Project, ProjectTag, Service, Technology};
