//! Content Source Trait
//!
//! The four section reads, abstracted so loaders can be fed by fixtures.

use async_trait::async_trait;

use super::ContentClient;
use crate::classifier::{Category, Classifier};
use crate::error::ContentResult;
use crate::models::{Certificate, Experience, Project, Technology};

/// Where section data comes from.
///
/// Futures are `?Send`: in the browser they run on the single JS thread.
#[async_trait(?Send)]
pub trait ContentSource {
    async fn projects(&self) -> ContentResult<Vec<Project>>;

    async fn experiences(&self) -> ContentResult<Vec<Experience>>;

    async fn certificates(&self) -> ContentResult<Vec<Certificate>>;

    async fn technologies(&self) -> ContentResult<Vec<Technology>>;

    /// Technologies, grouped for display
    async fn categories(&self, classifier: &Classifier) -> ContentResult<Vec<Category>> {
        let technologies = self.technologies().await?;
        Ok(classifier.classify(&technologies))
    }
}

#[async_trait(?Send)]
impl ContentSource for ContentClient {
    async fn projects(&self) -> ContentResult<Vec<Project>> {
        ContentClient::projects(self).await
    }

    async fn experiences(&self) -> ContentResult<Vec<Experience>> {
        ContentClient::experiences(self).await
    }

    async fn certificates(&self) -> ContentResult<Vec<Certificate>> {
        ContentClient::certificates(self).await
    }

    async fn technologies(&self) -> ContentResult<Vec<Technology>> {
        ContentClient::technologies(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;
    use crate::loader::{Section, SectionLoader};

    /// Canned technologies; every other section is unavailable
    struct FixtureSource {
        technologies: Vec<&'static str>,
    }

    fn unavailable<T>() -> ContentResult<Vec<T>> {
        Err(ContentError::Transport {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        })
    }

    #[async_trait(?Send)]
    impl ContentSource for FixtureSource {
        async fn projects(&self) -> ContentResult<Vec<Project>> {
            unavailable()
        }

        async fn experiences(&self) -> ContentResult<Vec<Experience>> {
            unavailable()
        }

        async fn certificates(&self) -> ContentResult<Vec<Certificate>> {
            unavailable()
        }

        async fn technologies(&self) -> ContentResult<Vec<Technology>> {
            Ok(self.technologies.iter().map(|name| Technology::new(*name)).collect())
        }
    }

    #[tokio::test]
    async fn test_categories_from_fixture() {
        let source = FixtureSource {
            technologies: vec!["Redis", "React JS", "Figma"],
        };
        let classifier = Classifier::builtin();

        let categories = source.categories(&classifier).await.unwrap();
        let titles: Vec<&str> = categories.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Frontend Development", "Databases", "Development Tools"]);
    }

    #[tokio::test]
    async fn test_fixture_failure_reaches_loader() {
        let source = FixtureSource { technologies: vec![] };

        let mut projects = SectionLoader::new(Section::Projects);
        let mut technologies = SectionLoader::new(Section::Technologies);
        projects.load(source.projects()).await;
        technologies.load(source.technologies()).await;

        assert_eq!(
            projects.state().error(),
            Some("Failed to load projects. Please try again later.")
        );
        assert!(technologies.state().error().is_none());
        assert!(technologies.items().is_empty());
    }
}
