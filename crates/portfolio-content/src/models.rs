//! Content Models
//!
//! Data structures matching the backend's JSON payloads. All read-only.

use serde::{Deserialize, Deserializer, Serialize};

/// Hashtag-style label on a project card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTag {
    pub name: String,
    /// CSS class (e.g. `blue-text-gradient`) the tag is rendered with
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<ProjectTag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    pub source_code_link: Option<String>,
    pub live_link: Option<String>,
}

impl Project {
    /// Live deployment link, ignoring blank strings
    pub fn live_url(&self) -> Option<&str> {
        non_blank(self.live_link.as_deref())
    }

    /// Source code link, ignoring blank strings
    pub fn source_url(&self) -> Option<&str> {
        non_blank(self.source_code_link.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    pub logo: Option<String>,
    pub technologies: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: Vec<String>,
}

impl Experience {
    /// Letter shown in the timeline bubble when there is no usable logo
    pub fn badge_initial(&self) -> String {
        let from = |s: Option<&str>| {
            s.and_then(|s| s.trim().chars().next())
                .map(|c| c.to_uppercase().collect::<String>())
        };
        from(self.company.as_deref())
            .or_else(|| from(Some(self.title.as_str())))
            .unwrap_or_else(|| "💼".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issuer: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Older payloads carry the logo here instead of `image`
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(rename = "verifyLink", default)]
    pub verify_link: Option<String>,
    /// Category label, e.g. "Cloud" or "Backend"
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
}

impl Certificate {
    /// Issuer logo: `image`, falling back to `imageUrl` when blank
    pub fn image_src(&self) -> Option<&str> {
        non_blank(self.image.as_deref()).or_else(|| non_blank(self.image_url.as_deref()))
    }

    /// Verification link, ignoring blank strings
    pub fn verify_url(&self) -> Option<&str> {
        non_blank(self.verify_link.as_deref())
    }
}

/// Technology name as returned by `/technologies`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
}

impl Technology {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Explicit `null` reads the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Years come back as `2024`, `"2024"` or `null`
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Number(n)) => n.to_string(),
        None => String::new(),
    })
}
