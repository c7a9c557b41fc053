//! Technology Classifier
//!
//! Groups the flat `/technologies` list into ordered display categories and
//! enriches each entry with an icon and brand color.
//!
//! Both lookup tables are plain data handed in at construction, so tests can
//! swap in their own. [`Classifier::builtin`] carries the shipped tables.

mod catalog;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::Technology;

/// Color for technologies without an icon table entry
pub const DEFAULT_COLOR: &str = "#808080";

/// Icon and brand color for one technology
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStyle {
    /// Asset path of the icon, if we ship one
    pub icon: Option<String>,
    pub color: String,
}

impl TechStyle {
    pub fn new(icon: Option<&str>, color: &str) -> Self {
        Self {
            icon: icon.map(str::to_string),
            color: color.to_string(),
        }
    }
}

/// A category title and the technology names that belong to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    pub title: String,
    members: HashSet<String>,
}

impl CategoryRule {
    pub fn new<I, S>(title: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }
}

/// name -> style lookup with a fallback for unknown names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTable {
    styles: HashMap<String, TechStyle>,
    fallback: TechStyle,
}

impl IconTable {
    pub fn new<I, S>(styles: I) -> Self
    where
        I: IntoIterator<Item = (S, TechStyle)>,
        S: Into<String>,
    {
        Self {
            styles: styles.into_iter().map(|(name, style)| (name.into(), style)).collect(),
            fallback: TechStyle::new(None, DEFAULT_COLOR),
        }
    }

    pub fn style_for(&self, name: &str) -> &TechStyle {
        self.styles.get(name).unwrap_or(&self.fallback)
    }
}

/// Enriched technology, ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: Option<String>,
    pub color: String,
}

impl Skill {
    /// Single letter drawn in place of a missing icon
    pub fn glyph(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<CategoryRule>,
    icons: IconTable,
    /// Title of a category collecting technologies no rule claims
    catch_all: Option<String>,
}

impl Classifier {
    pub fn new(rules: Vec<CategoryRule>, icons: IconTable) -> Self {
        Self {
            rules,
            icons,
            catch_all: None,
        }
    }

    /// The shipped category and icon tables. Unclaimed technologies are dropped.
    pub fn builtin() -> Self {
        Self::new(catalog::category_rules(), catalog::icon_table())
    }

    /// Append a category for technologies that match no rule.
    pub fn with_catch_all(mut self, title: impl Into<String>) -> Self {
        self.catch_all = Some(title.into());
        self
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Group `technologies` by category, in rule order then input order.
    ///
    /// Empty categories are omitted. A name listed under several rules shows up
    /// once in each of them.
    pub fn classify(&self, technologies: &[Technology]) -> Vec<Category> {
        let mut categories: Vec<Category> = self
            .rules
            .iter()
            .filter_map(|rule| {
                let matching = technologies.iter().filter(|tech| rule.contains(&tech.name));
                self.category(&rule.title, matching)
            })
            .collect();

        if let Some(title) = &self.catch_all {
            let unclaimed = technologies
                .iter()
                .filter(|tech| !self.rules.iter().any(|rule| rule.contains(&tech.name)));
            categories.extend(self.category(title, unclaimed));
        }

        categories
    }

    fn category<'a>(
        &self,
        title: &str,
        technologies: impl Iterator<Item = &'a Technology>,
    ) -> Option<Category> {
        let skills: Vec<Skill> = technologies.map(|tech| self.enrich(tech)).collect();
        if skills.is_empty() {
            return None;
        }
        Some(Category {
            title: title.to_string(),
            skills,
        })
    }

    fn enrich(&self, tech: &Technology) -> Skill {
        let style = self.icons.style_for(&tech.name);
        Skill {
            name: tech.name.clone(),
            icon: style.icon.clone(),
            color: style.color.clone(),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn techs(names: &[&str]) -> Vec<Technology> {
        names.iter().map(|name| Technology::new(*name)).collect()
    }

    fn titles(categories: &[Category]) -> Vec<&str> {
        categories.iter().map(|c| c.title.as_str()).collect()
    }

    fn skill_names(category: &Category) -> Vec<&str> {
        category.skills.iter().map(|s| s.name.as_str()).collect()
    }

    fn fixture_classifier() -> Classifier {
        Classifier::new(
            vec![
                CategoryRule::new("Languages", ["Rust", "Go"]),
                CategoryRule::new("Tooling", ["Cargo", "Rust"]),
            ],
            IconTable::new([
                ("Rust", TechStyle::new(Some("/icons/rust.svg"), "#DEA584")),
                ("Cargo", TechStyle::new(None, "#000000")),
            ]),
        )
    }

    #[test]
    fn test_empty_input() {
        assert!(Classifier::builtin().classify(&[]).is_empty());
    }

    #[test]
    fn test_languages_keep_input_order() {
        let categories = Classifier::builtin().classify(&techs(&["JavaScript", "Java"]));

        let languages = &categories[0];
        assert_eq!(languages.title, "Programming Languages");
        assert_eq!(skill_names(languages), vec!["JavaScript", "Java"]);
        assert_eq!(languages.skills[0].color, "#F7DF1E");
        assert_eq!(languages.skills[1].color, "#ED8B00");
        assert!(languages.skills[0].icon.is_some());
    }

    #[test]
    fn test_java_also_listed_under_backend() {
        let categories = Classifier::builtin().classify(&techs(&["JavaScript", "Java"]));
        assert_eq!(titles(&categories), vec!["Programming Languages", "Backend Development"]);
        assert_eq!(skill_names(&categories[1]), vec!["Java"]);
    }

    #[test]
    fn test_unclassified_technology_is_dropped() {
        // No catch-all in the shipped tables: unknown names vanish.
        let categories = Classifier::builtin().classify(&techs(&["UnknownTech"]));
        assert!(categories.is_empty());
    }

    #[test]
    fn test_catch_all_collects_unclaimed() {
        let classifier = fixture_classifier().with_catch_all("Tools & Technologies");
        let categories = classifier.classify(&techs(&["Zig", "Rust", "Nix"]));

        assert_eq!(titles(&categories), vec!["Languages", "Tooling", "Tools & Technologies"]);
        assert_eq!(skill_names(&categories[2]), vec!["Zig", "Nix"]);
        assert_eq!(categories[2].skills[0].color, DEFAULT_COLOR);
    }

    #[test]
    fn test_member_without_style_gets_fallback() {
        let categories = fixture_classifier().classify(&techs(&["Go"]));
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].skills[0].icon, None);
        assert_eq!(categories[0].skills[0].color, DEFAULT_COLOR);
        assert_eq!(categories[0].skills[0].glyph(), "G");
    }

    #[test]
    fn test_empty_categories_omitted() {
        let categories = fixture_classifier().classify(&techs(&["Cargo"]));
        assert_eq!(titles(&categories), vec!["Tooling"]);
    }

    #[test]
    fn test_no_dedup_across_categories() {
        let categories = fixture_classifier().classify(&techs(&["Rust"]));
        assert_eq!(titles(&categories), vec!["Languages", "Tooling"]);
        assert_eq!(categories[0].skills, categories[1].skills);
    }

    #[test]
    fn test_classify_is_repeatable() {
        let classifier = Classifier::builtin();
        let input = techs(&["Docker", "React JS", "PostgreSQL", "Vite", "Python"]);
        let snapshot = input.clone();

        let first = classifier.classify(&input);
        let second = classifier.classify(&input);

        assert_eq!(first, second);
        assert_eq!(input, snapshot);
        assert!(first.len() <= classifier.rules().len());
    }

    #[test]
    fn test_builtin_category_order() {
        let every_title: Vec<String> = Classifier::builtin()
            .rules()
            .iter()
            .map(|r| r.title.clone())
            .collect();
        assert_eq!(
            every_title,
            vec![
                "Programming Languages",
                "Frontend Development",
                "Backend Development",
                "Databases",
                "Cloud & DevOps",
                "Development Tools",
            ]
        );
    }
}
