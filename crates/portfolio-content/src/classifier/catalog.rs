//! Shipped category and icon tables

use super::{CategoryRule, IconTable, TechStyle};

const ICON_DIR: &str = "/assets/tech";

/// (title, members) in display order
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Programming Languages",
        &["JavaScript", "TypeScript", "Java", "C++", "Python", "PHP", "C", "C#"],
    ),
    (
        "Frontend Development",
        &[
            "HTML 5", "CSS 3", "React JS", "Next.js", "Redux Toolkit", "Tailwind CSS",
            "Three JS", "Vite", "HTML", "CSS", "React", "Bootstrap", "Vue.js", "Angular",
            "Redux", "Sass",
        ],
    ),
    (
        "Backend Development",
        &[
            "Java", "Spring Boot", "Python", "Node JS", "C++", "Node.js", "Express.js",
            "REST APIs", "GraphQL", "Django", "Flask", "Laravel",
        ],
    ),
    (
        "Databases",
        &["MySQL", "MongoDB", "Redis", "PostgreSQL", "Firebase", "SQLite"],
    ),
    (
        "Cloud & DevOps",
        &["AWS", "Docker", "Git", "GitHub", "CI/CD", "Jenkins", "Kubernetes"],
    ),
    (
        "Development Tools",
        &["VS Code", "Postman", "Figma", "Vite", "Webpack", "NPM/Yarn", "ESLint", "Prettier"],
    ),
];

/// (name, icon file, color)
const STYLES: &[(&str, Option<&str>, &str)] = &[
    // Frontend
    ("HTML 5", None, "#E34C26"),
    ("CSS 3", None, "#1572B6"),
    ("JavaScript", Some("javascript-icon.svg"), "#F7DF1E"),
    ("TypeScript", Some("typescript-icon.svg"), "#3178C6"),
    ("React JS", Some("react-icon.svg"), "#61DAFB"),
    ("Next.js", Some("nextjs.svg"), "#000000"),
    ("Redux Toolkit", None, "#764ABC"),
    ("Tailwind CSS", None, "#06B6D4"),
    ("Three JS", Some("threejs.svg"), "#000000"),
    ("Vite", Some("vite.svg"), "#646CFF"),
    // Backend
    ("Java", Some("java-icon.svg"), "#ED8B00"),
    ("Spring Boot", Some("spring-boot.svg"), "#6DB33F"),
    ("Python", Some("python.svg"), "#3776AB"),
    ("Node JS", Some("nodejs-icon.svg"), "#339933"),
    ("C++", Some("cpp-icon.svg"), "#00599C"),
    // Databases
    ("MySQL", Some("mysql-icon.svg"), "#4479A1"),
    ("MongoDB", Some("mongodb-icon.svg"), "#47A248"),
    ("Redis", Some("redis.svg"), "#DC382D"),
    ("PostgreSQL", Some("postgresql-icon.svg"), "#4169E1"),
    // Cloud & DevOps
    ("AWS", Some("aws-icon.svg"), "#232F3E"),
    ("Docker", Some("docker-icon.svg"), "#2496ED"),
    // Tools
    ("Git", Some("git-icon.svg"), "#F05032"),
    ("GitHub", Some("github.svg"), "#181717"),
    ("VS Code", Some("vscode.svg"), "#007ACC"),
    ("Postman", Some("postman.svg"), "#FF6C37"),
    ("Figma", Some("figma-icon.svg"), "#F24E1E"),
    // Older names the backend still returns
    ("HTML", None, "#E34C26"),
    ("CSS", None, "#1572B6"),
    ("React", Some("react-icon.svg"), "#61DAFB"),
    ("Bootstrap", None, "#7952B3"),
    ("Node.js", Some("nodejs-icon.svg"), "#339933"),
    ("Express.js", None, "#000000"),
    ("REST APIs", None, "#FF6B35"),
    ("GraphQL", None, "#E10098"),
    ("PHP", None, "#777BB4"),
    ("Firebase", None, "#FFCA28"),
    ("CI/CD", None, "#326CE5"),
    ("Webpack", None, "#8DD6F9"),
    ("NPM/Yarn", None, "#CB3837"),
    ("Vue.js", None, "#4FC08D"),
    ("Angular", None, "#DD0031"),
    ("Django", None, "#092E20"),
    ("Flask", None, "#000000"),
    ("Laravel", None, "#FF2D20"),
    ("Redux", None, "#764ABC"),
    ("Sass", None, "#CC6699"),
];

pub(super) fn category_rules() -> Vec<CategoryRule> {
    CATEGORIES
        .iter()
        .map(|(title, members)| CategoryRule::new(*title, members.iter().copied()))
        .collect()
}

pub(super) fn icon_table() -> IconTable {
    IconTable::new(STYLES.iter().map(|(name, icon, color)| {
        let icon = (*icon).map(|file| format!("{}/{}", ICON_DIR, file));
        (
            *name,
            TechStyle {
                icon,
                color: color.to_string(),
            },
        )
    }))
}
