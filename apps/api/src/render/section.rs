//! Section renderer — pure mapping from (document, style, section
//! identifier) to either nothing or a styled section block.
//!
//! # Visibility gates
//! - `summary`: non-empty summary text
//! - `experience` / `projects` / `education`: sequence non-empty AND the
//!   FIRST entry's key field non-empty. A document that starts with one
//!   blank placeholder row per repeatable section therefore renders as
//!   having no content yet.
//! - `skills`: at least one category non-empty
//! - `achievements`: sequence non-empty
//! - anything else: no-op, never an error
//!
//! Heading style (primary color text, accent border) and body typography
//! are uniform across sections — no per-section special cases.

use serde::Serialize;

use crate::models::document::{ResumeDocument, SkillSet};
use crate::style::StyleDescriptor;

/// Tagged section dispatch. Unrecognized identifiers map to `Unknown`,
/// which renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
    Achievements,
    Unknown,
}

impl SectionKind {
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "summary" => SectionKind::Summary,
            "experience" => SectionKind::Experience,
            "education" => SectionKind::Education,
            "projects" => SectionKind::Projects,
            "skills" => SectionKind::Skills,
            "achievements" => SectionKind::Achievements,
            _ => SectionKind::Unknown,
        }
    }

    /// Display title for the section heading.
    fn title(&self) -> &'static str {
        match self {
            SectionKind::Summary => "Profile",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Projects => "Projects",
            SectionKind::Skills => "Skills",
            SectionKind::Achievements => "Achievements",
            SectionKind::Unknown => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    pub text: &'static str,
    /// Hex color of the heading text (`primaryColor`).
    pub color: String,
    /// Hex color of the heading underline (`accentColor`).
    pub border_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionBlock {
    pub kind: SectionKind,
    pub heading: Heading,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SectionBody {
    /// Summary text with line breaks preserved verbatim.
    Summary { text: String },
    Experience { entries: Vec<ExperienceBlock> },
    Education { entries: Vec<EducationBlock> },
    Projects { entries: Vec<ProjectBlock> },
    Skills { categories: Vec<SkillCategoryBlock> },
    Achievements { items: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceBlock {
    pub role: String,
    pub duration: String,
    pub company: String,
    pub location: String,
    /// Line breaks preserved verbatim.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationBlock {
    pub school: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectBlock {
    pub name: String,
    /// `None` when the entry has no link; the presentation layer renders no
    /// link element in that case.
    pub link: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategoryBlock {
    pub label: &'static str,
    /// Entries in sequence order, comma-joined for display.
    pub display: String,
}

/// Renders one section, or `None` when its visibility gate fails.
pub fn render_section(
    document: &ResumeDocument,
    style: &StyleDescriptor,
    kind: SectionKind,
) -> Option<SectionBlock> {
    let body = match kind {
        SectionKind::Summary => {
            let summary = &document.personal_info.summary;
            if summary.is_empty() {
                return None;
            }
            SectionBody::Summary {
                text: summary.clone(),
            }
        }
        SectionKind::Experience => {
            // First-entry gate: a sequence of blank placeholder rows is
            // treated as "no content yet".
            if document
                .experiences
                .first()
                .is_none_or(|e| e.company.is_empty())
            {
                return None;
            }
            SectionBody::Experience {
                entries: document
                    .experiences
                    .iter()
                    .map(|e| ExperienceBlock {
                        role: e.role.clone(),
                        duration: e.duration.clone(),
                        company: e.company.clone(),
                        location: e.location.clone(),
                        description: e.description.clone(),
                    })
                    .collect(),
            }
        }
        SectionKind::Education => {
            if document
                .education
                .first()
                .is_none_or(|e| e.school.is_empty())
            {
                return None;
            }
            SectionBody::Education {
                entries: document
                    .education
                    .iter()
                    .map(|e| EducationBlock {
                        school: e.school.clone(),
                        degree: e.degree.clone(),
                        year: e.year.clone(),
                    })
                    .collect(),
            }
        }
        SectionKind::Projects => {
            if document.projects.first().is_none_or(|p| p.name.is_empty()) {
                return None;
            }
            SectionBody::Projects {
                entries: document
                    .projects
                    .iter()
                    .map(|p| ProjectBlock {
                        name: p.name.clone(),
                        link: if p.link.is_empty() {
                            None
                        } else {
                            Some(p.link.clone())
                        },
                        description: p.description.clone(),
                    })
                    .collect(),
            }
        }
        SectionKind::Skills => {
            let categories = skill_categories(&document.skills);
            if categories.is_empty() {
                return None;
            }
            SectionBody::Skills { categories }
        }
        SectionKind::Achievements => {
            if document.achievements.is_empty() {
                return None;
            }
            SectionBody::Achievements {
                items: document.achievements.clone(),
            }
        }
        SectionKind::Unknown => return None,
    };

    Some(SectionBlock {
        kind,
        heading: Heading {
            text: kind.title(),
            color: style.primary_color.clone(),
            border_color: style.accent_color.clone(),
        },
        body,
    })
}

/// Non-empty skill categories in the fixed order technical, frameworks,
/// tools, soft skills.
fn skill_categories(skills: &SkillSet) -> Vec<SkillCategoryBlock> {
    [
        ("Technical", &skills.technical),
        ("Frameworks", &skills.frameworks),
        ("Tools", &skills.tools),
        ("Soft Skills", &skills.soft_skills),
    ]
    .into_iter()
    .filter(|(_, items)| !items.is_empty())
    .map(|(label, items)| SkillCategoryBlock {
        label,
        display: items.join(", "),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{EducationEntry, ExperienceEntry, ProjectEntry};

    fn style() -> StyleDescriptor {
        StyleDescriptor::default()
    }

    fn render(document: &ResumeDocument, kind: SectionKind) -> Option<SectionBlock> {
        render_section(document, &style(), kind)
    }

    // ── summary ─────────────────────────────────────────────────────────────

    #[test]
    fn test_summary_omitted_when_empty() {
        let doc = ResumeDocument::seeded();
        assert!(render(&doc, SectionKind::Summary).is_none());
    }

    #[test]
    fn test_summary_preserves_line_breaks_verbatim() {
        let mut doc = ResumeDocument::seeded();
        doc.personal_info.summary = "First line.\n\nThird line.".to_string();
        let block = render(&doc, SectionKind::Summary).unwrap();
        assert_eq!(
            block.body,
            SectionBody::Summary {
                text: "First line.\n\nThird line.".to_string()
            }
        );
        assert_eq!(block.heading.text, "Profile");
    }

    // ── experience gate ─────────────────────────────────────────────────────

    #[test]
    fn test_experience_with_only_placeholder_entry_is_omitted() {
        // Seeded documents carry one blank entry; it must not leak into output.
        let doc = ResumeDocument::seeded();
        assert!(doc.experiences.len() == 1);
        assert!(render(&doc, SectionKind::Experience).is_none());
    }

    #[test]
    fn test_experience_empty_sequence_is_omitted() {
        let mut doc = ResumeDocument::seeded();
        doc.experiences.clear();
        assert!(render(&doc, SectionKind::Experience).is_none());
    }

    /// Pins the first-entry gate exactly: a blank first entry suppresses the
    /// whole section even when later entries are fully populated.
    #[test]
    fn test_blank_first_entry_suppresses_populated_later_entries() {
        let mut doc = ResumeDocument::seeded();
        let mut populated = ExperienceEntry::blank();
        populated.company = "Initech".to_string();
        populated.role = "Engineer".to_string();
        doc.experiences.push(populated);

        assert!(doc.experiences[0].company.is_empty());
        assert!(render(&doc, SectionKind::Experience).is_none());
    }

    #[test]
    fn test_visible_experience_renders_every_entry() {
        let mut doc = ResumeDocument::seeded();
        doc.experiences[0].company = "Initech".to_string();
        doc.experiences[0].role = "Engineer".to_string();
        doc.experiences.push(ExperienceEntry::blank());

        let block = render(&doc, SectionKind::Experience).unwrap();
        let SectionBody::Experience { entries } = block.body else {
            panic!("wrong body variant");
        };
        // Once the gate passes, all entries render — including blank ones.
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company, "Initech");
    }

    // ── education gate ──────────────────────────────────────────────────────

    #[test]
    fn test_education_gated_on_first_school() {
        let mut doc = ResumeDocument::seeded();
        assert!(render(&doc, SectionKind::Education).is_none());

        doc.education[0].school = "MIT".to_string();
        doc.education[0].degree = "BSc".to_string();
        let block = render(&doc, SectionKind::Education).unwrap();
        let SectionBody::Education { entries } = block.body else {
            panic!("wrong body variant");
        };
        assert_eq!(entries[0].school, "MIT");
    }

    // ── projects ────────────────────────────────────────────────────────────

    #[test]
    fn test_projects_gated_on_first_name() {
        let doc = ResumeDocument::seeded();
        assert!(render(&doc, SectionKind::Projects).is_none());
    }

    #[test]
    fn test_project_link_rendered_only_when_non_empty() {
        let mut doc = ResumeDocument::seeded();
        doc.projects[0].name = "No-link project".to_string();
        doc.projects.push(ProjectEntry {
            link: "https://example.com/repo".to_string(),
            name: "Linked project".to_string(),
            ..ProjectEntry::blank()
        });

        let block = render(&doc, SectionKind::Projects).unwrap();
        let SectionBody::Projects { entries } = block.body else {
            panic!("wrong body variant");
        };
        assert_eq!(entries[0].link, None);
        assert_eq!(
            entries[1].link.as_deref(),
            Some("https://example.com/repo")
        );
    }

    // ── skills ──────────────────────────────────────────────────────────────

    #[test]
    fn test_skills_omitted_when_all_categories_empty() {
        let doc = ResumeDocument::seeded();
        assert!(render(&doc, SectionKind::Skills).is_none());
    }

    #[test]
    fn test_skills_renders_only_non_empty_categories_in_fixed_order() {
        let mut doc = ResumeDocument::seeded();
        doc.skills.technical = vec!["Go".to_string(), "Rust".to_string()];
        doc.skills.tools = vec!["Docker".to_string()];

        let block = render(&doc, SectionKind::Skills).unwrap();
        let SectionBody::Skills { categories } = block.body else {
            panic!("wrong body variant");
        };
        let labels: Vec<_> = categories.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Technical", "Tools"]);
        assert_eq!(categories[0].display, "Go, Rust");
        assert_eq!(categories[1].display, "Docker");
    }

    // ── achievements ────────────────────────────────────────────────────────

    #[test]
    fn test_achievements_omitted_when_empty() {
        let doc = ResumeDocument::seeded();
        assert!(render(&doc, SectionKind::Achievements).is_none());
    }

    #[test]
    fn test_achievements_preserve_count_and_order() {
        let mut doc = ResumeDocument::seeded();
        doc.achievements = vec![
            "First".to_string(),
            "Second".to_string(),
            "Third".to_string(),
        ];
        let block = render(&doc, SectionKind::Achievements).unwrap();
        assert_eq!(
            block.body,
            SectionBody::Achievements {
                items: vec![
                    "First".to_string(),
                    "Second".to_string(),
                    "Third".to_string()
                ]
            }
        );
    }

    // ── dispatch ────────────────────────────────────────────────────────────

    #[test]
    fn test_unknown_identifier_maps_to_noop() {
        assert_eq!(
            SectionKind::from_identifier("hobbies"),
            SectionKind::Unknown
        );
        assert_eq!(SectionKind::from_identifier(""), SectionKind::Unknown);

        let mut doc = ResumeDocument::seeded();
        doc.personal_info.summary = "Present".to_string();
        assert!(render(&doc, SectionKind::Unknown).is_none());
    }

    #[test]
    fn test_known_identifiers_round_trip() {
        for (id, kind) in [
            ("summary", SectionKind::Summary),
            ("experience", SectionKind::Experience),
            ("education", SectionKind::Education),
            ("projects", SectionKind::Projects),
            ("skills", SectionKind::Skills),
            ("achievements", SectionKind::Achievements),
        ] {
            assert_eq!(SectionKind::from_identifier(id), kind);
        }
    }

    #[test]
    fn test_heading_style_uniform_across_sections() {
        let mut doc = ResumeDocument::seeded();
        doc.personal_info.summary = "Summary".to_string();
        doc.achievements = vec!["Won".to_string()];
        let style = StyleDescriptor {
            primary_color: "#4c1d95".to_string(),
            accent_color: "#db2777".to_string(),
            ..StyleDescriptor::default()
        };

        for kind in [SectionKind::Summary, SectionKind::Achievements] {
            let block = render_section(&doc, &style, kind).unwrap();
            assert_eq!(block.heading.color, "#4c1d95");
            assert_eq!(block.heading.border_color, "#db2777");
        }
    }

    #[test]
    fn test_gate_checks_first_entry_only() {
        let mut doc = ResumeDocument::seeded();
        doc.education = vec![
            EducationEntry {
                school: "First School".to_string(),
                ..EducationEntry::blank()
            },
            EducationEntry::blank(),
        ];
        // A blank entry after a populated first one does not suppress.
        assert!(render(&doc, SectionKind::Education).is_some());
    }
}
