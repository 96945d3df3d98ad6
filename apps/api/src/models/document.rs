//! Resume document model — the single mutable value owned by an editor session.
//!
//! Every field has a defined "not provided" representation (empty string or
//! empty sequence), so a document is never partially invalid. Repeatable
//! sections are seeded with one blank placeholder entry so the editor always
//! has a row to fill in; the renderer's gating rules keep that placeholder
//! out of the output.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub website: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    /// Stable across edits — entries are addressed by id, never by position.
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub location: String,
    pub duration: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: String::new(),
            role: String::new(),
            location: String::new(),
            duration: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub year: String,
}

impl EducationEntry {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            school: String::new(),
            degree: String::new(),
            year: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Empty string means no hyperlink is rendered.
    pub link: String,
}

impl ProjectEntry {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            link: String::new(),
        }
    }
}

/// Four independent ordered skill lists under fixed categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
    pub soft_skills: Vec<String>,
}

impl SkillSet {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty()
            && self.frameworks.is_empty()
            && self.tools.is_empty()
            && self.soft_skills.is_empty()
    }
}

/// The aggregate resume content — exactly one per session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: SkillSet,
    pub achievements: Vec<String>,
}

impl ResumeDocument {
    /// The session-start document: one blank placeholder row per repeatable
    /// section so the editor has something to bind to.
    pub fn seeded() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            experiences: vec![ExperienceEntry::blank()],
            education: vec![EducationEntry::blank()],
            projects: vec![ProjectEntry::blank()],
            skills: SkillSet::default(),
            achievements: Vec::new(),
        }
    }

    /// Merges an external extraction result into this document. Present
    /// parts replace wholesale; absent parts leave current content intact.
    pub fn merge_parsed(&mut self, parsed: ParsedResume) {
        if let Some(info) = parsed.personal_info {
            self.personal_info = info;
        }
        if let Some(experiences) = parsed.experiences {
            self.experiences = experiences
                .into_iter()
                .map(ParsedEntry::into_experience)
                .collect();
        }
        if let Some(education) = parsed.education {
            self.education = education
                .into_iter()
                .map(ParsedEducation::into_entry)
                .collect();
        }
        if let Some(projects) = parsed.projects {
            self.projects = projects
                .into_iter()
                .map(ParsedProject::into_entry)
                .collect();
        }
        if let Some(skills) = parsed.skills {
            self.skills = skills;
        }
        if let Some(achievements) = parsed.achievements {
            self.achievements = normalize_lines(achievements);
        }
    }
}

/// Partial document shape returned by the content-extraction call.
/// Extracted entries carry no ids; fresh ones are minted on merge.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedResume {
    pub personal_info: Option<PersonalInfo>,
    pub experiences: Option<Vec<ParsedEntry>>,
    pub education: Option<Vec<ParsedEducation>>,
    pub projects: Option<Vec<ParsedProject>>,
    pub skills: Option<SkillSet>,
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedEntry {
    pub company: String,
    pub role: String,
    pub location: String,
    pub duration: String,
    pub description: String,
}

impl ParsedEntry {
    fn into_experience(self) -> ExperienceEntry {
        ExperienceEntry {
            id: Uuid::new_v4(),
            company: self.company,
            role: self.role,
            location: self.location,
            duration: self.duration,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedEducation {
    pub school: String,
    pub degree: String,
    pub year: String,
}

impl ParsedEducation {
    fn into_entry(self) -> EducationEntry {
        EducationEntry {
            id: Uuid::new_v4(),
            school: self.school,
            degree: self.degree,
            year: self.year,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedProject {
    pub name: String,
    pub description: String,
    pub link: String,
}

impl ParsedProject {
    fn into_entry(self) -> ProjectEntry {
        ProjectEntry {
            id: Uuid::new_v4(),
            name: self.name,
            description: self.description,
            link: self.link,
        }
    }
}

/// Splits a comma-separated skills line into trimmed, non-empty entries.
pub fn split_skill_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drops blank lines from newline-delimited achievement input.
pub fn normalize_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

/// Splits raw textarea input into achievement lines, dropping blanks.
pub fn split_achievement_text(text: &str) -> Vec<String> {
    normalize_lines(text.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_document_has_one_placeholder_per_repeatable_section() {
        let doc = ResumeDocument::seeded();
        assert_eq!(doc.experiences.len(), 1);
        assert_eq!(doc.education.len(), 1);
        assert_eq!(doc.projects.len(), 1);
        assert!(doc.experiences[0].company.is_empty());
        assert!(doc.education[0].school.is_empty());
        assert!(doc.projects[0].name.is_empty());
        assert!(doc.skills.is_empty());
        assert!(doc.achievements.is_empty());
    }

    #[test]
    fn test_split_skill_line_trims_and_drops_blanks() {
        assert_eq!(
            split_skill_line("Go, Rust , ,Docker,"),
            vec!["Go", "Rust", "Docker"]
        );
        assert!(split_skill_line("").is_empty());
        assert!(split_skill_line(" , , ").is_empty());
    }

    #[test]
    fn test_split_achievement_text_drops_empty_lines() {
        let lines = split_achievement_text("Won hackathon\n\n  \nShipped v1\n");
        assert_eq!(lines, vec!["Won hackathon", "Shipped v1"]);
    }

    #[test]
    fn test_merge_parsed_replaces_only_present_parts() {
        let mut doc = ResumeDocument::seeded();
        doc.personal_info.full_name = "Ada Lovelace".to_string();
        doc.achievements = vec!["Existing".to_string()];

        let parsed = ParsedResume {
            experiences: Some(vec![ParsedEntry {
                company: "Analytical Engines Ltd".to_string(),
                role: "Engineer".to_string(),
                ..Default::default()
            }]),
            ..Default::default()
        };
        doc.merge_parsed(parsed);

        assert_eq!(doc.experiences.len(), 1);
        assert_eq!(doc.experiences[0].company, "Analytical Engines Ltd");
        // Untouched parts keep their prior values.
        assert_eq!(doc.personal_info.full_name, "Ada Lovelace");
        assert_eq!(doc.achievements, vec!["Existing"]);
    }

    #[test]
    fn test_merge_parsed_mints_fresh_ids() {
        let mut doc = ResumeDocument::seeded();
        let parsed = ParsedResume {
            projects: Some(vec![
                ParsedProject {
                    name: "One".to_string(),
                    ..Default::default()
                },
                ParsedProject {
                    name: "Two".to_string(),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };
        doc.merge_parsed(parsed);
        assert_eq!(doc.projects.len(), 2);
        assert_ne!(doc.projects[0].id, doc.projects[1].id);
    }

    #[test]
    fn test_parsed_resume_tolerates_missing_fields() {
        // Extraction output routinely omits sections entirely.
        let parsed: ParsedResume =
            serde_json::from_str(r#"{"skills": {"technical": ["Rust"]}}"#).unwrap();
        assert!(parsed.personal_info.is_none());
        assert_eq!(parsed.skills.unwrap().technical, vec!["Rust"]);
    }
}
