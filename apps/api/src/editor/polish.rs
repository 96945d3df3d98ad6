//! Per-field AI polish — rewrites one free-text field toward the style's
//! tone. The field value is read at reservation time and written back only
//! if the call succeeds; a failed call leaves prior state intact.

use serde::Deserialize;
use uuid::Uuid;

use crate::editor::prompts::{POLISH_PROMPT_TEMPLATE, POLISH_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::document::ResumeDocument;

/// A polishable field. Entry-scoped targets are addressed by the entry's
/// stable id so an edit elsewhere in the list cannot redirect the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(tag = "field", rename_all = "camelCase")]
pub enum PolishTarget {
    Summary,
    ExperienceDescription { id: Uuid },
    ProjectDescription { id: Uuid },
}

impl PolishTarget {
    /// Human-readable field name used in the rewrite prompt.
    pub fn label(&self) -> &'static str {
        match self {
            PolishTarget::Summary => "professional summary",
            PolishTarget::ExperienceDescription { .. } => "experience description",
            PolishTarget::ProjectDescription { .. } => "project description",
        }
    }

    /// Reads the current value, or `None` when the target entry is gone.
    pub fn read<'a>(&self, document: &'a ResumeDocument) -> Option<&'a str> {
        match self {
            PolishTarget::Summary => Some(document.personal_info.summary.as_str()),
            PolishTarget::ExperienceDescription { id } => document
                .experiences
                .iter()
                .find(|e| e.id == *id)
                .map(|e| e.description.as_str()),
            PolishTarget::ProjectDescription { id } => document
                .projects
                .iter()
                .find(|p| p.id == *id)
                .map(|p| p.description.as_str()),
        }
    }

    /// Writes the polished value back. Returns false when the target entry
    /// no longer exists (removed while the call was outstanding).
    pub fn write(&self, document: &mut ResumeDocument, value: String) -> bool {
        match self {
            PolishTarget::Summary => {
                document.personal_info.summary = value;
                true
            }
            PolishTarget::ExperienceDescription { id } => {
                match document.experiences.iter_mut().find(|e| e.id == *id) {
                    Some(entry) => {
                        entry.description = value;
                        true
                    }
                    None => false,
                }
            }
            PolishTarget::ProjectDescription { id } => {
                match document.projects.iter_mut().find(|p| p.id == *id) {
                    Some(entry) => {
                        entry.description = value;
                        true
                    }
                    None => false,
                }
            }
        }
    }
}

/// Calls the LLM to rewrite `current` toward `tone`. The raw text reply is
/// the polished value; an empty reply counts as a failure.
pub async fn rewrite_field(
    llm: &LlmClient,
    tone: &str,
    target: &PolishTarget,
    current: &str,
) -> Result<String, AppError> {
    let prompt = POLISH_PROMPT_TEMPLATE
        .replace("{target_tone}", tone)
        .replace("{field}", target.label())
        .replace("{current_value}", current);

    let response = llm
        .call(&prompt, POLISH_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("polish failed: {e}")))?;

    let polished = response
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Llm("polish returned empty content".to_string()))?;

    Ok(polished.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_deserializes_from_tagged_json() {
        let target: PolishTarget = serde_json::from_str(r#"{"field": "summary"}"#).unwrap();
        assert_eq!(target, PolishTarget::Summary);

        let id = Uuid::new_v4();
        let json = format!(r#"{{"field": "experienceDescription", "id": "{id}"}}"#);
        let target: PolishTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(target, PolishTarget::ExperienceDescription { id });
    }

    #[test]
    fn test_read_follows_entry_id() {
        let mut doc = ResumeDocument::seeded();
        doc.experiences[0].description = "Did things.".to_string();
        let id = doc.experiences[0].id;

        let target = PolishTarget::ExperienceDescription { id };
        assert_eq!(target.read(&doc), Some("Did things."));

        let missing = PolishTarget::ExperienceDescription { id: Uuid::new_v4() };
        assert_eq!(missing.read(&doc), None);
    }

    #[test]
    fn test_write_to_removed_entry_is_rejected() {
        let mut doc = ResumeDocument::seeded();
        let target = PolishTarget::ProjectDescription { id: Uuid::new_v4() };
        assert!(!target.write(&mut doc, "polished".to_string()));
        assert!(doc.projects[0].description.is_empty());
    }

    #[test]
    fn test_write_summary() {
        let mut doc = ResumeDocument::seeded();
        assert!(PolishTarget::Summary.write(&mut doc, "Polished summary.".to_string()));
        assert_eq!(doc.personal_info.summary, "Polished summary.");
    }
}
