//! Typed document updates.
//!
//! Every edit the boundary layer can make is one `UpdateOp` variant, so a
//! structurally bad edit (unknown entry id) is caught at the interface
//! instead of silently indexing into the wrong place.

use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::document::{
    split_achievement_text, split_skill_line, EducationEntry, ExperienceEntry, ProjectEntry,
    ResumeDocument,
};

#[derive(Debug, Error, PartialEq)]
pub enum UpdateError {
    #[error("no {kind} entry with id {id}")]
    UnknownEntry { kind: &'static str, id: Uuid },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Linkedin,
    Website,
    Location,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Company,
    Role,
    Location,
    Duration,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    School,
    Degree,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectField {
    Name,
    Description,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillCategory {
    Technical,
    Frameworks,
    Tools,
    SoftSkills,
}

/// One editor mutation. Repeatable-section entries are addressed by their
/// stable id, never by position.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum UpdateOp {
    SetPersonal {
        field: PersonalField,
        value: String,
    },
    SetExperience {
        id: Uuid,
        field: ExperienceField,
        value: String,
    },
    SetEducation {
        id: Uuid,
        field: EducationField,
        value: String,
    },
    SetProject {
        id: Uuid,
        field: ProjectField,
        value: String,
    },
    AddExperience,
    AddEducation,
    AddProject,
    RemoveExperience {
        id: Uuid,
    },
    RemoveEducation {
        id: Uuid,
    },
    RemoveProject {
        id: Uuid,
    },
    /// Replaces one skills category from a comma-separated line.
    SetSkills {
        category: SkillCategory,
        line: String,
    },
    /// Replaces the achievements list from newline-separated text.
    SetAchievements {
        text: String,
    },
}

/// Applies one update to the document.
pub fn apply(document: &mut ResumeDocument, op: UpdateOp) -> Result<(), UpdateError> {
    match op {
        UpdateOp::SetPersonal { field, value } => {
            let info = &mut document.personal_info;
            match field {
                PersonalField::FullName => info.full_name = value,
                PersonalField::Email => info.email = value,
                PersonalField::Phone => info.phone = value,
                PersonalField::Linkedin => info.linkedin = value,
                PersonalField::Website => info.website = value,
                PersonalField::Location => info.location = value,
                PersonalField::Summary => info.summary = value,
            }
        }
        UpdateOp::SetExperience { id, field, value } => {
            let entry = find_entry(&mut document.experiences, "experience", id, |e| e.id)?;
            match field {
                ExperienceField::Company => entry.company = value,
                ExperienceField::Role => entry.role = value,
                ExperienceField::Location => entry.location = value,
                ExperienceField::Duration => entry.duration = value,
                ExperienceField::Description => entry.description = value,
            }
        }
        UpdateOp::SetEducation { id, field, value } => {
            let entry = find_entry(&mut document.education, "education", id, |e| e.id)?;
            match field {
                EducationField::School => entry.school = value,
                EducationField::Degree => entry.degree = value,
                EducationField::Year => entry.year = value,
            }
        }
        UpdateOp::SetProject { id, field, value } => {
            let entry = find_entry(&mut document.projects, "project", id, |e| e.id)?;
            match field {
                ProjectField::Name => entry.name = value,
                ProjectField::Description => entry.description = value,
                ProjectField::Link => entry.link = value,
            }
        }
        UpdateOp::AddExperience => document.experiences.push(ExperienceEntry::blank()),
        UpdateOp::AddEducation => document.education.push(EducationEntry::blank()),
        UpdateOp::AddProject => document.projects.push(ProjectEntry::blank()),
        UpdateOp::RemoveExperience { id } => {
            remove_entry(&mut document.experiences, "experience", id, |e| e.id)?
        }
        UpdateOp::RemoveEducation { id } => {
            remove_entry(&mut document.education, "education", id, |e| e.id)?
        }
        UpdateOp::RemoveProject { id } => {
            remove_entry(&mut document.projects, "project", id, |e| e.id)?
        }
        UpdateOp::SetSkills { category, line } => {
            let items = split_skill_line(&line);
            let skills = &mut document.skills;
            match category {
                SkillCategory::Technical => skills.technical = items,
                SkillCategory::Frameworks => skills.frameworks = items,
                SkillCategory::Tools => skills.tools = items,
                SkillCategory::SoftSkills => skills.soft_skills = items,
            }
        }
        UpdateOp::SetAchievements { text } => {
            document.achievements = split_achievement_text(&text);
        }
    }
    Ok(())
}

fn find_entry<'a, T>(
    entries: &'a mut [T],
    kind: &'static str,
    id: Uuid,
    entry_id: impl Fn(&T) -> Uuid,
) -> Result<&'a mut T, UpdateError> {
    entries
        .iter_mut()
        .find(|e| entry_id(e) == id)
        .ok_or(UpdateError::UnknownEntry { kind, id })
}

fn remove_entry<T>(
    entries: &mut Vec<T>,
    kind: &'static str,
    id: Uuid,
    entry_id: impl Fn(&T) -> Uuid,
) -> Result<(), UpdateError> {
    let index = entries
        .iter()
        .position(|e| entry_id(e) == id)
        .ok_or(UpdateError::UnknownEntry { kind, id })?;
    entries.remove(index);
    Ok(())
}
