//! Layout composer — arranges the visible sections into the page.
//!
//! Sidebar layouts use a fixed two-track split and ignore the descriptor's
//! section ordering entirely. Every other layout variant shares the linear
//! path: one vertical track following `sections_order`. The header sits
//! above both, unconditionally.
//!
//! Stateless pure transform — recomputed in full on every document or style
//! change, no intermediate or cached representation.

use serde::Serialize;

use crate::models::document::ResumeDocument;
use crate::render::section::{render_section, SectionBlock, SectionKind};
use crate::style::{FontStyle, LayoutKind, StyleDescriptor};

/// Sidebar narrow track, roughly one-third width, rendered first.
const SIDEBAR_NARROW: [SectionKind; 3] = [
    SectionKind::Skills,
    SectionKind::Education,
    SectionKind::Achievements,
];

/// Sidebar main track, two-thirds width.
const SIDEBAR_MAIN: [SectionKind; 3] = [
    SectionKind::Summary,
    SectionKind::Experience,
    SectionKind::Projects,
];

/// Contact fields in their fixed left-to-right display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Email,
    Phone,
    Location,
    Linkedin,
    Website,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactItem {
    pub field: ContactField,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub name: String,
    /// Hex color for the name (`primaryColor`).
    pub name_color: String,
    pub contacts: Vec<ContactItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum Body {
    Linear {
        sections: Vec<SectionBlock>,
    },
    Sidebar {
        narrow: Vec<SectionBlock>,
        main: Vec<SectionBlock>,
    },
}

/// The full renderable tree handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedResume {
    /// Body typography, applied uniformly to the whole document.
    pub font_style: FontStyle,
    pub header: Header,
    pub body: Body,
}

/// Composes the full preview for a document under a style descriptor.
pub fn render_resume(document: &ResumeDocument, style: &StyleDescriptor) -> RenderedResume {
    let body = match style.layout {
        LayoutKind::Sidebar => Body::Sidebar {
            narrow: render_track(document, style, &SIDEBAR_NARROW),
            main: render_track(document, style, &SIDEBAR_MAIN),
        },
        _ => Body::Linear {
            sections: style
                .sections_order
                .iter()
                .map(|identifier| SectionKind::from_identifier(identifier))
                .filter_map(|kind| render_section(document, style, kind))
                .collect(),
        },
    };

    RenderedResume {
        font_style: style.font_style,
        header: render_header(document, style),
        body,
    }
}

fn render_track(
    document: &ResumeDocument,
    style: &StyleDescriptor,
    kinds: &[SectionKind],
) -> Vec<SectionBlock> {
    kinds
        .iter()
        .filter_map(|&kind| render_section(document, style, kind))
        .collect()
}

fn render_header(document: &ResumeDocument, style: &StyleDescriptor) -> Header {
    let info = &document.personal_info;
    let name = if info.full_name.is_empty() {
        "Your Name".to_string()
    } else {
        info.full_name.clone()
    };

    let contacts = [
        (ContactField::Email, &info.email),
        (ContactField::Phone, &info.phone),
        (ContactField::Location, &info.location),
        (ContactField::Linkedin, &info.linkedin),
        (ContactField::Website, &info.website),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(field, value)| ContactItem {
        field,
        value: value.clone(),
    })
    .collect();

    Header {
        name,
        name_color: style.primary_color.clone(),
        contacts,
    }
}
