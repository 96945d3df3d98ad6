//! Fixed preset table — named styles covering all four layout variants.
//! Presets are constructed correctly by definition; selection is a direct
//! substitution with no validation step.

use crate::style::descriptor::{
    default_sections_order, FontStyle, LayoutKind, StyleDescriptor,
};

pub const PRESET_NAMES: &[&str] = &["Modern", "Classic", "Creative", "Minimal"];

/// Looks up a preset by name. Returns `None` for unknown names.
pub fn preset(name: &str) -> Option<StyleDescriptor> {
    let descriptor = match name {
        "Modern" => StyleDescriptor {
            layout: LayoutKind::Sidebar,
            primary_color: "#1e293b".to_string(),
            accent_color: "#2563eb".to_string(),
            font_style: FontStyle::SansSerif,
            tone: "Corporate and Impactful".to_string(),
            sections_order: order(&[
                "summary",
                "experience",
                "projects",
                "education",
                "skills",
                "achievements",
            ]),
        },
        "Classic" => StyleDescriptor {
            layout: LayoutKind::Classic,
            primary_color: "#000000".to_string(),
            accent_color: "#475569".to_string(),
            font_style: FontStyle::Serif,
            tone: "Traditional and Formal".to_string(),
            sections_order: order(&[
                "summary",
                "experience",
                "education",
                "projects",
                "skills",
                "achievements",
            ]),
        },
        "Creative" => StyleDescriptor {
            layout: LayoutKind::Creative,
            primary_color: "#4c1d95".to_string(),
            accent_color: "#db2777".to_string(),
            font_style: FontStyle::SansSerif,
            tone: "Creative and Bold".to_string(),
            sections_order: order(&[
                "summary",
                "projects",
                "experience",
                "skills",
                "education",
                "achievements",
            ]),
        },
        // The default palette exposed as a selectable template, so every
        // layout variant is reachable from the preset table.
        "Minimal" => StyleDescriptor {
            layout: LayoutKind::Modern,
            sections_order: default_sections_order(),
            ..StyleDescriptor::default()
        },
        _ => return None,
    };
    Some(descriptor)
}

fn order(identifiers: &[&str]) -> Vec<String> {
    identifiers.iter().map(|s| s.to_string()).collect()
}
