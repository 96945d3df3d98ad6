//! Style descriptor — the visual contract applied uniformly to a rendered
//! resume: layout variant, color pair, font family class, tone label, and
//! preferred section ordering.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Layout variant. All variants except `Sidebar` share the linear composer
/// path and differ only in their default colors, font, and section order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    #[default]
    Modern,
    Classic,
    Sidebar,
    Creative,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontStyle {
    #[serde(rename = "serif")]
    Serif,
    #[default]
    #[serde(rename = "sans-serif")]
    SansSerif,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub layout: LayoutKind,
    /// Hex color for the name and section headings.
    pub primary_color: String,
    /// Hex color for heading underlines/borders.
    pub accent_color: String,
    pub font_style: FontStyle,
    /// Free-text tone label, used only for display and as a rewrite hint.
    pub tone: String,
    /// Preferred section ordering as raw identifiers. Duplicates, omissions,
    /// and unknown identifiers are tolerated by the renderer.
    pub sections_order: Vec<String>,
}

impl Default for StyleDescriptor {
    fn default() -> Self {
        Self {
            layout: LayoutKind::Modern,
            primary_color: "#0f172a".to_string(),
            accent_color: "#3b82f6".to_string(),
            font_style: FontStyle::SansSerif,
            tone: "Professional and concise".to_string(),
            sections_order: default_sections_order(),
        }
    }
}

pub fn default_sections_order() -> Vec<String> {
    [
        "summary",
        "experience",
        "projects",
        "education",
        "skills",
        "achievements",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl StyleDescriptor {
    /// Structural plausibility for externally supplied descriptors. The
    /// enums have already been proven by deserialization; colors must look
    /// like hex codes. `sections_order` contents are deliberately not
    /// checked — the renderer skips anything it does not recognize.
    pub fn is_plausible(&self) -> bool {
        looks_like_hex_color(&self.primary_color) && looks_like_hex_color(&self.accent_color)
    }

    /// Accepts an external StyleDescriptor-shaped value, or falls back to
    /// the default descriptor when the value is not structurally plausible.
    /// Returns the descriptor and whether the fallback was taken. This never
    /// fails: a broken inference result must not block the editing flow.
    pub fn from_external(value: Value) -> (Self, bool) {
        match serde_json::from_value::<StyleDescriptor>(value) {
            Ok(descriptor) if descriptor.is_plausible() => (descriptor, false),
            Ok(descriptor) => {
                warn!(
                    "external style result implausible (colors {:?}/{:?}), using default",
                    descriptor.primary_color, descriptor.accent_color
                );
                (StyleDescriptor::default(), true)
            }
            Err(e) => {
                warn!("external style result malformed ({e}), using default");
                (StyleDescriptor::default(), true)
            }
        }
    }
}

/// `#` followed by 3 or 6 hex digits.
fn looks_like_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
