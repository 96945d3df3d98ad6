// Style inference prompt templates.

pub const STYLE_ANALYZE_SYSTEM: &str = "\
You are a precise visual design analyst. \
You MUST respond with valid JSON only — no markdown fences, no explanations.";

pub const STYLE_ANALYZE_PROMPT: &str = r#"Analyze this resume image and extract its visual style and structure.
Return a JSON object matching this schema exactly:
{
  "layout": "one of: 'modern', 'classic', 'sidebar', 'creative'",
  "primaryColor": "hex code",
  "accentColor": "hex code",
  "fontStyle": "one of: 'serif', 'sans-serif'",
  "tone": "short description of the professional tone",
  "sectionsOrder": ["summary", "experience", "education", "skills", "projects", "achievements"] (reorder based on visual priority)
}"#;
