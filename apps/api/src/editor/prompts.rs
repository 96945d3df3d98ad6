// Editor LLM prompt templates: per-field polish and content import.

pub const POLISH_SYSTEM: &str = "\
You are a professional resume writer. \
Return only the rewritten text — no commentary, no quotes, no markdown.";

pub const POLISH_PROMPT_TEMPLATE: &str = r#"Rewrite the following text to better match the target tone: "{target_tone}".
The text is for the field "{field}" in a resume. Keep it concise and impact-driven.

Text to polish: "{current_value}"

Return only the polished text, no commentary."#;

pub const CONTENT_IMPORT_SYSTEM: &str = "\
You are a precise resume data extractor. \
You MUST respond with valid JSON only — no markdown fences, no explanations. \
Omit any section you cannot read from the image rather than inventing content.";

pub const CONTENT_IMPORT_PROMPT: &str = r#"Extract the textual content from this resume image and organize it into the following JSON structure.
Handle multiple entries for experience, education, and projects.
Categorize skills into technical, frameworks, tools, and softSkills.

JSON Structure:
{
    "personalInfo": { "fullName": "", "email": "", "phone": "", "linkedin": "", "website": "", "location": "", "summary": "" },
    "experiences": [ { "company": "", "role": "", "location": "", "duration": "", "description": "" } ],
    "education": [ { "school": "", "degree": "", "year": "" } ],
    "skills": {
      "technical": [],
      "frameworks": [],
      "tools": [],
      "softSkills": []
    },
    "projects": [ { "name": "", "description": "", "link": "" } ],
    "achievements": ["achievement1", "achievement2"]
}"#;
