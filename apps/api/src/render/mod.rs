// Style-driven rendering pipeline: section renderer + layout composer.
// Pure and synchronous — no caching, no async, recomputed on every change.

pub mod compose;
pub mod section;

// Re-export the public API consumed by the editor handlers.
pub use compose::{render_resume, RenderedResume};
pub use section::SectionKind;
