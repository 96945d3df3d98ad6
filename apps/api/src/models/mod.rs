// Content model shared by the editor, render pipeline, and LLM boundary.

pub mod document;
