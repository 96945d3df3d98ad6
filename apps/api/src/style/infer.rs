//! Style inference — sends a sample resume image to the LLM and turns the
//! result into a usable `StyleDescriptor`.
//!
//! Failure contract: a failed or malformed inference NEVER blocks the
//! editing flow. The caller always gets a descriptor back; `fell_back`
//! records that the hardcoded default was substituted.

use serde_json::Value;
use tracing::warn;

use crate::llm_client::{ImageBlock, LlmClient};
use crate::style::descriptor::StyleDescriptor;
use crate::style::prompts::{STYLE_ANALYZE_PROMPT, STYLE_ANALYZE_SYSTEM};

#[derive(Debug, Clone)]
pub struct StyleInference {
    pub descriptor: StyleDescriptor,
    pub fell_back: bool,
}

/// Infers a style descriptor from a sample resume image.
pub async fn analyze_style_sample(image: &ImageBlock, llm: &LlmClient) -> StyleInference {
    match llm
        .call_json_with_image::<Value>(STYLE_ANALYZE_PROMPT, STYLE_ANALYZE_SYSTEM, image)
        .await
    {
        Ok(value) => {
            let (descriptor, fell_back) = StyleDescriptor::from_external(value);
            StyleInference {
                descriptor,
                fell_back,
            }
        }
        Err(e) => {
            warn!("style inference call failed ({e}), using default descriptor");
            StyleInference {
                descriptor: StyleDescriptor::default(),
                fell_back: true,
            }
        }
    }
}
