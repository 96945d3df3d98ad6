/// LLM Client — the single point of entry for all Claude API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: claude-sonnet-4-5 (hardcoded — do not make configurable to prevent drift)
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("malformed data URL — expected data:<media-type>;base64,<payload>")]
    MalformedDataUrl,

    #[error("invalid base64 image data: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// A base64 image payload ready for an Anthropic image content block.
#[derive(Debug, Clone)]
pub struct ImageBlock {
    pub media_type: String,
    pub data: String,
}

impl ImageBlock {
    /// Accepts either a `data:<media-type>;base64,<payload>` URL (what a
    /// browser file reader produces) or a bare base64 string with an
    /// explicit media type. The payload must decode as base64.
    pub fn from_payload(payload: &str, media_type: Option<&str>) -> Result<Self, ImageError> {
        let (media_type, data) = match payload.strip_prefix("data:") {
            Some(rest) => {
                let (mime, data) = rest
                    .split_once(";base64,")
                    .ok_or(ImageError::MalformedDataUrl)?;
                (mime.to_string(), data)
            }
            None => (media_type.unwrap_or("image/png").to_string(), payload),
        };
        BASE64.decode(data)?;
        Ok(Self {
            media_type,
            data: data.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ContentPart<'a> {
    Text { text: &'a str },
    Image { source: ImageSource<'a> },
}

#[derive(Debug, Serialize)]
struct ImageSource<'a> {
    #[serde(rename = "type")]
    source_type: &'a str,
    media_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// The single LLM client used by all services.
/// Wraps the Anthropic Messages API with retry logic and structured output helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a text-only call to the Claude API.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        self.send(system, vec![ContentPart::Text { text: prompt }])
            .await
    }

    /// Makes a call with an image content block followed by the prompt text.
    pub async fn call_with_image(
        &self,
        prompt: &str,
        system: &str,
        image: &ImageBlock,
    ) -> Result<LlmResponse, LlmError> {
        self.send(
            system,
            vec![
                ContentPart::Image {
                    source: ImageSource {
                        source_type: "base64",
                        media_type: &image.media_type,
                        data: &image.data,
                    },
                },
                ContentPart::Text { text: prompt },
            ],
        )
        .await
    }

    /// Convenience method that calls the LLM and deserializes the text response as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let response = self.call(prompt, system).await?;
        parse_json_response(&response)
    }

    /// `call_json` with an image content block.
    pub async fn call_json_with_image<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
        image: &ImageBlock,
    ) -> Result<T, LlmError> {
        let response = self.call_with_image(prompt, system, image).await?;
        parse_json_response(&response)
    }

    /// Sends one user message to the Claude API.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    async fn send(
        &self,
        system: &str,
        content: Vec<ContentPart<'_>>,
    ) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content,
            }],
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Try to parse error message
                let message = serde_json::from_str::<AnthropicError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                llm_response.usage.input_tokens, llm_response.usage.output_tokens
            );

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

fn parse_json_response<T: DeserializeOwned>(response: &LlmResponse) -> Result<T, LlmError> {
    let text = response.text().ok_or(LlmError::EmptyContent)?;

    // Strip markdown code fences if the model wraps JSON in them
    let text = strip_json_fences(text);

    serde_json::from_str(text).map_err(LlmError::Parse)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_image_block_from_data_url() {
        let block = ImageBlock::from_payload("data:image/jpeg;base64,aGVsbG8=", None).unwrap();
        assert_eq!(block.media_type, "image/jpeg");
        assert_eq!(block.data, "aGVsbG8=");
    }

    #[test]
    fn test_image_block_from_bare_base64_defaults_media_type() {
        let block = ImageBlock::from_payload("aGVsbG8=", None).unwrap();
        assert_eq!(block.media_type, "image/png");
    }

    #[test]
    fn test_image_block_honors_explicit_media_type() {
        let block = ImageBlock::from_payload("aGVsbG8=", Some("image/webp")).unwrap();
        assert_eq!(block.media_type, "image/webp");
    }

    #[test]
    fn test_image_block_rejects_invalid_base64() {
        assert!(matches!(
            ImageBlock::from_payload("not base64!!", None),
            Err(ImageError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_image_block_rejects_data_url_without_base64_marker() {
        assert!(matches!(
            ImageBlock::from_payload("data:image/png,plain", None),
            Err(ImageError::MalformedDataUrl)
        ));
    }

    #[test]
    fn test_image_content_part_serializes_to_anthropic_shape() {
        let part = ContentPart::Image {
            source: ImageSource {
                source_type: "base64",
                media_type: "image/png",
                data: "aGVsbG8=",
            },
        };
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(value["type"], "image");
        assert_eq!(value["source"]["type"], "base64");
        assert_eq!(value["source"]["media_type"], "image/png");
    }
}
