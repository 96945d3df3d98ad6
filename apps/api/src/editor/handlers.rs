//! Axum route handlers for the editor API.
//!
//! Every mutation recomputes the preview synchronously through the pure
//! render path; the response always carries the fresh tree so the client
//! never renders from stale state.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::editor::polish::{rewrite_field, PolishTarget};
use crate::editor::prompts::{CONTENT_IMPORT_PROMPT, CONTENT_IMPORT_SYSTEM};
use crate::editor::session::SessionSnapshot;
use crate::editor::update::{apply, UpdateOp};
use crate::errors::AppError;
use crate::llm_client::ImageBlock;
use crate::models::document::ParsedResume;
use crate::render::{render_resume, RenderedResume};
use crate::state::AppState;
use crate::style::infer::analyze_style_sample;
use crate::style::presets::preset;
use crate::style::StyleDescriptor;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session: SessionSnapshot,
    pub preview: RenderedResume,
}

impl SessionResponse {
    fn new(session: SessionSnapshot) -> Self {
        let preview = render_resume(&session.document, &session.style);
        Self { session, preview }
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectPresetRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleImageRequest {
    /// A `data:` URL or bare base64 payload.
    pub image: String,
    /// Media type for bare base64 payloads; ignored for data URLs.
    pub media_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleResponse {
    pub style: StyleDescriptor,
    /// True when the supplied/inferred style was unusable and the default
    /// descriptor was substituted.
    pub fell_back: bool,
    pub preview: RenderedResume,
}

#[derive(Debug, Deserialize)]
pub struct PolishRequest {
    pub target: PolishTarget,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolishResponse {
    pub polished: String,
    pub session: SessionSnapshot,
    pub preview: RenderedResume,
}

// ────────────────────────────────────────────────────────────────────────────
// Session lifecycle
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// Creates a session with the seeded document and the default style.
pub async fn handle_create_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let snapshot = state.sessions.create().await;
    info!("created editor session {}", snapshot.id);
    Json(SessionResponse::new(snapshot))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let snapshot = state.sessions.snapshot(session_id).await?;
    Ok(Json(SessionResponse::new(snapshot)))
}

/// GET /api/v1/sessions/:id/preview
///
/// The rendered layout tree alone, for clients that already hold the data.
pub async fn handle_get_preview(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<RenderedResume>, AppError> {
    let snapshot = state.sessions.snapshot(session_id).await?;
    Ok(Json(render_resume(&snapshot.document, &snapshot.style)))
}

// ────────────────────────────────────────────────────────────────────────────
// Document edits
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/document
///
/// Applies one typed update to the document and returns the fresh preview.
pub async fn handle_apply_update(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(op): Json<UpdateOp>,
) -> Result<Json<SessionResponse>, AppError> {
    state
        .sessions
        .mutate(session_id, |s| apply(&mut s.document, op))
        .await??;
    let snapshot = state.sessions.snapshot(session_id).await?;
    Ok(Json(SessionResponse::new(snapshot)))
}

/// POST /api/v1/sessions/:id/document/import
///
/// Extracts content from an existing resume image and merges it into the
/// document. On failure the prior document is retained and the failure
/// surfaced.
pub async fn handle_import_content(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SampleImageRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    // Reject dead sessions and bad payloads before spending an LLM call.
    state.sessions.snapshot(session_id).await?;
    let image = ImageBlock::from_payload(&request.image, request.media_type.as_deref())?;

    let parsed: ParsedResume = state
        .llm
        .call_json_with_image(CONTENT_IMPORT_PROMPT, CONTENT_IMPORT_SYSTEM, &image)
        .await
        .map_err(|e| AppError::Llm(format!("content extraction failed: {e}")))?;

    state
        .sessions
        .mutate(session_id, |s| s.document.merge_parsed(parsed))
        .await?;
    let snapshot = state.sessions.snapshot(session_id).await?;
    Ok(Json(SessionResponse::new(snapshot)))
}

// ────────────────────────────────────────────────────────────────────────────
// Style acquisition
// ────────────────────────────────────────────────────────────────────────────

/// PUT /api/v1/sessions/:id/style/preset
///
/// Direct substitution from the fixed preset table — no validation step,
/// presets are correct by construction.
pub async fn handle_select_preset(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectPresetRequest>,
) -> Result<Json<StyleResponse>, AppError> {
    let style = preset(&request.name)
        .ok_or_else(|| AppError::NotFound(format!("Unknown preset '{}'", request.name)))?;

    let style = state
        .sessions
        .mutate(session_id, |s| {
            s.style = style;
            s.style.clone()
        })
        .await?;
    let snapshot = state.sessions.snapshot(session_id).await?;
    Ok(Json(StyleResponse {
        style,
        fell_back: false,
        preview: render_resume(&snapshot.document, &snapshot.style),
    }))
}

/// PUT /api/v1/sessions/:id/style
///
/// Replaces the descriptor with an externally supplied value, falling back
/// to the default descriptor when the value is not structurally plausible.
pub async fn handle_set_style(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(value): Json<Value>,
) -> Result<Json<StyleResponse>, AppError> {
    let (style, fell_back) = StyleDescriptor::from_external(value);

    let style = state
        .sessions
        .mutate(session_id, |s| {
            s.style = style;
            s.style.clone()
        })
        .await?;
    let snapshot = state.sessions.snapshot(session_id).await?;
    Ok(Json(StyleResponse {
        style,
        fell_back,
        preview: render_resume(&snapshot.document, &snapshot.style),
    }))
}

/// POST /api/v1/sessions/:id/style/analyze
///
/// Infers a style from a sample resume image. Inference failure degrades
/// to the default descriptor — it never blocks the editing flow.
pub async fn handle_analyze_style(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SampleImageRequest>,
) -> Result<Json<StyleResponse>, AppError> {
    state.sessions.snapshot(session_id).await?;
    let image = ImageBlock::from_payload(&request.image, request.media_type.as_deref())?;

    let inference = analyze_style_sample(&image, &state.llm).await;
    if inference.fell_back {
        warn!("session {session_id}: style inference fell back to default");
    }

    let style = state
        .sessions
        .mutate(session_id, |s| {
            s.style = inference.descriptor;
            s.style.clone()
        })
        .await?;
    let snapshot = state.sessions.snapshot(session_id).await?;
    Ok(Json(StyleResponse {
        style,
        fell_back: inference.fell_back,
        preview: render_resume(&snapshot.document, &snapshot.style),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Per-field polish
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/polish
///
/// Rewrites one field toward the style's tone. The field is reserved for
/// the duration of the call: a second request for the same field conflicts,
/// other fields stay independent. On failure the prior value is retained.
pub async fn handle_polish(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PolishRequest>,
) -> Result<Json<PolishResponse>, AppError> {
    let target = request.target;

    // Reserve the field and capture its value and the tone in one lock hold.
    let (current, tone) = state
        .sessions
        .mutate(session_id, |s| {
            let current = target
                .read(&s.document)
                .ok_or_else(|| AppError::NotFound("target entry no longer exists".to_string()))?
                .to_string();
            if current.trim().is_empty() {
                return Err(AppError::Validation(
                    "target field is empty — nothing to polish".to_string(),
                ));
            }
            if !s.try_begin_polish(target) {
                return Err(AppError::PolishInFlight);
            }
            Ok((current, s.style.tone.clone()))
        })
        .await??;

    // No locks held across the LLM call.
    let result = rewrite_field(&state.llm, &tone, &target, &current).await;

    // Release the reservation whether or not the call succeeded, and write
    // back only on success.
    let applied = state
        .sessions
        .mutate(session_id, |s| {
            s.finish_polish(&target);
            match &result {
                Ok(polished) => target.write(&mut s.document, polished.clone()),
                Err(_) => false,
            }
        })
        .await?;

    let polished = result?;
    if !applied {
        return Err(AppError::NotFound(
            "target entry no longer exists".to_string(),
        ));
    }

    let snapshot = state.sessions.snapshot(session_id).await?;
    Ok(Json(PolishResponse {
        polished,
        preview: render_resume(&snapshot.document, &snapshot.style),
        session: snapshot,
    }))
}
