//! Media upload and management handlers backed by the S3 store.
//!
//! Two upload surfaces exist: the admin library accepts any number of
//! files per request, while `/api/upload` serves the block editor and
//! answers in the shape the editor expects (`{success, file: {url}}`).

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use taramind_storage::MediaObject;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// An upload result entry for the admin library.
#[derive(Debug, Serialize)]
pub struct UploadedFile {
    pub name: String,
    pub url: String,
}

/// Block-editor upload response. The editor contract is fixed:
/// `success` is `1` and the image URL sits under `file.url`.
#[derive(Debug, Serialize)]
pub struct EditorUploadResponse {
    pub success: u8,
    pub file: EditorUploadFile,
}

#[derive(Debug, Serialize)]
pub struct EditorUploadFile {
    pub url: String,
}

/// GET /admin/media -- every object in the bucket with public URLs.
pub async fn list(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<MediaObject>>>> {
    let objects = state.media.list().await?;
    Ok(Json(DataResponse { data: objects }))
}

/// POST /admin/media/upload -- multipart upload of one or more files.
pub async fn upload(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<UploadedFile>>>)> {
    let mut uploaded = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let Some(file_name) = field.file_name().map(sanitize_file_name) else {
            // Skip non-file fields (form metadata).
            continue;
        };
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

        if bytes.is_empty() {
            return Err(AppError::BadRequest(format!("Empty file: {file_name}")));
        }

        let key = state.media.timestamped_key(&file_name);
        state.media.upload(&key, bytes.to_vec(), &content_type).await?;

        uploaded.push(UploadedFile {
            url: state.media.public_url(&key),
            name: key,
        });
    }

    if uploaded.is_empty() {
        return Err(AppError::BadRequest("No files in upload".into()));
    }

    tracing::info!(
        count = uploaded.len(),
        admin_id = user.profile_id,
        "media uploaded"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: uploaded })))
}

/// POST /api/upload -- single-image upload for the block editor.
///
/// Only decodable images are accepted here; the editor embeds the
/// returned URL directly into the document.
pub async fn editor_upload(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<EditorUploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let Some(file_name) = field.file_name().map(sanitize_file_name) else {
            continue;
        };
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

        if image::guess_format(&bytes).is_err() {
            return Err(AppError::BadRequest(format!(
                "Not a recognized image format: {file_name}"
            )));
        }

        let key = state.media.timestamped_key(&file_name);
        state.media.upload(&key, bytes.to_vec(), &content_type).await?;

        return Ok(Json(EditorUploadResponse {
            success: 1,
            file: EditorUploadFile {
                url: state.media.public_url(&key),
            },
        }));
    }

    Err(AppError::BadRequest("No image in upload".into()))
}

/// DELETE /admin/media/{name}
pub async fn remove(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<StatusCode> {
    state.media.remove(&name).await?;
    tracing::info!(key = %name, admin_id = user.profile_id, "media object removed");
    Ok(StatusCode::NO_CONTENT)
}

/// Keep object keys predictable: path separators and control characters
/// are replaced, everything else passes through.
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_control() || matches!(c, '/' | '\\' | '?' | '#' | '%' | ' ') {
                '-'
            } else {
                c
            }
        })
        .collect();
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_separators() {
        assert_eq!(sanitize_file_name("../etc/passwd"), "..-etc-passwd");
        assert_eq!(sanitize_file_name("my photo.png"), "my-photo.png");
    }

    #[test]
    fn test_sanitize_empty_falls_back() {
        assert_eq!(sanitize_file_name(""), "file");
    }
}
