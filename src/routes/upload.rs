use axum::{
    extract::{Multipart, State},
    response::Html,
    routing::post,
    Router,
};
use bytes::Bytes;
use tracing::{info, warn};

use crate::models::AppState;
use crate::storage::ObjectStore;
use crate::types::{AppError, AppResult};
use crate::utils::sanitize::sanitize_filename;

/// Prefix uploaded objects are stored under. The pipeline lists this same
/// prefix on its next run.
pub const UPLOAD_PREFIX: &str = "uploads/";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/upload", post(upload_csv))
        .with_state(state)
}

/// `POST /upload`: multipart form with a single `file` part. The file's bytes
/// are forwarded unmodified to the object store.
async fn upload_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Html<String>> {
    let mut file_part: Option<(String, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Envio multipart inválido: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Falha ao ler o arquivo: {e}")))?;
            file_part = Some((filename, data));
            break;
        }
    }

    let Some((filename, data)) = file_part else {
        warn!("upload rejected: no file part");
        return Err(AppError::Validation("Nenhum arquivo enviado".to_string()));
    };

    let stored = store_upload(state.store.as_ref(), &filename, &data).await?;
    Ok(Html(format!(
        "Arquivo <strong>{stored}</strong> enviado com sucesso para o S3!"
    )))
}

/// Validate and sanitize `filename`, then write `data` under
/// [`UPLOAD_PREFIX`]. Returns the sanitized name used in the key.
pub async fn store_upload(
    store: &dyn ObjectStore,
    filename: &str,
    data: &[u8],
) -> AppResult<String> {
    if filename.is_empty() {
        warn!("upload rejected: empty filename");
        return Err(AppError::Validation("Nome de arquivo vazio".to_string()));
    }
    let sanitized = sanitize_filename(filename);
    if sanitized.is_empty() {
        warn!(filename, "upload rejected: filename sanitized to nothing");
        return Err(AppError::Validation("Nome de arquivo vazio".to_string()));
    }

    let key = format!("{UPLOAD_PREFIX}{sanitized}");
    store
        .put(&key, data)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    info!(key = %key, bytes = data.len(), "upload stored");
    Ok(sanitized)
}
