use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use futures_util::TryStreamExt;
use sea_orm::DatabaseConnection;

use crate::auth::AuthenticatedUser;
use crate::db::profiles as profile_db;
use crate::error::{ApiError, ok_message};
use crate::storage::{FileCategory, StorageClient, object_path};

struct UploadedFile {
    filename: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// Pull the `file` field out of a multipart stream, enforcing the size cap
/// while reading so an oversized body is rejected without buffering it all.
async fn read_file_field(mut payload: Multipart, max_size: usize) -> Result<UploadedFile, ApiError> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() != "file" {
            continue;
        }

        let filename = field
            .content_disposition()
            .get_filename()
            .unwrap_or("upload.bin")
            .to_string();
        let content_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if bytes.len() + chunk.len() > max_size {
                return Err(ApiError::Validation(format!(
                    "File size exceeds {}MB limit",
                    max_size / 1024 / 1024
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        return Ok(UploadedFile {
            filename,
            content_type,
            bytes,
        });
    }

    Err(ApiError::Validation("No file provided".to_string()))
}

/// Shared upload flow: validate, write to the bucket, and return the object
/// path plus a URL. Public categories also persist the URL into the profile
/// row, best-effort.
async fn upload(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    storage: web::Data<StorageClient>,
    payload: Multipart,
    category: FileCategory,
) -> Result<HttpResponse, ApiError> {
    let file = read_file_field(payload, category.max_size()).await?;
    category
        .validate(file.bytes.len(), &file.content_type)
        .map_err(ApiError::Validation)?;

    let path = object_path(user.id, &file.filename);
    let bucket = category.bucket();
    storage
        .upload(bucket, &path, &file.content_type, file.bytes)
        .await?;

    let url = if category.is_public() {
        let url = storage.public_url(bucket, &path);
        if let Err(e) = profile_db::set_media_url(db.get_ref(), user.id, category, &url).await {
            tracing::warn!("failed to persist {} url for {}: {e}", bucket, user.id);
        }
        url
    } else {
        format!("/api/storage/{bucket}/{path}")
    };

    let message = format!("{} uploaded successfully", category.label());
    Ok(ok_message(
        serde_json::json!({ "path": path, "url": url }),
        &message,
    ))
}

/// POST /api/upload/resume — private bucket, 5MB, PDF or Word.
pub async fn upload_resume(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    storage: web::Data<StorageClient>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    upload(user, db, storage, payload, FileCategory::Resume).await
}

/// POST /api/upload/portfolio — private bucket, 10MB, documents and media.
pub async fn upload_portfolio(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    storage: web::Data<StorageClient>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    upload(user, db, storage, payload, FileCategory::Portfolio).await
}

/// POST /api/upload/profile-photo — public bucket, 2MB, images only.
pub async fn upload_profile_photo(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    storage: web::Data<StorageClient>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    upload(user, db, storage, payload, FileCategory::ProfilePhoto).await
}

/// POST /api/upload/profile-banner — public bucket, 5MB, images only.
pub async fn upload_profile_banner(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    storage: web::Data<StorageClient>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    upload(user, db, storage, payload, FileCategory::ProfileBanner).await
}
