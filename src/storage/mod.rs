use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("storage responded with {status}: {body}")]
    Response { status: u16, body: String },
}

/// Upload categories with their bucket, size ceiling and MIME allow-list.
///
/// Profile photos and banners land in public buckets and yield a public URL;
/// resumes and portfolio files stay private and are resolved later through
/// signed URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Resume,
    Portfolio,
    ProfilePhoto,
    ProfileBanner,
}

impl FileCategory {
    pub fn bucket(&self) -> &'static str {
        match self {
            FileCategory::Resume => "resumes",
            FileCategory::Portfolio => "portfolios",
            FileCategory::ProfilePhoto => "profile-photos",
            FileCategory::ProfileBanner => "profile-banner",
        }
    }

    pub fn max_size(&self) -> usize {
        match self {
            FileCategory::Resume => 5 * 1024 * 1024,
            FileCategory::Portfolio => 10 * 1024 * 1024,
            FileCategory::ProfilePhoto => 2 * 1024 * 1024,
            FileCategory::ProfileBanner => 5 * 1024 * 1024,
        }
    }

    pub fn allowed_mime_types(&self) -> &'static [&'static str] {
        match self {
            FileCategory::Resume => &[
                "application/pdf",
                "application/msword",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ],
            FileCategory::Portfolio => &[
                "application/pdf",
                "image/jpeg",
                "image/png",
                "image/gif",
                "image/webp",
                "video/mp4",
                "video/quicktime",
                "video/x-msvideo",
            ],
            FileCategory::ProfilePhoto | FileCategory::ProfileBanner => {
                &["image/jpeg", "image/png", "image/webp"]
            }
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, FileCategory::ProfilePhoto | FileCategory::ProfileBanner)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileCategory::Resume => "Resume",
            FileCategory::Portfolio => "Portfolio file",
            FileCategory::ProfilePhoto => "Profile photo",
            FileCategory::ProfileBanner => "Profile banner",
        }
    }

    /// Validate size and MIME type. Runs before any storage write.
    pub fn validate(&self, size: usize, content_type: &str) -> Result<(), String> {
        if size > self.max_size() {
            return Err(format!(
                "File size exceeds {}MB limit",
                self.max_size() / 1024 / 1024
            ));
        }
        if !self.allowed_mime_types().contains(&content_type) {
            return Err(format!("File type {content_type} is not allowed"));
        }
        Ok(())
    }
}

/// Storage object key: `{user_id}/{timestamp_millis}.{ext}`.
pub fn object_path(user_id: Uuid, filename: &str) -> String {
    let ext = filename.rsplit_once('.').map(|(_, e)| e).unwrap_or("bin");
    format!("{user_id}/{}.{ext}", chrono::Utc::now().timestamp_millis())
}

#[derive(Debug, Deserialize)]
struct SignedUrlResponse {
    #[serde(rename = "signedURL")]
    signed_url: String,
}

/// Thin client for the Supabase Storage REST API.
///
/// Constructed once in `main` and injected into handlers via `web::Data`.
#[derive(Clone)]
pub struct StorageClient {
    base_url: String,
    service_key: String,
    client: reqwest::Client,
}

impl StorageClient {
    pub fn new(base_url: &str, service_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError> {
        let url = format!("{}/storage/v1/object/{bucket}/{path}", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.service_key)
            .header("Content-Type", content_type)
            .header("cache-control", "3600")
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// Public URL for objects in public buckets.
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/public/{bucket}/{path}", self.base_url)
    }

    /// Time-limited URL for objects in private buckets.
    pub async fn create_signed_url(
        &self,
        bucket: &str,
        path: &str,
        expires_in_secs: u64,
    ) -> Result<String, StorageError> {
        let url = format!("{}/storage/v1/object/sign/{bucket}/{path}", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.service_key)
            .json(&serde_json::json!({ "expiresIn": expires_in_secs }))
            .send()
            .await?;

        let response = Self::check(response).await?;
        let signed: SignedUrlResponse = response.json().await?;
        Ok(format!("{}/storage/v1{}", self.base_url, signed.signed_url))
    }

    pub async fn remove(&self, bucket: &str, path: &str) -> Result<(), StorageError> {
        let url = format!("{}/storage/v1/object/{bucket}/{path}", self.base_url);
        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StorageError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StorageError::Response {
            status: status.as_u16(),
            body,
        })
    }
}
