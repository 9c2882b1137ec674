///! Tests for upload validation and storage path construction.
///!
///! Run with: `cargo test --test storage_test`
use uuid::Uuid;

use heyprodata_backend::storage::{FileCategory, StorageClient, object_path};

#[test]
fn resume_accepts_documents_within_the_limit() {
    let resume = FileCategory::Resume;
    assert!(resume.validate(1024, "application/pdf").is_ok());
    assert!(resume.validate(1024, "application/msword").is_ok());
    assert!(
        resume
            .validate(
                1024,
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            )
            .is_ok()
    );
}

#[test]
fn oversized_files_are_rejected_with_the_limit_in_the_message() {
    let err = FileCategory::Resume
        .validate(6 * 1024 * 1024, "application/pdf")
        .unwrap_err();
    assert_eq!(err, "File size exceeds 5MB limit");

    let err = FileCategory::ProfilePhoto
        .validate(3 * 1024 * 1024, "image/png")
        .unwrap_err();
    assert_eq!(err, "File size exceeds 2MB limit");
}

#[test]
fn disallowed_mime_types_are_rejected() {
    let err = FileCategory::Resume
        .validate(1024, "image/png")
        .unwrap_err();
    assert_eq!(err, "File type image/png is not allowed");

    assert!(
        FileCategory::ProfilePhoto
            .validate(1024, "application/pdf")
            .is_err()
    );
    assert!(FileCategory::Portfolio.validate(1024, "video/mp4").is_ok());
}

#[test]
fn only_profile_media_buckets_are_public() {
    assert!(FileCategory::ProfilePhoto.is_public());
    assert!(FileCategory::ProfileBanner.is_public());
    assert!(!FileCategory::Resume.is_public());
    assert!(!FileCategory::Portfolio.is_public());
}

#[test]
fn object_path_is_scoped_to_the_user_and_keeps_the_extension() {
    let user_id = Uuid::new_v4();
    let path = object_path(user_id, "My Resume.v2.pdf");

    let (prefix, name) = path.split_once('/').expect("path has a user prefix");
    assert_eq!(prefix, user_id.to_string());
    assert!(name.ends_with(".pdf"));

    // No extension falls back to .bin.
    let path = object_path(user_id, "README");
    assert!(path.ends_with(".bin"));
}

#[test]
fn public_url_targets_the_public_object_route() {
    let client = StorageClient::new("https://example.supabase.co/", "service-key");
    assert_eq!(
        client.public_url("profile-photos", "u/1.png"),
        "https://example.supabase.co/storage/v1/object/public/profile-photos/u/1.png"
    );
}
