///! Integration tests for JWT auth validation.
///!
///! Supabase signs real tokens with ES256 against keys fetched from the
///! project's JWKS endpoint, so a positive-path test needs network. These
///! tests cover everything that fails before any fetch happens, plus the
///! claims helpers. No running server or database is needed.
///!
///! Run with: `cargo test --test auth_test`
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

use heyprodata_backend::auth::jwks::{AuthError, JwksCache};
use heyprodata_backend::auth::jwt::{Claims, UserMetadata, validate_token};

fn test_claims(sub: &str, email: Option<&str>, metadata_email: Option<&str>) -> Claims {
    let now = Utc::now().timestamp() as usize;
    Claims {
        sub: sub.to_string(),
        exp: now + 3600,
        iat: Some(now),
        iss: Some("https://example.supabase.co/auth/v1".to_string()),
        email: email.map(String::from),
        role: Some("authenticated".to_string()),
        user_metadata: metadata_email.map(|e| UserMetadata {
            email: Some(e.to_string()),
            email_verified: Some(true),
        }),
    }
}

#[tokio::test]
async fn garbage_token_is_rejected_before_any_fetch() {
    let jwks = JwksCache::new("example", "anon-key");
    let result = validate_token("not.a.valid.jwt", &jwks).await;
    assert!(matches!(result, Err(AuthError::Malformed(_))));
}

#[tokio::test]
async fn token_without_kid_is_rejected_before_any_fetch() {
    // A structurally valid HS256 token, but with no `kid` in the header —
    // real Supabase tokens always carry one.
    let claims = test_claims(&Uuid::new_v4().to_string(), Some("a@example.com"), None);
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"test-secret-at-least-256-bits-long-for-hs256"),
    )
    .unwrap();

    let jwks = JwksCache::new("example", "anon-key");
    let result = validate_token(&token, &jwks).await;
    match result {
        Err(AuthError::Malformed(msg)) => assert!(msg.contains("kid")),
        other => panic!("expected Malformed error, got {other:?}"),
    }
}

#[test]
fn user_id_parses_the_sub_claim() {
    let user_id = Uuid::new_v4();
    let claims = test_claims(&user_id.to_string(), None, None);
    assert_eq!(claims.user_id().unwrap(), user_id);
}

#[test]
fn user_id_rejects_a_non_uuid_sub() {
    let claims = test_claims("service-account", None, None);
    assert!(matches!(claims.user_id(), Err(AuthError::BadClaims(_))));
}

#[test]
fn user_email_prefers_the_top_level_claim() {
    let claims = test_claims(
        &Uuid::new_v4().to_string(),
        Some("top@example.com"),
        Some("meta@example.com"),
    );
    assert_eq!(claims.user_email().unwrap(), "top@example.com");
}

#[test]
fn user_email_falls_back_to_provider_metadata() {
    let claims = test_claims(&Uuid::new_v4().to_string(), None, Some("meta@example.com"));
    assert_eq!(claims.user_email().unwrap(), "meta@example.com");

    let bare = test_claims(&Uuid::new_v4().to_string(), None, None);
    assert!(bare.user_email().is_none());
}
