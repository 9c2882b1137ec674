pub mod applications;
pub mod availability;
pub mod contacts;
pub mod gigs;
pub mod notifications;
pub mod profile;
pub mod referrals;
pub mod skills;
pub mod uploads;

use actix_web::{HttpResponse, Responder, web};

/// GET /api/health — liveness probe, no auth.
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "HeyProData API",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Single routing table: one method+path entry per handler. Listing and
/// fetching gigs is public; everything else requires a bearer token via the
/// `AuthenticatedUser` extractor.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));

    cfg.service(
        web::scope("/gigs")
            .route("", web::get().to(gigs::list_gigs))
            .route("", web::post().to(gigs::create_gig))
            .route("/{id}", web::get().to(gigs::get_gig))
            .route("/{id}", web::patch().to(gigs::update_gig))
            .route("/{id}", web::delete().to(gigs::delete_gig))
            .route("/{id}/apply", web::post().to(applications::apply_to_gig))
            .route(
                "/{id}/applications",
                web::get().to(applications::list_for_gig),
            )
            .route(
                "/{id}/applications/{app_id}/status",
                web::patch().to(applications::update_status),
            ),
    );

    cfg.service(
        web::scope("/applications")
            .route(
                "/my-applications",
                web::get().to(applications::my_applications),
            )
            .route("/{id}", web::get().to(applications::get_application)),
    );

    cfg.service(
        web::scope("/skills")
            .route("", web::get().to(skills::list_skills))
            .route("", web::post().to(skills::add_skill))
            .route("/{id}", web::delete().to(skills::remove_skill)),
    );

    cfg.service(
        web::scope("/availability")
            .route("", web::get().to(availability::list_availability))
            .route("", web::post().to(availability::set_availability))
            .route("/check", web::get().to(availability::check_conflicts))
            .route("/{id}", web::patch().to(availability::update_availability)),
    );

    cfg.service(
        web::scope("/contacts")
            .route("", web::post().to(contacts::add_contact))
            .route("/gig/{gig_id}", web::get().to(contacts::list_for_gig))
            .route("/{id}", web::delete().to(contacts::remove_contact)),
    );

    cfg.service(
        web::scope("/referrals")
            .route("", web::get().to(referrals::list_referrals))
            .route("", web::post().to(referrals::create_referral)),
    );

    cfg.service(
        web::scope("/notifications")
            .route("", web::get().to(notifications::list_notifications))
            .route(
                "/mark-all-read",
                web::patch().to(notifications::mark_all_read),
            )
            .route("/{id}/read", web::patch().to(notifications::mark_read)),
    );

    cfg.service(
        web::scope("/profile")
            .route("", web::get().to(profile::get_profile))
            .route("", web::patch().to(profile::update_profile))
            .route("/check-complete", web::get().to(profile::check_complete)),
    );

    cfg.service(
        web::scope("/upload")
            .route("/resume", web::post().to(uploads::upload_resume))
            .route("/portfolio", web::post().to(uploads::upload_portfolio))
            .route(
                "/profile-photo",
                web::post().to(uploads::upload_profile_photo),
            )
            .route(
                "/profile-banner",
                web::post().to(uploads::upload_profile_banner),
            ),
    );
}
