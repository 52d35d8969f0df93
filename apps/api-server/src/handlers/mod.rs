//! HTTP handlers and route configuration.

mod admin;
mod auth;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(auth::login))
                    .route("/logout", web::post().to(auth::logout))
                    .route("/me", web::get().to(auth::me)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_published))
                    .route("/{slug}", web::get().to(posts::by_slug)),
            )
            // Admin routes, gated by the route guard
            .service(
                web::scope("/admin")
                    .route("/stats", web::get().to(admin::stats))
                    .service(
                        web::scope("/posts")
                            .route("", web::get().to(admin::list))
                            .route("", web::post().to(admin::create))
                            .route("/preview", web::post().to(admin::preview))
                            .route("/{id}", web::put().to(admin::update))
                            .route("/{id}/publish", web::post().to(admin::toggle_publish))
                            .route("/{id}", web::delete().to(admin::delete)),
                    ),
            ),
    );
}
