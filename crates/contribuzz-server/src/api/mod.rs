//! API handlers.

mod contributors;
mod feedback;
mod log;
mod repository;
mod save_wall;
mod subscribers;
mod wall;

use actix_web::web;

pub(crate) fn configure_api_handlers(cfg: &mut web::ServiceConfig) {
    cfg.route("/wall", web::get().to(wall::resolve_wall))
        .route(
            "/fetchContributors",
            web::post().to(contributors::fetch_contributors),
        )
        .route("/githubRepo", web::post().to(repository::github_repo))
        .route("/save-full-wall", web::post().to(save_wall::save_full_wall))
        .route(
            "/save-avatar-wall",
            web::post().to(save_wall::save_avatar_wall),
        )
        .route("/addSubscriber", web::post().to(subscribers::add_subscriber))
        .route("/sendFeedback", web::post().to(feedback::send_feedback))
        .route("/log", web::get().to(log::log_visit));
}
