pub mod benefits;
pub mod classify;
pub mod discover;
pub mod error;
pub mod health;
pub mod openapi;
pub mod plans;
pub mod sessions;

use actix_web::web;

/// Register every route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .configure(openapi::configure)
        .configure(classify::configure)
        .configure(discover::configure)
        .configure(plans::configure)
        .configure(sessions::configure)
        .configure(benefits::configure);
}
