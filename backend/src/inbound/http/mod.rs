//! HTTP inbound adapter exposing REST endpoints.

use actix_web::{Scope, web};

pub mod envelope;
pub mod error;
pub mod health;
pub mod resources;
pub mod schemas;
pub mod state;

pub use error::ApiResult;

/// Mount point shared by every content route.
pub const API_PREFIX: &str = "/api/v1";

/// The `/api/v1` scope with every content route and the JSON error handler.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use site_backend::inbound::http::api_scope;
///
/// let app = App::new().service(api_scope());
/// # let _ = app;
/// ```
pub fn api_scope() -> Scope {
    web::scope(API_PREFIX)
        .app_data(
            web::JsonConfig::default()
                .error_handler(|err, _req| error::json_body_error(&err).into()),
        )
        .configure(resources::configure)
}
