pub mod pages;
pub mod post;
pub mod user;

use actix_web::{http::header, HttpResponse};

/// Redirect used after successful form submissions and auth bounces.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
