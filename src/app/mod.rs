use std::fmt::Display;

use actix_session::{SessionGetError, SessionInsertError};
use actix_web::{HttpResponse, ResponseError};
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use diesel::SqliteConnection;

use crate::database::db_utils::build_pool;
use crate::views::Renderer;

/** Used for storing the database pool and the template renderer when handling requests */
pub struct AppState {
    pub pool: Pool<ConnectionManager<SqliteConnection>>,
    pub templates: Renderer,
}

impl AppState {
    /// Builds the shared application state, creating the schema if it is
    /// missing. `database_url` falls back to the `DATABASE_URL` environment
    /// variable and then to `blog.db`.
    pub fn new(database_url: Option<&str>) -> Self {
        AppState {
            pool: build_pool(database_url),
            templates: Renderer::new().expect("Failed to register templates"),
        }
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            templates: self.templates.clone(),
        }
    }
}

/** Holds the errors we will use during request processing */
#[derive(Debug)]
pub enum AppError {
    InternalServerError,
    BadRequest,
    Forbidden,
    NotFound,
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::InternalServerError => f.write_str("Internal server error"),
            AppError::BadRequest => f.write_str("Bad request"),
            AppError::Forbidden => f.write_str("Forbidden"),
            AppError::NotFound => f.write_str("Not found"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            AppError::InternalServerError => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest => actix_web::http::StatusCode::BAD_REQUEST,
            AppError::Forbidden => actix_web::http::StatusCode::FORBIDDEN,
            AppError::NotFound => actix_web::http::StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        HttpResponse::new(self.status_code())
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => AppError::NotFound,
            diesel::result::Error::DatabaseError(_, _) => AppError::BadRequest,
            diesel::result::Error::DeserializationError(_) => AppError::BadRequest,
            _ => AppError::InternalServerError,
        }
    }
}

impl From<PoolError> for AppError {
    fn from(_: PoolError) -> Self {
        AppError::InternalServerError
    }
}

impl From<SessionInsertError> for AppError {
    fn from(_: SessionInsertError) -> Self {
        AppError::InternalServerError
    }
}

impl From<SessionGetError> for AppError {
    fn from(_: SessionGetError) -> Self {
        AppError::InternalServerError
    }
}

impl From<tera::Error> for AppError {
    fn from(_: tera::Error) -> Self {
        AppError::InternalServerError
    }
}

impl std::error::Error for AppError {}
