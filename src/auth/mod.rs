pub mod password;

use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionMiddleware};
use actix_web::cookie::Key;
use diesel::SqliteConnection;

use crate::app::AppError;
use crate::database::models::user::User;

const USER_KEY: &str = "user_id";
const FLASH_KEY: &str = "flash";

/// Resolves the logged in user from the session. The session only holds
/// the user id; the row is re-fetched on every request, so a vanished
/// user resolves to `None` instead of stale data.
pub fn current_user(session: &Session, conn: &mut SqliteConnection) -> Option<User> {
    let user_id = session.get::<i32>(USER_KEY).ok().flatten()?;
    User::find_by_id(conn, user_id)
}

/// Binds the session to the given user.
pub fn log_in(session: &Session, user: &User) -> Result<(), AppError> {
    session.renew();
    session.insert(USER_KEY, user.id)?;
    Ok(())
}

/// Clears the session principal unconditionally. Always succeeds.
pub fn log_out(session: &Session) {
    session.remove(USER_KEY);
}

/// Admission check for the admin routes. Protected handlers call this
/// first and bail out with `Forbidden` before doing anything else.
pub fn require_admin(session: &Session, conn: &mut SqliteConnection) -> Result<User, AppError> {
    match current_user(session, conn) {
        Some(user) if user.is_admin => Ok(user),
        _ => Err(AppError::Forbidden),
    }
}

/// Queues a one-shot notice shown on the next rendered page.
pub fn flash(session: &Session, message: &str) {
    let _res = session.insert(FLASH_KEY, message);
}

/// Takes the pending flash message, clearing it from the session.
pub fn take_flash(session: &Session) -> Option<String> {
    let message = session.get::<String>(FLASH_KEY).ok().flatten();
    if message.is_some() {
        session.remove(FLASH_KEY);
    }
    message
}

/// Cookie backed session middleware. The cookie carries only the signed
/// session map with the user id inside.
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .build()
}

/// Session signing key from the `SECRET_KEY` environment variable, or a
/// fresh random key when it is unset or too short (sessions then reset
/// on every restart).
pub fn session_key() -> Key {
    match std::env::var("SECRET_KEY") {
        Ok(secret) if secret.len() >= 64 => Key::from(secret.as_bytes()),
        _ => Key::generate(),
    }
}
