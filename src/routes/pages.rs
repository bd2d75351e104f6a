use actix_session::Session;
use actix_web::{get, web::Data, HttpResponse};

use crate::{
    app::{AppError, AppState},
    auth, views,
};

/// Pipe for the about page
/// - url: `{domain}/about`
#[get("/about")]
pub async fn about(session: Session, app_state: Data<AppState>) -> Result<HttpResponse, AppError> {
    let mut conn = app_state.pool.get()?;
    let viewer = auth::current_user(&session, &mut conn);
    let flash = auth::take_flash(&session);

    Ok(views::html(app_state.templates.about(viewer.as_ref(), flash)?))
}

/// Pipe for the contact page
/// - url: `{domain}/contact`
#[get("/contact")]
pub async fn contact(
    session: Session,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let mut conn = app_state.pool.get()?;
    let viewer = auth::current_user(&session, &mut conn);
    let flash = auth::take_flash(&session);

    Ok(views::html(
        app_state.templates.contact(viewer.as_ref(), flash)?,
    ))
}
