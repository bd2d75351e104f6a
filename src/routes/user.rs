use actix_session::Session;
use actix_web::{
    get, post,
    web::{Data, Form},
    HttpResponse,
};
use validator::Validate;

use crate::{
    app::{AppError, AppState},
    auth::{self, password},
    database::models::user::User,
    forms::{self, LoginForm, RegisterForm},
    routes::redirect,
    views,
};

/// Pipe for rendering the registration form
/// - url: `{domain}/register`
#[get("/register")]
pub async fn show_register(
    session: Session,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let mut conn = app_state.pool.get()?;
    let viewer = auth::current_user(&session, &mut conn);
    let flash = auth::take_flash(&session);

    let page = app_state.templates.register_page(
        &RegisterForm::default(),
        &forms::no_errors(RegisterForm::FIELDS),
        viewer.as_ref(),
        flash,
    )?;

    Ok(views::html(page))
}

/// Pipe for submitting the registration form
/// - url: `{domain}/register`
///
/// # HTTP request requirements
/// ## body
/// - form encoded `email`, `password` and `name` fields
///
/// # Response
/// ## Ok
/// - the form re-rendered with field errors when validation fails
/// ## Redirect
/// - to `/login` when the email is already registered
/// - to `/` with a fresh session bound to the new user on success
#[post("/register")]
pub async fn register(
    session: Session,
    form: Form<RegisterForm>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let mut conn = app_state.pool.get()?;

    if let Err(errors) = form.validate() {
        let viewer = auth::current_user(&session, &mut conn);
        let flash = auth::take_flash(&session);
        let page = app_state.templates.register_page(
            &form,
            &forms::error_map(RegisterForm::FIELDS, Err(errors)),
            viewer.as_ref(),
            flash,
        )?;
        return Ok(views::html(page));
    }

    if User::find_by_email(&mut conn, &form.email).is_some() {
        auth::flash(&session, "Welcome back, please log in.");
        return Ok(redirect("/login"));
    }

    let hashed = password::hash_password(&form.password);
    let user = match User::new(&mut conn, &form.email, &hashed, &form.name) {
        Ok(user) => user,
        //Lost a race against a concurrent registration for the same email
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        )) => {
            auth::flash(&session, "Welcome back, please log in.");
            return Ok(redirect("/login"));
        }
        Err(err) => return Err(err.into()),
    };

    auth::log_in(&session, &user)?;
    auth::flash(&session, "You have been successfully registered.");
    log::info!("Registered user {}", user.id);

    Ok(redirect("/"))
}

/// Pipe for rendering the login form
/// - url: `{domain}/login`
#[get("/login")]
pub async fn show_login(
    session: Session,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let mut conn = app_state.pool.get()?;
    let viewer = auth::current_user(&session, &mut conn);
    let flash = auth::take_flash(&session);

    let page = app_state.templates.login_page(
        &LoginForm::default(),
        &forms::no_errors(LoginForm::FIELDS),
        viewer.as_ref(),
        flash,
    )?;

    Ok(views::html(page))
}

/// Pipe for logging in as a user
/// - url: `{domain}/login`
///
/// # HTTP request requirements
/// ## body
/// - form encoded `email` and `password` fields
///
/// # Response
/// ## Ok
/// - the form re-rendered with field errors when validation fails
/// ## Redirect
/// - back to `/login` with a flash message for unknown emails or a wrong
///   password, with no session established
/// - to `/` with a session bound to the user on success
#[post("/login")]
pub async fn login(
    session: Session,
    form: Form<LoginForm>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let mut conn = app_state.pool.get()?;

    if let Err(errors) = form.validate() {
        let viewer = auth::current_user(&session, &mut conn);
        let flash = auth::take_flash(&session);
        let page = app_state.templates.login_page(
            &form,
            &forms::error_map(LoginForm::FIELDS, Err(errors)),
            viewer.as_ref(),
            flash,
        )?;
        return Ok(views::html(page));
    }

    let user = match User::find_by_email(&mut conn, &form.email) {
        Some(user) => user,
        None => {
            auth::flash(&session, "No account found with that email.");
            return Ok(redirect("/login"));
        }
    };

    if !password::verify_password(&user.password, &form.password) {
        auth::flash(&session, "Incorrect password.");
        return Ok(redirect("/login"));
    }

    auth::log_in(&session, &user)?;
    auth::flash(&session, &format!("Welcome {}!", user.name));

    Ok(redirect("/"))
}

/// Pipe for logging out
/// - url: `{domain}/logout`
///
/// Clears the session principal unconditionally and redirects home.
#[get("/logout")]
pub async fn logout(session: Session) -> HttpResponse {
    auth::log_out(&session);
    auth::flash(&session, "You have been logged out.");

    redirect("/")
}
