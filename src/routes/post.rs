use actix_session::Session;
use actix_web::{
    get, post,
    web::{Data, Form, Path},
    HttpResponse,
};
use chrono::Local;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use validator::Validate;

use crate::{
    app::{AppError, AppState},
    auth,
    database::models::{comment::Comment, post::Post},
    forms::{self, CommentForm, CreatePostForm},
    routes::redirect,
    views,
};

/// Pipe for the home page listing every post
/// - url: `{domain}/`
///
/// Posts come back in creation order (ascending id).
#[get("/")]
pub async fn index(session: Session, app_state: Data<AppState>) -> Result<HttpResponse, AppError> {
    let mut conn = app_state.pool.get()?;

    let posts = Post::all_with_authors(&mut conn);
    let viewer = auth::current_user(&session, &mut conn);
    let flash = auth::take_flash(&session);

    let page = app_state.templates.index(posts, viewer.as_ref(), flash)?;

    Ok(views::html(page))
}

/// Pipe for showing a single post with its comments
/// - url: `{domain}/post/{post_id}`
///
/// # Response
/// ## Ok
/// - the post, its comments and the comment form
/// ## Error
/// - Not found
#[get("/post/{post_id}")]
pub async fn show_post(
    path: Path<i32>,
    session: Session,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let the_id = path.into_inner();
    let mut conn = app_state.pool.get()?;

    let post = Post::find_with_author(&mut conn, the_id).ok_or(AppError::NotFound)?;
    let comments = Comment::find_by_post(&mut conn, the_id);
    let viewer = auth::current_user(&session, &mut conn);
    let flash = auth::take_flash(&session);

    let page = app_state.templates.post_page(
        post,
        comments,
        &CommentForm::default(),
        &forms::no_errors(CommentForm::FIELDS),
        viewer.as_ref(),
        flash,
    )?;

    Ok(views::html(page))
}

/// Pipe for submitting a comment on a post
/// - url: `{domain}/post/{post_id}`
///
/// # HTTP request requirements
/// ## body
/// - form encoded `body` field
///
/// # Response
/// ## Ok
/// - the post view re-rendered with field errors when validation fails
/// ## Redirect
/// - to `/login` with a flash message when nobody is logged in; nothing
///   is persisted in that case
/// - back to the post on success, so the fresh comment comes from a
///   fresh read
/// ## Error
/// - Not found
#[post("/post/{post_id}")]
pub async fn add_comment(
    path: Path<i32>,
    session: Session,
    form: Form<CommentForm>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let the_id = path.into_inner();
    let form = form.into_inner();
    let mut conn = app_state.pool.get()?;

    let post = Post::find_with_author(&mut conn, the_id).ok_or(AppError::NotFound)?;

    let viewer = match auth::current_user(&session, &mut conn) {
        Some(user) => user,
        None => {
            auth::flash(&session, "You have to be logged in if you want to comment.");
            return Ok(redirect("/login"));
        }
    };

    if let Err(errors) = form.validate() {
        let comments = Comment::find_by_post(&mut conn, the_id);
        let flash = auth::take_flash(&session);
        let page = app_state.templates.post_page(
            post,
            comments,
            &form,
            &forms::error_map(CommentForm::FIELDS, Err(errors)),
            Some(&viewer),
            flash,
        )?;
        return Ok(views::html(page));
    }

    Comment::new(&mut conn, the_id, viewer.id, &form.body)?;
    log::debug!("User {} commented on post {}", viewer.id, the_id);

    Ok(redirect(&format!("/post/{}", the_id)))
}

/// Pipe for rendering the post creation form, admins only
/// - url: `{domain}/new-post`
#[get("/new-post")]
pub async fn new_post_page(
    session: Session,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let mut conn = app_state.pool.get()?;
    let admin = auth::require_admin(&session, &mut conn)?;

    let flash = auth::take_flash(&session);
    let page = app_state.templates.post_form(
        "New Post",
        "/new-post",
        &CreatePostForm::default(),
        &forms::no_errors(CreatePostForm::FIELDS),
        Some(&admin),
        flash,
    )?;

    Ok(views::html(page))
}

/// Pipe for creating a new post, admins only
/// - url: `{domain}/new-post`
///
/// # HTTP request requirements
/// ## body
/// - form encoded `title`, `subtitle`, `img_url` and `body` fields
///
/// # Response
/// ## Ok
/// - the form re-rendered with field errors when validation fails or the
///   title is already taken
/// ## Redirect
/// - to `/` on success; the post carries the current date and the admin
///   as its author
/// ## Error
/// - Forbidden
#[post("/new-post")]
pub async fn create_post(
    session: Session,
    form: Form<CreatePostForm>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let mut conn = app_state.pool.get()?;
    let admin = auth::require_admin(&session, &mut conn)?;

    let mut errors = forms::error_map(CreatePostForm::FIELDS, form.validate());
    if errors.values().all(|messages| messages.is_empty()) {
        let date = Local::now().format("%B %d, %Y").to_string();
        match Post::create(
            &mut conn,
            &admin,
            &form.title,
            &form.subtitle,
            &form.img_url,
            &form.body,
            &date,
        ) {
            Ok(post) => {
                log::info!("Created post {}", post.id);
                return Ok(redirect("/"));
            }
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                forms::push_error(&mut errors, "title", "A post with this title already exists.");
            }
            Err(err) => return Err(err.into()),
        }
    }

    let flash = auth::take_flash(&session);
    let page = app_state.templates.post_form(
        "New Post",
        "/new-post",
        &form,
        &errors,
        Some(&admin),
        flash,
    )?;

    Ok(views::html(page))
}

/// Pipe for rendering the edit form pre-populated with a post, admins
/// only
/// - url: `{domain}/edit-post/{post_id}`
///
/// The author and the creation date are not editable and do not appear
/// on the form.
#[get("/edit-post/{post_id}")]
pub async fn edit_post_page(
    path: Path<i32>,
    session: Session,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let the_id = path.into_inner();
    let mut conn = app_state.pool.get()?;
    let admin = auth::require_admin(&session, &mut conn)?;

    let post = Post::find_by_id(&mut conn, the_id).ok_or(AppError::NotFound)?;

    let form = CreatePostForm {
        title: post.title.clone(),
        subtitle: post.subtitle.clone(),
        img_url: post.img_url.clone(),
        body: post.body.clone(),
    };
    let flash = auth::take_flash(&session);
    let action = format!("/edit-post/{}", the_id);
    let page = app_state.templates.post_form(
        "Edit Post",
        &action,
        &form,
        &forms::no_errors(CreatePostForm::FIELDS),
        Some(&admin),
        flash,
    )?;

    Ok(views::html(page))
}

/// Pipe for applying an edit to a post, admins only
/// - url: `{domain}/edit-post/{post_id}`
///
/// # Response
/// ## Ok
/// - the form re-rendered with field errors when validation fails
/// ## Redirect
/// - to the post page on success; only title, subtitle, image url and
///   body change
/// ## Error
/// - Forbidden
/// - Not found
#[post("/edit-post/{post_id}")]
pub async fn edit_post(
    path: Path<i32>,
    session: Session,
    form: Form<CreatePostForm>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let the_id = path.into_inner();
    let form = form.into_inner();
    let mut conn = app_state.pool.get()?;
    let admin = auth::require_admin(&session, &mut conn)?;

    let mut post = Post::find_by_id(&mut conn, the_id).ok_or(AppError::NotFound)?;

    let mut errors = forms::error_map(CreatePostForm::FIELDS, form.validate());
    if errors.values().all(|messages| messages.is_empty()) {
        match post.edit(&mut conn, &form.title, &form.subtitle, &form.img_url, &form.body) {
            Ok(()) => return Ok(redirect(&format!("/post/{}", the_id))),
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                forms::push_error(&mut errors, "title", "A post with this title already exists.");
            }
            Err(err) => return Err(err.into()),
        }
    }

    let flash = auth::take_flash(&session);
    let action = format!("/edit-post/{}", the_id);
    let page = app_state.templates.post_form(
        "Edit Post",
        &action,
        &form,
        &errors,
        Some(&admin),
        flash,
    )?;

    Ok(views::html(page))
}

/// Pipe for deleting a post, admins only
/// - url: `{domain}/delete/{post_id}`
///
/// Deleting a post removes its comments with it; no orphan comment rows
/// remain.
///
/// # Response
/// ## Redirect
/// - to `/` on success
/// ## Error
/// - Forbidden
/// - Not found
#[get("/delete/{post_id}")]
pub async fn delete_post(
    path: Path<i32>,
    session: Session,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let the_id = path.into_inner();
    let mut conn = app_state.pool.get()?;
    auth::require_admin(&session, &mut conn)?;

    Post::find_by_id(&mut conn, the_id).ok_or(AppError::NotFound)?;
    Post::delete_cascading(&mut conn, the_id)?;
    log::info!("Deleted post {} and its comments", the_id);

    Ok(redirect("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password;
    use crate::database::db_utils::test_db_path;
    use crate::database::models::user::User;
    use crate::forms::RegisterForm;
    use crate::routes::user::register;
    use actix_web::{
        cookie::{Cookie, Key},
        dev::ServiceResponse,
        http::StatusCode,
        test::{self, call_service},
        App,
    };
    use pretty_assertions::assert_eq;

    fn test_state() -> (AppState, String) {
        let db = test_db_path();
        (AppState::new(Some(&db)), db)
    }

    fn session_cookie<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
        resp.response()
            .cookies()
            .find(|c| c.name() == "id")
            .expect("session cookie missing")
            .into_owned()
    }

    fn location<B>(resp: &ServiceResponse<B>) -> &str {
        resp.headers()
            .get(actix_web::http::header::LOCATION)
            .expect("no Location header")
            .to_str()
            .unwrap()
    }

    fn register_form(email: &str, name: &str) -> RegisterForm {
        RegisterForm {
            email: String::from(email),
            password: String::from("test_password123"),
            name: String::from(name),
        }
    }

    /// Inserts a user directly; the first one inserted becomes the admin.
    fn seed_user(appstate: &AppState, email: &str, name: &str) -> User {
        User::new(
            &mut appstate.pool.get().unwrap(),
            &String::from(email),
            &password::hash_password("test_password123"),
            &String::from(name),
        )
        .unwrap()
    }

    fn seed_post(appstate: &AppState, author: &User, title: &str) -> Post {
        Post::create(
            &mut appstate.pool.get().unwrap(),
            author,
            &String::from(title),
            &String::from("Test subtitle"),
            &String::from("http://example.com/cover.png"),
            &String::from("Test body"),
            &String::from("January 01, 2020"),
        )
        .unwrap()
    }

    fn post_form(title: &str) -> CreatePostForm {
        CreatePostForm {
            title: String::from(title),
            subtitle: String::from("S"),
            img_url: String::from("http://x/y.png"),
            body: String::from("B"),
        }
    }

    #[actix_rt::test]
    async fn test_index_lists_posts_in_creation_order() {
        let (appstate, db) = test_state();
        let admin = seed_user(&appstate, "admin@example.com", "Admin");
        seed_post(&appstate, &admin, "First post");
        seed_post(&appstate, &admin, "Second post");

        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(appstate.clone()))
                .wrap(crate::auth::session_middleware(Key::from(&[0u8; 64])))
                .service(super::index),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap().to_string();
        let first = body.find("First post").expect("first post missing");
        let second = body.find("Second post").expect("second post missing");
        assert!(first < second);

        let _ = std::fs::remove_file(&db);
    }

    #[actix_rt::test]
    async fn test_show_post_unknown_id_is_not_found() {
        let (appstate, db) = test_state();

        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(appstate.clone()))
                .wrap(crate::auth::session_middleware(Key::from(&[0u8; 64])))
                .service(super::show_post),
        )
        .await;

        let req = test::TestRequest::get().uri("/post/999").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let _ = std::fs::remove_file(&db);
    }

    #[actix_rt::test]
    async fn test_comment_requires_login() {
        let (appstate, db) = test_state();
        let admin = seed_user(&appstate, "admin@example.com", "Admin");
        let post = seed_post(&appstate, &admin, "Test title");

        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(appstate.clone()))
                .wrap(crate::auth::session_middleware(Key::from(&[0u8; 64])))
                .service(super::add_comment),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(format!("/post/{}", post.id).as_str())
            .set_form(CommentForm {
                body: String::from("Anonymous comment"),
            })
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/login");
        assert_eq!(
            Comment::find_by_post(&mut appstate.pool.get().unwrap(), post.id).len(),
            0
        );

        let _ = std::fs::remove_file(&db);
    }

    #[actix_rt::test]
    async fn test_comment_links_principal_and_post() {
        let (appstate, db) = test_state();
        let admin = seed_user(&appstate, "admin@example.com", "Admin");
        let post = seed_post(&appstate, &admin, "Test title");

        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(appstate.clone()))
                .wrap(crate::auth::session_middleware(Key::from(&[0u8; 64])))
                .service(register)
                .service(super::add_comment),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(register_form("reader@example.com", "Reader"))
            .to_request();
        let cookie = session_cookie(&call_service(&app, req).await);

        let req = test::TestRequest::post()
            .uri(format!("/post/{}", post.id).as_str())
            .cookie(cookie)
            .set_form(CommentForm {
                body: String::from("Nice writeup"),
            })
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), format!("/post/{}", post.id));

        let reader = User::find_by_email(
            &mut appstate.pool.get().unwrap(),
            &String::from("reader@example.com"),
        )
        .unwrap();
        let comments = Comment::find_by_post(&mut appstate.pool.get().unwrap(), post.id);
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].0.author_id, reader.id);
        assert_eq!(comments[0].0.post_id, post.id);
        assert_eq!(comments[0].0.body, "Nice writeup");

        let _ = std::fs::remove_file(&db);
    }

    #[actix_rt::test]
    async fn test_new_post_requires_admin() {
        let (appstate, db) = test_state();

        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(appstate.clone()))
                .wrap(crate::auth::session_middleware(Key::from(&[0u8; 64])))
                .service(register)
                .service(super::new_post_page)
                .service(super::create_post),
        )
        .await;

        //Anonymous visitors are turned away outright
        let req = test::TestRequest::get().uri("/new-post").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        //First registration claims the admin flag, the second does not
        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(register_form("admin@example.com", "Admin"))
            .to_request();
        call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(register_form("reader@example.com", "Reader"))
            .to_request();
        let reader_cookie = session_cookie(&call_service(&app, req).await);

        let req = test::TestRequest::post()
            .uri("/new-post")
            .cookie(reader_cookie)
            .set_form(post_form("Sneaky post"))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(Post::all_with_authors(&mut appstate.pool.get().unwrap()).is_empty());

        let _ = std::fs::remove_file(&db);
    }

    #[actix_rt::test]
    async fn test_create_post_round_trip() {
        let (appstate, db) = test_state();

        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(appstate.clone()))
                .wrap(crate::auth::session_middleware(Key::from(&[0u8; 64])))
                .service(register)
                .service(super::create_post),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(register_form("admin@example.com", "Admin"))
            .to_request();
        let cookie = session_cookie(&call_service(&app, req).await);

        let req = test::TestRequest::post()
            .uri("/new-post")
            .cookie(cookie)
            .set_form(post_form("T"))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/");

        let admin = User::find_by_email(
            &mut appstate.pool.get().unwrap(),
            &String::from("admin@example.com"),
        )
        .unwrap();
        let posts = Post::all_with_authors(&mut appstate.pool.get().unwrap());
        assert_eq!(posts.len(), 1);
        let post = &posts[0].0;
        assert_eq!(post.title, "T");
        assert_eq!(post.subtitle, "S");
        assert_eq!(post.img_url, "http://x/y.png");
        assert_eq!(post.body, "B");
        assert_eq!(post.author_id, admin.id);
        assert!(!post.date.is_empty());

        let _ = std::fs::remove_file(&db);
    }

    #[actix_rt::test]
    async fn test_create_post_duplicate_title_rerenders() {
        let (appstate, db) = test_state();

        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(appstate.clone()))
                .wrap(crate::auth::session_middleware(Key::from(&[0u8; 64])))
                .service(register)
                .service(super::create_post),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(register_form("admin@example.com", "Admin"))
            .to_request();
        let cookie = session_cookie(&call_service(&app, req).await);

        let admin = User::find_by_email(
            &mut appstate.pool.get().unwrap(),
            &String::from("admin@example.com"),
        )
        .unwrap();
        seed_post(&appstate, &admin, "Taken title");

        let req = test::TestRequest::post()
            .uri("/new-post")
            .cookie(cookie)
            .set_form(post_form("Taken title"))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            Post::all_with_authors(&mut appstate.pool.get().unwrap()).len(),
            1
        );

        let _ = std::fs::remove_file(&db);
    }

    #[actix_rt::test]
    async fn test_edit_post_changes_only_content_fields() {
        let (appstate, db) = test_state();

        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(appstate.clone()))
                .wrap(crate::auth::session_middleware(Key::from(&[0u8; 64])))
                .service(register)
                .service(super::edit_post),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(register_form("admin@example.com", "Admin"))
            .to_request();
        let cookie = session_cookie(&call_service(&app, req).await);

        let admin = User::find_by_email(
            &mut appstate.pool.get().unwrap(),
            &String::from("admin@example.com"),
        )
        .unwrap();
        let post = seed_post(&appstate, &admin, "Old title");

        let req = test::TestRequest::post()
            .uri(format!("/edit-post/{}", post.id).as_str())
            .cookie(cookie)
            .set_form(CreatePostForm {
                title: String::from("New title"),
                subtitle: String::from("New subtitle"),
                img_url: String::from("http://example.com/new.png"),
                body: String::from("New body"),
            })
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), format!("/post/{}", post.id));

        let edited = Post::find_by_id(&mut appstate.pool.get().unwrap(), post.id).unwrap();
        assert_eq!(edited.title, "New title");
        assert_eq!(edited.subtitle, "New subtitle");
        assert_eq!(edited.img_url, "http://example.com/new.png");
        assert_eq!(edited.body, "New body");
        assert_eq!(edited.author_id, post.author_id);
        assert_eq!(edited.date, post.date);

        let _ = std::fs::remove_file(&db);
    }

    #[actix_rt::test]
    async fn test_edit_unknown_post_is_not_found() {
        let (appstate, db) = test_state();

        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(appstate.clone()))
                .wrap(crate::auth::session_middleware(Key::from(&[0u8; 64])))
                .service(register)
                .service(super::edit_post_page),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(register_form("admin@example.com", "Admin"))
            .to_request();
        let cookie = session_cookie(&call_service(&app, req).await);

        let req = test::TestRequest::get()
            .uri("/edit-post/999")
            .cookie(cookie)
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let _ = std::fs::remove_file(&db);
    }

    #[actix_rt::test]
    async fn test_delete_post_removes_its_comments() {
        let (appstate, db) = test_state();

        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(appstate.clone()))
                .wrap(crate::auth::session_middleware(Key::from(&[0u8; 64])))
                .service(register)
                .service(super::delete_post),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(register_form("admin@example.com", "Admin"))
            .to_request();
        let cookie = session_cookie(&call_service(&app, req).await);

        let admin = User::find_by_email(
            &mut appstate.pool.get().unwrap(),
            &String::from("admin@example.com"),
        )
        .unwrap();
        let post = seed_post(&appstate, &admin, "Test title");
        Comment::new(
            &mut appstate.pool.get().unwrap(),
            post.id,
            admin.id,
            &String::from("First comment"),
        )
        .unwrap();
        Comment::new(
            &mut appstate.pool.get().unwrap(),
            post.id,
            admin.id,
            &String::from("Second comment"),
        )
        .unwrap();

        let req = test::TestRequest::get()
            .uri(format!("/delete/{}", post.id).as_str())
            .cookie(cookie)
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/");
        assert!(Post::find_by_id(&mut appstate.pool.get().unwrap(), post.id).is_none());
        assert_eq!(
            Comment::find_by_post(&mut appstate.pool.get().unwrap(), post.id).len(),
            0
        );

        let _ = std::fs::remove_file(&db);
    }

    #[actix_rt::test]
    async fn test_delete_requires_admin() {
        let (appstate, db) = test_state();
        let admin = seed_user(&appstate, "admin@example.com", "Admin");
        let post = seed_post(&appstate, &admin, "Test title");

        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(appstate.clone()))
                .wrap(crate::auth::session_middleware(Key::from(&[0u8; 64])))
                .service(register)
                .service(super::delete_post),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(register_form("reader@example.com", "Reader"))
            .to_request();
        let cookie = session_cookie(&call_service(&app, req).await);

        let req = test::TestRequest::get()
            .uri(format!("/delete/{}", post.id).as_str())
            .cookie(cookie)
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(Post::find_by_id(&mut appstate.pool.get().unwrap(), post.id).is_some());

        let _ = std::fs::remove_file(&db);
    }
}
