#[macro_use]
extern crate diesel;
extern crate dotenv;

pub mod schema;
pub mod database;
pub mod app;

mod auth;
mod forms;
mod routes;
mod views;

use actix_web::{middleware, web, App, HttpServer};
use app::AppState;
use routes::{pages::*, post::*, user::*};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_state = AppState::new(None);
    let session_key = auth::session_key();

    let bind_address =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("127.0.0.1:8080"));
    log::info!("Server running on http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .wrap(auth::session_middleware(session_key.clone()))
            //User routes
            .service(show_register)
            .service(register)
            .service(show_login)
            .service(login)
            .service(logout)
            //Post routes
            .service(index)
            .service(show_post)
            .service(add_comment)
            .service(new_post_page)
            .service(create_post)
            .service(edit_post_page)
            .service(edit_post)
            .service(delete_post)
            //Static pages
            .service(about)
            .service(contact)
    })
    .bind(&bind_address)?
    .run()
    .await
}
