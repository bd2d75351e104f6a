use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use dotenv::dotenv;
use std::env;

/// Tables are created on startup when absent. `AUTOINCREMENT` keeps ids
/// stable: a deleted row's id is never handed out again.
const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        name TEXT NOT NULL,
        is_admin BOOLEAN NOT NULL DEFAULT 0
    );
    CREATE TABLE IF NOT EXISTS posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL UNIQUE,
        subtitle TEXT NOT NULL,
        body TEXT NOT NULL,
        img_url TEXT NOT NULL,
        date TEXT NOT NULL,
        author_id INTEGER NOT NULL REFERENCES users(id)
    );
    CREATE TABLE IF NOT EXISTS comments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        body TEXT NOT NULL,
        author_id INTEGER NOT NULL REFERENCES users(id),
        post_id INTEGER NOT NULL REFERENCES posts(id)
    );
";

#[derive(Debug)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds a connection pool over the SQLite database and makes sure the
/// schema exists.
///
/// The url is resolved from the argument, then the `DATABASE_URL`
/// environment variable, then the `blog.db` default.
///
/// # Example
/// ```
/// let pool = build_pool(None);
/// let conn = pool.get().unwrap();
/// ```
pub fn build_pool(database_url: Option<&str>) -> Pool<ConnectionManager<SqliteConnection>> {
    dotenv().ok();

    let url = match database_url {
        Some(url) => url.to_string(),
        None => env::var("DATABASE_URL").unwrap_or_else(|_| String::from("blog.db")),
    };

    let manager = ConnectionManager::<SqliteConnection>::new(&url);
    let pool = Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions))
        .build(manager)
        .unwrap_or_else(|e| panic!("Error connecting to {}: {}", url, e));

    let mut conn = pool
        .get()
        .expect("Error acquiring a connection for schema setup");
    init_schema(&mut conn).expect("Error creating the database schema");

    pool
}

pub fn init_schema(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.batch_execute(SCHEMA)
}

/// Path for a throwaway database, unique per call so tests do not step
/// on each other.
#[cfg(test)]
pub fn test_db_path() -> String {
    use rand::distributions::{Alphanumeric, DistString};

    let name = format!(
        "inkpost_test_{}.db",
        Alphanumeric.sample_string(&mut rand::thread_rng(), 12)
    );
    std::env::temp_dir().join(name).to_string_lossy().to_string()
}
