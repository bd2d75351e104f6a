use diesel::prelude::*;

use crate::schema::{self, users};

#[derive(Debug, Queryable, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    ///Salted hash of the password, never the plaintext
    pub password: String,
    pub name: String,
    pub is_admin: bool,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
struct UserInsert {
    email: String,
    password: String,
    name: String,
    is_admin: bool,
}

impl User {
    /// Pushes a new user row into the database and returns it.
    ///
    /// The very first account ever registered becomes the administrator.
    /// The emptiness check and the insert run in one transaction so two
    /// racing registrations cannot both claim the flag.
    ///
    /// # Example
    /// ```
    /// let result = User::new(
    ///     &mut conn,
    ///     &"someone@example.com".to_string(),
    ///     &password::hash_password("plaintext"),
    ///     &"Someone".to_string());
    /// ```
    pub fn new(
        conn: &mut SqliteConnection,
        email_in: &String,
        password_hash: &String,
        name_in: &String,
    ) -> QueryResult<User> {
        conn.transaction(|conn| {
            let existing: i64 = users::table.count().get_result(conn)?;

            let to_insert = UserInsert {
                email: email_in.clone(),
                password: password_hash.clone(),
                name: name_in.clone(),
                is_admin: existing == 0,
            };

            diesel::insert_into(schema::users::table)
                .values(&to_insert)
                .get_result(conn)
        })
    }

    /// Returns the user with the id specified, or `None` when the row is
    /// gone.
    pub fn find_by_id(conn: &mut SqliteConnection, user_id: i32) -> Option<User> {
        use crate::schema::users::dsl::*;

        match users.filter(id.eq(user_id)).first::<User>(conn) {
            Ok(ret) => Some(ret),
            Err(_) => None,
        }
    }

    /// Returns the user registered under the given email address.
    /// If no user is found, or an error occurs, a `None` option will be
    /// returned.
    ///
    /// # Example
    /// ```
    /// match User::find_by_email(&mut conn, &"someone@example.com".to_string()) {
    ///     Some(usr) => println!("{:?}", usr),
    ///     None => println!("No user found"),
    /// }
    /// ```
    pub fn find_by_email(conn: &mut SqliteConnection, email_in: &String) -> Option<User> {
        use crate::schema::users::dsl::*;

        match users.filter(email.eq(email_in)).first::<User>(conn) {
            Ok(ret) => Some(ret),
            Err(_) => None,
        }
    }
}
