use diesel::prelude::*;

use crate::database::models::user::User;
use crate::schema::{self, comments, users};

#[derive(Debug, Queryable, Clone)]
pub struct Comment {
    pub id: i32,
    pub body: String,
    pub author_id: i32,
    pub post_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
struct CommentInsert {
    body: String,
    author_id: i32,
    post_id: i32,
}

impl Comment {
    /** Creates a comment linking the given user and post */
    pub fn new(
        conn: &mut SqliteConnection,
        post_id_in: i32,
        author_id_in: i32,
        comment_body: &String,
    ) -> QueryResult<Comment> {
        let record = CommentInsert {
            body: comment_body.clone(),
            author_id: author_id_in,
            post_id: post_id_in,
        };

        diesel::insert_into(schema::comments::table)
            .values(&record)
            .get_result(conn)
    }

    /** Returns all comments posted on a post with their authors, oldest first */
    pub fn find_by_post(conn: &mut SqliteConnection, post_id_in: i32) -> Vec<(Comment, User)> {
        use schema::comments::dsl::*;

        match comments
            .inner_join(users::table)
            .filter(post_id.eq(post_id_in))
            .order(id.asc())
            .load::<(Comment, User)>(conn)
        {
            Ok(ret) => ret,
            Err(_) => Vec::new(),
        }
    }
}
