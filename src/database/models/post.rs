use diesel::prelude::*;

use crate::database::models::user::User;
use crate::schema::{self, posts, users};

#[derive(Debug, Queryable, Clone)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub img_url: String,
    ///Creation date as a display string, immutable after creation
    pub date: String,
    pub author_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = posts)]
struct PostInsert {
    title: String,
    subtitle: String,
    body: String,
    img_url: String,
    date: String,
    author_id: i32,
}

impl Post {
    /// Pushes a new post row into the database and returns it. The title
    /// is UNIQUE at the storage layer, so a duplicate surfaces as a
    /// `DatabaseError(UniqueViolation, _)`.
    pub fn create(
        conn: &mut SqliteConnection,
        author: &User,
        title_in: &String,
        subtitle_in: &String,
        img_url_in: &String,
        body_in: &String,
        date_in: &String,
    ) -> QueryResult<Post> {
        let to_insert = PostInsert {
            title: title_in.clone(),
            subtitle: subtitle_in.clone(),
            body: body_in.clone(),
            img_url: img_url_in.clone(),
            date: date_in.clone(),
            author_id: author.id,
        };

        diesel::insert_into(schema::posts::table)
            .values(&to_insert)
            .get_result(conn)
    }

    /// Returns every post with its author, in creation order (ascending
    /// id).
    pub fn all_with_authors(conn: &mut SqliteConnection) -> Vec<(Post, User)> {
        use crate::schema::posts::dsl::*;

        match posts
            .inner_join(users::table)
            .order(id.asc())
            .load::<(Post, User)>(conn)
        {
            Ok(ret) => ret,
            Err(_) => Vec::new(),
        }
    }

    /** Returns the post with the id specified */
    pub fn find_by_id(conn: &mut SqliteConnection, the_id: i32) -> Option<Post> {
        use crate::schema::posts::dsl::*;

        match posts.filter(id.eq(the_id)).first::<Post>(conn) {
            Ok(ret) => Some(ret),
            Err(_) => None,
        }
    }

    /** Returns the post with the id specified, together with its author */
    pub fn find_with_author(conn: &mut SqliteConnection, the_id: i32) -> Option<(Post, User)> {
        use crate::schema::posts::dsl::*;

        match posts
            .inner_join(users::table)
            .filter(id.eq(the_id))
            .first::<(Post, User)>(conn)
        {
            Ok(ret) => Some(ret),
            Err(_) => None,
        }
    }

    /// Rewrites the editable columns in place. The author and the
    /// creation date are not touched.
    pub fn edit(
        &mut self,
        conn: &mut SqliteConnection,
        title_in: &String,
        subtitle_in: &String,
        img_url_in: &String,
        body_in: &String,
    ) -> QueryResult<()> {
        use self::schema::posts::dsl::*;

        self.title = title_in.clone();
        self.subtitle = subtitle_in.clone();
        self.img_url = img_url_in.clone();
        self.body = body_in.clone();

        diesel::update(posts.filter(id.eq(self.id)))
            .set((
                title.eq(&self.title),
                subtitle.eq(&self.subtitle),
                img_url.eq(&self.img_url),
                body.eq(&self.body),
            ))
            .execute(conn)?;

        Ok(())
    }

    /// Deletes the post together with every comment referencing it, in
    /// one transaction, so no orphan comment rows remain.
    pub fn delete_cascading(conn: &mut SqliteConnection, the_id: i32) -> QueryResult<()> {
        conn.transaction(|conn| {
            diesel::delete(schema::comments::table.filter(schema::comments::post_id.eq(the_id)))
                .execute(conn)?;
            diesel::delete(schema::posts::table.filter(schema::posts::id.eq(the_id)))
                .execute(conn)?;

            Ok(())
        })
    }
}
