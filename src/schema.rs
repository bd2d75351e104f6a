table! {
    users (id) {
        id -> Integer,
        email -> Text,
        password -> Text,
        name -> Text,
        is_admin -> Bool,
    }
}

table! {
    posts (id) {
        id -> Integer,
        title -> Text,
        subtitle -> Text,
        body -> Text,
        img_url -> Text,
        date -> Text,
        author_id -> Integer,
    }
}

table! {
    comments (id) {
        id -> Integer,
        body -> Text,
        author_id -> Integer,
        post_id -> Integer,
    }
}

joinable!(posts -> users (author_id));
joinable!(comments -> users (author_id));
joinable!(comments -> posts (post_id));

allow_tables_to_appear_in_same_query!(
    users,
    posts,
    comments,
);
