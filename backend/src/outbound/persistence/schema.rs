//! Diesel table definitions. Keep in step with `backend/migrations`.

diesel::table! {
    /// Registered members, keyed by their login handle.
    users (user_id) {
        user_id -> Varchar,
        password -> Varchar,
        name -> Varchar,
        email -> Varchar,
        /// Set by the database on insert; drives registration ordering.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Board articles. `user_id` refers to `users` by convention only.
    articles (id) {
        id -> Int8,
        user_id -> Varchar,
        writer -> Varchar,
        title -> Varchar,
        contents -> Text,
        /// Local wall-clock minute the article was written.
        created_at -> Timestamp,
    }
}
