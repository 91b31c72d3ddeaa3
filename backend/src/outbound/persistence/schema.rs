//! Diesel table definition for the PostgreSQL schema.
//!
//! Must match the database migrations exactly; migrations themselves
//! are owned by the deployment, not by this crate. Regenerate with
//! `diesel print-schema` when the schema changes.

diesel::table! {
    /// User records.
    ///
    /// The `id` column is the primary key, generated by this adapter
    /// as a UUID v4 at insert time. `email` uniqueness, if wanted, is
    /// a schema constraint and is not assumed here.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// The person's name.
        name -> Varchar,
        /// The person's email address.
        email -> Varchar,
    }
}
