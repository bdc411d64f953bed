//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, this file should be regenerated or
//! manually updated to reflect those changes. The `diesel print-schema`
//! command can generate these definitions from a live database.

diesel::table! {
    /// Stored articles table.
    ///
    /// Holds the full article corpus served by the API. The `id` column is
    /// the auto-incrementing primary key; `date` defaults to the insertion
    /// time.
    articles (id) {
        /// Primary key: auto-incrementing row identifier.
        id -> Integer,
        /// Author display name.
        author -> Text,
        /// Article title.
        title -> Text,
        /// Full body text.
        content -> Text,
        /// Short teaser shown in place of the body.
        preview -> Text,
        /// Estimated reading time in minutes.
        minutes_to_read -> Integer,
        /// Insertion timestamp, stamped by the database.
        date -> Timestamp,
    }
}
