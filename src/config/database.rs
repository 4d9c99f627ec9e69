//! MongoDB client and database handle initialization.
//!
//! The connection string is read from the `MONGO_URL` environment variable
//! (default `mongodb://localhost:27017`). If the connection string names a
//! default database it is used; otherwise the database name comes from
//! `MONGO_DB` (default `rollbook`).
//!
//! The returned [`Database`] handle is cheaply cloneable and is created once
//! during startup, then shared through the application state. The driver
//! manages its own connection pool; handles can be used concurrently from
//! any number of request-handling tasks.

use mongodb::{Client, Database};
use std::env;

/// Initializes the MongoDB database handle.
///
/// # Panics
///
/// Panics if `MONGO_URL` cannot be parsed as a MongoDB connection string.
/// Connections themselves are established lazily by the driver, so an
/// unreachable server surfaces as an error on first use rather than here.
pub async fn init_database() -> Database {
    let mongo_url =
        env::var("MONGO_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

    let client = Client::with_uri_str(&mongo_url)
        .await
        .expect("Failed to create MongoDB client");

    match client.default_database() {
        Some(db) => db,
        None => {
            let name = env::var("MONGO_DB").unwrap_or_else(|_| "rollbook".to_string());
            client.database(&name)
        }
    }
}
