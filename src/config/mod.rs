//! Configuration modules for the Rollbook API.
//!
//! Each submodule handles a specific aspect of configuration, loaded from
//! environment variables with sensible defaults for local development.
//!
//! # Modules
//!
//! - [`database`]: MongoDB client and database handle initialization
//! - [`jwt`]: JWT authentication configuration

pub mod database;
pub mod jwt;
