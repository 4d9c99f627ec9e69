//! Middleware modules for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. The [`auth::AuthUser`] extractor validates the JWT and re-resolves the
//!    subject against the user store
//! 3. The handler executes with the resolved user as its identity
//!
//! Every rejection is an [`crate::utils::errors::AppError`], so all 401
//! responses go through the same response mapping.

pub mod auth;
