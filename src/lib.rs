//! # Rollbook API
//!
//! A small REST API built with Rust, Axum, and MongoDB that exposes
//! username/password registration, JWT-based login, and CRUD endpoints for a
//! students collection. Reads on the collection are public; every mutating
//! route sits behind a bearer token.
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture inspired by NestJS:
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (JWT, database)
//! ├── middleware/       # Auth extractor guarding admin routes
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login and registration
//! │   └── students/    # Student CRUD
//! ├── store/            # Document-store traits + MongoDB/in-memory backends
//! └── utils/            # Shared utilities (errors, JWT)
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models and DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Authentication
//!
//! Login and registration both answer with a short-lived HS256 access token
//! (`JWT_EXPIRES_IN_HOURS`, default 1 hour). Verification is stateless apart
//! from one lookup that reconfirms the token's subject still exists.
//!
//! ## Environment Variables
//!
//! ```bash
//! MONGO_URL=mongodb://localhost:27017
//! MONGO_DB=rollbook
//! JWT_SECRET=your-secure-secret-key
//! JWT_EXPIRES_IN_HOURS=1
//! PORT=3002
//! ```

pub mod config;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod utils;
pub mod validator;
