use serde::{Deserialize, Serialize};
use validator::Validate;

// JWT Claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub exp: usize,
    pub iat: usize,
}

/// A user record. The stored password (plaintext, when present at all) is
/// never serialized into a response.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

// Login request structure. Fields default to empty so a missing credential
// lands in the "no user found" branch instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

// Login/registration response: the issued token plus the user record minus
// its password.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub id: String,
    pub username: String,
}
