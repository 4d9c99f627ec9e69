use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in_hours: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            expires_in_hours: env::var("JWT_EXPIRES_IN_HOURS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
        }
    }

    /// Token validity window in seconds.
    pub fn expiry_seconds(&self) -> i64 {
        self.expires_in_hours * 3600
    }
}
