pub mod auth;
pub mod students;

pub use self::auth::model::User;
pub use self::students::model::Student;
