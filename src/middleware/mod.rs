mod auth;
mod extract;

pub use auth::AuthUser;
pub use extract::{AppJson, AppQuery};
