mod account;
mod password;

pub use account::AccountServiceImpl;
pub use password::{hash_password, verify_password, MIN_PASSWORD_LENGTH};
