use thiserror::Error;
use uuid::Uuid;

pub type AccountResult<T> = Result<T, AccountException>;

#[derive(Error, Debug)]
pub enum AccountException {
    #[error("Email or username already exists")]
    DuplicateAccount,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },

    #[error("Password must be at least {min} characters long")]
    WeakPassword { min: usize },

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("There is no user with id: {id}")]
    NoSuchUser { id: Uuid },

    #[error("Internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AccountException {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalError { source: e }
    }
}
