use thiserror::Error;
use uuid::Uuid;

pub type NoticeResult<T> = Result<T, NoticeException>;

#[derive(Error, Debug)]
pub enum NoticeException {
    #[error("There is no alert with id: {id}.")]
    NoSuchAlert { id: Uuid },

    #[error("There is no notification with id: {id}.")]
    NoSuchNotification { id: Uuid },

    #[error("There is no resource with id: {id}.")]
    NoSuchResource { id: Uuid },

    #[error("message must not be empty.")]
    EmptyMessage,

    #[error("days must be greater than 0, got {value}.")]
    InvalidWindow { value: i64 },

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for NoticeException {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalError { source: e }
    }
}
