use thiserror::Error;
use uuid::Uuid;

use crate::model::entity::RequestStatus;

pub type RequestResult<T> = Result<T, RequestException>;

#[derive(Error, Debug)]
pub enum RequestException {
    #[error("There is no request with id: {id}.")]
    NoSuchRequest { id: Uuid },

    #[error("There is no resource with id: {id}.")]
    NoSuchResource { id: Uuid },

    #[error("quantity must be greater than 0, got {value}.")]
    NonPositiveQuantity { value: i32 },

    #[error("Cannot change request status from {from} to {to}.")]
    InvalidTransition {
        from: RequestStatus,
        to: RequestStatus,
    },

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for RequestException {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalError { source: e }
    }
}
