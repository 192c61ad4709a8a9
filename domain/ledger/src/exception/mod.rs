use thiserror::Error;
use uuid::Uuid;

pub type LedgerResult<T> = Result<T, LedgerException>;

#[derive(Error, Debug)]
pub enum LedgerException {
    #[error("There is no resource with id: {id}.")]
    NoSuchResource { id: Uuid },

    #[error("There is no distribution plan with id: {id}.")]
    NoSuchDistributionPlan { id: Uuid },

    #[error("{field} must not be empty.")]
    EmptyField { field: &'static str },

    #[error("{field} must be greater than or equal to 0, got {value}.")]
    Negative { field: &'static str, value: i32 },

    #[error("quantity must be greater than 0, got {value}.")]
    NonPositiveQuantity { value: i32 },

    #[error("days must be greater than 0, got {value}.")]
    InvalidWindow { value: i64 },

    #[error("fromCity and toCity must differ, both are {city}.")]
    SameCity { city: String },

    #[error("Internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for LedgerException {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalError { source: e }
    }
}

impl LedgerException {
    /// Whether the exception is caused by the caller's input rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyField { .. }
                | Self::Negative { .. }
                | Self::NonPositiveQuantity { .. }
                | Self::InvalidWindow { .. }
                | Self::SameCity { .. }
        )
    }
}
