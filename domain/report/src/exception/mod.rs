use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportException>;

#[derive(Error, Debug)]
pub enum ReportException {
    #[error("days must be greater than 0, got {value}.")]
    InvalidWindow { value: i64 },

    #[error("Internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for ReportException {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalError { source: e }
    }
}
