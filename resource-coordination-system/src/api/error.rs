use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use domain_account::exception::AccountException;
use domain_ledger::exception::LedgerException;
use domain_notice::exception::NoticeException;
use domain_report::exception::ReportException;
use domain_request::exception::RequestException;
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Every failure answered by the HTTP surface. The body is always `{"message": ...}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    /// Duplicate unique values, answered with 400.
    #[error("{0}")]
    Duplicate(String),
    /// A change not allowed from the current state, answered with 409.
    #[error("{0}")]
    Conflict(String),
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn unauthenticated() -> Self {
        ApiError::Unauthorized("Not authenticated".to_string())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Duplicate(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(e) = self {
            tracing::error!("{e:?}");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.to_string(),
        })
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Internal(e)
    }
}

impl From<LedgerException> for ApiError {
    fn from(e: LedgerException) -> Self {
        match e {
            LedgerException::NoSuchResource { .. } | LedgerException::NoSuchDistributionPlan { .. } => {
                ApiError::NotFound(e.to_string())
            }
            LedgerException::InternalError { source } => ApiError::Internal(source),
            e => ApiError::Validation(e.to_string()),
        }
    }
}

impl From<RequestException> for ApiError {
    fn from(e: RequestException) -> Self {
        match e {
            RequestException::NoSuchRequest { .. } | RequestException::NoSuchResource { .. } => {
                ApiError::NotFound(e.to_string())
            }
            RequestException::NonPositiveQuantity { .. } => ApiError::Validation(e.to_string()),
            RequestException::InvalidTransition { .. } => ApiError::Conflict(e.to_string()),
            RequestException::Unauthenticated => ApiError::unauthenticated(),
            RequestException::InternalError { source } => ApiError::Internal(source),
        }
    }
}

impl From<NoticeException> for ApiError {
    fn from(e: NoticeException) -> Self {
        match e {
            NoticeException::NoSuchAlert { .. }
            | NoticeException::NoSuchNotification { .. }
            | NoticeException::NoSuchResource { .. } => ApiError::NotFound(e.to_string()),
            NoticeException::EmptyMessage | NoticeException::InvalidWindow { .. } => {
                ApiError::Validation(e.to_string())
            }
            NoticeException::Unauthenticated => ApiError::unauthenticated(),
            NoticeException::InternalError { source } => ApiError::Internal(source),
        }
    }
}

impl From<AccountException> for ApiError {
    fn from(e: AccountException) -> Self {
        match e {
            AccountException::DuplicateAccount => ApiError::Duplicate(e.to_string()),
            AccountException::InvalidCredentials | AccountException::Unauthenticated => {
                ApiError::Unauthorized(e.to_string())
            }
            AccountException::NoSuchUser { .. } => ApiError::NotFound(e.to_string()),
            AccountException::InvalidEmail { .. }
            | AccountException::WeakPassword { .. }
            | AccountException::EmptyField { .. } => ApiError::Validation(e.to_string()),
            AccountException::InternalError { source } => ApiError::Internal(source),
        }
    }
}

impl From<ReportException> for ApiError {
    fn from(e: ReportException) -> Self {
        match e {
            ReportException::InvalidWindow { .. } => ApiError::Validation(e.to_string()),
            ReportException::InternalError { source } => ApiError::Internal(source),
        }
    }
}
