use std::borrow::Cow;

/// Failures of roster operations.
///
/// With the `server` feature each variant maps onto a fixed HTTP status and JSON shape; storage
/// faults are logged and never leaked to the caller.
#[hhub_derive::hhub_error]
pub enum RosterError {
    /// An id did not resolve ("Hero not found", "Power not found", "HeroPower not found").
    #[error("{message}{}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A field failed its invariant; nothing was written.
    #[error("Validation failed{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The request itself is unusable, e.g. a body sent without a JSON content type.
    #[error("Bad request{}: {message}", format_context(.context))]
    BadRequest { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The store rejected a read or write; the surrounding transaction was rolled back.
    #[error("Failed to persist changes{}: {source}", format_context(.context))]
    Persistence { source: sea_orm::DbErr, context: Option<Cow<'static, str>> },

    /// The slice or its shared state is misconfigured.
    #[error("Internal roster error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl RosterError {
    pub(crate) fn not_found(message: &'static str) -> Self {
        Self::NotFound { message: message.into(), context: None }
    }

    pub(crate) fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation { message: message.into(), context: None }
    }
}

#[cfg(feature = "server")]
mod response {
    use super::RosterError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use hhub_kernel::server::error::{error_response, errors_response};
    use tracing::{debug, error};

    /// Message returned for every storage fault.
    const PERSISTENCE_FAILURE: &str = "Failed to persist changes";

    impl IntoResponse for RosterError {
        fn into_response(self) -> Response {
            match self {
                Self::NotFound { message, context } => {
                    debug!(%message, ?context, "Roster lookup missed");
                    error_response(StatusCode::NOT_FOUND, message)
                }
                Self::Validation { message, context } => {
                    debug!(%message, ?context, "Roster validation rejected request");
                    errors_response(StatusCode::BAD_REQUEST, [message])
                }
                Self::BadRequest { message, .. } => {
                    error_response(StatusCode::BAD_REQUEST, message)
                }
                Self::Persistence { source, context } => {
                    error!(error = %source, ?context, "Roster persistence failure");
                    errors_response(StatusCode::INTERNAL_SERVER_ERROR, [PERSISTENCE_FAILURE])
                }
                err @ Self::Internal { .. } => {
                    error!(error = %err, kind = err.kind(), "Roster internal failure");
                    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                }
            }
        }
    }
}
