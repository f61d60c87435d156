// Outcome mapping shared by the hotel inbound adapters.
//
// NotFound -> 404, PaymentRequired -> 402, anything else -> 400. The body is
// the plain error message.

use async_graphql::ErrorExtensions;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::hotels::use_cases::errors::ApplicationError;

fn status_of(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::NotFound => StatusCode::NOT_FOUND,
        ApplicationError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
        ApplicationError::Unexpected(_) => StatusCode::BAD_REQUEST,
    }
}

fn log_unexpected(error: &ApplicationError) {
    if let ApplicationError::Unexpected(source) = error {
        tracing::error!(error = ?source, "hotel query failed");
    }
}

pub fn error_response(error: ApplicationError) -> Response {
    log_unexpected(&error);
    (status_of(&error), error.to_string()).into_response()
}

pub fn graphql_error(error: ApplicationError) -> async_graphql::Error {
    log_unexpected(&error);
    let code = match error {
        ApplicationError::NotFound => "NOT_FOUND",
        ApplicationError::PaymentRequired => "PAYMENT_REQUIRED",
        ApplicationError::Unexpected(_) => "BAD_REQUEST",
    };
    async_graphql::Error::new(error.to_string()).extend_with(|_, extensions| {
        extensions.set("code", code);
    })
}
