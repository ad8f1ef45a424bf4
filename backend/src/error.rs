use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use shared::ErrorResponse;
use thiserror::Error;

/// Everything that can go wrong while serving a reformulation request.
///
/// Rate-limit and billing failures keep their own status codes because they
/// require different user action (wait vs. add credits); every other upstream
/// problem collapses into a 500.
#[derive(Debug, Error)]
pub enum ReformulateError {
    #[error("No sentence provided")]
    EmptySentence,
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,
    #[error("Payment required. Please add credits to your workspace.")]
    PaymentRequired,
    #[error("AI gateway error")]
    Upstream(u16),
    #[error("AI gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("AI gateway returned no completion choices")]
    EmptyCompletion,
}

impl ResponseError for ReformulateError {
    fn status_code(&self) -> StatusCode {
        match self {
            ReformulateError::EmptySentence => StatusCode::BAD_REQUEST,
            ReformulateError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ReformulateError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
            ReformulateError::Upstream(_)
            | ReformulateError::Transport(_)
            | ReformulateError::EmptyCompletion => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_the_wire_contract() {
        assert_eq!(
            ReformulateError::EmptySentence.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ReformulateError::RateLimited.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ReformulateError::PaymentRequired.status_code(),
            StatusCode::PAYMENT_REQUIRED
        );
        assert_eq!(
            ReformulateError::Upstream(503).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ReformulateError::EmptyCompletion.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_are_the_user_facing_ones() {
        assert_eq!(
            ReformulateError::EmptySentence.to_string(),
            "No sentence provided"
        );
        assert_eq!(
            ReformulateError::RateLimited.to_string(),
            "Rate limit exceeded. Please try again later."
        );
        assert_eq!(
            ReformulateError::PaymentRequired.to_string(),
            "Payment required. Please add credits to your workspace."
        );
        assert_eq!(
            ReformulateError::Upstream(418).to_string(),
            "AI gateway error"
        );
    }
}
