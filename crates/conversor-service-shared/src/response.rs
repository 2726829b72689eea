//! HTTP mapping for conversion outcomes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use conversor_lib::{ConversionFailure, Distance};

/// Terminal outcome of one conversion request.
///
/// A request always ends in exactly one of these two shapes: `200 OK` with
/// the converted distance, or `400 Bad Request` with the failure payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertOutcome {
    /// Validation accepted the input; body is `{"miles": .., "km": ..}`.
    Converted(Distance),
    /// Validation rejected the input; body is `{"message": ".."}`.
    Rejected(ConversionFailure),
}

impl From<Result<Distance, ConversionFailure>> for ConvertOutcome {
    fn from(result: Result<Distance, ConversionFailure>) -> Self {
        match result {
            Ok(distance) => Self::Converted(distance),
            Err(failure) => Self::Rejected(failure),
        }
    }
}

impl IntoResponse for ConvertOutcome {
    fn into_response(self) -> Response {
        match self {
            Self::Converted(distance) => (StatusCode::OK, Json(distance)).into_response(),
            Self::Rejected(failure) => (StatusCode::BAD_REQUEST, Json(failure)).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conversor_lib::convert;

    #[test]
    fn success_maps_to_200() {
        let outcome = ConvertOutcome::from(convert(Some("10")));
        let response = outcome.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn failure_maps_to_400() {
        let outcome = ConvertOutcome::from(convert(Some("abc")));
        let response = outcome.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn outcome_from_result_preserves_payload() {
        match ConvertOutcome::from(convert(Some("2"))) {
            ConvertOutcome::Converted(distance) => {
                assert_eq!(distance.miles(), 2.0);
            }
            ConvertOutcome::Rejected(failure) => panic!("unexpected rejection: {failure}"),
        }
    }
}
