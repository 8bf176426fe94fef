//! Request/response contract of the calculate endpoint.
//!
//! The transport owns sockets and routing; it hands the method and raw body to
//! [`CalculateService::handle`] and writes back the returned status and body.

use crate::calculator::Evaluator;
use crate::error::EvalError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub const CALCULATE_PATH: &str = "/api/v1/calculate";
pub const DEFAULT_PORT: u16 = 8000;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_METHOD_NOT_ALLOWED: u16 = 405;
pub const STATUS_UNPROCESSABLE_ENTITY: u16 = 422;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

const METHOD_NOT_ALLOWED: &str = "method not allowed";
const INTERNAL_SERVER_ERROR: &str = "internal server error";
const INVALID_REQUEST_BODY: &str = "Invalid request body";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CalculateRequest {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SuccessResponse {
    pub result: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: String,
}

impl ServiceResponse {
    fn plain(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    fn json<T: Serialize>(status: u16, payload: &T) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self { status, body },
            Err(err) => {
                warn!("Failed to serialize response: {}", err);
                Self::plain(STATUS_INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
            }
        }
    }

    /// Maps an evaluation outcome to its envelope. `serde_json` writes a
    /// non-finite `f64` as `null`, so such a result is reported as a 500
    /// rather than a success.
    pub fn from_result(result: Result<f64, EvalError>) -> Self {
        match result {
            Ok(result) if result.is_finite() => Self::json(STATUS_OK, &SuccessResponse { result }),
            Ok(result) => {
                warn!("Refusing to serialize non-finite result {}", result);
                Self::plain(STATUS_INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
            }
            Err(err) => Self::error(status_for(&err), err.to_string()),
        }
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self::json(
            status,
            &ErrorResponse {
                error: message.into(),
            },
        )
    }
}

/// Status code the transport should use for an evaluation failure. Every
/// evaluation error is a client error.
pub fn status_for(error: &EvalError) -> u16 {
    match error {
        EvalError::Syntax | EvalError::DivisionByZero | EvalError::InvalidExpression => {
            STATUS_UNPROCESSABLE_ENTITY
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CalculateService {
    evaluator: Evaluator,
}

impl CalculateService {
    pub fn new(evaluator: Evaluator) -> Self {
        Self { evaluator }
    }

    pub fn handle(&self, method: &str, body: &[u8]) -> ServiceResponse {
        if method != "POST" {
            debug!("Rejected {} request", method);
            return ServiceResponse::plain(STATUS_METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED);
        }

        let request: CalculateRequest = match serde_json::from_slice(body) {
            Ok(request) => request,
            Err(err) => {
                debug!("Invalid request body: {}", err);
                return ServiceResponse::error(STATUS_BAD_REQUEST, INVALID_REQUEST_BODY);
            }
        };

        ServiceResponse::from_result(self.evaluator.evaluate(&request.expression))
    }
}
