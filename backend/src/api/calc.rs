//! Arithmetic endpoints: validation, dispatch, and response shaping.
//!
//! ```text
//! GET /addition?n1=2&n2=3   -> {"statusCode":200,"result":5.0}
//! GET /division?n1=1&n2=0   -> {"statusCode":400,"error":"Division by zero is not allowed"}
//! GET /square-root?n1=16    -> {"statusCode":200,"result":4.0}
//! ```
//!
//! Each request is single-shot: validate, compute or fail, respond. A
//! failure has no effect on subsequent requests.

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::domain::calc::{CalcError, Operation, evaluate};

/// Raw query operands.
///
/// Captured as optional strings so that presence, emptiness, and
/// parseability are validated here with the contract's own message rather
/// than by the framework's typed extractor.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Operands {
    /// First operand; required by every operation.
    pub n1: Option<String>,
    /// Second operand; required except for square-root, which ignores it.
    pub n2: Option<String>,
}

/// Successful arithmetic response.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalcSuccess {
    /// Always 200, mirrored into the HTTP status.
    pub status_code: u16,
    /// Computed value.
    pub result: f64,
}

/// Failed arithmetic response.
///
/// Success and failure are distinct types, so exactly one of
/// `result`/`error` ever appears on the wire.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalcFailure {
    /// Always 400, mirrored into the HTTP status.
    pub status_code: u16,
    /// Human-readable reason the request was rejected.
    pub error: String,
}

fn parse_required(raw: Option<&str>) -> Result<f64, CalcError> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
        .ok_or(CalcError::InvalidInput)
}

/// Validate the raw operands for `op`.
///
/// `n1` is always required; `n2` only for binary operations. Square-root
/// accepts and ignores a surplus `n2`.
fn parse_operands(op: Operation, raw: &Operands) -> Result<(f64, Option<f64>), CalcError> {
    let n1 = parse_required(raw.n1.as_deref())?;
    if !op.is_binary() {
        return Ok((n1, None));
    }
    let n2 = parse_required(raw.n2.as_deref())?;
    Ok((n1, Some(n2)))
}

fn respond(op: Operation, raw: &Operands) -> HttpResponse {
    let service = format!("{op}-service");
    let outcome = parse_operands(op, raw).and_then(|(n1, n2)| {
        info!(service = %service, n1, n2, "received parameters");
        evaluate(op, n1, n2)
    });

    match outcome {
        Ok(result) => HttpResponse::Ok().json(CalcSuccess {
            status_code: 200,
            result,
        }),
        Err(err) => {
            error!(service = %service, error = %err, "arithmetic request rejected");
            HttpResponse::BadRequest().json(CalcFailure {
                status_code: 400,
                error: err.to_string(),
            })
        }
    }
}

/// Add `n1` and `n2`.
#[utoipa::path(
    get,
    path = "/addition",
    params(Operands),
    responses(
        (status = 200, description = "Sum of the operands", body = CalcSuccess),
        (status = 400, description = "Invalid input", body = CalcFailure)
    ),
    tags = ["calc"],
    operation_id = "addition"
)]
#[get("/addition")]
pub async fn addition(query: web::Query<Operands>) -> HttpResponse {
    respond(Operation::Addition, &query)
}

/// Subtract `n2` from `n1`.
#[utoipa::path(
    get,
    path = "/subtraction",
    params(Operands),
    responses(
        (status = 200, description = "Difference of the operands", body = CalcSuccess),
        (status = 400, description = "Invalid input", body = CalcFailure)
    ),
    tags = ["calc"],
    operation_id = "subtraction"
)]
#[get("/subtraction")]
pub async fn subtraction(query: web::Query<Operands>) -> HttpResponse {
    respond(Operation::Subtraction, &query)
}

/// Multiply `n1` by `n2`.
#[utoipa::path(
    get,
    path = "/multiplication",
    params(Operands),
    responses(
        (status = 200, description = "Product of the operands", body = CalcSuccess),
        (status = 400, description = "Invalid input", body = CalcFailure)
    ),
    tags = ["calc"],
    operation_id = "multiplication"
)]
#[get("/multiplication")]
pub async fn multiplication(query: web::Query<Operands>) -> HttpResponse {
    respond(Operation::Multiplication, &query)
}

/// Divide `n1` by `n2`; a zero divisor is rejected.
#[utoipa::path(
    get,
    path = "/division",
    params(Operands),
    responses(
        (status = 200, description = "Quotient of the operands", body = CalcSuccess),
        (status = 400, description = "Invalid input or division by zero", body = CalcFailure)
    ),
    tags = ["calc"],
    operation_id = "division"
)]
#[get("/division")]
pub async fn division(query: web::Query<Operands>) -> HttpResponse {
    respond(Operation::Division, &query)
}

/// Raise `n1` to the power `n2`.
#[utoipa::path(
    get,
    path = "/exponentiation",
    params(Operands),
    responses(
        (status = 200, description = "Power of the operands", body = CalcSuccess),
        (status = 400, description = "Invalid input", body = CalcFailure)
    ),
    tags = ["calc"],
    operation_id = "exponentiation"
)]
#[get("/exponentiation")]
pub async fn exponentiation(query: web::Query<Operands>) -> HttpResponse {
    respond(Operation::Exponentiation, &query)
}

/// Non-negative square root of `n1`; negative input is rejected.
#[utoipa::path(
    get,
    path = "/square-root",
    params(Operands),
    responses(
        (status = 200, description = "Square root of the operand", body = CalcSuccess),
        (status = 400, description = "Invalid input or negative operand", body = CalcFailure)
    ),
    tags = ["calc"],
    operation_id = "squareRoot"
)]
#[get("/square-root")]
pub async fn square_root(query: web::Query<Operands>) -> HttpResponse {
    respond(Operation::SquareRoot, &query)
}

/// Remainder of `n1 / n2`; a zero divisor is rejected.
#[utoipa::path(
    get,
    path = "/modulo",
    params(Operands),
    responses(
        (status = 200, description = "Remainder of the operands", body = CalcSuccess),
        (status = 400, description = "Invalid input or modulo by zero", body = CalcFailure)
    ),
    tags = ["calc"],
    operation_id = "modulo"
)]
#[get("/modulo")]
pub async fn modulo(query: web::Query<Operands>) -> HttpResponse {
    respond(Operation::Modulo, &query)
}
