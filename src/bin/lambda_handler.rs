//! AWS Lambda handler for the calculator
//!
//! Accepts assumptions as a JSON body on a Lambda Function URL and returns
//! the full report (metrics, cash-flow series, display strings, narrative
//! request). Missing fields take the calculator defaults; every field is
//! clamped to the calculator range before computing.

use aws_lambda_events::event::lambda_function_urls::LambdaFunctionUrlRequest;
use chrono::Utc;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use roi_calculator::{Assumptions, RoiReport};
use serde::Deserialize;
use serde_json::{json, Value};

/// Request body; every field is optional
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiRequest {
    #[serde(default = "default_employees")]
    pub employees: u32,

    #[serde(default = "default_salary")]
    pub salary: f64,

    #[serde(default = "default_training_hours")]
    pub training_hours: u32,

    /// Annual turnover in percent (e.g. 15 for 15%)
    #[serde(default = "default_turnover")]
    pub turnover: f64,

    #[serde(default = "default_replace_cost")]
    pub replace_cost: f64,

    #[serde(default = "default_term")]
    pub term: u32,
}

fn default_employees() -> u32 { Assumptions::default().employees }
fn default_salary() -> f64 { Assumptions::default().salary }
fn default_training_hours() -> u32 { Assumptions::default().training_hours }
fn default_turnover() -> f64 { Assumptions::default().turnover }
fn default_replace_cost() -> f64 { Assumptions::default().replace_cost }
fn default_term() -> u32 { Assumptions::default().term }

impl RoiRequest {
    fn to_assumptions(&self) -> Assumptions {
        Assumptions::new(
            self.employees,
            self.salary,
            self.training_hours,
            self.turnover,
            self.replace_cost,
            self.term,
        )
        .clamped()
    }
}

/// Function URL response envelope
fn http_response(status: u16, body: String) -> Value {
    json!({
        "statusCode": status,
        "headers": { "content-type": "application/json" },
        "body": body,
    })
}

fn error_response(status: u16, message: &str) -> Value {
    http_response(status, json!({ "error": message }).to_string())
}

/// Turn a raw request body into a response envelope
fn respond(body: Option<&str>, is_base64_encoded: bool) -> Value {
    if is_base64_encoded {
        return error_response(400, "Base64-encoded bodies are not supported; send application/json");
    }

    let body = body.map(str::trim).filter(|b| !b.is_empty()).unwrap_or("{}");
    let request: RoiRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected request body: {}", e);
            return error_response(400, &format!("Invalid request body: {}", e));
        }
    };

    let assumptions = request.to_assumptions();
    let report = RoiReport::from_assumptions(assumptions, Utc::now());
    info!(
        "Computed ROI for {} employees over {} year(s): {:.1}%",
        assumptions.employees, assumptions.term, report.metrics.total_roi_percent
    );

    match report.to_json() {
        Ok(json) => http_response(200, json),
        Err(e) => error_response(500, &e.to_string()),
    }
}

async fn function_handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<Value, Error> {
    let request = event.payload;
    Ok(respond(request.body.as_deref(), request.is_base64_encoded))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(function_handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(response: &Value) -> Value {
        serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
    }

    #[test]
    fn test_empty_body_uses_defaults() {
        let response = respond(None, false);
        assert_eq!(response["statusCode"], 200);

        let body = body_of(&response);
        assert_eq!(body["assumptions"]["employees"], 100);
        assert_eq!(body["metrics"]["cashFlowSeries"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_partial_body_is_clamped() {
        let response = respond(Some(r#"{"employees": 3, "term": 9}"#), false);
        let body = body_of(&response);

        assert_eq!(body["assumptions"]["employees"], 10);
        assert_eq!(body["assumptions"]["term"], 5);
        assert_eq!(body["assumptions"]["salary"], 60_000.0);
    }

    #[test]
    fn test_bad_body_is_400() {
        let response = respond(Some("{not json"), false);
        assert_eq!(response["statusCode"], 400);
        assert!(body_of(&response)["error"].as_str().unwrap().starts_with("Invalid request body"));

        assert_eq!(respond(Some("{}"), true)["statusCode"], 400);
    }
}
