//! AWS Lambda handler for running debt projections
//!
//! Accepts scenario parameters via JSON in percent units, matching the
//! browser form, and returns the projected trajectory plus summary metrics
//! converted back to percent.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use debt_dynamics::{
    analysis::{AnalysisConfig, Analyzer, DEFAULT_CRISIS_THRESHOLD},
    projection::{DebtProjector, ProjectionConfig, DEFAULT_HORIZON_YEARS},
    scenario::ScenarioInput,
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

/// Input parameters for the projection, percent units
#[derive(Debug, Deserialize)]
pub struct SimulationRequest {
    /// Initial debt-to-GDP ratio in percent (default: 98%)
    #[serde(default = "default_initial_ratio_pct")]
    pub initial_ratio_pct: f64,

    /// Nominal interest rate in percent (default: 4.5%)
    #[serde(default = "default_interest_rate_pct")]
    pub interest_rate_pct: f64,

    /// Real GDP growth rate in percent (default: 2.0%)
    #[serde(default = "default_growth_rate_pct")]
    pub growth_rate_pct: f64,

    /// Inflation rate in percent (default: 2.5%)
    #[serde(default = "default_inflation_rate_pct")]
    pub inflation_rate_pct: f64,

    /// Tax revenue share of GDP in percent (default: 30%)
    #[serde(default = "default_tax_rate_pct")]
    pub tax_rate_pct: f64,

    /// Government spending share of GDP in percent (default: 32%)
    #[serde(default = "default_spending_rate_pct")]
    pub spending_rate_pct: f64,

    /// Projection horizon in years (default: 20)
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,

    /// Crisis threshold in percent of GDP (default: 150%)
    #[serde(default = "default_crisis_threshold_pct")]
    pub crisis_threshold_pct: f64,
}

fn default_initial_ratio_pct() -> f64 { 98.0 }
fn default_interest_rate_pct() -> f64 { 4.5 }
fn default_growth_rate_pct() -> f64 { 2.0 }
fn default_inflation_rate_pct() -> f64 { 2.5 }
fn default_tax_rate_pct() -> f64 { 30.0 }
fn default_spending_rate_pct() -> f64 { 32.0 }
fn default_horizon_years() -> u32 { DEFAULT_HORIZON_YEARS }
fn default_crisis_threshold_pct() -> f64 { DEFAULT_CRISIS_THRESHOLD * 100.0 }

/// A single trajectory point, percent units
#[derive(Debug, Serialize)]
pub struct TrajectoryPointPct {
    pub year: u32,
    pub debt_to_gdp_pct: f64,
}

/// Output from the projection, percent units throughout
#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    pub horizon_years: u32,
    pub trajectory: Vec<TrajectoryPointPct>,
    pub final_ratio_pct: f64,
    pub delta_pct: f64,
    pub interest_growth_differential_pct: f64,
    pub primary_balance_pct: f64,
    pub classification: String,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &SimulationResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: SimulationRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    // Convert percent inputs once at this boundary
    let scenario = ScenarioInput::from_percentages(
        request.initial_ratio_pct,
        request.interest_rate_pct,
        request.growth_rate_pct,
        request.inflation_rate_pct,
        request.tax_rate_pct,
        request.spending_rate_pct,
    );

    let projector = DebtProjector::new(ProjectionConfig {
        horizon_years: request.horizon_years,
    });
    let trajectory = match projector.project(&scenario) {
        Ok(t) => t,
        Err(e) => {
            return Ok(error_response(400, &format!("Projection failed: {}", e)));
        }
    };

    let analyzer = Analyzer::new(AnalysisConfig {
        crisis_threshold: request.crisis_threshold_pct / 100.0,
    });
    let metrics = analyzer.analyze(&scenario, &trajectory);

    let trajectory_pct: Vec<TrajectoryPointPct> = trajectory
        .points()
        .iter()
        .map(|p| TrajectoryPointPct {
            year: p.year,
            debt_to_gdp_pct: p.ratio * 100.0,
        })
        .collect();

    let execution_time_ms = start.elapsed().as_millis() as u64;

    let response = SimulationResponse {
        horizon_years: trajectory.horizon(),
        trajectory: trajectory_pct,
        final_ratio_pct: metrics.final_ratio * 100.0,
        delta_pct: metrics.delta * 100.0,
        interest_growth_differential_pct: metrics.interest_growth_differential * 100.0,
        primary_balance_pct: metrics.primary_balance * 100.0,
        classification: metrics.classification.as_str().to_string(),
        execution_time_ms,
        error: None,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
