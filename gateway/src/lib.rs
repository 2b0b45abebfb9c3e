// CBDC Gateway - HTTP entry point for the analytics engines
// Maps JSON request payloads onto engine operations and translates
// domain errors into client-facing 4xx responses

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use compliance_engine::{
    AmlData, ComplianceEngine, ComplianceMetrics, FrameworkMonitor, Jurisdiction, KycData,
    ReservePosition,
};
use risk_engine::{
    AdjacencyMatrix, BaselineConditions, NetworkMetrics, OperationalMetrics, RiskAnalytics,
    RiskConfig, RiskMetrics, ScenarioOutcome, ShockScenario, StressTester, SystemicMetrics,
    TradingMetrics,
};
use simulation_engine::{
    CbdcParameters, CbdcSimulator, CrisisImpact, CrisisKind, CrossBorderReceipt, StabilityPoint,
    TransmissionPoint,
};

pub mod config;

pub use config::GatewayConfig;

/// Shared engine instances, built once from config
pub struct AppState {
    pub config: GatewayConfig,
    pub risk: RiskAnalytics,
    pub stress: StressTester,
    pub compliance: ComplianceEngine,
    pub simulator: CbdcSimulator,
}

impl AppState {
    pub fn new(config: GatewayConfig, risk_config: RiskConfig, params: CbdcParameters) -> Self {
        Self {
            config,
            risk: RiskAnalytics::new(risk_config.clone()),
            stress: StressTester::new(risk_config),
            compliance: ComplianceEngine::default(),
            simulator: CbdcSimulator::new(params),
        }
    }
}

// Error handling
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::BadRequest(message) = self;

        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": message,
                "timestamp": Utc::now(),
            })),
        )
            .into_response()
    }
}

impl From<risk_engine::Error> for ApiError {
    fn from(e: risk_engine::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<compliance_engine::Error> for ApiError {
    fn from(e: compliance_engine::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<simulation_engine::Error> for ApiError {
    fn from(e: simulation_engine::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

// Request/response models

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct SimulationRequest {
    pub policy_rate_change: f64,
    #[serde(default = "default_periods")]
    pub simulation_periods: u32,
}

fn default_periods() -> u32 {
    12
}

#[derive(Debug, Deserialize)]
pub struct StabilityRequest {
    #[serde(default = "default_periods")]
    pub simulation_periods: u32,
}

#[derive(Debug, Deserialize)]
pub struct CrossBorderRequest {
    pub amount: Decimal,
    pub source_currency: String,
    pub target_currency: String,
    pub exchange_rate: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct CrisisRequest {
    pub scenario_type: String,
    #[serde(default = "default_severity")]
    pub severity: f64,
}

fn default_severity() -> f64 {
    0.5
}

#[derive(Debug, Deserialize)]
pub struct RiskAssessmentRequest {
    pub returns: Vec<f64>,
    pub trading_metrics: TradingMetrics,
    pub operational_metrics: OperationalMetrics,
    pub systemic_metrics: SystemicMetrics,
}

#[derive(Debug, Deserialize)]
pub struct NetworkRiskRequest {
    pub adjacency_matrix: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct StressTestRequest {
    pub initial_conditions: BaselineConditions,
    pub scenarios: Vec<ScenarioRequest>,
}

#[derive(Debug, Deserialize)]
pub struct ScenarioRequest {
    pub name: String,
    #[serde(default)]
    pub shocks: BTreeMap<String, f64>,
    pub network: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct ComplianceRequest {
    pub reserve_data: ReserveData,
    pub transaction_amount: Decimal,
    pub kyc_data: KycData,
    pub aml_data: AmlData,
}

#[derive(Debug, Deserialize)]
pub struct ReserveData {
    pub liabilities: Decimal,
    pub assets: Decimal,
    pub jurisdiction: String,
}

// Handlers

pub async fn root(State(state): State<Arc<AppState>>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: state.config.service_name.clone(),
        version: state.config.service_version.clone(),
        description: "CBDC simulation, risk analytics, and compliance API",
    })
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: state.config.service_name.clone(),
        version: state.config.service_version.clone(),
    })
}

pub async fn monetary_transmission(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SimulationRequest>,
) -> Json<Vec<TransmissionPoint>> {
    Json(
        state
            .simulator
            .monetary_transmission(request.policy_rate_change, request.simulation_periods),
    )
}

pub async fn cross_border(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CrossBorderRequest>,
) -> Result<Json<CrossBorderReceipt>, ApiError> {
    let receipt = state.simulator.cross_border_payment(
        request.amount,
        &request.source_currency,
        &request.target_currency,
        request.exchange_rate,
    )?;
    Ok(Json(receipt))
}

pub async fn financial_stability(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StabilityRequest>,
) -> Json<Vec<StabilityPoint>> {
    Json(state.simulator.financial_stability(request.simulation_periods))
}

pub async fn crisis_scenario(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CrisisRequest>,
) -> Result<Json<CrisisImpact>, ApiError> {
    let kind = CrisisKind::from_str(&request.scenario_type)?;
    let impact = state.simulator.crisis_scenario(kind, request.severity)?;
    Ok(Json(impact))
}

pub async fn risk_assessment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RiskAssessmentRequest>,
) -> Result<Json<RiskMetrics>, ApiError> {
    let report = state.risk.generate_risk_report(
        &request.returns,
        &request.trading_metrics,
        &request.operational_metrics,
        &request.systemic_metrics,
    )?;
    Ok(Json(report))
}

pub async fn network_risk(
    State(_state): State<Arc<AppState>>,
    Json(request): Json<NetworkRiskRequest>,
) -> Result<Json<NetworkMetrics>, ApiError> {
    let matrix = AdjacencyMatrix::new(request.adjacency_matrix)?;
    Ok(Json(matrix.metrics()?))
}

pub async fn stress_test(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StressTestRequest>,
) -> Result<Json<Vec<ScenarioOutcome>>, ApiError> {
    let scenarios = request
        .scenarios
        .into_iter()
        .map(|s| {
            Ok(ShockScenario {
                name: s.name,
                shocks: s.shocks,
                network: AdjacencyMatrix::new(s.network)?,
            })
        })
        .collect::<Result<Vec<_>, risk_engine::Error>>()?;

    let results = state.stress.run(&request.initial_conditions, &scenarios)?;
    Ok(Json(results))
}

pub async fn compliance_assessment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ComplianceRequest>,
) -> Result<Json<ComplianceMetrics>, ApiError> {
    let jurisdiction = Jurisdiction::from_code(&request.reserve_data.jurisdiction)?;
    let report = state.compliance.generate_report(
        &ReservePosition {
            liabilities: request.reserve_data.liabilities,
            assets: request.reserve_data.assets,
            jurisdiction,
        },
        request.transaction_amount,
        &request.kyc_data,
        &request.aml_data,
    )?;
    Ok(Json(report))
}

pub async fn jurisdictions() -> Json<Vec<&'static str>> {
    Json(Jurisdiction::ALL.iter().map(|j| j.code()).collect())
}

#[derive(Debug, Deserialize)]
pub struct FrameworkRequest {
    pub reserve_ratio: f64,
    pub transaction_amount: Decimal,
    pub kyc_completion: f64,
}

#[derive(Debug, Serialize)]
pub struct FrameworkResponse {
    pub assessments: Vec<compliance_engine::FrameworkAssessment>,
    pub compliance_risk_score: f64,
}

pub async fn framework_assessment(
    Json(request): Json<FrameworkRequest>,
) -> Json<FrameworkResponse> {
    let assessments = vec![
        FrameworkMonitor::check_mica(request.reserve_ratio, request.transaction_amount),
        FrameworkMonitor::check_genius(request.reserve_ratio, request.kyc_completion),
    ];
    let compliance_risk_score = FrameworkMonitor::compliance_risk_score(&assessments);

    Json(FrameworkResponse {
        assessments,
        compliance_risk_score,
    })
}

/// Build the application router
pub fn app(state: Arc<AppState>) -> Router {
    info!("building gateway router");

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/simulation/monetary-transmission", post(monetary_transmission))
        .route("/simulation/cross-border", post(cross_border))
        .route("/simulation/financial-stability", post(financial_stability))
        .route("/simulation/crisis", post(crisis_scenario))
        .route("/risk/assessment", post(risk_assessment))
        .route("/risk/network", post(network_risk))
        .route("/risk/stress-test", post(stress_test))
        .route("/compliance/assessment", post(compliance_assessment))
        .route("/compliance/frameworks", post(framework_assessment))
        .route("/compliance/jurisdictions", get(jurisdictions))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
