// SPDX-License-Identifier: MPL-2.0
//! Remote advisory endpoints.
//!
//! The backend exposes two JSON-over-HTTPS collaborators: a chatbot
//! question-answering endpoint and a crop-condition simulation endpoint.
//! Both are fire-and-await POST calls with a single attempt; failures are
//! classified once here and surfaced to the screens as localized strings.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Base URL used when neither `--api-base` nor the config file override it.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Result type for endpoint calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the backend.
///
/// The cause is classified at this boundary only; the screens map every
/// variant to one localized message.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, aborted body).
    Request(String),
    /// The server answered with a non-success status code.
    Status(u16),
    /// The response body was not the expected JSON shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request(msg) => write!(f, "Request failed: {msg}"),
            ApiError::Status(code) => write!(f, "Server returned status {code}"),
            ApiError::Decode(msg) => write!(f, "Invalid response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Resolved endpoint URLs for the advisory backend.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    #[must_use]
    pub fn chatbot(&self) -> String {
        format!("{}/chatbot", self.base)
    }

    #[must_use]
    pub fn simulation(&self) -> String {
        format!("{}/simulation", self.base)
    }
}

/// Reply shape of the chatbot endpoint.
///
/// Current backends answer with `answer` (plus optional routing metadata);
/// older deployments used `response`. Anything else falls back to the
/// localized "no response" string at the call site.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub answer: Option<String>,
    pub response: Option<String>,
    pub intent: Option<String>,
    pub confidence: Option<f64>,
    pub source_id: Option<String>,
}

impl ChatReply {
    /// The text to show in the transcript, if the reply carried any.
    #[must_use]
    pub fn display_text(&self) -> Option<&str> {
        self.answer
            .as_deref()
            .or(self.response.as_deref())
    }
}

/// Machine-learning sub-object of the simulation response.
#[derive(Debug, Clone, Deserialize)]
pub struct MlPrediction {
    pub predicted_condition: Option<String>,
    pub predicted_class: Option<String>,
    #[serde(default)]
    pub confidence: f64,
    pub message: Option<String>,
}

impl MlPrediction {
    /// Preferred condition label, falling back to the legacy field name.
    #[must_use]
    pub fn condition_label(&self) -> Option<&str> {
        self.predicted_condition
            .as_deref()
            .or(self.predicted_class.as_deref())
    }

    /// Confidence rendered as a percentage with two decimals, e.g. `87.32%`.
    #[must_use]
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}

/// LLM-generated explanation sub-object of the simulation response.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmExplanation {
    #[serde(default)]
    pub problems_detected: Vec<String>,
    #[serde(default)]
    pub ai_advice: Vec<String>,
    pub explanation: Option<String>,
}

/// The raw simulation response plus typed views into its optional
/// sub-objects.
///
/// The raw value is retained so that a response carrying neither recognized
/// sub-object still renders through the generic fallback instead of being
/// treated as an error.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    raw: Value,
}

impl SimulationOutcome {
    #[must_use]
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    #[must_use]
    pub fn ml_prediction(&self) -> Option<MlPrediction> {
        self.raw
            .get("local_ml_prediction")
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    #[must_use]
    pub fn llm_explanation(&self) -> Option<LlmExplanation> {
        self.raw
            .get("local_llm_explanation")
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Whether neither recognized sub-object is present, in which case the
    /// screen renders the raw payload.
    #[must_use]
    pub fn is_unrecognized(&self) -> bool {
        self.ml_prediction().is_none() && self.llm_explanation().is_none()
    }

    #[must_use]
    pub fn raw_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}

fn build_client() -> ApiResult<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("KisanDrishti/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ApiError::Request(e.to_string()))
}

/// Sends one user question to the chatbot endpoint.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers with a
/// non-success status, or the body is not valid JSON.
pub async fn send_chat_query(endpoint: String, query: String) -> ApiResult<ChatReply> {
    let client = build_client()?;

    let response = client
        .post(&endpoint)
        .json(&serde_json::json!({ "query": query }))
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }

    response
        .json::<ChatReply>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Submits the flat parameter record to the simulation endpoint.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers with a
/// non-success status, or the body is not valid JSON.
pub async fn run_simulation(
    endpoint: String,
    record: serde_json::Map<String, Value>,
) -> ApiResult<SimulationOutcome> {
    let client = build_client()?;

    let response = client
        .post(&endpoint)
        .json(&Value::Object(record))
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }

    let raw = response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(SimulationOutcome::from_value(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoints_strip_trailing_slashes() {
        let endpoints = Endpoints::new("http://localhost:8000///");
        assert_eq!(endpoints.chatbot(), "http://localhost:8000/chatbot");
        assert_eq!(endpoints.simulation(), "http://localhost:8000/simulation");
    }

    #[test]
    fn default_endpoints_use_builtin_base() {
        let endpoints = Endpoints::default();
        assert!(endpoints.chatbot().starts_with(DEFAULT_API_BASE));
    }

    #[test]
    fn chat_reply_prefers_answer_over_response() {
        let reply: ChatReply = serde_json::from_value(json!({
            "answer": "Use drip irrigation.",
            "response": "legacy text"
        }))
        .unwrap();
        assert_eq!(reply.display_text(), Some("Use drip irrigation."));
    }

    #[test]
    fn chat_reply_falls_back_to_legacy_response_field() {
        let reply: ChatReply = serde_json::from_value(json!({
            "response": "legacy text",
            "intent": "irrigation",
            "confidence": 0.92,
            "source_id": "kb-17"
        }))
        .unwrap();
        assert_eq!(reply.display_text(), Some("legacy text"));
        assert_eq!(reply.intent.as_deref(), Some("irrigation"));
    }

    #[test]
    fn chat_reply_without_text_yields_none() {
        let reply: ChatReply = serde_json::from_value(json!({})).unwrap();
        assert_eq!(reply.display_text(), None);
    }

    #[test]
    fn ml_prediction_formats_confidence_to_two_decimals() {
        let outcome = SimulationOutcome::from_value(json!({
            "local_ml_prediction": {
                "predicted_condition": "stressed",
                "confidence": 0.8732
            }
        }));
        let prediction = outcome.ml_prediction().expect("prediction should parse");
        assert_eq!(prediction.condition_label(), Some("stressed"));
        assert_eq!(prediction.confidence_percent(), "87.32%");
    }

    #[test]
    fn ml_prediction_falls_back_to_predicted_class() {
        let outcome = SimulationOutcome::from_value(json!({
            "local_ml_prediction": {
                "predicted_class": "healthy",
                "confidence": 0.5
            }
        }));
        let prediction = outcome.ml_prediction().expect("prediction should parse");
        assert_eq!(prediction.condition_label(), Some("healthy"));
    }

    #[test]
    fn llm_explanation_defaults_empty_lists() {
        let outcome = SimulationOutcome::from_value(json!({
            "local_llm_explanation": {
                "explanation": "Soil looks dry."
            }
        }));
        let explanation = outcome.llm_explanation().expect("explanation should parse");
        assert!(explanation.problems_detected.is_empty());
        assert!(explanation.ai_advice.is_empty());
        assert_eq!(explanation.explanation.as_deref(), Some("Soil looks dry."));
    }

    #[test]
    fn unknown_shape_is_flagged_for_fallback_render() {
        let outcome = SimulationOutcome::from_value(json!({
            "status": "ok",
            "echo": { "soil_moisture": 18.0 }
        }));
        assert!(outcome.is_unrecognized());
        assert!(outcome.raw_pretty().contains("soil_moisture"));
    }

    #[test]
    fn malformed_sub_object_falls_back_instead_of_failing() {
        // `local_ml_prediction` is a string, not an object: the typed view
        // returns None and the raw fallback takes over.
        let outcome = SimulationOutcome::from_value(json!({
            "local_ml_prediction": "unexpected"
        }));
        assert!(outcome.ml_prediction().is_none());
        assert!(outcome.is_unrecognized());
    }
}
