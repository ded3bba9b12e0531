//! plant.id API client
//!
//! Sends a single base64-encoded image to the plant.id classification endpoint
//! and extracts the top suggestion.
//!
//! # API Reference
//! - Endpoint: https://api.plant.id/v2/identify
//! - Authentication: `Api-Key` header
//! - Consumed response path: `result.classification.suggestions[0]`
//!   (`name`, `probability`, `similar_images[0].url`)

use super::{Classification, RecognitionClient, RecognitionError, RequestProfile};
use async_trait::async_trait;
use base64::Engine;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use plantid_common::config::{IdentificationSection, TomlConfig, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("plantid-ai/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "Api-Key";
const PLANT_LANGUAGE: &str = "en";

/// Connection settings for [`PlantIdClient`]
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Classification endpoint URL
    pub endpoint: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Outgoing request budget
    pub requests_per_second: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        let section = IdentificationSection::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(section.request_timeout_secs),
            requests_per_second: section.requests_per_second,
        }
    }
}

impl ClientSettings {
    /// Build settings from the TOML bootstrap config
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            endpoint: config.endpoint_or_default().to_string(),
            timeout: Duration::from_secs(config.identification.request_timeout_secs),
            requests_per_second: config.identification.requests_per_second,
        }
    }
}

#[derive(Debug, Serialize)]
struct IdentifyRequest<'a> {
    images: Vec<String>,
    modifiers: &'a [&'a str],
    plant_language: &'a str,
    plant_details: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
struct IdentifyResponse {
    result: ResponseResult,
}

#[derive(Debug, Deserialize)]
struct ResponseResult {
    classification: ResponseClassification,
}

#[derive(Debug, Deserialize)]
struct ResponseClassification {
    suggestions: Vec<Suggestion>,
}

#[derive(Debug, Deserialize)]
struct Suggestion {
    name: String,
    probability: f64,
    #[serde(default)]
    similar_images: Vec<SimilarImage>,
}

#[derive(Debug, Deserialize)]
struct SimilarImage {
    url: String,
}

/// plant.id API client
pub struct PlantIdClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
    rate_limiter: DefaultDirectRateLimiter,
}

impl PlantIdClient {
    /// Create client against the public endpoint with default settings
    pub fn new(api_key: String) -> Result<Self, RecognitionError> {
        Self::with_settings(api_key, ClientSettings::default())
    }

    pub fn with_settings(
        api_key: String,
        settings: ClientSettings,
    ) -> Result<Self, RecognitionError> {
        let per_second = NonZeroU32::new(settings.requests_per_second).ok_or_else(|| {
            RecognitionError::ClientBuild("requests_per_second must be non-zero".to_string())
        })?;

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| RecognitionError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: settings.endpoint,
            api_key,
            rate_limiter: RateLimiter::direct(Quota::per_second(per_second)),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecognitionClient for PlantIdClient {
    fn name(&self) -> &'static str {
        "plant.id"
    }

    async fn classify(
        &self,
        image: &[u8],
        profile: &RequestProfile,
    ) -> Result<Classification, RecognitionError> {
        let request = build_request(image, profile);

        self.rate_limiter.until_ready().await;

        debug!(
            endpoint = %self.endpoint,
            image_bytes = image.len(),
            modifiers = ?profile.modifiers,
            "Querying plant.id API"
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| RecognitionError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(RecognitionError::InvalidApiKey);
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RecognitionError::Api(status.as_u16(), error_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RecognitionError::Network(e.to_string()))?;

        let classification = parse_response(&body)?;

        debug!(
            name = %classification.name,
            probability = classification.probability,
            "plant.id classification received"
        );

        Ok(classification)
    }
}

fn build_request<'a>(image: &[u8], profile: &'a RequestProfile) -> IdentifyRequest<'a> {
    IdentifyRequest {
        images: vec![base64::engine::general_purpose::STANDARD.encode(image)],
        modifiers: profile.modifiers,
        plant_language: PLANT_LANGUAGE,
        plant_details: profile.plant_details,
    }
}

/// Extract the top suggestion from a response body
fn parse_response(body: &str) -> Result<Classification, RecognitionError> {
    let response: IdentifyResponse =
        serde_json::from_str(body).map_err(|e| RecognitionError::Parse(e.to_string()))?;

    let top = response
        .result
        .classification
        .suggestions
        .into_iter()
        .next()
        .ok_or(RecognitionError::NoSuggestions)?;

    Ok(Classification {
        name: top.name,
        probability: top.probability,
        reference_url: top.similar_images.into_iter().next().map(|i| i.url),
    })
}
