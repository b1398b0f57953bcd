//! Word translation through the MyMemory HTTP API

use std::time::Duration;

use serde::Deserialize;

use super::{from_sentinel, ServiceError};

pub const MYMEMORY_URL: &str = "https://api.mymemory.translated.net/get";

/// Translates single words between language codes
pub trait Translator {
    fn translate(&self, word: &str, source: &str, target: &str) -> Result<String, ServiceError>;
}

/// Client for `api.mymemory.translated.net`
#[derive(Debug, Clone)]
pub struct MyMemoryTranslator {
    client: reqwest::blocking::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    response_data: ResponseData,
    /// Numeric status; some error replies send it as a string
    #[serde(default)]
    response_status: Option<serde_json::Value>,
    /// Empty on success, otherwise the reason the request was refused
    #[serde(default)]
    response_details: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    #[serde(default)]
    translated_text: String,
}

impl MyMemoryTranslator {
    pub fn new(timeout: Duration) -> Result<Self, ServiceError> {
        Self::with_endpoint(MYMEMORY_URL, timeout)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("lingo/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl Translator for MyMemoryTranslator {
    fn translate(&self, word: &str, source: &str, target: &str) -> Result<String, ServiceError> {
        let langpair = format!("{}|{}", source, target);
        let response: MyMemoryResponse = self
            .client
            .get(&self.endpoint)
            .query(&[("q", word), ("langpair", langpair.as_str())])
            .send()?
            .error_for_status()?
            .json()?;
        let translation = parse_response(response)?;
        tracing::debug!("Translated {:?} ({}) -> {:?}", word, langpair, translation);
        Ok(translation)
    }
}

fn parse_response(response: MyMemoryResponse) -> Result<String, ServiceError> {
    if let Some(code) = response.response_status.as_ref().and_then(status_code) {
        if code != 200 {
            let details = response.response_details.unwrap_or_default();
            from_sentinel(&details)?;
            return Err(ServiceError::Status(code));
        }
    }
    from_sentinel(response.response_details.as_deref().unwrap_or_default())?;

    let text = response.response_data.translated_text.trim();
    if text.is_empty() {
        return Err(ServiceError::Response("empty translation".to_string()));
    }
    Ok(text.to_string())
}

fn status_code(value: &serde_json::Value) -> Option<u16> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
