use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::model::content::TranslateRequest;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("translation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid JSON from translation service")]
    InvalidJson,

    #[error("Invalid translation response: missing `translation` field")]
    MissingTranslation,
}

pub fn build_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

// Uma requisição, uma resposta: falha de rede ou status não-2xx derruba
// a operação inteira, independente da cascata de parsing.
pub async fn request_translation(
    client: &Client,
    endpoint: &str,
    request: &TranslateRequest,
) -> Result<String, UpstreamError> {
    let response = client.post(endpoint).json(request).send().await?;
    let status = response.status();

    // Lê como texto primeiro: isso evita perder mensagem de erro quando JSON falha
    let text = response.text().await?;

    if !status.is_success() {
        return Err(UpstreamError::Status {
            status: status.as_u16(),
            message: condense_error_body(&text),
        });
    }

    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|_| UpstreamError::InvalidJson)?;

    value
        .get("translation")
        .and_then(|t| t.as_str())
        .map(|t| t.trim().to_string())
        .ok_or(UpstreamError::MissingTranslation)
}

fn condense_error_body(body_text: &str) -> String {
    // Tenta padrão comum: { "error": { "message": "..." } } ou { "message": "..." }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body_text) {
        if let Some(msg) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return msg.to_string();
        }
        if let Some(msg) = value.get("message").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
    }

    // Fallback: corpo bruto (limitado)
    let trimmed = body_text.trim();
    if trimmed.chars().count() > 400 {
        let snippet: String = trimmed.chars().take(400).collect();
        format!("{snippet}...")
    } else {
        trimmed.to_string()
    }
}
