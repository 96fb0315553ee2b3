// 遠端語氣調整服務的客戶端
// 服務本身是外部邊界：POST {text, x, y}，成功回 {adjustedText}，失敗回 {message/error}

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tone::Tone;

#[derive(Debug, Error)]
pub enum ToneError {
    /// 服務回應非成功狀態，訊息直接轉呈給使用者，不重試
    #[error("{0}")]
    Service(String),

    /// 連線、逾時或回應解碼失敗
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct ToneRequest<'a> {
    text: &'a str,
    x: i32,
    y: i32,
}

#[derive(Debug, Deserialize)]
struct ToneResponse {
    #[serde(rename = "adjustedText")]
    adjusted_text: String,
}

/// 工作執行緒回報的結果；request_id 用來丟棄過期回應
#[derive(Debug)]
pub struct ToneOutcome {
    pub request_id: u64,
    pub label: &'static str,
    pub result: Result<String, ToneError>,
}

pub struct ToneClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl ToneClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    /// 同步送出語氣調整請求，回傳改寫後的文字
    pub fn adjust(&self, text: &str, tone: &Tone) -> Result<String, ToneError> {
        let request = ToneRequest {
            text,
            x: tone.x,
            y: tone.y,
        };

        log::debug!("POST {} tone=({}, {})", self.endpoint, tone.x, tone.y);
        let response = self.http.post(&self.endpoint).json(&request).send()?;
        let status = response.status();

        if status.is_success() {
            let body: ToneResponse = response.json()?;
            Ok(body.adjusted_text)
        } else {
            let body = response.text().unwrap_or_default();
            log::debug!("service error {}: {}", status, body);
            Err(ToneError::Service(service_message(&body)))
        }
    }
}

/// 在工作執行緒上送出請求，完成後經 channel 回報
/// 同一時間只會有一個請求在途（由呼叫端的狀態機保證）
pub fn spawn_adjust(
    client: Arc<ToneClient>,
    tx: Sender<ToneOutcome>,
    request_id: u64,
    text: String,
    tone: &'static Tone,
) {
    thread::spawn(move || {
        let result = client.adjust(&text, tone);
        // 主迴圈可能已經結束，送失敗直接忽略
        let _ = tx.send(ToneOutcome {
            request_id,
            label: tone.label,
            result,
        });
    });
}

/// 從失敗回應的 JSON 內文取出要呈現的訊息：message 優先於 error
fn service_message(body: &str) -> String {
    #[derive(Debug, Default, Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .message
        .or(parsed.error)
        .unwrap_or_else(|| "Unknown error occurred.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_message_prefers_message_over_error() {
        let body = r#"{"error":"UPSTREAM_ERROR","message":"Mistral unavailable"}"#;
        assert_eq!(service_message(body), "Mistral unavailable");
    }

    #[test]
    fn test_service_message_falls_back_to_error() {
        assert_eq!(service_message(r#"{"error":"EMPTY_TEXT"}"#), "EMPTY_TEXT");
    }

    #[test]
    fn test_service_message_unknown_on_garbage() {
        assert_eq!(service_message("not json"), "Unknown error occurred.");
        assert_eq!(service_message("{}"), "Unknown error occurred.");
    }
}
