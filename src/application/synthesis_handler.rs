/// 音声合成ハンドラー（プレースホルダー）
///
/// 意図的に実装されていないパス。他のハンドラーと同一の規約で
/// ペイロードを検証するが、リモートサービスは呼び出さず、
/// 固定のスタブ結果を返す。実際の音声合成への差し替えを想定した
/// 明示的なプレースホルダーであり、バグではない。
use serde::Serialize;
use tracing::info;

use crate::domain::{ApiResponse, RequestPayload};

/// スタブ結果として返す固定のオーディオURL
pub const PLACEHOLDER_AUDIO_URL: &str = "https://example.com/audio.mp3";

/// 音声合成の成功レスポンスボディ
#[derive(Debug, Clone, Serialize)]
struct SynthesisResult {
    /// 生成音声への参照URL
    #[serde(rename = "audioUrl")]
    audio_url: String,
}

/// 音声合成リクエストを処理するハンドラー
pub struct SynthesisHandler;

impl SynthesisHandler {
    /// 新しいSynthesisHandlerを作成
    pub fn new() -> Self {
        Self
    }

    /// ペイロードを検証し、固定のスタブ結果を返す
    ///
    /// `language`（省略時は `en`）は検証の一部として読み取るが、
    /// スタブ実装では結果に影響しない。
    pub async fn handle(&self, payload: &RequestPayload) -> ApiResponse {
        let Some(_text) = payload.text() else {
            return ApiResponse::error(400, "Missing text parameter");
        };

        info!(
            language = payload.language(),
            "音声合成はプレースホルダー結果を返却"
        );

        ApiResponse::ok(&SynthesisResult {
            audio_url: PLACEHOLDER_AUDIO_URL.to_string(),
        })
    }
}

impl Default for SynthesisHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    /// textがあれば固定のスタブ結果で200を返す
    #[tokio::test]
    async fn test_handle_returns_placeholder() {
        let handler = SynthesisHandler::new();

        let payload = RequestPayload::from_fields(json!({"text": "read this aloud"}));
        let response = handler.handle(&payload).await;

        assert_eq!(response.status_code, 200);
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, json!({"audioUrl": "https://example.com/audio.mp3"}));
    }

    /// languageを指定しても結果は変わらない（スタブ実装）
    #[tokio::test]
    async fn test_handle_language_does_not_affect_result() {
        let handler = SynthesisHandler::new();

        let with_language =
            RequestPayload::from_fields(json!({"text": "hola", "language": "es"}));
        let without_language = RequestPayload::from_fields(json!({"text": "hola"}));

        let a = handler.handle(&with_language).await;
        let b = handler.handle(&without_language).await;

        assert_eq!(a.body, b.body);
    }

    /// textが欠落していれば400
    #[tokio::test]
    async fn test_handle_missing_text() {
        let handler = SynthesisHandler::new();

        let payload = RequestPayload::from_fields(json!({"language": "en"}));
        let response = handler.handle(&payload).await;

        assert_eq!(response.status_code, 400);
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, json!({"error": "Missing text parameter"}));
    }
}
