/// 翻訳ハンドラー
///
/// `text` を指定の翻訳先言語に翻訳する。翻訳元言語は常に自動検出、
/// 翻訳先言語は `targetLanguage`（省略時は `es`）。
use serde::Serialize;
use tracing::error;

use crate::domain::{ApiResponse, RequestPayload};
use crate::infrastructure::TranslationOps;

/// 翻訳の成功レスポンスボディ
#[derive(Debug, Clone, Serialize)]
struct TranslationResult {
    /// 翻訳されたテキスト
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// テキスト翻訳を処理するハンドラー
pub struct TranslationHandler<T>
where
    T: TranslationOps,
{
    /// 翻訳操作
    translation_ops: T,
}

impl<T> TranslationHandler<T>
where
    T: TranslationOps,
{
    /// 新しいTranslationHandlerを作成
    pub fn new(translation_ops: T) -> Self {
        Self { translation_ops }
    }

    /// ペイロードを検証し、翻訳を実行してレスポンスを生成する
    pub async fn handle(&self, payload: &RequestPayload) -> ApiResponse {
        let Some(text) = payload.text() else {
            return ApiResponse::error(400, "Missing text parameter");
        };

        let target_language = payload.target_language();

        match self
            .translation_ops
            .translate_text(text, target_language)
            .await
        {
            Ok(translated_text) => ApiResponse::ok(&TranslationResult { translated_text }),
            Err(err) => {
                error!(error = %err, target_language = target_language, "翻訳に失敗");
                ApiResponse::error(500, &err.to_string())
            }
        }
    }
}
