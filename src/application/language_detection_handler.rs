/// 言語検出ハンドラー
///
/// `text` の主要言語を検出し、最上位候補の言語コードとスコアを返す。
/// スコアは0〜1の生の値のまま返し、画像ハンドラーのパーセント文字列
/// 規約とは意図的に異なる（両方の規約をそのまま保存する）。
use serde::Serialize;
use tracing::error;

use crate::domain::{ApiResponse, RequestPayload};
use crate::infrastructure::TextAnalysisOps;

/// 候補ゼロ時のデフォルト言語コード
const FALLBACK_LANGUAGE_CODE: &str = "en";

/// 候補ゼロ時のデフォルトスコア
const FALLBACK_CONFIDENCE: f32 = 0.5;

/// 言語検出の成功レスポンスボディ
///
/// languageとlanguageCodeは同一の値（言語コード）を持つ。
#[derive(Debug, Clone, Serialize)]
struct LanguageDetectionResult {
    /// 言語コード
    language: String,
    /// 言語コード（languageと同値）
    #[serde(rename = "languageCode")]
    language_code: String,
    /// スコア（0〜1の生の値）
    confidence: f32,
}

/// 言語検出を処理するハンドラー
pub struct LanguageDetectionHandler<C>
where
    C: TextAnalysisOps,
{
    /// テキスト分析操作
    text_ops: C,
}

impl<C> LanguageDetectionHandler<C>
where
    C: TextAnalysisOps,
{
    /// 新しいLanguageDetectionHandlerを作成
    pub fn new(text_ops: C) -> Self {
        Self { text_ops }
    }

    /// ペイロードを検証し、言語検出を実行してレスポンスを生成する
    ///
    /// 候補がゼロの場合はエラーではなく、文書化されたデフォルト
    /// （en / スコア0.5）で200を返す。
    pub async fn handle(&self, payload: &RequestPayload) -> ApiResponse {
        let Some(text) = payload.text() else {
            return ApiResponse::error(400, "Missing text parameter");
        };

        match self.text_ops.detect_dominant_language(text).await {
            Ok(languages) => {
                let result = match languages.into_iter().next() {
                    Some(top) => LanguageDetectionResult {
                        language: top.language_code.clone(),
                        language_code: top.language_code,
                        confidence: top.score,
                    },
                    None => LanguageDetectionResult {
                        language: FALLBACK_LANGUAGE_CODE.to_string(),
                        language_code: FALLBACK_LANGUAGE_CODE.to_string(),
                        confidence: FALLBACK_CONFIDENCE,
                    },
                };

                ApiResponse::ok(&result)
            }
            Err(err) => {
                error!(error = %err, "言語検出に失敗");
                ApiResponse::error(500, &err.to_string())
            }
        }
    }
}
