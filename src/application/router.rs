/// リクエストルーター
///
/// Lambdaに渡された受信イベントを単一の入口で処理する。
/// 処理順序:
/// 1. OPTIONSプリフライトは正規化もディスパッチもせず即座に200を返す
/// 2. ペイロードを正規化（失敗時は400）
/// 3. パスの部分文字列マッチでハンドラーを選択（未知のパスは404）
/// 4. 選択したハンドラーのレスポンスをそのまま返す
///
/// どのコードパスもApiResponseに収束し、失敗がルーターの外に
/// 伝播することはない。
use serde_json::Value;
use tracing::{info, warn};

use crate::application::{
    ImageAnalysisHandler, LanguageDetectionHandler, SentimentHandler, SynthesisHandler,
    TranslationHandler,
};
use crate::domain::{ApiResponse, RequestPayload, Route};
use crate::infrastructure::{LabelDetectionOps, TextAnalysisOps, TranslationOps};

/// OPTIONSプリフライト成功時のメッセージ
const PREFLIGHT_MESSAGE: &str = "CORS preflight successful";

/// 受信イベントを各ハンドラーにディスパッチするルーター
pub struct Router<L, C, T>
where
    L: LabelDetectionOps,
    C: TextAnalysisOps,
    T: TranslationOps,
{
    /// 画像ラベル検出ハンドラー
    image: ImageAnalysisHandler<L>,
    /// 感情分析ハンドラー
    sentiment: SentimentHandler<C>,
    /// 翻訳ハンドラー
    translation: TranslationHandler<T>,
    /// 音声合成ハンドラー（プレースホルダー）
    synthesis: SynthesisHandler,
    /// 言語検出ハンドラー
    language_detection: LanguageDetectionHandler<C>,
}

impl<L, C, T> Router<L, C, T>
where
    L: LabelDetectionOps,
    C: TextAnalysisOps + Clone,
    T: TranslationOps,
{
    /// 新しいRouterを作成
    ///
    /// テキスト分析操作は感情分析と言語検出の両ハンドラーで共有する。
    pub fn new(label_ops: L, text_ops: C, translation_ops: T) -> Self {
        Self {
            image: ImageAnalysisHandler::new(label_ops),
            sentiment: SentimentHandler::new(text_ops.clone()),
            translation: TranslationHandler::new(translation_ops),
            synthesis: SynthesisHandler::new(),
            language_detection: LanguageDetectionHandler::new(text_ops),
        }
    }

    /// 受信イベントを処理して統一レスポンスを返す
    pub async fn handle(&self, event: &Value) -> ApiResponse {
        let http_method = event
            .get("httpMethod")
            .and_then(|m| m.as_str())
            .unwrap_or("");
        let path = event.get("path").and_then(|p| p.as_str()).unwrap_or("");

        info!(http_method = http_method, path = path, "リクエスト受信");

        // CORSプリフライトは正規化・ディスパッチの前に処理する
        if http_method == "OPTIONS" {
            return ApiResponse::ok(&serde_json::json!({ "message": PREFLIGHT_MESSAGE }));
        }

        let payload = match RequestPayload::from_event(event) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(path = path, "リクエストボディの正規化に失敗");
                return ApiResponse::error(400, &err.to_string());
            }
        };

        match Route::match_path(path) {
            Some(Route::ImageAnalyze) => self.image.handle(&payload).await,
            Some(Route::Analyze) => self.sentiment.handle(&payload).await,
            Some(Route::Translate) => self.translation.handle(&payload).await,
            Some(Route::Polly) => self.synthesis.handle(&payload).await,
            Some(Route::DetectLanguage) => self.language_detection.handle(&payload).await,
            None => {
                warn!(path = path, "未知のエンドポイント");
                ApiResponse::error(404, &format!("Endpoint not found: {}", path))
            }
        }
    }
}
