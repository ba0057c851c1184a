/// 感情分析ハンドラー
///
/// `text` に対して感情分析を実行し、感情ラベルとクラスごとのスコアを返す。
/// 分析言語コードは常に固定値 `en` を使用する（言語検出の結果とは
/// 連動させない）。
use serde::Serialize;
use tracing::error;

use crate::domain::{ApiResponse, RequestPayload};
use crate::infrastructure::{SentimentScores, TextAnalysisOps};

/// 感情分析に使用する固定の言語コード
pub const SENTIMENT_LANGUAGE_CODE: &str = "en";

/// 感情分析の成功レスポンスボディ
#[derive(Debug, Clone, Serialize)]
struct SentimentResult {
    /// 感情ラベル
    sentiment: String,
    /// クラスごとのスコア
    #[serde(rename = "sentimentScore")]
    sentiment_score: SentimentScores,
}

/// 感情分析を処理するハンドラー
pub struct SentimentHandler<C>
where
    C: TextAnalysisOps,
{
    /// テキスト分析操作
    text_ops: C,
}

impl<C> SentimentHandler<C>
where
    C: TextAnalysisOps,
{
    /// 新しいSentimentHandlerを作成
    pub fn new(text_ops: C) -> Self {
        Self { text_ops }
    }

    /// ペイロードを検証し、感情分析を実行してレスポンスを生成する
    pub async fn handle(&self, payload: &RequestPayload) -> ApiResponse {
        let Some(text) = payload.text() else {
            return ApiResponse::error(400, "Missing text parameter");
        };

        match self
            .text_ops
            .detect_sentiment(text, SENTIMENT_LANGUAGE_CODE)
            .await
        {
            Ok(analysis) => ApiResponse::ok(&SentimentResult {
                sentiment: analysis.sentiment,
                sentiment_score: analysis.scores,
            }),
            Err(err) => {
                error!(error = %err, "感情分析に失敗");
                ApiResponse::error(500, &err.to_string())
            }
        }
    }
}
