//! Comprehend操作モジュール
//!
//! テキストの感情分析と主要言語検出を提供する。
//! 結果はSDK型から切り離したドメイン所有の構造体で返す。

use async_trait::async_trait;
use aws_sdk_comprehend::types::LanguageCode;
use aws_sdk_comprehend::Client as ComprehendClient;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Comprehend操作のエラー型
#[derive(Debug, Error)]
pub enum ComprehendOpsError {
    /// AWS SDK エラー
    #[error("Comprehend API error: {0}")]
    AwsSdkError(String),
}

/// 感情クラスごとのスコア
///
/// キー名はダウンストリームサービスの応答規約（先頭大文字）をそのまま
/// レスポンスに透過する。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentScores {
    /// ポジティブ
    #[serde(rename = "Positive")]
    pub positive: f32,
    /// ネガティブ
    #[serde(rename = "Negative")]
    pub negative: f32,
    /// ニュートラル
    #[serde(rename = "Neutral")]
    pub neutral: f32,
    /// 混合
    #[serde(rename = "Mixed")]
    pub mixed: f32,
}

/// 感情分析結果
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentAnalysis {
    /// 感情ラベル（POSITIVE / NEGATIVE / NEUTRAL / MIXED）
    pub sentiment: String,
    /// 感情クラスごとのスコア
    pub scores: SentimentScores,
}

/// 検出された言語候補
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLanguage {
    /// 言語コード（例: en, ja）
    pub language_code: String,
    /// スコア（0〜1の生の値。パーセントではない）
    pub score: f32,
}

/// テキスト分析操作トレイト（テスト用の抽象化）
#[async_trait]
pub trait TextAnalysisOps: Send + Sync {
    /// テキストの感情分析を実行する
    ///
    /// # 引数
    /// * `text` - 分析対象テキスト
    /// * `language_code` - 分析言語コード
    async fn detect_sentiment(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<SentimentAnalysis, ComprehendOpsError>;

    /// テキストの主要言語検出を実行する
    ///
    /// 候補はスコアの高い順に返される。候補ゼロもエラーではなく
    /// 空のリストとして返す。
    async fn detect_dominant_language(
        &self,
        text: &str,
    ) -> Result<Vec<DetectedLanguage>, ComprehendOpsError>;
}

/// 実際のAWS Comprehend SDKを使用したテキスト分析実装
#[derive(Debug, Clone)]
pub struct AwsComprehendOps {
    client: ComprehendClient,
}

impl AwsComprehendOps {
    /// 新しいAwsComprehendOpsを作成
    pub fn new(client: ComprehendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TextAnalysisOps for AwsComprehendOps {
    async fn detect_sentiment(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<SentimentAnalysis, ComprehendOpsError> {
        info!(language_code = language_code, "感情分析を実行");

        let response = self
            .client
            .detect_sentiment()
            .text(text)
            .language_code(LanguageCode::from(language_code))
            .send()
            .await
            .map_err(|e| ComprehendOpsError::AwsSdkError(e.to_string()))?;

        let sentiment = response
            .sentiment()
            .map(|s| s.as_str().to_string())
            .unwrap_or_default();

        let scores = match response.sentiment_score() {
            Some(score) => SentimentScores {
                positive: score.positive().unwrap_or(0.0),
                negative: score.negative().unwrap_or(0.0),
                neutral: score.neutral().unwrap_or(0.0),
                mixed: score.mixed().unwrap_or(0.0),
            },
            None => SentimentScores {
                positive: 0.0,
                negative: 0.0,
                neutral: 0.0,
                mixed: 0.0,
            },
        };

        Ok(SentimentAnalysis { sentiment, scores })
    }

    async fn detect_dominant_language(
        &self,
        text: &str,
    ) -> Result<Vec<DetectedLanguage>, ComprehendOpsError> {
        info!("主要言語検出を実行");

        let response = self
            .client
            .detect_dominant_language()
            .text(text)
            .send()
            .await
            .map_err(|e| ComprehendOpsError::AwsSdkError(e.to_string()))?;

        // 言語コードのない候補は結果から除外する
        let languages = response
            .languages()
            .iter()
            .filter_map(|lang| {
                lang.language_code().map(|code| DetectedLanguage {
                    language_code: code.to_string(),
                    score: lang.score().unwrap_or(0.0),
                })
            })
            .collect();

        Ok(languages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// エラー型がSDKのエラーテキストを保持する
    #[test]
    fn test_aws_sdk_error_display() {
        let error = ComprehendOpsError::AwsSdkError("throttled".to_string());
        assert_eq!(error.to_string(), "Comprehend API error: throttled");
    }

    /// スコアがダウンストリーム規約（先頭大文字キー）でシリアライズされる
    #[test]
    fn test_sentiment_scores_serialization_keys() {
        let scores = SentimentScores {
            positive: 0.9,
            negative: 0.05,
            neutral: 0.04,
            mixed: 0.01,
        };

        let value = serde_json::to_value(&scores).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert!(object.contains_key("Positive"));
        assert!(object.contains_key("Negative"));
        assert!(object.contains_key("Neutral"));
        assert!(object.contains_key("Mixed"));
    }

    /// f32スコアがノイズなしでシリアライズされる
    #[test]
    fn test_sentiment_scores_float_roundtrip() {
        let scores = SentimentScores {
            positive: 0.95,
            negative: 0.01,
            neutral: 0.03,
            mixed: 0.01,
        };

        let json = serde_json::to_string(&scores).unwrap();
        assert!(json.contains("0.95"), "unexpected float noise: {}", json);
    }
}
