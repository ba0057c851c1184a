//! Rekognition操作モジュール
//!
//! S3上の画像に対するラベル検出を提供する。
//! - 検出ラベル数の上限と信頼度の下限は固定の設定値
//! - SDKエラーはエラーテキストを保持したまま単一のエラー型に正規化

use async_trait::async_trait;
use aws_sdk_rekognition::types::{Image, S3Object};
use aws_sdk_rekognition::Client as RekognitionClient;
use thiserror::Error;
use tracing::info;

/// 検出ラベル数の上限
pub const MAX_LABELS: i32 = 5;

/// 検出ラベルの最低信頼度（パーセント）
pub const MIN_CONFIDENCE: f32 = 70.0;

/// Rekognition操作のエラー型
#[derive(Debug, Error)]
pub enum RekognitionOpsError {
    /// AWS SDK エラー
    #[error("Rekognition API error: {0}")]
    AwsSdkError(String),
}

/// 検出されたラベル
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLabel {
    /// ラベル名
    pub name: String,
    /// 信頼度（0〜100のパーセント値）
    pub confidence: f32,
}

/// ラベル検出操作トレイト（テスト用の抽象化）
#[async_trait]
pub trait LabelDetectionOps: Send + Sync {
    /// S3上の画像に対してラベル検出を実行する
    ///
    /// # 引数
    /// * `bucket` - S3バケット名
    /// * `key` - S3オブジェクトキー
    ///
    /// # 戻り値
    /// * `Ok(Vec<DetectedLabel>)` - 検出されたラベルのリスト
    /// * `Err(RekognitionOpsError)` - エラー
    async fn detect_labels(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Vec<DetectedLabel>, RekognitionOpsError>;
}

/// 実際のAWS Rekognition SDKを使用したラベル検出実装
#[derive(Debug, Clone)]
pub struct AwsRekognitionOps {
    client: RekognitionClient,
    /// 検出ラベル数の上限
    max_labels: i32,
    /// 検出ラベルの最低信頼度
    min_confidence: f32,
}

impl AwsRekognitionOps {
    /// 新しいAwsRekognitionOpsを作成
    pub fn new(client: RekognitionClient) -> Self {
        Self {
            client,
            max_labels: MAX_LABELS,
            min_confidence: MIN_CONFIDENCE,
        }
    }

    /// ラベル数の上限を設定
    pub fn with_max_labels(mut self, max_labels: i32) -> Self {
        self.max_labels = max_labels;
        self
    }

    /// 最低信頼度を設定
    pub fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.min_confidence = min_confidence;
        self
    }
}

#[async_trait]
impl LabelDetectionOps for AwsRekognitionOps {
    async fn detect_labels(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Vec<DetectedLabel>, RekognitionOpsError> {
        info!(bucket = bucket, key = key, "ラベル検出を実行");

        let image = Image::builder()
            .s3_object(S3Object::builder().bucket(bucket).name(key).build())
            .build();

        let response = self
            .client
            .detect_labels()
            .image(image)
            .max_labels(self.max_labels)
            .min_confidence(self.min_confidence)
            .send()
            .await
            .map_err(|e| RekognitionOpsError::AwsSdkError(e.to_string()))?;

        // 名前のないラベルは結果から除外する
        let labels = response
            .labels()
            .iter()
            .filter_map(|label| {
                label.name().map(|name| DetectedLabel {
                    name: name.to_string(),
                    confidence: label.confidence().unwrap_or(0.0),
                })
            })
            .collect();

        Ok(labels)
    }
}
