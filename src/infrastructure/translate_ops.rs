//! Translate操作モジュール
//!
//! テキスト翻訳を提供する。翻訳元言語は常に自動検出（auto）で、
//! 翻訳先言語は呼び出しごとに指定する。

use async_trait::async_trait;
use aws_sdk_translate::Client as TranslateClient;
use thiserror::Error;
use tracing::info;

/// 翻訳元言語コード（常に自動検出）
const SOURCE_LANGUAGE_AUTO: &str = "auto";

/// Translate操作のエラー型
#[derive(Debug, Error)]
pub enum TranslateOpsError {
    /// AWS SDK エラー
    #[error("Translate API error: {0}")]
    AwsSdkError(String),
}

/// 翻訳操作トレイト（テスト用の抽象化）
#[async_trait]
pub trait TranslationOps: Send + Sync {
    /// テキストを指定した言語に翻訳する
    ///
    /// # 引数
    /// * `text` - 翻訳対象テキスト
    /// * `target_language` - 翻訳先言語コード
    ///
    /// # 戻り値
    /// * `Ok(String)` - 翻訳されたテキスト
    /// * `Err(TranslateOpsError)` - エラー
    async fn translate_text(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslateOpsError>;
}

/// 実際のAWS Translate SDKを使用した翻訳実装
#[derive(Debug, Clone)]
pub struct AwsTranslateOps {
    client: TranslateClient,
}

impl AwsTranslateOps {
    /// 新しいAwsTranslateOpsを作成
    pub fn new(client: TranslateClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TranslationOps for AwsTranslateOps {
    async fn translate_text(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslateOpsError> {
        info!(target_language = target_language, "翻訳を実行");

        let response = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(SOURCE_LANGUAGE_AUTO)
            .target_language_code(target_language)
            .send()
            .await
            .map_err(|e| TranslateOpsError::AwsSdkError(e.to_string()))?;

        Ok(response.translated_text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// エラー型がSDKのエラーテキストを保持する
    #[test]
    fn test_aws_sdk_error_display() {
        let error = TranslateOpsError::AwsSdkError("unsupported language pair".to_string());
        assert_eq!(
            error.to_string(),
            "Translate API error: unsupported language pair"
        );
    }
}
