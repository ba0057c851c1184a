/// AWS AIサービスクライアント設定
///
/// Rekognition・Comprehend・Translateのクライアントを一括で構築して保持する。
/// クライアントはリクエスト固有の可変状態を持たず読み取り専用であり、
/// warm start時に複数の呼び出し間で安全に再利用できる。
use aws_sdk_comprehend::Client as ComprehendClient;
use aws_sdk_rekognition::Client as RekognitionClient;
use aws_sdk_translate::Client as TranslateClient;

/// AIサービスクライアントを保持する設定
#[derive(Debug, Clone)]
pub struct AiServicesConfig {
    /// Rekognitionクライアント（画像ラベル検出）
    rekognition: RekognitionClient,
    /// Comprehendクライアント（感情分析・言語検出）
    comprehend: ComprehendClient,
    /// Translateクライアント（テキスト翻訳）
    translate: TranslateClient,
}

impl AiServicesConfig {
    /// 環境からAWS設定を読み込んで全クライアントを構築する
    ///
    /// 認証情報・リージョンはaws-configにより自動読み込みされる。
    pub async fn from_env() -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        Self {
            rekognition: RekognitionClient::new(&aws_config),
            comprehend: ComprehendClient::new(&aws_config),
            translate: TranslateClient::new(&aws_config),
        }
    }

    /// 明示的なクライアントで新しいAiServicesConfigを作成（テスト用）
    pub fn new(
        rekognition: RekognitionClient,
        comprehend: ComprehendClient,
        translate: TranslateClient,
    ) -> Self {
        Self {
            rekognition,
            comprehend,
            translate,
        }
    }

    /// Rekognitionクライアントへの参照を取得
    pub fn rekognition(&self) -> &RekognitionClient {
        &self.rekognition
    }

    /// Comprehendクライアントへの参照を取得
    pub fn comprehend(&self) -> &ComprehendClient {
        &self.comprehend
    }

    /// Translateクライアントへの参照を取得
    pub fn translate(&self) -> &TranslateClient {
        &self.translate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 明示的なクライアントでAiServicesConfigを構築できる
    #[tokio::test]
    async fn test_config_new_and_getters() {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        let config = AiServicesConfig::new(
            RekognitionClient::new(&aws_config),
            ComprehendClient::new(&aws_config),
            TranslateClient::new(&aws_config),
        );

        // すべてのゲッターが参照を返すことを確認（ネットワークアクセスはしない）
        let _rekognition = config.rekognition();
        let _comprehend = config.comprehend();
        let _translate = config.translate();
    }

    /// 設定がCloneできること（warm start時の再利用を想定）
    #[tokio::test]
    async fn test_config_is_cloneable() {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        let config = AiServicesConfig::new(
            RekognitionClient::new(&aws_config),
            ComprehendClient::new(&aws_config),
            TranslateClient::new(&aws_config),
        );

        let cloned = config.clone();
        let _ = cloned.rekognition();
    }
}
