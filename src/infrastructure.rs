// インフラストラクチャ層モジュール
pub mod comprehend_ops;
pub mod config;
pub mod logging;
pub mod rekognition_ops;
pub mod translate_ops;

// 再エクスポート
pub use comprehend_ops::{
    AwsComprehendOps, ComprehendOpsError, DetectedLanguage, SentimentAnalysis, SentimentScores,
    TextAnalysisOps,
};
pub use config::AiServicesConfig;
pub use logging::init_logging;
pub use rekognition_ops::{AwsRekognitionOps, DetectedLabel, LabelDetectionOps, RekognitionOpsError};
pub use translate_ops::{AwsTranslateOps, TranslateOpsError, TranslationOps};
