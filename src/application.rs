// アプリケーション層モジュール
pub mod image_analysis_handler;
pub mod language_detection_handler;
pub mod router;
pub mod sentiment_handler;
pub mod synthesis_handler;
pub mod translation_handler;

// 再エクスポート
pub use image_analysis_handler::ImageAnalysisHandler;
pub use language_detection_handler::LanguageDetectionHandler;
pub use router::Router;
pub use sentiment_handler::{SentimentHandler, SENTIMENT_LANGUAGE_CODE};
pub use synthesis_handler::{SynthesisHandler, PLACEHOLDER_AUDIO_URL};
pub use translation_handler::TranslationHandler;
