// ドメイン層モジュール
pub mod api_response;
pub mod request_payload;
pub mod route;

// 再エクスポート
pub use api_response::ApiResponse;
pub use request_payload::{NormalizeError, RequestPayload};
pub use route::Route;
