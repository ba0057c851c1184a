/// API Gatewayプロキシ統合レスポンス
///
/// すべてのコードパスが最終的にこの形に収束する。
/// ステータスコード・固定CORSヘッダー・JSONエンコード済みボディを持ち、
/// Lambdaプロキシ統合の規約（statusCode / headers / body）で
/// シリアライズされる。
use serde::Serialize;
use serde_json::{Map, Value};

/// 全レスポンスに付与する固定ヘッダーセット
///
/// ブラウザからのクロスオリジンPOSTを許可するためのCORSヘッダーと
/// Content-Typeを含む。エラーレスポンスにも必ず付与される。
pub const CORS_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    (
        "Access-Control-Allow-Headers",
        "Content-Type, Authorization, X-Amz-Date, X-Api-Key, X-Amz-Security-Token",
    ),
];

/// 統一APIレスポンス
///
/// ヘッダーは常にCORS_HEADERSの4つ、ボディは常にJSON文字列。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    /// HTTPステータスコード
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// レスポンスヘッダー（固定CORSヘッダーセット）
    pub headers: Map<String, Value>,
    /// JSONエンコード済みボディ
    pub body: String,
}

impl ApiResponse {
    /// 任意のステータスコードとシリアライズ可能なボディからレスポンスを作成
    pub fn new<T: Serialize>(status_code: u16, body: &T) -> Self {
        let body =
            serde_json::to_string(body).expect("レスポンスボディのシリアライズに失敗");

        Self {
            status_code,
            headers: cors_headers(),
            body,
        }
    }

    /// 200レスポンスを作成
    pub fn ok<T: Serialize>(body: &T) -> Self {
        Self::new(200, body)
    }

    /// エラーレスポンスを作成
    ///
    /// ボディは常に `{"error": "<message>"}` の形を取る。
    pub fn error(status_code: u16, message: &str) -> Self {
        Self::new(status_code, &serde_json::json!({ "error": message }))
    }

    /// プロキシ統合形式のJSON値に変換
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).expect("ApiResponseのシリアライズに失敗")
    }
}

/// 固定CORSヘッダーセットをヘッダーマップとして生成
fn cors_headers() -> Map<String, Value> {
    CORS_HEADERS
        .iter()
        .map(|(name, value)| ((*name).to_string(), Value::String((*value).to_string())))
        .collect()
}
