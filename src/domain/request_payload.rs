/// リクエストペイロードの正規化
///
/// 受信イベントは3つの形を取り得る:
/// - プロキシ統合: bodyフィールドにJSON文字列
/// - 構造化済み: bodyフィールドに既にオブジェクト
/// - 直接呼び出し/テストイベント: bodyフィールドなし（イベント全体がペイロード）
///
/// この判定はここで一度だけ行い、下流のハンドラーには正規化済みの
/// ペイロードだけを渡す。
use serde_json::Value;
use thiserror::Error;

/// デフォルトの翻訳先言語コード
pub const DEFAULT_TARGET_LANGUAGE: &str = "es";

/// デフォルトの音声合成言語コード
pub const DEFAULT_SYNTHESIS_LANGUAGE: &str = "en";

/// 正規化エラー
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NormalizeError {
    /// bodyがJSON文字列としてパースできない
    /// （フィールド欠落とは別のエラーとして扱う）
    #[error("Invalid JSON in request body")]
    MalformedBody,
}

/// 正規化済みリクエストペイロード
///
/// キー名は受信イベントのまま透過する。フィールドの取得は
/// 「非空文字列のみ有効」の規約で行う（空文字列は欠落と同義）。
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPayload {
    fields: Value,
}

impl RequestPayload {
    /// 受信イベントからペイロードを正規化する
    ///
    /// bodyが非空文字列ならJSONとしてパースし、失敗時は
    /// `NormalizeError::MalformedBody` を返す。bodyが既にオブジェクトなら
    /// そのまま使用する。bodyが欠落または空（空文字列・空オブジェクト等）の
    /// 場合はイベント全体をペイロードとして扱い、プロキシ封筒を持たない
    /// 直接呼び出しをサポートする。
    pub fn from_event(event: &Value) -> Result<Self, NormalizeError> {
        let fields = match event.get("body") {
            Some(body) if is_truthy(body) => match body {
                Value::String(raw) => {
                    serde_json::from_str(raw).map_err(|_| NormalizeError::MalformedBody)?
                }
                other => other.clone(),
            },
            _ => event.clone(),
        };

        Ok(Self { fields })
    }

    /// 明示的なフィールド値からペイロードを作成（テスト用）
    pub fn from_fields(fields: Value) -> Self {
        Self { fields }
    }

    /// 文字列フィールドを取得（空文字列は欠落として扱う）
    fn get_str(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }

    /// 分析・翻訳・合成対象のテキスト
    pub fn text(&self) -> Option<&str> {
        self.get_str("text")
    }

    /// 画像が格納されたS3バケット名
    pub fn bucket(&self) -> Option<&str> {
        self.get_str("bucket")
    }

    /// 画像のS3オブジェクトキー
    pub fn key(&self) -> Option<&str> {
        self.get_str("key")
    }

    /// 翻訳先言語コード（省略時は `es`）
    pub fn target_language(&self) -> &str {
        self.get_str("targetLanguage")
            .unwrap_or(DEFAULT_TARGET_LANGUAGE)
    }

    /// 音声合成言語コード（省略時は `en`）
    pub fn language(&self) -> &str {
        self.get_str("language")
            .unwrap_or(DEFAULT_SYNTHESIS_LANGUAGE)
    }
}

/// JSON値の「真」判定
///
/// null・false・0・空文字列・空配列・空オブジェクトを偽とする。
/// bodyフィールドのフォールバック判定はこの規約に従う。
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
