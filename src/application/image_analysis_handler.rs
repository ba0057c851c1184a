/// 画像ラベル検出ハンドラー
///
/// `bucket` と `key` で指定されたS3上の画像に対してラベル検出を実行し、
/// ラベル名と信頼度（小数2桁のパーセント文字列）のリストを返す。
use serde::Serialize;
use tracing::error;

use crate::domain::{ApiResponse, RequestPayload};
use crate::infrastructure::LabelDetectionOps;

/// レスポンス内の1ラベル
///
/// キー名と信頼度のパーセント文字列表現はダウンストリーム規約をそのまま透過する。
#[derive(Debug, Clone, Serialize)]
struct LabelSummary {
    /// ラベル名
    #[serde(rename = "Name")]
    name: String,
    /// 信頼度（例: "87.35%"）
    #[serde(rename = "Confidence")]
    confidence: String,
}

/// 画像分析の成功レスポンスボディ
#[derive(Debug, Clone, Serialize)]
struct ImageAnalysisResult {
    labels: Vec<LabelSummary>,
}

/// 画像ラベル検出を処理するハンドラー
pub struct ImageAnalysisHandler<L>
where
    L: LabelDetectionOps,
{
    /// ラベル検出操作
    label_ops: L,
}

impl<L> ImageAnalysisHandler<L>
where
    L: LabelDetectionOps,
{
    /// 新しいImageAnalysisHandlerを作成
    pub fn new(label_ops: L) -> Self {
        Self { label_ops }
    }

    /// ペイロードを検証し、ラベル検出を実行してレスポンスを生成する
    ///
    /// バリデーション失敗時はリモート呼び出しを行わずに400を返す。
    /// リモート呼び出しの失敗はエラーテキストを載せた500に変換する。
    pub async fn handle(&self, payload: &RequestPayload) -> ApiResponse {
        let (Some(bucket), Some(key)) = (payload.bucket(), payload.key()) else {
            return ApiResponse::error(400, "Missing bucket or key");
        };

        match self.label_ops.detect_labels(bucket, key).await {
            Ok(labels) => {
                let labels = labels
                    .into_iter()
                    .map(|label| LabelSummary {
                        name: label.name,
                        confidence: format!("{:.2}%", label.confidence),
                    })
                    .collect();

                ApiResponse::ok(&ImageAnalysisResult { labels })
            }
            Err(err) => {
                error!(error = %err, "ラベル検出に失敗");
                ApiResponse::error(500, &err.to_string())
            }
        }
    }
}
