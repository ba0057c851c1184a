/// AI Gateway Lambdaエントリポイント
///
/// API Gatewayプロキシ統合のイベントを受け取り、パスに応じて
/// Rekognition / Comprehend / Translateの各ハンドラーにディスパッチする。
/// レスポンスは常にCORSヘッダー付きのプロキシ統合形式。
use ai_gateway::application::Router;
use ai_gateway::infrastructure::{
    init_logging, AiServicesConfig, AwsComprehendOps, AwsRekognitionOps, AwsTranslateOps,
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::info;

/// Routerの静的インスタンス
///
/// Lambda warm start時にAWSクライアントを再利用するため、
/// 一度構築したルーターを静的に保持する。クライアントは
/// リクエスト固有の状態を持たず、並行呼び出し間で安全に共有できる。
static ROUTER: OnceCell<Router<AwsRekognitionOps, AwsComprehendOps, AwsTranslateOps>> =
    OnceCell::const_new();

/// Routerを取得（初期化されていなければ初期化）
async fn get_router() -> &'static Router<AwsRekognitionOps, AwsComprehendOps, AwsTranslateOps> {
    ROUTER
        .get_or_init(|| async {
            let config = AiServicesConfig::from_env().await;

            Router::new(
                AwsRekognitionOps::new(config.rekognition().clone()),
                AwsComprehendOps::new(config.comprehend().clone()),
                AwsTranslateOps::new(config.translate().clone()),
            )
        })
        .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("AI Gateway Lambda関数を初期化");

    // Lambda関数を実行
    lambda_runtime::run(service_fn(handler)).await
}

/// Lambda関数のメインハンドラー
///
/// どのコードパスでもプロキシ統合形式のレスポンスを返し、
/// 失敗をLambdaランタイムに伝播させない。
async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let router = get_router().await;
    let response = router.handle(&event.payload).await;

    Ok(response.to_value())
}
