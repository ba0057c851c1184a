/// パスベースのルーティングテーブル
///
/// 受信パスの部分文字列マッチでディスパッチ先を決定する。
/// テーブルは優先順に評価され、最初にマッチしたルートが勝つ。
/// `image-analyze` を `analyze` より先に評価する順序は契約であり、
/// `/ai/image-analyze` は `analyze` を含んでいても必ず画像ルートに解決する。

/// ディスパッチ先ルート
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// 画像ラベル検出（Rekognition）
    ImageAnalyze,
    /// 感情分析（Comprehend）
    Analyze,
    /// テキスト翻訳（Translate）
    Translate,
    /// 音声合成（プレースホルダー）
    Polly,
    /// 言語検出（Comprehend）
    DetectLanguage,
}

/// 優先順のルートテーブル
///
/// 順序に意味がある: image-analyzeはanalyzeの部分文字列を含むため先頭。
const ROUTE_TABLE: [(&str, Route); 5] = [
    ("image-analyze", Route::ImageAnalyze),
    ("analyze", Route::Analyze),
    ("translate", Route::Translate),
    ("polly", Route::Polly),
    ("detect-language", Route::DetectLanguage),
];

impl Route {
    /// パスからルートを解決する
    ///
    /// テーブルを優先順に走査し、パスにパターンを部分文字列として
    /// 含む最初のルートを返す。どれにもマッチしなければNone。
    pub fn match_path(path: &str) -> Option<Route> {
        ROUTE_TABLE
            .iter()
            .find(|(pattern, _)| path.contains(*pattern))
            .map(|(_, route)| *route)
    }
}
