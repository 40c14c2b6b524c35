use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// INI 形式の設定ファイル
    #[default]
    Ini,
    /// C の配列初期化コード
    Table,
    /// JSON ドキュメント
    Json,
}
