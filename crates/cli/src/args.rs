// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::options::OutputFormat;
use crate::parsers::{TimestampArg, parse_charset_name};
use charset_registry_core::DEFAULT_SOURCE_URL;
use charset_registry_core::config::DEFAULT_TABLE_NAME;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "iana-charsets",
    version = crate::VERSION,
    about = "IANA character-sets registry を INI / C テーブル / JSON に変換します"
)]
pub struct Args {
    /// IANA registry テキスト（省略時: data/iana-charsets.txt）
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// 出力フォーマット
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ini, help_heading = "出力")]
    pub format: OutputFormat,

    /// `--format table` で使う配列名（C 識別子）
    #[arg(long, default_value = DEFAULT_TABLE_NAME, help_heading = "出力")]
    pub table_name: String,

    /// ヘッダに書く生成日時（RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD`）。省略時は現在時刻
    #[arg(long, help_heading = "出力")]
    pub timestamp: Option<TimestampArg>,

    /// ヘッダに記載する registry の URL
    #[arg(long, default_value = DEFAULT_SOURCE_URL, help_heading = "出力")]
    pub source_url: String,

    /// INPUT を `--format ini` で生成した INI ファイルとして読む
    #[arg(long, help_heading = "入力")]
    pub from_conf: bool,

    /// 名前・MIME 名・別名が一致する文字セットのみ出力（大文字小文字を区別しない）
    #[arg(long, value_parser = parse_charset_name, help_heading = "入力")]
    pub lookup: Option<String>,

    /// 指定ファイルの文字セットを推定して出力（宣言 → BOM → UTF-8 → ISO-8859-1）
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "lookup", help_heading = "入力")]
    pub detect: Option<PathBuf>,

    /// 解析の詳細を stderr に出力（`RUST_LOG` が優先）
    #[arg(short, long)]
    pub verbose: bool,
}
