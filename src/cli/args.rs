// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
///
/// The positional is collected as a list so that a wrong count is reported
/// with our own usage text instead of clap's.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "num_words",
    version = crate::VERSION,
    about = "整数をロシア語の数詞に変換するツール"
)]
pub struct Args {
    /// 変換する整数（int64、負数も可）
    #[arg(value_name = "NUMBER", num_args = 0.., allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 辞書ファイル（JSON / YAML）。省略時は組み込みのロシア語辞書
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "辞書")]
    pub dictionary: Option<PathBuf>,

    /// デバッグログを標準エラーに出力
    #[arg(short, long)]
    pub verbose: bool,
}
