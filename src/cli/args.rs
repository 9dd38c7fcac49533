// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::args_groups::{FilterOptions, LoggingOptions, OutputOptions, ScanOptions};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "file_classify",
    version = crate::VERSION,
    about = "ファイルパスの拡張子カテゴリ/テストファイル判定ツール",
    group(
        clap::ArgGroup::new("input_source")
            .args(&["paths", "files_from", "files_from0"])
            .multiple(false)
    )
)]
pub struct Args {
    /// 対象パス（未指定はカレントディレクトリ）
    #[arg(value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub filter: FilterOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub logging: LoggingOptions,
}
