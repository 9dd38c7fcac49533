// src/cli/args_groups.rs
//! Sub-structures for organizing CLI arguments into logical groups.

use std::path::PathBuf;

use clap::Args;
use file_classify_domain::{ExtensionTag, options::SortSpec};

use super::{
    parsers,
    value_enum::{CliOutputFormat, CliOutputMode},
};

/// Output-related options
#[derive(Args, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 出力モード (full: 一覧 + サマリー, summary: 拡張子別サマリーのみ)
    #[arg(long, value_enum, default_value = "full", help_heading = "出力")]
    pub mode: CliOutputMode,

    /// ソートキー（複数可, 例: ext,test:desc,path）
    #[arg(long, default_value = "path", help_heading = "出力")]
    pub sort: SortSpec,

    /// 上位N件のみ表示（一覧）。サマリーは絞り込み前の全件で集計
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "出力")]
    pub top: Option<usize>,

    /// 出力先ファイル（未指定は標準出力）
    #[arg(long, value_hint = clap::ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,
}

/// Filter-related options
#[derive(Args, Debug)]
pub struct FilterOptions {
    /// 拡張子カテゴリで絞り込み（カンマ区切り/複数指定可, 例: --ext rs,ts --ext default）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub ext: Vec<ExtensionTag>,

    /// テストファイルのみ
    #[arg(long, conflicts_with = "no_tests", help_heading = "フィルタ")]
    pub tests: bool,

    /// テストファイルを除外
    #[arg(long, help_heading = "フィルタ")]
    pub no_tests: bool,

    /// テスト判定の正規表現を差し替え（パスを `.` で分割した各セグメントに適用）
    #[arg(long, value_name = "REGEX", help_heading = "フィルタ")]
    pub test_pattern: Option<String>,

    /// 含めるパターン（glob, カンマ区切り/複数指定可）。`/` を含まない場合はファイル名に適用
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub include: Vec<String>,

    /// 除外するパターン（glob, カンマ区切り/複数指定可）。include より優先
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub exclude: Vec<String>,

    /// ディレクトリも一覧に含める（常に default / 非テスト）
    #[arg(long, help_heading = "フィルタ")]
    pub include_dirs: bool,
}

/// Scanning / input-related options
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScanOptions {
    /// 走査時に隠しファイルも対象（--files-from/--literal で明示したパスは常に対象）
    #[arg(long, help_heading = "走査/入力")]
    pub hidden: bool,

    /// .gitignore 等を無視する
    #[arg(long, help_heading = "走査/入力")]
    pub no_gitignore: bool,

    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査/入力")]
    pub follow: bool,

    /// 走査の最大深さ
    #[arg(long, help_heading = "走査/入力")]
    pub max_depth: Option<usize>,

    /// ファイルリストから入力（改行区切り, `-` で標準入力）
    #[arg(long, value_hint = clap::ValueHint::FilePath, help_heading = "走査/入力")]
    pub files_from: Option<PathBuf>,

    /// ファイルリストから入力（NUL区切り, `-` で標準入力）
    #[arg(long, value_hint = clap::ValueHint::FilePath, help_heading = "走査/入力")]
    pub files_from0: Option<PathBuf>,

    /// パスを文字列として扱いディスクを参照しない（末尾 `/` はディレクトリ）
    #[arg(long, help_heading = "走査/入力")]
    pub literal: bool,

    /// 走査スレッド数（未指定は CPU 数）
    #[arg(long, value_parser = parsers::parse_usize_1_to_512, help_heading = "走査/入力")]
    pub walk_threads: Option<usize>,
}

/// Logging verbosity
#[derive(Args, Debug)]
pub struct LoggingOptions {
    /// ログを詳細に（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "ログ")]
    pub verbose: u8,

    /// エラーのみ出力
    #[arg(short, long, conflicts_with = "verbose", help_heading = "ログ")]
    pub quiet: bool,
}
