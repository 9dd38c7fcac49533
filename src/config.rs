// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use file_classify_domain::{
    EntryFilter, FileClassifier,
    options::{OutputFormat, OutputMode, SortKey, TestFilter},
};
use file_classify_infra::OutputOptions;
use file_classify_ports::filesystem::EnumerationPlan;
use file_classify_shared_kernel::{ClassifyError, PresentationError, error::DomainResult};
use file_classify_usecase::ClassifyRequest;

use crate::cli::Args;

/// Immutable run configuration resolved from [`Args`].
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub plan: EnumerationPlan,
    #[builder(default)]
    pub filter: EntryFilter,
    #[builder(default)]
    pub sort: Vec<(SortKey, bool)>,
    #[builder(default)]
    pub top: Option<usize>,
    /// Replacement for the built-in test-segment regex.
    #[builder(default)]
    pub test_pattern: Option<String>,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub mode: OutputMode,
    #[builder(default)]
    pub output_path: Option<PathBuf>,
}

impl Config {
    pub fn classifier(&self) -> DomainResult<FileClassifier> {
        FileClassifier::with_test_pattern(self.test_pattern.as_deref())
    }

    pub fn request(&self) -> ClassifyRequest {
        ClassifyRequest {
            plan: self.plan.clone(),
            filter: self.filter.clone(),
            sort: self.sort.clone(),
            top: self.top,
        }
    }

    pub fn output_options(&self) -> OutputOptions {
        OutputOptions { format: self.format, mode: self.mode, output: self.output_path.clone() }
    }
}

impl TryFrom<Args> for Config {
    type Error = ClassifyError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let plan = plan_from_args(&args);
        let filter = EntryFilter {
            tests: test_filter(&args),
            extensions: args.filter.ext,
            include_dirs: args.filter.include_dirs,
        };

        ConfigBuilder::default()
            .plan(plan)
            .filter(filter)
            .sort(args.output.sort.0)
            .top(args.output.top)
            .test_pattern(args.filter.test_pattern)
            .format(OutputFormat::from(args.output.format))
            .mode(OutputMode::from(args.output.mode))
            .output_path(args.output.output)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
    }
}

fn test_filter(args: &Args) -> TestFilter {
    match (args.filter.tests, args.filter.no_tests) {
        (true, _) => TestFilter::Only,
        (false, true) => TestFilter::Exclude,
        (false, false) => TestFilter::All,
    }
}

fn plan_from_args(args: &Args) -> EnumerationPlan {
    let roots = if args.paths.is_empty() && args.scan.files_from.is_none() && args.scan.files_from0.is_none() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    EnumerationPlan {
        roots,
        include_hidden: args.scan.hidden,
        respect_gitignore: !args.scan.no_gitignore,
        follow_links: args.scan.follow,
        max_depth: args.scan.max_depth,
        include_dirs: args.filter.include_dirs,
        include_globs: args.filter.include.clone(),
        exclude_globs: args.filter.exclude.clone(),
        files_from: args.scan.files_from.clone(),
        files_from0: args.scan.files_from0.clone(),
        literal: args.scan.literal,
        walk_threads: args.scan.walk_threads.unwrap_or_else(num_cpus::get),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use file_classify_domain::ExtensionTag;

    use super::*;

    fn config(argv: &[&str]) -> Config {
        let mut full = vec!["file_classify"];
        full.extend_from_slice(argv);
        Config::try_from(Args::parse_from(full)).expect("config builds")
    }

    #[test]
    fn defaults_walk_current_directory() {
        let config = config(&[]);
        assert_eq!(config.plan.roots, vec![PathBuf::from(".")]);
        assert!(config.plan.respect_gitignore);
        assert!(!config.plan.include_hidden);
        assert_eq!(config.plan.walk_threads, num_cpus::get());
        assert_eq!(config.filter, EntryFilter::default());
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.mode, OutputMode::Full);
    }

    #[test]
    fn files_from_replaces_default_root() {
        let config = config(&["--files-from", "list.txt"]);
        assert!(config.plan.roots.is_empty());
        assert_eq!(config.plan.files_from, Some(PathBuf::from("list.txt")));
    }

    #[test]
    fn test_flags_map_to_filter() {
        assert_eq!(config(&["--tests"]).filter.tests, TestFilter::Only);
        assert_eq!(config(&["--no-tests"]).filter.tests, TestFilter::Exclude);
    }

    #[test]
    fn include_dirs_reaches_plan_and_filter() {
        let config = config(&["--include-dirs", "--ext", "go"]);
        assert!(config.plan.include_dirs);
        assert!(config.filter.include_dirs);
        assert_eq!(config.filter.extensions, vec![ExtensionTag::Go]);
    }

    #[test]
    fn scan_flags_are_forwarded() {
        let config = config(&[
            "--hidden",
            "--no-gitignore",
            "--follow",
            "--max-depth",
            "2",
            "--walk-threads",
            "3",
            "--literal",
            "--exclude",
            "target,*.lock",
            "a/",
        ]);
        assert!(config.plan.include_hidden);
        assert!(!config.plan.respect_gitignore);
        assert!(config.plan.follow_links);
        assert_eq!(config.plan.max_depth, Some(2));
        assert_eq!(config.plan.walk_threads, 3);
        assert!(config.plan.literal);
        assert_eq!(config.plan.exclude_globs, ["target", "*.lock"]);
        assert_eq!(config.plan.roots, vec![PathBuf::from("a/")]);
    }

    #[test]
    fn output_options_follow_flags() {
        let config = config(&["--format", "jsonl", "--mode", "summary", "--output", "out/report.jsonl"]);
        let options = config.output_options();
        assert_eq!(options.format, OutputFormat::Jsonl);
        assert_eq!(options.mode, OutputMode::Summary);
        assert_eq!(options.output, Some(PathBuf::from("out/report.jsonl")));
    }

    #[test]
    fn invalid_test_pattern_surfaces_when_building_classifier() {
        let config = config(&["--test-pattern", "("]);
        assert!(config.classifier().is_err());
        assert!(config_with_default_pattern().classifier().is_ok());
    }

    fn config_with_default_pattern() -> Config {
        ConfigBuilder::default().build().expect("all fields default")
    }
}
