// src/app.rs
use file_classify_infra::{PlanPathEnumerator, emit};
use file_classify_shared_kernel::{ErrorContext, Result};
use file_classify_usecase::{ClassifyOutput, ClassifyPaths};

use crate::config::Config;

/// Enumerate and classify without writing anything.
pub fn classify_paths(config: &Config) -> Result<ClassifyOutput> {
    let classifier = config.classifier().context("invalid --test-pattern")?;
    let enumerator = PlanPathEnumerator::new();
    let output = ClassifyPaths::new(&enumerator, &classifier).run(&config.request())?;
    log::info!(
        "classified {} files ({} tests, {} dirs)",
        output.summary.files,
        output.summary.tests,
        output.summary.dirs
    );
    Ok(output)
}

/// Full run: classify, then render to the configured destination.
pub fn run(config: &Config) -> Result<()> {
    let output = classify_paths(config)?;
    emit(&output.entries, &output.summary, &config.output_options()).context("failed to write results")
}
