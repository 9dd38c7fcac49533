use std::{
    collections::HashSet,
    io::BufRead,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use file_classify_ports::filesystem::{EnumerationPlan, PathEntryDto, PathEnumerator};
use file_classify_shared_kernel::{InfrastructureError, Result};
use globset::{Glob, GlobMatcher};
use ignore::WalkBuilder;

use crate::persistence::FileReader;

/// Filesystem adapter implementing the `PathEnumerator` port based on the enumeration plan.
#[derive(Debug, Default)]
pub struct PlanPathEnumerator;

impl PlanPathEnumerator {
    pub fn new() -> Self {
        Self
    }

    pub fn enumerate(plan: &EnumerationPlan) -> Result<Vec<PathEntryDto>> {
        enumerate_plan(plan)
    }
}

impl PathEnumerator for PlanPathEnumerator {
    fn collect(&self, plan: &EnumerationPlan) -> Result<Vec<PathEntryDto>> {
        Self::enumerate(plan)
    }
}

fn enumerate_plan(plan: &EnumerationPlan) -> Result<Vec<PathEntryDto>> {
    let matcher = PathMatcher::new(&plan.include_globs, &plan.exclude_globs)?;

    let entries = match initial_paths(plan)? {
        // Explicit lists keep the order the user supplied.
        Some(paths) if plan.literal => literal_entries(paths, plan, &matcher),
        Some(paths) => materialise_paths(paths, plan, &matcher),
        None if plan.literal => literal_entries(plan.roots.clone(), plan, &matcher),
        None => {
            // Overlapping roots may yield the same path twice.
            let mut walked = walk_roots(plan, &matcher)?;
            walked.sort_by(|a, b| a.path.cmp(&b.path));
            walked.dedup_by(|a, b| a.path == b.path);
            walked
        }
    };

    log::debug!("enumerated {} entries", entries.len());
    Ok(entries)
}

fn initial_paths(plan: &EnumerationPlan) -> Result<Option<Vec<PathBuf>>> {
    if let Some(path) = &plan.files_from0 {
        return read_files_from_null(path).map(Some);
    }
    if let Some(path) = &plan.files_from {
        return read_files_from_lines(path).map(Some);
    }
    Ok(None)
}

/// Inputs are never touched on disk; a trailing separator marks a directory.
fn literal_entries(paths: Vec<PathBuf>, plan: &EnumerationPlan, matcher: &PathMatcher) -> Vec<PathEntryDto> {
    dedup_preserving_order(paths)
        .into_iter()
        .filter_map(|path| {
            let is_dir = has_trailing_separator(&path);
            if is_dir && !plan.include_dirs {
                return None;
            }
            matcher.matches(&path).then_some(PathEntryDto { path, is_dir })
        })
        .collect()
}

/// Named paths are kept even when hidden; `include_hidden` only affects walks.
fn materialise_paths(paths: Vec<PathBuf>, plan: &EnumerationPlan, matcher: &PathMatcher) -> Vec<PathEntryDto> {
    let mut entries = Vec::new();
    for path in dedup_preserving_order(paths) {
        let metadata = if plan.follow_links { std::fs::metadata(&path) } else { std::fs::symlink_metadata(&path) };
        // Classification is string based, so a missing path is still reported as a file.
        let is_dir = match metadata {
            Ok(md) => md.is_dir(),
            Err(err) => {
                log::debug!("cannot stat {}: {err}", path.display());
                false
            }
        };
        if is_dir && !plan.include_dirs {
            continue;
        }
        if matcher.matches(&path) {
            entries.push(PathEntryDto { path, is_dir });
        }
    }
    entries
}

fn dedup_preserving_order(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen: HashSet<PathBuf> = HashSet::with_capacity(paths.len());
    paths.retain(|p| seen.insert(p.clone()));
    paths
}

fn walk_roots(plan: &EnumerationPlan, matcher: &PathMatcher) -> Result<Vec<PathEntryDto>> {
    let matcher = Arc::new(matcher.clone());
    let mut entries = Vec::new();
    for root in &plan.roots {
        let mut root_entries = collect_entries_from_root(root, plan, &matcher)?;
        entries.append(&mut root_entries);
    }
    Ok(entries)
}

// Collect entries for a single root path.
fn collect_entries_from_root(
    root: &Path,
    plan: &EnumerationPlan,
    matcher: &Arc<PathMatcher>,
) -> Result<Vec<PathEntryDto>> {
    if !root.exists() {
        return Err(InfrastructureError::WalkError { details: format!("{}: no such file or directory", root.display()) }
            .into());
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .threads(plan.walk_threads)
        .hidden(!plan.include_hidden)
        .follow_links(plan.follow_links)
        .max_depth(plan.max_depth)
        .git_ignore(plan.respect_gitignore)
        .git_global(plan.respect_gitignore)
        .git_exclude(plan.respect_gitignore)
        .ignore(plan.respect_gitignore)
        .parents(plan.respect_gitignore)
        .require_git(false);

    let prune = Arc::clone(matcher);
    let prune_root = root.to_path_buf();
    builder.filter_entry(move |entry| {
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        // Never prune a root.
        !is_dir || entry.depth() == 0 || !is_pruned(&prune_root, &prune, entry.path())
    });

    let entries_ref: Arc<Mutex<Vec<PathEntryDto>>> = Arc::new(Mutex::new(Vec::new()));
    let entries_clone = Arc::clone(&entries_ref);
    let matcher_ref = Arc::clone(matcher);
    let include_dirs = plan.include_dirs;
    let root_buf = root.to_path_buf();

    builder.build_parallel().run(move || {
        let matcher = Arc::clone(&matcher_ref);
        let root = root_buf.clone();
        let mut collector = LocalCollector::with_capacity(Arc::clone(&entries_clone));
        Box::new(move |result| {
            if let Some(dto) = try_build_entry_from_result(result, &root, &matcher, include_dirs) {
                collector.push(dto);
            }
            ignore::WalkState::Continue
        })
    });

    let mut guard = entries_ref.lock().map_err(|_| InfrastructureError::WalkError {
        details: "walker thread panicked".to_string(),
    })?;
    Ok(std::mem::take(&mut *guard))
}

// Returns `None` for errors, roots, filtered entries and directories that were not requested.
fn try_build_entry_from_result(
    result: std::result::Result<ignore::DirEntry, ignore::Error>,
    root: &Path,
    matcher: &PathMatcher,
    include_dirs: bool,
) -> Option<PathEntryDto> {
    let entry = match result {
        Ok(e) => e,
        Err(err) => {
            log::warn!("walk error: {err}");
            return None;
        }
    };

    let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
    if is_dir && (entry.depth() == 0 || !include_dirs) {
        return None;
    }

    let path = display_path(root, entry.into_path());
    matcher.matches(&path).then_some(PathEntryDto { path, is_dir })
}

// Excludes see the same path the output shows.
fn is_pruned(root: &Path, matcher: &PathMatcher, dir: &Path) -> bool {
    matcher.is_excluded(&display_path(root, dir.to_path_buf()))
}

/// Drops the `./` prefix the walker adds under the current directory.
fn display_path(root: &Path, path: PathBuf) -> PathBuf {
    if root == Path::new(".") {
        match path.strip_prefix(".") {
            Ok(stripped) if !stripped.as_os_str().is_empty() => stripped.to_path_buf(),
            _ => path,
        }
    } else {
        path
    }
}

fn read_files_from_lines(path: &Path) -> Result<Vec<PathBuf>> {
    let reader = FileReader::open_buffered(path)
        .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
    let mut files = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        // BOM only on the very first line; CRLF tolerated.
        let line = if idx == 0 { line.trim_start_matches('\u{feff}') } else { line.as_str() };
        let s = line.trim_end_matches('\r');
        if !s.is_empty() {
            files.push(PathBuf::from(s));
        }
    }
    Ok(files)
}

fn read_files_from_null(path: &Path) -> Result<Vec<PathBuf>> {
    let buf = FileReader::read_to_end(path)
        .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
    Ok(buf.split(|&b| b == 0).filter(|chunk| !chunk.is_empty()).map(path_from_bytes).collect())
}

// Preserves non-UTF-8 paths on Unix.
#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(std::ffi::OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

fn has_trailing_separator(path: &Path) -> bool {
    let s = path.to_string_lossy();
    s.ends_with('/') || s.ends_with(std::path::MAIN_SEPARATOR)
}

// Shared threshold for flushing per-thread collectors
const FLUSH_THRESHOLD: usize = 64;

// Per-thread buffer to batch appends into the shared vector.
struct LocalCollector {
    buf: Vec<PathEntryDto>,
    shared: Arc<Mutex<Vec<PathEntryDto>>>,
}

impl LocalCollector {
    fn with_capacity(shared: Arc<Mutex<Vec<PathEntryDto>>>) -> Self {
        Self { buf: Vec::with_capacity(FLUSH_THRESHOLD), shared }
    }

    fn push(&mut self, dto: PathEntryDto) {
        self.buf.push(dto);
        if self.buf.len() >= FLUSH_THRESHOLD {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if let Ok(mut guard) = self.shared.lock() {
            guard.append(&mut self.buf);
        }
    }
}

impl Drop for LocalCollector {
    fn drop(&mut self) {
        if !self.buf.is_empty() {
            self.flush();
        }
    }
}

/// Include/exclude glob filter. Patterns without `/` match the file name,
/// patterns with `/` match the whole path. Excludes win over includes.
#[derive(Debug, Clone, Default)]
struct PathMatcher {
    include: Vec<PatternMatcher>,
    exclude: Vec<PatternMatcher>,
}

#[derive(Debug, Clone)]
struct PatternMatcher {
    glob: GlobMatcher,
    name_only: bool,
}

impl PatternMatcher {
    fn is_match(&self, path: &Path) -> bool {
        if self.name_only {
            path.file_name().is_some_and(|name| self.glob.is_match(name))
        } else {
            self.glob.is_match(path)
        }
    }
}

impl PathMatcher {
    fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self { include: compile_patterns(include)?, exclude: compile_patterns(exclude)? })
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude.iter().any(|m| m.is_match(path))
    }

    fn matches(&self, path: &Path) -> bool {
        if self.is_excluded(path) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|m| m.is_match(path))
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<PatternMatcher>> {
    patterns
        .iter()
        .map(|pattern| {
            let normalised = pattern.replace('\\', "/");
            let glob = Glob::new(normalised.trim_start_matches("./"))?;
            Ok(PatternMatcher { glob: glob.compile_matcher(), name_only: !normalised.contains('/') })
        })
        .collect()
}
