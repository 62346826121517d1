use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::layout::SyncLayout;
use crate::matcher::ProtoMatcher;
use crate::rewrite::GoPackageRewrite;
use crate::SyncError;

/// Everything a sync run needs, computed once up front.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub source: PathBuf,
    pub layout: SyncLayout,
    pub matcher: ProtoMatcher,
    pub rewrite: GoPackageRewrite,
}

impl SyncOptions {
    pub fn new(source: &Path, layout: SyncLayout) -> Self {
        Self {
            source: source.to_path_buf(),
            layout,
            matcher: ProtoMatcher::default(),
            rewrite: GoPackageRewrite::default(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Clean dirs that existed and were removed.
    pub removed: Vec<PathBuf>,
    /// Written files, relative to the destination root, sorted.
    pub written: Vec<PathBuf>,
    /// Total `go_package` replacements across all files.
    pub replacements: usize,
}

/// Sync `source` into `<cwd>/proto`.
pub fn run(source: &Path) -> Result<SyncReport, SyncError> {
    let layout = SyncLayout::from_cwd()?;
    sync(&SyncOptions::new(source, layout))
}

/// Wipe the clean dirs, then copy every matching file under the source
/// root into the destination, rewriting its `go_package` option.
/// Aborts on the first error; files already written stay in place.
pub fn sync(opts: &SyncOptions) -> Result<SyncReport, SyncError> {
    check_source(&opts.source)?;

    let mut report = SyncReport {
        removed: opts.layout.remove_clean_dirs()?,
        ..Default::default()
    };

    for rel in walk_matching(&opts.source, &opts.matcher) {
        let rel = rel?;
        let replaced = copy_file(opts, &rel)?;
        report.replacements += replaced;
        report.written.push(rel);
    }
    report.written.sort();

    tracing::info!(
        source = %opts.source.display(),
        destination = %opts.layout.root().display(),
        files = report.written.len(),
        replacements = report.replacements,
        "proto sync complete"
    );
    Ok(report)
}

fn check_source(source: &Path) -> Result<(), SyncError> {
    if source.as_os_str().is_empty() {
        return Err(SyncError::InvalidArgument(
            "source directory must not be empty".to_string(),
        ));
    }
    let meta = match std::fs::metadata(source) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SyncError::SourceNotFound(source.to_path_buf()))
        }
        Err(e) => {
            return Err(SyncError::Read {
                path: source.to_path_buf(),
                source: e,
            })
        }
    };
    if !meta.is_dir() {
        return Err(SyncError::SourceNotADirectory(source.to_path_buf()));
    }
    Ok(())
}

/// Lazily yield paths (relative to `root`) of files whose name matches.
/// Directory symlinks are not followed; file symlinks are resolved.
pub fn walk_matching<'a>(
    root: &'a Path,
    matcher: &'a ProtoMatcher,
) -> impl Iterator<Item = Result<PathBuf, SyncError>> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => return Some(Err(SyncError::Walk(e))),
            };
            if !is_file_entry(&entry) || !matcher.is_match(entry.path()) {
                return None;
            }
            Some(
                entry
                    .path()
                    .strip_prefix(root)
                    .map(Path::to_path_buf)
                    .map_err(|_| {
                        SyncError::InvalidArgument(format!(
                            "{} is outside {}",
                            entry.path().display(),
                            root.display()
                        ))
                    }),
            )
        })
}

fn is_file_entry(entry: &walkdir::DirEntry) -> bool {
    let ft = entry.file_type();
    if ft.is_file() {
        return true;
    }
    // Dangling links count as files so the read reports them.
    ft.is_symlink()
        && !std::fs::metadata(entry.path())
            .map(|m| m.is_dir())
            .unwrap_or(false)
}

fn copy_file(opts: &SyncOptions, rel: &Path) -> Result<usize, SyncError> {
    let src = opts.source.join(rel);
    let content = std::fs::read_to_string(&src).map_err(|e| SyncError::Read {
        path: src.clone(),
        source: e,
    })?;
    let (content, replaced) = opts.rewrite.apply(&content);

    let dst = opts.layout.destination_for(rel);
    write_output(&dst, content.as_bytes())?;

    tracing::debug!(path = %rel.display(), replaced, "wrote proto");
    Ok(replaced)
}

/// Create missing parents, then write in place. New files get the
/// umask-derived mode; overwritten files keep theirs.
fn write_output(path: &Path, data: &[u8]) -> Result<(), SyncError> {
    let dir = path.parent().ok_or_else(|| {
        SyncError::InvalidArgument(format!("{} has no parent directory", path.display()))
    })?;
    std::fs::create_dir_all(dir).map_err(|e| SyncError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;
    std::fs::write(path, data).map_err(|e| SyncError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
