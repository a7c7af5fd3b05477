use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use walkdir::WalkDir;

use crate::logging;

/// Queries shorter than this return nothing and touch no filesystem.
pub const MIN_QUERY_CHARS: usize = 2;
pub const MAX_RESULTS: usize = 50;
/// Directory levels walked beneath each search root.
pub const MAX_DEPTH: usize = 2;
/// Fewer indexed hits than this trigger a live walk as a second phase.
const LIVE_WALK_TRIGGER: usize = 10;

const SCORE_EXACT_TERM: i64 = 100;
const SCORE_PREFIX_TERM: i64 = 50;
const SCORE_CONTAINS_TERM: i64 = 10;

/// One child of a listed directory, metadata already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_directory: bool,
    pub size: u64,
    /// 0 when the platform offers no modification time.
    pub modified_epoch_secs: i64,
}

/// Single level of directory listing. The engine owns all recursion and
/// depth decisions so that tests can count exactly which directories get
/// touched.
pub trait DirectoryLister {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>>;
}

/// Lists one directory level via walkdir. Unreadable children are skipped;
/// an unreadable directory lists as empty.
pub struct SystemLister;

impl DirectoryLister for SystemLister {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let Ok(meta) = entry.metadata() else {
                continue;
            };
            let modified = meta
                .modified()
                .ok()
                .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                .map(|d| d.as_secs() as i64)
                .unwrap_or(0);
            entries.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_directory: meta.is_dir(),
                size: meta.len(),
                modified_epoch_secs: modified,
            });
        }
        Ok(entries)
    }
}

pub fn default_lister() -> Box<dyn DirectoryLister> {
    Box::new(SystemLister)
}

/// Stand-in before runtime providers attach; sees an empty filesystem.
pub struct EmptyLister;

impl DirectoryLister for EmptyLister {
    fn list_dir(&self, _path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        Ok(Vec::new())
    }
}

/// One root the engine searches under. Only roots that are indexed ahead of
/// time serve phase-one results; every root takes part in live walks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoot {
    pub path: PathBuf,
    /// Index this root even when it is not one of the priority user folders.
    /// Set for roots the user added through configuration.
    pub always_index: bool,
}

impl SearchRoot {
    pub fn new(path: PathBuf) -> Self {
        SearchRoot {
            path,
            always_index: false,
        }
    }

    pub fn pinned(path: PathBuf) -> Self {
        SearchRoot {
            path,
            always_index: true,
        }
    }
}

/// The user folders a desktop launcher is expected to find files in. The
/// platform conventions (Movies vs Videos and so on) come from the
/// directories crate.
pub fn default_search_roots() -> Vec<SearchRoot> {
    let mut roots = Vec::new();
    if let Some(user) = directories::UserDirs::new() {
        for dir in [
            user.desktop_dir(),
            user.document_dir(),
            user.download_dir(),
            user.picture_dir(),
            user.video_dir(),
            user.audio_dir(),
        ]
        .into_iter()
        .flatten()
        {
            roots.push(SearchRoot::new(dir.to_path_buf()));
        }
    }
    roots
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
    pub size: u64,
    pub modified_epoch_secs: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHit {
    pub file: FileEntry,
    pub score: i64,
}

/// Filename index over the priority roots plus a live walk fallback across
/// all roots when the index comes up short.
pub struct FileSearchEngine {
    roots: Vec<SearchRoot>,
    index: HashMap<String, Vec<FileEntry>>,
}

impl FileSearchEngine {
    pub fn new(roots: Vec<SearchRoot>) -> Self {
        FileSearchEngine {
            roots,
            index: HashMap::new(),
        }
    }

    pub fn roots(&self) -> &[SearchRoot] {
        &self.roots
    }

    /// Distinct lowercased names currently indexed.
    pub fn indexed_names(&self) -> usize {
        self.index.len()
    }

    /// Rebuilds the name index from scratch over the indexable roots,
    /// replacing whatever was there. Returns the new distinct-name count.
    pub fn build_index(&mut self, lister: &dyn DirectoryLister) -> usize {
        let mut fresh: HashMap<String, Vec<FileEntry>> = HashMap::new();
        for root in self.indexable_roots() {
            Self::index_directory(lister, &root, 0, &mut fresh);
        }
        self.index = fresh;
        self.index.len()
    }

    /// Desktop, Documents and Downloads churn the most, so only they are
    /// indexed by default; other roots are reached by the live walk.
    fn indexable_roots(&self) -> Vec<PathBuf> {
        self.roots
            .iter()
            .filter(|root| {
                if root.always_index {
                    return true;
                }
                let text = root.path.to_string_lossy();
                text.contains("Desktop") || text.contains("Documents") || text.contains("Downloads")
            })
            .map(|root| root.path.clone())
            .collect()
    }

    fn index_directory(
        lister: &dyn DirectoryLister,
        dir: &Path,
        depth: usize,
        out: &mut HashMap<String, Vec<FileEntry>>,
    ) {
        if depth >= MAX_DEPTH {
            return;
        }
        let entries = match lister.list_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                logging::debug(&format!("skipping unreadable directory {}: {err}", dir.display()));
                return;
            }
        };
        for info in entries {
            let path = dir.join(&info.name);
            out.entry(info.name.to_lowercase())
                .or_default()
                .push(FileEntry {
                    name: info.name.clone(),
                    path: path.clone(),
                    is_directory: info.is_directory,
                    size: info.size,
                    modified_epoch_secs: info.modified_epoch_secs,
                });
            if info.is_directory && depth < MAX_DEPTH - 1 {
                Self::index_directory(lister, &path, depth + 1, out);
            }
        }
    }

    /// Two-phase search: indexed names first, then a live walk across all
    /// roots when indexed hits are scarce or `live` forces it. Results are
    /// deduplicated by path and capped at [`MAX_RESULTS`].
    pub fn search(&self, lister: &dyn DirectoryLister, query: &str, live: bool) -> Vec<FileHit> {
        let trimmed = query.trim().to_lowercase();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }
        let terms: Vec<&str> = trimmed.split_whitespace().collect();

        let mut hits: Vec<FileHit> = Vec::new();
        for (name, files) in &self.index {
            if terms.iter().any(|term| name.contains(term)) {
                let score = name_match_score(name, &terms);
                hits.extend(files.iter().map(|file| FileHit {
                    file: file.clone(),
                    score,
                }));
            }
        }

        if hits.len() < LIVE_WALK_TRIGGER || live {
            let mut found = Vec::new();
            for root in &self.roots {
                Self::live_walk(lister, &root.path, &terms, 0, &mut found);
            }
            let known: HashSet<PathBuf> = hits.iter().map(|hit| hit.file.path.clone()).collect();
            for entry in found {
                if known.contains(&entry.path) {
                    continue;
                }
                let score = name_match_score(&entry.name.to_lowercase(), &terms);
                hits.push(FileHit { file: entry, score });
            }
        }

        sort_hits(&mut hits, &trimmed);
        hits.truncate(MAX_RESULTS);
        hits
    }

    fn live_walk(
        lister: &dyn DirectoryLister,
        dir: &Path,
        terms: &[&str],
        depth: usize,
        out: &mut Vec<FileEntry>,
    ) {
        if depth >= MAX_DEPTH || out.len() >= MAX_RESULTS {
            return;
        }
        let entries = match lister.list_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                logging::debug(&format!("skipping unreadable directory {}: {err}", dir.display()));
                return;
            }
        };
        for info in entries {
            if out.len() >= MAX_RESULTS {
                return;
            }
            let path = dir.join(&info.name);
            let name_lower = info.name.to_lowercase();
            if terms.iter().any(|term| name_lower.contains(term)) {
                out.push(FileEntry {
                    name: info.name.clone(),
                    path: path.clone(),
                    is_directory: info.is_directory,
                    size: info.size,
                    modified_epoch_secs: info.modified_epoch_secs,
                });
            }
            if info.is_directory && depth < MAX_DEPTH - 1 {
                Self::live_walk(lister, &path, terms, depth + 1, out);
            }
        }
    }
}

/// Additive per-term score: exact whole-name match beats a name prefix,
/// which beats a substring anywhere in the name.
fn name_match_score(name_lower: &str, terms: &[&str]) -> i64 {
    let mut score = 0;
    for term in terms {
        if !name_lower.contains(term) {
            continue;
        }
        score += if name_lower == *term {
            SCORE_EXACT_TERM
        } else if name_lower.starts_with(term) {
            SCORE_PREFIX_TERM
        } else {
            SCORE_CONTAINS_TERM
        };
    }
    score
}

fn sort_hits(hits: &mut [FileHit], query_lower: &str) {
    hits.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| {
                let a_exact = a.file.name.to_lowercase() == query_lower;
                let b_exact = b.file.name.to_lowercase() == query_lower;
                b_exact.cmp(&a_exact)
            })
            .then_with(|| {
                let a_starts = a.file.name.to_lowercase().starts_with(query_lower);
                let b_starts = b.file.name.to_lowercase().starts_with(query_lower);
                b_starts.cmp(&a_starts)
            })
            .then_with(|| {
                if a.file.modified_epoch_secs > 0 && b.file.modified_epoch_secs > 0 {
                    b.file.modified_epoch_secs.cmp(&a.file.modified_epoch_secs)
                } else {
                    Ordering::Equal
                }
            })
            .then_with(|| a.file.name.to_lowercase().cmp(&b.file.name.to_lowercase()))
    });
}

pub fn file_extension(name: &str) -> String {
    match name.rfind('.') {
        Some(pos) if pos > 0 => name[pos + 1..].to_lowercase(),
        _ => String::new(),
    }
}

/// Coarse display bucket derived from the extension.
pub fn file_category(name: &str, is_directory: bool) -> &'static str {
    if is_directory {
        return "folder";
    }
    match file_extension(name).as_str() {
        "txt" | "md" | "rtf" | "odt" => "document",
        "pdf" => "pdf",
        "doc" | "docx" => "word",
        "js" | "ts" | "jsx" | "tsx" | "py" | "java" | "cpp" | "c" | "h" => "code",
        "html" | "htm" | "xml" => "markup",
        "css" | "scss" | "sass" | "less" => "stylesheet",
        "json" | "yaml" | "yml" | "toml" => "config",
        "jpg" | "jpeg" | "png" | "gif" | "bmp" | "svg" | "webp" | "ico" => "image",
        "mp4" | "avi" | "mkv" | "mov" | "wmv" => "video",
        "mp3" | "wav" | "flac" | "ogg" => "audio",
        "zip" | "rar" | "7z" | "tar" | "gz" | "bz2" => "archive",
        "exe" | "msi" | "app" | "deb" | "rpm" => "executable",
        _ => "file",
    }
}

pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_need_a_real_stem() {
        assert_eq!(file_extension("notes.txt"), "txt");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension(".bashrc"), "");
        assert_eq!(file_extension("Makefile"), "");
    }

    #[test]
    fn categories_cover_known_extensions_and_fall_back_to_file() {
        assert_eq!(file_category("main.rs", false), "file");
        assert_eq!(file_category("main.py", false), "code");
        assert_eq!(file_category("notes.md", false), "document");
        assert_eq!(file_category("deck.pdf", false), "pdf");
        assert_eq!(file_category("song.flac", false), "audio");
        assert_eq!(file_category("anything", true), "folder");
    }

    #[test]
    fn per_term_scores_stack_across_terms() {
        let terms = vec!["report", "q4"];
        assert_eq!(name_match_score("report", &terms), SCORE_EXACT_TERM);
        assert_eq!(
            name_match_score("report-q4.pdf", &terms),
            SCORE_PREFIX_TERM + SCORE_CONTAINS_TERM
        );
        assert_eq!(name_match_score("summary.txt", &terms), 0);
    }

    #[test]
    fn sizes_format_with_one_decimal_above_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }
}
