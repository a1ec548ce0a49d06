use crate::error::{DocumentError, ParseFailure, ScanError};
use crate::model::LauncherRecord;
use crate::sources::desktop::parse_desktop_entries;
use crate::sources::{ScanReport, Source};
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

pub const DEFAULT_MAX_DEPTH: usize = 32;

const DESKTOP_SUFFIX: &str = ".desktop";

/// Walks launcher directories and parses every `.desktop` file it meets.
///
/// Roots are visited in the order given; inside a root entries are sorted by
/// file name so two scans of the same tree agree. Missing roots, unreadable
/// entries and broken files end up in [`ScanReport::issues`] and never stop
/// the scan.
pub struct DirectoryScanner {
    roots: Vec<PathBuf>,
    max_depth: usize,
    follow_links: bool,
}

impl DirectoryScanner {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            max_depth: DEFAULT_MAX_DEPTH,
            follow_links: false,
        }
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn scan_root(&self, root: &Path, report: &mut ScanReport) {
        match fs::metadata(root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                warn!("Skipping {:?}: not a directory", root);
                report.issues.push(ScanError::DirectoryUnavailable {
                    path: root.to_path_buf(),
                    reason: "not a directory".to_string(),
                });
                return;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Directory {:?} does not exist, skipping", root);
                report.issues.push(ScanError::DirectoryUnavailable {
                    path: root.to_path_buf(),
                    reason: e.to_string(),
                });
                return;
            }
            Err(e) => {
                warn!("Skipping {:?}: {}", root, e);
                report.issues.push(ScanError::DirectoryUnavailable {
                    path: root.to_path_buf(),
                    reason: e.to_string(),
                });
                return;
            }
        }

        debug!("Scanning desktop files in {:?}", root);
        let walker = WalkDir::new(root)
            .follow_links(self.follow_links)
            .max_depth(self.max_depth)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    warn!("Walk error at {:?}: {}", path, e);
                    report.issues.push(ScanError::WalkFailure {
                        path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if !is_launcher_file(&entry) {
                continue;
            }

            match read_entries(entry.path()) {
                Ok(mut records) => report.records.append(&mut records),
                Err(failure) => {
                    warn!("{}", failure);
                    report.issues.push(failure.into());
                }
            }
        }
    }
}

impl Source for DirectoryScanner {
    fn scan(&self) -> ScanReport {
        let mut report = ScanReport::default();
        for root in &self.roots {
            self.scan_root(root, &mut report);
        }
        info!(
            "DirectoryScanner: found {} entries, {} issues",
            report.records.len(),
            report.issues.len()
        );
        report
    }
}

fn is_launcher_file(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    if !name.to_lowercase().ends_with(DESKTOP_SUFFIX) {
        return false;
    }
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    // Unfollowed symlink: accept it when the target is a regular file.
    file_type.is_symlink() && entry.path().is_file()
}

fn read_entries(path: &Path) -> Result<Vec<LauncherRecord>, ParseFailure> {
    let content = fs::read(path).map_err(|e| ParseFailure {
        path: path.to_path_buf(),
        reason: DocumentError::Unreadable(e),
    })?;
    parse_desktop_entries(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn entry(name: &str) -> String {
        format!("[Desktop Entry]\nName={name}\nExec={}\n", name.to_lowercase())
    }

    #[test]
    fn picks_up_desktop_suffix_case_insensitively() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.desktop", &entry("Alpha"));
        write(dir.path(), "b.DESKTOP", &entry("Beta"));
        write(dir.path(), "c.desktop.bak", &entry("Gamma"));
        write(dir.path(), "readme.txt", "not ini at all");

        let report = DirectoryScanner::new(vec![dir.path().to_path_buf()]).scan();
        let names: Vec<_> = report.records.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["Alpha", "Beta"]);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn walks_subdirectories_in_name_order() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("kde/extra")).unwrap();
        write(dir.path(), "z.desktop", &entry("Zed"));
        write(&dir.path().join("kde"), "k.desktop", &entry("Kate"));
        write(&dir.path().join("kde/extra"), "e.desktop", &entry("Elisa"));

        let scanner = DirectoryScanner::new(vec![dir.path().to_path_buf()]);
        let first: Vec<_> = scanner.scan().records.iter().map(|r| r.name().to_string()).collect();
        let second: Vec<_> = scanner.scan().records.iter().map(|r| r.name().to_string()).collect();
        assert_eq!(first, ["Elisa", "Kate", "Zed"]);
        assert_eq!(first, second);
    }

    #[test]
    fn directory_named_like_a_launcher_is_not_parsed() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("weird.desktop")).unwrap();
        write(&dir.path().join("weird.desktop"), "inner.desktop", &entry("Inner"));

        let report = DirectoryScanner::new(vec![dir.path().to_path_buf()]).scan();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].name(), "Inner");
        assert!(report.issues.is_empty());
    }

    #[test]
    fn missing_root_is_reported_and_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.desktop", &entry("Alpha"));
        let missing = dir.path().join("nope");

        let report = DirectoryScanner::new(vec![missing.clone(), dir.path().to_path_buf()]).scan();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.issues.len(), 1);
        assert!(matches!(
            &report.issues[0],
            ScanError::DirectoryUnavailable { path, .. } if *path == missing
        ));
    }

    #[test]
    fn file_as_root_is_unavailable() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.desktop", &entry("Alpha"));

        let report = DirectoryScanner::new(vec![dir.path().join("a.desktop")]).scan();
        assert!(report.records.is_empty());
        assert!(matches!(report.issues[0], ScanError::DirectoryUnavailable { .. }));
    }

    #[test]
    fn roots_are_scanned_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write(first.path(), "z.desktop", &entry("FromFirst"));
        write(second.path(), "a.desktop", &entry("FromSecond"));

        let report = DirectoryScanner::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ])
        .scan();
        let names: Vec<_> = report.records.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["FromFirst", "FromSecond"]);
    }

    #[test]
    fn max_depth_bounds_the_walk() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("one/two")).unwrap();
        write(dir.path(), "top.desktop", &entry("Top"));
        write(&dir.path().join("one/two"), "deep.desktop", &entry("Deep"));

        let report = DirectoryScanner::new(vec![dir.path().to_path_buf()])
            .max_depth(1)
            .scan();
        let names: Vec<_> = report.records.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["Top"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_launcher_file_is_read() {
        let dir = TempDir::new().unwrap();
        let store = TempDir::new().unwrap();
        write(store.path(), "real.desktop", &entry("Linked"));
        std::os::unix::fs::symlink(store.path().join("real.desktop"), dir.path().join("link.desktop")).unwrap();

        let report = DirectoryScanner::new(vec![dir.path().to_path_buf()]).scan();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].source_path(), dir.path().join("link.desktop"));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loop_is_a_walk_failure_when_following_links() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        write(dir.path(), "a.desktop", &entry("Alpha"));
        std::os::unix::fs::symlink(dir.path(), dir.path().join("sub/back")).unwrap();

        let report = DirectoryScanner::new(vec![dir.path().to_path_buf()])
            .follow_links(true)
            .scan();
        assert_eq!(report.records.len(), 1);
        assert!(report.issues.iter().any(|i| matches!(i, ScanError::WalkFailure { .. })));
    }
}
