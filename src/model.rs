use serde::Serialize;
use std::path::{Path, PathBuf};

/// One application launcher discovered on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LauncherRecord {
    name: String,          // Display name, empty when the file has no Name key
    exec_command: String,  // Raw Exec value, field codes included
    source_path: PathBuf,  // The .desktop file it came from
}

impl LauncherRecord {
    pub fn new(name: String, exec_command: String, source_path: PathBuf) -> Self {
        Self {
            name,
            exec_command,
            source_path,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exec_command(&self) -> &str {
        &self.exec_command
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Key the record is indexed under.
    pub fn index_key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_key_is_lowercased_name() {
        let record = LauncherRecord::new(
            "FireFox Nightly".to_string(),
            "firefox-nightly %u".to_string(),
            PathBuf::from("/usr/share/applications/firefox-nightly.desktop"),
        );
        assert_eq!(record.index_key(), "firefox nightly");
        assert_eq!(record.name(), "FireFox Nightly");
    }

    #[test]
    fn serializes_all_fields() {
        let record = LauncherRecord::new(
            "Files".to_string(),
            "nautilus".to_string(),
            PathBuf::from("/tmp/files.desktop"),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "Files");
        assert_eq!(json["exec_command"], "nautilus");
        assert_eq!(json["source_path"], "/tmp/files.desktop");
    }
}
