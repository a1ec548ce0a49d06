use crate::error::{DocumentError, ParseFailure};
use crate::model::LauncherRecord;
use std::collections::HashMap;
use std::path::Path;

const DESKTOP_ENTRY: &str = "Desktop Entry";

/// Parses one launcher file into a record per `[Desktop Entry]` section.
///
/// The content is INI-like: `[Section]` headers, `Key=Value` lines, `#` and
/// `;` comments. Only `Name` and `Exec` of sections named exactly
/// `Desktop Entry` are read; anything else just has to be well formed.
/// A section name is the raw text between `[` and the last `]` on the line,
/// so `[ Desktop Entry ]` is a different section.
pub fn parse_desktop_entries(content: &[u8], path: &Path) -> Result<Vec<LauncherRecord>, ParseFailure> {
    let fail = |reason: DocumentError| ParseFailure {
        path: path.to_path_buf(),
        reason,
    };

    let text = std::str::from_utf8(content).map_err(|e| fail(e.into()))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut sections: Vec<Section> = Vec::new();
    // Keys before the first header land in no section and are dropped.
    let mut current: Option<Section> = None;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') { continue; }

        if let Some(rest) = line.strip_prefix('[') {
            // Name runs up to the last `]`; text after it is ignored.
            let Some(close) = rest.rfind(']') else {
                return Err(fail(DocumentError::UnclosedSection { line: line_no }));
            };
            if let Some(done) = current.take() {
                sections.push(done);
            }
            current = Some(Section::new(&rest[..close]));
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(fail(DocumentError::MissingDelimiter { line: line_no }));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(fail(DocumentError::EmptyKey { line: line_no }));
        }

        if let Some(section) = current.as_mut() {
            section.keys.insert(key, value.trim());
        }
    }
    if let Some(done) = current.take() {
        sections.push(done);
    }

    let records = sections
        .into_iter()
        .filter(|s| s.name == DESKTOP_ENTRY)
        .map(|s| {
            LauncherRecord::new(
                s.value("Name").to_string(),
                s.value("Exec").to_string(),
                path.to_path_buf(),
            )
        })
        .collect();

    Ok(records)
}

struct Section<'a> {
    name: &'a str,
    keys: HashMap<&'a str, &'a str>,
}

impl<'a> Section<'a> {
    fn new(name: &'a str) -> Self {
        Self {
            name,
            keys: HashMap::new(),
        }
    }

    fn value(&self, key: &str) -> &'a str {
        self.keys.get(key).copied().unwrap_or("")
    }
}
