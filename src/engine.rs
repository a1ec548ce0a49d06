use crate::error::ScanError;
use crate::index::PrefixIndex;
use crate::model::LauncherRecord;
use crate::sources::Source;

/// Lower-cases a typed query and drops the line terminator it was read with.
pub fn normalize_query(query: &str) -> String {
    query.trim_end_matches(['\r', '\n']).to_lowercase()
}

/// Answers prefix queries against launchers indexed once at build time.
pub struct QueryEngine {
    index: PrefixIndex<LauncherRecord>,
    issues: Vec<ScanError>,
}

impl QueryEngine {
    pub fn build<S: Source>(source: &S) -> Self {
        let report = source.scan();
        let mut engine = Self::from_records(report.records);
        engine.issues = report.issues;
        engine
    }

    pub fn from_records<I: IntoIterator<Item = LauncherRecord>>(records: I) -> Self {
        let index = records
            .into_iter()
            .map(|record| (record.index_key(), record))
            .collect();
        Self {
            index,
            issues: Vec::new(),
        }
    }

    pub fn search(&self, prefix: &str) -> Vec<&LauncherRecord> {
        let query = normalize_query(prefix);
        let results = self.index.get_by_prefix(&query);
        log::info!("QueryEngine: query='{}', matched={}", query, results.len());
        results
    }

    /// Problems hit while building; the index holds whatever survived them.
    pub fn issues(&self) -> &[ScanError] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
