use crate::error::ScanError;
use crate::model::LauncherRecord;

/// Records found by a source, plus everything that went wrong on the way.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub records: Vec<LauncherRecord>,
    pub issues: Vec<ScanError>,
}

pub trait Source {
    fn scan(&self) -> ScanReport;
}

pub mod desktop;
pub mod scanner;
