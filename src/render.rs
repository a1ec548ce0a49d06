use crate::model::LauncherRecord;
use std::io::{self, Write};

pub fn render_text<W: Write>(out: &mut W, query: &str, results: &[&LauncherRecord]) -> io::Result<()> {
    writeln!(out, "\nResults matching {}", query)?;
    for record in results {
        writeln!(out, "App Name: {}", record.name())?;
        writeln!(out, "\t.desktop file path: {}", record.source_path().display())?;
        writeln!(out, "\t.exec: {}", record.exec_command())?;
    }
    Ok(())
}

pub fn render_json<W: Write>(out: &mut W, results: &[&LauncherRecord]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)
}
