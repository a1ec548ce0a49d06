use anyhow::{Result, bail};
use appfind::config::{self, OutputFormat};
use appfind::engine::normalize_query;
use appfind::render::{render_json, render_text};
use appfind::{DirectoryScanner, QueryEngine, executor};
use clap::Parser;
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name prefix to look up; read from stdin when omitted
    query: Option<String>,

    /// Directory to scan, repeatable; replaces the configured roots
    #[arg(short, long = "root", value_name = "DIR")]
    roots: Vec<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum directory depth below each root
    #[arg(long)]
    max_depth: Option<usize>,

    /// Follow symlinked directories while scanning
    #[arg(long)]
    follow_links: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Launch the first match
    #[arg(long)]
    launch: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // 1. Load Config, CLI flags win
    let config = config::load_config(args.config.as_deref())?;
    let roots = if args.roots.is_empty() {
        config.scan.resolve_roots(config::home_dir().as_deref())
    } else {
        args.roots.clone()
    };
    let format = if args.json { OutputFormat::Json } else { config.output.format };

    // 2. Build the index once
    let scanner = DirectoryScanner::new(roots)
        .max_depth(args.max_depth.unwrap_or(config.scan.max_depth))
        .follow_links(args.follow_links || config.scan.follow_links);
    debug!("Scanning roots {:?}", scanner.roots());
    let engine = QueryEngine::build(&scanner);
    if !engine.issues().is_empty() {
        info!("{} launcher files or directories were skipped", engine.issues().len());
    }

    // 3. Query
    let query = match args.query {
        Some(query) => query,
        None => read_query()?,
    };
    let results = engine.search(&query);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => render_text(&mut out, &normalize_query(&query), &results)?,
        OutputFormat::Json => render_json(&mut out, &results)?,
    }
    out.flush()?;

    // 4. Optionally launch
    if args.launch {
        let Some(first) = results.first() else {
            bail!("Nothing to launch: no launcher matches {:?}", normalize_query(&query));
        };
        executor::execute(first)?;
    }

    Ok(())
}

fn read_query() -> Result<String> {
    print!("Search an Application (Desktop Entry): ");
    io::stdout().flush()?;

    let mut line = String::new();
    if let Err(e) = io::stdin().lock().read_line(&mut line) {
        warn!("input error: {}", e);
        line.clear();
    }
    Ok(line)
}
