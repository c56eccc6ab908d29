use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use course_core::{CourseTable, KeyPolicy, TableConfig};
use course_ingest::{load_courses, IngestOptions};
use std::io;
use std::path::PathBuf;
use tracing::info;

mod menu;
mod render;

#[derive(Parser)]
#[command(name = "courses", about = "Course index: load, list and look up courses")]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Args, Clone)]
struct TableArgs {
    /// Course file: `id,name[,prereq1[,prereq2]]` per line
    #[arg(long)]
    file: PathBuf,
    /// JSON table config (`table_size`, `key_policy`)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Bucket count; overrides the config file
    #[arg(long)]
    table_size: Option<usize>,
    /// Reject ids that are not whole integers instead of bucketing them at 0
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// Treat the first line as data
    #[arg(long, default_value_t = false)]
    no_header: bool,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print every course in bucket order
    List {
        #[command(flatten)]
        table: TableArgs,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Look up one course by id
    Show {
        #[command(flatten)]
        table: TableArgs,
        #[arg(long)]
        id: String,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Bucket occupancy for the loaded file
    Stats {
        #[command(flatten)]
        table: TableArgs,
    },
    /// Interactive planner on stdin
    Menu {
        #[command(flatten)]
        table: TableArgs,
    },
}

impl TableArgs {
    fn config(&self) -> Result<TableConfig> {
        let mut cfg = match &self.config {
            Some(p) => TableConfig::load(p).with_context(|| format!("config {}", p.display()))?,
            None => TableConfig::default(),
        };
        if let Some(n) = self.table_size {
            cfg.table_size = n;
        }
        if self.strict {
            cfg.key_policy = KeyPolicy::Strict;
        }
        Ok(cfg)
    }

    fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            has_header: !self.no_header,
        }
    }

    fn load(&self) -> Result<CourseTable> {
        let mut table = self.config()?.build().context("table configuration")?;
        let report = load_courses(&self.file, &mut table, &self.ingest_options())?;
        if let Some(columns) = &report.header {
            info!("columns: {}", render::format_header(columns));
        }
        Ok(table)
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Cmd::List { table, json } => {
            let t = table.load()?;
            if json {
                println!("{}", render::listing_json(&t)?);
            } else {
                for line in render::listing(&t) {
                    println!("{line}");
                }
            }
        }
        Cmd::Show { table, id, json } => {
            let t = table.load()?;
            let found = t.find(&id);
            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                match found {
                    Some(rec) => println!("{}", render::format_course(rec)),
                    None => println!("{}", render::not_found(&id)),
                }
            }
        }
        Cmd::Stats { table } => {
            let t = table.load()?;
            println!("{}", serde_json::to_string_pretty(&t.stats())?);
        }
        Cmd::Menu { table } => {
            let cfg = table.config()?;
            cfg.build().context("table configuration")?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            menu::run(stdin.lock(), &mut stdout, &table.file, &cfg, &table.ingest_options())?;
        }
    }
    Ok(())
}
