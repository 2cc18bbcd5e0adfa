mod error;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use picker_lib::source::{candidates_field, parse_attachments, parse_candidates, parse_tree};
use picker_lib::{PayloadError, Picker, PickerConfig, PresentedRow, Tree};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use error::CliError;

/// Pixels of indent rendered as one column.
const PX_PER_COLUMN: u32 = 10;

/// Shape of the input JSON.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    /// Nodes with `id`, `name`, `type` and `children`.
    Tree,
    /// Candidate lookup response.
    Candidates,
    /// Attachment catalogue response.
    Attachments,
}

/// Search, expand and select over a workflow tree snapshot
#[derive(Debug, Parser)]
#[command(name = "picker", version)]
struct Cli {
    /// JSON file to load
    input: PathBuf,

    #[arg(short, long, value_enum, default_value = "tree")]
    format: InputFormat,

    /// Search text (case-insensitive substring)
    #[arg(short, long, default_value = "")]
    search: String,

    /// Expand a group by id (repeatable)
    #[arg(short, long)]
    expand: Vec<String>,

    /// Expand every group
    #[arg(long)]
    expand_all: bool,

    /// Toggle selection of a leaf by id (repeatable)
    #[arg(long)]
    select: Vec<String>,

    /// Presenter config JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write debug logs to this file instead of warnings to stderr
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(cli.log.as_deref())?;

    let config = match &cli.config {
        Some(path) => PickerConfig::load(path)?,
        None => PickerConfig::default(),
    };
    let tree = load_tree(&cli.input, cli.format)?;
    log::info!("Loaded {} nodes from {}", tree.len(), cli.input.display());

    let mut picker = Picker::with_config(tree, config);
    picker.set_search(&cli.search);
    if cli.expand_all {
        picker.expand_all();
    }
    for id in &cli.expand {
        picker.toggle_expand(id);
    }
    for id in &cli.select {
        picker.toggle_select(id);
    }

    for row in picker.presented_rows() {
        println!("{}", render_row(&row));
    }

    match candidates_field(picker.selected_ids()) {
        Ok(field) => println!("Candidates: {}", field),
        Err(PayloadError::NoCandidates) => println!("Candidates: (none)"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> Result<(), CliError> {
    match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
            WriteLogger::init(LevelFilter::Debug, Config::default(), file)?;
        }
        None => {
            TermLogger::init(
                LevelFilter::Warn,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
        }
    }
    Ok(())
}

fn load_tree(path: &Path, format: InputFormat) -> Result<Tree, CliError> {
    let json = std::fs::read_to_string(path).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = match format {
        InputFormat::Tree => parse_tree(&json)?,
        InputFormat::Candidates => parse_candidates(&json)?,
        InputFormat::Attachments => parse_attachments(&json)?,
    };
    Ok(tree)
}

/// One line per row: indent, expander, icon name, name with `*hits*`, and a
/// checkbox for leaves.
fn render_row(row: &PresentedRow<'_>) -> String {
    let indent = " ".repeat((row.indent_px / PX_PER_COLUMN) as usize);
    let expander = match (row.expander, row.expanded) {
        (Some(_), true) => "▾ ",
        (Some(_), false) => "▸ ",
        (None, _) => "  ",
    };
    let name: String = row
        .segments
        .iter()
        .map(|s| {
            if s.highlighted {
                format!("*{}*", s.text)
            } else {
                s.text.to_string()
            }
        })
        .collect();
    let checkbox = match (row.selectable, row.selected) {
        (true, true) => " [x]",
        (true, false) => " [ ]",
        (false, _) => "",
    };
    format!("{indent}{expander}({}) {name}{checkbox}", row.icon)
}
