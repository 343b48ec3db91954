use clap::{Parser, Subcommand};
use colored::Colorize;
use label_forge::cli;
use label_forge::error::LabelResult;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(name = "label-forge")]
#[command(about = "Move custom label translations between XML metadata and Excel.")]
#[command(long_about = "Label Forge - custom label translations for translators
Metadata XML ↔ Excel (.xlsx) | Only changed values are written back

PROJECT LAYOUT:
  <project>/labels/CustomLabels.labels      label definitions
  <project>/translations/<lang>.translation per-language overrides

COMMANDS:
  export   - Labels + translations to an Excel workbook
  import   - Edited workbook back into CustomLabels.labels

EXAMPLES:
  label-forge export src --languages en_US,de,fr
  label-forge export src -l de --category Checkout --prefix Cart_
  label-forge import src custom-labels-export.xlsx --dry-run")]
#[command(version)]
struct Cli {
    /// Show debug logging (compared keys, rendered table)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Export custom labels to an Excel workbook.

Builds one row per label: key, description, then one column per requested
language in the order given. A label's own language column shows its current
value; other columns come from translations/<lang>.translation, or stay
empty when no translation exists. A missing translation file is a warning.

FILTERS:
  --category  keep labels whose category equals the value exactly
  --prefix    keep labels whose key starts with the value

OUTPUT:
  Single sheet 'custom labels', every cell plain wrapped text.
  Written to custom-labels-export.xlsx unless --output is given.

EXAMPLE:
  label-forge export src --languages en_US,de")]
    /// Export custom labels to an Excel workbook
    Export {
        /// Path to the project source folder
        project: PathBuf,

        /// Comma-separated language codes, e.g. 'en_US, de'
        #[arg(short, long)]
        languages: String,

        /// Only export labels with exactly this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only export labels whose key starts with this prefix
        #[arg(short, long)]
        prefix: Option<String>,

        /// Output Excel file path (.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    #[command(long_about = "Import an edited workbook into CustomLabels.labels.

Reads the first sheet. The header row names the language columns (from the
third column on). For every label whose own language has a column and whose
key has a row, the label value is replaced when the cell differs. Rows with
too few cells are skipped with a warning. Labels not present in the
workbook keep their value.

Use --dry-run to preview changes without modifying files.

EXAMPLE:
  label-forge import src custom-labels-export.xlsx")]
    /// Import an edited workbook into the label metadata
    Import {
        /// Path to the project source folder
        project: PathBuf,

        /// Path to the edited Excel file (.xlsx)
        input: PathBuf,

        /// Preview changes without writing to file
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_filter = if verbose {
        "label_forge=debug"
    } else if quiet {
        "label_forge=warn"
    } else {
        "label_forge=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> LabelResult<()> {
    match command {
        Commands::Export {
            project,
            languages,
            category,
            prefix,
            output,
        } => cli::export(project, languages, category, prefix, output),

        Commands::Import {
            project,
            input,
            dry_run,
        } => cli::import(project, input, dry_run),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{} {}", "❌ Error:".bold().red(), e);
            ExitCode::FAILURE
        }
    }
}
