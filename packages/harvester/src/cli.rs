//! Command-line interface for the harvester.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{DEFAULT_AREA_MARKER, DEFAULT_CORPUS_EXTENSION, DEFAULT_LEVEL_MARKER};
use crate::corpus::{combine_directory, save_corpus};
use crate::error::Result;
use crate::harvester::harvest_file;
use crate::locales::{deep_merge, load_tree, save_tree, split_all};
use crate::output::{render, save_output, OutputFormat};
use crate::segmenting::GrammarConfig;
use crate::types::AxisNames;

/// DRD Harvester - Rebuild the digital readiness taxonomy from extracted text.
#[derive(Parser)]
#[command(name = "drd-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rebuild the axis/area/level tree from an extracted text file.
    Parse {
        /// Extracted text file (e.g., knowledge/extracted_content.txt)
        input: PathBuf,

        /// Output file (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (default: from output extension, else json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// YAML file mapping axis ids to display names
        #[arg(long)]
        axis_names: Option<PathBuf>,

        /// Word opening an Axis/Area header
        #[arg(long, default_value = DEFAULT_AREA_MARKER)]
        area_marker: String,

        /// Word opening a Level header
        #[arg(long, default_value = DEFAULT_LEVEL_MARKER)]
        level_marker: String,
    },

    /// Combine per-document extracted text files into one framed corpus.
    Combine {
        /// Directory holding the extracted text files
        dir: PathBuf,

        /// Output file (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Extension of the files to combine
        #[arg(short, long, default_value = DEFAULT_CORPUS_EXTENSION)]
        extension: String,
    },

    /// Split a combined translation file into one file per language.
    SplitLocales {
        /// Combined translation JSON
        input: PathBuf,

        /// Directory receiving <lang>/translation.json
        out_dir: PathBuf,
    },

    /// Merge new translation keys into a combined translation file in place.
    MergeLocales {
        /// Combined translation JSON (rewritten)
        target: PathBuf,

        /// JSON file with the keys to merge
        new_keys: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            output,
            format,
            axis_names,
            area_marker,
            level_marker,
        } => {
            let grammar = GrammarConfig::new()
                .with_area_marker(area_marker)
                .with_level_marker(level_marker);
            parse_command(
                &input,
                output.as_deref(),
                format,
                axis_names.as_deref(),
                &grammar,
            )
        }
        Commands::Combine {
            dir,
            output,
            extension,
        } => combine_command(&dir, output.as_deref(), &extension),
        Commands::SplitLocales { input, out_dir } => split_locales_command(&input, &out_dir),
        Commands::MergeLocales { target, new_keys } => merge_locales_command(&target, &new_keys),
    }
}

/// Execute the parse command.
fn parse_command(
    input: &Path,
    output: Option<&Path>,
    format: Option<OutputFormat>,
    axis_names: Option<&Path>,
    grammar: &GrammarConfig,
) -> Result<()> {
    let names = match axis_names {
        Some(path) => AxisNames::load(path)?,
        None => AxisNames::default(),
    };
    let format = format
        .or_else(|| output.map(OutputFormat::from_path))
        .unwrap_or_default();

    // Status goes to stderr so stdout stays clean for the rendered tree
    eprintln!(
        "{} {}",
        style("Parsing").bold(),
        style(input.display()).cyan()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Locating headers...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let taxonomy = match harvest_file(input, grammar, &names) {
        Ok(taxonomy) => taxonomy,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    eprintln!("  Axes: {}", style(taxonomy.axes.len()).green());
    eprintln!("  Areas: {}", taxonomy.area_count());
    eprintln!("  Levels: {}", taxonomy.level_count());
    if !taxonomy.warnings.is_empty() {
        eprintln!(
            "  Warnings: {}",
            style(taxonomy.warnings.len()).yellow().bold()
        );
        for warning in &taxonomy.warnings {
            eprintln!("    {}", style(warning).yellow());
        }
    }

    match output {
        Some(path) => {
            save_output(&taxonomy.axes, format, path)?;
            eprintln!();
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => print!("{}", render(&taxonomy.axes, format)?),
    }

    Ok(())
}

/// Execute the combine command.
fn combine_command(dir: &Path, output: Option<&Path>, extension: &str) -> Result<()> {
    let corpus = combine_directory(dir, extension)?;

    eprintln!(
        "{} {} file(s) from {}",
        style("Combined").bold(),
        style(corpus.files.len()).green(),
        style(dir.display()).cyan()
    );
    for (file, reason) in &corpus.skipped {
        eprintln!("  {} {file}: {reason}", style("Skipped").yellow().bold());
    }

    match output {
        Some(path) => {
            save_corpus(&corpus, path)?;
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => print!("{}", corpus.text),
    }

    Ok(())
}

/// Execute the split-locales command.
fn split_locales_command(input: &Path, out_dir: &Path) -> Result<()> {
    let tree = load_tree(input)?;
    let paths = split_all(&tree, out_dir)?;

    for path in &paths {
        eprintln!("{} {}", style("Wrote").green(), path.display());
    }
    eprintln!("{}", style("Split complete.").bold());
    Ok(())
}

/// Execute the merge-locales command.
fn merge_locales_command(target: &Path, new_keys: &Path) -> Result<()> {
    let mut tree = load_tree(target)?;
    let overrides = load_tree(new_keys)?;

    deep_merge(&mut tree, &overrides)?;
    save_tree(&tree, target)?;

    eprintln!(
        "{} {}",
        style("Updated translations:").green().bold(),
        target.display()
    );
    Ok(())
}
