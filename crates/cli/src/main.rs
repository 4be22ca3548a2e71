//! CLI tool for turning resumes into portfolio data and standalone pages.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{HtmlExporter, Portfolio, ResumeExtractor, Theme, DEFAULT_MAX_INPUT_BYTES};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Extract portfolio data from resumes and export standalone pages.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract structured fields from resume text and print them as JSON
    Extract {
        /// Resume text file, or `-` for stdin
        input: PathBuf,

        /// Reject inputs larger than this many bytes
        #[arg(long, default_value_t = DEFAULT_MAX_INPUT_BYTES)]
        max_bytes: usize,
    },

    /// Validate a portfolio JSON file and print it normalized
    Import {
        /// Portfolio JSON file, or `-` for stdin
        input: PathBuf,
    },

    /// Render a standalone HTML page
    Render {
        /// Portfolio JSON file (or resume text with --from-text), or `-` for stdin
        input: PathBuf,

        /// Treat the input as resume text instead of portfolio JSON
        #[arg(long)]
        from_text: bool,

        /// Page theme (clean, modern, creative, professional)
        #[arg(short, long)]
        theme: Option<Theme>,

        /// Output directory (default: same as input file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print output to stdout instead of writing to file
        #[arg(short, long)]
        print: bool,
    },
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let input = match &args.command {
        Command::Extract { input, .. } | Command::Import { input } | Command::Render { input, .. } => {
            input.clone()
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("Error processing {}: {:#}", input.display(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    match &args.command {
        Command::Extract { input, max_bytes } => {
            let text = read_input(input)?;
            let extractor = ResumeExtractor::new().with_max_input_bytes(*max_bytes);
            let draft = extractor.extract(&text)?;

            if args.verbose {
                eprintln!(
                    "  Found {} skills, {} projects, {} experience, {} education entries",
                    draft.skills.len(),
                    draft.projects.len(),
                    draft.experience.len(),
                    draft.education.len()
                );
            }

            println!("{}", serde_json::to_string_pretty(&draft)?);
        }
        Command::Import { input } => {
            let portfolio = load_portfolio(input, false)?;
            println!("{}", portfolio.export_json()?);
        }
        Command::Render {
            input,
            from_text,
            theme,
            output,
            print,
        } => {
            let portfolio = load_portfolio(input, *from_text)?;

            let mut exporter = HtmlExporter::new();
            if let Some(theme) = theme {
                exporter = exporter.with_theme(*theme);
            }
            let html = exporter.render(&portfolio);

            if *print {
                print!("{}", html);
            } else {
                let output_path = get_output_path(input, output.as_ref(), &portfolio.file_stem())?;
                write_output(&output_path, &html)?;
                if args.verbose {
                    eprintln!("Written to: {}", output_path.display());
                }
            }
        }
    }

    Ok(())
}

/// Build a portfolio from JSON or, with `from_text`, from resume text.
fn load_portfolio(input: &Path, from_text: bool) -> Result<Portfolio> {
    let content = read_input(input)?;

    if from_text {
        log::debug!("Extracting portfolio from resume text");
        let draft = ResumeExtractor::new().extract(&content)?;
        return Ok(Portfolio::from_draft(draft));
    }

    log::debug!("Importing portfolio JSON");
    let portfolio = Portfolio::from_json(&content)
        .with_context(|| format!("Failed to import {}", input.display()))?;
    Ok(portfolio)
}

/// Read a whole file, or stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String> {
    let mut content = String::new();

    if path.as_os_str() == "-" {
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
    } else {
        File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?
            .read_to_string(&mut content)
            .with_context(|| format!("Failed to read {} as UTF-8 text", path.display()))?;
    }

    Ok(content)
}

/// Determine where `<stem>_portfolio.html` goes.
fn get_output_path(input_path: &Path, output_dir: Option<&PathBuf>, stem: &str) -> Result<PathBuf> {
    let output_filename = format!("{}_portfolio.html", stem);

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => match input_path.parent() {
            Some(parent) if input_path.as_os_str() != "-" => parent.join(output_filename),
            _ => PathBuf::from(output_filename),
        },
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_next_to_input() {
        let path = get_output_path(Path::new("cv/jane.json"), None, "jane_doe").unwrap();
        assert_eq!(path, PathBuf::from("cv/jane_doe_portfolio.html"));
    }

    #[test]
    fn test_output_path_for_stdin() {
        let path = get_output_path(Path::new("-"), None, "portfolio").unwrap();
        assert_eq!(path, PathBuf::from("portfolio_portfolio.html"));
    }

    #[test]
    fn test_args_parse_render() {
        let args = Args::try_parse_from([
            "folio", "render", "cv.txt", "--from-text", "--theme", "modern", "--print",
        ])
        .unwrap();

        match args.command {
            Command::Render {
                from_text,
                theme,
                print,
                ..
            } => {
                assert!(from_text);
                assert_eq!(theme, Some(Theme::Modern));
                assert!(print);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_args_reject_unknown_theme() {
        assert!(Args::try_parse_from(["folio", "render", "cv.json", "--theme", "neon"]).is_err());
    }
}
