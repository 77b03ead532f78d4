use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap::error::ErrorKind;
use mdhtml::{Config, Error};

#[derive(Parser)]
#[command(name = "mdhtml")]
#[command(version, about = "Convert Markdown files to standalone HTML")]
struct Cli {
    /// Input Markdown file (.md)
    input: PathBuf,

    /// Output HTML file (defaults to input name with .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file overriding the default stylesheet settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log each conversion stage
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // Help and version go to stdout and are not failures
            let _ = e.print();
            return;
        }
        Err(e) => {
            eprint!("{}", Error::Usage(e.to_string()));
            std::process::exit(1);
        }
    };

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(output) => println!("Created {}", output.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf, Error> {
    let input = &cli.input;
    validate_input(input)?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::compiled_default(),
    };

    // Read input file
    let markdown = fs::read_to_string(input).map_err(|source| Error::Processing {
        path: input.clone(),
        source,
    })?;
    log::debug!("read {} bytes from {}", markdown.len(), input.display());

    let title = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let html = mdhtml::markdown_to_html_with_config(&title, &markdown, &config);

    // Determine output path
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| input.with_extension("html"));

    fs::write(&output, html).map_err(|source| Error::Processing {
        path: output.clone(),
        source,
    })?;

    Ok(output)
}

fn validate_input(input: &Path) -> Result<(), Error> {
    if input.extension().is_none_or(|ext| ext != "md") {
        return Err(Error::InvalidExtension(input.to_path_buf()));
    }
    if !input.exists() {
        return Err(Error::FileNotFound(input.to_path_buf()));
    }
    Ok(())
}
