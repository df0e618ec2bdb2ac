use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::info;
use whatsnew::{ChangelogSurface, Config};

#[derive(Parser)]
#[command(name = "whatsnew")]
#[command(about = "Render release notes into a \"What's New\" document")]
struct Cli {
    /// Input changelog file
    input: PathBuf,

    /// Version shown on the surface (defaults to the configured fallback)
    #[arg(short, long)]
    version: Option<String>,

    /// Output file (defaults to input name with the format's extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Pdf)]
    format: Format,

    /// TOML config file
    #[arg(short, long, default_value = "whatsnew.toml")]
    config: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Typst,
    Pdf,
    Svg,
    Json,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Typst => "typ",
            Format::Pdf => "pdf",
            Format::Svg => "svg",
            Format::Json => "json",
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    run(Cli::parse())?;
    Ok(())
}

/// Render the changelog and return the files written.
fn run(cli: Cli) -> Result<Vec<PathBuf>> {
    let config = Config::load(&cli.config)?;
    let changelog = fs::read_to_string(&cli.input)
        .with_context(|| format!("Error reading {}", cli.input.display()))?;

    // A CLI run has no exit transition to wait for
    let Some(surface) =
        ChangelogSurface::new(cli.version.as_deref(), Some(changelog.as_str()), &config.surface, || {})
    else {
        info!("{} is empty, nothing to render", cli.input.display());
        return Ok(Vec::new());
    };

    let output = match cli.output {
        Some(output) if output == cli.input => {
            bail!("Refusing to overwrite input {}", cli.input.display())
        }
        Some(output) => output,
        None => default_output(&cli.input, cli.format),
    };

    let mut written = Vec::new();
    match cli.format {
        Format::Typst => write(&output, whatsnew::surface_to_typst(&surface, &config), &mut written)?,
        Format::Json => write(&output, whatsnew::blocks_to_json(surface.blocks())?, &mut written)?,
        Format::Pdf => write(&output, whatsnew::surface_to_pdf(&surface, &config)?, &mut written)?,
        Format::Svg => {
            let doc = whatsnew::surface_to_svg(&surface, &config)?;
            if doc.pages.len() == 1 {
                write(&output, &doc.pages[0], &mut written)?;
            } else {
                for (n, page) in doc.pages.iter().enumerate() {
                    write(&page_path(&output, n + 1), page, &mut written)?;
                }
            }
        }
    }

    Ok(written)
}

/// Input name with the format's extension, never the input itself.
fn default_output(input: &Path, format: Format) -> PathBuf {
    let output = input.with_extension(format.extension());
    if output != input {
        return output;
    }
    // `notes.json` -> `notes.whatsnew.json`
    input.with_extension(format!("whatsnew.{}", format.extension()))
}

fn write(path: &Path, contents: impl AsRef<[u8]>, written: &mut Vec<PathBuf>) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Error writing {}", path.display()))?;
    println!("Created {}", path.display());
    written.push(path.to_path_buf());
    Ok(())
}

/// `notes.svg` -> `notes-2.svg`
fn page_path(output: &Path, page: usize) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output.with_file_name(format!("{stem}-{page}.svg"))
}
