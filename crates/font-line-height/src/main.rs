use std::{
    fs::{read, write},
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use font_line_height::{apply_line_height, output_path, read_metrics};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Rescale(#[from] font_line_height::Error),
}

#[derive(Parser)]
#[command(name = "font-line-height", version)]
#[command(about = "Symmetrically expand a font's vertical metrics to a target line-height ratio")]
struct Cli {
    /// Input font file
    input: PathBuf,

    /// Target ratio of the new line height to the original ascent + descent
    #[arg(default_value_t = 1.2)]
    ratio: f64,

    /// Output file (default: INPUT stem + .sym<ratio*100>p + extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Quiet output
    #[arg(short, long)]
    quiet: bool,

    /// Show the font's current vertical metrics and exit
    #[arg(long)]
    info: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if cli.info {
        return show_info(&cli.input);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let data = read(&cli.input)?;
    let rescaled = apply_line_height(&data, cli.ratio)?;

    let output = cli
        .output
        .unwrap_or_else(|| output_path(&cli.input, cli.ratio));
    write(&output, rescaled.data)?;
    if !cli.quiet {
        println!("{}", output.display());
    }

    Ok(())
}

fn show_info(path: &Path) -> ExitCode {
    let data = match read(path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading file: {e}");
            return ExitCode::FAILURE;
        }
    };

    let metrics = match read_metrics(&data) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "hhea:  ascender {:5}  descender {:5}  lineGap {:5}",
        metrics.ascender, metrics.descender, metrics.line_gap
    );
    println!(
        "OS/2:  typoAscender {:5}  typoDescender {:5}  typoLineGap {:5}",
        metrics.typo_ascender, metrics.typo_descender, metrics.typo_line_gap
    );
    println!(
        "       winAscent {:5}  winDescent {:5}",
        metrics.win_ascent, metrics.win_descent
    );
    println!(
        "       USE_TYPO_METRICS {}",
        if metrics.use_typo_metrics { "set" } else { "not set" }
    );

    ExitCode::SUCCESS
}
