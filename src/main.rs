use clap::Parser;
use photomark::{batch, config, imaging, output};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "photomark")]
#[command(about = "Apply a logo watermark and/or resize to JPEG photos")]
#[command(long_about = "\
Apply a logo watermark and/or resize to JPEG photos

Point it at one photo or a directory. Each qualifying photo (jpg, JPG, jpeg)
is written into the destination folder with a filename suffix; non-matching
files are skipped, subdirectories are not descended into.

The watermark is anchored bottom-left with a configurable margin and is
downscaled so it never occupies more than 13% of the photo width. Resizing
is shrink-to-fit only: the longest side is capped, never enlarged.

Examples:

  # Watermark one photo, resized to 1100px on the longest side
  photomark -r -m 1100 shoots/DSC_9521.jpg

  # Whole folder, default max size, black logo variant
  photomark -r -b shoots/

  # Resize only, no watermark (requires -r)
  photomark -n -r -m 1000 shoots/

  # Watermark and resize for print at 300 dpi, wider margin
  photomark -r -p -m 3600 -a 150 shoots/")]
#[command(version = env!("PHOTOMARK_BUILD"))]
struct Cli {
    /// Photo file or directory of photos
    image: PathBuf,

    /// Margin between the photo edge and the watermark (pixels)
    #[arg(short = 'a', long)]
    margin: Option<u32>,

    /// Use the black logo variant instead of the default white one
    #[arg(short, long)]
    black: bool,

    /// Max pixel size of the longest side. Only meaningful with -r
    #[arg(short, long)]
    max_size: Option<u32>,

    /// Just resize, skip the watermark. Requires -r
    #[arg(short, long, requires = "resize")]
    no_watermark: bool,

    /// Keep print density (300 dpi) even when resizing
    #[arg(short, long)]
    print_size: bool,

    /// Shrink each photo so its longest side fits the max size
    #[arg(short, long)]
    resize: bool,

    /// Suffix appended to output filenames (a leading _ is added)
    #[arg(short, long)]
    suffix: Option<String>,

    /// Path to a watermark PNG, overriding the bundled variants
    #[arg(short, long)]
    logo: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    output::print_banner(env!("PHOTOMARK_BUILD"));

    match run(cli) {
        Ok(report) if report.is_clean() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<batch::BatchReport, Box<dyn std::error::Error>> {
    let max_size_overridden = cli.max_size.is_some();

    let config = config::RunConfig::build(config::Overrides {
        margin: cli.margin,
        suffix: cli.suffix,
        max_size: cli.max_size,
        logo: cli.logo,
        black_logo: cli.black,
        resize: cli.resize,
        no_watermark: cli.no_watermark,
        print_size: cli.print_size,
    })?;

    output::print_suffix_line(&config.suffix);
    if config.resize {
        output::print_max_size_line(config.max_size, max_size_overridden);
    }

    // Destination creation is this layer's job, not the processor's
    std::fs::create_dir_all(&config.dest_path)?;

    let backend = imaging::RustBackend::new();
    let report = batch::run(&backend, &cli.image, &config)?;
    output::print_summary(&report);
    Ok(report)
}
