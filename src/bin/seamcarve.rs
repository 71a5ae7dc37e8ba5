use clap::{Arg, ArgAction, Command};
use image::{DynamicImage, ImageFormat, RgbaImage};
use log::{debug, info, LevelFilter};
use seamcarve::{compute_energy, Reduction, SeamCarver, SeamError};
use std::path::Path;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Seam(#[from] SeamError),
    #[error("{path}: {source}")]
    Image {
        path: String,
        source: image::ImageError,
    },
}

fn command() -> Command {
    Command::new("seamcarve")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware width reduction by seam carving")
        .arg(
            Arg::new("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Where to write the result; the format follows the extension")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("reduce")
                .short('r')
                .long("reduce")
                .value_name("AMOUNT")
                .help("Seams to remove, either a count (\"12\") or a share of the width (\"30%\")")
                .default_value("10%")
                .value_parser(|s: &str| s.parse::<Reduction>().map_err(|e| e.to_string())),
        )
        .arg(
            Arg::new("energy")
                .long("energy")
                .help("Write the energy map of the input instead of carving it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("More logging; repeat for more")
                .action(ArgAction::Count),
        )
}

fn level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// Formats whose encoders accept an alpha channel.
fn keeps_alpha(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Png
            | ImageFormat::Tiff
            | ImageFormat::WebP
            | ImageFormat::Tga
            | ImageFormat::Bmp
            | ImageFormat::Ico
            | ImageFormat::OpenExr
            | ImageFormat::Qoi
            | ImageFormat::Farbfeld
            | ImageFormat::Avif
    )
}

fn save(image: RgbaImage, output: &str) -> Result<(), CliError> {
    let path = Path::new(output);
    let saved = match ImageFormat::from_path(path) {
        Ok(format) if !keeps_alpha(format) => {
            debug!("{:?} has no alpha channel, writing RGB", format);
            DynamicImage::ImageRgba8(image).to_rgb8().save(path)
        }
        _ => image.save(path),
    };
    saved.map_err(|source| CliError::Image {
        path: output.to_string(),
        source,
    })
}

fn run(input: &str, output: &str, reduction: Reduction, energy_only: bool) -> Result<(), CliError> {
    let image = image::open(Path::new(input))
        .map_err(|source| CliError::Image {
            path: input.to_string(),
            source,
        })?
        .into_rgba8();
    info!("read {} ({}x{})", input, image.width(), image.height());

    let result = if energy_only {
        compute_energy(&image)?.into_image()
    } else {
        let seams = reduction.seams_for(image.width())?;
        info!("removing {} seams ({})", seams, reduction);
        SeamCarver::new(&image).carve_seams(seams)?
    };

    let (width, height) = result.dimensions();
    save(result, output)?;
    info!("wrote {} ({}x{})", output, width, height);
    Ok(())
}

fn main() -> ExitCode {
    let matches = command().get_matches();

    env_logger::Builder::new()
        .filter_level(level(matches.get_count("verbose")))
        .parse_default_env()
        .init();

    // Required and defaulted arguments are always present.
    let input = matches.get_one::<String>("input").map(String::as_str).unwrap_or_default();
    let output = matches.get_one::<String>("output").map(String::as_str).unwrap_or_default();
    let reduction = matches.get_one::<Reduction>("reduce").copied().unwrap_or_default();

    match run(input, output, reduction, matches.get_flag("energy")) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("seamcarve: {}", e);
            ExitCode::FAILURE
        }
    }
}
