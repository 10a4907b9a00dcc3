// Seeded region growing on a grayscale image
use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use segkit::cli::{ensure_dir, init_logging, parse_seed, save_png};
use segkit::color::render_segmentation_overlay;
use segkit::io::read_image;
use segkit::region::{ConnectivityType, RegionGrowOptions, region_grow_detailed};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "segkit-grow",
    version,
    about = "Region-growing segmentation from seed points"
)]
struct Cli {
    /// Input image; colour images are reduced to gray
    #[arg(long = "input", default_value = "input/brain_image.jpg", value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Directory for the mask and overlay images
    #[arg(long = "output-dir", default_value = "results/task-2", value_hint = ValueHint::DirPath)]
    output_dir: PathBuf,

    /// Seed point as ROW,COL (repeatable); without seeds the white and
    /// gray matter presets are run
    #[arg(long = "seed", value_parser = parse_seed)]
    seeds: Vec<(i32, i32)>,

    /// Maximum deviation from the seed mean
    #[arg(long = "threshold", default_value_t = 15)]
    threshold: u32,

    /// Pixel connectivity (4 or 8)
    #[arg(long = "connectivity", default_value_t = 8)]
    connectivity: u32,

    /// Suffix for the output file names when seeds are given
    #[arg(long = "name", default_value = "custom")]
    name: String,
}

struct Run {
    suffix: String,
    seeds: Vec<(i32, i32)>,
}

fn build_runs(cli: &Cli) -> Vec<Run> {
    if cli.seeds.is_empty() {
        vec![
            Run {
                suffix: "white_matter".to_string(),
                seeds: vec![(215, 225)],
            },
            Run {
                suffix: "gray_matter".to_string(),
                seeds: vec![(150, 150)],
            },
        ]
    } else {
        vec![Run {
            suffix: cli.name.clone(),
            seeds: cli.seeds.clone(),
        }]
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let connectivity = ConnectivityType::try_from(cli.connectivity)?;
    let options = RegionGrowOptions::new(cli.threshold).with_connectivity(connectivity);

    let image = read_image(&cli.input)
        .with_context(|| format!("could not load image from {}", cli.input.display()))?
        .convert_to_gray()?;
    log::info!(
        "loaded {} ({}x{})",
        cli.input.display(),
        image.width(),
        image.height()
    );

    ensure_dir(&cli.output_dir)?;
    save_png(&image, &cli.output_dir, "brain_mri_original.png")?;

    for run in build_runs(&cli) {
        log::info!("segmenting {} with seeds {:?}", run.suffix, run.seeds);
        let growth =
            region_grow_detailed(&image, &run.seeds, options.threshold, options.connectivity)
                .with_context(|| format!("region growing failed for {}", run.suffix))?;
        if let Some(mean) = growth.seed_mean {
            log::info!("average seed intensity: {:.2}", mean);
        }
        log::info!("{}: {} pixel(s) selected", run.suffix, growth.selected_count);

        let overlay = render_segmentation_overlay(&image, &growth.mask, &run.seeds)?;
        save_png(
            &growth.mask,
            &cli.output_dir,
            &format!("segmented_mask_{}.png", run.suffix),
        )?;
        save_png(
            &overlay,
            &cli.output_dir,
            &format!("segmentation_overlay_{}.png", run.suffix),
        )?;
    }

    Ok(())
}
