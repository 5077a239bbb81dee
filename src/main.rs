use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fractal_engine::{
    CliController, Complex, FractalType, Palette, PpmFilePresenter, RenderSettings,
    SettingsOverrides,
};

/// Renders an escape-time fractal to a PPM image.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON settings file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// mandelbrot, julia, burning-ship, tricorn, multibrot, newton, phoenix or lambda
    #[arg(long = "type", value_name = "TYPE")]
    fractal_type: Option<FractalType>,

    /// Julia constant or Phoenix parameter as "re,im"
    #[arg(long, allow_hyphen_values = true)]
    param: Option<Complex>,

    /// Multibrot exponent
    #[arg(long, allow_hyphen_values = true)]
    exponent: Option<f64>,

    #[arg(long)]
    iterations: Option<u32>,

    #[arg(long)]
    threshold: Option<f64>,

    /// View center as "re,im"
    #[arg(long, allow_hyphen_values = true)]
    center: Option<Complex>,

    /// Pixels per unit on the complex plane
    #[arg(long)]
    zoom: Option<f64>,

    /// Rotation in degrees
    #[arg(long, allow_hyphen_values = true)]
    rotation: Option<f64>,

    #[arg(long)]
    palette: Option<String>,

    /// Cyclic palette offset, wrapped onto [0, 1)
    #[arg(long, allow_hyphen_values = true)]
    shift: Option<f64>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Render this many times larger, framing the same region
    #[arg(long)]
    scale: Option<u32>,

    #[arg(short, long, default_value = "output/fractal.ppm")]
    output: PathBuf,

    /// Print the built-in palettes and exit
    #[arg(long)]
    list_palettes: bool,
}

impl Args {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            fractal_type: self.fractal_type,
            parameter: self.param,
            exponent: self.exponent,
            max_iterations: self.iterations,
            escape_threshold: self.threshold,
            center: self.center,
            zoom_scale: self.zoom,
            rotation_degrees: self.rotation,
            palette: self.palette.clone(),
            colour_shift: self.shift,
            width: self.width,
            height: self.height,
            export_scale: self.scale,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list_palettes {
        for palette in Palette::factory_defaults() {
            println!("{:<10} {}", palette.id(), palette.name());
        }
        return Ok(());
    }

    let mut settings = match &args.config {
        Some(path) => RenderSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => RenderSettings::default(),
    };
    settings.apply(&args.overrides());

    let mut controller = CliController::new(PpmFilePresenter::new());

    controller.generate(&settings).context("rendering")?;
    controller
        .write(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    Ok(())
}
