use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::core::actions::render::render::Execution;
use crate::core::config::{CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_DEPTH, DEFAULT_MAX_ITERATIONS};
use crate::core::data::render_parameters::RenderParameters;
use crate::core::fractals::fractal_kinds::FractalKinds;

#[derive(Parser, Debug)]
#[command(name = "fractal_visualizer", version, about = "Render a fractal to an image file")]
pub struct Cli {
    /// Fractal to draw.
    #[arg(long, value_enum, default_value_t = FractalArg::Julia)]
    pub fractal: FractalArg,

    /// Iteration budget (escape-time fractals, fern sample count). Clamped to 1-200.
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: u32,

    /// Recursion depth for Sierpinski, Koch and Dragon. Clamped to 1-12.
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u32,

    #[arg(long, default_value_t = CANVAS_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    #[arg(long, default_value_t = CANVAS_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Seed for the Barnsley fern. A fresh one is drawn when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Compute escape-time pixels on the rayon thread pool.
    #[arg(long)]
    pub parallel: bool,

    /// Output image path.
    #[arg(long, default_value = "output/fractal.ppm")]
    pub out: PathBuf,

    /// Output format. Inferred from the `--out` extension when omitted.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FractalArg {
    Mandelbrot,
    Julia,
    Newton,
    Sierpinski,
    Koch,
    Dragon,
    Barnsley,
}

impl From<FractalArg> for FractalKinds {
    fn from(arg: FractalArg) -> Self {
        match arg {
            FractalArg::Mandelbrot => Self::Mandelbrot,
            FractalArg::Julia => Self::Julia,
            FractalArg::Newton => Self::Newton,
            FractalArg::Sierpinski => Self::Sierpinski,
            FractalArg::Koch => Self::Koch,
            FractalArg::Dragon => Self::Dragon,
            FractalArg::Barnsley => Self::Barnsley,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Ppm,
    Png,
}

impl FormatArg {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => Self::Png,
            _ => Self::Ppm,
        }
    }
}

impl Cli {
    #[must_use]
    pub fn params(&self) -> RenderParameters {
        RenderParameters::new(self.fractal.into(), self.iterations, self.depth)
    }

    #[must_use]
    pub fn execution(&self) -> Execution {
        if self.parallel {
            Execution::Rayon
        } else {
            Execution::Sequential
        }
    }

    #[must_use]
    pub fn output_format(&self) -> FormatArg {
        self.format.unwrap_or_else(|| FormatArg::from_path(&self.out))
    }
}
