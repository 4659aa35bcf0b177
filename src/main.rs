use anyhow::Context as _;
use clap::Parser;

use fractal_visualizer::controllers::cli::render_file::RenderFileController;
use fractal_visualizer::controllers::ports::file_presenter::FilePresenterPort;
use fractal_visualizer::core::actions::render::render::RenderOptions;
use fractal_visualizer::core::data::pixel_rect::PixelRect;
use fractal_visualizer::input::cli::args::{Cli, FormatArg};
use fractal_visualizer::presenters::file::png::PngFilePresenter;
use fractal_visualizer::presenters::file::ppm::PpmFilePresenter;

fn main() -> anyhow::Result<()> {
    fractal_visualizer::init_tracing();

    let cli = Cli::parse();
    let pixel_rect = PixelRect::new(cli.width, cli.height).context("invalid canvas size")?;
    let options = RenderOptions::default()
        .with_execution(cli.execution())
        .with_seed(cli.seed.unwrap_or_else(rand::random));

    match cli.output_format() {
        FormatArg::Ppm => render_to(PpmFilePresenter::new(), &cli, &options, pixel_rect),
        FormatArg::Png => render_to(PngFilePresenter::new(), &cli, &options, pixel_rect),
    }
}

fn render_to<P: FilePresenterPort>(
    presenter: P,
    cli: &Cli,
    options: &RenderOptions,
    pixel_rect: PixelRect,
) -> anyhow::Result<()> {
    if let Some(parent) = cli.out.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let mut controller = RenderFileController::new(presenter);
    controller.generate(cli.params(), options, pixel_rect);
    controller
        .write(&cli.out)
        .with_context(|| format!("write image '{}'", cli.out.display()))?;

    Ok(())
}
