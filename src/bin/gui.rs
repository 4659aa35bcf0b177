fn main() -> anyhow::Result<()> {
    fractal_visualizer::init_tracing();
    fractal_visualizer::run_gui()?;

    Ok(())
}
