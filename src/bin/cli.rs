// src/bin/cli.rs
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    physdata::logging::init();
    physdata::cli::run()
}
