//! Renders the bike sharing dashboard from `clean_data.csv` in the working directory.
//!
//! Set `RUST_LOG=debug` for per-step details.

use bikeshare_dashboard::Dashboard;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let dashboard = Dashboard::default();
    log::info!("Configuration: {:?}", dashboard.config());

    let rendered = dashboard.run()?;
    println!("Dashboard written to {}", rendered.index.display());

    Ok(())
}
