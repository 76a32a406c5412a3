mod app;
mod logic;
mod models;
mod mvu;
mod ui;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // `--admin` exposes the manual status override controls.
    let admin = std::env::args().any(|arg| arg == "--admin");
    if admin {
        log::info!("admin mode enabled");
    }

    app::run(admin)
        .map_err(|err| anyhow::anyhow!("{err}"))
        .context("failed to launch UI")
}
