mod fighter;
mod viewer;

use hangar_engine::logging::{init_logging, LoggingConfig};

use crate::viewer::Viewer;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("hangar viewer {}", env!("CARGO_PKG_VERSION"));

    Viewer::new().title("Hangar · TIE fighter").size(1000.0, 800.0).run()
}
