// main.rs - Click cells to toggle them, starting from a checkerboard

use conway::{RunError, Variant};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RunError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    conway::ui::run(Variant::ToggleEditor)
}
