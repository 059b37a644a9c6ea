// main.rs - Game of Life with hold-to-paint editing and timed autoplay
//
// Left drag paints, right drag erases, space advances one generation, `p`
// starts or pauses stepping every 10th frame and `c` clears the board.

use conway::{RunError, Variant};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RunError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    conway::ui::run(Variant::Autoplay)
}
