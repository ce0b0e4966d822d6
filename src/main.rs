//! Binary entry point that glues the JSON-backed working list to the TUI.
//! Summarizing the bootstrapping pipeline here keeps the intent obvious when
//! revisiting the code: we open the store, load the saved order (or fall back
//! to the seed program), and drive the Ratatui event loop until the user
//! exits.
use anyhow::Context;

use recital_order_manager::{load_dances, run_app, seed_dances, App, FileStore, ProgramOrder};

/// Initialize persistence, load the working list, and launch the Ratatui
/// event loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for example
/// the user removing the writable data directory) to the terminal instead of
/// crashing silently. A corrupt or missing saved order is not fatal; it just
/// means starting from the seed program.
fn main() -> anyhow::Result<()> {
    let store = FileStore::open().context("failed to open the data directory")?;
    let seed = seed_dances();
    let dances = load_dances(&store, &seed);

    let mut app = App::new(store, ProgramOrder::new(dances, seed));
    run_app(&mut app)
}
