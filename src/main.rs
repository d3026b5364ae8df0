/*
 * Pipe Descaling Animation
 *
 * This application illustrates how a descaling agent removes mineral scale
 * from the inside of a pipe:
 * 1. Scale clings to both walls in three layers bound by van der Waals links
 * 2. The agent flows left to right and dissolves one layer per pass
 * 3. Links break as scale comes loose and is carried away with the flow
 *
 * The control panel restarts or pauses the animation and shows progress.
 */

use descaling::app::{model, update};

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting pipe descaling animation...");

    nannou::app(model).update(update).run();
}
