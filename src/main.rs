// Entrypoint for the CLI application.
// - Keeps `main` small: create the grade store and hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling for the prototype.

use grade_analyzer_cli::{store::GradeStore, ui::main_menu};

fn main() -> anyhow::Result<()> {
    // Log output is controlled by the RUST_LOG environment variable
    // (e.g. RUST_LOG=debug for store mutation traces).
    env_logger::init();

    // Start the interactive menu. This call blocks until the user exits;
    // the store is discarded with the process, nothing is persisted.
    main_menu(GradeStore::new())?;
    Ok(())
}
