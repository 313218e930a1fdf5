// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive CLI.
//
// Module responsibilities:
// - `store`: Owns the in-memory student records and implements the
//   operations on them (add students, record grades, build the report,
//   find the top performer).
// - `ui`: Implements the terminal-based menu flows and delegates every
//   operation to `store`, translating its results into display text.
//
// Keeping this separation makes the store logic testable without a
// terminal and would allow replacing the UI in the future (for example,
// adding a TUI or a web front end).
pub mod store;
pub mod ui;
