// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive file browser.
//
// Module responsibilities:
// - `api`: fetches the configured files from the static file host.
// - `listing`: the title/list file format and its parse rules.
// - `card`: the selection card, its render states, and the menu button.
// - `clipboard`: system clipboard writes.
// - `ui`: the dropdown loop tying fetches, renders, and copies together.
//
// The card renders through the `CardSurface` trait, so everything except
// the dialoguer loop itself can be exercised against a recording surface
// in tests.
pub mod api;
pub mod card;
pub mod clipboard;
pub mod listing;
pub mod ui;
