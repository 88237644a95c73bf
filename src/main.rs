// Entrypoint for the CLI application.
// - Keeps `main` small: create a file client and hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling at the boundary.

use filecard_cli::{api::FileClient, ui::main_menu};

fn main() -> anyhow::Result<()> {
    // The base URL and file list come from `FILE_HOST_URL` / `FILE_LIST`,
    // with defaults for a local static host. See `api::FileClient::from_env`.
    let client = FileClient::from_env()?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(client)?;
    Ok(())
}
