// UI layer: the interactive dropdown loop built on `dialoguer`.
// Choosing a file entry loads and renders it; the copy actions read
// whatever the card currently holds.

use crate::api::{FetchError, FileClient};
use crate::card::{
    self, CardSurface, LabelStyle, MenuButton, Selection, TermSurface, FEEDBACK_DURATION,
};
use crate::clipboard::copy_to_clipboard;
use crate::listing::CopyFormat;
use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};
use std::thread;
use std::time::Duration;

/// One dropdown entry: a configured filename plus the label shown in the
/// menu (the file's title, or a load-failure note).
struct MenuEntry {
    filename: String,
    label: String,
    failed: bool,
}

impl MenuEntry {
    /// Menu label, error-styled when the title prefetch failed.
    fn display(&self) -> String {
        if self.failed {
            self.label.as_str().red().to_string()
        } else {
            self.label.clone()
        }
    }
}

/// Run the interactive menu. Renders the welcome card, prefetches the
/// dropdown titles, then blocks in a select loop until the user exits.
///
/// Loads are serialized by the loop itself: the prompt does not come back
/// until the previous fetch has rendered, so a stale response can never
/// overwrite a newer selection.
pub fn main_menu(client: FileClient) -> Result<()> {
    let mut surface = TermSurface;
    let mut button = MenuButton::new();
    let mut selection =
        card::render_blank(&mut surface, &mut button, "No file content loaded.", false);

    let entries = build_menu(&client);

    loop {
        let mut items: Vec<String> = entries.iter().map(MenuEntry::display).collect();
        items.push("Copy all (newline)".into());
        items.push("Copy all (comma)".into());
        items.push("Copy one item".into());
        items.push("Exit".into());

        let choice = Select::new()
            .with_prompt(button.label.clone())
            .items(&items)
            .default(0)
            .interact()?;

        if choice < entries.len() {
            selection = load_file(&client, &mut surface, &mut button, &entries[choice].filename);
            continue;
        }
        match choice - entries.len() {
            0 => copy_list(&mut surface, &mut button, &selection, CopyFormat::Newline),
            1 => copy_list(&mut surface, &mut button, &selection, CopyFormat::Comma),
            2 => copy_item(&mut surface, &mut button, &selection)?,
            3 => break,
            _ => {}
        }
    }
    Ok(())
}

/// Build the dropdown by prefetching every file's title. The fetches run
/// concurrently on their own threads; entries keep configured-list order
/// because the joins happen in index order.
fn build_menu(client: &FileClient) -> Vec<MenuEntry> {
    let handles: Vec<_> = client
        .files()
        .iter()
        .map(|filename| {
            let client = client.clone();
            let filename = filename.clone();
            thread::spawn(move || {
                let title = client.fetch_title(&filename);
                (filename, title)
            })
        })
        .collect();

    handles
        .into_iter()
        .map(|handle| {
            let (filename, title) = handle.join().expect("title prefetch thread panicked");
            entry_for(filename, title)
        })
        .collect()
}

/// Label a menu entry from its prefetch outcome. A failure degrades to an
/// error-styled `(Load Failed)` entry instead of aborting the other files.
fn entry_for(filename: String, title: Result<String, FetchError>) -> MenuEntry {
    match title {
        Ok(title) => MenuEntry {
            filename,
            label: title,
            failed: false,
        },
        Err(err) => {
            eprintln!("Fetch error: {}: {}", filename, err);
            let label = format!("{} (Load Failed)", filename);
            MenuEntry {
                filename,
                label,
                failed: true,
            }
        }
    }
}

/// Fetch `filename`, parse it, and render the card. Any failure renders
/// the error card and logs the cause; there is no retry.
fn load_file(
    client: &FileClient,
    surface: &mut dyn CardSurface,
    button: &mut MenuButton,
    filename: &str,
) -> Selection {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(format!("Loading {}...", filename));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = client.fetch_file(filename);
    spinner.finish_and_clear();

    match result {
        Ok(listing) => card::render_card(surface, button, listing),
        Err(err) => {
            eprintln!("Fetch error: {}", err);
            card::render_blank(
                surface,
                button,
                &format!("Error loading file: {}. Check console for details.", filename),
                true,
            )
        }
    }
}

/// Bulk copy: the current items joined per `format`. An empty selection
/// flashes an error note and never touches the clipboard.
fn copy_list(
    surface: &mut dyn CardSurface,
    button: &mut MenuButton,
    selection: &Selection,
    format: CopyFormat,
) {
    match selection.copy_payload(format) {
        Some(payload) => {
            let message = format!("List copied ({} format)!", format.label());
            copy_with_feedback(surface, button, &payload, &message);
        }
        None => button.flash(
            surface,
            "No content to copy!",
            LabelStyle::Error,
            FEEDBACK_DURATION,
        ),
    }
}

/// Per-item copy: pick one of the current items and copy its exact text.
fn copy_item(
    surface: &mut dyn CardSurface,
    button: &mut MenuButton,
    selection: &Selection,
) -> Result<()> {
    if selection.items().is_empty() {
        button.flash(
            surface,
            "No content to copy!",
            LabelStyle::Error,
            FEEDBACK_DURATION,
        );
        return Ok(());
    }
    let choice = Select::new()
        .with_prompt("Copy which item?")
        .items(selection.items())
        .default(0)
        .interact()?;
    copy_with_feedback(surface, button, &selection.items()[choice], "Item copied!");
    Ok(())
}

/// Write to the clipboard and flash the success note. Write failures are
/// logged only; the button is left alone.
fn copy_with_feedback(
    surface: &mut dyn CardSurface,
    button: &mut MenuButton,
    text: &str,
    message: &str,
) {
    match copy_to_clipboard(text) {
        Ok(()) => button.flash(surface, message, LabelStyle::Success, FEEDBACK_DURATION),
        Err(err) => eprintln!("Could not copy text: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[derive(Default)]
    struct Recording {
        button: Vec<(String, LabelStyle)>,
    }

    impl CardSurface for Recording {
        fn button(&mut self, label: &str, style: LabelStyle) {
            self.button.push((label.to_string(), style));
        }
        fn title(&mut self, _title: &str, _is_error: bool) {}
        fn count(&mut self, _label: &str) {}
        fn placeholder(&mut self, _message: &str) {}
        fn item(&mut self, _ordinal: usize, _text: &str) {}
    }

    #[test]
    fn bulk_copy_with_no_selection_flashes_the_error_note() {
        let mut surface = Recording::default();
        let mut button = MenuButton::new();

        // Nothing loaded: no clipboard write happens, only the flash.
        copy_list(&mut surface, &mut button, &Selection::blank(), CopyFormat::Comma);

        assert_eq!(
            surface.button[0],
            ("No content to copy!".to_string(), LabelStyle::Error)
        );
        assert_eq!(button.label, "Select a File");
        assert_eq!(button.style, LabelStyle::Plain);
    }

    #[test]
    fn prefetched_title_labels_the_entry() {
        let entry = entry_for("yes.txt".into(), Ok("Yes List".into()));
        assert_eq!(entry.label, "Yes List");
        assert!(!entry.failed);
        assert_eq!(entry.display(), "Yes List");
    }

    #[test]
    fn prefetch_failure_degrades_to_a_load_failed_entry() {
        let entry = entry_for(
            "no.txt".into(),
            Err(FetchError::Status(StatusCode::NOT_FOUND)),
        );
        assert_eq!(entry.label, "no.txt (Load Failed)");
        assert!(entry.failed);
        // Styled for the menu, but still carrying the plain label text.
        assert!(entry.display().contains("no.txt (Load Failed)"));
    }
}
