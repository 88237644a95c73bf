// Card rendering: the selection card shown under the dropdown. All output
// goes through the `CardSurface` trait, so the render rules and the
// feedback flash run against a recording surface in tests.

use std::thread;
use std::time::Duration;

use crossterm::style::Stylize;

use crate::listing::{CopyFormat, Listing};

/// How long copy feedback stays on the menu button before reverting.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(1500);

/// Visual treatment of the menu-button label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    Plain,
    Success,
    Error,
}

/// The currently displayed title and items, plus the serialized form the
/// bulk-copy actions read. The copy buffer is always the newline join of
/// the items, or empty when nothing is loaded; the two constructors below
/// are the only way to build one, which keeps that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    title: String,
    items: Vec<String>,
    copy_buffer: String,
}

impl Selection {
    pub fn blank() -> Selection {
        Selection {
            title: String::new(),
            items: Vec::new(),
            copy_buffer: String::new(),
        }
    }

    pub fn from_listing(listing: Listing) -> Selection {
        let copy_buffer = listing.items.join("\n");
        Selection {
            title: listing.title,
            items: listing.items,
            copy_buffer,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Serialized items for bulk copy; empty when no file is loaded.
    pub fn copy_buffer(&self) -> &str {
        &self.copy_buffer
    }

    /// The bulk-copy text in the requested format, or `None` when there is
    /// nothing to copy.
    pub fn copy_payload(&self, format: CopyFormat) -> Option<String> {
        if self.copy_buffer.is_empty() {
            return None;
        }
        Some(self.items.join(format.separator()))
    }
}

/// Capability surface the renders draw on.
pub trait CardSurface {
    /// Show the menu-button label in the given style.
    fn button(&mut self, label: &str, style: LabelStyle);
    /// Show the card title.
    fn title(&mut self, title: &str, is_error: bool);
    /// Show the item-count label.
    fn count(&mut self, label: &str);
    /// Show the single placeholder line of a blank or error card.
    fn placeholder(&mut self, message: &str);
    /// Show one item line with its 1-based ordinal.
    fn item(&mut self, ordinal: usize, text: &str);
}

/// The dropdown button: its label doubles as the select prompt and as the
/// copy-feedback area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuButton {
    pub label: String,
    pub style: LabelStyle,
}

impl MenuButton {
    pub fn new() -> MenuButton {
        MenuButton {
            label: "Select a File".into(),
            style: LabelStyle::Plain,
        }
    }

    /// Temporarily replace the label and style with a feedback message,
    /// then revert both once `duration` has elapsed.
    pub fn flash(
        &mut self,
        surface: &mut dyn CardSurface,
        message: &str,
        style: LabelStyle,
        duration: Duration,
    ) {
        let original_label = std::mem::replace(&mut self.label, message.to_string());
        let original_style = std::mem::replace(&mut self.style, style);
        surface.button(&self.label, self.style);
        thread::sleep(duration);
        self.label = original_label;
        self.style = original_style;
        surface.button(&self.label, self.style);
    }
}

impl Default for MenuButton {
    fn default() -> MenuButton {
        MenuButton::new()
    }
}

/// Render the blank card: a welcome or error message, a zero count, and
/// the button reset to its initial label. Returns the blank selection so
/// callers can drop whatever was displayed before.
pub fn render_blank(
    surface: &mut dyn CardSurface,
    button: &mut MenuButton,
    message: &str,
    is_error: bool,
) -> Selection {
    button.label = "Select a File".into();
    button.style = LabelStyle::Plain;
    surface.button(&button.label, button.style);
    surface.title(if is_error { "Error / Note" } else { "Welcome" }, is_error);
    surface.count(&count_label(0));
    surface.placeholder(message);
    Selection::blank()
}

/// Render a loaded file: title, pluralized count, and the items with
/// 1-based ordinal prefixes. Returns the new selection state.
pub fn render_card(
    surface: &mut dyn CardSurface,
    button: &mut MenuButton,
    listing: Listing,
) -> Selection {
    let selection = Selection::from_listing(listing);
    button.label = selection.title().to_string();
    button.style = LabelStyle::Plain;
    surface.button(&button.label, button.style);
    surface.title(selection.title(), false);
    surface.count(&count_label(selection.items().len()));
    for (index, item) in selection.items().iter().enumerate() {
        surface.item(index + 1, item);
    }
    selection
}

/// `N item` / `N items`, pluralized on every count but 1.
pub fn count_label(count: usize) -> String {
    format!("{} item{}", count, if count != 1 { "s" } else { "" })
}

/// Terminal card surface, styled with crossterm.
pub struct TermSurface;

impl CardSurface for TermSurface {
    fn button(&mut self, label: &str, style: LabelStyle) {
        match style {
            LabelStyle::Plain => println!("[ {} ]", label),
            LabelStyle::Success => println!("[ {} ]", label.green()),
            LabelStyle::Error => println!("[ {} ]", label.red()),
        }
    }

    fn title(&mut self, title: &str, is_error: bool) {
        if is_error {
            println!("== {} ==", title.red());
        } else {
            println!("== {} ==", title.bold());
        }
    }

    fn count(&mut self, label: &str) {
        println!("   {}", label.dim());
    }

    fn placeholder(&mut self, message: &str) {
        println!("   {}", message.italic().dim());
    }

    fn item(&mut self, ordinal: usize, text: &str) {
        println!("   {} {}", format!("{}.", ordinal).bold().dim(), text);
    }
}
