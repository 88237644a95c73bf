use filecard_cli::card::{self, CardSurface, LabelStyle, MenuButton, Selection};
use filecard_cli::listing::{CopyFormat, Listing};

#[derive(Default)]
struct RecordingSurface {
    button: Vec<(String, LabelStyle)>,
    title: Vec<(String, bool)>,
    count: Vec<String>,
    placeholder: Vec<String>,
    items: Vec<(usize, String)>,
}

impl CardSurface for RecordingSurface {
    fn button(&mut self, label: &str, style: LabelStyle) {
        self.button.push((label.to_string(), style));
    }
    fn title(&mut self, title: &str, is_error: bool) {
        self.title.push((title.to_string(), is_error));
    }
    fn count(&mut self, label: &str) {
        self.count.push(label.to_string());
    }
    fn placeholder(&mut self, message: &str) {
        self.placeholder.push(message.to_string());
    }
    fn item(&mut self, ordinal: usize, text: &str) {
        self.items.push((ordinal, text.to_string()));
    }
}

#[test]
fn integration_parse_and_render() {
    // Parse a fetched body and drive the full render path.
    let listing = Listing::parse("yes.txt", "Yes List\n\napple\n\nbanana\ncherry");
    let mut surface = RecordingSurface::default();
    let mut button = MenuButton::new();

    let selection = card::render_card(&mut surface, &mut button, listing);

    assert_eq!(button.label, "Yes List");
    assert_eq!(surface.title, vec![("Yes List".to_string(), false)]);
    assert_eq!(surface.count, vec!["3 items"]);
    assert_eq!(
        surface.items,
        vec![
            (1, "apple".to_string()),
            (2, "banana".to_string()),
            (3, "cherry".to_string()),
        ]
    );
    assert_eq!(
        selection.copy_payload(CopyFormat::Newline).unwrap(),
        "apple\nbanana\ncherry"
    );
    assert_eq!(
        selection.copy_payload(CopyFormat::Comma).unwrap(),
        "apple, banana, cherry"
    );
}

#[test]
fn integration_blank_card_has_nothing_to_copy() {
    let mut surface = RecordingSurface::default();
    let mut button = MenuButton::new();

    let selection = card::render_blank(&mut surface, &mut button, "No file content loaded.", false);

    assert_eq!(button.label, "Select a File");
    assert_eq!(surface.count, vec!["0 items"]);
    assert_eq!(selection.copy_payload(CopyFormat::Newline), None);
    assert_eq!(selection.copy_payload(CopyFormat::Comma), None);
}

#[test]
fn integration_single_item_count_is_singular() {
    let listing = Listing::parse("one.txt", "One Thing\n\nonly entry");
    let mut surface = RecordingSurface::default();
    let mut button = MenuButton::new();

    let selection = card::render_card(&mut surface, &mut button, listing);

    assert_eq!(surface.count, vec!["1 item"]);
    assert_eq!(selection.items(), ["only entry"]);
}

#[test]
fn integration_selection_buffer_tracks_rendered_items() {
    let listing = Listing::parse("yes.txt", "Yes List\n\na\nb");
    let rendered = Selection::from_listing(listing);
    assert_eq!(rendered.copy_buffer(), rendered.items().join("\n"));

    let blank = Selection::blank();
    assert_eq!(blank.copy_buffer(), "");
}
