// File format module: the title/list layout the file host serves.
// Line 1 is the title, line 2 a separator, lines 3+ the items. Kept free
// of any network or UI concern so the parse rules are usable on their own.

/// A parsed source file: the display title and its non-blank item lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub title: String,
    pub items: Vec<String>,
}

/// Join format for the bulk-copy actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFormat {
    Newline,
    Comma,
}

impl CopyFormat {
    /// Name used in the copy feedback message.
    pub fn label(self) -> &'static str {
        match self {
            CopyFormat::Newline => "newline",
            CopyFormat::Comma => "comma",
        }
    }

    pub fn separator(self) -> &'static str {
        match self {
            CopyFormat::Newline => "\n",
            CopyFormat::Comma => ", ",
        }
    }
}

impl Listing {
    /// Parse a fetched file body. `filename` is the fallback title for a
    /// file whose first line is empty or missing.
    ///
    /// Lines are split on `\n` or `\r\n`. Items start at line 3;
    /// blank and whitespace-only lines are dropped, order is preserved.
    pub fn parse(filename: &str, text: &str) -> Listing {
        let lines: Vec<&str> = text.lines().collect();
        let title = match lines.first() {
            Some(first) if !first.is_empty() => (*first).to_string(),
            _ => filename.to_string(),
        };
        let items = lines
            .iter()
            .skip(2)
            .filter(|line| !line.trim().is_empty())
            .map(|line| (*line).to_string())
            .collect();
        Listing { title, items }
    }

    /// First line of a file body, with the same filename fallback as
    /// `parse`. The dropdown prefetch uses this to label entries without
    /// keeping whole files around.
    pub fn title_line(filename: &str, text: &str) -> String {
        match text.lines().next() {
            Some(first) if !first.is_empty() => first.to_string(),
            _ => filename.to_string(),
        }
    }
}
