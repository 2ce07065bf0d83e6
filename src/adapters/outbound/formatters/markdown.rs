use std::fmt::{self, Write};

/// Indentation of continuation lines inside an ordered list item
const LIST_ITEM_INDENT: &str = "   ";

/// Minimal Markdown writer: headings, ordered lists and free text
///
/// Text written while a list item is open has its continuation lines
/// indented so they stay part of the item.
#[derive(Debug)]
pub struct MarkdownBuilder {
    buf: String,
    list_counter: Option<usize>,
    at_line_start: bool,
}

impl MarkdownBuilder {
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            list_counter: None,
            at_line_start: true,
        }
    }

    /// Writes a heading of `level` (1-6) followed by a blank line
    pub fn title(&mut self, level: usize, text: &str) -> fmt::Result {
        self.finish_line()?;
        writeln!(self.buf, "{} {}", "#".repeat(level.clamp(1, 6)), text)?;
        self.buf.write_char('\n')?;
        self.at_line_start = true;
        Ok(())
    }

    pub fn ordered_list_start(&mut self) {
        self.list_counter = Some(0);
    }

    /// Starts the next numbered item of the current list
    pub fn new_ordered_list_item(&mut self) -> fmt::Result {
        self.finish_line()?;
        let number = self.list_counter.map_or(1, |n| n + 1);
        self.list_counter = Some(number);
        write!(self.buf, "{}. ", number)?;
        self.at_line_start = false;
        Ok(())
    }

    pub fn ordered_list_end(&mut self) -> fmt::Result {
        self.finish_line()?;
        self.list_counter = None;
        Ok(())
    }

    pub fn text(&mut self, text: &str) -> fmt::Result {
        for segment in text.split_inclusive('\n') {
            if self.at_line_start && self.list_counter.is_some() && segment != "\n" {
                self.buf.write_str(LIST_ITEM_INDENT)?;
            }
            self.buf.write_str(segment)?;
            self.at_line_start = segment.ends_with('\n');
        }
        Ok(())
    }

    pub fn textf(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.text(&fmt::format(args))
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.into_bytes()
    }

    fn finish_line(&mut self) -> fmt::Result {
        if !self.at_line_start {
            self.buf.write_char('\n')?;
            self.at_line_start = true;
        }
        Ok(())
    }
}

impl Default for MarkdownBuilder {
    fn default() -> Self {
        Self::new()
    }
}
