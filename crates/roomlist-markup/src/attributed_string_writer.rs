// roomlist/roomlist-markup
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use pulldown_cmark::{Event, Tag, TagEnd};

use crate::attributed_string::{AttributedString, TextAttributes};

pub struct AttributedStringWriter<I> {
    /// Iterator supplying events.
    iter: I,

    output: AttributedString,

    bold_level: usize,
    italic_level: usize,
    strikethrough_level: usize,
    code_block_level: usize,
    links: Vec<String>,

    /// Set after a block or a line break ended. Resolved into a single space once more text
    /// follows, so that the output never starts or ends with a separator.
    needs_separator: bool,
}

impl<'e, I> AttributedStringWriter<I>
where
    I: Iterator<Item = Event<'e>>,
{
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            output: AttributedString::new(),
            bold_level: 0,
            italic_level: 0,
            strikethrough_level: 0,
            code_block_level: 0,
            links: vec![],
            needs_separator: false,
        }
    }

    pub fn run(mut self) -> AttributedString {
        while let Some(event) = self.iter.next() {
            match event {
                Event::Start(tag) => self.start_tag(tag),
                Event::End(tag) => self.end_tag(tag),
                Event::Text(text) => {
                    let attributes = self.current_attributes(self.code_block_level > 0);
                    self.write(&text, attributes);
                }
                Event::Code(text) => {
                    let attributes = self.current_attributes(true);
                    self.write(&text, attributes);
                }
                Event::Html(html) | Event::InlineHtml(html) => self.write_html(&html),
                Event::SoftBreak | Event::HardBreak | Event::Rule => {
                    self.needs_separator = true;
                }
                _ => {}
            }
        }
        self.output
    }
}

impl<'e, I> AttributedStringWriter<I>
where
    I: Iterator<Item = Event<'e>>,
{
    fn start_tag(&mut self, tag: Tag<'e>) {
        match tag {
            Tag::Strong => self.bold_level += 1,
            Tag::Emphasis => self.italic_level += 1,
            Tag::Strikethrough => self.strikethrough_level += 1,
            Tag::CodeBlock(_) => {
                self.code_block_level += 1;
                self.needs_separator = true;
            }
            Tag::Link { dest_url, .. } => self.links.push(dest_url.to_string()),
            Tag::Item => self.needs_separator = true,
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Strong => self.bold_level = self.bold_level.saturating_sub(1),
            TagEnd::Emphasis => self.italic_level = self.italic_level.saturating_sub(1),
            TagEnd::Strikethrough => {
                self.strikethrough_level = self.strikethrough_level.saturating_sub(1)
            }
            TagEnd::CodeBlock => {
                self.code_block_level = self.code_block_level.saturating_sub(1);
                self.needs_separator = true;
            }
            TagEnd::Link => {
                self.links.pop();
            }
            TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::HtmlBlock => {
                self.needs_separator = true;
            }
            _ => {}
        }
    }

    fn current_attributes(&self, code: bool) -> TextAttributes {
        TextAttributes {
            bold: self.bold_level > 0,
            italic: self.italic_level > 0,
            strikethrough: self.strikethrough_level > 0,
            code,
            link: self.links.last().cloned(),
        }
    }

    /// Writes the text content of raw HTML, dropping the tags themselves.
    fn write_html(&mut self, html: &str) {
        let mut text = String::with_capacity(html.len());
        let mut is_in_tag = false;

        for c in html.chars() {
            match c {
                '<' => is_in_tag = true,
                '>' if is_in_tag => is_in_tag = false,
                _ if !is_in_tag => text.push(c),
                _ => {}
            }
        }

        let attributes = self.current_attributes(false);
        self.write(&text, attributes);

        // HTML blocks arrive line by line.
        if html.ends_with('\n') {
            self.needs_separator = true;
        }
    }

    fn write(&mut self, text: &str, attributes: TextAttributes) {
        // Code blocks keep their line structure in the event stream.
        let text = text
            .split('\n')
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if text.is_empty() {
            return;
        }

        if self.needs_separator && !self.output.is_empty() && !self.output.ends_with_whitespace()
        {
            self.output.push(" ", TextAttributes::default());
        }
        self.needs_separator = false;
        self.output.push(text, attributes);
    }
}
