// roomlist/roomlist-markup
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use pulldown_cmark::{Event, Options, Parser, TextMergeStream};

pub use attributed_string::{AttributedRun, AttributedString, TextAttributes};
use attributed_string_writer::AttributedStringWriter;

mod attributed_string;
mod attributed_string_writer;

#[derive(Debug)]
pub struct MarkdownParser<'input> {
    events: Vec<Event<'input>>,
}

impl<'input> MarkdownParser<'input> {
    pub fn new(s: &'input str) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        Self {
            events: TextMergeStream::new(Parser::new_ext(s, options)).collect(),
        }
    }

    /// Converts the Markdown content into a single line of attributed text, suitable for a
    /// last message preview.
    pub fn convert_to_attributed_string(&self) -> AttributedString {
        AttributedStringWriter::new(self.events.clone().into_iter()).run()
    }

    pub fn convert_to_plain_text(&self) -> String {
        self.convert_to_attributed_string().to_string()
    }
}

impl AttributedString {
    pub fn from_markdown(markdown: &str) -> Self {
        MarkdownParser::new(markdown).convert_to_attributed_string()
    }
}
