// roomlist/roomlist-markup
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use pretty_assertions::assert_eq;

use roomlist_markup::{AttributedRun, AttributedString, MarkdownParser, TextAttributes};

fn run(text: &str, attributes: TextAttributes) -> AttributedRun {
    AttributedRun {
        text: text.to_string(),
        attributes,
    }
}

fn bold() -> TextAttributes {
    TextAttributes {
        bold: true,
        ..Default::default()
    }
}

fn italic() -> TextAttributes {
    TextAttributes {
        italic: true,
        ..Default::default()
    }
}

fn code() -> TextAttributes {
    TextAttributes {
        code: true,
        ..Default::default()
    }
}

#[test]
fn test_plain_text() {
    let string = MarkdownParser::new("Hello world").convert_to_attributed_string();
    assert_eq!(string, AttributedString::plain("Hello world"));
}

#[test]
fn test_inline_spans() {
    let string = MarkdownParser::new("Hello **world**, _this_ is `code`")
        .convert_to_attributed_string();

    assert_eq!(
        string.runs(),
        &[
            run("Hello ", TextAttributes::default()),
            run("world", bold()),
            run(", ", TextAttributes::default()),
            run("this", italic()),
            run(" is ", TextAttributes::default()),
            run("code", code()),
        ]
    );
}

#[test]
fn test_nested_spans() {
    let string = MarkdownParser::new("***both*** ~~gone~~").convert_to_attributed_string();

    assert_eq!(
        string.runs(),
        &[
            run(
                "both",
                TextAttributes {
                    bold: true,
                    italic: true,
                    ..Default::default()
                }
            ),
            run(" ", TextAttributes::default()),
            run(
                "gone",
                TextAttributes {
                    strikethrough: true,
                    ..Default::default()
                }
            ),
        ]
    );
}

#[test]
fn test_links() {
    let string = MarkdownParser::new("See [the docs](https://example.org/docs) please")
        .convert_to_attributed_string();

    assert_eq!(
        string.runs(),
        &[
            run("See ", TextAttributes::default()),
            run(
                "the docs",
                TextAttributes {
                    link: Some("https://example.org/docs".to_string()),
                    ..Default::default()
                }
            ),
            run(" please", TextAttributes::default()),
        ]
    );
}

#[test]
fn test_collapses_blocks_into_single_line() {
    let parser = MarkdownParser::new("First line\nsecond line\n\nSecond paragraph\n\n* one\n* two\n");
    assert_eq!(
        parser.convert_to_plain_text(),
        "First line second line Second paragraph one two"
    );
}

#[test]
fn test_code_block() {
    let parser = MarkdownParser::new("Look:\n\n```rust\nlet a = 1;\nlet b = 2;\n```\n");
    let string = parser.convert_to_attributed_string();

    assert_eq!(
        string.runs(),
        &[
            run("Look: ", TextAttributes::default()),
            run("let a = 1; let b = 2;", code()),
        ]
    );
}

#[test]
fn test_empty_input() {
    assert!(AttributedString::from_markdown("").is_empty());
    assert!(AttributedString::from_markdown("\n\n").is_empty());
}

#[test]
fn test_html_is_kept_in_preview() {
    assert_eq!(
        AttributedString::from_markdown("<div>Hello there</div>").to_string(),
        "Hello there"
    );
    assert_eq!(
        AttributedString::from_markdown("<div>\nHello\nthere\n</div>\n").to_string(),
        "Hello there"
    );
    assert_eq!(
        AttributedString::from_markdown("Intro\n\n<div>Block</div>\n\nOutro").to_string(),
        "Intro Block Outro"
    );
}

#[test]
fn test_inline_html_tags_are_dropped() {
    let string = AttributedString::from_markdown("a <b>bold</b> c");
    assert_eq!(string, AttributedString::plain("a bold c"));
}
