use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Render one line of lesson prose as inline HTML.
///
/// Only inline syntax is honoured (`**bold**`, `*em*`, `` `code` ``, links).
/// Block markers at the start of the line are escaped so a numbered step such
/// as `1. **Preprocessing**` stays a paragraph, and the `<p>` wrapper is dropped.
#[must_use]
pub fn inline_markdown_to_html(line: &str) -> String {
    let escaped = escape_block_start(line.trim_start());
    let events = Parser::new(&escaped).filter(|event| {
        !matches!(
            event,
            Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph)
        )
    });
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, events);
    sanitize_inline_html(html.trim_end())
}

#[must_use]
pub fn sanitize_inline_html(html: &str) -> String {
    let tags: HashSet<&str> = ["strong", "em", "b", "i", "code", "a", "br"]
        .into_iter()
        .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

fn escape_block_start(line: &str) -> Cow<'_, str> {
    let mut chars = line.chars();
    match chars.next() {
        Some('#' | '>') => return Cow::Owned(format!("\\{line}")),
        Some('-' | '+' | '*') if matches!(chars.next(), None | Some(' ')) => {
            return Cow::Owned(format!("\\{line}"));
        }
        _ => {}
    }
    if ["---", "***", "___"].iter().any(|rule| line.starts_with(rule)) {
        return Cow::Owned(format!("\\{line}"));
    }

    // `12. ` or `3) ` opens an ordered list.
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if (1..=9).contains(&digits) {
        let rest = &line[digits..];
        let mut rest_chars = rest.chars();
        if matches!(rest_chars.next(), Some('.' | ')'))
            && matches!(rest_chars.next(), None | Some(' '))
        {
            return Cow::Owned(format!("{}\\{}", &line[..digits], rest));
        }
    }
    Cow::Borrowed(line)
}
