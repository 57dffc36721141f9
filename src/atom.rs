//! Atom feed parser for arXiv API responses.
//!
//! Elements are matched on `(namespace URI, local name)`, so the arXiv extension
//! elements (`arxiv:primary_category`, `arxiv:comment`, `arxiv:journal_ref`,
//! `arxiv:doi`) never collide with the generic Atom ones. Anything unrecognised is
//! skipped together with its subtree.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

use crate::error::{ArxivError, Result};
use crate::models::{Author, Category, Entry, Feed, Link};

/// Atom 1.0 namespace
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";
/// arXiv extension namespace
pub const ARXIV_NS: &str = "http://arxiv.org/schemas/atom";
/// OpenSearch namespace used for the result counters
pub const OPENSEARCH_NS: &str = "http://a9.com/-/spec/opensearch/1.1/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ns {
    Atom,
    Arxiv,
    OpenSearch,
    Other,
}

impl Ns {
    fn resolve(result: &ResolveResult<'_>) -> Self {
        match result {
            ResolveResult::Bound(Namespace(uri)) => match *uri {
                uri if uri == ATOM_NS.as_bytes() => Ns::Atom,
                uri if uri == ARXIV_NS.as_bytes() => Ns::Arxiv,
                uri if uri == OPENSEARCH_NS.as_bytes() => Ns::OpenSearch,
                _ => Ns::Other,
            },
            _ => Ns::Other,
        }
    }
}

/// Text-valued elements we keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Id,
    Updated,
    Published,
    Summary,
    Name,
    Comment,
    JournalRef,
    Doi,
    TotalResults,
    StartIndex,
    ItemsPerPage,
}

/// One open element on the parse stack
#[derive(Debug)]
enum Frame {
    Feed(Feed),
    Entry(Entry),
    Author(Author),
    Link(Link),
    Category(Category),
    PrimaryCategory(Category),
    Text(Field, String),
    /// Markup nested inside a text field; its text joins the field
    Inline,
    Skip,
}

/// Parse an arXiv Atom document.
///
/// Parsing is all-or-nothing: malformed XML or a document whose root is not an
/// Atom `<feed>` yields [`ArxivError::Parse`] and no partial feed.
pub fn parse(xml: &[u8]) -> Result<Feed> {
    let mut reader = NsReader::from_reader(xml);
    let mut buf = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut feed: Option<Feed> = None;

    loop {
        buf.clear();
        let position = reader.buffer_position();
        let (ns, event) = match reader.read_resolved_event_into(&mut buf) {
            Ok((ns, event)) => (Ns::resolve(&ns), event),
            Err(e) => {
                return Err(ArxivError::Parse(format!(
                    "malformed XML near byte {}: {}",
                    position, e
                )))
            }
        };

        match event {
            Event::Start(ref e) => {
                let frame = open(&stack, feed.is_some(), ns, e)?;
                stack.push(frame);
            }
            Event::Empty(ref e) => {
                let frame = open(&stack, feed.is_some(), ns, e)?;
                close(&mut stack, &mut feed, frame);
            }
            Event::End(_) => {
                let frame = stack.pop().ok_or_else(|| {
                    ArxivError::Parse(format!("unexpected closing tag near byte {}", position))
                })?;
                close(&mut stack, &mut feed, frame);
            }
            Event::Text(ref e) => {
                if let Some(text) = text_sink(&mut stack) {
                    let chunk = e.unescape().map_err(|err| {
                        ArxivError::Parse(format!("invalid text near byte {}: {}", position, err))
                    })?;
                    text.push_str(&chunk);
                }
            }
            Event::CData(ref e) => {
                if let Some(text) = text_sink(&mut stack) {
                    text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(ArxivError::Parse(
            "unexpected end of document: unclosed elements".to_string(),
        ));
    }

    feed.ok_or_else(|| ArxivError::Parse("missing top-level <feed> element".to_string()))
}

/// Decide what an opening element becomes, given its parent
fn open(stack: &[Frame], root_done: bool, ns: Ns, e: &BytesStart<'_>) -> Result<Frame> {
    let local = e.local_name();
    let name = local.as_ref();

    let Some(parent) = stack.last() else {
        if root_done {
            return Err(ArxivError::Parse(
                "unexpected content after </feed>".to_string(),
            ));
        }
        return match (ns, name) {
            (Ns::Atom, b"feed") => Ok(Frame::Feed(Feed::default())),
            _ => Err(ArxivError::Parse(format!(
                "missing top-level <feed> element, found <{}>",
                String::from_utf8_lossy(e.name().as_ref())
            ))),
        };
    };

    let frame = match (parent, ns, name) {
        (Frame::Text(..) | Frame::Inline, _, _) => Frame::Inline,

        (Frame::Feed(_), Ns::Atom, b"title") => Frame::Text(Field::Title, String::new()),
        (Frame::Feed(_), Ns::Atom, b"id") => Frame::Text(Field::Id, String::new()),
        (Frame::Feed(_), Ns::Atom, b"updated") => Frame::Text(Field::Updated, String::new()),
        (Frame::Feed(_), Ns::Atom, b"link") => Frame::Link(link(e)?),
        (Frame::Feed(_), Ns::Atom, b"entry") => Frame::Entry(Entry::default()),
        (Frame::Feed(_), Ns::OpenSearch, b"totalResults") => {
            Frame::Text(Field::TotalResults, String::new())
        }
        (Frame::Feed(_), Ns::OpenSearch, b"startIndex") => {
            Frame::Text(Field::StartIndex, String::new())
        }
        (Frame::Feed(_), Ns::OpenSearch, b"itemsPerPage") => {
            Frame::Text(Field::ItemsPerPage, String::new())
        }

        (Frame::Entry(_), Ns::Atom, b"id") => Frame::Text(Field::Id, String::new()),
        (Frame::Entry(_), Ns::Atom, b"updated") => Frame::Text(Field::Updated, String::new()),
        (Frame::Entry(_), Ns::Atom, b"published") => {
            Frame::Text(Field::Published, String::new())
        }
        (Frame::Entry(_), Ns::Atom, b"title") => Frame::Text(Field::Title, String::new()),
        (Frame::Entry(_), Ns::Atom, b"summary") => Frame::Text(Field::Summary, String::new()),
        (Frame::Entry(_), Ns::Atom, b"author") => Frame::Author(Author::default()),
        (Frame::Entry(_), Ns::Atom, b"link") => Frame::Link(link(e)?),
        (Frame::Entry(_), Ns::Atom, b"category") => Frame::Category(category(e)?),
        (Frame::Entry(_), Ns::Arxiv, b"primary_category") => {
            Frame::PrimaryCategory(category(e)?)
        }
        (Frame::Entry(_), Ns::Arxiv, b"comment") => Frame::Text(Field::Comment, String::new()),
        (Frame::Entry(_), Ns::Arxiv, b"journal_ref") => {
            Frame::Text(Field::JournalRef, String::new())
        }
        (Frame::Entry(_), Ns::Arxiv, b"doi") => Frame::Text(Field::Doi, String::new()),

        (Frame::Author(_), Ns::Atom, b"name") => Frame::Text(Field::Name, String::new()),

        _ => Frame::Skip,
    };

    Ok(frame)
}

/// The text field collecting character data, looking through inline markup
fn text_sink(stack: &mut [Frame]) -> Option<&mut String> {
    match stack.iter_mut().rev().find(|frame| !matches!(frame, Frame::Inline)) {
        Some(Frame::Text(_, text)) => Some(text),
        _ => None,
    }
}

/// Fold a finished element into its parent
fn close(stack: &mut Vec<Frame>, feed: &mut Option<Feed>, frame: Frame) {
    let Some(parent) = stack.last_mut() else {
        if let Frame::Feed(done) = frame {
            *feed = Some(done);
        }
        return;
    };

    match (parent, frame) {
        (Frame::Feed(feed), Frame::Entry(entry)) => feed.entries.push(entry),
        (Frame::Feed(feed), Frame::Link(link)) => feed.links.push(link),
        (Frame::Feed(feed), Frame::Text(field, text)) => {
            let value = non_empty(text);
            match field {
                Field::Title => feed.title = value,
                Field::Id => feed.id = value,
                Field::Updated => feed.updated = value,
                Field::TotalResults => feed.total_results = number(value),
                Field::StartIndex => feed.start_index = number(value),
                Field::ItemsPerPage => feed.items_per_page = number(value),
                _ => {}
            }
        }
        (Frame::Entry(entry), Frame::Author(author)) => entry.authors.push(author),
        (Frame::Entry(entry), Frame::Link(link)) => entry.links.push(link),
        (Frame::Entry(entry), Frame::Category(category)) => entry.categories.push(category),
        (Frame::Entry(entry), Frame::PrimaryCategory(category)) => {
            entry.primary_category = Some(category)
        }
        (Frame::Entry(entry), Frame::Text(field, text)) => {
            let value = non_empty(text);
            match field {
                Field::Id => entry.id = value,
                Field::Updated => entry.updated = value,
                Field::Published => entry.published = value,
                Field::Title => entry.title = value,
                Field::Summary => entry.summary = value,
                Field::Comment => entry.comment = value,
                Field::JournalRef => entry.journal_ref = value,
                Field::Doi => entry.doi = value,
                _ => {}
            }
        }
        (Frame::Author(author), Frame::Text(Field::Name, text)) => author.name = non_empty(text),
        _ => {}
    }
}

fn link(e: &BytesStart<'_>) -> Result<Link> {
    let mut link = Link::default();
    for (key, value) in attributes(e)? {
        match key.as_str() {
            "href" => link.href = Some(value),
            "rel" => link.rel = Some(value),
            "type" => link.media_type = Some(value),
            "title" => link.title = Some(value),
            _ => {}
        }
    }
    Ok(link)
}

fn category(e: &BytesStart<'_>) -> Result<Category> {
    let mut category = Category::default();
    for (key, value) in attributes(e)? {
        match key.as_str() {
            "term" => category.term = Some(value),
            "scheme" => category.scheme = Some(value),
            _ => {}
        }
    }
    Ok(category)
}

/// Unprefixed attributes as `(local name, unescaped value)`. Namespace
/// declarations and prefixed attributes (`xml:lang`) are dropped.
fn attributes(e: &BytesStart<'_>) -> Result<Vec<(String, String)>> {
    let mut out = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| ArxivError::Parse(format!("invalid attribute: {}", err)))?;
        if attr.key.prefix().is_some() || attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let value = attr
            .unescape_value()
            .map_err(|err| ArxivError::Parse(format!("invalid attribute value: {}", err)))?;
        out.push((
            String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned(),
            value.into_owned(),
        ));
    }
    Ok(out)
}

/// Trimmed text, or `None` for an empty element
fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == text.len() {
        Some(text)
    } else {
        Some(trimmed.to_string())
    }
}

fn number(value: Option<String>) -> Option<u64> {
    value.and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_ENTRY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <link href="http://arxiv.org/api/query?search_query=&amp;id_list=2601.05230&amp;start=0&amp;max_results=1" rel="self" type="application/atom+xml"/>
  <title type="html">ArXiv Query: search_query=&amp;id_list=2601.05230&amp;start=0&amp;max_results=1</title>
  <id>http://arxiv.org/api/sQyK35Uop+U7oFtaXnv3eTva7qE</id>
  <updated>2026-01-09T21:28:44Z</updated>
  <opensearch:totalResults xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">1</opensearch:totalResults>
  <opensearch:startIndex xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">0</opensearch:startIndex>
  <opensearch:itemsPerPage xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">1</opensearch:itemsPerPage>
  <entry>
    <id>http://arxiv.org/abs/2601.05230v1</id>
    <updated>2026-01-08T18:00:23Z</updated>
    <published>2026-01-08T18:00:23Z</published>
    <title>Learning Latent Dynamics for Autonomous Systems</title>
    <summary>  This paper proposes a new method.
</summary>
    <author>
      <name>John Doe</name>
      <arxiv:affiliation xmlns:arxiv="http://arxiv.org/schemas/atom">Somewhere</arxiv:affiliation>
    </author>
    <author>
      <name>Jane Roe</name>
    </author>
    <arxiv:doi xmlns:arxiv="http://arxiv.org/schemas/atom">10.1234/example</arxiv:doi>
    <link title="doi" href="http://dx.doi.org/10.1234/example" rel="related"/>
    <arxiv:comment xmlns:arxiv="http://arxiv.org/schemas/atom">12 pages, 3 figures</arxiv:comment>
    <link href="http://arxiv.org/abs/2601.05230v1" rel="alternate" type="text/html"/>
    <link title="pdf" href="http://arxiv.org/pdf/2601.05230v1" rel="related" type="application/pdf"/>
    <arxiv:primary_category xmlns:arxiv="http://arxiv.org/schemas/atom" term="cs.RO" scheme="http://arxiv.org/schemas/atom"/>
    <category term="cs.LG" scheme="http://arxiv.org/schemas/atom"/>
    <category term="cs.RO" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
</feed>
"#;

    #[test]
    fn test_parse_one_entry_feed() {
        let feed = parse(ONE_ENTRY.as_bytes()).unwrap();

        assert_eq!(feed.id(), Some("http://arxiv.org/api/sQyK35Uop+U7oFtaXnv3eTva7qE"));
        assert_eq!(feed.updated(), Some("2026-01-09T21:28:44Z"));
        assert!(feed.title().unwrap().starts_with("ArXiv Query: search_query=&id_list"));
        assert_eq!(feed.total_results(), Some(1));
        assert_eq!(feed.start_index(), Some(0));
        assert_eq!(feed.items_per_page(), Some(1));
        assert_eq!(feed.links().len(), 1);
        assert_eq!(feed.links()[0].rel(), Some("self"));

        assert_eq!(feed.entries().len(), 1);
        let entry = &feed.entries()[0];
        assert_eq!(entry.id(), Some("http://arxiv.org/abs/2601.05230v1"));
        assert_eq!(entry.title(), Some("Learning Latent Dynamics for Autonomous Systems"));
        assert_eq!(entry.summary(), Some("This paper proposes a new method."));
        assert_eq!(entry.published(), Some("2026-01-08T18:00:23Z"));
    }

    #[test]
    fn test_sequences_keep_document_order() {
        let feed = parse(ONE_ENTRY.as_bytes()).unwrap();
        let entry = &feed.entries()[0];

        let names: Vec<_> = entry.authors().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec![Some("John Doe"), Some("Jane Roe")]);

        let rels: Vec<_> = entry.links().iter().map(|l| l.title()).collect();
        assert_eq!(rels, vec![Some("doi"), None, Some("pdf")]);
        assert_eq!(entry.pdf_url(), Some("http://arxiv.org/pdf/2601.05230v1"));

        let terms: Vec<_> = entry.categories().iter().map(|c| c.term()).collect();
        assert_eq!(terms, vec![Some("cs.LG"), Some("cs.RO")]);
    }

    #[test]
    fn test_extension_fields_are_separate_from_categories() {
        let feed = parse(ONE_ENTRY.as_bytes()).unwrap();
        let entry = &feed.entries()[0];

        let primary = entry.primary_category().unwrap();
        assert_eq!(primary.term(), Some("cs.RO"));
        assert_eq!(primary.scheme(), Some(ARXIV_NS));
        assert_eq!(entry.categories().len(), 2);
        assert_eq!(entry.comment(), Some("12 pages, 3 figures"));
        assert_eq!(entry.doi(), Some("10.1234/example"));
        assert_eq!(entry.journal_ref(), None);
    }

    #[test]
    fn test_absent_and_empty_fields_are_none() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:arxiv="http://arxiv.org/schemas/atom">
            <entry>
                <id>http://arxiv.org/abs/1234.5678v2</id>
                <arxiv:comment></arxiv:comment>
                <arxiv:journal_ref/>
            </entry>
        </feed>"#;

        let feed = parse(xml.as_bytes()).unwrap();
        assert_eq!(feed.title(), None);
        assert_eq!(feed.total_results(), None);
        assert!(feed.links().is_empty());

        let entry = &feed.entries()[0];
        assert_eq!(entry.title(), None);
        assert_eq!(entry.summary(), None);
        assert_eq!(entry.comment(), None);
        assert_eq!(entry.journal_ref(), None);
        assert_eq!(entry.primary_category(), None);
        assert!(entry.authors().is_empty());
    }

    #[test]
    fn test_empty_feed_has_no_entries() {
        let xml = r#"<?xml version="1.0"?>
        <feed xmlns="http://www.w3.org/2005/Atom">
            <title>ArXiv Query: id_list=0000.00000</title>
            <opensearch:totalResults xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">0</opensearch:totalResults>
        </feed>"#;

        let feed = parse(xml.as_bytes()).unwrap();
        assert!(feed.entries().is_empty());
        assert_eq!(feed.total_results(), Some(0));
    }

    #[test]
    fn test_unknown_elements_and_attributes_are_ignored() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:x="urn:example:future">
            <x:newThing a="1"><title>not the feed title</title></x:newThing>
            <generator uri="http://arxiv.org">arXiv</generator>
            <entry x:flag="yes">
                <title xml:lang="en">Kept</title>
                <x:rating>5</x:rating>
                <content type="xhtml"><div>ignored</div></content>
                <category term="math.CO" x:weight="0.3"/>
            </entry>
        </feed>"#;

        let feed = parse(xml.as_bytes()).unwrap();
        assert_eq!(feed.title(), None);
        assert_eq!(feed.entries()[0].title(), Some("Kept"));
        assert_eq!(feed.entries()[0].categories()[0].term(), Some("math.CO"));
    }

    #[test]
    fn test_category_outside_arxiv_namespace_is_not_primary() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
            <entry>
                <primary_category term="cs.AI"/>
                <doi>10.0/not-arxiv</doi>
            </entry>
        </feed>"#;

        let feed = parse(xml.as_bytes()).unwrap();
        let entry = &feed.entries()[0];
        assert_eq!(entry.primary_category(), None);
        assert_eq!(entry.doi(), None);
    }

    #[test]
    fn test_entry_order_is_preserved() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
            <entry><id>b</id></entry>
            <entry><id>a</id></entry>
            <entry><id>c</id></entry>
        </feed>"#;

        let feed = parse(xml.as_bytes()).unwrap();
        let ids: Vec<_> = feed.entries().iter().filter_map(Entry::id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_malformed_xml_is_rejected() {
        let err = parse(b"<feed xmlns=\"http://www.w3.org/2005/Atom\"><entry></feed>").unwrap_err();
        assert!(matches!(err, ArxivError::Parse(_)));

        let err = parse(b"<feed xmlns=\"http://www.w3.org/2005/Atom\"><entry>").unwrap_err();
        assert!(matches!(err, ArxivError::Parse(_)));
    }

    #[test]
    fn test_missing_feed_root_is_rejected() {
        let err = parse(b"<html><body>Rate exceeded</body></html>").unwrap_err();
        assert!(err.to_string().contains("<feed>"));

        let err = parse(b"").unwrap_err();
        assert!(matches!(err, ArxivError::Parse(_)));

        // Right local name, wrong namespace
        let err = parse(b"<feed><entry/></feed>").unwrap_err();
        assert!(matches!(err, ArxivError::Parse(_)));
    }

    #[test]
    fn test_inline_markup_in_text_keeps_its_text() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
            <entry>
                <id>a</id>
                <title>T &amp; <b>x</b> y</title>
                <summary>Uses <i>nested <sub>2</sub></i> markup<br/>.</summary>
            </entry>
        </feed>"#;

        let feed = parse(xml.as_bytes()).unwrap();
        let entry = &feed.entries()[0];
        assert_eq!(entry.title(), Some("T & x y"));
        assert_eq!(entry.summary(), Some("Uses nested 2 markup."));
        assert_eq!(entry.id(), Some("a"));
    }

    #[test]
    fn test_text_of_skipped_elements_is_dropped() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
            <entry><id>a</id><extra>ignored <b>too</b></extra></entry>
        </feed>"#;

        let feed = parse(xml.as_bytes()).unwrap();
        assert_eq!(feed.entries()[0].id(), Some("a"));
        assert!(feed.entries()[0].title().is_none());
    }
}
