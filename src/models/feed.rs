//! Atom feed document model.
//!
//! A [`Feed`] is built once by [`crate::atom::parse`] from one arXiv response body
//! and is never mutated afterwards: every field is private to the crate and only
//! exposed through read accessors.

use serde::Serialize;

/// One arXiv API response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,

    /// arXiv's URI for this result set (not a paper id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) updated: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) total_results: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) start_index: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) items_per_page: Option<u64>,

    pub(crate) links: Vec<Link>,

    pub(crate) entries: Vec<Entry>,
}

impl Feed {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn updated(&self) -> Option<&str> {
        self.updated.as_deref()
    }

    /// `opensearch:totalResults`, when the feed carries it
    pub fn total_results(&self) -> Option<u64> {
        self.total_results
    }

    pub fn start_index(&self) -> Option<u64> {
        self.start_index
    }

    pub fn items_per_page(&self) -> Option<u64> {
        self.items_per_page
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Entries in arXiv's result order. Empty when nothing matched.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Consume the feed and take its first entry, if any
    pub fn into_first_entry(self) -> Option<Entry> {
        self.entries.into_iter().next()
    }
}

/// One paper record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Canonical abstract URI, version suffix included (`http://arxiv.org/abs/2601.05230v1`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) updated: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) published: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) summary: Option<String>,

    pub(crate) authors: Vec<Author>,

    pub(crate) links: Vec<Link>,

    pub(crate) categories: Vec<Category>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) primary_category: Option<Category>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) journal_ref: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) doi: Option<String>,
}

impl Entry {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn updated(&self) -> Option<&str> {
        self.updated.as_deref()
    }

    pub fn published(&self) -> Option<&str> {
        self.published.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The abstract text
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Authors in byline order
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Atom categories in document order. The first one is not necessarily primary.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// `arxiv:primary_category`
    pub fn primary_category(&self) -> Option<&Category> {
        self.primary_category.as_ref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn journal_ref(&self) -> Option<&str> {
        self.journal_ref.as_deref()
    }

    pub fn doi(&self) -> Option<&str> {
        self.doi.as_deref()
    }

    /// The `alternate` link (abstract page)
    pub fn abstract_url(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.rel() == Some("alternate"))
            .and_then(Link::href)
    }

    /// The PDF link, matched by media type or by arXiv's `title="pdf"` marker
    pub fn pdf_url(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.media_type() == Some("application/pdf") || link.title() == Some("pdf"))
            .and_then(Link::href)
    }
}

/// An entry author
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Author {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
}

impl Author {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// An Atom `<link>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) rel: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub(crate) media_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
}

impl Link {
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn rel(&self) -> Option<&str> {
        self.rel.as_deref()
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// A taxonomy category (`cs.AI`) and its scheme URI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) term: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) scheme: Option<String>,
}

impl Category {
    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }
}
