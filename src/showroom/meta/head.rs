use fragments::escape_html;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Meta,
    Link,
}

impl Element {
    fn tag_name(self) -> &'static str {
        match self {
            Element::Meta => "meta",
            Element::Link => "link",
        }
    }

    fn value_attr(self) -> &'static str {
        match self {
            Element::Meta => "content",
            Element::Link => "href",
        }
    }
}

/// Stable identity of a head tag: element plus key attribute and key value.
///
/// Never includes the tag's content, so re-applying metadata finds and
/// updates the tag written last time rather than adding a second one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    pub element: Element,
    pub key_attr: &'static str,
    pub key: String,
}

impl Selector {
    pub fn meta_name(name: &str) -> Self {
        Self {
            element: Element::Meta,
            key_attr: "name",
            key: name.to_string(),
        }
    }

    pub fn meta_property(property: &str) -> Self {
        Self {
            element: Element::Meta,
            key_attr: "property",
            key: property.to_string(),
        }
    }

    pub fn link_rel(rel: &str) -> Self {
        Self {
            element: Element::Link,
            key_attr: "rel",
            key: rel.to_string(),
        }
    }
}

/// CSS form, e.g. `meta[name="description"]`.
impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}=\"{}\"]",
            self.element.tag_name(),
            self.key_attr,
            self.key
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    pub selector: Selector,
    pub value: String,
}

impl HeadTag {
    pub fn to_html(&self) -> String {
        format!(
            "<{} {}=\"{}\" {}=\"{}\">",
            self.selector.element.tag_name(),
            self.selector.key_attr,
            escape_html(&self.selector.key),
            self.selector.element.value_attr(),
            escape_html(&self.value)
        )
    }
}

/// Write access to a document head.
pub trait HeadWriter {
    fn set_title(&mut self, title: &str);

    /// Updates the tag matching `selector` in place, or appends it if absent.
    fn upsert(&mut self, selector: Selector, value: &str);
}

/// In-memory document head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentHead {
    title: Option<String>,
    tags: Vec<HeadTag>,
}

impl DocumentHead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn tags(&self) -> &[HeadTag] {
        &self.tags
    }

    pub fn get(&self, selector: &Selector) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| &tag.selector == selector)
            .map(|tag| tag.value.as_str())
    }

    pub fn count(&self, selector: &Selector) -> usize {
        self.tags.iter().filter(|tag| &tag.selector == selector).count()
    }

    /// Renders the title and tags in insertion order, one per line.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }
        for tag in &self.tags {
            out.push_str(&tag.to_html());
            out.push('\n');
        }
        out
    }
}

impl HeadWriter for DocumentHead {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn upsert(&mut self, selector: Selector, value: &str) {
        match self.tags.iter_mut().find(|tag| tag.selector == selector) {
            Some(tag) => tag.value = value.to_string(),
            None => self.tags.push(HeadTag {
                selector,
                value: value.to_string(),
            }),
        }
    }
}
