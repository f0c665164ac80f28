mod catalog;
mod error;
mod matcher;
mod resource;
mod splice;

use std::io::Write;

use kuchiki::NodeRef;
use once_cell::sync::Lazy;

pub use catalog::OFFICIAL_CDN;
pub use error::EmojifyError;
pub use resource::Format;

use matcher::{MatchIndex, Segment, Segments};
use resource::{AttrHook, EmojiResource};

const DEFAULT_CLASS: &str = "emoji";

// Built once from the catalog, immutable afterwards; safe for unsynchronized
// concurrent reads. A zero-value `Emojify::default()` carries no catalog and
// transparently delegates every entry point to the shared default instance.
#[derive(Default)]
pub struct Emojify {
    resources: Vec<EmojiResource>,
    index: MatchIndex,
}

impl Emojify {
    pub fn builder() -> EmojifyBuilder {
        EmojifyBuilder::new()
    }

    fn loaded(&self) -> bool {
        !self.index.is_empty()
    }

    pub(crate) fn segments<'a>(&'a self, text: &'a str) -> Segments<'a> {
        Segments::new(&self.index, &self.resources, text)
    }

    // Returns a copy of `text` with every catalog emoji replaced by its <img>
    // markup. Does not escape `text`; use `to_safe_html` for untrusted input.
    pub fn replace(&self, text: &str) -> String {
        if !self.loaded() {
            return default_instance().replace(text);
        }
        let mut out = String::with_capacity(text.len());
        for segment in self.segments(text) {
            match segment {
                Segment::Text(run) => out.push_str(run),
                Segment::Emoji(resource) => out.push_str(&resource.markup),
            }
        }
        out
    }

    // Streaming form of `replace`. Sink errors halt the scan and propagate;
    // chunks already written stay written.
    pub fn write_replaced<W: Write>(&self, sink: &mut W, text: &str) -> Result<usize, EmojifyError> {
        if !self.loaded() {
            return default_instance().write_replaced(sink, text);
        }
        let mut written = 0usize;
        for segment in self.segments(text) {
            let chunk = match segment {
                Segment::Text(run) => run,
                Segment::Emoji(resource) => resource.markup.as_str(),
            };
            sink.write_all(chunk.as_bytes())?;
            written += chunk.len();
        }
        Ok(written)
    }

    // Escape first, then substitute, so the emitted <img> markup itself
    // survives intact.
    pub fn to_safe_html(&self, text: &str) -> String {
        self.replace(&escape_text(text))
    }

    pub fn splice_tree(&self, root: &NodeRef) {
        if !self.loaded() {
            return default_instance().splice_tree(root);
        }
        splice::splice_tree(self, root);
    }
}

pub struct EmojifyBuilder {
    cdn: String,
    class: String,
    format: Format,
    attr_hook: Option<Box<AttrHook>>,
}

impl EmojifyBuilder {
    pub fn new() -> Self {
        Self {
            cdn: OFFICIAL_CDN.to_string(),
            class: DEFAULT_CLASS.to_string(),
            format: Format::Svg,
            attr_hook: None,
        }
    }

    pub fn cdn(mut self, cdn: impl Into<String>) -> Self {
        let mut cdn = cdn.into();
        if !cdn.is_empty() && !cdn.ends_with('/') {
            cdn.push('/');
        }
        self.cdn = cdn;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    // Called once per catalog entry with the emoji text and the default
    // attribute list; its return value becomes the final attributes and may
    // add, remove or reorder entries.
    pub fn attr_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, Vec<(String, String)>) -> Vec<(String, String)> + Send + Sync + 'static,
    {
        self.attr_hook = Some(Box::new(hook));
        self
    }

    pub fn build(self) -> Result<Emojify, EmojifyError> {
        let resources = resource::build_resources(
            catalog::TWEMOJI_FILES,
            &self.cdn,
            &self.class,
            self.format,
            self.attr_hook.as_deref(),
        )?;
        let index = MatchIndex::build(&resources);
        Ok(Emojify { resources, index })
    }
}

impl Default for EmojifyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Process-wide instance with the official CDN and SVG assets, built exactly
// once. The bundled catalog is static and test-covered, so a failure here is
// a build defect, not a runtime condition.
static DEFAULT: Lazy<Emojify> = Lazy::new(|| {
    Emojify::builder()
        .build()
        .expect("bundled twemoji catalog entries decode to unicode sequences")
});

pub fn default_instance() -> &'static Emojify {
    &DEFAULT
}

pub fn replace(text: &str) -> String {
    DEFAULT.replace(text)
}

pub fn write_replaced<W: Write>(sink: &mut W, text: &str) -> Result<usize, EmojifyError> {
    DEFAULT.write_replaced(sink, text)
}

pub fn to_safe_html(text: &str) -> String {
    DEFAULT.to_safe_html(text)
}

pub fn splice_tree(root: &NodeRef) {
    DEFAULT.splice_tree(root)
}

// Same escape set as a conservative HTML text escaper: safe in both element
// bodies and attribute values.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            _ => out.push(ch),
        }
    }
    out
}
