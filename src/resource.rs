use html5ever::{local_name, namespace_url, ns, LocalName, QualName};
use kuchiki::{Attribute, ExpandedName, NodeRef};

use crate::error::EmojifyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Svg,
    Png,
}

impl Format {
    pub(crate) fn dir(self) -> &'static str {
        match self {
            Format::Svg => "svg/",
            Format::Png => "72x72/",
        }
    }

    pub(crate) fn ext(self) -> &'static str {
        match self {
            Format::Svg => "svg",
            Format::Png => "png",
        }
    }
}

pub(crate) type AttrHook =
    dyn Fn(&str, Vec<(String, String)>) -> Vec<(String, String)> + Send + Sync;

#[derive(Debug)]
pub(crate) struct EmojiResource {
    pub(crate) text: String,
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) markup: String,
}

impl EmojiResource {
    // Stamps a fresh <img> element from the template attributes. The template is
    // never inserted into a tree itself; each occurrence gets its own node so
    // later mutation of one cannot leak into another.
    pub(crate) fn make_node(&self) -> NodeRef {
        let attrs = self.attrs.iter().map(|(key, value)| {
            (
                ExpandedName::new(ns!(), LocalName::from(key.as_str())),
                Attribute {
                    prefix: None,
                    value: value.clone(),
                },
            )
        });
        NodeRef::new_element(QualName::new(None, ns!(html), local_name!("img")), attrs)
    }
}

pub(crate) fn build_resources(
    catalog: &[&str],
    cdn: &str,
    class: &str,
    format: Format,
    hook: Option<&(dyn Fn(&str, Vec<(String, String)>) -> Vec<(String, String)> + Send + Sync)>,
) -> Result<Vec<EmojiResource>, EmojifyError> {
    let mut resources = Vec::with_capacity(catalog.len());
    for &base in catalog {
        let text = decode_sequence(base)?;
        let src = format!("{cdn}{}{base}.{}", format.dir(), format.ext());
        let mut attrs = vec![
            ("draggable".to_string(), "false".to_string()),
            ("class".to_string(), class.to_string()),
            ("src".to_string(), src),
            ("width".to_string(), "72".to_string()),
            ("height".to_string(), "72".to_string()),
            ("alt".to_string(), text.clone()),
        ];
        if let Some(hook) = hook {
            // Once per catalog entry, not per occurrence.
            attrs = hook(&text, attrs);
        }
        let markup = render_img(&attrs);
        resources.push(EmojiResource {
            text,
            attrs,
            markup,
        });
    }
    Ok(resources)
}

pub(crate) fn decode_sequence(base: &str) -> Result<String, EmojifyError> {
    let mut text = String::new();
    for hex in base.split('-') {
        let scalar = u32::from_str_radix(hex, 16).map_err(|err| EmojifyError::Catalog {
            entry: base.to_string(),
            detail: format!("bad hex {:?}: {}", hex, err),
        })?;
        let ch = char::from_u32(scalar).ok_or_else(|| EmojifyError::Catalog {
            entry: base.to_string(),
            detail: format!("{:#06x} is not a unicode scalar value", scalar),
        })?;
        text.push(ch);
    }
    Ok(text)
}

fn render_img(attrs: &[(String, String)]) -> String {
    let mut out = String::from("<img");
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        escape_attr_into(&mut out, value);
        out.push('"');
    }
    out.push_str("/>");
    out
}

fn escape_attr_into(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
