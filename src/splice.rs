use html5ever::{local_name, namespace_url, ns, QualName};
use kuchiki::{Attribute, ExpandedName, NodeRef};
use log::trace;

use crate::matcher::Segment;
use crate::Emojify;

// Depth-first walk over the caller-owned tree. Only text nodes are rewritten;
// wrapper elements built here are final and never re-scanned.
pub(crate) fn splice_tree(emojify: &Emojify, root: &NodeRef) {
    let mut spliced = 0usize;
    if root.as_text().is_some() {
        splice_text_node(emojify, root, &mut spliced);
    } else {
        walk(emojify, root, &mut spliced);
    }
    if spliced > 0 {
        trace!("replaced {spliced} text node(s) with emoji wrappers");
    }
}

fn walk(emojify: &Emojify, parent: &NodeRef, spliced: &mut usize) {
    let mut child = parent.first_child();
    while let Some(node) = child {
        // Grab the successor before any mutation detaches `node`.
        child = node.next_sibling();
        if node.as_text().is_some() {
            splice_text_node(emojify, &node, spliced);
        } else if node.as_element().is_some() && node.first_child().is_some() {
            walk(emojify, &node, spliced);
        }
    }
}

fn splice_text_node(emojify: &Emojify, node: &NodeRef, spliced: &mut usize) {
    let Some(text) = node.as_text() else {
        return;
    };
    let wrapper = {
        let text = text.borrow();
        match rewrite(emojify, text.as_str()) {
            Some(wrapper) => wrapper,
            // No match: the node is left exactly as it was, identity included.
            None => return,
        }
    };
    // A node without a parent has no sibling list to splice into.
    if node.parent().is_none() {
        return;
    }
    node.insert_after(wrapper);
    node.detach();
    *spliced += 1;
}

fn rewrite(emojify: &Emojify, text: &str) -> Option<NodeRef> {
    let mut segments = emojify.segments(text).peekable();
    match segments.peek() {
        None => return None,
        // A single literal run spanning the whole string means nothing matched;
        // bail before allocating any node.
        Some(Segment::Text(run)) if run.len() == text.len() => return None,
        _ => {}
    }
    let wrapper = NodeRef::new_element(
        QualName::new(None, ns!(html), local_name!("span")),
        Vec::<(ExpandedName, Attribute)>::new(),
    );
    for segment in segments {
        match segment {
            Segment::Text(run) => wrapper.append(NodeRef::new_text(run)),
            Segment::Emoji(resource) => wrapper.append(resource.make_node()),
        }
    }
    Some(wrapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn emojify() -> Emojify {
        Emojify::builder().cdn("https://x/").build().expect("build")
    }

    fn element(name: html5ever::LocalName) -> NodeRef {
        NodeRef::new_element(
            QualName::new(None, ns!(html), name),
            Vec::<(ExpandedName, Attribute)>::new(),
        )
    }

    fn same_node(a: &NodeRef, b: &NodeRef) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    fn child_names(parent: &NodeRef) -> Vec<String> {
        parent
            .children()
            .map(|child| match child.as_element() {
                Some(el) => el.name.local.to_string(),
                None => "#text".to_string(),
            })
            .collect()
    }

    #[test]
    fn splice_preserves_siblings_and_order() {
        let tw = emojify();
        let parent = element(local_name!("p"));
        let a = element(local_name!("em"));
        let text = NodeRef::new_text("one \u{1f30e} two \u{1f9a4} three");
        let b = element(local_name!("strong"));
        parent.append(a.clone());
        parent.append(text.clone());
        parent.append(b.clone());

        tw.splice_tree(&parent);

        assert_eq!(child_names(&parent), ["em", "span", "strong"]);
        let wrapper = a.next_sibling().expect("wrapper after em");
        assert!(
            same_node(&parent.first_child().expect("first"), &a),
            "first-child link must survive the splice"
        );
        assert!(
            same_node(&parent.last_child().expect("last"), &b),
            "last-child link must survive the splice"
        );
        assert!(same_node(&wrapper.next_sibling().expect("next"), &b));
        assert!(same_node(&b.previous_sibling().expect("prev"), &wrapper));
        assert!(same_node(&wrapper.parent().expect("parent"), &parent));
        assert!(text.parent().is_none(), "old text node must be detached");
    }

    #[test]
    fn wrapper_interleaves_text_runs_and_images() {
        let tw = emojify();
        let parent = element(local_name!("p"));
        parent.append(NodeRef::new_text("a \u{1f30e} b \u{1f9a4}"));

        tw.splice_tree(&parent);

        let wrapper = parent.first_child().expect("wrapper");
        assert_eq!(
            child_names(&wrapper),
            ["#text", "img", "#text", "img"],
            "children must be literal runs interleaved with image clones"
        );
        let texts: Vec<String> = wrapper
            .children()
            .filter_map(|child| child.as_text().map(|t| t.borrow().clone()))
            .collect();
        assert_eq!(texts, ["a ", " b "]);
    }

    #[test]
    fn trailing_suffix_becomes_final_text_child() {
        let tw = emojify();
        let parent = element(local_name!("p"));
        parent.append(NodeRef::new_text("\u{1f30e}!"));

        tw.splice_tree(&parent);

        let wrapper = parent.first_child().expect("wrapper");
        assert_eq!(child_names(&wrapper), ["img", "#text"]);
        let last = wrapper.last_child().expect("text child");
        assert_eq!(last.as_text().expect("text").borrow().as_str(), "!");
    }

    #[test]
    fn no_match_leaves_node_identity_untouched() {
        let tw = emojify();
        let parent = element(local_name!("p"));
        let text = NodeRef::new_text("plain text, no emoji here");
        parent.append(text.clone());

        tw.splice_tree(&parent);

        assert!(
            same_node(&parent.first_child().expect("child"), &text),
            "a matchless text node must keep its identity"
        );
        assert!(same_node(&parent.last_child().expect("child"), &text));
    }

    #[test]
    fn nested_elements_are_walked_depth_first() {
        let tw = emojify();
        let root = element(local_name!("div"));
        let inner = element(local_name!("p"));
        inner.append(NodeRef::new_text("hello \u{1f30e}"));
        root.append(inner.clone());

        tw.splice_tree(&root);

        let wrapper = inner.first_child().expect("wrapper");
        assert_eq!(child_names(&wrapper), ["#text", "img"]);
    }

    #[test]
    fn parentless_text_node_is_a_no_op() {
        let tw = emojify();
        let text = NodeRef::new_text("stray \u{1f30e}");
        tw.splice_tree(&text);
        assert_eq!(text.as_text().expect("text").borrow().as_str(), "stray \u{1f30e}");
        assert!(text.parent().is_none());
    }

    #[test]
    fn parsed_document_round_trip_replaces_each_occurrence() {
        use kuchiki::traits::TendrilSink;

        let tw = emojify();
        let document = kuchiki::parse_html()
            .one("<p>hello \u{1f426}\u{200d}\u{2b1b} world \u{1f30e} for \u{1f426} &amp; \u{1f9a4}! \u{36}\u{20e3}</p>");
        tw.splice_tree(&document);

        let imgs = document.select("img").expect("selector").count();
        assert_eq!(imgs, 5, "one img per occurrence");
        let compound = document
            .select("img")
            .expect("selector")
            .next()
            .expect("first img");
        let attrs = compound.attributes.borrow();
        assert_eq!(
            attrs.get("src"),
            Some("https://x/svg/1f426-200d-2b1b.svg"),
            "compound must win over its base glyph"
        );
    }
}
