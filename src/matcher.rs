use std::collections::HashMap;

use crate::resource::EmojiResource;

// Leading code point -> resource indices, highest priority first. Priority is
// longest sequence, then catalog order; that ordering is enforced here at
// build time instead of trusted from the catalog's file order.
#[derive(Default)]
pub(crate) struct MatchIndex {
    buckets: HashMap<char, Vec<usize>>,
    // Bitmask of ASCII leading code points actually present in the catalog
    // (keycap sequences lead with '#', '*' and '0'..'9'). Any other ASCII
    // character can never start a match and is passed through without a
    // bucket lookup.
    ascii_heads: u128,
}

impl MatchIndex {
    pub(crate) fn build(resources: &[EmojiResource]) -> MatchIndex {
        let mut buckets: HashMap<char, Vec<usize>> = HashMap::new();
        let mut ascii_heads = 0u128;
        for (idx, resource) in resources.iter().enumerate() {
            let Some(head) = resource.text.chars().next() else {
                continue;
            };
            if head.is_ascii() {
                ascii_heads |= 1u128 << (head as u32);
            }
            buckets.entry(head).or_default().push(idx);
        }
        for bucket in buckets.values_mut() {
            // Byte length orders any prefix pair the same way code-point count
            // does, and a proper prefix is the only case where priority matters.
            bucket.sort_by(|&a, &b| {
                resources[b]
                    .text
                    .len()
                    .cmp(&resources[a].text.len())
                    .then(a.cmp(&b))
            });
        }
        MatchIndex {
            buckets,
            ascii_heads,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    fn ascii_head(&self, head: char) -> bool {
        self.ascii_heads >> (head as u32) & 1 == 1
    }

    pub(crate) fn match_at<'a>(
        &self,
        resources: &'a [EmojiResource],
        rest: &str,
    ) -> Option<&'a EmojiResource> {
        let head = rest.chars().next()?;
        if head.is_ascii() && !self.ascii_head(head) {
            return None;
        }
        let bucket = self.buckets.get(&head)?;
        bucket
            .iter()
            .map(|&idx| &resources[idx])
            .find(|resource| rest.starts_with(resource.text.as_str()))
    }
}

pub(crate) enum Segment<'a> {
    Text(&'a str),
    Emoji(&'a EmojiResource),
}

// Left-to-right scan yielding maximal literal runs interleaved with matched
// resources. Total: every code point lands in exactly one segment, and no two
// matches share input. Both the flat replacer and the tree splicer consume
// this.
pub(crate) struct Segments<'a> {
    index: &'a MatchIndex,
    resources: &'a [EmojiResource],
    text: &'a str,
    pos: usize,
    pending: Option<&'a EmojiResource>,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(
        index: &'a MatchIndex,
        resources: &'a [EmojiResource],
        text: &'a str,
    ) -> Segments<'a> {
        Segments {
            index,
            resources,
            text,
            pos: 0,
            pending: None,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if let Some(resource) = self.pending.take() {
            self.pos += resource.text.len();
            return Some(Segment::Emoji(resource));
        }
        let rest = &self.text[self.pos..];
        if rest.is_empty() {
            return None;
        }
        if let Some(resource) = self.index.match_at(self.resources, rest) {
            self.pos += resource.text.len();
            return Some(Segment::Emoji(resource));
        }
        for (offset, _) in rest.char_indices().skip(1) {
            if let Some(resource) = self.index.match_at(self.resources, &rest[offset..]) {
                self.pending = Some(resource);
                self.pos += offset;
                return Some(Segment::Text(&rest[..offset]));
            }
        }
        self.pos = self.text.len();
        Some(Segment::Text(rest))
    }
}
