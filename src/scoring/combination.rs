// Tag combinations — the lookup keys of the score table.
//
// A combination is an unordered set of tags. It is stored sorted and
// de-duplicated so that ["b", "a"] and ["a", "b"] are the same key no matter
// which candidate produced them.

use std::fmt;

use itertools::Itertools;

/// A non-empty, order-independent set of tags.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagCombination(Vec<String>);

impl TagCombination {
    /// Build the canonical key for a set of tags.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        tags.sort();
        tags.dedup();
        Self(tags)
    }
}

impl fmt::Display for TagCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.join(", "))
    }
}

/// Every non-empty subset of `tags`, smallest first.
///
/// Within a size, subsets follow the input order: for [a, b, c] this yields
/// {a}, {b}, {c}, {a, b}, {a, c}, {b, c}, {a, b, c}. An empty tag list
/// yields nothing.
pub fn all_combinations(tags: &[String]) -> impl Iterator<Item = TagCombination> + '_ {
    (1..=tags.len()).flat_map(move |size| {
        tags.iter()
            .combinations(size)
            .map(TagCombination::new)
    })
}
