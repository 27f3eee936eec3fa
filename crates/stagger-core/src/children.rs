//! Keyed child entries and list lookups.

/// One entry in an animated child list.
///
/// `content` is the host's element/view value. It is cloned into the
/// display list on updates, which freezes a leaving child at its last
/// known content until its animation completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedChild<C> {
    /// Stable identity across updates. `None` marks an unkeyed entry,
    /// which passes through the display list but is never animated.
    pub key: Option<String>,
    /// Host content for this entry.
    pub content: C,
}

impl<C> KeyedChild<C> {
    /// A keyed entry.
    pub fn new(key: impl Into<String>, content: C) -> Self {
        Self {
            key: Some(key.into()),
            content,
        }
    }

    /// An unkeyed entry.
    pub fn unkeyed(content: C) -> Self {
        Self { key: None, content }
    }

    /// The key, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn is_keyed(&self) -> bool {
        self.key.is_some()
    }
}

/// Find a child by key. Unkeyed entries never match.
pub fn find_by_key<'a, C>(children: &'a [KeyedChild<C>], key: &str) -> Option<&'a KeyedChild<C>> {
    children.iter().find(|child| child.key() == Some(key))
}

/// Whether `children` contains an entry with `key`.
pub fn contains_key<C>(children: &[KeyedChild<C>], key: &str) -> bool {
    find_by_key(children, key).is_some()
}

/// Keys of all keyed entries, in list order.
pub fn keys_of<C>(children: &[KeyedChild<C>]) -> Vec<String> {
    children
        .iter()
        .filter_map(|child| child.key().map(str::to_string))
        .collect()
}
