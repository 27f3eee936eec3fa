//! Keyed list diffing and display-list merging.
//!
//! Given the previously rendered child list and the next one, classify
//! every key as entering (only in next), leaving (only in previous), or
//! steady (in both), and merge the lists into the one actually rendered,
//! which keeps leaving children mounted until their animation completes.
//!
//! Merge policy: walking `previous`, each run of leaving children is
//! attached to the first surviving key that follows it and re-emitted
//! immediately before that key in `next` order; runs with no surviving
//! key after them are appended at the end. Surviving keys take their
//! `next` content, leaving keys keep their `previous` content. Unkeyed
//! entries of `next` pass through at their positions; unkeyed entries of
//! `previous` are not retained. The result is deterministic and
//! key-stable.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::children::KeyedChild;

/// Outcome of diffing two keyed child lists.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildrenDiff<C> {
    /// The ordered list to render: previous order for surviving and
    /// leaving keys, next order for new keys.
    pub merged: Vec<KeyedChild<C>>,
    /// Keys present only in the next list, in next-list order.
    pub enter_keys: Vec<String>,
    /// Keys present only in the previous list, in previous-list order.
    pub leave_keys: Vec<String>,
}

/// Classify keys and merge the two lists into one display list.
///
/// Keys present in both lists are classified as neither entering nor
/// leaving. Duplicate keys are the caller's bug; the first occurrence
/// wins and repeats are logged and skipped.
pub fn diff_children<C: Clone>(
    previous: &[KeyedChild<C>],
    next: &[KeyedChild<C>],
) -> ChildrenDiff<C> {
    let previous_keys = key_set(previous);
    let next_keys = key_set(next);

    let enter_keys = unique_keys(next, |key| !previous_keys.contains(key));
    let leave_keys = unique_keys(previous, |key| !next_keys.contains(key));

    let merged = merge_children(previous, next, &next_keys);

    ChildrenDiff {
        merged,
        enter_keys,
        leave_keys,
    }
}

fn key_set<C>(children: &[KeyedChild<C>]) -> HashSet<&str> {
    children.iter().filter_map(|child| child.key()).collect()
}

/// Keys matching `include`, first occurrence only, in list order.
fn unique_keys<C>(
    children: &[KeyedChild<C>],
    include: impl Fn(&str) -> bool,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keys = Vec::new();
    for child in children {
        let Some(key) = child.key() else { continue };
        if !seen.insert(key) {
            debug!(key = %key, "duplicate key in child list, ignoring repeat");
            continue;
        }
        if include(key) {
            keys.push(key.to_string());
        }
    }
    keys
}

fn merge_children<C: Clone>(
    previous: &[KeyedChild<C>],
    next: &[KeyedChild<C>],
    next_keys: &HashSet<&str>,
) -> Vec<KeyedChild<C>> {
    // Runs of leaving children, grouped by the surviving key that follows
    // them in `previous`.
    let mut run: Vec<KeyedChild<C>> = Vec::new();
    let mut anchored: HashMap<String, Vec<KeyedChild<C>>> = HashMap::new();
    let mut retained = HashSet::new();

    for child in previous {
        match child.key() {
            Some(key) if next_keys.contains(key) => {
                if !run.is_empty() {
                    anchored.entry(key.to_string()).or_default().append(&mut run);
                }
            }
            Some(key) => {
                if retained.insert(key.to_string()) {
                    run.push(child.clone());
                }
            }
            // Unkeyed previous entries cannot be tracked through a leave.
            None => {}
        }
    }
    let trailing = run;

    let mut merged = Vec::with_capacity(previous.len() + next.len());
    for child in next {
        if let Some(key) = child.key() {
            if let Some(mut pending) = anchored.remove(key) {
                merged.append(&mut pending);
            }
        }
        merged.push(child.clone());
    }
    merged.extend(trailing);
    merged
}
