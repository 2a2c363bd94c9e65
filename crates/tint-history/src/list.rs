//! History list
//!
//! Storage order is oldest first. Reversal for display happens on read, see
//! `display_order`.

use tint_color::ColorResolver;

/// Ordered, duplicate-free list of accepted color inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryList {
    entries: Vec<String>,
}

/// What `HistoryList::try_append` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Entry pushed; `evicted` holds the entries dropped from the front
    Added { evicted: Vec<String> },
    /// Already present, list untouched
    Duplicate,
    /// Not a color according to the resolver, list untouched
    Rejected,
}

impl AppendOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, AppendOutcome::Added { .. })
    }
}

impl HistoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries, keeping the first occurrence of any repeat
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for entry in entries {
            let entry = entry.into();
            if !list.contains(&entry) {
                list.entries.push(entry);
            }
        }
        list
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact string match; `"red"` and `"#FF0000"` are different entries
    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn newest(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Drop the oldest entries until at most `capacity` remain
    pub fn truncate_oldest(&mut self, capacity: usize) -> Vec<String> {
        let excess = self.entries.len().saturating_sub(capacity);
        self.entries.drain(..excess).collect()
    }

    /// Append a validated, previously unseen entry, evicting from the front
    /// when the list is at capacity. A capacity of 0 behaves like 1.
    pub fn try_append(
        &mut self,
        entry: &str,
        capacity: usize,
        resolver: &dyn ColorResolver,
    ) -> AppendOutcome {
        if self.contains(entry) {
            return AppendOutcome::Duplicate;
        }
        if resolver.resolve(entry).is_none() {
            return AppendOutcome::Rejected;
        }

        let evicted = self.truncate_oldest(capacity.max(1) - 1);
        self.entries.push(entry.to_string());
        AppendOutcome::Added { evicted }
    }
}

impl<'a> IntoIterator for &'a HistoryList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Pure form of `try_append`: returns the next list, leaving `list` as is
pub fn append(
    entry: &str,
    list: &HistoryList,
    capacity: usize,
    resolver: &dyn ColorResolver,
) -> HistoryList {
    let mut next = list.clone();
    next.try_append(entry, capacity, resolver);
    next
}
