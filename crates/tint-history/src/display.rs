//! Display order
//!
//! Most recent first, each entry carrying a weight that fades linearly from
//! 1.0 for the newest towards 0.01 for the oldest. Front ends use the weight
//! for background opacity or similar.

use crate::list::HistoryList;

/// Portion of the weight range the fade covers
const FADE_SPAN: f32 = 0.99;

/// One history entry as shown to the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayEntry<'a> {
    pub value: &'a str,
    /// Recency weight in `(0.0, 1.0]`
    pub weight: f32,
}

/// Entries newest first with their recency weights
pub fn display_order(list: &HistoryList) -> Vec<DisplayEntry<'_>> {
    let len = list.len() as f32;
    list.iter()
        .rev()
        .enumerate()
        .map(|(index, value)| DisplayEntry {
            value,
            weight: 1.0 - (index as f32 / len) * FADE_SPAN,
        })
        .collect()
}
