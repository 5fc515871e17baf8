//! Heuristic parent resolution.
//!
//! The transcript format carries no explicit link between a reaction, reply
//! or removal and the message it refers to — only a truncated quoted snippet
//! of the target's text. Resolution is therefore approximate: scan backward
//! through already-parsed records, nearest first, within a bounded window,
//! and take the first record whose text *contains* the snippet. A miss is a
//! normal outcome and is surfaced through
//! [`ParseStats`](crate::record::ParseStats), never a silent mis-link.

use crate::record::ChatRecord;

/// Finds the nearest preceding record whose text contains `snippet`.
///
/// Scans ids `current_id - 1` down to `current_id - lookback` (clamped at
/// 0), returning the first hit. The match rule is substring containment, not
/// equality; ties go to the nearest record in sequence.
///
/// Pre-processing: a snippet carrying residual formatting is cut at its
/// first tab and trimmed of trailing spaces. An empty snippet never resolves
/// (an empty needle would trivially match any record), and neither does a
/// record with no eligible predecessor (`current_id` 0 or 1).
///
/// # Example
///
/// ```rust
/// use zoomchat::record::ChatRecord;
/// use zoomchat::resolve::resolve_parent;
///
/// let mut first = ChatRecord::new(0, "09:00:01", "Alice", "Everyone:");
/// first.text = "좋은 아침이예요!".to_string();
/// let mut second = ChatRecord::new(1, "09:00:03", "Bob", "Everyone:");
/// second.text = "예압".to_string();
/// let records = vec![first, second];
///
/// assert_eq!(resolve_parent("좋은", 2, &records, 30), Some(0));
/// assert_eq!(resolve_parent("없는 문장", 2, &records, 30), None);
/// ```
pub fn resolve_parent(
    snippet: &str,
    current_id: usize,
    records: &[ChatRecord],
    lookback: usize,
) -> Option<usize> {
    let needle = match snippet.split_once('\t') {
        Some((before_tab, _)) => before_tab.trim_end_matches(' '),
        None => snippet,
    };

    if needle.is_empty() || current_id <= 1 {
        return None;
    }

    let newest = current_id.min(records.len());
    let oldest = current_id.saturating_sub(lookback).min(newest);

    records[oldest..newest]
        .iter()
        .rev()
        .find(|record| record.text.contains(needle))
        .map(|record| record.id)
}
