//! Marker column grouping.
//!
//! The label row names each marker once per coordinate column, so a marker
//! shows up as three consecutive columns carrying the same label. The sweep
//! below walks the row with a cursor whose stride depends on the match
//! outcome: a matching label anchors a clean 3-wide block and is skipped as a
//! unit, while non-matching labels (time, frame counters, other bodies) are
//! stepped over one column at a time to resynchronize.

use std::collections::HashSet;

/// Three column references believed to hold one marker's X, Y, Z samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerColumns {
    /// Marker identifier, e.g. `robot_link:Marker 001`
    pub id: String,
    /// Column indices in left-to-right X, Y, Z order
    pub cols: [usize; 3],
}

/// Scan the label row for markers matching `prefix`.
///
/// Returns the ordered, deduplicated triplet list: markers appear in
/// first-encounter order, and a label seen again later is silently skipped
/// (first occurrence wins). Once a label matches at position `i`, columns
/// `i+1` and `i+2` are consumed as the same marker without re-checking their
/// labels. A match with fewer than two columns remaining, in either the label
/// row or the table, anchors nothing and the cursor resynchronizes by one.
pub fn group_marker_columns(
    labels: &[String],
    column_count: usize,
    prefix: &str,
) -> Vec<MarkerColumns> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut groups = Vec::new();
    let mut cursor = 0;

    while cursor + 2 < labels.len() {
        let label = &labels[cursor];
        if label.starts_with(prefix) && cursor + 2 < column_count {
            if seen.insert(label.as_str()) {
                groups.push(MarkerColumns {
                    id: label.clone(),
                    cols: [cursor, cursor + 1, cursor + 2],
                });
            } else {
                log::debug!(
                    "duplicate marker label {:?} at column {}, keeping first occurrence",
                    label,
                    cursor
                );
            }
            cursor += 3;
        } else {
            cursor += 1;
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_triplet_from_label_row() {
        let row = labels(&["Time", "Foo:Marker 001", "Foo:Marker 001", "Foo:Marker 001", "Bar"]);
        let groups = group_marker_columns(&row, 5, "Foo:Marker");

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, "Foo:Marker 001");
        assert_eq!(groups[0].cols, [1, 2, 3]);
    }

    #[test]
    fn test_triplet_indices_and_strides() {
        // A non-matching column sits between two marker blocks: the cursor
        // steps over it by one and still anchors the second block exactly.
        let row = labels(&[
            "t", "P:a", "P:a", "P:a", "junk", "P:b", "P:b", "P:b", "tail",
        ]);
        let groups = group_marker_columns(&row, 9, "P:");

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].cols, [1, 2, 3]);
        assert_eq!(groups[1].cols, [5, 6, 7]);
    }

    #[test]
    fn test_duplicate_identifier_first_occurrence_wins() {
        let row = labels(&[
            "t", "M:1", "M:1", "M:1", "x", "M:1", "M:1", "M:1", "end",
        ]);
        let groups = group_marker_columns(&row, 9, "M:");

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].cols, [1, 2, 3]);
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let row = labels(&["t", "M:1", "M:1", "M:1", "M:2", "M:2", "M:2"]);
        let first = group_marker_columns(&row, 7, "M:");
        let second = group_marker_columns(&row, 7, "M:");

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_match_near_label_row_end_is_ignored() {
        let row = labels(&["x", "A:1", "A:1"]);
        let groups = group_marker_columns(&row, 10, "A:");

        assert!(groups.is_empty());
    }

    #[test]
    fn test_match_beyond_table_width_is_ignored() {
        // The label row promises a block the table cannot supply.
        let row = labels(&["t", "A:1", "A:1", "A:1"]);
        let groups = group_marker_columns(&row, 3, "A:");

        assert!(groups.is_empty());
    }

    #[test]
    fn test_empty_and_tiny_label_rows() {
        assert!(group_marker_columns(&[], 10, "M:").is_empty());
        assert!(group_marker_columns(&labels(&["M:1"]), 10, "M:").is_empty());
        assert!(group_marker_columns(&labels(&["M:1", "M:1"]), 10, "M:").is_empty());
    }
}
