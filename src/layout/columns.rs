use super::types::Interval;

/// Assign each interval a column in `[0, max_columns)` so that no two
/// overlapping intervals share one. Returns columns indexed by input
/// position.
///
/// Events are processed sorted by start minute (stable, so ties keep input
/// order) and take the first column not already held by an overlapping,
/// already-placed event. Two inherited quirks are load-bearing for output
/// compatibility with the dashboard this engine drives:
///
/// - an event that overlaps nothing at all in the day is spread to
///   `sort_index % max_columns` rather than stacked in column 0;
/// - when every column is held by an overlapping event, the event falls
///   back to column 0 and the boxes overlap visually. No error.
pub(super) fn assign_columns(
    intervals: &[Interval],
    conflicts: &[Vec<usize>],
    max_columns: usize,
) -> Vec<usize> {
    let max_columns = max_columns.max(1);

    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by_key(|&i| intervals[i].start);

    let mut columns = vec![0usize; intervals.len()];
    let mut placed = vec![false; intervals.len()];

    for (sort_index, &i) in order.iter().enumerate() {
        if conflicts[i].is_empty() {
            columns[i] = sort_index % max_columns;
        } else {
            let mut taken = vec![false; max_columns];
            for &j in &conflicts[i] {
                if placed[j] {
                    taken[columns[j]] = true;
                }
            }
            columns[i] = taken.iter().position(|held| !held).unwrap_or(0);
        }
        placed[i] = true;
    }

    columns
}
