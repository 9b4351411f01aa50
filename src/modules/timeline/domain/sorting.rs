use chrono::NaiveDate;

/// Most-recent-first by end date; an open end (ongoing) sorts above
/// every finished entry.
pub fn sort_most_recent_first<T>(items: &mut [T], end_date: impl Fn(&T) -> Option<NaiveDate>) {
    items.sort_by(|a, b| match (end_date(a), end_date(b)) {
        (None, None) => std::cmp::Ordering::Equal,
        (None, Some(_)) => std::cmp::Ordering::Less,
        (Some(_), None) => std::cmp::Ordering::Greater,
        (Some(a), Some(b)) => b.cmp(&a),
    });
}
