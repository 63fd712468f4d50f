//! Recency Sorting
//!
//! Most-recent-first ordering for list views.

use crate::models::Record;
use crate::time::parse_timestamp;

/// Sort records newest first.
///
/// Records without a usable timestamp are not comparable with anything,
/// so they stay at their original index; only the slots holding dated
/// records are reordered among themselves (stable for equal timestamps).
pub fn sort_by_recency<T: Record>(items: Vec<T>) -> Vec<T> {
    let keys: Vec<_> = items.iter().map(|item| item.recency().and_then(parse_timestamp)).collect();

    let dated_slots: Vec<usize> = keys
        .iter()
        .enumerate()
        .filter_map(|(idx, key)| key.map(|_| idx))
        .collect();

    let mut dated_order = dated_slots.clone();
    dated_order.sort_by(|a, b| keys[*b].cmp(&keys[*a]));

    // slot -> index of the item that should land there
    let mut source: Vec<usize> = (0..items.len()).collect();
    for (slot, from) in dated_slots.iter().zip(dated_order.iter()) {
        source[*slot] = *from;
    }

    let mut taken: Vec<Option<T>> = items.into_iter().map(Some).collect();
    source
        .into_iter()
        .filter_map(|from| taken[from].take())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn make_task(id: &str, created_at: Option<&str>) -> Task {
        Task {
            task_id: id.to_string(),
            task: Some(format!("Task {}", id)),
            status: None,
            created_at: created_at.map(str::to_string),
            start_time: None,
            instructions: Vec::new(),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.task_id.as_str()).collect()
    }

    #[test]
    fn test_newest_first_missing_stays_put() {
        let tasks = vec![
            make_task("jan", Some("2024-01-01")),
            make_task("mar", Some("2024-03-01")),
            make_task("none", None),
        ];
        let sorted = sort_by_recency(tasks);
        assert_eq!(ids(&sorted), vec!["mar", "jan", "none"]);
    }

    #[test]
    fn test_missing_in_the_middle_keeps_index() {
        let tasks = vec![
            make_task("a", Some("2024-01-01T00:00:00Z")),
            make_task("none", None),
            make_task("b", Some("2024-05-01T00:00:00Z")),
            make_task("c", Some("2024-03-01T00:00:00Z")),
        ];
        let sorted = sort_by_recency(tasks);
        assert_eq!(ids(&sorted), vec!["b", "none", "c", "a"]);
    }

    #[test]
    fn test_unparseable_treated_as_missing() {
        let tasks = vec![
            make_task("bad", Some("not a date")),
            make_task("old", Some("2023-01-01")),
            make_task("new", Some("2024-01-01")),
        ];
        let sorted = sort_by_recency(tasks);
        assert_eq!(ids(&sorted), vec!["bad", "new", "old"]);
    }

    #[test]
    fn test_http_dates_are_ordered() {
        let tasks = vec![
            make_task("iso", Some("2024-02-01T00:00:00Z")),
            make_task("http", Some("Fri, 01 Mar 2024 00:00:00 GMT")),
        ];
        let sorted = sort_by_recency(tasks);
        assert_eq!(ids(&sorted), vec!["http", "iso"]);
    }

    #[test]
    fn test_equal_timestamps_are_stable() {
        let tasks = vec![
            make_task("first", Some("2024-01-01")),
            make_task("second", Some("2024-01-01")),
        ];
        let sorted = sort_by_recency(tasks);
        assert_eq!(ids(&sorted), vec!["first", "second"]);
    }

    #[test]
    fn test_empty() {
        assert!(sort_by_recency(Vec::<Task>::new()).is_empty());
    }
}
