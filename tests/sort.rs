#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hourly::libs::entry::TimeEntry;
    use hourly::libs::sort::{
        compare, filter_and_sort, filter_by_project, sort_entries, SortDirection, SortKey, SortState,
    };
    use std::cmp::Ordering;

    fn entry(id: i64, project_id: i64, name: Option<&str>, day: u32, minutes: Option<u32>, description: Option<&str>) -> TimeEntry {
        TimeEntry {
            id: Some(id),
            project_id,
            date: NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
            start_time: None,
            end_time: None,
            duration_minutes: minutes,
            description: description.map(str::to_string),
            applied_rate: 10.0,
            total: minutes.map(|m| m as f64 / 60.0 * 10.0),
            project_name: name.map(str::to_string),
            project_color: None,
        }
    }

    fn sample() -> Vec<TimeEntry> {
        vec![
            entry(1, 1, Some("beta"), 3, Some(60), Some("Deploy")),
            entry(2, 2, Some("Alpha"), 1, Some(30), None),
            entry(3, 1, Some("beta"), 2, None, Some("call")),
            entry(4, 3, None, 5, Some(120), Some("Backlog")),
            entry(5, 2, Some("Alpha"), 4, Some(45), Some("analysis")),
        ]
    }

    fn ids(entries: &[TimeEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.id.unwrap()).collect()
    }

    #[test]
    fn test_sort_by_each_key() {
        assert_eq!(ids(&sort_entries(sample(), SortKey::Date, SortDirection::Asc)), vec![2, 3, 1, 5, 4]);
        assert_eq!(ids(&sort_entries(sample(), SortKey::DurationMinutes, SortDirection::Asc)), vec![3, 2, 5, 1, 4]);
        assert_eq!(ids(&sort_entries(sample(), SortKey::Total, SortDirection::Desc)), vec![4, 1, 5, 2, 3]);
        // Missing names sort as "" and names compare case-insensitively.
        assert_eq!(ids(&sort_entries(sample(), SortKey::ProjectName, SortDirection::Asc)), vec![4, 2, 5, 1, 3]);
        assert_eq!(ids(&sort_entries(sample(), SortKey::Description, SortDirection::Asc)), vec![2, 5, 4, 3, 1]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        for key in [SortKey::Date, SortKey::ProjectName, SortKey::DurationMinutes, SortKey::Total, SortKey::Description] {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let once = sort_entries(sample(), key, direction);
                let twice = sort_entries(once.clone(), key, direction);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_reverse_direction_without_ties() {
        let asc = sort_entries(sample(), SortKey::Date, SortDirection::Asc);
        let mut desc = sort_entries(sample(), SortKey::Date, SortDirection::Desc);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let entries = vec![
            entry(1, 1, Some("A"), 1, Some(60), None),
            entry(2, 1, Some("A"), 1, Some(60), None),
            entry(3, 1, Some("A"), 1, Some(60), None),
        ];
        assert_eq!(ids(&sort_entries(entries.clone(), SortKey::Date, SortDirection::Asc)), vec![1, 2, 3]);
        assert_eq!(ids(&sort_entries(entries, SortKey::Date, SortDirection::Desc)), vec![1, 2, 3]);
    }

    #[test]
    fn test_compare_treats_missing_as_zero() {
        let open = entry(1, 1, None, 1, None, None);
        let zero = entry(2, 1, None, 1, Some(0), None);
        assert_eq!(compare(&open, &zero, SortKey::DurationMinutes), Ordering::Equal);
        assert_eq!(compare(&open, &zero, SortKey::Total), Ordering::Equal);
    }

    #[test]
    fn test_filter_by_project() {
        let once = filter_by_project(sample(), Some(1));
        assert_eq!(ids(&once), vec![1, 3]);
        let twice = filter_by_project(once.clone(), Some(1));
        assert_eq!(once, twice);
        assert_eq!(filter_by_project(sample(), None), sample());
        assert!(filter_by_project(sample(), Some(42)).is_empty());
    }

    #[test]
    fn test_filter_then_sort() {
        let result = filter_and_sort(sample(), Some(2), SortKey::DurationMinutes, SortDirection::Desc);
        assert_eq!(ids(&result), vec![5, 2]);
    }

    #[test]
    fn test_sort_state_toggle() {
        let state = SortState::default();
        assert_eq!(state, SortState::new(SortKey::Date, SortDirection::Asc));

        let state = state.select(SortKey::Date);
        assert_eq!(state.direction, SortDirection::Desc);
        let state = state.select(SortKey::Date);
        assert_eq!(state.direction, SortDirection::Asc);

        let state = state.select(SortKey::Date).select(SortKey::Total);
        assert_eq!(state, SortState::new(SortKey::Total, SortDirection::Asc));
        assert_eq!(ids(&state.apply(sample())), vec![3, 2, 5, 1, 4]);
    }
}
