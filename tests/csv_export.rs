#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hourly::libs::aggregate::aggregate;
    use hourly::libs::csv_export::{escape_field, render_csv, summary_block, CSV_HEADER};
    use hourly::libs::entry::{DurationPolicy, EntryDraft, TimeEntry};
    use hourly::libs::error::HourlyError;
    use hourly::libs::project::Project;
    use std::collections::HashMap;

    fn website() -> Project {
        let mut project = Project::new("Website", 20.0);
        project.id = Some(1);
        project
    }

    fn entries(project: &Project) -> Vec<TimeEntry> {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        vec![
            EntryDraft::new(1, date)
                .interval("09:00".parse().unwrap(), Some("17:30".parse().unwrap()))
                .description("Layout, header")
                .derive(project, DurationPolicy::Permissive)
                .unwrap(),
            EntryDraft::new(1, date.succ_opt().unwrap())
                .duration(90)
                .description("Review")
                .derive(project, DurationPolicy::Permissive)
                .unwrap(),
        ]
    }

    fn projects(project: &Project) -> HashMap<i64, Project> {
        HashMap::from([(1, project.clone())])
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("He said \"hi\", then left"), "\"He said \"\"hi\"\", then left\"");
        // Quotes alone do not trigger quoting.
        assert_eq!(escape_field("say \"hi\""), "say \"hi\"");
        assert_eq!(escape_field(""), "");
    }

    #[test]
    fn test_render_layout() {
        let project = website();
        let entries = entries(&project);
        let report = aggregate(&entries, &projects(&project));

        let csv = render_csv(&entries, &report, "€").unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], CSV_HEADER.join(","));
        assert_eq!(lines[1], "2025-01-15,Website,09:00,17:30,510,8.50,\"Layout, header\",20.00,170.00");
        assert_eq!(lines[2], "2025-01-16,Website,,,90,1.50,Review,20.00,30.00");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Resumen:");
        assert_eq!(lines[5], "- Total de registros: 2");
        assert_eq!(lines[6], "- Total de horas: 10.00");
        assert_eq!(lines[7], "- Total de ganancias: €200.00");
    }

    #[test]
    fn test_records_parse_back() {
        let project = website();
        let entries = entries(&project);
        let report = aggregate(&entries, &projects(&project));
        let content = render_csv(&entries, &report, "€").unwrap();

        let (records, summary) = content.split_once("\n\n").unwrap();
        assert!(summary.starts_with("Resumen:"));

        let mut reader = csv::Reader::from_reader(records.as_bytes());
        let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
        assert_eq!(headers, CSV_HEADER.to_vec());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), entries.len());
        assert_eq!(&rows[0][6], "Layout, header");
        assert_eq!(&rows[1][4], "90");
    }

    #[test]
    fn test_summary_block() {
        let project = website();
        let entries = entries(&project);
        let report = aggregate(&entries, &projects(&project));

        assert_eq!(
            summary_block(&report, "$"),
            "Resumen:\n- Total de registros: 2\n- Total de horas: 10.00\n- Total de ganancias: $200.00\n"
        );
    }

    #[test]
    fn test_empty_dataset() {
        let report = aggregate(&[], &HashMap::new());
        let err = render_csv(&[], &report, "€").unwrap_err();
        assert_eq!(err.downcast_ref::<HourlyError>(), Some(&HourlyError::EmptyDataset));
    }
}
