#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hourly::db::{DataSource, Store};
    use hourly::libs::entry::{DurationPolicy, EntryDraft, TimeEntry};
    use hourly::libs::error::HourlyError;
    use hourly::libs::project::Project;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreContext {
        _temp_dir: TempDir,
        store: Store,
    }

    impl TestContext for StoreContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = Store::new(temp_dir.path().join("hourly.db"));
            StoreContext {
                _temp_dir: temp_dir,
                store,
            }
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    fn add_project(store: &Store, account: &str, name: &str, rate: f64) -> Project {
        let mut project = Project::new(name, rate);
        project.id = Some(store.projects(account).unwrap().insert(&project).unwrap());
        project
    }

    fn add_entry(store: &Store, account: &str, project: &Project, draft: EntryDraft) -> TimeEntry {
        let mut entry = draft.derive(project, DurationPolicy::Permissive).unwrap();
        entry.id = Some(store.entries(account).unwrap().insert(&entry).unwrap());
        entry
    }

    #[test_context(StoreContext)]
    #[test]
    fn test_project_crud(ctx: &mut StoreContext) {
        let project = add_project(&ctx.store, "acme", "Website", 20.0);
        let id = project.id.unwrap();
        let mut projects = ctx.store.projects("acme").unwrap();

        let stored = projects.fetch(id).unwrap();
        assert_eq!(stored, project);

        let edited = Project {
            name: "Website v2".to_string(),
            default_hourly_rate: 25.0,
            ..stored
        };
        projects.update(&edited).unwrap();
        assert_eq!(projects.fetch(id).unwrap().default_hourly_rate, 25.0);

        projects.archive(id).unwrap();
        assert!(!projects.fetch(id).unwrap().active);
        assert!(projects.list_active().unwrap().is_empty());
        assert_eq!(projects.list_all().unwrap().len(), 1);
    }

    #[test_context(StoreContext)]
    #[test]
    fn test_project_validation_and_missing(ctx: &mut StoreContext) {
        let mut projects = ctx.store.projects("acme").unwrap();

        assert!(projects.insert(&Project::new("   ", 10.0)).is_err());
        assert!(projects.insert(&Project::new("Negative", -1.0)).is_err());

        let err = projects.fetch(404).unwrap_err();
        assert_eq!(err.downcast_ref::<HourlyError>(), Some(&HourlyError::ProjectNotFound(404)));
        assert!(projects.archive(404).is_err());
    }

    #[test_context(StoreContext)]
    #[test]
    fn test_projects_ordered_by_name(ctx: &mut StoreContext) {
        add_project(&ctx.store, "acme", "beta", 10.0);
        add_project(&ctx.store, "acme", "Alpha", 10.0);
        add_project(&ctx.store, "acme", "gamma", 10.0);

        let names: Vec<String> = ctx.store.list_projects("acme").unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
    }

    #[test_context(StoreContext)]
    #[test]
    fn test_entry_crud(ctx: &mut StoreContext) {
        let project = add_project(&ctx.store, "acme", "Website", 20.0);
        let entry = add_entry(
            &ctx.store,
            "acme",
            &project,
            EntryDraft::new(project.id.unwrap(), date(1))
                .interval("09:00".parse().unwrap(), Some("17:30".parse().unwrap()))
                .description("Layout"),
        );
        let id = entry.id.unwrap();
        let mut entries = ctx.store.entries("acme").unwrap();

        let stored = entries.fetch(id).unwrap();
        assert_eq!(stored, entry);
        assert_eq!(stored.duration_minutes, Some(510));
        assert_eq!(stored.total, Some(170.0));
        assert_eq!(stored.project_name.as_deref(), Some("Website"));

        let replacement = EntryDraft::new(project.id.unwrap(), date(2))
            .duration(60)
            .derive(&project, DurationPolicy::Permissive)
            .unwrap();
        entries.update(id, &replacement).unwrap();
        let stored = entries.fetch(id).unwrap();
        assert_eq!(stored.date, date(2));
        assert_eq!(stored.start_time, None);
        assert_eq!(stored.total, Some(20.0));

        entries.delete(id).unwrap();
        assert!(entries.get(id).unwrap().is_none());
        let err = entries.delete(id).unwrap_err();
        assert_eq!(err.downcast_ref::<HourlyError>(), Some(&HourlyError::EntryNotFound(id)));
    }

    #[test_context(StoreContext)]
    #[test]
    fn test_entries_scoped_by_account(ctx: &mut StoreContext) {
        let mine = add_project(&ctx.store, "acme", "Website", 20.0);
        let theirs = add_project(&ctx.store, "globex", "Backend", 30.0);
        add_entry(&ctx.store, "acme", &mine, EntryDraft::new(mine.id.unwrap(), date(1)).duration(60));
        let foreign = add_entry(&ctx.store, "globex", &theirs, EntryDraft::new(theirs.id.unwrap(), date(1)).duration(60));

        let entries = ctx.store.list_entries("acme", None, None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].project_id, mine.id.unwrap());

        assert!(ctx.store.entries("acme").unwrap().get(foreign.id.unwrap()).unwrap().is_none());
        assert_eq!(ctx.store.list_projects("acme").unwrap().len(), 1);
    }

    #[test_context(StoreContext)]
    #[test]
    fn test_entries_range_and_order(ctx: &mut StoreContext) {
        let project = add_project(&ctx.store, "acme", "Website", 20.0);
        let pid = project.id.unwrap();
        for (day, start) in [(3, "08:00"), (1, "09:00"), (3, "14:00"), (10, "10:00")] {
            add_entry(
                &ctx.store,
                "acme",
                &project,
                EntryDraft::new(pid, date(day)).interval(start.parse().unwrap(), Some("18:00".parse().unwrap())),
            );
        }

        let entries = ctx.store.list_entries("acme", Some(date(1)), Some(date(3))).unwrap();
        let keys: Vec<(NaiveDate, String)> = entries
            .iter()
            .map(|e| (e.date, e.start_time.unwrap().to_string()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (date(3), "14:00".to_string()),
                (date(3), "08:00".to_string()),
                (date(1), "09:00".to_string()),
            ]
        );

        assert_eq!(ctx.store.list_entries("acme", Some(date(4)), None).unwrap().len(), 1);
        assert_eq!(ctx.store.list_entries("acme", None, Some(date(2))).unwrap().len(), 1);
    }

    #[test_context(StoreContext)]
    #[test]
    fn test_archived_project_keeps_entries(ctx: &mut StoreContext) {
        let project = add_project(&ctx.store, "acme", "Website", 20.0);
        add_entry(&ctx.store, "acme", &project, EntryDraft::new(project.id.unwrap(), date(5)).duration(30));

        ctx.store.projects("acme").unwrap().archive(project.id.unwrap()).unwrap();

        assert!(ctx.store.list_projects("acme").unwrap().is_empty());
        assert_eq!(ctx.store.list_entries("acme", None, None).unwrap().len(), 1);
    }
}
