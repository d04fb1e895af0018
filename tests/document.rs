#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hourly::libs::aggregate::{aggregate, ReportAggregate};
    use hourly::libs::document::{render_document, DrawOp, PageLayout, RenderOptions, ReportPeriod, TABLE_COLUMNS};
    use hourly::libs::entry::{DurationPolicy, EntryDraft};
    use hourly::libs::error::HourlyError;
    use hourly::libs::project::Project;
    use std::collections::HashMap;

    fn period() -> ReportPeriod {
        ReportPeriod {
            from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        }
    }

    fn options() -> RenderOptions {
        let at = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap().and_hms_opt(14, 30, 0).unwrap();
        RenderOptions::new("€", at)
    }

    fn report(count: usize) -> ReportAggregate {
        let mut alpha = Project::new("Desarrollo de aplicaciones", 20.0);
        alpha.id = Some(1);
        let mut beta = Project::new("Soporte", 30.0);
        beta.id = Some(2);

        let entries: Vec<_> = (0..count)
            .map(|i| {
                let project = if i % 2 == 0 { &alpha } else { &beta };
                let date = NaiveDate::from_ymd_opt(2025, 1, 1 + (i as u32 % 31)).unwrap();
                EntryDraft::new(project.id.unwrap(), date)
                    .duration(60)
                    .derive(project, DurationPolicy::Permissive)
                    .unwrap()
            })
            .collect();
        let projects = HashMap::from([(1, alpha), (2, beta)]);
        aggregate(&entries, &projects)
    }

    #[test]
    fn test_single_page_report() {
        let doc = render_document("Informe", "Enero", &period(), &report(2), &options()).unwrap();

        assert_eq!(doc.pages.len(), 1);
        let texts = doc.pages[0].texts();
        for expected in [
            "Hourly",
            "Informe",
            "Enero",
            "Período: 01/01/2025 - 31/01/2025",
            "Generado el: 1 de febrero de 2025, 14:30",
            "Resumen Ejecutivo",
            "Total Horas",
            "2.0h",
            "€50.00",
            "Detalle de Horas Trabajadas",
            "Subtotal Desarrollo de aplicaciones:",
            "Subtotal Soporte:",
            "TOTAL GENERAL:",
            "Página 1 de 1",
        ] {
            assert!(texts.contains(&expected), "missing {:?}", expected);
        }
    }

    #[test]
    fn test_long_project_names_are_truncated() {
        let doc = render_document("Informe", "", &period(), &report(1), &options()).unwrap();
        let texts = doc.pages[0].texts();

        assert!(texts.contains(&"Desarrollo de a..."));
        assert!(!texts.contains(&"Subtotal Soporte:"));
    }

    #[test]
    fn test_many_entries_paginate() {
        let doc = render_document("Informe", "", &period(), &report(120), &options()).unwrap();
        let count = doc.pages.len();
        assert!(count > 2);

        for (i, page) in doc.pages.iter().enumerate() {
            let texts = page.texts();
            let footer = format!("Página {} de {}", i + 1, count);
            assert!(texts.contains(&footer.as_str()));

            if i == 0 {
                assert!(texts.contains(&"Hourly"));
                assert!(texts.contains(&"Resumen Ejecutivo"));
            } else {
                assert!(!texts.contains(&"Hourly"));
                assert!(!texts.contains(&"Resumen Ejecutivo"));
                assert_eq!(&texts[..TABLE_COLUMNS.len()], &TABLE_COLUMNS[..]);
            }
        }

        let last = doc.pages.last().unwrap().texts();
        assert!(last.contains(&"TOTAL GENERAL:"));
    }

    #[test]
    fn test_table_stays_above_printable_bottom() {
        let layout = PageLayout::default();
        let doc = render_document("Informe", "", &period(), &report(120), &options()).unwrap();
        let footer_zone = layout.height - 25.0;

        for page in &doc.pages {
            for op in &page.ops {
                match op {
                    DrawOp::Text { y, text, .. } if *y < footer_zone => {
                        assert!(*y <= layout.printable_bottom, "{:?} at {}", text, y);
                    }
                    DrawOp::Rect { y, height, .. } => {
                        assert!(y + height <= layout.printable_bottom);
                    }
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn test_average_tile_is_per_entry() {
        let mut project = Project::new("Soporte", 30.0);
        project.id = Some(1);
        let day = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let entries: Vec<_> = (0..2)
            .map(|_| {
                EntryDraft::new(1, day)
                    .duration(60)
                    .derive(&project, DurationPolicy::Permissive)
                    .unwrap()
            })
            .collect();
        let report = aggregate(&entries, &HashMap::from([(1, project)]));

        let doc = render_document("Informe", "", &period(), &report, &options()).unwrap();
        let texts = doc.pages[0].texts();

        assert!(texts.contains(&"Promedio/Día"));
        assert!(texts.contains(&"60m"));
        assert!(!texts.contains(&"120m"));
    }

    #[test]
    fn test_unknown_bucket_rows_use_bucket_label() {
        let mut archived = Project::new("Old client", 20.0);
        archived.id = Some(1);
        let entry = EntryDraft::new(1, NaiveDate::from_ymd_opt(2025, 1, 3).unwrap())
            .duration(60)
            .derive(&archived, DurationPolicy::Permissive)
            .unwrap();
        archived.active = false;
        let report = aggregate(&[entry], &HashMap::from([(1, archived)]));

        let doc = render_document("Informe", "", &period(), &report, &options()).unwrap();
        let texts = doc.pages[0].texts();

        assert!(!texts.contains(&"Old client"));
        assert!(texts.contains(&"Proyecto descon..."));
        assert!(texts.contains(&"Subtotal Proyecto desconocido:"));
    }

    #[test]
    fn test_empty_report_is_rejected() {
        let empty = aggregate(&[], &HashMap::new());
        let err = render_document("Informe", "", &period(), &empty, &options()).unwrap_err();
        assert_eq!(err, HourlyError::EmptyDataset);
    }
}
