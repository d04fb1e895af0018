#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hourly::libs::formatter::{
        format_amount, format_date, format_duration, format_hours, format_hours_compact, format_minutes_compact,
        format_money, format_time, format_timestamp_long, truncate,
    };
    use hourly::libs::interval::ClockTime;

    #[test]
    fn test_money_and_amounts() {
        assert_eq!(format_amount(170.0), "170.00");
        assert_eq!(format_amount(19.999), "20.00");
        assert_eq!(format_money(40.5, "€"), "€40.50");
        assert_eq!(format_money(0.0, "$"), "$0.00");
    }

    #[test]
    fn test_hours() {
        assert_eq!(format_hours(510), "8.50");
        assert_eq!(format_hours(0), "0.00");
        assert_eq!(format_hours(20), "0.33");
        assert_eq!(format_hours_compact(8.5), "8.5h");
        assert_eq!(format_minutes_compact(92.6), "93m");
    }

    #[test]
    fn test_duration() {
        assert_eq!(format_duration(Some(510)), "8h 30m");
        assert_eq!(format_duration(Some(45)), "0h 45m");
        assert_eq!(format_duration(Some(0)), "-");
        assert_eq!(format_duration(None), "-");
    }

    #[test]
    fn test_dates_and_times() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date(date), "05/01/2025");
        assert_eq!(
            format_timestamp_long(date.and_hms_opt(9, 7, 0).unwrap()),
            "5 de enero de 2025, 09:07"
        );
        assert_eq!(format_time(Some(ClockTime::new(7, 5).unwrap())), "07:05");
        assert_eq!(format_time(None), "-");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Website", 15), "Website");
        assert_eq!(truncate("exactly fifteen", 15), "exactly fifteen");
        assert_eq!(truncate("Desarrollo de aplicaciones", 15), "Desarrollo de a...");
        assert_eq!(truncate("Diseño gráfico móvil y web", 10), "Diseño grá...");
    }
}
