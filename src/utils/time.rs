use chrono::NaiveDate;

/// Calendar days covered by a leave span, both endpoints included.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today in the viewer's local timezone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_day_counts_as_one() {
        assert_eq!(inclusive_days(date(2025, 3, 10), date(2025, 3, 10)), 1);
    }

    #[test]
    fn span_counts_both_endpoints() {
        assert_eq!(inclusive_days(date(2025, 3, 10), date(2025, 3, 14)), 5);
    }

    #[test]
    fn dates_render_iso() {
        assert_eq!(format_date(date(2025, 12, 1)), "2025-12-01");
    }
}
