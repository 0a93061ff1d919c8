use crate::api::{Holiday, LeaveRequest, LeaveStatus};
use chrono::NaiveDate;

/// Approved requests whose span covers the given date.
pub fn on_leave_on(leaves: &[LeaveRequest], date: NaiveDate) -> Vec<LeaveRequest> {
    leaves
        .iter()
        .filter(|request| {
            request.status == LeaveStatus::Approved
                && request.start_date <= date
                && date <= request.end_date
        })
        .cloned()
        .collect()
}

/// The next holidays on or after the given date, soonest first.
pub fn upcoming_holidays(holidays: &[Holiday], from: NaiveDate, limit: usize) -> Vec<Holiday> {
    let mut upcoming: Vec<Holiday> = holidays
        .iter()
        .filter(|holiday| holiday.date >= from)
        .cloned()
        .collect();
    upcoming.sort_by_key(|holiday| holiday.date);
    upcoming.truncate(limit);
    upcoming
}
