pub mod holiday_list;
pub mod on_leave_today;
pub mod request_detail;
