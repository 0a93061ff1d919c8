pub mod dashboard;
pub mod employee_profile;
pub mod employees;
pub mod leave_settings;
pub mod leaves;
pub mod message;
