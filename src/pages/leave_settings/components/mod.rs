pub mod holidays_panel;
pub mod leave_types_panel;
