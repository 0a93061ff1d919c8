pub mod employee_form;
pub mod employee_table;
