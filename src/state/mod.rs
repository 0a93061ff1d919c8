pub mod employee;
pub mod permissions;
