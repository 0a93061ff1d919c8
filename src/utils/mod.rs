pub mod download;
pub mod file_input;
pub mod storage;
pub mod time;
