pub mod documents_tab;
pub mod leaves_tab;
pub mod summary;
