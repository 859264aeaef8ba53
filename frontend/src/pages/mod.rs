pub mod entry_detail;
pub mod entry_list;
pub mod not_found;
