pub mod comment_form;
pub mod comment_list;
pub mod diary_entry;
pub mod loading;
pub mod status_message;
