pub mod dates;

pub use dates::{
    comment_label, entry_label, format_comment_label, format_entry_label, parse_timestamp,
    DateParseError,
};
