mod meeting_handler;

pub use meeting_handler::*;
