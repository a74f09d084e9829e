mod action_item_handler;

pub use action_item_handler::*;
