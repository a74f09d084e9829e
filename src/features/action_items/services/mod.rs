mod action_item_service;

pub use action_item_service::ActionItemService;
