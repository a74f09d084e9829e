mod action_item_dto;

pub use action_item_dto::{
    ActionItemListQuery, ActionItemResponseDto, CreateActionItemDto, UpdateActionItemDto,
};
