mod meeting_dto;

pub use meeting_dto::{CreateMeetingDto, MeetingResponseDto, UpdateMeetingDto};
