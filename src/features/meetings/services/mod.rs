mod meeting_service;

pub use meeting_service::MeetingService;
