//! Meetings: one record per uploaded recording.
//!
//! Every operation is ownership-scoped; a lookup that matches by id but not
//! by owner returns 404 so the existence of other users' meetings is never
//! confirmed. The processing pipeline behind the status enum is intentionally
//! not implemented; clients drive status transitions explicitly for now.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/meetings` | Yes | List own meetings (paginated) |
//! | POST | `/api/meetings` | Yes | Create a meeting |
//! | GET | `/api/meetings/{id}` | Yes | Get own meeting |
//! | PATCH | `/api/meetings/{id}` | Yes | Partially update own meeting |
//! | DELETE | `/api/meetings/{id}` | Yes | Delete own meeting |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::MeetingService;
