//! Action items: tasks derived from (or manually attached to) a meeting.
//!
//! Ownership is inherited from the meeting and re-checked on create; reads,
//! updates and deletes filter on the denormalized `user_id`. `completed_at`
//! is stamped exactly once, on the first transition to `completed`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/action-items` | Yes | List own items (paginated, optional meeting filter) |
//! | POST | `/api/action-items` | Yes | Create an item on an owned meeting |
//! | GET | `/api/action-items/{id}` | Yes | Get own item |
//! | PATCH | `/api/action-items/{id}` | Yes | Partially update own item |
//! | DELETE | `/api/action-items/{id}` | Yes | Delete own item |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ActionItemService;
