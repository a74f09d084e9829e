//! User accounts: the credential store behind registration and login.
//!
//! Accounts are never hard-deleted; deactivation flips `is_active`, which is
//! also the only immediate revocation path for outstanding tokens (the auth
//! middleware re-fetches the user on every protected request).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | DELETE | `/api/users/me` | Yes | Deactivate the caller's account |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
