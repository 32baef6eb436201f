//! Data models for the roster management application.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod audit;
mod device;
mod employee;
mod event;
mod global;
mod snapshot;
mod user;

pub use audit::*;
pub use device::*;
pub use employee::*;
pub use event::*;
pub use global::*;
pub use snapshot::*;
pub use user::*;
