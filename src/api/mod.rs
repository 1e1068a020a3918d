pub mod client;
pub mod models;

pub use client::{settle_reply, ApiClient, ApiError, FAILURE_TEXT};
pub use models::{TaskReply, TaskRequest};
