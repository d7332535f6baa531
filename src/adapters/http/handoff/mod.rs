//! HTTP adapter for handoff endpoints.

mod dto;
mod extract;
mod handlers;
mod pages;
mod routes;

pub use dto::{ErrorResponse, MessageResponse, SuccessResponse, UploadTextRequest, ValidateRequest};
pub use extract::JsonOrForm;
pub use handlers::{HandoffHandlers, TIMED_OUT_PATH};
pub use routes::handoff_routes;
