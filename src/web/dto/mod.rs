//! Request and response DTOs for the anonboard API.

pub mod request;
pub mod response;

pub use request::{
    CreateReplyForm, CreateThreadForm, DeleteReplyForm, DeleteThreadForm, ReportReplyForm,
    ReportThreadForm, ThreadQuery,
};
pub use response::{ReplyCreatedResponse, ThreadCreatedResponse};
