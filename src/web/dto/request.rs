//! Request DTOs for the anonboard API.
//!
//! Bodies arrive form-encoded. Fields are optional at the extractor
//! level so that missing ones surface as 400s with an error body rather
//! than as extractor rejections.

use serde::Deserialize;

/// Body of POST /api/threads/:board.
#[derive(Debug, Deserialize)]
pub struct CreateThreadForm {
    /// Thread text.
    pub text: Option<String>,
    /// Delete password for the thread.
    pub delete_password: Option<String>,
}

/// Body of DELETE /api/threads/:board.
#[derive(Debug, Deserialize)]
pub struct DeleteThreadForm {
    /// Thread to delete.
    pub thread_id: Option<String>,
    /// Delete password.
    pub delete_password: Option<String>,
}

/// Body of PUT /api/threads/:board.
#[derive(Debug, Deserialize)]
pub struct ReportThreadForm {
    /// Thread to report.
    pub thread_id: Option<String>,
}

/// Query of GET /api/replies/:board.
#[derive(Debug, Deserialize)]
pub struct ThreadQuery {
    /// Thread to show.
    pub thread_id: Option<String>,
}

/// Body of POST /api/replies/:board.
#[derive(Debug, Deserialize)]
pub struct CreateReplyForm {
    /// Thread to reply to.
    pub thread_id: Option<String>,
    /// Reply text.
    pub text: Option<String>,
    /// Delete password for the reply.
    pub delete_password: Option<String>,
}

/// Body of DELETE /api/replies/:board.
#[derive(Debug, Deserialize)]
pub struct DeleteReplyForm {
    /// Thread containing the reply.
    pub thread_id: Option<String>,
    /// Reply to delete.
    pub reply_id: Option<String>,
    /// Delete password.
    pub delete_password: Option<String>,
}

/// Body of PUT /api/replies/:board.
#[derive(Debug, Deserialize)]
pub struct ReportReplyForm {
    /// Thread containing the reply.
    pub thread_id: Option<String>,
    /// Reply to report.
    pub reply_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_thread_form_urlencoded() {
        let form: CreateThreadForm =
            serde_urlencoded::from_str("text=hello&delete_password=pw").unwrap();
        assert_eq!(form.text.as_deref(), Some("hello"));
        assert_eq!(form.delete_password.as_deref(), Some("pw"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let form: DeleteReplyForm = serde_urlencoded::from_str("thread_id=abc").unwrap();
        assert_eq!(form.thread_id.as_deref(), Some("abc"));
        assert!(form.reply_id.is_none());
        assert!(form.delete_password.is_none());
    }

    #[test]
    fn test_thread_query_missing_param() {
        let query: ThreadQuery = serde_urlencoded::from_str("").unwrap();
        assert!(query.thread_id.is_none());
    }
}
