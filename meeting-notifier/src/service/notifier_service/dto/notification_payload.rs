#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
}

impl NotificationPayload {
    pub fn meeting_added(meeting_title: &str) -> Self {
        Self {
            title: "New Meeting Added".to_string(),
            body: format!("Meeting: {meeting_title}"),
        }
    }

    pub fn meeting_cancelled(meeting_title: &str) -> Self {
        Self {
            title: "Meeting Cancelled".to_string(),
            body: format!("Meeting: {meeting_title}"),
        }
    }
}
