#[cfg(test)]
mod tests {
    use dtrack::libs::error::TrackerError;
    use dtrack::libs::messages::Message;
    use dtrack::libs::record::RecordStatus;
    use dtrack::{msg_bail_anyhow, msg_error_anyhow};

    #[test]
    fn test_message_text() {
        assert_eq!(Message::TasksDone { done: 2, total: 3 }.to_string(), "Done: 2/3");
        assert_eq!(
            Message::RecordHeader {
                kind: "Day".to_string(),
                key: "2026-03-02".to_string(),
                status: RecordStatus::Open.to_string(),
            }
            .to_string(),
            "Day 2026-03-02 [OPEN]"
        );
        assert_eq!(
            Message::TaskRemoved {
                text: "Run".to_string(),
                subtasks: 2
            }
            .to_string(),
            "Removed 'Run' and 2 subtask(s)"
        );
    }

    #[test]
    fn test_rejection_wraps_error_text() {
        let message = Message::Rejected(TrackerError::LimitReached(8).to_string());
        assert_eq!(message.to_string(), "Rejected: task limit reached (8)");
    }

    #[test]
    fn test_anyhow_macros() {
        let err = msg_error_anyhow!(Message::TimerCannotStart);
        assert_eq!(err.to_string(), "Nothing to count down.");

        fn bail() -> anyhow::Result<()> {
            msg_bail_anyhow!(Message::Rejected("locked".to_string()))
        }
        assert_eq!(bail().unwrap_err().to_string(), "Rejected: locked");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TrackerError::NotAllDone { done: 1, total: 4 }.to_string(),
            "every required task must be done first (1/4)"
        );
        assert_eq!(
            TrackerError::AlreadyClosed(RecordStatus::Passed).to_string(),
            "record is already closed as passed"
        );
    }
}
