#[cfg(test)]
mod tests {
    use dtrack::libs::document::Settings;
    use dtrack::libs::error::TrackerError;
    use dtrack::libs::record::{
        DayRecord, Lock, MonthRecord, Record, RecordStatus, WeekRecord, DEFAULT_WEEK_TITLE, MONTH_OUTCOME_LIMIT, WEEK_TASK_LIMIT,
    };

    fn settings(limit: u32, lock_after_start: bool) -> Settings {
        Settings {
            daily_task_limit: limit,
            lock_after_start,
            ..Settings::default()
        }
    }

    #[test]
    fn test_new_records_are_open() {
        let day = DayRecord::new("2026-03-02");
        assert_eq!(day.status, RecordStatus::Open);
        assert_eq!(day.notes.as_deref(), Some(""));
        assert!(day.tasks.is_empty());

        let week = WeekRecord::new("2026-03-02");
        assert_eq!(week.title, DEFAULT_WEEK_TITLE);
        assert_eq!(week.deadline_iso, None);

        let month = MonthRecord::new("2026-03");
        assert_eq!(month.key(), "2026-03");
        assert!(month.tasks().is_empty());
    }

    #[test]
    fn test_day_limit_from_settings() {
        let settings = settings(2, false);
        let mut day = DayRecord::new("2026-03-02");
        day.add_task(&settings, "one", 0).unwrap();
        day.add_task(&settings, "two", 0).unwrap();
        let before = day.clone();

        assert!(matches!(day.add_task(&settings, "three", 0), Err(TrackerError::LimitReached(2))));
        assert_eq!(day, before);
    }

    #[test]
    fn test_week_and_month_limits() {
        let settings = Settings::default();

        let mut week = WeekRecord::new("2026-03-02");
        for i in 0..WEEK_TASK_LIMIT {
            week.add_task(&settings, &format!("w{}", i), 0).unwrap();
        }
        assert!(matches!(week.add_task(&settings, "extra", 0), Err(TrackerError::LimitReached(50))));

        let mut month = MonthRecord::new("2026-03");
        for i in 0..MONTH_OUTCOME_LIMIT {
            month.add_task(&settings, &format!("m{}", i), 0).unwrap();
        }
        assert!(matches!(month.add_task(&settings, "extra", 0), Err(TrackerError::LimitReached(12))));
        assert_eq!(month.outcomes.len(), MONTH_OUTCOME_LIMIT);
    }

    #[test]
    fn test_close_success_requires_all_done() {
        let settings = Settings::default();
        let mut day = DayRecord::new("2026-03-02");
        let one = day.add_task(&settings, "one", 0).unwrap();
        day.add_task(&settings, "two", 0).unwrap();
        day.toggle_task(&one).unwrap();

        let result = day.close_success(100);
        assert!(matches!(result, Err(TrackerError::NotAllDone { done: 1, total: 2 })));
        assert_eq!(day.status, RecordStatus::Open);
        assert_eq!(day.closed_at, None);
    }

    #[test]
    fn test_close_success_rejects_empty_record() {
        let mut week = WeekRecord::new("2026-03-02");
        assert!(matches!(week.close_success(1), Err(TrackerError::NotAllDone { done: 0, total: 0 })));
    }

    #[test]
    fn test_subtasks_do_not_block_closing() {
        let settings = Settings::default();
        let mut day = DayRecord::new("2026-03-02");
        let root = day.add_task(&settings, "root", 0).unwrap();
        day.add_subtask(&settings, &root, "open child", 0).unwrap();
        day.toggle_task(&root).unwrap();

        assert_eq!(day.close_success(5).unwrap(), RecordStatus::Completed);
    }

    #[test]
    fn test_success_status_per_kind() {
        let settings = Settings::default();

        let mut day = DayRecord::new("2026-03-02");
        let id = day.add_task(&settings, "x", 0).unwrap();
        day.toggle_task(&id).unwrap();
        assert_eq!(day.close_success(10).unwrap(), RecordStatus::Completed);
        assert_eq!(day.closed_at, Some(10));
        assert_eq!(day.fail_reason, None);

        let mut week = WeekRecord::new("2026-03-02");
        let id = week.add_task(&settings, "x", 0).unwrap();
        week.toggle_task(&id).unwrap();
        assert_eq!(week.close_success(10).unwrap(), RecordStatus::Passed);

        let mut month = MonthRecord::new("2026-03");
        let id = month.add_task(&settings, "x", 0).unwrap();
        month.toggle_task(&id).unwrap();
        assert_eq!(month.close_success(10).unwrap(), RecordStatus::Passed);
    }

    #[test]
    fn test_close_failed_requires_reason() {
        let mut day = DayRecord::new("2026-03-02");
        assert!(matches!(day.close_failed("   ", 1), Err(TrackerError::EmptyReason)));
        assert_eq!(day.status, RecordStatus::Open);

        assert_eq!(day.close_failed("  Overslept  ", 7).unwrap(), RecordStatus::Failed);
        assert_eq!(day.fail_reason.as_deref(), Some("Overslept"));
        assert_eq!(day.closed_at, Some(7));
    }

    #[test]
    fn test_failing_needs_no_done_tasks() {
        let settings = Settings::default();
        let mut month = MonthRecord::new("2026-03");
        month.add_task(&settings, "ship", 0).unwrap();
        assert_eq!(month.close_failed("scope", 1).unwrap(), RecordStatus::Failed);
    }

    #[test]
    fn test_terminal_status_is_final() {
        let mut day = DayRecord::new("2026-03-02");
        day.close_failed("sick", 1).unwrap();

        assert!(matches!(day.close_failed("again", 2), Err(TrackerError::AlreadyClosed(RecordStatus::Failed))));
        assert!(matches!(day.close_success(2), Err(TrackerError::AlreadyClosed(RecordStatus::Failed))));
        assert_eq!(day.closed_at, Some(1));
        assert_eq!(day.fail_reason.as_deref(), Some("sick"));
    }

    #[test]
    fn test_closed_record_rejects_every_edit() {
        let settings = Settings::default();
        let mut week = WeekRecord::new("2026-03-02");
        let id = week.add_task(&settings, "x", 0).unwrap();
        week.toggle_task(&id).unwrap();
        week.close_success(1).unwrap();
        let before = week.clone();

        assert_eq!(week.lock(&settings), Lock::Frozen);
        assert!(matches!(week.add_task(&settings, "y", 0), Err(TrackerError::Locked(RecordStatus::Passed))));
        assert!(matches!(week.add_subtask(&settings, &id, "y", 0), Err(TrackerError::Locked(_))));
        assert!(matches!(week.toggle_task(&id), Err(TrackerError::Locked(_))));
        assert!(matches!(week.remove_task(&settings, &id), Err(TrackerError::Locked(_))));
        assert!(matches!(week.set_task_notes(&id, "late"), Err(TrackerError::Locked(_))));
        assert!(matches!(week.set_title("renamed"), Err(TrackerError::Locked(_))));
        assert!(matches!(week.set_deadline(Some("2026-03-08")), Err(TrackerError::Locked(_))));
        assert_eq!(week, before);
    }

    #[test]
    fn test_closed_day_rejects_notes() {
        let mut day = DayRecord::new("2026-03-02");
        day.close_failed("no", 1).unwrap();
        assert!(matches!(day.set_notes("after the fact"), Err(TrackerError::Locked(_))));
        assert_eq!(day.notes.as_deref(), Some(""));
    }

    #[test]
    fn test_lock_after_start_blocks_structure_only() {
        let settings = settings(8, true);
        let mut day = DayRecord::new("2026-03-02");
        assert_eq!(day.lock(&settings), Lock::Open);

        let id = day.add_task(&settings, "first", 0).unwrap();
        assert_eq!(day.lock(&settings), Lock::Structure);

        assert!(matches!(day.add_task(&settings, "second", 0), Err(TrackerError::StructureLocked)));
        assert!(matches!(day.add_subtask(&settings, &id, "child", 0), Err(TrackerError::StructureLocked)));
        assert!(matches!(day.remove_task(&settings, &id), Err(TrackerError::StructureLocked)));

        assert!(day.toggle_task(&id).unwrap());
        day.set_task_notes(&id, "done early").unwrap();
        day.set_notes("good day").unwrap();
        assert_eq!(day.close_success(1).unwrap(), RecordStatus::Completed);
    }

    #[test]
    fn test_lock_after_start_ignores_weeks() {
        let settings = settings(8, true);
        let mut week = WeekRecord::new("2026-03-02");
        week.add_task(&settings, "one", 0).unwrap();
        week.add_task(&settings, "two", 0).unwrap();
        assert_eq!(week.lock(&settings), Lock::Open);
    }

    #[test]
    fn test_week_title_and_deadline() {
        let mut week = WeekRecord::new("2026-03-02");
        week.set_title("Launch week").unwrap();
        week.set_deadline(Some("2026-03-08")).unwrap();
        assert_eq!(week.title, "Launch week");
        assert_eq!(week.deadline_iso.as_deref(), Some("2026-03-08"));

        week.set_deadline(Some("  ")).unwrap();
        assert_eq!(week.deadline_iso, None);

        assert!(matches!(week.set_deadline(Some("2026-02-30")), Err(TrackerError::InvalidDate(_))));
    }

    #[test]
    fn test_remove_task_returns_subtree() {
        let settings = Settings::default();
        let mut day = DayRecord::new("2026-03-02");
        let root = day.add_task(&settings, "root", 0).unwrap();
        day.add_subtask(&settings, &root, "a", 0).unwrap();
        day.add_subtask(&settings, &root, "b", 0).unwrap();

        let removed = day.remove_task(&settings, &root).unwrap();
        assert_eq!(removed.subtasks.len(), 2);
        assert!(day.tasks.is_empty());
    }

    #[test]
    fn test_json_field_names() {
        let mut day = DayRecord::new("2026-03-02");
        day.close_failed("tired", 99).unwrap();
        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["dateISO"], "2026-03-02");
        assert_eq!(json["status"], "failed");
        assert_eq!(json["failReason"], "tired");
        assert_eq!(json["closedAt"], 99);

        let mut month = MonthRecord::new("2026-03");
        month.set_deadline(Some("2026-03-31")).unwrap();
        let json = serde_json::to_value(&month).unwrap();
        assert_eq!(json["monthISO"], "2026-03");
        assert_eq!(json["deadlineISO"], "2026-03-31");
        assert!(json["outcomes"].is_array());

        let json = serde_json::to_value(WeekRecord::new("2026-03-02")).unwrap();
        assert_eq!(json["weekStartISO"], "2026-03-02");
        assert!(json.get("deadlineISO").is_none());
    }
}
