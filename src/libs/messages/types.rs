/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation in `display.rs`; variants only
/// carry the values that get interpolated.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),    // id
    SubtaskAdded(String), // id
    TaskToggled { text: String, done: bool },
    TaskRemoved { text: String, subtasks: usize },
    TaskNotesSaved,
    NoTasksYet,
    TasksDone { done: usize, total: usize },
    TaskLimitInfo { limit: usize, remaining: usize },
    TasksLocked,
    TasksFrozen,

    // === RECORD MESSAGES ===
    RecordHeader { kind: String, key: String, status: String },
    RecordClosed { kind: String, status: String },
    RecordFailReason(String),
    RecordClosedAt(String),
    RecordNotesSaved,
    RecordNotes(String),
    WeekTitleSaved(String),
    DeadlineSaved(String),
    DeadlineCleared,
    DeadlineShown(String),

    // === GOAL MESSAGES ===
    GoalsHeader,
    NoGoalsYet,
    GoalAdded { title: String, id: String },
    GoalRemoved(String),
    GoalUpdated(String),
    GoalWhy(String),
    MilestoneAdded(String), // id
    MilestoneToggled { text: String, done: bool },
    MilestoneRemoved(String),
    MilestoneNotesSaved,
    NoMilestonesYet,

    // === CALENDAR MESSAGES ===
    CalendarHeader(String), // month label
    CalendarDayHeader { date: String, count: usize },
    NoItemsOnDay,
    UpcomingHeader,
    NoGoalDeadlines,

    // === SETTINGS MESSAGES ===
    SettingsHeader,
    SettingsSaved,
    DataFileLocation(String),

    // === TIMER MESSAGES ===
    TimerStarted { phase: String, minutes: u32 },
    TimerPhaseChanged { from: String, to: String, completed: u32 },
    TimerFinished,
    TimerInterrupted(String), // remaining mm:ss
    TimerCannotStart,
    TimerPrefsSaved,
    TimerPrefsHeader,

    // === BACKUP MESSAGES ===
    ExportWritten(String), // path
    ImportCompleted(String),
    ImportCancelled,
    ConfirmImport(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleTimer,

    // === PROMPTS ===
    PromptFailReason,
    PromptCustomMinutes,
    PromptFocusMinutes,
    PromptShortBreakMinutes,
    PromptLongBreakMinutes,
    PromptCycleEvery,

    // === ERRORS ===
    Rejected(String),
    FailedToReadInput(String),
}
