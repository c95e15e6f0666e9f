//! Display implementation for dtrack messages.
//!
//! All message text is defined here, in one match, so wording stays
//! consistent across commands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Task added ({})", id),
            Message::SubtaskAdded(id) => format!("Subtask added ({})", id),
            Message::TaskToggled { text, done } => {
                if *done {
                    format!("Done: {}", text)
                } else {
                    format!("Reopened: {}", text)
                }
            }
            Message::TaskRemoved { text, subtasks } => {
                if *subtasks > 0 {
                    format!("Removed '{}' and {} subtask(s)", text, subtasks)
                } else {
                    format!("Removed '{}'", text)
                }
            }
            Message::TaskNotesSaved => "Task notes saved".to_string(),
            Message::NoTasksYet => "No tasks yet.".to_string(),
            Message::TasksDone { done, total } => format!("Done: {}/{}", done, total),
            Message::TaskLimitInfo { limit, remaining } => format!("Limit: {} ({} slots left)", limit, remaining),
            Message::TasksLocked => "Tasks are locked: you can still check them off, but not add or remove.".to_string(),
            Message::TasksFrozen => "This record is closed. Nothing can be changed.".to_string(),

            // === RECORD MESSAGES ===
            Message::RecordHeader { kind, key, status } => format!("{} {} [{}]", kind, key, status.to_uppercase()),
            Message::RecordClosed { kind, status } => format!("{} closed as {}", kind, status.to_uppercase()),
            Message::RecordFailReason(reason) => format!("Failure reason: {}", reason),
            Message::RecordClosedAt(at) => format!("Closed at {}", at),
            Message::RecordNotesSaved => "Notes saved".to_string(),
            Message::RecordNotes(notes) => format!("Notes: {}", notes),
            Message::WeekTitleSaved(title) => format!("Week title set to '{}'", title),
            Message::DeadlineSaved(date) => format!("Deadline set to {}", date),
            Message::DeadlineCleared => "Deadline cleared".to_string(),
            Message::DeadlineShown(date) => format!("Deadline: {}", date),

            // === GOAL MESSAGES ===
            Message::GoalsHeader => "Goals".to_string(),
            Message::NoGoalsYet => "No goals yet.".to_string(),
            Message::GoalAdded { title, id } => format!("Goal '{}' added ({})", title, id),
            Message::GoalRemoved(title) => format!("Goal '{}' deleted", title),
            Message::GoalUpdated(title) => format!("Goal '{}' updated", title),
            Message::GoalWhy(why) => format!("Why: {}", why),
            Message::MilestoneAdded(id) => format!("Milestone added ({})", id),
            Message::MilestoneToggled { text, done } => {
                if *done {
                    format!("Milestone done: {}", text)
                } else {
                    format!("Milestone reopened: {}", text)
                }
            }
            Message::MilestoneRemoved(text) => format!("Milestone '{}' removed", text),
            Message::MilestoneNotesSaved => "Milestone notes saved".to_string(),
            Message::NoMilestonesYet => "No milestones yet.".to_string(),

            // === CALENDAR MESSAGES ===
            Message::CalendarHeader(label) => format!("Calendar: {}", label),
            Message::CalendarDayHeader { date, count } => format!("Items for {} ({})", date, count),
            Message::NoItemsOnDay => "No deadlines on this day.".to_string(),
            Message::UpcomingHeader => "Upcoming goal deadlines".to_string(),
            Message::NoGoalDeadlines => "No goal deadlines yet. Add one with `dtrack goal deadline`.".to_string(),

            // === SETTINGS MESSAGES ===
            Message::SettingsHeader => "Settings".to_string(),
            Message::SettingsSaved => "Settings saved".to_string(),
            Message::DataFileLocation(path) => format!("Data file: {}", path),

            // === TIMER MESSAGES ===
            Message::TimerStarted { phase, minutes } => format!("Timer started: {} for {} min. Press Ctrl-C to stop.", phase, minutes),
            Message::TimerPhaseChanged { from, to, completed } => {
                format!("{} finished, starting {} (focus sessions: {})", from, to, completed)
            }
            Message::TimerFinished => "Time is up!".to_string(),
            Message::TimerInterrupted(left) => format!("Timer stopped with {} left", left),
            Message::TimerCannotStart => "Nothing to count down.".to_string(),
            Message::TimerPrefsSaved => "Timer preferences saved".to_string(),
            Message::TimerPrefsHeader => "Timer preferences".to_string(),

            // === BACKUP MESSAGES ===
            Message::ExportWritten(path) => format!("Exported to {}", path),
            Message::ImportCompleted(path) => format!("Imported into {}", path),
            Message::ImportCancelled => "Import cancelled".to_string(),
            Message::ConfirmImport(path) => format!("Import overwrites all local data in {}. Continue?", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleTimer => "Timer".to_string(),

            // === PROMPTS ===
            Message::PromptFailReason => "Why did you fail?".to_string(),
            Message::PromptCustomMinutes => "Custom countdown (minutes, 1-999)".to_string(),
            Message::PromptFocusMinutes => "Focus session (minutes, 1-180)".to_string(),
            Message::PromptShortBreakMinutes => "Short break (minutes, 1-60)".to_string(),
            Message::PromptLongBreakMinutes => "Long break (minutes, 1-120)".to_string(),
            Message::PromptCycleEvery => "Long break after every N focus sessions (1-12)".to_string(),

            // === ERRORS ===
            Message::Rejected(reason) => format!("Rejected: {}", reason),
            Message::FailedToReadInput(e) => format!("Failed to read input: {}", e),
        };

        write!(f, "{}", text)
    }
}
