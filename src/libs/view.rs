use super::calendar::CalendarItem;
use super::document::Settings;
use super::formatter::{checkbox, format_progress};
use super::goal::Goal;
use super::task::TaskTree;
use super::timer::TimerPrefs;
use prettytable::{row, Table};
use std::collections::BTreeMap;

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub struct View {}

impl View {
    pub fn tasks(tasks: &TaskTree) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "SUBTASKS", "NOTES"]);
        for (depth, task) in tasks.walk() {
            let done = task.subtasks.iter().filter(|s| s.done).count();
            table.add_row(row![
                task.id,
                format!("{}{} {}", "  ".repeat(depth), checkbox(task.done), task.text),
                format_progress(done, task.subtasks.len()),
                task.notes.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();
    }

    pub fn goals(goals: &[&Goal]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DEADLINE", "MILESTONES", "WHY"]);
        for goal in goals {
            let (done, total) = goal.progress();
            table.add_row(row![
                goal.id,
                goal.title,
                goal.deadline_iso.as_deref().unwrap_or("-"),
                format!("{}/{}", done, total),
                goal.why.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();
    }

    pub fn milestones(goal: &Goal) {
        let mut table = Table::new();

        table.add_row(row!["ID", "MILESTONE", "NOTES"]);
        for m in &goal.milestones {
            table.add_row(row![m.id, format!("{} {}", checkbox(m.done), m.text), m.notes.as_deref().unwrap_or("")]);
        }
        table.printstd();
    }

    /// Month grid: one row per week, Monday first.
    pub fn calendar(cells: &[Option<u32>], items_by_day: &BTreeMap<u32, Vec<CalendarItem>>) {
        let mut table = Table::new();

        table.add_row(WEEKDAYS.iter().collect());
        for week in cells.chunks(7) {
            table.add_row(
                week.iter()
                    .map(|cell| match cell {
                        Some(day) => Self::calendar_cell(*day, items_by_day.get(day).map(Vec::as_slice).unwrap_or(&[])),
                        None => String::new(),
                    })
                    .collect(),
            );
        }
        table.printstd();
    }

    fn calendar_cell(day: u32, items: &[CalendarItem]) -> String {
        if items.is_empty() {
            return day.to_string();
        }
        let titles: Vec<&str> = items.iter().take(2).map(|i| i.title.as_str()).collect();
        format!("{} ({})\n{}", day, items.len(), titles.join(" • "))
    }

    pub fn calendar_items(items: &[CalendarItem]) {
        let mut table = Table::new();

        table.add_row(row!["KIND", "TITLE", "DATE"]);
        for item in items {
            table.add_row(row![item.kind, item.title, item.date_iso]);
        }
        table.printstd();
    }

    pub fn settings(settings: &Settings) {
        let mut table = Table::new();

        table.add_row(row!["SETTING", "VALUE"]);
        table.add_row(row!["daily task limit", settings.daily_task_limit]);
        table.add_row(row!["lock after start", settings.lock_after_start]);
        table.printstd();
    }

    pub fn timer_prefs(prefs: &TimerPrefs) {
        let mut table = Table::new();

        table.add_row(row!["PREFERENCE", "VALUE"]);
        table.add_row(row!["custom (min)", prefs.custom_minutes]);
        table.add_row(row!["focus (min)", prefs.focus_minutes]);
        table.add_row(row!["short break (min)", prefs.short_break_minutes]);
        table.add_row(row!["long break (min)", prefs.long_break_minutes]);
        table.add_row(row!["long break every", prefs.cycle_every]);
        table.printstd();
    }
}
