//! Calendar projection of dated deadlines.
//!
//! Nothing here is stored. Goals, weeks and months that carry a deadline are
//! bucketed by day of month for the displayed month.

use super::document::Document;
use super::period::YearMonth;
use std::collections::BTreeMap;
use std::fmt;

pub const UPCOMING_LIMIT: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ItemKind {
    Goal,
    Week,
    Month,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemKind::Goal => "GOAL",
            ItemKind::Week => "WEEK",
            ItemKind::Month => "MONTH",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarItem {
    pub kind: ItemKind,
    pub id: String,
    pub title: String,
    pub date_iso: String,
}

/// Every dated item of the document, goals first, then weeks, then months,
/// each group ordered by deadline.
pub fn dated_items(doc: &Document) -> Vec<CalendarItem> {
    let mut goals: Vec<CalendarItem> = doc
        .goals
        .values()
        .filter_map(|g| {
            g.deadline_iso.as_ref().map(|d| CalendarItem {
                kind: ItemKind::Goal,
                id: g.id.clone(),
                title: g.title.clone(),
                date_iso: d.clone(),
            })
        })
        .collect();
    let mut weeks: Vec<CalendarItem> = doc
        .weeks
        .values()
        .filter_map(|w| {
            w.deadline_iso.as_ref().map(|d| CalendarItem {
                kind: ItemKind::Week,
                id: w.week_start_iso.clone(),
                title: if w.title.is_empty() { "Week".to_string() } else { w.title.clone() },
                date_iso: d.clone(),
            })
        })
        .collect();
    let mut months: Vec<CalendarItem> = doc
        .months
        .values()
        .filter_map(|m| {
            m.deadline_iso.as_ref().map(|d| CalendarItem {
                kind: ItemKind::Month,
                id: m.month_iso.clone(),
                title: format!("Month {}", m.month_iso),
                date_iso: d.clone(),
            })
        })
        .collect();

    // Stable sorts keep key order for equal deadlines.
    for group in [&mut goals, &mut weeks, &mut months] {
        group.sort_by(|a, b| a.date_iso.cmp(&b.date_iso));
    }
    goals.into_iter().chain(weeks).chain(months).collect()
}

/// Items of `month`, keyed by day of month.
pub fn items_by_day(doc: &Document, month: YearMonth) -> BTreeMap<u32, Vec<CalendarItem>> {
    let mut map: BTreeMap<u32, Vec<CalendarItem>> = BTreeMap::new();
    for item in dated_items(doc).into_iter().filter(|i| month.contains(&i.date_iso)) {
        let Some(day) = item.date_iso.get(8..10).and_then(|d| d.parse::<u32>().ok()) else {
            continue;
        };
        map.entry(day).or_default().push(item);
    }
    map
}

/// Monday-first grid cells: leading blanks up to the first weekday, the days
/// of the month, then trailing blanks to complete the last week.
pub fn month_cells(month: YearMonth) -> Vec<Option<u32>> {
    let mut cells: Vec<Option<u32>> = vec![None; month.first_weekday_offset()];
    cells.extend((1..=month.days_in_month()).map(Some));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }
    cells
}

/// Goals with a deadline, soonest first.
pub fn upcoming_goals(doc: &Document, limit: usize) -> Vec<CalendarItem> {
    dated_items(doc)
        .into_iter()
        .filter(|i| i.kind == ItemKind::Goal)
        .take(limit)
        .collect()
}
