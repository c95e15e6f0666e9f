//! Month grid of goal, week and month deadlines.

use crate::db::store::Store;
use crate::libs::calendar::{self, UPCOMING_LIMIT};
use crate::libs::messages::Message;
use crate::libs::period::YearMonth;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CalendarArgs {
    /// Month to display: `current` or YYYY-MM
    #[arg(short, long, default_value = "current")]
    month: String,

    /// Shift the displayed month, e.g. -1 for the previous one
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    offset: i32,

    /// List the items of one day of the displayed month
    #[arg(short, long)]
    day: Option<u32>,
}

pub fn cmd(args: CalendarArgs) -> Result<()> {
    let month = args.month.parse::<YearMonth>()?.add_months(args.offset)?;
    let store = Store::new()?;
    let doc = store.document();
    let items = calendar::items_by_day(doc, month);

    if let Some(day) = args.day {
        if day == 0 || day > month.days_in_month() {
            msg_bail_anyhow!(Message::Rejected(format!("{} has no day {}", month.long_label(), day)));
        }
        let on_day = items.get(&day).map(Vec::as_slice).unwrap_or(&[]);
        msg_print!(
            Message::CalendarDayHeader {
                date: format!("{}-{:02}", month, day),
                count: on_day.len(),
            },
            true
        );
        if on_day.is_empty() {
            msg_info!(Message::NoItemsOnDay);
        } else {
            View::calendar_items(on_day);
        }
        return Ok(());
    }

    msg_print!(Message::CalendarHeader(month.long_label()), true);
    View::calendar(&calendar::month_cells(month), &items);

    let upcoming = calendar::upcoming_goals(doc, UPCOMING_LIMIT);
    msg_print!(Message::UpcomingHeader, true);
    if upcoming.is_empty() {
        msg_info!(Message::NoGoalDeadlines);
    } else {
        View::calendar_items(&upcoming);
    }
    Ok(())
}
