//! Goals with deadlines, rationale and milestones.

use super::{apply, join_words};
use crate::db::store::Store;
use crate::libs::goal::Goal;
use crate::libs::messages::Message;
use crate::libs::period::now_millis;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct GoalArgs {
    #[command(subcommand)]
    command: Option<GoalCommand>,
}

#[derive(Debug, Subcommand)]
enum GoalCommand {
    /// List goals, newest first
    List,
    /// Show one goal with its milestones
    Show { id: String },
    /// Create a goal
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
        /// Deadline, YYYY-MM-DD
        #[arg(short, long)]
        deadline: Option<String>,
        /// Why this goal matters
        #[arg(short, long)]
        why: Option<String>,
    },
    /// Delete a goal
    Remove { id: String },
    /// Set the deadline (YYYY-MM-DD); no date clears it
    Deadline { id: String, date: Option<String> },
    /// Set why the goal matters
    Why {
        id: String,
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },
    /// Add a milestone to a goal
    MilestoneAdd {
        goal: String,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Check or uncheck a milestone
    MilestoneToggle { goal: String, id: String },
    /// Remove a milestone
    MilestoneRemove { goal: String, id: String },
    /// Set the notes of a milestone
    MilestoneNote {
        goal: String,
        id: String,
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },
}

pub fn cmd(args: GoalArgs) -> Result<()> {
    let mut store = Store::new()?;

    match args.command.unwrap_or(GoalCommand::List) {
        GoalCommand::List => {
            let goals = store.document().goals_newest_first();
            msg_print!(Message::GoalsHeader, true);
            if goals.is_empty() {
                msg_info!(Message::NoGoalsYet);
            } else {
                View::goals(&goals);
            }
        }
        GoalCommand::Show { id } => {
            let goal = store.document().goal(&id)?;
            View::goals(&[goal]);
            if let Some(why) = goal.why.as_deref().filter(|w| !w.is_empty()) {
                msg_print!(Message::GoalWhy(why.to_string()));
            }
            if goal.milestones.is_empty() {
                msg_info!(Message::NoMilestonesYet);
            } else {
                View::milestones(goal);
            }
        }
        GoalCommand::Add { title, deadline, why } => {
            let title = join_words(&title);
            let goal = apply(&mut store, |doc| {
                let goal = Goal::new(&title, deadline.as_deref(), why.as_deref(), now_millis())?;
                doc.add_goal(goal.clone());
                Ok(goal)
            })?;
            msg_success!(Message::GoalAdded {
                title: goal.title,
                id: goal.id,
            });
        }
        GoalCommand::Remove { id } => {
            let goal = apply(&mut store, |doc| doc.remove_goal(&id))?;
            msg_success!(Message::GoalRemoved(goal.title));
        }
        GoalCommand::Deadline { id, date } => {
            let title = apply(&mut store, |doc| {
                let goal = doc.goal_mut(&id)?;
                goal.set_deadline(date.as_deref())?;
                Ok(goal.title.clone())
            })?;
            msg_success!(Message::GoalUpdated(title));
        }
        GoalCommand::Why { id, text } => {
            let why = join_words(&text);
            let title = apply(&mut store, |doc| {
                let goal = doc.goal_mut(&id)?;
                goal.set_why(&why);
                Ok(goal.title.clone())
            })?;
            msg_success!(Message::GoalUpdated(title));
        }
        GoalCommand::MilestoneAdd { goal, text } => {
            let text = join_words(&text);
            let id = apply(&mut store, |doc| doc.goal_mut(&goal)?.add_milestone(&text))?;
            msg_success!(Message::MilestoneAdded(id));
        }
        GoalCommand::MilestoneToggle { goal, id } => {
            let (text, done) = apply(&mut store, |doc| {
                let goal = doc.goal_mut(&goal)?;
                let done = goal.toggle_milestone(&id)?;
                let text = goal
                    .milestones
                    .iter()
                    .find(|m| m.id == id)
                    .map(|m| m.text.clone())
                    .unwrap_or_default();
                Ok((text, done))
            })?;
            msg_success!(Message::MilestoneToggled { text, done });
        }
        GoalCommand::MilestoneRemove { goal, id } => {
            let milestone = apply(&mut store, |doc| doc.goal_mut(&goal)?.remove_milestone(&id))?;
            msg_success!(Message::MilestoneRemoved(milestone.text));
        }
        GoalCommand::MilestoneNote { goal, id, text } => {
            let notes = join_words(&text);
            apply(&mut store, |doc| doc.goal_mut(&goal)?.set_milestone_notes(&id, &notes))?;
            msg_success!(Message::MilestoneNotesSaved);
        }
    }
    Ok(())
}
