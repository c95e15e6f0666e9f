//! Focus timer: a plain countdown or Pomodoro cycles until Ctrl-C.

use crate::libs::config::Config;
use crate::libs::formatter::format_countdown;
use crate::libs::messages::Message;
use crate::libs::timer::{self, RunOutcome, Timer, TimerEvent, PRESETS};
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::io::{self, Write};

#[derive(Debug, Args)]
pub struct TimerArgs {
    #[command(subcommand)]
    command: TimerCommand,
}

#[derive(Debug, Subcommand)]
enum TimerCommand {
    /// Start a countdown in the foreground
    Start {
        /// Run focus/break cycles instead of a single countdown
        #[arg(short, long, conflicts_with_all = ["minutes", "preset"])]
        pomodoro: bool,
        /// Custom countdown length in minutes (1-999)
        #[arg(short, long, allow_hyphen_values = true)]
        minutes: Option<i64>,
        /// One of the preset lengths: 30, 60 or 90 minutes
        #[arg(long, value_parser = preset_minutes, conflicts_with = "minutes")]
        preset: Option<u32>,
    },
    /// Show or change timer preferences
    Prefs {
        #[arg(long, allow_hyphen_values = true)]
        custom: Option<i64>,
        #[arg(long, allow_hyphen_values = true)]
        focus: Option<i64>,
        #[arg(long, allow_hyphen_values = true)]
        short_break: Option<i64>,
        #[arg(long, allow_hyphen_values = true)]
        long_break: Option<i64>,
        /// Long break after every N focus sessions
        #[arg(long, allow_hyphen_values = true)]
        cycle_every: Option<i64>,
    },
}

fn preset_minutes(value: &str) -> Result<u32, String> {
    let minutes: u32 = value.parse().map_err(|_| format!("not a number: {}", value))?;
    if PRESETS.contains(&minutes) {
        Ok(minutes)
    } else {
        Err(format!("presets are {:?}", PRESETS))
    }
}

pub async fn cmd(args: TimerArgs) -> Result<()> {
    match args.command {
        TimerCommand::Start {
            pomodoro,
            minutes,
            preset,
        } => start(pomodoro, minutes, preset).await,
        TimerCommand::Prefs {
            custom,
            focus,
            short_break,
            long_break,
            cycle_every,
        } => {
            let mut config = Config::read_or_default();
            let changes = [custom, focus, short_break, long_break, cycle_every];
            if changes.iter().any(Option::is_some) {
                let prefs = &mut config.timer;
                if let Some(v) = custom {
                    prefs.set_custom_minutes(v);
                }
                if let Some(v) = focus {
                    prefs.set_focus_minutes(v);
                }
                if let Some(v) = short_break {
                    prefs.set_short_break_minutes(v);
                }
                if let Some(v) = long_break {
                    prefs.set_long_break_minutes(v);
                }
                if let Some(v) = cycle_every {
                    prefs.set_cycle_every(v);
                }
                config.save()?;
                msg_success!(Message::TimerPrefsSaved);
            }
            msg_print!(Message::TimerPrefsHeader, true);
            View::timer_prefs(&config.timer);
            Ok(())
        }
    }
}

async fn start(pomodoro: bool, minutes: Option<i64>, preset: Option<u32>) -> Result<()> {
    let prefs = Config::read_or_default().timer;
    let mut timer = if pomodoro {
        Timer::pomodoro(prefs)
    } else {
        let mut timer = Timer::custom(prefs);
        if let Some(minutes) = minutes {
            timer.set_custom(minutes);
        } else if let Some(preset) = preset {
            timer.set_preset(preset);
        }
        timer
    };

    if timer.remaining() == 0 {
        msg_warning!(Message::TimerCannotStart);
        return Ok(());
    }
    msg_info!(Message::TimerStarted {
        phase: timer.phase().to_string(),
        minutes: timer.remaining() / 60,
    });

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    let outcome = timer::run(&mut timer, shutdown, |timer, event| {
        match event {
            Some(TimerEvent::Finished) => {
                println!();
                msg_success!(Message::TimerFinished);
            }
            Some(TimerEvent::PhaseChanged { from, to }) => {
                println!();
                msg_info!(Message::TimerPhaseChanged {
                    from: from.to_string(),
                    to: to.to_string(),
                    completed: timer.completed_focus(),
                });
            }
            None => {
                print!("\r{:>11}  {}", timer.phase().to_string(), format_countdown(timer.remaining()));
                let _ = io::stdout().flush();
            }
        }
    })
    .await;

    if outcome == RunOutcome::Interrupted {
        println!();
        msg_info!(Message::TimerInterrupted(format_countdown(timer.remaining())));
    }
    Ok(())
}
