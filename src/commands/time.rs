use crate::db::subtasks::Subtasks;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum TimeCommand {
    #[command(about = "Log minutes spent on a task")]
    Task(LogArgs),
    #[command(about = "Log minutes spent on a subtask")]
    Subtask(LogArgs),
}

#[derive(Debug, Args)]
pub struct LogArgs {
    id: i64,
    /// Minutes to add; must be non-negative
    minutes: i64,
}

pub fn cmd(command: TimeCommand) -> Result<()> {
    match command {
        TimeCommand::Task(args) => {
            Tasks::new()?.log_time(args.id, args.minutes)?;
            msg_success!(Message::TimeLoggedTask(args.minutes, args.id));
            Ok(())
        }
        TimeCommand::Subtask(args) => {
            Subtasks::new()?.log_time(args.id, args.minutes)?;
            msg_success!(Message::TimeLoggedSubtask(args.minutes, args.id));
            Ok(())
        }
    }
}
