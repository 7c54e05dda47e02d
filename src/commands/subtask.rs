use crate::db::subtasks::Subtasks;
use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::libs::subtask::{Subtask, SubtaskDraft};
use crate::libs::task::Status;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum SubtaskCommand {
    #[command(about = "Add a subtask to an existing task")]
    Add(AddArgs),
    #[command(about = "Append a batch of subtasks from JSON")]
    Batch(BatchArgs),
    #[command(about = "Show a single subtask")]
    Get(GetArgs),
    #[command(about = "List subtasks of a task")]
    List(ListArgs),
    #[command(about = "Set a subtask's status (pending or completed)")]
    Status(StatusArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Parent task ID
    #[arg(short, long)]
    task: i64,
    #[arg(long)]
    title: String,
    /// Free-form time estimate, e.g. "2h"
    #[arg(long)]
    estimate: Option<String>,
    /// Ordering hint within the task
    #[arg(long)]
    order: Option<i64>,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Parent task ID
    #[arg(short, long)]
    task: i64,
    /// Subtasks as JSON, e.g. '[{"title":"Draft","time_estimate":"2h"}]'
    #[arg(value_name = "JSON")]
    subtasks: String,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    id: i64,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Parent task ID
    #[arg(short, long)]
    task: i64,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
pub struct StatusArgs {
    id: i64,
    /// New status: pending or completed
    status: String,
}

pub fn cmd(command: SubtaskCommand) -> Result<()> {
    match command {
        SubtaskCommand::Add(args) => add(args),
        SubtaskCommand::Batch(args) => batch(args),
        SubtaskCommand::Get(args) => get(args),
        SubtaskCommand::List(args) => list(args),
        SubtaskCommand::Status(args) => status(args),
    }
}

fn add(args: AddArgs) -> Result<()> {
    let subtask = Subtask::new(args.task, &args.title, args.estimate.clone(), args.order);

    match Subtasks::new()?.create(&subtask) {
        Ok(id) => {
            msg_success!(Message::SubtaskCreated(id));
            Ok(())
        }
        Err(StoreError::NotFound) => Err(msg_error_anyhow!(Message::TaskNotFound(args.task))),
        Err(e) => Err(e.into()),
    }
}

fn batch(args: BatchArgs) -> Result<()> {
    let drafts: Vec<SubtaskDraft> = serde_json::from_str(&args.subtasks)?;

    match Subtasks::new()?.create_many(args.task, &drafts) {
        Ok(count) => {
            msg_success!(Message::SubtasksAdded(count, args.task));
            Ok(())
        }
        Err(StoreError::NotFound) => Err(msg_error_anyhow!(Message::TaskNotFound(args.task))),
        Err(e) => Err(e.into()),
    }
}

fn get(args: GetArgs) -> Result<()> {
    match Subtasks::new()?.get(args.id)? {
        Some(subtask) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&subtask)?);
            } else {
                View::subtasks(std::slice::from_ref(&subtask));
            }
            Ok(())
        }
        None => Err(msg_error_anyhow!(Message::SubtaskNotFound(args.id))),
    }
}

fn list(args: ListArgs) -> Result<()> {
    let subtasks = Subtasks::new()?.list(args.task)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&subtasks)?);
    } else if subtasks.is_empty() {
        msg_info!(Message::NoSubtasksFound(args.task));
    } else {
        View::subtasks(&subtasks);
    }
    Ok(())
}

fn status(args: StatusArgs) -> Result<()> {
    let status: Status = args.status.parse()?;

    match Subtasks::new()?.set_status(args.id, status) {
        Ok(()) => {
            msg_success!(Message::SubtaskStatusSet(args.id, status.to_string()));
            Ok(())
        }
        Err(StoreError::NotFound) => Err(msg_error_anyhow!(Message::SubtaskNotFound(args.id))),
        Err(e) => Err(e.into()),
    }
}
