use crate::db::tasks::Tasks;
use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::libs::subtask::{SubtaskDraft, SubtaskSpec};
use crate::libs::task::{Task, TaskPatch};
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_info, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    #[command(about = "Create a task, optionally with inline subtasks")]
    Create(CreateArgs),
    #[command(about = "Show a single task")]
    Get(GetArgs),
    #[command(about = "List tasks for a user")]
    List(ListArgs),
    #[command(about = "Update a task and reconcile its subtask list")]
    Update(UpdateArgs),
    #[command(about = "Delete a task and all of its subtasks")]
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Owning user ID
    #[arg(short, long)]
    user: i64,
    #[arg(short, long)]
    title: String,
    #[arg(short, long)]
    description: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    due: Option<NaiveDate>,
    /// Inline subtasks as JSON, e.g. '[{"title":"Draft","time_estimate":"2h"}]'
    #[arg(long, value_name = "JSON")]
    subtasks: Option<String>,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    id: i64,
    /// Print the task as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Owning user ID
    #[arg(short, long)]
    user: i64,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    id: i64,
    /// Requesting user ID; the update only applies to tasks this user owns
    #[arg(short, long)]
    user: i64,
    #[arg(short, long)]
    title: String,
    #[arg(short, long)]
    description: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    due: Option<NaiveDate>,
    /// Target subtask list as JSON; entries with an "id" update the stored
    /// row, entries without one are created, stored rows absent from the
    /// list are deleted
    #[arg(long, value_name = "JSON", default_value = "[]")]
    subtasks: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    id: i64,
    /// Delete without asking for confirmation
    #[arg(short, long)]
    force: bool,
}

pub fn cmd(command: TaskCommand) -> Result<()> {
    match command {
        TaskCommand::Create(args) => create(args),
        TaskCommand::Get(args) => get(args),
        TaskCommand::List(args) => list(args),
        TaskCommand::Update(args) => update(args),
        TaskCommand::Delete(args) => delete(args),
    }
}

fn create(args: CreateArgs) -> Result<()> {
    let drafts: Vec<SubtaskDraft> = match &args.subtasks {
        Some(json) => serde_json::from_str(json)?,
        None => Vec::new(),
    };

    let task = Task::new(args.user, &args.title, args.description.clone(), args.due);
    let task_id = Tasks::new()?.create_with_subtasks(&task, &drafts)?;

    msg_success!(Message::TaskCreated(task_id));
    Ok(())
}

fn get(args: GetArgs) -> Result<()> {
    match Tasks::new()?.get(args.id)? {
        Some(task) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&task)?);
            } else {
                View::task(&task);
            }
            Ok(())
        }
        None => Err(msg_error_anyhow!(Message::TaskNotFound(args.id))),
    }
}

fn list(args: ListArgs) -> Result<()> {
    let tasks = Tasks::new()?.list(args.user)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else if tasks.is_empty() {
        msg_info!(Message::NoTasksFound(args.user));
    } else {
        View::tasks(&tasks);
    }
    Ok(())
}

fn update(args: UpdateArgs) -> Result<()> {
    let drafts: Vec<SubtaskDraft> = serde_json::from_str(&args.subtasks)?;
    let specs: Vec<SubtaskSpec> = drafts.into_iter().map(SubtaskSpec::from).collect();
    let patch = TaskPatch {
        title: args.title.clone(),
        description: args.description.clone(),
        due_date: args.due,
    };

    match Tasks::new()?.update_with_subtasks(args.id, args.user, &patch, &specs) {
        Ok(()) => {
            msg_success!(Message::TaskUpdated(args.id));
            Ok(())
        }
        Err(StoreError::NotFound) => Err(msg_error_anyhow!(Message::TaskNotFound(args.id))),
        Err(StoreError::Forbidden) => Err(msg_error_anyhow!(Message::TaskNotOwned(args.id))),
        Err(e) => Err(e.into()),
    }
}

fn delete(args: DeleteArgs) -> Result<()> {
    if !args.force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(args.id).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::TaskDeleteCancelled);
            return Ok(());
        }
    }

    match Tasks::new()?.delete(args.id) {
        Ok(()) => {
            msg_success!(Message::TaskDeleted(args.id));
            Ok(())
        }
        Err(StoreError::NotFound) => Err(msg_error_anyhow!(Message::TaskNotFound(args.id))),
        Err(e) => Err(e.into()),
    }
}
