//! Request handlers: clap subcommands that translate inbound operations
//! into repository and reconciliation calls.

pub mod init;
pub mod login;
pub mod register;
pub mod subtask;
pub mod task;
pub mod time;
pub mod username;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Initialize configuration and database schema")]
    Init(init::InitArgs),
    #[command(about = "Register a new user")]
    Register(register::RegisterArgs),
    #[command(about = "Log in with email and password")]
    Login(login::LoginArgs),
    #[command(about = "Look up a username by user ID")]
    Username(username::UsernameArgs),
    #[command(subcommand, about = "Create, inspect, update and delete tasks")]
    Task(task::TaskCommand),
    #[command(subcommand, about = "Work with subtasks of a task")]
    Subtask(subtask::SubtaskCommand),
    #[command(subcommand, about = "Log time spent on tasks and subtasks")]
    Time(time::TimeCommand),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Register(args) => register::cmd(args),
            Commands::Login(args) => login::cmd(args),
            Commands::Username(args) => username::cmd(args),
            Commands::Task(command) => task::cmd(command),
            Commands::Subtask(command) => subtask::cmd(command),
            Commands::Time(command) => time::cmd(command),
        }
    }
}
