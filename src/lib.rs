//! # Tasknest - Personal Task Management Backend
//!
//! A command-line backend for personal task management: user accounts,
//! tasks with subtasks, status tracking, and time logging over a local
//! SQLite store.
//!
//! ## Features
//!
//! - **User Accounts**: Registration and login with hashed credentials
//! - **Task Management**: Create, update, and delete tasks with due dates
//! - **Subtasks**: Break tasks down and track each piece independently
//! - **Subtask Reconciliation**: Task updates carry the full target subtask
//!   list; stored rows are diffed against it and the minimal set of
//!   deletes, updates, and inserts is applied atomically
//! - **Time Logging**: Additive, storage-side time accounting per task and
//!   subtask
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasknest::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
