//! Terminal table rendering for tasks and subtasks.

use super::subtask::Subtask;
use super::task::{Task, TaskSummary};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[TaskSummary]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DUE", "STATUS"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.due_date.map(|d| d.to_string()).unwrap_or_default(),
                task.status
            ]);
        }
        table.printstd();
    }

    pub fn task(task: &Task) {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id.unwrap_or(0)]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row!["DESCRIPTION", task.description.clone().unwrap_or_default()]);
        table.add_row(row!["DUE", task.due_date.map(|d| d.to_string()).unwrap_or_default()]);
        table.add_row(row!["STATUS", task.status]);
        table.add_row(row!["TIME SPENT (MIN)", task.time_spent]);
        table.printstd();
    }

    pub fn subtasks(subtasks: &[Subtask]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "ESTIMATE", "SPENT (MIN)", "STATUS"]);
        for subtask in subtasks {
            table.add_row(row![
                subtask.id.unwrap_or(0),
                subtask.title,
                subtask.time_estimate.clone().unwrap_or_default(),
                subtask.time_spent,
                subtask.status
            ]);
        }
        table.printstd();
    }
}
