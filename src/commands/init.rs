use crate::db::db::Db;
use crate::db::migrations::MigrationManager;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Show the current schema version and applied migrations
    #[arg(long)]
    status: bool,
    /// Skip the interactive configuration prompts
    #[arg(long)]
    no_prompt: bool,
}

pub fn cmd(args: InitArgs) -> Result<()> {
    if args.status {
        let db = Db::new()?;
        let manager = MigrationManager::new();
        msg_print!(Message::DatabaseVersion(manager.get_current_version(&db.conn)?));
        for (version, name, applied_at) in manager.get_migration_history(&db.conn)? {
            println!("  {} {} ({})", version, name, applied_at);
        }
        return Ok(());
    }

    if !args.no_prompt {
        Config::init()?;
        msg_success!(Message::ConfigSaved);
    }

    Db::init()?;
    msg_success!(Message::DatabaseReady(Db::path()?.display().to_string()));

    Ok(())
}
