use crate::db::users::Users;
use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(short, long)]
    username: String,
    #[arg(short, long)]
    email: String,
    /// Password; prompted for interactively when omitted
    #[arg(short, long)]
    password: Option<String>,
}

pub fn cmd(args: RegisterArgs) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => Secret::prompt("Password")?,
    };

    match Users::new()?.register(&args.username, &args.email, &password) {
        Ok(user) => {
            msg_success!(Message::UserRegistered(user.id.unwrap_or(0), user.username));
            Ok(())
        }
        Err(StoreError::Conflict(_)) => Err(msg_error_anyhow!(Message::EmailAlreadyExists(args.email))),
        Err(e) => Err(e.into()),
    }
}
