use crate::db::users::Users;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(short, long)]
    email: String,
    /// Password; prompted for interactively when omitted
    #[arg(short, long)]
    password: Option<String>,
}

pub fn cmd(args: LoginArgs) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => Secret::prompt("Password")?,
    };

    match Users::new()?.login(&args.email, &password)? {
        Some(user) => {
            msg_success!(Message::LoginSuccessful(user.id.unwrap_or(0), user.username));
            Ok(())
        }
        None => Err(msg_error_anyhow!(Message::LoginFailed)),
    }
}
