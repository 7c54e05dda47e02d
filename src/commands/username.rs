use crate::db::users::Users;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UsernameArgs {
    id: i64,
}

pub fn cmd(args: UsernameArgs) -> Result<()> {
    match Users::new()?.get_username(args.id)? {
        Some(username) => {
            msg_print!(Message::UsernameFound(args.id, username));
            Ok(())
        }
        None => Err(msg_error_anyhow!(Message::UserNotFound(args.id))),
    }
}
