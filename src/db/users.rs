//! User account storage: registration, credential checks, lookups.

use super::db::Db;
use crate::libs::error::StoreError;
use crate::libs::secret::Secret;
use crate::libs::user::User;
use anyhow::Result;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

pub(crate) const SCHEMA_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    last_login TIMESTAMP
)";
const INSERT_USER: &str = "INSERT INTO users (username, email, password_hash) VALUES (?1, ?2, ?3)";
const SELECT_BY_CREDENTIALS: &str = "SELECT user_id, username, email, created_at, last_login FROM users WHERE email = ?1 AND password_hash = ?2";
const TOUCH_LAST_LOGIN: &str = "UPDATE users SET last_login = datetime(CURRENT_TIMESTAMP, 'localtime') WHERE user_id = ?1";
const SELECT_USERNAME: &str = "SELECT username FROM users WHERE user_id = ?1";

pub struct Users {
    conn: Connection,
}

impl Users {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_USERS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Create an account. The password is hashed before it touches the
    /// database; a duplicate email maps the UNIQUE violation to `Conflict`.
    pub fn register(&mut self, username: &str, email: &str, password: &str) -> Result<User, StoreError> {
        let password_hash = Secret::hash(password);
        match self.conn.execute(INSERT_USER, params![username, email, password_hash]) {
            Ok(_) => Ok(User {
                id: Some(self.conn.last_insert_rowid()),
                username: username.to_string(),
                email: email.to_string(),
                password_hash: Some(password_hash),
                created_at: None,
                last_login: None,
            }),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                Err(StoreError::Conflict(format!("user with email '{}' already exists", email)))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Credential check. `None` means the email/password pair did not
    /// match: an authentication failure, not an error. A successful login
    /// touches `last_login`.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Option<User>, StoreError> {
        let password_hash = Secret::hash(password);
        let user = self
            .conn
            .query_row(SELECT_BY_CREDENTIALS, params![email, password_hash], |row| {
                Ok(User {
                    id: Some(row.get(0)?),
                    username: row.get(1)?,
                    email: row.get(2)?,
                    password_hash: None,
                    created_at: row.get(3)?,
                    last_login: row.get(4)?,
                })
            })
            .optional()?;

        if let Some(ref user) = user {
            self.conn.execute(TOUCH_LAST_LOGIN, params![user.id])?;
        }

        Ok(user)
    }

    pub fn get_username(&mut self, user_id: i64) -> Result<Option<String>, StoreError> {
        self.conn
            .query_row(SELECT_USERNAME, params![user_id], |row| row.get(0))
            .optional()
            .map_err(Into::into)
    }
}
