//! Mock authentication collaborator.
//!
//! The core only ever consumes the [`Authenticator`] gate ("is someone
//! logged in, and who"). [`MockAuthenticator`] implements it with an
//! explicit, instance-local user list and a hard-coded credential check;
//! the session survives restarts through `session.json` in the data dir.
//! Users created or modified at runtime are process-lifetime state.

use crate::error::{LinkmartError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SESSION_FILENAME: &str = "session.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// A logged-in identity. Passwords never leave the user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: User,
    pub password: String,
}

impl UserRecord {
    fn new(id: &str, username: &str, password: &str, role: Role) -> Self {
        Self {
            user: User {
                id: id.to_string(),
                username: username.to_string(),
                role,
            },
            password: password.to_string(),
        }
    }
}

/// The boolean gate the core consumes. Anything that can answer "who is
/// logged in" can stand in for the mock.
pub trait Authenticator {
    fn current_user(&self) -> Option<&User>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

pub struct MockAuthenticator {
    users: Vec<UserRecord>,
    session_file: PathBuf,
    current: Option<User>,
}

impl MockAuthenticator {
    /// Built-in demo users plus whatever session is on disk. A malformed
    /// session file is discarded.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Self {
        let session_file = data_dir.as_ref().join(SESSION_FILENAME);
        let current = load_session(&session_file);
        Self {
            users: vec![
                UserRecord::new("1", "admin", "admin", Role::Admin),
                UserRecord::new("2", "user", "user", Role::User),
            ],
            session_file,
            current,
        }
    }

    /// Replace the built-in user list.
    pub fn with_users(mut self, users: Vec<UserRecord>) -> Self {
        self.users = users;
        self
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<User> {
        let found = self
            .users
            .iter()
            .find(|r| r.user.username == username && r.password == password)
            .ok_or_else(|| {
                LinkmartError::Unauthorized("invalid username or password".to_string())
            })?;

        let user = found.user.clone();
        self.current = Some(user.clone());
        self.save_session();
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.current = None;
        let _ = fs::remove_file(&self.session_file);
    }

    /// Create a new account. Only an admin session may do this, and
    /// usernames must be unique.
    pub fn create_user(&mut self, username: &str, password: &str, role: Role) -> Result<User> {
        match self.current_user() {
            Some(u) if u.role == Role::Admin => {}
            Some(_) => {
                return Err(LinkmartError::Unauthorized(
                    "only an admin can create users".to_string(),
                ))
            }
            None => {
                return Err(LinkmartError::Unauthorized("not logged in".to_string()));
            }
        }

        if self.users.iter().any(|r| r.user.username == username) {
            return Err(LinkmartError::Api(format!(
                "username already exists: {}",
                username
            )));
        }

        let record = UserRecord::new(
            &(self.users.len() + 1).to_string(),
            username,
            password,
            role,
        );
        let user = record.user.clone();
        self.users.push(record);
        Ok(user)
    }

    /// Change the logged-in user's password after verifying the current one.
    pub fn change_password(&mut self, current_password: &str, new_password: &str) -> Result<()> {
        let user = self
            .current
            .clone()
            .ok_or_else(|| LinkmartError::Unauthorized("not logged in".to_string()))?;

        let record = self
            .users
            .iter_mut()
            .find(|r| r.user.id == user.id)
            .ok_or_else(|| LinkmartError::Unauthorized("unknown user".to_string()))?;

        if record.password != current_password {
            return Err(LinkmartError::Unauthorized(
                "current password is incorrect".to_string(),
            ));
        }

        record.password = new_password.to_string();
        Ok(())
    }

    // Session writes are fire-and-forget, like store persistence.
    fn save_session(&self) {
        if let Some(user) = &self.current {
            if let Some(dir) = self.session_file.parent() {
                let _ = fs::create_dir_all(dir);
            }
            if let Ok(content) = serde_json::to_string_pretty(user) {
                let _ = fs::write(&self.session_file, content);
            }
        }
    }
}

impl Authenticator for MockAuthenticator {
    fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }
}

fn load_session(path: &Path) -> Option<User> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(user) => Some(user),
        Err(_) => {
            let _ = fs::remove_file(path);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn login_checks_credentials() {
        let dir = TempDir::new().unwrap();
        let mut auth = MockAuthenticator::open(dir.path());

        assert!(auth.login("admin", "wrong").is_err());
        assert!(!auth.is_authenticated());

        let user = auth.login("admin", "admin").unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(auth.is_authenticated());
    }

    #[test]
    fn session_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let mut auth = MockAuthenticator::open(dir.path());
        auth.login("user", "user").unwrap();

        let reopened = MockAuthenticator::open(dir.path());
        assert_eq!(reopened.current_user().unwrap().username, "user");
    }

    #[test]
    fn logout_clears_session_file() {
        let dir = TempDir::new().unwrap();
        let mut auth = MockAuthenticator::open(dir.path());
        auth.login("user", "user").unwrap();
        auth.logout();

        assert!(!auth.is_authenticated());
        let reopened = MockAuthenticator::open(dir.path());
        assert!(!reopened.is_authenticated());
    }

    #[test]
    fn malformed_session_is_discarded() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SESSION_FILENAME), "{ nope").unwrap();

        let auth = MockAuthenticator::open(dir.path());
        assert!(!auth.is_authenticated());
        assert!(!dir.path().join(SESSION_FILENAME).exists());
    }

    #[test]
    fn create_user_requires_admin() {
        let dir = TempDir::new().unwrap();
        let mut auth = MockAuthenticator::open(dir.path());

        assert!(auth.create_user("carol", "pw", Role::User).is_err());

        auth.login("user", "user").unwrap();
        assert!(auth.create_user("carol", "pw", Role::User).is_err());

        auth.login("admin", "admin").unwrap();
        let user = auth.create_user("carol", "pw", Role::User).unwrap();
        assert_eq!(user.username, "carol");

        // Duplicate usernames are rejected.
        assert!(auth.create_user("carol", "other", Role::User).is_err());
    }

    #[test]
    fn change_password_verifies_current() {
        let dir = TempDir::new().unwrap();
        let mut auth = MockAuthenticator::open(dir.path());
        auth.login("user", "user").unwrap();

        assert!(auth.change_password("wrong", "next").is_err());
        auth.change_password("user", "next").unwrap();

        auth.logout();
        assert!(auth.login("user", "user").is_err());
        assert!(auth.login("user", "next").is_ok());
    }
}
