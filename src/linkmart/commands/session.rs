use crate::auth::{Authenticator, MockAuthenticator, Role};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn login(auth: &mut MockAuthenticator, username: &str, password: &str) -> Result<CmdResult> {
    let user = auth.login(username, password)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Logged in as {} ({})",
        user.username,
        user.role.as_str()
    )));
    Ok(result)
}

pub fn logout(auth: &mut MockAuthenticator) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if auth.is_authenticated() {
        auth.logout();
        result.add_message(CmdMessage::success("Logged out."));
    } else {
        result.add_message(CmdMessage::info("Not logged in."));
    }
    Ok(result)
}

pub fn create_user(
    auth: &mut MockAuthenticator,
    username: &str,
    password: &str,
    role: Role,
) -> Result<CmdResult> {
    let user = auth.create_user(username, password, role)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "New {} account created for {}",
        user.role.as_str(),
        user.username
    )));
    Ok(result)
}

pub fn change_password(
    auth: &mut MockAuthenticator,
    current: &str,
    new: &str,
) -> Result<CmdResult> {
    auth.change_password(current, new)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Password changed."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn login_then_logout() {
        let dir = TempDir::new().unwrap();
        let mut auth = MockAuthenticator::open(dir.path());

        login(&mut auth, "admin", "admin").unwrap();
        assert!(auth.is_authenticated());

        logout(&mut auth).unwrap();
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn bad_credentials_error_out() {
        let dir = TempDir::new().unwrap();
        let mut auth = MockAuthenticator::open(dir.path());
        assert!(login(&mut auth, "admin", "wrong").is_err());
    }

    #[test]
    fn created_user_can_log_in() {
        let dir = TempDir::new().unwrap();
        let mut auth = MockAuthenticator::open(dir.path());
        login(&mut auth, "admin", "admin").unwrap();

        create_user(&mut auth, "carol", "secret", Role::User).unwrap();
        login(&mut auth, "carol", "secret").unwrap();
        assert_eq!(auth.current_user().unwrap().username, "carol");
    }
}
