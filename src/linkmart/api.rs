//! # API Facade
//!
//! Single entry point for every linkmart operation, regardless of the UI
//! driving it. The facade dispatches to the command layer, wires the
//! collaborators (config for the link base and admin secret, the mock
//! authenticator for the login gate) and returns structured
//! `Result<CmdResult>` values — never strings, never stdout.

use crate::auth::{Authenticator, MockAuthenticator, Role, User};
use crate::commands;
use crate::config::LinkmartConfig;
use crate::db::{Change, Database};
use crate::draft::PageDraft;
use crate::error::Result;
use crate::model::{Link, Page};
use crate::store::DataStore;
use std::path::Path;

/// The main API facade for linkmart operations.
///
/// Generic over `DataStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct LinkmartApi<S: DataStore> {
    db: Database<S>,
    auth: MockAuthenticator,
    config: LinkmartConfig,
    paths: commands::LinkmartPaths,
}

impl<S: DataStore> LinkmartApi<S> {
    pub fn new(db: Database<S>, paths: commands::LinkmartPaths) -> Self {
        let config = LinkmartConfig::load(&paths.data).unwrap_or_default();
        let auth = MockAuthenticator::open(&paths.data);
        Self {
            db,
            auth,
            config,
            paths,
        }
    }

    pub fn create_page(&mut self, draft: PageDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.db, draft)
    }

    pub fn register_file_page(&mut self, file_name: &str) -> Result<commands::CmdResult> {
        commands::register::run(&mut self.db, &self.paths, file_name)
    }

    pub fn create_link(&mut self, page_id: &str) -> Result<commands::CmdResult> {
        commands::link::run(&mut self.db, &self.config.default_link, page_id)
    }

    pub fn delete_page(&mut self, id: &str, password: Option<&str>) -> Result<commands::CmdResult> {
        commands::delete::page(&mut self.db, &self.config.admin_password, id, password)
    }

    pub fn delete_link(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::link(&mut self.db, id)
    }

    pub fn record_visit(&mut self, link_id: &str) -> Result<commands::CmdResult> {
        commands::visit::run(&mut self.db, link_id)
    }

    pub fn search(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.db, query)
    }

    pub fn list_pages(&self) -> Result<commands::CmdResult> {
        commands::list::pages(&self.db)
    }

    pub fn list_links(&self, page_id: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::links(&self.db, page_id)
    }

    pub fn export(&self, query: Option<&str>, out_dir: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.db, query, out_dir)
    }

    pub fn status(&self) -> Result<commands::CmdResult> {
        commands::status::run(&self.db)
    }

    pub fn files(&self) -> Result<commands::CmdResult> {
        commands::files::run(&self.paths)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<commands::CmdResult> {
        commands::session::login(&mut self.auth, username, password)
    }

    pub fn logout(&mut self) -> Result<commands::CmdResult> {
        commands::session::logout(&mut self.auth)
    }

    pub fn create_user(
        &mut self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<commands::CmdResult> {
        commands::session::create_user(&mut self.auth, username, password, role)
    }

    pub fn change_password(&mut self, current: &str, new: &str) -> Result<commands::CmdResult> {
        commands::session::change_password(&mut self.auth, current, new)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.auth.current_user()
    }

    pub fn find_page_by_id(&self, id: &str) -> Option<&Page> {
        self.db.find_page(id)
    }

    pub fn find_link_by_id(&self, id: &str) -> Option<&Link> {
        self.db.find_link(id)
    }

    /// Subscribe to store change notifications.
    pub fn on_change(&mut self, listener: impl FnMut(Change) + 'static) {
        self.db.on_change(listener);
    }

    pub fn paths(&self) -> &commands::LinkmartPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, LinkmartPaths, MessageLevel, Stats};
