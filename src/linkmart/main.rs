use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use linkmart::api::{CmdMessage, CmdResult, ConfigAction, LinkmartApi, LinkmartPaths, MessageLevel};
use linkmart::auth::Role;
use linkmart::db::Database;
use linkmart::draft::{GridItemDraft, PageDraft};
use linkmart::error::{LinkmartError, Result};
use linkmart::ingest::FileRows;
use linkmart::model::{Link, MenuItem, Page, Record};
use linkmart::store::fs::FileStore;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api();

    match cli.command {
        Commands::Create {
            title,
            content,
            menu,
            slider,
            center,
            grid,
            from_json,
        } => {
            require_login(&api)?;
            let draft = build_draft(title, content, menu, slider, center, grid, from_json)?;
            let result = api.create_page(draft)?;
            print_messages(&result.messages);
        }
        Commands::Register { file } => {
            require_login(&api)?;
            let result = api.register_file_page(&file)?;
            print_messages(&result.messages);
        }
        Commands::Link { page_id } => {
            require_login(&api)?;
            let result = api.create_link(&page_id)?;
            print_messages(&result.messages);
        }
        Commands::Pages => {
            let result = api.list_pages()?;
            print_pages(&result.affected_pages);
            print_messages(&result.messages);
        }
        Commands::Links { page_id } => {
            let result = api.list_links(page_id.as_deref())?;
            print_links(&result.affected_links);
            print_messages(&result.messages);
        }
        Commands::Search { query } => {
            let result = api.search(&query)?;
            print_records(&result.records);
            print_messages(&result.messages);
        }
        Commands::Delete { page_id, password } => {
            require_login(&api)?;
            let result = api.delete_page(&page_id, password.as_deref())?;
            print_messages(&result.messages);
        }
        Commands::RmLink { link_id } => {
            require_login(&api)?;
            let result = api.delete_link(&link_id)?;
            print_messages(&result.messages);
        }
        Commands::Visit { link_id } => {
            let result = api.record_visit(&link_id)?;
            print_messages(&result.messages);
        }
        Commands::Export { query } => {
            require_login(&api)?;
            let result = api.export(query.as_deref(), Path::new("."))?;
            print_messages(&result.messages);
        }
        Commands::Files => {
            let result = api.files()?;
            print_tables(&result.tables);
            print_messages(&result.messages);
        }
        Commands::Status => {
            let result = api.status()?;
            if let Some(stats) = result.stats {
                println!("Pages:  {}", stats.pages);
                println!("Links:  {}", stats.links);
                println!("Visits: {}", stats.visits);
            }
        }
        Commands::Config {
            key,
            value,
            current,
        } => handle_config(&mut api, key, value, current)?,
        Commands::Login { username, password } => {
            let result = api.login(&username, &password)?;
            print_messages(&result.messages);
        }
        Commands::Logout => {
            let result = api.logout()?;
            print_messages(&result.messages);
        }
        Commands::CreateUser {
            username,
            password,
            role,
        } => {
            require_login(&api)?;
            let result = api.create_user(&username, &password, parse_role(&role)?)?;
            print_messages(&result.messages);
        }
        Commands::Passwd { current, new } => {
            require_login(&api)?;
            let result = api.change_password(&current, &new)?;
            print_messages(&result.messages);
        }
    }

    Ok(())
}

fn init_api() -> LinkmartApi<FileStore> {
    let data_dir = match std::env::var_os("LINKMART_HOME") {
        Some(home) => PathBuf::from(home),
        None => ProjectDirs::from("com", "linkmart", "linkmart")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let store = FileStore::new(data_dir.clone());
    let db = Database::open(store);
    let paths = LinkmartPaths::new(data_dir);
    LinkmartApi::new(db, paths)
}

fn require_login(api: &LinkmartApi<FileStore>) -> Result<()> {
    if api.current_user().is_none() {
        return Err(LinkmartError::Unauthorized(
            "please log in first (linkmart login <username> <password>)".into(),
        ));
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn build_draft(
    title: Option<String>,
    content: Option<String>,
    menu: Option<String>,
    slider: Vec<String>,
    center: Option<String>,
    grid: Vec<String>,
    from_json: Option<PathBuf>,
) -> Result<PageDraft> {
    if let Some(path) = from_json {
        let raw = std::fs::read_to_string(path).map_err(LinkmartError::Io)?;
        return Ok(PageDraft::from_json(&raw));
    }

    let menu_items = menu
        .map(|m| {
            m.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(|t| MenuItem::new(t, "#"))
                .collect()
        })
        .unwrap_or_default();

    Ok(PageDraft {
        title,
        content,
        menu_items,
        slider_images: if slider.is_empty() { None } else { Some(slider) },
        center_image: center,
        grid_items: grid.into_iter().map(GridItemDraft::titled).collect(),
    })
}

fn parse_role(s: &str) -> Result<Role> {
    match s {
        "admin" => Ok(Role::Admin),
        "user" => Ok(Role::User),
        other => Err(LinkmartError::Api(format!(
            "Unknown role: {} (expected admin or user)",
            other
        ))),
    }
}

fn handle_config(
    api: &mut LinkmartApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
    current: Option<String>,
) -> Result<()> {
    let result: CmdResult = match (key.as_deref(), value) {
        (None, _) | (Some(_), None) => api.config(ConfigAction::ShowAll)?,
        (Some("default-link"), Some(url)) => {
            require_login(api)?;
            api.config(ConfigAction::SetDefaultLink(url))?
        }
        (Some("admin-password"), Some(new)) => {
            require_login(api)?;
            let current = current.ok_or_else(|| {
                LinkmartError::Api("--current is required to change the admin password".into())
            })?;
            api.config(ConfigAction::SetAdminPassword { current, new })?
        }
        (Some(other), Some(_)) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    if let Some(config) = &result.config {
        match key.as_deref() {
            Some("default-link") => println!("default-link = {}", config.default_link),
            Some("admin-password") => println!("admin-password = {}", config.admin_password),
            _ => {
                println!("default-link = {}", config.default_link);
                println!("admin-password = {}", config.admin_password);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const FILE_MARKER: &str = "▤";

fn print_pages(pages: &[Page]) {
    if pages.is_empty() {
        return;
    }

    for page in pages {
        let marker = if page.is_file_based_page {
            format!("{} ", FILE_MARKER)
        } else {
            "  ".to_string()
        };

        let preview: String = page
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = if preview.is_empty() {
            page.title.clone()
        } else {
            format!("{} {}", page.title, preview)
        };

        let id_str = format!("{}  ", page.id);
        let fixed = marker.width() + id_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);

        let shown = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(shown.width());

        println!(
            "{}{}{}{}{}",
            marker,
            id_str.cyan(),
            shown,
            " ".repeat(padding),
            format_time_ago(page.created_at).dimmed()
        );
    }
}

fn print_links(links: &[Link]) {
    if links.is_empty() {
        return;
    }

    for link in links {
        let visits = format!("{:>4} visits  ", link.visits);
        let id_str = format!("{}  ", link.id);
        let fixed = 2 + id_str.width() + visits.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);

        let shown = truncate_to_width(&link.full_link, available);
        let padding = available.saturating_sub(shown.width());

        println!(
            "  {}{}{}{}{}",
            id_str.cyan(),
            shown,
            " ".repeat(padding),
            visits.dimmed(),
            format_time_ago(link.created_at).dimmed()
        );
    }
}

fn print_records(records: &[Record]) {
    for record in records {
        match record {
            Record::Page(p) => {
                println!("{} {}  {}", "page".green(), p.id.cyan(), p.title.bold());
            }
            Record::Link(l) => {
                println!(
                    "{} {}  {} {}",
                    "link".blue(),
                    l.id.cyan(),
                    l.full_link,
                    format!("({} visits, page {})", l.visits, l.page_id).dimmed()
                );
            }
        }
    }
}

fn print_tables(tables: &[FileRows]) {
    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", table.file_name.bold());
        if table.rows.is_empty() {
            println!("  {}", "(no rows)".dimmed());
        }
        for row in &table.rows {
            println!("  {}: {}", row.label.cyan(), row.value);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
