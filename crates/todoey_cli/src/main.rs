//! Todoey command-line front-end.
//!
//! # Responsibility
//! - Map user actions (add/list/delete categories, add/toggle/delete/search
//!   items) onto core services.
//! - Report storage failures as non-zero exits instead of swallowing them.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};
use rusqlite::Connection;
use std::path::PathBuf;
use todoey_core::config::{DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
use todoey_core::db::open_db;
use todoey_core::view::category_list::EMPTY_PLACEHOLDER;
use todoey_core::{
    default_log_level, init_logging, resolve_db_path, CategoryService, Item, ItemService,
    SqliteCategoryRepository, SqliteItemRepository,
};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "todoey", version, about = "Categories of checkable to-do items")]
struct Cli {
    /// Database file (created on first use)
    #[arg(long, global = true, env = DB_PATH_ENV)]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = LOG_DIR_ENV)]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = LOG_LEVEL_ENV)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCommand),
    /// Manage items inside one category
    #[command(subcommand)]
    Item(ItemCommand),
    /// List items whose category was deleted
    Orphans,
}

#[derive(Subcommand, Debug)]
enum CategoryCommand {
    /// Create a category with a random color
    Add {
        /// Category name; empty means "Untitled category"
        #[arg(default_value = "")]
        name: String,
    },
    /// List categories in creation order
    List,
    /// Delete a category (its items are kept)
    Delete { category_id: Uuid },
}

#[derive(Subcommand, Debug)]
enum ItemCommand {
    /// Append an item to a category
    Add {
        category_id: Uuid,
        /// Item title; empty means "Untitled item"
        #[arg(default_value = "")]
        title: String,
    },
    /// List a category's items by title
    List { category_id: Uuid },
    /// Flip an item's done flag
    Toggle { item_id: Uuid },
    /// Delete an item
    Delete { item_id: Uuid },
    /// Filter a category's items by title text, oldest first
    Search { category_id: Uuid, text: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(|err| anyhow!(err))?;
    }

    let db_path = resolve_db_path(cli.db.as_deref());
    let conn = open_db(&db_path)
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    let command = command_name(&cli.command);
    let result = run(&conn, cli.command);
    match &result {
        Ok(()) => info!("event=cli_command module=cli status=ok command={command}"),
        Err(err) => {
            error!("event=cli_command module=cli status=error command={command} error={err}")
        }
    }
    result
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Category(CategoryCommand::Add { .. }) => "category_add",
        Commands::Category(CategoryCommand::List) => "category_list",
        Commands::Category(CategoryCommand::Delete { .. }) => "category_delete",
        Commands::Item(ItemCommand::Add { .. }) => "item_add",
        Commands::Item(ItemCommand::List { .. }) => "item_list",
        Commands::Item(ItemCommand::Toggle { .. }) => "item_toggle",
        Commands::Item(ItemCommand::Delete { .. }) => "item_delete",
        Commands::Item(ItemCommand::Search { .. }) => "item_search",
        Commands::Orphans => "orphans",
    }
}

fn run(conn: &Connection, command: Commands) -> Result<()> {
    match command {
        Commands::Category(command) => {
            let service = CategoryService::new(SqliteCategoryRepository::try_new(conn)?);
            run_category(&service, command)
        }
        Commands::Item(command) => {
            let service = ItemService::new(SqliteItemRepository::try_new(conn)?);
            run_item(&service, command)
        }
        Commands::Orphans => {
            let service = ItemService::new(SqliteItemRepository::try_new(conn)?);
            print_items(&service.list_orphaned_items()?);
            Ok(())
        }
    }
}

fn run_category(
    service: &CategoryService<SqliteCategoryRepository<'_>>,
    command: CategoryCommand,
) -> Result<()> {
    match command {
        CategoryCommand::Add { name } => {
            let category = service.add_category(&name)?;
            println!("{}\t{}\t{}", category.id, category.color_tag, category.name);
        }
        CategoryCommand::List => {
            let categories = service.list_categories()?;
            if categories.is_empty() {
                println!("{EMPTY_PLACEHOLDER}");
            }
            for category in categories {
                println!(
                    "{}\t{}\t{}\t({} items)",
                    category.id,
                    category.color_tag,
                    category.name,
                    category.item_ids.len()
                );
            }
        }
        CategoryCommand::Delete { category_id } => {
            service
                .delete_category(category_id)
                .with_context(|| format!("Failed to delete category {category_id}"))?;
        }
    }
    Ok(())
}

fn run_item(service: &ItemService<SqliteItemRepository<'_>>, command: ItemCommand) -> Result<()> {
    match command {
        ItemCommand::Add { category_id, title } => {
            let item = service.add_item(category_id, &title)?;
            print_items(std::slice::from_ref(&item));
        }
        ItemCommand::List { category_id } => print_items(&service.load_items(category_id)?),
        ItemCommand::Toggle { item_id } => {
            let item = service.toggle_done(item_id)?;
            print_items(std::slice::from_ref(&item));
        }
        ItemCommand::Delete { item_id } => {
            service
                .delete_item(item_id)
                .with_context(|| format!("Failed to delete item {item_id}"))?;
        }
        ItemCommand::Search { category_id, text } => {
            print_items(&service.search(category_id, &text)?)
        }
    }
    Ok(())
}

fn print_items(items: &[Item]) {
    for item in items {
        let mark = if item.done { "x" } else { " " };
        println!("[{mark}] {}\t{}", item.id, item.title);
    }
}

#[cfg(test)]
mod tests {
    use super::{command_name, Cli, Commands, ItemCommand};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn item_search_parses_category_and_text() {
        let category_id = uuid::Uuid::new_v4();
        let cli = Cli::parse_from([
            "todoey",
            "item",
            "search",
            &category_id.to_string(),
            "apple",
        ]);
        match cli.command {
            Commands::Item(ItemCommand::Search {
                category_id: parsed,
                text,
            }) => {
                assert_eq!(parsed, category_id);
                assert_eq!(text, "apple");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn log_level_flag_parses_and_names_command() {
        let cli = Cli::parse_from(["todoey", "--log-level", "warn", "orphans"]);
        assert_eq!(cli.log_level.as_deref().unwrap_or(super::default_log_level()), "warn");
        assert_eq!(command_name(&cli.command), "orphans");
    }
}
