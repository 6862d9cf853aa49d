//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::BudgetAlertsResult;
use crate::models::{CategoryId, OwnerId};
use crate::services::known_categories;
use crate::storage::{Snapshot, Storage};

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List default categories and those already in use
    List,
}

/// Handle a category command; without an owner only the defaults are listed
pub fn handle_category_command(
    storage: &Storage,
    owner: Option<OwnerId>,
    cmd: CategoryCommands,
) -> BudgetAlertsResult<()> {
    match cmd {
        CategoryCommands::List => {
            let categories = match owner {
                Some(owner) => known_categories(&Snapshot::capture(storage, owner)?, owner),
                None => CategoryId::defaults(),
            };
            print!("{}", format_category_list(&categories));
        }
    }

    Ok(())
}
