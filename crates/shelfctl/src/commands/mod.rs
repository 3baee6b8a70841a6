//! Command dispatch: bridges CLI args -> store operations -> output formatting.

pub mod category;
pub mod config_cmd;
pub mod customer;
pub mod dealer;
pub mod product;
pub mod util;

use shelf_core::Inventory;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    inventory: &Inventory,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Product(args) => product::handle(inventory, args, global).await,
        Command::Category(args) => category::handle(inventory, args, global).await,
        Command::Dealer(args) => dealer::handle(inventory, args, global).await,
        Command::Customer(args) => customer::handle(inventory, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
