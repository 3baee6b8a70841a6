//! Category command handlers.

use std::sync::Arc;

use tabled::Tabled;

use shelf_core::{Category, CategoryPatch, Inventory, NewCategory};

use crate::cli::{CategoryArgs, CategoryCommand, GlobalOpts};
use crate::error::CliError;
use crate::{output, validate};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&Arc<Category>> for CategoryRow {
    fn from(c: &Arc<Category>) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
        }
    }
}

fn detail(c: &Arc<Category>) -> String {
    format!("Category #{}\n  Name: {}", c.id, c.name)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    inventory: &Inventory,
    args: CategoryArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CategoryCommand::List => {
            let all = inventory.categories.fetch_all().await?;
            let out = output::render_list(
                global.output(),
                &all,
                |c| CategoryRow::from(c),
                |c| c.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CategoryCommand::Get { id } => {
            let category =
                inventory
                    .categories
                    .find_by_id(id)
                    .await
                    .ok_or_else(|| CliError::NotFound {
                        resource_type: "category",
                        identifier: id.to_string(),
                    })?;
            let out =
                output::render_single(global.output(), &category, detail, |c| c.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CategoryCommand::Create { name } => {
            validate::category_name(&name)?;
            let created = inventory.categories.add(&NewCategory { name }).await?;
            output::status_line(
                &format!("Category '{}' created with id {}", created.name, created.id),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        CategoryCommand::Update { id, name } => {
            validate::category_name(&name)?;
            let updated = inventory
                .categories
                .edit(id, &CategoryPatch { name: Some(name) })
                .await?;
            output::status_line(
                &format!("Category {} renamed to '{}'", updated.id, updated.name),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        CategoryCommand::Delete { id } => {
            if !util::confirm(&format!("Delete category {id}?"), global.yes)? {
                return Ok(());
            }
            let message = inventory.categories.remove(id).await?;
            output::status_line(&message, &global.color, global.quiet);
            Ok(())
        }
    }
}
