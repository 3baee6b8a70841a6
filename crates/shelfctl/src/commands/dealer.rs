//! Dealer command handlers.

use std::sync::Arc;

use tabled::Tabled;

use shelf_core::{Dealer, DealerPatch, Inventory, NewDealer};

use crate::cli::{DealerArgs, DealerCommand, DealerCreateArgs, DealerUpdateArgs, GlobalOpts};
use crate::error::CliError;
use crate::{output, validate};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DealerRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
}

impl From<&Arc<Dealer>> for DealerRow {
    fn from(d: &Arc<Dealer>) -> Self {
        Self {
            id: d.id,
            name: d.name.clone(),
            company: util::opt(d.company.as_deref()),
            email: util::opt(d.email.as_deref()),
            phone: d.phone.clone(),
        }
    }
}

fn detail(d: &Arc<Dealer>) -> String {
    format!(
        "Dealer #{}\n  Name:    {}\n  Company: {}\n  Email:   {}\n  Phone:   {}\n  Address: {}",
        d.id,
        d.name,
        util::opt(d.company.as_deref()),
        util::opt(d.email.as_deref()),
        d.phone,
        util::opt(d.address.as_deref()),
    )
}

// ── Validation ──────────────────────────────────────────────────────

fn validate_create(args: &DealerCreateArgs) -> Result<(), CliError> {
    validate::name(&args.name)?;
    validate::phone(&args.phone)?;
    if let Some(company) = &args.company {
        validate::company(company)?;
    }
    if let Some(email) = &args.email {
        validate::email(email)?;
    }
    Ok(())
}

fn validate_update(args: &DealerUpdateArgs) -> Result<(), CliError> {
    if let Some(name) = &args.name {
        validate::name(name)?;
    }
    if let Some(company) = &args.company {
        validate::company(company)?;
    }
    if let Some(email) = &args.email {
        validate::email(email)?;
    }
    if let Some(phone) = &args.phone {
        validate::phone(phone)?;
    }
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    inventory: &Inventory,
    args: DealerArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DealerCommand::List => {
            let all = inventory.dealers.fetch_all().await?;
            let out = output::render_list(
                global.output(),
                &all,
                |d| DealerRow::from(d),
                |d| d.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DealerCommand::Get { id } => {
            let dealer =
                inventory
                    .dealers
                    .find_by_id(id)
                    .await
                    .ok_or_else(|| CliError::NotFound {
                        resource_type: "dealer",
                        identifier: id.to_string(),
                    })?;
            let out = output::render_single(global.output(), &dealer, detail, |d| d.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DealerCommand::Create(create) => {
            validate_create(&create)?;
            let payload = NewDealer {
                name: create.name,
                company: create.company,
                email: create.email,
                phone: create.phone,
                address: create.address,
            };
            let created = inventory.dealers.add(&payload).await?;
            output::status_line(
                &format!("Dealer '{}' created with id {}", created.name, created.id),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        DealerCommand::Update(update) => {
            validate_update(&update)?;
            let patch = DealerPatch {
                name: update.name,
                company: update.company,
                email: update.email,
                phone: update.phone,
                address: update.address,
            };
            let updated = inventory.dealers.edit(update.id, &patch).await?;
            output::status_line(
                &format!("Dealer {} updated", updated.id),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        DealerCommand::Delete { id } => {
            if !util::confirm(&format!("Delete dealer {id}?"), global.yes)? {
                return Ok(());
            }
            let message = inventory.dealers.remove(id).await?;
            output::status_line(&message, &global.color, global.quiet);
            Ok(())
        }
    }
}
