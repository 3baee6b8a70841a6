//! Customer command handlers.

use std::sync::Arc;

use tabled::Tabled;

use shelf_core::{Customer, CustomerPatch, Inventory, NewCustomer};

use crate::cli::{CustomerArgs, CustomerCommand, CustomerCreateArgs, CustomerUpdateArgs, GlobalOpts};
use crate::error::CliError;
use crate::{output, validate};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
}

impl From<&Arc<Customer>> for CustomerRow {
    fn from(c: &Arc<Customer>) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            email: util::opt(c.email.as_deref()),
            phone: c.phone.clone(),
        }
    }
}

fn detail(c: &Arc<Customer>) -> String {
    format!(
        "Customer #{}\n  Name:    {}\n  Email:   {}\n  Phone:   {}\n  Address: {}",
        c.id,
        c.name,
        util::opt(c.email.as_deref()),
        c.phone,
        util::opt(c.address.as_deref()),
    )
}

// ── Validation ──────────────────────────────────────────────────────

fn validate_create(args: &CustomerCreateArgs) -> Result<(), CliError> {
    validate::name(&args.name)?;
    validate::phone(&args.phone)?;
    if let Some(email) = &args.email {
        validate::email(email)?;
    }
    Ok(())
}

fn validate_update(args: &CustomerUpdateArgs) -> Result<(), CliError> {
    if let Some(name) = &args.name {
        validate::name(name)?;
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
    args: CustomerArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CustomerCommand::List => {
            let all = inventory.customers.fetch_all().await?;
            let out = output::render_list(
                global.output(),
                &all,
                |c| CustomerRow::from(c),
                |c| c.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CustomerCommand::Get { id } => {
            let customer =
                inventory
                    .customers
                    .find_by_id(id)
                    .await
                    .ok_or_else(|| CliError::NotFound {
                        resource_type: "customer",
                        identifier: id.to_string(),
                    })?;
            let out =
                output::render_single(global.output(), &customer, detail, |c| c.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CustomerCommand::Create(create) => {
            validate_create(&create)?;
            let payload = NewCustomer {
                name: create.name,
                email: create.email,
                phone: create.phone,
                address: create.address,
            };
            let created = inventory.customers.add(&payload).await?;
            output::status_line(
                &format!("Customer '{}' created with id {}", created.name, created.id),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        CustomerCommand::Update(update) => {
            validate_update(&update)?;
            let patch = CustomerPatch {
                name: update.name,
                email: update.email,
                phone: update.phone,
                address: update.address,
            };
            let updated = inventory.customers.edit(update.id, &patch).await?;
            output::status_line(
                &format!("Customer {} updated", updated.id),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        CustomerCommand::Delete { id } => {
            if !util::confirm(&format!("Delete customer {id}?"), global.yes)? {
                return Ok(());
            }
            let message = inventory.customers.remove(id).await?;
            output::status_line(&message, &global.color, global.quiet);
            Ok(())
        }
    }
}
