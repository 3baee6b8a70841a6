//! Product command handlers.

use std::sync::Arc;

use tabled::Tabled;

use shelf_core::{Inventory, NewProduct, Product, ProductPatch};

use crate::cli::{GlobalOpts, ProductArgs, ProductCommand, ProductCreateArgs, ProductUpdateArgs};
use crate::error::CliError;
use crate::{output, validate};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "SKU")]
    sku: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Stock")]
    stock: i64,
    #[tabled(rename = "Category")]
    category: i64,
    #[tabled(rename = "Dealer")]
    dealer: String,
}

impl From<&Arc<Product>> for ProductRow {
    fn from(p: &Arc<Product>) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            sku: p.sku.clone(),
            company: p.company_name.clone(),
            price: format!("{:.2}", p.price),
            stock: p.stock,
            category: p.category_id,
            dealer: util::opt_num(p.dealer_id),
        }
    }
}

fn detail(p: &Arc<Product>) -> String {
    format!(
        "Product #{}\n  Name:     {}\n  SKU:      {}\n  Company:  {}\n  Price:    {:.2}\n  Stock:    {}\n  Category: {}\n  Dealer:   {}\n  Discount: {}",
        p.id,
        p.name,
        p.sku,
        p.company_name,
        p.price,
        p.stock,
        p.category_id,
        util::opt_num(p.dealer_id),
        util::opt_num(p.discount),
    )
}

// ── Validation ──────────────────────────────────────────────────────

fn validate_create(args: &ProductCreateArgs) -> Result<(), CliError> {
    validate::name(&args.name)?;
    validate::sku(&args.sku)?;
    validate::company(&args.company)?;
    validate::positive("price", args.price)?;
    validate::non_negative_int("stock", args.stock)?;
    validate::positive_id("category", args.category)?;
    if let Some(dealer) = args.dealer {
        validate::positive_id("dealer", dealer)?;
    }
    if let Some(discount) = args.discount {
        validate::non_negative("discount", discount)?;
    }
    Ok(())
}

fn validate_update(args: &ProductUpdateArgs) -> Result<(), CliError> {
    if let Some(name) = &args.name {
        validate::name(name)?;
    }
    if let Some(sku) = &args.sku {
        validate::sku(sku)?;
    }
    if let Some(company) = &args.company {
        validate::company(company)?;
    }
    if let Some(price) = args.price {
        validate::positive("price", price)?;
    }
    if let Some(stock) = args.stock {
        validate::non_negative_int("stock", stock)?;
    }
    if let Some(category) = args.category {
        validate::positive_id("category", category)?;
    }
    if let Some(dealer) = args.dealer {
        validate::positive_id("dealer", dealer)?;
    }
    if let Some(discount) = args.discount {
        validate::non_negative("discount", discount)?;
    }
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    inventory: &Inventory,
    args: ProductArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProductCommand::List => {
            let all = inventory.products.fetch_all().await?;
            let out = output::render_list(
                global.output(),
                &all,
                |p| ProductRow::from(p),
                |p| p.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductCommand::Get { id } => {
            let product =
                inventory
                    .products
                    .find_by_id(id)
                    .await
                    .ok_or_else(|| CliError::NotFound {
                        resource_type: "product",
                        identifier: id.to_string(),
                    })?;
            let out = output::render_single(global.output(), &product, detail, |p| p.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductCommand::Create(create) => {
            validate_create(&create)?;
            let payload = NewProduct {
                name: create.name,
                sku: create.sku,
                company_name: create.company,
                price: create.price,
                stock: create.stock,
                category_id: create.category,
                dealer_id: create.dealer,
                discount: create.discount,
            };
            let created = inventory.products.add(&payload).await?;
            output::status_line(
                &format!("Product '{}' created with id {}", created.name, created.id),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        ProductCommand::Update(update) => {
            validate_update(&update)?;
            let patch = ProductPatch {
                name: update.name,
                sku: update.sku,
                company_name: update.company,
                price: update.price,
                stock: update.stock,
                category_id: update.category,
                dealer_id: update.dealer,
                discount: update.discount,
            };
            let updated = inventory.products.edit(update.id, &patch).await?;
            output::status_line(
                &format!("Product {} updated", updated.id),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        ProductCommand::Delete { id } => {
            if !util::confirm(&format!("Delete product {id}?"), global.yes)? {
                return Ok(());
            }
            let message = inventory.products.remove(id).await?;
            output::status_line(&message, &global.color, global.quiet);
            Ok(())
        }
    }
}
