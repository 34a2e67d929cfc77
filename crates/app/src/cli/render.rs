//! Table rendering for command output

use std::io;

use cartkeep_app::domain::{
    carts::models::{Cart, CheckoutReceipt},
    products::models::Product,
    users::models::User,
};
use rusty_money::{Money, iso::Currency};
use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

/// Format minor units in `currency`, e.g. `250` as `$2.50`.
pub(crate) fn money(amount: u64, currency: &'static Currency) -> String {
    i64::try_from(amount).map_or_else(
        |_| format!("{amount} {}", currency.iso_alpha_code),
        |minor| Money::from_minor(minor, currency).to_string(),
    )
}

fn details_table<const N: usize>(rows: [(&str, String); N]) -> Table {
    let mut builder = Builder::default();

    for (label, value) in rows {
        builder.push_record([label.to_string(), value]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());

    table
}

pub(crate) fn write_cart(
    out: &mut impl io::Write,
    cart: &Cart,
    currency: &'static Currency,
) -> io::Result<()> {
    if cart.is_empty() {
        return writeln!(out, "cart {} is empty", cart.uuid);
    }

    let mut builder = Builder::default();

    builder.push_record(["", "Product", "UUID", "Unit Cost", "Quantity", "Line Total"]);

    for (idx, item) in cart.items.iter().enumerate() {
        let line_total = item
            .line_total()
            .map_or_else(|| "overflow".to_string(), |total| money(total, currency));

        builder.push_record([
            format!("#{:<3}", idx + 1),
            item.product.name.clone(),
            item.product.uuid.to_string(),
            money(item.product.cost, currency),
            item.quantity.to_string(),
            line_total,
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..), Alignment::right());

    let total = cart
        .total()
        .map_or_else(|error| error.to_string(), |total| money(total, currency));

    writeln!(out, "{table}")?;
    writeln!(out, " Total: {total}")
}

pub(crate) fn write_receipt(
    out: &mut impl io::Write,
    receipt: &CheckoutReceipt,
    currency: &'static Currency,
) -> io::Result<()> {
    let table = details_table([
        ("Cart", receipt.cart.to_string()),
        ("Charged", money(receipt.total, currency)),
        ("Wallet balance", money(receipt.wallet_money, currency)),
    ]);

    writeln!(out, "{table}")
}

pub(crate) fn write_user(
    out: &mut impl io::Write,
    user: &User,
    currency: &'static Currency,
) -> io::Result<()> {
    let address = if user.has_set_non_default_address() {
        user.address.clone()
    } else {
        "(not set)".to_string()
    };

    let table = details_table([
        ("Email", user.email.to_string()),
        ("Name", user.name.clone()),
        ("Wallet", money(user.wallet_money, currency)),
        ("Address", address),
        ("Created", user.created_at.to_string()),
    ]);

    writeln!(out, "{table}")
}

pub(crate) fn write_product(
    out: &mut impl io::Write,
    product: &Product,
    currency: &'static Currency,
) -> io::Result<()> {
    let table = details_table([
        ("UUID", product.uuid.to_string()),
        ("Name", product.name.clone()),
        ("Cost", money(product.cost, currency)),
    ]);

    writeln!(out, "{table}")
}
