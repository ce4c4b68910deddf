//! # Interactive Menu
//!
//! The seven-action text menu over a checkout session.
//!
//! ## Menu Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Choose an option:                                                      │
//! │    1. List all products                                                 │
//! │    2. Add or update a product                                           │
//! │    3. Scan items into cart                                              │
//! │    4. View cart                                                         │
//! │    5. Clear cart                                                        │
//! │    6. View total price                                                  │
//! │    7. Exit                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every domain error is reported and recovered at the action that caused
//! it; the loop continues. Only an unrecoverable input-stream failure (end
//! of input, broken terminal) terminates the loop, by propagating the
//! prompt error.
//!
//! All input normalization happens here: product and item codes are
//! uppercased before they reach the core, and a scan line like `ABABACC` is
//! split into one code per character.

use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing::info;

use tally_core::{CheckoutSystem, CoreError, Money, UpsertOutcome, ValidationError};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");

/// The seven menu actions, in display order.
const MENU_ACTIONS: &[&str] = &[
    "List all products",
    "Add or update a product",
    "Scan items into cart",
    "View cart",
    "Clear cart",
    "View total price",
    "Exit",
];

/// Runs the menu loop until the user exits or the input stream fails.
pub fn run(session: &mut CheckoutSystem) -> Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("Choose an option")
            .items(MENU_ACTIONS)
            .default(0)
            .interact()
            .context("input stream closed")?;

        match choice {
            0 => list_products(session),
            1 => add_or_update_product(session, &theme)?,
            2 => scan_items(session, &theme)?,
            3 => view_cart(session),
            4 => clear_cart(session),
            5 => view_total(session),
            6 => {
                println!("Exiting. Thank you!");
                info!("Session ended by user");
                return Ok(());
            }
            _ => unreachable!("Select is bounded by MENU_ACTIONS"),
        }
    }
}

// =============================================================================
// Actions
// =============================================================================

/// Action 1: enumerate the catalog.
fn list_products(session: &CheckoutSystem) {
    if session.products().is_empty() {
        println!("No products available.");
        return;
    }

    println!("{}", style("Available products:").bold());
    for product in session.products() {
        println!("  {}", product.describe());
    }
}

/// Action 2: collect code, unit price, and optional offer fields, then
/// upsert.
///
/// The offer fields must be supplied together or both left blank; the core
/// rejects a half-set pair with `IncompleteOffer`.
fn add_or_update_product(session: &mut CheckoutSystem, theme: &ColorfulTheme) -> Result<()> {
    let code: String = Input::with_theme(theme)
        .with_prompt("Product code")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Code must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .context("input stream closed")?;
    let code = code.trim().to_uppercase();

    let unit_price: i64 = Input::with_theme(theme)
        .with_prompt("Unit price (in cents)")
        .interact_text()
        .context("input stream closed")?;

    let offer_count = match prompt_optional_number(theme, "Offer quantity (blank for none)")? {
        None => None,
        Some(n) => match u32::try_from(n) {
            Ok(n) => Some(n),
            Err(_) => {
                let err = ValidationError::MustBePositive {
                    field: "offer count".to_string(),
                };
                println!("{} {}", CROSS, style(err).red());
                return Ok(());
            }
        },
    };
    let offer_price = prompt_optional_number(theme, "Offer price in cents (blank for none)")?
        .map(Money::from_cents);

    match session.upsert_product(&code, Money::from_cents(unit_price), offer_count, offer_price) {
        Ok(outcome) => {
            let verb = match outcome {
                UpsertOutcome::Inserted => "Added",
                UpsertOutcome::Updated => "Updated",
            };
            println!(
                "{} {} product '{}'.",
                CHECKMARK,
                verb,
                style(&code).green()
            );
        }
        Err(e) => {
            println!("{} {}", CROSS, style(&e).red());
        }
    }

    Ok(())
}

/// Action 3: read a scan line like `ABABACC`, split into per-character
/// codes, and forward to the session.
fn scan_items(session: &mut CheckoutSystem, theme: &ColorfulTheme) -> Result<()> {
    let line: String = Input::with_theme(theme)
        .with_prompt("Items to scan (e.g. ABABACC)")
        .allow_empty(true)
        .interact_text()
        .context("input stream closed")?;
    let line = line.trim().to_uppercase();

    let codes: Vec<String> = line.chars().map(|c| c.to_string()).collect();
    let outcome = session.scan(codes);

    if outcome.has_rejections() {
        println!(
            "{} Invalid items detected and ignored: {}",
            WARNING,
            style(outcome.rejected.join(", ")).yellow()
        );
    }
    if !outcome.accepted.is_empty() {
        println!(
            "{} Added {} to the cart.",
            CHECKMARK,
            style(outcome.accepted.concat()).green()
        );
    }

    Ok(())
}

/// Action 4: show cart lines in first-scanned order.
fn view_cart(session: &CheckoutSystem) {
    let cart = session.cart();
    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    println!("{}", style("Items in your cart:").bold());
    for line in cart.lines() {
        println!("  Item: {}, Quantity: {}", line.code, line.quantity);
    }
}

/// Action 5: empty the cart.
fn clear_cart(session: &mut CheckoutSystem) {
    session.clear_cart();
    println!("Your cart has been cleared.");
}

/// Action 6: compute and display the total.
///
/// A `ProductNotFound` here means the catalog and cart disagree - a defect,
/// reported loudly rather than silently skipped.
fn view_total(session: &CheckoutSystem) {
    match session.total() {
        Ok(total) => println!("Total price: {}", style(total).bold().green()),
        Err(e @ CoreError::ProductNotFound(_)) => {
            println!(
                "{} {}",
                CROSS,
                style(format!("internal inconsistency: {}", e)).red()
            );
        }
        Err(e) => println!("{} {}", CROSS, style(&e).red()),
    }
}

// =============================================================================
// Prompt Helpers
// =============================================================================

/// Prompts for an optional integer: blank input means "none", anything else
/// must parse as a number (re-prompted until it does).
fn prompt_optional_number(theme: &ColorfulTheme, prompt: &str) -> Result<Option<i64>> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() || input.trim().parse::<i64>().is_ok() {
                Ok(())
            } else {
                Err("Enter a whole number or leave blank")
            }
        })
        .interact_text()
        .context("input stream closed")?;

    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    // The validator above guarantees this parses
    Ok(Some(raw.parse().expect("validated numeric input")))
}
