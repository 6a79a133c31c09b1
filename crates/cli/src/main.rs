//! Marzipan CLI - Cart inspection and management tools.
//!
//! Operates on the same file-backed storage a Marzipan host uses, so a
//! cart mutated here is what the storefront sees on its next reload.
//!
//! # Usage
//!
//! ```bash
//! # Show the guest cart
//! marzipan-cli cart show
//!
//! # Add two units of a product to a user's cart
//! marzipan-cli --identity u-1 cart add --id p-9 --name "Nougat" --price 2.50
//! marzipan-cli --identity u-1 cart add --id p-9 --name "Nougat" --price 2.50
//!
//! # Set a quantity, remove a line, empty the cart
//! marzipan-cli --identity u-1 cart update --id p-9 --quantity 5
//! marzipan-cli --identity u-1 cart remove --id p-9
//! marzipan-cli --identity u-1 cart clear
//!
//! # Print just the unit count or the total
//! marzipan-cli --identity u-1 cart count
//! marzipan-cli --identity u-1 cart total
//! ```
//!
//! # Environment Variables
//!
//! - `CART_STORAGE_PATH` - Path of the JSON storage file (default: `cart-store.json`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use marzipan_core::UserId;

mod commands;

#[derive(Parser)]
#[command(name = "marzipan-cli")]
#[command(author, version, about = "Marzipan CLI tools")]
struct Cli {
    /// Act as this logged-in user (omit for the guest cart)
    #[arg(long, global = true)]
    identity: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or mutate a persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Print the cart lines, count, and total
    Show,
    /// Add one unit of a product
    Add {
        /// Product identifier
        #[arg(long)]
        id: String,

        /// Product display name
        #[arg(long)]
        name: String,

        /// Unit price (e.g., 2.50)
        #[arg(long)]
        price: String,

        /// Product image URL
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Remove a product's line entirely
    Remove {
        /// Product identifier
        #[arg(long)]
        id: String,
    },
    /// Set a line's quantity (0 removes the line)
    Update {
        /// Product identifier
        #[arg(long)]
        id: String,

        /// New quantity
        #[arg(long)]
        quantity: u32,
    },
    /// Empty the cart
    Clear,
    /// Print the total number of units in the cart
    Count,
    /// Print the cart total
    Total,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let identity = cli.identity.map(UserId::new);
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(identity)?,
            CartAction::Add {
                id,
                name,
                price,
                image_url,
            } => commands::cart::add(identity, &id, name, &price, image_url)?,
            CartAction::Remove { id } => commands::cart::remove(identity, &id)?,
            CartAction::Update { id, quantity } => {
                commands::cart::update(identity, &id, quantity)?;
            }
            CartAction::Clear => commands::cart::clear(identity)?,
            CartAction::Count => commands::cart::count(identity)?,
            CartAction::Total => commands::cart::total(identity)?,
        },
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_every_cart_action() {
        for args in [
            vec!["marzipan-cli", "cart", "show"],
            vec![
                "marzipan-cli",
                "cart",
                "add",
                "--id",
                "p-1",
                "--name",
                "Nougat",
                "--price",
                "2.50",
            ],
            vec!["marzipan-cli", "cart", "remove", "--id", "p-1"],
            vec![
                "marzipan-cli",
                "cart",
                "update",
                "--id",
                "p-1",
                "--quantity",
                "3",
            ],
            vec!["marzipan-cli", "cart", "clear"],
            vec!["marzipan-cli", "cart", "count"],
            vec!["marzipan-cli", "cart", "total"],
        ] {
            Cli::try_parse_from(args).unwrap();
        }
    }

    #[test]
    fn test_identity_flag_is_global() {
        let cli = Cli::try_parse_from(["marzipan-cli", "cart", "total", "--identity", "u-1"])
            .unwrap();
        assert_eq!(cli.identity.as_deref(), Some("u-1"));
    }
}
