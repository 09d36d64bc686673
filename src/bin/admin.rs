//! CLI administration tool for customer-service.
//!
//! Inspects and maintains the customer store directly in PostgreSQL,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Server version and row counts
//! cargo run --bin admin -- db info
//!
//! # List customers, optionally filtered
//! cargo run --bin admin -- customer list --email alice@example.com
//! cargo run --bin admin -- customer list --suspended
//!
//! # Show or delete a single customer
//! cargo run --bin admin -- customer show 42
//! cargo run --bin admin -- customer delete 42 -y
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_USER`/... (required): PostgreSQL connection

use customer_service::application::services::CustomerService;
use customer_service::config;
use customer_service::domain::entities::Customer;
use customer_service::infrastructure::persistence::PgCustomerRepository;
use customer_service::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing customer-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect customers
    Customer {
        #[command(subcommand)]
        action: CustomerAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Customer subcommands.
#[derive(Subcommand)]
enum CustomerAction {
    /// List customers, optionally filtered by one attribute
    #[command(group(clap::ArgGroup::new("filter").multiple(false)))]
    List {
        /// Only customers with this exact name
        #[arg(short, long, group = "filter")]
        name: Option<String>,

        /// Only customers with this exact email
        #[arg(short, long, group = "filter")]
        email: Option<String>,

        /// Only customers with this exact phone number
        #[arg(short, long, group = "filter")]
        phone_number: Option<String>,

        /// Only customers with this exact address
        #[arg(short, long, group = "filter")]
        address: Option<String>,

        /// Only suspended customers
        #[arg(short, long, group = "filter")]
        suspended: bool,
    },

    /// Show a single customer
    Show { id: i64 },

    /// Delete a customer
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL (or DB_HOST) must be set")?;

    let pool = connect_pool(&database_url, &config).await?;

    match cli.command {
        Commands::Customer { action } => handle_customer_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches customer commands.
async fn handle_customer_action(action: CustomerAction, pool: &PgPool) -> Result<()> {
    let repository = Arc::new(PgCustomerRepository::new(Arc::new(pool.clone())));
    let service = CustomerService::new(repository);

    match action {
        CustomerAction::List {
            name,
            email,
            phone_number,
            address,
            suspended,
        } => {
            let customers = if let Some(name) = name {
                service.find_by_name(&name).await?
            } else if let Some(email) = email {
                service.find_by_email(&email).await?
            } else if let Some(phone_number) = phone_number {
                service.find_by_phone_number(&phone_number).await?
            } else if let Some(address) = address {
                service.find_by_address(&address).await?
            } else if suspended {
                service.find_by_state(false).await?
            } else {
                service.all().await?
            };
            print_customers(&customers);
            Ok(())
        }
        CustomerAction::Show { id } => {
            let customer = service.find(id).await?;
            print_customer(&customer);
            Ok(())
        }
        CustomerAction::Delete { id, yes } => delete_customer(&service, id, yes).await,
    }
}

fn print_customers(customers: &[Customer]) {
    println!("{}", "👥 Customers".bright_blue().bold());
    println!();

    if customers.is_empty() {
        println!("{}", "No customers found".yellow());
        return;
    }

    for customer in customers {
        let state = if customer.is_active() {
            "active".green()
        } else {
            "suspended".red()
        };

        println!(
            "  {:>6}  {}  {}  {}",
            customer.id.to_string().bright_black(),
            customer.name.cyan(),
            customer.email,
            state
        );
    }

    println!();
    println!("  Total: {}", customers.len().to_string().bright_green().bold());
}

/// Deletes a customer after confirmation (default: No).
async fn delete_customer(service: &CustomerService, id: i64, yes: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Customer".bright_blue().bold());
    println!();

    let customer = service.find(id).await?;
    print_customer(&customer);

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete this customer?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete(id).await?;

    println!();
    println!("{}", "✅ Customer deleted".green().bold());

    Ok(())
}

fn print_customer(customer: &Customer) {
    println!("  ID:       {}", customer.id.to_string().bright_black());
    println!("  Name:     {}", customer.name.cyan());
    println!("  Email:    {}", customer.email);
    println!("  Phone:    {}", customer.phone_number);
    println!("  Address:  {}", customer.address);
    println!(
        "  State:    {}",
        if customer.is_active() {
            "active".green()
        } else {
            "suspended".red()
        }
    );
    println!("  Created:  {}", customer.created_at.format("%Y-%m-%d %H:%M"));
    println!("  Updated:  {}", customer.updated_at.format("%Y-%m-%d %H:%M"));
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
                .fetch_one(pool)
                .await?;

            let suspended: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM customers WHERE state = FALSE")
                    .fetch_one(pool)
                    .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Customers:  {}", total.to_string().bright_green().bold());
            println!("  Suspended:  {}", suspended.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
