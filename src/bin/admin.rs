//! CLI administration tool for employee-gateway.
//!
//! Drives the same employee service the HTTP gateway uses, straight against
//! the configured upstream, so operators can inspect and edit records without
//! an HTTP client.
//!
//! # Usage
//!
//! ```bash
//! # List all employees
//! cargo run --bin admin -- list
//!
//! # Search by name
//! cargo run --bin admin -- search "jill"
//!
//! # Create an employee (prompts for missing fields)
//! cargo run --bin admin -- create --name "Jill Jenkins" --salary 139082
//!
//! # Delete an employee
//! cargo run --bin admin -- delete 4a3a170b-22cd-4ac2-aad1-9bb5b34a1507
//!
//! # Check upstream connectivity
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `employee_gateway::config`. Only
//! `UPSTREAM_BASE_URL` and `UPSTREAM_TIMEOUT_SECONDS` matter here.

use employee_gateway::application::services::EmployeeService;
use employee_gateway::config;
use employee_gateway::domain::entities::{Employee, EmployeeInput};
use employee_gateway::error::AppError;
use employee_gateway::infrastructure::upstream::HttpEmployeeRepository;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;

type Service = EmployeeService<HttpEmployeeRepository>;

/// CLI tool for managing employees through the upstream service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List all employees
    List,

    /// Search employees by name fragment
    Search {
        /// Text to search for
        text: String,
    },

    /// Show one employee
    Get {
        /// Employee id
        id: String,
    },

    /// Show the highest salary
    HighestSalary,

    /// Show the ten highest earners
    TopEarners,

    /// Create an employee
    Create {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        salary: Option<i32>,

        #[arg(short, long)]
        age: Option<i32>,

        #[arg(short, long)]
        title: Option<String>,
    },

    /// Delete an employee
    Delete {
        /// Employee id
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check upstream connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let repository = HttpEmployeeRepository::from_config(&config)?;
    let service = EmployeeService::new(Arc::new(repository));

    match cli.command {
        Commands::List => list_employees(&service).await?,
        Commands::Search { text } => search_employees(&service, &text).await?,
        Commands::Get { id } => get_employee(&service, &id).await?,
        Commands::HighestSalary => highest_salary(&service).await?,
        Commands::TopEarners => top_earners(&service).await?,
        Commands::Create {
            name,
            salary,
            age,
            title,
        } => create_employee(&service, name, salary, age, title).await?,
        Commands::Delete { id, yes } => delete_employee(&service, &id, yes).await?,
        Commands::Check => {
            check_upstream(&service, &config::mask_connection_string(&config.upstream_base_url))
                .await
        }
    }

    Ok(())
}

/// Converts an [`AppError`] into an `anyhow` error with context.
fn upstream_failure(action: &str, e: AppError) -> anyhow::Error {
    anyhow::anyhow!("Failed to {}: {}", action, e)
}

async fn list_employees(service: &Service) -> Result<()> {
    println!("{}", "📋 Employees".bright_blue().bold());
    println!();

    let employees = service
        .list_employees()
        .await
        .map_err(|e| upstream_failure("list employees", e))?;

    print_table(&employees);
    Ok(())
}

async fn search_employees(service: &Service, text: &str) -> Result<()> {
    println!(
        "{} {}",
        "🔍 Employees matching".bright_blue().bold(),
        text.cyan()
    );
    println!();

    let employees = service
        .search_employees(text)
        .await
        .map_err(|e| upstream_failure("search employees", e))?;

    print_table(&employees);
    Ok(())
}

/// Prints employees as a fixed-width table.
///
/// # Output Format
///
/// ```text
///   ID                                    Name                   Salary     Age  Title
///   ─────────────────────────────────────────────────────────────────────────────────────
///   4a3a170b-22cd-4ac2-aad1-9bb5b34a1507  Jill Jenkins           139082     48   Financial Advisor
/// ```
fn print_table(employees: &[Employee]) {
    if employees.is_empty() {
        println!("{}", "  No employees found".yellow());
        println!();
        return;
    }

    println!(
        "  {:<38} {:<22} {:<10} {:<4} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Salary".bright_white().bold(),
        "Age".bright_white().bold(),
        "Title".bright_white().bold()
    );
    println!("  {}", "─".repeat(95).bright_black());

    for employee in employees {
        println!(
            "  {:<38} {:<22} {:<10} {:<4} {}",
            employee.id.bright_black(),
            employee.name.cyan(),
            employee.salary,
            employee.age,
            employee.title
        );
    }

    println!();
    println!(
        "  Total: {}",
        employees.len().to_string().bright_white().bold()
    );
    println!();
}

async fn get_employee(service: &Service, id: &str) -> Result<()> {
    match service.get_employee(id).await {
        Ok(employee) => {
            println!("{}", "👤 Employee".bright_blue().bold());
            println!();
            println!("  ID:     {}", employee.id.bright_black());
            println!("  Name:   {}", employee.name.cyan());
            println!("  Salary: {}", employee.salary);
            println!("  Age:    {}", employee.age);
            println!("  Title:  {}", employee.title);
            println!("  Email:  {}", employee.email);
            println!();
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{} {}", "⚠️  No employee with id".yellow(), id.cyan());
            Ok(())
        }
        Err(e) => Err(upstream_failure("fetch employee", e)),
    }
}

async fn highest_salary(service: &Service) -> Result<()> {
    let salary = service
        .highest_salary()
        .await
        .map_err(|e| upstream_failure("fetch highest salary", e))?;

    println!(
        "{} {}",
        "💰 Highest salary:".bright_blue().bold(),
        salary.to_string().bright_yellow().bold()
    );
    Ok(())
}

async fn top_earners(service: &Service) -> Result<()> {
    println!("{}", "🏆 Top earners".bright_blue().bold());
    println!();

    let names = service
        .top_ten_earner_names()
        .await
        .map_err(|e| upstream_failure("fetch top earners", e))?;

    for (rank, name) in names.iter().enumerate() {
        println!("  {:>2}. {}", rank + 1, name.cyan());
    }
    println!();
    Ok(())
}

/// Creates an employee, prompting for any field not given on the command line.
async fn create_employee(
    service: &Service,
    name: Option<String>,
    salary: Option<i32>,
    age: Option<i32>,
    title: Option<String>,
) -> Result<()> {
    println!("{}", "➕ Create Employee".bright_blue().bold());
    println!();

    let input = EmployeeInput {
        name: match name {
            Some(n) => n,
            None => Input::new().with_prompt("Name").interact_text()?,
        },
        salary: match salary {
            Some(s) => s,
            None => Input::new().with_prompt("Salary").interact_text()?,
        },
        age: match age {
            Some(a) => a,
            None => Input::new().with_prompt("Age").interact_text()?,
        },
        title: match title {
            Some(t) => t,
            None => Input::new().with_prompt("Title").interact_text()?,
        },
    };

    let employee = service
        .create_employee(input)
        .await
        .map_err(|e| upstream_failure("create employee", e))?;

    println!();
    println!("{}", "✅ Employee created!".green().bold());
    println!("  ID:    {}", employee.id.bright_yellow().bold());
    println!("  Email: {}", employee.email.cyan());
    println!();

    Ok(())
}

/// Deletes an employee after confirmation (default: No).
async fn delete_employee(service: &Service, id: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Employee".bright_blue().bold());
    println!();
    println!("  ID: {}", id.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this employee?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let confirmation = service
        .delete_employee(id)
        .await
        .map_err(|e| upstream_failure("delete employee", e))?;

    println!();
    println!("{}", "✅ Employee deleted".green().bold());
    if !confirmation.is_empty() {
        println!("  Upstream: {}", confirmation.bright_black());
    }
    println!();

    Ok(())
}

async fn check_upstream(service: &Service, upstream_url: &str) {
    println!("{}", "🔌 Checking upstream...".bright_blue());

    if service.upstream_reachable().await {
        println!("{} {}", "✅ Upstream reachable:".green().bold(), upstream_url);
    } else {
        println!("{} {}", "❌ Upstream unreachable:".red().bold(), upstream_url);
    }
}
