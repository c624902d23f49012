use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::Settings;
use metrics::{build_metric_summaries, calculate_year_over_year, format_percent};
use store_client::{IdentityGate, SalaryStore, SupabaseHandle};
use tracing_subscriber::EnvFilter;
use validation::{FormInput, validate_form};

/// The main entry point for the Comptrack application.
#[tokio::main]
async fn main() {
    // Load environment variables from .env file, if one exists.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => {
            if let Err(e) = handle_serve(args).await {
                eprintln!("Error running the relay: {}", e);
            }
        }
        Commands::Summary => {
            if let Err(e) = handle_summary().await {
                eprintln!("Error building the summary: {}", e);
            }
        }
        Commands::Add(args) => {
            if let Err(e) = handle_add(args).await {
                eprintln!("Error logging the entry: {}", e);
            }
        }
        Commands::Login(args) => {
            if let Err(e) = handle_login(args).await {
                eprintln!("Error signing in: {}", e);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A personal compensation tracker: log salary entries and follow your
/// trajectory against target bands.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP relay in front of the hosted salary store.
    Serve(ServeArgs),
    /// Print the metric panel and year-over-year series for the logged history.
    Summary,
    /// Validate and log one salary entry.
    Add(AddArgs),
    /// Sign in against the managed identity provider.
    Login(LoginArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Override the configured bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the configured bind port.
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Parser)]
struct AddArgs {
    /// The role held, e.g. "Senior Engineer".
    #[arg(long)]
    role: String,

    /// The year the salary applies to.
    #[arg(long)]
    year: String,

    /// Base compensation in dollars.
    #[arg(long)]
    salary: String,

    /// The target band midpoint for the role.
    #[arg(long)]
    range_mid: String,

    /// The band floor, if known.
    #[arg(long, default_value = "")]
    range_min: String,

    /// The band ceiling, if known.
    #[arg(long, default_value = "")]
    range_max: String,
}

#[derive(Parser)]
struct LoginArgs {
    /// The account email.
    #[arg(long)]
    email: String,

    /// The account password.
    #[arg(long)]
    password: String,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn load_settings() -> anyhow::Result<Settings> {
    Ok(configuration::load_settings()?)
}

async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut settings = load_settings()?;
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }

    web_server::run_server(&settings).await
}

/// Fetches the logged history and prints the five-metric panel followed by
/// the year-over-year series.
async fn handle_summary() -> anyhow::Result<()> {
    let settings = load_settings()?;
    let store = SupabaseHandle::from_settings(&settings)?;

    let entries = store.fetch_all().await?;
    if entries.is_empty() {
        println!("No salary entries logged yet.");
        return Ok(());
    }

    let mut panel = Table::new();
    panel.set_header(vec!["Metric", "Value", "Notes"]);
    for summary in build_metric_summaries(&entries) {
        panel.add_row(vec![
            summary.label,
            summary.value,
            summary.helper.unwrap_or_default(),
        ]);
    }
    println!("{panel}");

    let changes: Vec<_> = calculate_year_over_year(&entries).collect();
    if !changes.is_empty() {
        let mut series = Table::new();
        series.set_header(vec!["Year", "YoY Change"]);
        for change in changes {
            series.add_row(vec![change.year.to_string(), format_percent(change.change)]);
        }
        println!("{series}");
    }

    Ok(())
}

/// Validates an interactive submission and inserts it into the store.
///
/// Validation failures are recovered locally: the first failing rule is
/// printed inline and nothing reaches the network.
async fn handle_add(args: AddArgs) -> anyhow::Result<()> {
    let input = FormInput {
        role: args.role,
        year: args.year,
        salary: args.salary,
        range_min: args.range_min,
        range_mid: args.range_mid,
        range_max: args.range_max,
    };

    let payload = match validate_form(&input) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    let settings = load_settings()?;
    let store = SupabaseHandle::from_settings(&settings)?;
    let created = store.insert_one(&payload).await?;

    println!(
        "Logged {} • {} ({})",
        created.year, created.role, created.id
    );
    Ok(())
}

async fn handle_login(args: LoginArgs) -> anyhow::Result<()> {
    let settings = load_settings()?;
    let gate = SupabaseHandle::from_settings(&settings)?;

    let session = gate.sign_in(&args.email, &args.password).await?;
    println!(
        "Signed in as {}",
        session.email.unwrap_or(args.email)
    );
    Ok(())
}
