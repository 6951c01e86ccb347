use clap::Parser;
use dotenvy::dotenv;
use rental_buddy::{
    cli::{self, Cli},
    config::{database, settings},
    core::{RentalManager, RentalPolicy},
    errors::{ErrorKind, Result},
};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // 1. Initialize tracing (as early as possible); stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file
    dotenv().ok(); // Make it non-fatal, env vars can be set externally

    // 3. Parse the command before touching the database so --help stays side-effect free
    let cli = Cli::parse();

    // 4. Load settings (penalty rate, fleet to seed)
    let app_config = settings::load_default_config()
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;

    // 5. Open the store and hand it to the lifecycle manager
    let db = database::create_connection(&database::get_database_url())
        .await
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;
    let manager = RentalManager::new(db, RentalPolicy::new(app_config.penalty_rate_per_day));

    // 6. Seed configured vehicles (if any)
    if !app_config.vehicles.is_empty() {
        let inserted = manager
            .seed_fleet(&app_config.vehicles)
            .await
            .inspect_err(|e| error!("Failed to seed fleet: {}", e))?;
        if inserted > 0 {
            info!("Seeded {} vehicle(s) from settings.", inserted);
        }
    }

    // 7. Run the command
    let today = chrono::Local::now().date_naive();
    match cli::run(&manager, cli.command, today).await {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.kind() == ErrorKind::Internal => Err(e),
        Err(e) => {
            warn!(kind = ?e.kind(), "Command rejected");
            eprintln!("❌ {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
