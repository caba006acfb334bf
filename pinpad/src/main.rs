//! Pinpad CLI - manager desk for changing staff access PINs

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pinpad::core::{FileStore, PinDesk};
use pinpad_client::ClientConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pinpad")]
#[command(about = "Manager desk for changing staff access PINs", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory service base URL
    #[arg(long, env = "PINPAD_SERVER_URL", default_value = "http://localhost:8081")]
    server_url: String,

    /// Directory holding session state between invocations
    #[arg(long, env = "PINPAD_STATE_DIR", default_value = ".pinpad")]
    state_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authenticate as a manager
    Login {
        /// Employee id (1-5 digits)
        employee_id: String,
    },
    /// Refresh and print the staff roster
    Roster,
    /// Change a staff member's PIN
    ChangePin {
        /// Target employee id
        staff_id: i64,
        /// New PIN (4 digits below manager tier, 5 at or above)
        new_pin: String,
        /// Acting manager's own 5-digit PIN
        #[arg(long)]
        manager_pin: String,
        /// Tick the manager-override box (manager-tier targets only)
        #[arg(long)]
        manager_override: bool,
    },
    /// Print a random PIN valid for a staff member's level
    RandomPin {
        /// Target employee id
        staff_id: i64,
    },
    /// Discard the manager session
    Logout,
}

fn init_tracing() {
    let env_filter = if let Ok(from_env) = EnvFilter::try_from_default_env() {
        from_env
    } else if cfg!(debug_assertions) {
        EnvFilter::new("info,pinpad=debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let config = ClientConfig::new(&cli.server_url);
    let client = Arc::new(config.build_http_client());
    let store = Arc::new(FileStore::open(&cli.state_dir)?);
    let desk = PinDesk::new(client, store);

    match cli.command {
        Commands::Login { employee_id } => {
            let context = desk.login(&employee_id).await?;
            println!("pinpad — {}", pinpad::utils::header_date());
            println!(
                "Logged in as manager {} (level {})",
                context.manager_id, context.manager_level
            );
        }
        Commands::Roster => {
            desk.session().current()?;
            desk.refresh_roster().await?;
            for entry in desk.roster().list().await {
                println!("{:>6}  L{}  {}", entry.emp_id, entry.level, entry.full_name());
            }
        }
        Commands::ChangePin {
            staff_id,
            new_pin,
            manager_pin,
            manager_override,
        } => {
            desk.session().current()?;
            desk.refresh_roster().await?;

            let entry = desk.select_staff(staff_id).await?;
            println!("Target: {} (level {})", entry.full_name(), entry.level);

            desk.set_new_pin(&new_pin).await;
            desk.set_manager_pin(&manager_pin).await;
            if manager_override {
                desk.set_manager_override(true).await;
            }

            match desk.submit().await {
                Ok(()) => {
                    if let Some(notice) = desk.notices().current().await {
                        println!("{}", notice.message);
                    }
                }
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
            }
        }
        Commands::RandomPin { staff_id } => {
            desk.session().current()?;
            desk.refresh_roster().await?;
            desk.select_staff(staff_id).await?;
            println!("{}", desk.generate_random_pin().await);
        }
        Commands::Logout => {
            desk.quit().await?;
            println!("Session cleared");
        }
    }

    Ok(())
}
