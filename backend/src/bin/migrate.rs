//! Apply the embedded schema migrations to a PostgreSQL database.
//!
//! ```text
//! migrate --database-url postgres://localhost/cafe
//! CAFE_DATABASE_URL=postgres://localhost/cafe migrate
//! ```

use cafe::outbound::persistence::run_pending_migrations_blocking;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(about = "Apply pending board schema migrations")]
struct Args {
    /// PostgreSQL connection URL.
    #[arg(long, env = "CAFE_DATABASE_URL")]
    database_url: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let applied = run_pending_migrations_blocking(&args.database_url)
        .wrap_err("running migrations")?;
    if applied.is_empty() {
        info!("schema already up to date");
    }
    for version in applied {
        info!(%version, "applied migration");
    }
    Ok(())
}
