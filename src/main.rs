use clap::Parser;
use pinlog::application::{init::init, ConfigService, Session};
use pinlog::cli::{Cli, Commands, TerminalRenderer};
use pinlog::domain::{Coordinate, EntryKind, RawForm};
use pinlog::error::PinlogError;
use pinlog::infrastructure::{LogDirectory, MemoryStore, SnapshotStore};
use std::io::Stdout;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr; level comes from PINLOG_LOG (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_env("PINLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), PinlogError> {
    match cli.command {
        Commands::Init { path, home } => {
            let home = home
                .map(|h| Coordinate::from_str(&h))
                .transpose()
                .map_err(PinlogError::Config)?;
            init(&path, home)
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(LogDirectory::discover()?);

            if list {
                let config = service.list()?;
                println!("storage_key = {}", config.storage_key);
                println!("default_zoom = {}", config.default_zoom);
                println!("home = {},{}", config.home.lat, config.home.lng);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: pinlog config [--list | <key> [<value>]]");
                println!("Valid keys: storage_key, default_zoom, home");
                Ok(())
            }
        }
        command => {
            // Restored entries are only printed when listing.
            let mut renderer = TerminalRenderer::stdout();
            renderer.set_muted(!matches!(command, Commands::List { .. }));

            if cli.ephemeral {
                let config = LogDirectory::discover()
                    .and_then(|dir| dir.load_config())
                    .unwrap_or_default();
                run_session(Session::boot(MemoryStore::new(), renderer, config), command)
            } else {
                let dir = LogDirectory::discover()?;
                let config = dir.load_config()?;
                run_session(Session::boot(dir.store(), renderer, config), command)
            }
        }
    }
}

fn run_session<S: SnapshotStore>(
    mut session: Session<S, TerminalRenderer<Stdout>>,
    command: Commands,
) -> Result<(), PinlogError> {
    match command {
        Commands::Add {
            kind,
            distance,
            duration,
            metric,
            at,
        } => {
            let point = Coordinate::from_str(&at).map_err(PinlogError::InvalidInput)?;

            session.on_map_ready(None);
            session.log_mut().renderer_mut().set_muted(false);
            session.on_map_click(point);
            if EntryKind::from_str(&kind).ok() == Some(session.form_kind().toggled()) {
                session.on_kind_change();
            }

            let form = RawForm::new(&kind, &distance, &duration, &metric);
            let submission = session.on_submit(&form)?;

            if let Some(e) = submission.persist_error {
                eprintln!(
                    "Warning: entry {} is logged for this session only: {}",
                    submission.id, e
                );
            }
            Ok(())
        }
        Commands::List { markers } => {
            if session.log().is_empty() {
                println!("No entries logged");
            } else if markers {
                session.on_map_ready(None);
            }
            Ok(())
        }
        Commands::Show { id } => {
            session.on_map_ready(None);
            session.log_mut().renderer_mut().set_muted(false);

            if session.on_list_click(&id) {
                Ok(())
            } else {
                Err(PinlogError::EntryNotFound(id))
            }
        }
        Commands::Clear => {
            let count = session.log().len();
            session.clear()?;
            println!("Cleared {} entries", count);
            Ok(())
        }
        Commands::Init { .. } | Commands::Config { .. } => Ok(()),
    }
}
