use super::args::{Cli, Commands};
use super::logging;
use super::render::{print_garments, print_messages, TerminalView};
use clap::Parser;
use closet::api::Closet;
use closet::commands::CmdMessage;
use closet::config::{ClosetConfig, CONFIG_KEYS};
use closet::error::{ClosetError, Result};
use closet::session::{Session, SessionOutcome};
use closet::store::fs::FileStore;
use closet::store::{load_or_empty, SnapshotStore};
use directories::ProjectDirs;
use std::path::PathBuf;

const HOME_ENV: &str = "CLOSET_HOME";

struct AppContext {
    data_dir: PathBuf,
    config: ClosetConfig,
    store: FileStore,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Session) | None => handle_session(&mut ctx),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let config = ClosetConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone()).with_snapshot_file(&config.snapshot_file);
    tracing::debug!(data_dir = %data_dir.display(), "context ready");

    Ok(AppContext {
        data_dir,
        config,
        store,
    })
}

/// `--data-dir`, then `$CLOSET_HOME`, then the platform data directory.
fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "closet", "closet")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ClosetError::Config("Could not determine data directory".into()))
}

fn load_closet(ctx: &AppContext) -> Closet {
    let report = load_or_empty(&ctx.store);
    if let Some(warning) = report.warning {
        print_messages(&[CmdMessage::warning(warning)]);
    }
    Closet::new(report.garments)
}

fn handle_session(ctx: &mut AppContext) -> Result<()> {
    let mut closet = load_closet(ctx);
    let mut view = TerminalView;

    let stdin = std::io::stdin();
    let outcome = Session::new(&mut closet, stdin.lock(), &mut view).run()?;

    match outcome {
        SessionOutcome::Completed if ctx.config.save_on_exit => {
            match ctx.store.save(closet.garments()) {
                Ok(()) => print_messages(&[CmdMessage::success(format!(
                    "Saved {} clothes to {}",
                    closet.len(),
                    ctx.store.snapshot_path().display()
                ))]),
                Err(e) => {
                    tracing::error!(error = %e, "save failed");
                    print_messages(&[CmdMessage::error(format!("Could not save clothes: {}", e))]);
                }
            }
        }
        SessionOutcome::Completed => {
            print_messages(&[CmdMessage::info("save-on-exit is off, nothing saved")]);
        }
        SessionOutcome::Interrupted => {
            println!();
            print_messages(&[CmdMessage::warning("Input closed, changes were not saved")]);
        }
    }
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let closet = load_closet(ctx);
    print_garments(closet.garments());
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, ctx.config.get(key)?);
            }
        }
        (Some(key), None) => match ctx.config.get(&key) {
            Ok(value) => println!("{} = {}", key, value),
            Err(e) => print_messages(&[CmdMessage::error(e.to_string())]),
        },
        (Some(key), Some(value)) => match ctx.config.set(&key, &value) {
            Ok(()) => {
                ctx.config.save(&ctx.data_dir)?;
                print_messages(&[CmdMessage::success(format!(
                    "{} set to {}",
                    key,
                    ctx.config.get(&key)?
                ))]);
            }
            Err(e) => print_messages(&[CmdMessage::error(e.to_string())]),
        },
    }
    Ok(())
}
