//! # PointClick Engine
//!
//! Headless driver for the PointClick inventory subsystem.
//!
//! Loads the engine configuration, game data and a recorded input session,
//! replays the session through the legacy inventory screen and prints the
//! result.
//!
//! Usage: `pointclick [CONFIG]`, or `pointclick --write-config [CONFIG]`
//! to write the default configuration. See `pointclick --help`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod args;
mod config;
mod game_state;
mod host;
mod session;

use anyhow::{Context, Result};
use clap::Parser as _;
use pointclick_common::{ItemId, Size};
use pointclick_gui::{
    open_inventory_screen, CharacterInventories, InvWindowScript, InventoryWindow, RedrawFlag, ScreenLifecycle,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::args::EngineArgs;
use crate::config::EngineConfig;
use crate::game_state::{GameData, GameState};
use crate::host::HeadlessHost;
use crate::session::{Session, SessionPlayer};

/// Main entry point.
fn main() -> Result<()> {
    let args = EngineArgs::parse();
    let config_path = args.config;

    if args.write_config {
        EngineConfig::default()
            .save_to(&config_path)
            .with_context(|| format!("writing {}", config_path.display()))?;
        println!("Wrote default configuration to {}", config_path.display());
        return Ok(());
    }

    let config = EngineConfig::load_from(&config_path);

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(config.env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())?)
        .init();

    info!("PointClick starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let data_path = EngineConfig::resolve(&config_path, &config.game_data);
    let data = GameData::load_from(&data_path)
        .with_context(|| format!("loading game data from {}", data_path.display()))?;
    let state = GameState::new(data)?;

    let session_path = EngineConfig::resolve(&config_path, &config.session);
    let session = Session::load_from(&session_path)
        .with_context(|| format!("loading session from {}", session_path.display()))?;

    let lifecycle = ScreenLifecycle::new();
    let redraw = RedrawFlag::new();
    let mut host = HeadlessHost::new(state, SessionPlayer::new(session), lifecycle.clone());
    let viewport = Size::new(config.viewport_width, config.viewport_height);

    let selected = open_inventory_screen(&mut host, &lifecycle, &redraw, &config.screen, viewport)?;

    for line in host.transcript() {
        println!("{line}");
    }
    println!("Selected item: {selected}");
    println!("Frames played: {}", host.frames());
    if let Some(room) = host.room() {
        println!("Current room: {}", room.raw());
    }

    // Inventory bar as a game GUI would show it after the screen closes.
    let mut window = InventoryWindow::new(Size::new(160, 44), redraw.clone());
    let bar = InvWindowScript::new(&mut window, &host);
    let shown: Vec<String> = (0..bar.items_per_row() * bar.row_count())
        .map_while(|index| ItemId::from_script(bar.item_at_index(index)))
        .map(|item| item.raw().to_string())
        .collect();
    println!(
        "Inventory: {} items, showing [{}]",
        bar.item_count(),
        shown.join(", ")
    );
    let state = host.state();
    if let Some(active) = state.active_item(state.player()) {
        println!("Active item: {}", active.raw());
    }

    info!(
        redraw = redraw.take(),
        cursor = ?host.cursor(),
        screen_cleared = host.last_frame().is_none(),
        "PointClick shutdown complete"
    );
    Ok(())
}
