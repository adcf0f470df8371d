//! Demo entry point: the field item menu over a sample party.
use anyhow::Result;
use menu_core::{MenuConfig, Party, PartyMember, Rect, ResourceMeter};

use menu_cli::presentation::terminal::{self, TerminalGuard};
use menu_cli::presentation::widgets::field::FieldBackdrop;
use menu_cli::input::CrosstermInput;
use menu_cli::{CliConfig, FrameClock, ItemMenuScreen, ScreenContext, StatusBar, catalog};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // The TUI owns stdout, so logs go to a file.
    let appender = tracing_appender::rolling::daily("logs", "fieldmenu.log");
    let (writer, _log_guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let config = CliConfig::from_env();

    let entries = match config.catalog_path.as_deref() {
        Some(path) => catalog::load(path)?,
        None => catalog::builtin(),
    };

    let mut party = Party::with_members(vec![
        PartyMember::new("Aeris", ResourceMeter::new(18, 40), ResourceMeter::new(4, 12)),
        PartyMember::new("Brand", ResourceMeter::new(31, 55), ResourceMeter::full(6)),
        PartyMember::new("Caro", ResourceMeter::full(24), ResourceMeter::new(2, 20)),
    ]);
    for entry in entries {
        let name = entry.item.name.clone();
        if let Err(err) = party.inventory.add(entry.item, entry.quantity) {
            tracing::warn!(item = %name, %err, "skipping catalog entry");
        }
    }

    let mut terminal = terminal::init()?;
    let _guard = TerminalGuard;

    let size = terminal.size()?;
    let mut status_bar = StatusBar::new(config.ui.status_bar_width);
    let mut menu = ItemMenuScreen::new(MenuConfig::new());
    let mut clock = FrameClock::new(config.ui.frames_per_second);
    let mut input = CrosstermInput;
    let world = FieldBackdrop;

    {
        let mut ctx = ScreenContext {
            party: &mut party,
            status_bar: &mut status_bar,
            screen: Rect::new(0, 0, size.width, size.height),
        };

        menu.start_show(&mut ctx);
        menu.execute(&mut ctx, &mut input, &world, &mut terminal, &mut clock)?;
        menu.start_hide(ctx.screen);
        menu.drain_transitions(&mut ctx, &world, &mut terminal, &mut clock)?;
    }

    terminal::restore()?;
    tracing::info!(stacks_left = party.inventory.len(), "field menu session over");

    Ok(())
}
