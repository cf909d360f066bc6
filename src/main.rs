use std::io;
use std::sync::Arc;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use larek::api::StoreApi;
use larek::app::handlers::wire_events;
use larek::app::{App, AppMessage};
use larek::config::StoreConfig;
use larek::events::EventBus;
use larek::{input, terminal, ui};

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = StoreConfig::from_env();
    init_logging(&config)?;

    // The hook must be in place before the alternate screen is entered.
    terminal::setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let client = Arc::new(StoreApi::new(&config));
    let mut app = App::new(Arc::clone(&client));

    let bus = EventBus::new();
    wire_events(&bus);

    // Kick off the catalog fetch before the first frame; the result
    // arrives through the message channel.
    let tx = app.message_tx.clone();
    runtime.spawn(async move {
        let message = match client.get_product_list().await {
            Ok(items) => AppMessage::CatalogLoaded(items),
            Err(err) => AppMessage::CatalogFailed(err.to_string()),
        };
        let _ = tx.send(message);
    });

    let mut terminal = terminal::init()?;
    let result = runtime.block_on(run_app(&mut terminal, &mut app, &bus));
    terminal::restore();
    result
}

/// File logging, enabled only when a log path is configured. The TUI
/// owns stdout, so there is no console layer.
fn init_logging(config: &StoreConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    bus: &EventBus<App>,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    // Take ownership of the receiver for select!.
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => {
                        let events = input::handle_key(app, key);
                        bus.emit_all(events, app);
                    }
                    // Resize redraws on the next loop iteration.
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "terminal event stream error");
                    }
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg, bus);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
