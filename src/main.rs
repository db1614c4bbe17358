use anyhow::Context;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dotenv::dotenv;
use mosdac_chat::{
    config,
    constants::TICK_RATE_MS,
    event::{AppEvent, EventReceiver, EventSender},
    key_handlers::handle_key,
    logging, ui, voice, App,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = config::initialize_config().context("failed to load configuration")?;
    let _logger = logging::init_logging(&config).context("failed to start logging")?;

    let (tx, rx) = mosdac_chat::event::channel();
    let recognizer = voice::recognizer_from_command(config.voice_command.as_deref());
    let app = App::new(&config, recognizer, tx.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    spawn_input_reader(tx);
    let res = run_app(&mut terminal, app, rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        log::error!("Exited with error: {:?}", err);
    }
    log::info!("Shutting down");
    res
}

/// Polls crossterm on a blocking thread and forwards input plus a steady tick.
fn spawn_input_reader(tx: EventSender) {
    tokio::task::spawn_blocking(move || {
        let tick_rate = Duration::from_millis(TICK_RATE_MS);
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if tx.send(AppEvent::Input(ev)).is_err() {
                            return;
                        }
                    }
                    Err(e) => log::warn!("Failed to read terminal event: {}", e),
                },
                Ok(false) => {}
                Err(e) => {
                    log::error!("Terminal event polling failed: {}", e);
                    return;
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(AppEvent::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });
}

/// Main loop of the application.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut rx: EventReceiver,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        let Some(event) = rx.recv().await else {
            break;
        };
        match event {
            AppEvent::Input(CEvent::Key(key)) => handle_key(key, &mut app),
            AppEvent::Input(_) => {}
            other => app.handle_event(other),
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
