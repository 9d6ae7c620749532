use std::io;
use std::sync::Arc;

use studio::adapters::{FileCredentialsProvider, ReqwestHttpClient};
use studio::api::ApiClient;
use studio::app::{App, AppMessage, Screen};
use studio::cli::{parse_args, run_cli_command, CliCommand, TuiOptions};
use studio::config::StudioConfig;
use studio::{logging, ui};

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{info, warn};

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    let mut config = StudioConfig::from_env();
    if let Some(result) = run_cli_command(&command, &config) {
        return result;
    }
    let options = match command {
        CliCommand::RunTui(options) => options,
        _ => TuiOptions::default(),
    };
    if let Some(base_url) = &options.base_url {
        config = config.with_api_base_url(base_url.clone());
    }
    if let Err(err) = config.validate() {
        return Err(eyre!("{}\n{}", err, err.recovery_hint()));
    }

    if logging::init(&config.log_path()) {
        for warning in &config.warnings {
            warn!("{}", warning);
        }
        info!(
            base_url = %config.api_base_url,
            request_timeout_secs = config.request_timeout.as_secs(),
            generation_timeout_secs = config.generation_timeout.as_secs(),
            "Starting studio"
        );
    }

    let runtime = tokio::runtime::Runtime::new()?;

    let client = ApiClient::from_config(
        &config,
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(FileCredentialsProvider::in_dir(&config.data_dir)),
    );
    let mut app = App::new(client, &config);

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let size = terminal.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    runtime.block_on(async {
        if options.start_on_history {
            app.navigate_to(Screen::History);
        }
        if options.project_id.is_some() {
            app.open_project(options.project_id.as_deref());
        }
    });

    // Main event loop
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;
    info!("Exiting studio");

    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen, Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        // 16ms tick drives the spinners
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.mark_dirty();
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.mark_dirty();
                        app.handle_paste(&text);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!("Terminal event error: {}", e);
                    }
                    None => break,
                }
            }

            // Results of spawned network calls
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
