use mushaf::adapters::{ReqwestHttpClient, ThreadRngSource};
use mushaf::api::QuranClient;
use mushaf::app::{App, AppMessage};
use mushaf::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let client = QuranClient::new(Arc::new(ReqwestHttpClient::new()));
    let mut app = App::new(client, Box::new(ThreadRngSource::new()));

    let result = runtime.block_on(async {
        // Initial load on startup, then hand over to the event loop.
        app.load_random_page();
        run_app(&mut terminal, &mut app).await
    });

    restore_terminal(&mut terminal)?;

    result
}

/// Route tracing output to a file so it never draws over the TUI.
fn init_tracing() {
    let path = std::env::temp_dir().join("mushaf.log");
    if let Ok(file) = std::fs::File::create(&path) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("mushaf=debug"))
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .try_init();
    }
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
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
        // Draw only when needed (dirty flag, or spinner animation while loading)
        if app.needs_redraw || app.loading {
            terminal.draw(|frame| {
                ui::render(frame, app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(100));

        tokio::select! {
            // Tick for the loading spinner
            _ = timeout => {
                app.tick();
            }

            // Keyboard events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            match key.code {
                                KeyCode::Char('c')
                                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                                {
                                    app.quit();
                                }
                                KeyCode::Char('q') | KeyCode::Esc => {
                                    app.quit();
                                }
                                // Ignored while a load is in flight; the
                                // workflow guard inside the app enforces it.
                                KeyCode::Char('r') | KeyCode::Enter => {
                                    app.load_random_page();
                                }
                                _ => {}
                            }
                        }
                        _ => {}
                    }
                }
            }

            // Results from spawned fetch tasks
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
            return Ok(());
        }
    }
}
