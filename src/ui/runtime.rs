use crate::config::Config;
use crate::generation::DeckGenerator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::run_command_worker;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const COMMAND_CHANNEL_CAPACITY: usize = 16;

/// Run the TUI until the user quits.
///
/// Generation runs on a tokio runtime owned by this function; the render
/// loop itself stays on the calling thread.
pub fn run(
    config: Config,
    generator: Arc<dyn DeckGenerator>,
    initial_topic: Option<String>,
) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("swipefacts-worker")
        .build()?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
    runtime.spawn(run_command_worker(command_rx, generator, events.sender()));

    let mut app = App::new(config.ui.clone());
    app.set_command_sender(command_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    if let Some(topic) = initial_topic {
        if let Some(input) = app.topic_mut() {
            input.set(&topic);
        }
        app.submit_topic();
    }

    tracing::info!("SwipeFacts started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::DeckGenerated { request, result }) => {
                app.on_deck_generated(request, result)
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("SwipeFacts shutting down");
    drop(guard);
    runtime.shutdown_background();
    Ok(())
}
