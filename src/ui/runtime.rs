use crate::config::Config;
use crate::ui::app::App;
use crate::ui::boundary::install_panic_capture;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    // Chains the terminal hook, so it must come second.
    install_panic_capture();

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate);
    let mut last_tick = Instant::now();
    tracing::info!(
        tick_rate_ms = config.ui.tick_rate_ms,
        dev_mode = app.dev_mode(),
        reduced_motion = app.reduced_motion(),
        "ui started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::Tick) => {
                let now = Instant::now();
                app.on_tick(now.duration_since(last_tick));
                last_tick = now;
            }
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("ui stopped");
    Ok(())
}
