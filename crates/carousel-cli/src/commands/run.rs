use std::io::{self, Stdout};
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;

use carousel_core::AppConfig;
use carousel_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    keymap::Keymap,
    transition::TransitionConfigExt,
    widgets::{ControlsWidget, PagerWidget, StatusBarWidget, TrackWidget},
};

pub fn run(config: AppConfig) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Carousel"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config, &keymap);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: AppConfig,
    keymap: &Keymap,
) -> Result<()> {
    let event_handler = EventHandler::new(
        config.ui.tick_rate_ms,
        config.ui.transition.frame_duration(),
    );

    let mut app = App::new(config);
    let size = terminal.size()?;
    app.resize(Rect::new(0, 0, size.width, size.height), Instant::now());
    info!(width = size.width, height = size.height, "terminal carousel started");

    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| {
            TrackWidget::render(frame, &app);
            ControlsWidget::render(frame, &app);
            PagerWidget::render(frame, &app);
            StatusBarWidget::render(frame, app.layout.status, &app);
        })?;

        // The initial snap waits for the first laid-out frame
        app.after_frame(Instant::now());

        if let Some(event) = event_handler.next(app.needs_fast_tick())? {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, keymap);
                    app.dispatch(action, now);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, &app);
                    app.dispatch(action, now);
                }
                AppEvent::Resize(w, h) => app.resize(Rect::new(0, 0, w, h), now),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    info!("terminal carousel stopped");
    Ok(())
}
