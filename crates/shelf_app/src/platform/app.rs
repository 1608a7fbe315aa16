use std::io;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use shelf_core::{update, AppState, Msg};
use shelf_logging::{shelf_info, shelf_warn};

use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::logging;
use super::ui;
use super::ui::input::KeyAction;

pub fn run_app() -> anyhow::Result<()> {
    let path = config::config_path(std::env::args());
    let loaded = config::load_config(&path);
    let app_config = match &loaded {
        Ok(Some(found)) => found.clone(),
        Ok(None) | Err(_) => AppConfig::default(),
    };

    logging::initialize(app_config.log_destination, app_config.level());
    match loaded {
        Ok(Some(_)) => shelf_info!("Loaded config from {:?}", path),
        Ok(None) => shelf_info!("No config at {:?}; using defaults", path),
        Err(err) => shelf_warn!("{}; using defaults", err),
    }
    if app_config.api_key().is_none() {
        shelf_warn!("No catalog API key configured; requests may be rejected");
    }

    let runner = EffectRunner::new(app_config.catalog_settings())
        .context("failed to start catalog engine")?;
    let state = AppState::with_credentials(app_config.api_key().is_some());

    let mut terminal = ratatui::init();
    let result = EventLoop::new(state, runner).run(&mut terminal);
    ratatui::restore();
    shelf_info!("Shutting down");
    result.context("terminal event loop failed")
}

struct EventLoop {
    state: AppState,
    runner: EffectRunner,
    redraw: bool,
}

impl EventLoop {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self {
            state,
            runner,
            redraw: true,
        }
    }

    fn run(mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        loop {
            for msg in self.runner.poll() {
                self.dispatch_msg(msg);
            }

            if self.state.consume_dirty() || std::mem::take(&mut self.redraw) {
                let view = self.state.view();
                terminal.draw(|frame| ui::render::render(frame, &view))?;
            }

            if !event::poll(ui::constants::TICK)? {
                self.dispatch_msg(Msg::Tick);
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match ui::input::map_key(key, &self.state.view()) {
                        KeyAction::Dispatch(msg) => self.dispatch_msg(msg),
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Ignore => {}
                    }
                }
                Event::Resize(..) => self.redraw = true,
                _ => {}
            }
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);
    }
}
