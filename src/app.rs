use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use crate::{
    action::Action,
    components::board::Board,
    config::Config,
    game::Engine,
    tui::{self, Event},
};

pub struct App {
    config: Config,
    engine: Engine,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let engine = Engine::new(config.bounds);
        Self { config, engine, should_quit: false }
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = tui::Tui::new()?;
        tui.tick_interval(self.config.tick_interval);
        tui.enter()?;

        loop {
            if let Some(e) = tui.next().await {
                if let Some(action) = self.handle_event(e) {
                    action_tx.send(action)?;
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    log::debug!("{action:?}");
                }
                match &action {
                    Action::Quit => self.should_quit = true,
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, *w, *h))?;
                        self.render(&mut tui)?;
                    },
                    Action::Render => {
                        self.render(&mut tui)?;
                    },
                    Action::Error(msg) => tracing::error!("{msg}"),
                    _ => {},
                }
                if let Some(action) = self.engine.update(&action) {
                    action_tx.send(action)?
                }
            }

            if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    /// Maps a terminal event to an action. Unbound keys map to nothing.
    fn handle_event(&self, event: Event) -> Option<Action> {
        match event {
            Event::Init => Some(Action::Render),
            Event::Tick => Some(Action::Tick),
            Event::Resize(x, y) => Some(Action::Resize(x, y)),
            Event::Key(key) => self.config.keybindings.get(&key).cloned(),
            Event::Error => Some(Action::Error("Failed to read terminal event".to_string())),
            Event::Closed => Some(Action::Quit),
        }
    }

    fn render(&mut self, tui: &mut tui::Tui) -> Result<()> {
        tui.draw(|f| {
            f.render_widget(Board::new(self.engine.world()), f.area());
        })?;
        Ok(())
    }
}
