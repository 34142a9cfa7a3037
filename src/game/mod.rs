mod bird;
mod dice;
mod object;
mod pipe;
mod world;

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

pub use crate::game::{
    bird::Bird,
    dice::Dice,
    object::Object,
    pipe::Pipe,
    world::{Bounds, GameState, World},
};
use crate::{action::Action, constants::game};

/// Owns one game session and advances it one fixed step per tick.
///
/// The engine is armed by [`Engine::start`] and disarmed by a crash or by [`Engine::stop`]. While disarmed
/// [`Engine::tick`] leaves the world untouched, so a timer may keep firing without any bookkeeping on the
/// caller's side.
pub struct Engine<D: Dice = StdRng> {
    world: World,
    dice: D,
    armed: bool,
    stopped: bool,
}

impl Engine {
    pub fn new(bounds: Bounds) -> Self {
        Self::with_dice(bounds, StdRng::from_entropy())
    }
}

impl<D: Dice> Engine<D> {
    pub fn with_dice(bounds: Bounds, dice: D) -> Self {
        let mut engine = Engine { world: World::new(bounds), dice, armed: false, stopped: false };
        engine.start();
        engine
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn state(&self) -> GameState {
        self.world.state
    }

    pub fn is_ticking(&self) -> bool {
        self.armed
    }

    /// Resets the bird, pipes and score and arms the tick. Does nothing once stopped.
    pub fn start(&mut self) {
        if self.stopped {
            return;
        }
        self.world = World::new(self.world.bounds);
        self.armed = true;
        info!(width = self.world.bounds.width, height = self.world.bounds.height, "session started");
    }

    /// Advances the world by one step. Returns whether anything ran, in which case a render is due.
    pub fn tick(&mut self) -> bool {
        if !self.armed || self.world.state != GameState::Running {
            return false;
        }

        self.spawn_pipes();

        self.world.bird.fall(game::GRAVITY);
        if self.world.bird_out_of_bounds() {
            self.fail("out of bounds");
        }

        self.advance_pipes();

        self.world.pipes.retain(Pipe::visible);

        true
    }

    pub fn jump(&mut self) {
        if self.world.state == GameState::Running {
            self.world.bird.up(game::JUMP_HEIGHT);
        }
    }

    pub fn restart(&mut self) {
        if self.world.state == GameState::Failed {
            info!(score = self.world.score, "restarting");
            self.start();
        }
    }

    pub fn stop(&mut self) {
        if !self.stopped {
            info!(score = self.world.score, "session stopped");
        }
        self.armed = false;
        self.stopped = true;
    }

    /// Applies an input or timer action, returning a follow-up action for the event loop.
    pub fn update(&mut self, action: &Action) -> Option<Action> {
        match action {
            Action::Tick => {
                if self.tick() {
                    return Some(Action::Render);
                }
            },
            Action::Jump => self.jump(),
            Action::Restart if self.world.state == GameState::Failed => {
                self.restart();
                return Some(Action::Render);
            },
            Action::Quit => self.stop(),
            _ => {},
        }
        None
    }

    fn fail(&mut self, reason: &str) {
        if self.world.state == GameState::Failed {
            return;
        }
        info!(reason, score = self.world.score, "bird crashed");
        self.world.state = GameState::Failed;
        self.armed = false;
    }

    fn spawn_pipes(&mut self) {
        let Bounds { width, height } = self.world.bounds;

        let should_spawn = match self.world.leading_pipe().map(Pipe::x) {
            None => true,
            Some(x) => x * 10 < width * self.dice.pipe_spacing_tenths(),
        };

        if should_spawn {
            let height_tenths = self.dice.pipe_height_tenths();
            debug!(height_tenths, "spawning pipe pair");
            self.world.push_pair(Pipe::pair(width, height, height_tenths));
        }
    }

    fn advance_pipes(&mut self) {
        let bird = self.world.bird;
        let mut passed = 0;
        let mut crashed = false;

        for pipe in self.world.pipes.iter_mut() {
            pipe.move_left(game::PIPE_VELOCITY);

            if bird.collides_with(&*pipe) {
                crashed = true;
                break;
            }

            if pipe.is_top() && bird.aligned_with(&*pipe) {
                passed += 1;
            }
        }

        self.world.score += passed;
        if crashed {
            self.fail("hit a pipe");
        }
    }
}
