use strum::Display;

use crate::{
    constants::game,
    game::{bird::Bird, pipe::Pipe},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameState {
    #[default]
    Running,
    Failed,
}

/// Playable area in cells, excluding the border drawn around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: u16, height: u16) -> Self {
        Bounds { width: width.into(), height: height.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    pub bounds: Bounds,
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub state: GameState,
}

impl World {
    pub fn new(bounds: Bounds) -> Self {
        let bird = Bird::new(bounds.width * game::BIRD_X_TENTHS / 10, bounds.height * game::BIRD_Y_TENTHS / 10);
        World { bounds, bird, pipes: Vec::new(), score: 0, state: GameState::Running }
    }

    /// The most recently spawned pipe, which decides when the next pair enters.
    pub fn leading_pipe(&self) -> Option<&Pipe> {
        self.pipes.last()
    }

    pub fn push_pair(&mut self, (upper, lower): (Pipe, Pipe)) {
        self.pipes.push(upper);
        self.pipes.push(lower);
    }

    pub fn bird_out_of_bounds(&self) -> bool {
        let y = self.bird.y();
        (y - self.bounds.height).abs() <= 1 || y <= 0
    }
}
