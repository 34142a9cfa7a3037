use std::ops::RangeInclusive;

use ratatui::style::Color;

pub const DEFAULT_WIDTH: u16 = 100;
pub const DEFAULT_HEIGHT: u16 = 20;
pub const DEFAULT_FPS: u32 = 10;
pub const MAX_FPS: u32 = 1000;

pub const GRAVITY: i32 = 1;
pub const JUMP_HEIGHT: i32 = 2;
pub const PIPE_VELOCITY: i32 = 1;

// Fractions below are in tenths of the board width or height.
pub const BIRD_X_TENTHS: i32 = 3;
pub const BIRD_Y_TENTHS: i32 = 5;
pub const PIPE_GAP_TENTHS: i32 = 2;
pub const PIPE_HEIGHT_TENTHS: RangeInclusive<i32> = 1..=7;
pub const PIPE_SPACING_TENTHS: RangeInclusive<i32> = 6..=8;

pub const BORDER_GLYPH: char = '*';
pub const BIRD_GLYPH: char = '>';
pub const PIPE_GLYPH: char = '|';
pub const EMPTY_GLYPH: char = ' ';

pub const BORDER_COLOR: Option<Color> = Some(Color::Gray);
pub const BIRD_COLOR: Option<Color> = Some(Color::Yellow);
pub const PIPE_COLOR: Option<Color> = Some(Color::LightGreen);
pub const BANNER_COLOR: Option<Color> = Some(Color::Red);

pub const GAME_OVER_TEXT: &str = "Game Over!";
pub const RESTART_TEXT: &str = "Press R to Restart.";
