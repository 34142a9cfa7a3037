use std::cmp::Ordering;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::{
    constants::game,
    game::{GameState, Object, World},
};

/// Text frame for `world`: the bordered grid, one row per line, then the score and the crash banner.
///
/// The grid spans columns `-1..=width` and rows `-1..=height`; the outermost ring is the border.
pub fn compose(world: &World) -> Vec<String> {
    let (width, height) = (world.bounds.width, world.bounds.height);
    let mut lines: Vec<String> = (-1..=height)
        .map(|y| (-1..=width).map(|x| glyph_at(world, x, y, width, height)).collect())
        .collect();

    lines.push(format!("Score: {}", world.score));
    if world.state == GameState::Failed {
        lines.push(game::GAME_OVER_TEXT.to_string());
        lines.push(game::RESTART_TEXT.to_string());
    }
    lines
}

fn glyph_at(world: &World, x: i32, y: i32, width: i32, height: i32) -> char {
    if x == -1 || x == width || y == -1 || y == height {
        game::BORDER_GLYPH
    } else if world.bird.get_pos() == (x, y) {
        game::BIRD_GLYPH
    } else if world.pipes.iter().any(|pipe| pipe.covers(x, y)) {
        game::PIPE_GLYPH
    } else {
        game::EMPTY_GLYPH
    }
}

fn glyph_style(glyph: char) -> Style {
    let color = match glyph {
        game::BORDER_GLYPH => game::BORDER_COLOR,
        game::BIRD_GLYPH => game::BIRD_COLOR,
        game::PIPE_GLYPH => game::PIPE_COLOR,
        _ => None,
    };
    color.map(|color| Style::default().fg(color)).unwrap_or_default()
}

fn grid_line(row: &str) -> Line<'static> {
    let glyphs: Vec<char> = row.chars().collect();
    glyphs
        .chunk_by(|a, b| a == b)
        .map(|run| Span::styled(run.iter().collect::<String>(), glyph_style(run[0])))
        .collect()
}

/// Full-redraw widget for the game board, anchored at the top left of its area.
pub struct Board<'a> {
    world: &'a World,
}

impl<'a> Board<'a> {
    pub fn new(world: &'a World) -> Self {
        Self { world }
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid_rows = (self.world.bounds.height + 2) as usize;
        let banner_style = game::BANNER_COLOR
            .map(|color| Style::default().fg(color).add_modifier(Modifier::BOLD))
            .unwrap_or_default();

        let lines: Vec<Line> = compose(self.world)
            .into_iter()
            .enumerate()
            .map(|(index, line)| match index.cmp(&grid_rows) {
                Ordering::Less => grid_line(&line),
                Ordering::Equal => Line::from(line),
                Ordering::Greater => Line::styled(line, banner_style),
            })
            .collect();

        Clear.render(area, buf);
        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;

    use super::*;
    use crate::game::{Bird, Bounds, Pipe};

    fn world() -> World {
        let mut world = World::new(Bounds::new(6, 4));
        world.bird = Bird::new(1, 2);
        world.pipes = vec![Pipe::new(4, 0, 1), Pipe::new(4, 3, 1)];
        world.score = 2;
        world
    }

    #[test]
    fn test_compose_running() {
        assert_snapshot!(compose(&world()).join("\n"), @r"
        ********
        *    | *
        *    | *
        * >    *
        *    | *
        ********
        Score: 2
        ");
    }

    #[test]
    fn test_compose_failed_shows_banner() {
        let mut world = world();
        world.state = GameState::Failed;
        let lines = compose(&world);
        assert_eq!(lines.len(), 6 + 3);
        assert_eq!(&lines[6..], ["Score: 2", "Game Over!", "Press R to Restart."]);
    }

    #[test]
    fn test_border_wins_over_bird_and_pipes() {
        let mut world = World::new(Bounds::new(3, 3));
        world.bird = Bird::new(-1, 1);
        world.pipes = vec![Pipe::new(3, 0, 3), Pipe::new(1, 2, 5)];
        assert_eq!(compose(&world)[..5], ["*****", "*   *", "*   *", "* | *", "*****"].map(String::from));
    }

    #[test]
    fn test_bird_drawn_over_pipe() {
        let mut world = World::new(Bounds::new(3, 3));
        world.bird = Bird::new(1, 1);
        world.pipes = vec![Pipe::new(1, 0, 2)];
        assert_eq!(compose(&world)[1..4], ["* | *", "* > *", "* | *"].map(String::from));
    }

    #[test]
    fn test_frame_size() {
        let world = World::new(Bounds::new(100, 20));
        let lines = compose(&world);
        assert_eq!(lines.len(), 22 + 1);
        assert!(lines[..22].iter().all(|line| line.chars().count() == 102));
    }

    #[test]
    fn test_render_into_buffer() {
        let area = Rect::new(0, 0, 10, 8);
        let mut buf = Buffer::empty(area);
        let mut world = world();
        world.state = GameState::Failed;
        Board::new(&world).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "*");
        assert_eq!(buf[(0, 0)].fg, Color::Gray);
        assert_eq!(buf[(2, 3)].symbol(), ">");
        assert_eq!(buf[(2, 3)].fg, Color::Yellow);
        assert_eq!(buf[(5, 1)].symbol(), "|");
        assert_eq!(buf[(5, 1)].fg, Color::LightGreen);
        assert_eq!(buf[(3, 3)].symbol(), " ");
        assert_eq!(buf[(0, 6)].symbol(), "S");
        assert_eq!(buf[(0, 7)].symbol(), "G");
        assert_eq!(buf[(0, 7)].fg, Color::Red);
        // Clipped to the area
        assert_eq!(buf[(9, 0)].symbol(), " ");
    }
}
