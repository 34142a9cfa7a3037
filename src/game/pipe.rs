use crate::{constants::game, game::object::Object};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe {
    x: i32,
    y: i32,
    height: i32,
}

impl Pipe {
    pub fn new(x: i32, y: i32, height: i32) -> Self {
        Pipe { x, y, height }
    }

    /// Builds the top and bottom pipes entering at the right edge of a `width` x `height` board.
    ///
    /// `height_tenths` is the share of the board taken by the top pipe; the gap below it is always
    /// [`game::PIPE_GAP_TENTHS`] of the board. Every extent is truncated on its own, so the bottom pipe
    /// starts at `height * (height_tenths + gap) / 10`.
    pub fn pair(width: i32, height: i32, height_tenths: i32) -> (Pipe, Pipe) {
        let gap_end = height_tenths + game::PIPE_GAP_TENTHS;
        let upper = Pipe::new(width, 0, height * height_tenths / 10);
        let lower = Pipe::new(width, height * gap_end / 10, height * (10 - gap_end) / 10);
        (upper, lower)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Only the top pipe of a pair counts towards the score.
    pub fn is_top(&self) -> bool {
        self.y == 0
    }

    pub fn move_left(&mut self, step: i32) {
        self.x -= step;
    }

    pub fn visible(&self) -> bool {
        self.x >= 0
    }
}

impl Object for Pipe {
    fn get_pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn get_height(&self) -> i32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_pair_leaves_a_fifth_of_the_board_open() {
        for tenths in game::PIPE_HEIGHT_TENTHS {
            let (upper, lower) = Pipe::pair(100, 20, tenths);
            assert_eq!(upper, Pipe::new(100, 0, 2 * tenths));
            assert_eq!(lower.x(), 100);
            assert_eq!(lower.y(), upper.height() + 4);
            assert_eq!(lower.y() + lower.height(), 20);
        }
    }

    #[test]
    fn test_pair_truncates_each_extent() {
        let (upper, lower) = Pipe::pair(30, 15, 3);
        // 4.5 -> 4, 7.5 -> 7, 7.5 -> 7
        assert_eq!(upper, Pipe::new(30, 0, 4));
        assert_eq!(lower, Pipe::new(30, 7, 7));
    }

    #[test]
    fn test_is_top() {
        let (upper, lower) = Pipe::pair(10, 10, 1);
        assert!(upper.is_top());
        assert!(!lower.is_top());
    }

    #[test]
    fn test_visible_until_past_left_edge() {
        let mut pipe = Pipe::new(1, 0, 2);
        pipe.move_left(1);
        assert!(pipe.visible());
        pipe.move_left(1);
        assert!(!pipe.visible());
    }
}
