/// Anything occupying a single column of the board, spanning `height` rows below its top cell.
pub trait Object {
    fn get_pos(&self) -> (i32, i32);

    /// Extra rows covered below the top cell. A height of zero covers exactly one cell.
    fn get_height(&self) -> i32 {
        0
    }

    fn covers(&self, x: i32, y: i32) -> bool {
        let (self_x, self_y) = self.get_pos();
        x == self_x && interval_sec(y, y, self_y, self_y + self.get_height())
    }

    /// Horizontal proximity of one column either side plus any vertical overlap.
    fn collides_with<T: Object>(&self, other: &T) -> bool {
        let (self_x, self_bottom) = self.get_pos();
        let (other_x, other_bottom) = other.get_pos();

        let self_top = self_bottom + self.get_height();
        let other_top = other_bottom + other.get_height();

        (self_x - other_x).abs() <= 1 && interval_sec(self_bottom, self_top, other_bottom, other_top)
    }

    fn aligned_with<T: Object>(&self, other: &T) -> bool {
        self.get_pos().0 == other.get_pos().0
    }
}

fn interval_sec(l1: i32, r1: i32, l2: i32, r2: i32) -> bool {
    !(r1 < l2 || l1 > r2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{bird::Bird, pipe::Pipe};

    #[test]
    fn test_covers_is_inclusive() {
        let pipe = Pipe::new(4, 2, 3);
        assert!(!pipe.covers(4, 1));
        assert!(pipe.covers(4, 2));
        assert!(pipe.covers(4, 5));
        assert!(!pipe.covers(4, 6));
        assert!(!pipe.covers(3, 3));
    }

    #[test]
    fn test_collides_within_one_column() {
        let pipe = Pipe::new(10, 0, 4);
        assert!(Bird::new(9, 4).collides_with(&pipe));
        assert!(Bird::new(10, 0).collides_with(&pipe));
        assert!(Bird::new(11, 2).collides_with(&pipe));
        assert!(!Bird::new(12, 2).collides_with(&pipe));
        assert!(!Bird::new(10, 5).collides_with(&pipe));
    }

    #[test]
    fn test_aligned_with() {
        let bird = Bird::new(3, 7);
        assert!(bird.aligned_with(&Pipe::new(3, 0, 1)));
        assert!(!bird.aligned_with(&Pipe::new(4, 0, 1)));
    }
}
