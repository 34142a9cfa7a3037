use crate::game::object::Object;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bird {
    x: i32,
    y: i32,
}

impl Bird {
    pub fn new(x: i32, y: i32) -> Self {
        Bird { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn fall(&mut self, gravity: i32) {
        self.y += gravity;
    }

    // Not clamped: the next tick's bounds check catches a jump through the ceiling.
    pub fn up(&mut self, height: i32) {
        self.y -= height;
    }
}

impl Object for Bird {
    fn get_pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
