use strum::{Display, EnumString};

#[derive(Debug, Clone, PartialEq, Eq, Display, EnumString)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Error(String),
    // Game actions
    Jump,
    Restart,
}
