/// Discrete player requests delivered to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    /// Start a new session, abandoning any current one.
    Start,
    Quit,
}

