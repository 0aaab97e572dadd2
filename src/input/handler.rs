use crossterm::event::{KeyCode, KeyEventKind};
use log::debug;

use crate::game::Game;
use crate::input::command::Command;

pub fn command_for_key(key_code: KeyCode) -> Option<Command> {
    match key_code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Up => Some(Command::Rotate),
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Start),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

/// Apply a command to the game. Piece commands outside active play are
/// silently dropped by the game itself; `Quit` is left to the caller.
pub fn handle_command(game: &mut Game, command: Command) {
    match command {
        Command::MoveLeft => {
            game.move_piece(-1);
        }
        Command::MoveRight => {
            game.move_piece(1);
        }
        Command::SoftDrop => game.soft_drop(),
        Command::Rotate => {
            game.rotate_piece();
        }
        Command::Start => game.start(),
        Command::Quit => {}
    }
}

/// Translate a key event and apply it. Releases are ignored, held keys
/// repeat through the terminal's own key repeat.
pub fn handle_input(game: &mut Game, key_code: KeyCode, kind: KeyEventKind) -> Option<Command> {
    match kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {
            let command = command_for_key(key_code)?;
            debug!("key {:?} -> {:?}", key_code, command);
            handle_command(game, command);
            Some(command)
        }
        KeyEventKind::Release => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, PieceType};

    #[test]
    fn arrow_keys_map_to_piece_commands() {
        assert_eq!(command_for_key(KeyCode::Left), Some(Command::MoveLeft));
        assert_eq!(command_for_key(KeyCode::Right), Some(Command::MoveRight));
        assert_eq!(command_for_key(KeyCode::Down), Some(Command::SoftDrop));
        assert_eq!(command_for_key(KeyCode::Up), Some(Command::Rotate));
    }

    #[test]
    fn session_keys() {
        assert_eq!(command_for_key(KeyCode::Enter), Some(Command::Start));
        assert_eq!(command_for_key(KeyCode::Char('r')), Some(Command::Start));
        assert_eq!(command_for_key(KeyCode::Char('R')), Some(Command::Start));
        assert_eq!(command_for_key(KeyCode::Char('q')), Some(Command::Quit));
        assert_eq!(command_for_key(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(command_for_key(KeyCode::Char('x')), None);
        assert_eq!(command_for_key(KeyCode::Tab), None);
    }

    #[test]
    fn release_events_do_nothing() {
        let mut game = Game::with_seed(1);
        game.start_with(PieceType::O);
        assert_eq!(handle_input(&mut game, KeyCode::Left, KeyEventKind::Release), None);
        assert_eq!(game.current_piece().map(|p| p.x), Some(4));
    }

    #[test]
    fn press_and_repeat_move_the_piece() {
        let mut game = Game::with_seed(1);
        game.start_with(PieceType::O);
        assert_eq!(
            handle_input(&mut game, KeyCode::Right, KeyEventKind::Press),
            Some(Command::MoveRight)
        );
        handle_input(&mut game, KeyCode::Right, KeyEventKind::Repeat);
        assert_eq!(game.current_piece().map(|p| p.x), Some(6));
    }

    #[test]
    fn start_key_begins_a_session() {
        let mut game = Game::with_seed(1);
        handle_input(&mut game, KeyCode::Enter, KeyEventKind::Press);
        assert_eq!(game.state(), &GameState::Playing);
    }

    #[test]
    fn quit_leaves_game_untouched() {
        let mut game = Game::with_seed(1);
        assert_eq!(
            handle_input(&mut game, KeyCode::Char('q'), KeyEventKind::Press),
            Some(Command::Quit)
        );
        assert_eq!(game.state(), &GameState::NotStarted);
    }
}
