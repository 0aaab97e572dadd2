use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::game::{Cell, Snapshot};

pub fn ui(f: &mut Frame, snapshot: &Snapshot) {
    let size = f.size();

    let board_height = BOARD_HEIGHT as u16 + 2; // rows + borders
    let board_width = BOARD_WIDTH as u16 * 2 + 2; // 2 chars per block + borders

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_width),
            Constraint::Length(18), // Stats and controls
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];
    let info_area = horizontal_chunks[2];

    render_board(f, snapshot, board_area);
    render_info(f, snapshot, info_area);

    if snapshot.game_over {
        render_game_over_overlay(f, snapshot, board_area);
    } else if !snapshot.game_started {
        render_start_overlay(f, board_area);
    }
}

/// Settled cells with the falling piece drawn on top.
pub fn compose_cells(snapshot: &Snapshot) -> [[Cell; BOARD_WIDTH]; BOARD_HEIGHT] {
    let mut cells = [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT];
    for (y, row) in snapshot.board.rows().iter().enumerate() {
        cells[y] = *row;
    }

    // A landed piece is already part of the board
    if let Some(piece) = snapshot.piece.filter(|p| !p.collided) {
        for (x, y) in piece.get_blocks() {
            if x >= 0 && x < BOARD_WIDTH as i32 && y >= 0 && y < BOARD_HEIGHT as i32 {
                cells[y as usize][x as usize] = Cell::Filled(piece.piece_type);
            }
        }
    }

    cells
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let cells = compose_cells(snapshot);
    let mut board_lines = Vec::new();

    for (y, row) in cells.iter().enumerate() {
        let clearing = snapshot.is_clearing(y);
        let mut line_spans = Vec::new();
        for (x, cell) in row.iter().enumerate() {
            match cell {
                Cell::Empty => {
                    if (x + y) % 2 == 0 {
                        line_spans.push(Span::styled("░░", Style::default().fg(Color::DarkGray)));
                    } else {
                        line_spans.push(Span::raw("  "));
                    }
                }
                Cell::Filled(_) if clearing => {
                    line_spans.push(Span::styled(
                        "██",
                        Style::default().fg(Color::White).add_modifier(Modifier::SLOW_BLINK),
                    ));
                }
                Cell::Filled(kind) => {
                    line_spans.push(Span::styled("██", Style::default().fg(kind.color())));
                }
            }
        }
        board_lines.push(Line::from(line_spans));
    }

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default()
               .borders(Borders::ALL)
               .title("blockfall"));

    f.render_widget(board_widget, area);
}

fn render_info(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),  // Stats
            Constraint::Length(8),  // Controls
            Constraint::Min(1),
        ])
        .split(area);

    render_stats(f, snapshot, chunks[0]);
    render_controls(f, chunks[1]);
}

fn render_stats(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let label = Style::default().fg(Color::Cyan);
    let stats_text = vec![
        Line::from(vec![Span::styled("Score", label)]),
        Line::from(vec![Span::raw(snapshot.score.to_string())]),
        Line::from(vec![Span::styled("Level", label)]),
        Line::from(vec![Span::raw(snapshot.level.to_string())]),
        Line::from(vec![Span::styled("Lines", label)]),
        Line::from(vec![Span::raw(snapshot.lines.to_string())]),
    ];

    let stats_widget = Paragraph::new(stats_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(stats_widget, area);
}

fn render_controls(f: &mut Frame, area: Rect) {
    let controls_text = vec![
        Line::from(vec![Span::raw("← → Move")]),
        Line::from(vec![Span::raw("↓   Drop")]),
        Line::from(vec![Span::raw("↑   Rotate")]),
        Line::from(vec![Span::raw("R   Restart")]),
        Line::from(vec![Span::raw("Q   Quit")]),
    ];

    let controls_widget = Paragraph::new(controls_text)
        .block(Block::default().borders(Borders::ALL).title("Keys"));

    f.render_widget(controls_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_start_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(80, 40, area);
    f.render_widget(Clear, popup_area);

    let start_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("BLOCKFALL", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("ENTER: start")]),
    ];

    let start_widget = Paragraph::new(start_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(start_widget, popup_area);
}

fn render_game_over_overlay(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let popup_area = centered_rect(80, 50, area);
    f.render_widget(Clear, popup_area);

    let game_over_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("GAME OVER", Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("Score: {}", snapshot.score))]),
        Line::from(vec![Span::raw(format!("Lines: {}", snapshot.lines))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("R: restart")]),
    ];

    let game_over_widget = Paragraph::new(game_over_text)
        .block(Block::default().borders(Borders::ALL).title("Game Over"))
        .alignment(Alignment::Center);

    f.render_widget(game_over_widget, popup_area);
}
