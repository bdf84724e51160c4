use crate::game::{Board, Cell, GameOutcome, GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    computer_thinking: bool,
    accent: Color,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, computer_thinking, accent, chunks[0]);
    render_board(
        frame,
        game_state.board(),
        game_state.last_move(),
        selected_column,
        chunks[1],
    );
    render_message(frame, game_state, message, chunks[2]);
    render_controls(frame, accent, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    computer_thinking: bool,
    accent: Color,
    area: ratatui::layout::Rect,
) {
    let (status, color) = if game_state.is_terminal() {
        ("Game Over".to_string(), accent)
    } else if computer_thinking {
        ("Computer (Yellow) is thinking...".to_string(), Color::Yellow)
    } else {
        let player = game_state.current_player();
        let color = match player {
            Player::Red => Color::Red,
            Player::Yellow => Color::Yellow,
        };
        let who = if player.is_human() { "You" } else { "Computer" };
        (format!("{} ({}) to move", who, player.name()), color)
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    last_move: Option<(usize, usize)>,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("  ")];
    for col in 0..7 {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    lines.push(Line::from(col_line));

    lines.push(Line::from(" ╔═════════════════════╗"));

    for row in 0..6 {
        let mut row_spans = vec![Span::raw(" ║")];

        for col in 0..7 {
            let cell = board.get(row, col);
            let (symbol, color) = match cell {
                Cell::Empty => (" · ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Yellow => (" ● ", Color::Yellow),
            };
            let mut style = Style::default().fg(color);
            if last_move == Some((row, col)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(" ╚═════════════════════╝"));

    // Drop indicator under the selected column
    let mut indicator = vec![Span::raw("  ")];
    for col in 0..7 {
        if col == selected_column {
            indicator.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(
    frame: &mut Frame,
    game_state: &GameState,
    message: &Option<String>,
    area: ratatui::layout::Rect,
) {
    let text = message.as_deref().unwrap_or("");

    // Outcome banner color: green for a human win, red for a loss
    let color = match game_state.outcome() {
        Some(GameOutcome::Winner(p)) if p.is_human() => Color::Green,
        Some(GameOutcome::Winner(_)) => Color::Red,
        Some(GameOutcome::Draw) => Color::Yellow,
        None => Color::White,
    };

    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, accent: Color, area: ratatui::layout::Rect) {
    let controls = Paragraph::new("←/→: Select column  |  Enter: Drop  |  R: New game  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
