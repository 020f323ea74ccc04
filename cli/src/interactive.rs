use crate::display::{glyph, kind_name, material, rank_squares, result};
use gambit_agents::{play_turn, Agent, HeuristicAgent};
use gambit_core::{Color, Game, Move, Phase, PieceKind, Square};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    style::{Color as TermColor, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
    ExecutableCommand,
};
use std::io::{self, Write};
use tracing::info;

const START_CURSOR: Square = Square::E1;

pub struct InteractiveGame {
    game: Game,
    ai: HeuristicAgent,
    human: Color,
    cursor: Square,
    selected_square: Option<Square>,
    legal_moves_for_selected: Vec<Move>,
    message: String,
}

impl InteractiveGame {
    pub fn new(human: Color, ai: HeuristicAgent) -> Self {
        Self {
            game: Game::new(),
            ai,
            human,
            cursor: START_CURSOR,
            selected_square: None,
            legal_moves_for_selected: Vec::new(),
            message: String::from("Use hjkl to move, Enter to select/move, q to quit"),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(Hide)?;
        stdout.execute(Clear(ClearType::All))?;

        let result = self.game_loop();

        // Cleanup
        stdout.execute(Show)?;
        terminal::disable_raw_mode()?;
        stdout.execute(Clear(ClearType::All))?;
        stdout.execute(MoveTo(0, 0))?;

        result
    }

    fn game_loop(&mut self) -> io::Result<()> {
        loop {
            if !self.game.is_over() && self.game.turn() != self.human {
                self.engine_move()?;
            }

            if let Some(text) = result(&self.game.status()) {
                self.message = format!("{} Press n for a new game, any other key to quit.", text);
                self.draw_board()?;
                match read_key()? {
                    KeyCode::Char('n') => {
                        self.new_game();
                        continue;
                    }
                    _ => break,
                }
            }

            self.draw_board()?;
            let code = read_key()?;

            if let Phase::AwaitingPromotion(square) = self.game.phase() {
                match code {
                    KeyCode::Esc => break,
                    KeyCode::Char(c) => self.promote(square, c),
                    _ => {}
                }
                continue;
            }

            match code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('h') | KeyCode::Left => self.move_cursor(-1, 0),
                KeyCode::Char('j') | KeyCode::Down => self.move_cursor(0, -1),
                KeyCode::Char('k') | KeyCode::Up => self.move_cursor(0, 1),
                KeyCode::Char('l') | KeyCode::Right => self.move_cursor(1, 0),
                KeyCode::Enter | KeyCode::Char(' ') => self.handle_selection(),
                KeyCode::Char('d') => self.offer_draw(),
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
        }

        Ok(())
    }

    fn move_cursor(&mut self, dx: i8, dy: i8) {
        if let Some(square) = self.cursor.offset(dx, dy) {
            self.cursor = square;
        }
    }

    fn clear_selection(&mut self) {
        self.selected_square = None;
        self.legal_moves_for_selected.clear();
    }

    fn handle_selection(&mut self) {
        let cursor_square = self.cursor;

        if let Some(selected) = self.selected_square {
            self.clear_selection();
            if selected != cursor_square {
                match self.game.submit_move(selected, cursor_square) {
                    Ok(report) if report.promotion.is_some() => {
                        self.message = String::from("Promote to: q=Queen r=Rook b=Bishop n=Knight");
                    }
                    Ok(report) => {
                        self.message = format!("Moved: {}", report.execution.mv);
                    }
                    Err(error) => self.message = error.to_string(),
                }
                return;
            }
        }

        // Try to select a piece
        let moves = self.game.legal_moves_from(cursor_square);
        if let Some(piece) = self.game.board().piece_at(cursor_square) {
            if piece.color == self.game.turn() {
                self.selected_square = Some(cursor_square);
                self.legal_moves_for_selected = moves;
                self.message = format!("Selected {} at {}", kind_name(piece.kind), cursor_square);
            }
        }
    }

    fn promote(&mut self, square: Square, key: char) {
        let kind = match key {
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            _ => return,
        };

        match self.game.promote_pawn(square, kind) {
            Ok(_) => self.message = format!("Promoted to {} on {}", kind_name(kind), square),
            Err(error) => self.message = error.to_string(),
        }
    }

    fn offer_draw(&mut self) {
        let snapshot = self.game.snapshot();
        let ai = &mut self.ai;
        match self
            .game
            .offer_draw(self.human, |color| ai.accepts_draw(&snapshot, color))
        {
            Ok(true) => {}
            Ok(false) => self.message = String::from("Draw declined."),
            Err(error) => self.message = error.to_string(),
        }
    }

    fn engine_move(&mut self) -> io::Result<()> {
        self.message = String::from("Engine thinking...");
        self.draw_board()?;

        match play_turn(&mut self.game, &mut self.ai) {
            Ok(report) => {
                info!(mv = %report.execution.mv, "engine move");
                self.message = format!("Engine played: {}", report.execution.mv);
            }
            Err(error) => self.message = format!("Engine failed to move: {}", error),
        }

        Ok(())
    }

    fn new_game(&mut self) {
        self.game = Game::new();
        self.clear_selection();
        self.cursor = START_CURSOR;
        self.message = String::from("New game started!");
    }

    fn draw_board(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.execute(Clear(ClearType::All))?;
        stdout.execute(MoveTo(0, 0))?;

        // Title
        println!("Gambit - Interactive Mode (vim keys: hjkl)\r");
        println!("Commands: Enter=select/move, d=offer draw, n=new, q=quit\r");
        println!("\r");

        // Board with coordinates
        println!("  a b c d e f g h  \r");
        println!(" ┌─────────────────┐\r");

        let board = self.game.board();
        for rank in (0..8u8).rev() {
            print!("{}│ ", rank + 1);

            for square in rank_squares(rank) {
                let is_cursor = self.cursor == square;
                let is_selected = self.selected_square == Some(square);
                let is_target = self.legal_moves_for_selected.iter().any(|m| m.to == square);

                // Set background color
                let background = if is_cursor {
                    TermColor::Yellow
                } else if is_selected {
                    TermColor::Green
                } else if is_target {
                    TermColor::Blue
                } else if (square.file().index() + rank) % 2 == 0 {
                    TermColor::DarkGrey
                } else {
                    TermColor::Black
                };
                stdout.execute(SetBackgroundColor(background))?;

                // Draw piece or empty square
                if let Some(piece) = board.piece_at(square) {
                    let foreground = match piece.color {
                        Color::White => TermColor::White,
                        Color::Black => TermColor::Magenta,
                    };
                    stdout.execute(SetForegroundColor(foreground))?;
                    print!("{} ", glyph(piece));
                } else {
                    print!("  ");
                }

                stdout.execute(ResetColor)?;
            }

            println!("│{}\r", rank + 1);
        }

        println!(" └─────────────────┘\r");
        println!("  a b c d e f g h  \r");
        println!("\r");

        // Game info
        println!(
            "{} to move | You play {} | Move {}\r",
            self.game.turn(),
            self.human,
            self.game.history().len() / 2 + 1
        );
        for line in material(board).lines() {
            println!("{}\r", line);
        }

        // Status message
        println!("\r");
        println!("{}\r", self.message);

        stdout.flush()?;
        Ok(())
    }
}

/// Blocks until a key is pressed (releases are ignored).
fn read_key() -> io::Result<KeyCode> {
    loop {
        if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
            if kind != KeyEventKind::Release {
                return Ok(code);
            }
        }
    }
}
