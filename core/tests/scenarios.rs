use gambit_core::{
    all_legal_moves, is_legal_move, is_valid_move, Board, Color, Game, Phase, Piece, PieceKind,
    RulesError, Square, Termination,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn play(game: &mut Game, moves: &[(&str, &str)]) {
    for &(from, to) in moves {
        game.submit_move(sq(from), sq(to))
            .unwrap_or_else(|e| panic!("{}{} rejected: {}", from, to, e));
    }
}

fn position(pieces: &[(&str, PieceKind, Color)]) -> Board {
    Board::from_pieces(
        pieces
            .iter()
            .map(|&(name, kind, color)| (sq(name), Piece::new(kind, color))),
    )
    .unwrap()
}

#[test]
fn fools_mate() {
    let mut game = Game::new();
    play(&mut game, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4")]);

    let report = game.submit_move(sq("d8"), sq("h4")).unwrap();
    assert!(report.game_over.is_over);
    assert!(report.game_over.is_checkmate);
    assert!(!report.game_over.is_draw);
    assert_eq!(report.game_over.winner, Some(Color::Black));
    assert!(game.is_over());
    assert!(game.legal_moves().is_empty());
    assert_eq!(
        game.submit_move(sq("e1"), sq("f2")),
        Err(RulesError::GameOver)
    );
}

#[test]
fn stalemate() {
    use Color::*;
    use PieceKind::*;
    let board = position(&[("a1", King, White), ("c2", King, Black), ("c3", Queen, Black)]);
    let mut game = Game::from_board(board, Black);
    assert!(!game.is_over());

    let report = game.submit_move(sq("c3"), sq("b3")).unwrap();
    assert!(report.game_over.is_over);
    assert!(!report.game_over.is_checkmate);
    assert!(report.game_over.is_draw);
    assert_eq!(report.game_over.winner, None);
    assert_eq!(report.game_over.termination, Some(Termination::Stalemate));
}

#[test]
fn en_passant_is_available_for_one_ply() {
    let opening = [("a2", "a3"), ("d7", "d5"), ("a3", "a4"), ("d5", "d4"), ("e2", "e4")];

    let mut taken_at_once = Game::new();
    play(&mut taken_at_once, &opening);
    let report = taken_at_once.submit_move(sq("d4"), sq("e3")).unwrap();
    assert!(report.execution.en_passant);
    assert!(taken_at_once.board().is_empty(sq("e4")));
    assert_eq!(taken_at_once.board().captured_points(Color::Black), 1);

    let mut taken_late = Game::new();
    play(&mut taken_late, &opening);
    play(&mut taken_late, &[("h7", "h6"), ("h2", "h3")]);
    assert_eq!(
        taken_late.submit_move(sq("d4"), sq("e3")),
        Err(RulesError::InvalidMove {
            from: sq("d4"),
            to: sq("e3")
        })
    );
    assert!(!taken_late
        .legal_moves_from(sq("d4"))
        .iter()
        .any(|mv| mv.to == sq("e3")));
}

#[test]
fn promotion_waits_for_a_choice() {
    use Color::*;
    use PieceKind::*;
    let board = position(&[("e1", King, White), ("a7", Pawn, White), ("h6", King, Black)]);
    let mut game = Game::from_board(board, White);

    let report = game.submit_move(sq("a7"), sq("a8")).unwrap();
    assert_eq!(report.promotion, Some(sq("a8")));
    assert_eq!(game.phase(), Phase::AwaitingPromotion(sq("a8")));
    assert_eq!(game.turn(), White);

    assert_eq!(
        game.submit_move(sq("e1"), sq("e2")),
        Err(RulesError::PromotionPending { square: sq("a8") })
    );
    assert_eq!(
        game.promote_pawn(sq("a8"), King),
        Err(RulesError::InvalidPromotion { kind: King })
    );
    assert_eq!(
        game.promote_pawn(sq("a8"), Pawn),
        Err(RulesError::InvalidPromotion { kind: Pawn })
    );
    assert_eq!(
        game.promote_pawn(sq("b8"), Queen),
        Err(RulesError::NoPendingPromotion { square: sq("b8") })
    );

    let status = game.promote_pawn(sq("a8"), Rook).unwrap();
    assert!(!status.is_over);
    assert_eq!(game.turn(), Black);
    assert_eq!(game.board().piece_at(sq("a8")), Some(Piece::new(Rook, White)));
    assert_eq!(
        game.promote_pawn(sq("a8"), Queen),
        Err(RulesError::NoPendingPromotion { square: sq("a8") })
    );
}

#[test]
fn promotion_can_deliver_mate() {
    use Color::*;
    use PieceKind::*;
    let board = position(&[("g6", King, White), ("a7", Pawn, White), ("h8", King, Black)]);
    let mut game = Game::from_board(board, White);

    game.submit_move(sq("a7"), sq("a8")).unwrap();
    let status = game.promote_pawn(sq("a8"), Queen).unwrap();
    assert!(status.is_checkmate);
    assert_eq!(status.winner, Some(White));
}

#[test]
fn bare_kings_end_the_game() {
    use Color::*;
    use PieceKind::*;
    let board = position(&[("e4", King, White), ("d5", Pawn, Black), ("h8", King, Black)]);
    let mut game = Game::from_board(board, White);

    let report = game.submit_move(sq("e4"), sq("d5")).unwrap();
    assert!(report.game_over.is_draw);
    assert_eq!(
        report.game_over.termination,
        Some(Termination::InsufficientMaterial)
    );
}

#[test]
fn kings_may_not_capture_defended_pieces() {
    use Color::*;
    use PieceKind::*;
    let board = position(&[
        ("e1", King, White),
        ("e2", Pawn, Black),
        ("d3", Pawn, Black),
        ("h8", King, Black),
    ]);
    let mut game = Game::from_board(board, White);

    // d3 defends e2.
    assert_eq!(
        game.submit_move(sq("e1"), sq("e2")),
        Err(RulesError::InvalidMove {
            from: sq("e1"),
            to: sq("e2")
        })
    );
    game.submit_move(sq("e1"), sq("d2")).unwrap();
}

#[test]
fn black_reply_count_is_stable() {
    let mut start = Board::new();
    for white in all_legal_moves(&mut start, Color::White) {
        let mut game = Game::new();
        game.submit_move(white.from, white.to).unwrap();

        let first = game.legal_moves();
        assert_eq!(first.len(), 20, "after {}", white);
        assert_eq!(game.legal_moves(), first);
    }
}

#[test]
fn probing_never_changes_the_board() {
    let mut rng = StdRng::seed_from_u64(0x00c0_ffee);

    for _ in 0..6 {
        let mut game = Game::new();

        for _ in 0..60 {
            let moves = game.legal_moves();
            let Some(&chosen) = moves.choose(&mut rng) else {
                break;
            };

            let mut board = game.snapshot();
            let before = board.clone();
            for mv in &moves {
                assert!(is_valid_move(&mut board, mv.from, mv.to));
                assert!(is_legal_move(&mut board, mv.from, mv.to));
            }
            for _ in 0..64 {
                let from = Square::from_index(rng.gen_range(0..64)).unwrap();
                let to = Square::from_index(rng.gen_range(0..64)).unwrap();
                is_valid_move(&mut board, from, to);
                is_legal_move(&mut board, from, to);
            }
            assert_eq!(board, before);

            game.submit_move(chosen.from, chosen.to).unwrap();
            if let Phase::AwaitingPromotion(square) = game.phase() {
                game.promote_pawn(square, PieceKind::Queen).unwrap();
            }
            if game.is_over() {
                break;
            }
        }
    }
}
