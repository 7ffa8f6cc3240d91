use chess_rules::attacks::is_in_check;
use chess_rules::color::Color;
use chess_rules::game::Game;
use chess_rules::pieces::PieceType;
use chess_rules::position::Position;
use chess_rules::r#move::MoveKind;
use chess_rules::square::Square;
use chess_rules::status::GameStatus;
use chess_rules::ChessError;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rstest::rstest;

const MAX_PLIES: usize = 200;

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).expect("valid square")
}

fn play(game: &mut Game, moves: &[&str]) {
    for lan in moves {
        game.apply_lan(lan)
            .unwrap_or_else(|e| panic!("{} should be legal: {}", lan, e));
    }
}

#[derive(Debug, PartialEq)]
struct Snapshot {
    position: Position,
    side_to_move: Color,
    turn_number: u32,
    status: GameStatus,
}

fn snapshot(game: &Game) -> Snapshot {
    Snapshot {
        position: game.position().clone(),
        side_to_move: game.side_to_move(),
        turn_number: game.turn_number(),
        status: game.status(),
    }
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(42)]
#[case(2024)]
fn undo_reverses_random_playout(#[case] seed: u64) {
    let mut game = Game::standard();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut snapshots = vec![snapshot(&game)];

    for _ in 0..MAX_PLIES {
        let moves = game.all_legal_moves();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        game.make_move(mv).expect("generated move is legal");
        snapshots.push(snapshot(&game));
    }

    snapshots.pop();
    while let Some(expected) = snapshots.pop() {
        assert!(game.undo());
        assert_eq!(snapshot(&game), expected);
    }
    assert!(!game.undo());
}

#[rstest]
#[case(3)]
#[case(99)]
fn legal_moves_never_leave_king_attacked(#[case] seed: u64) {
    let mut game = Game::standard();
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..MAX_PLIES {
        let mover = game.side_to_move();
        let moves = game.all_legal_moves();
        for mv in &moves {
            let mut trial = game.clone();
            trial.make_move(mv).expect("generated move is legal");
            assert!(
                !is_in_check(trial.position(), mover),
                "{} leaves the {} king attacked",
                mv,
                mover
            );
        }

        let Some(mv) = moves.choose(&mut rng) else {
            assert!(game.is_over());
            break;
        };
        game.make_move(mv).expect("generated move is legal");
    }
}

#[test]
fn starting_position_has_twenty_moves() {
    let game = Game::standard();
    let moves = game.all_legal_moves();
    assert_eq!(moves.len(), 20);
    assert_eq!(moves.iter().filter(|mv| mv.kind == MoveKind::DoubleStep).count(), 8);
}

#[rstest]
#[case::path_blocked("4k3/8/8/8/8/8/8/R3KB1R w KQ - 0 1", "e1g1", false)]
#[case::clear_path("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1g1", true)]
#[case::clear_queenside("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1c1", true)]
#[case::no_right("4k3/8/8/8/8/8/8/R3K2R w Q - 0 1", "e1g1", false)]
#[case::through_attack("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1g1", false)]
#[case::into_attack("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1g1", false)]
#[case::out_of_check("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1g1", false)]
#[case::b_file_attacked("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1c1", true)]
#[case::knight_on_b1("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1", "e1c1", false)]
fn castling_gating(#[case] fen: &str, #[case] lan: &str, #[case] legal: bool) {
    let mut game = Game::from_fen(fen).expect("valid FEN");
    assert_eq!(game.apply_lan(lan).is_ok(), legal);
}

#[test]
fn castling_moves_rook_and_undo_restores_it() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("valid FEN");
    play(&mut game, &["e1g1"]);

    let rook = game.piece_at(sq("f1")).expect("rook on f1");
    assert!(rook.is(PieceType::Rook, Color::White));
    assert!(rook.has_moved);
    assert_eq!(game.piece_at(sq("h1")), None);
    assert_eq!(game.last_move().map(|r| r.to_algebraic()), Some("O-O".to_string()));

    assert!(game.undo());
    let rook = game.piece_at(sq("h1")).expect("rook back on h1");
    assert!(!rook.has_moved);
    assert_eq!(game.to_fen(), "4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
}

#[test]
fn castling_right_lost_after_rook_round_trip() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("valid FEN");
    play(&mut game, &["h1h2", "e8d8", "h2h1", "d8e8"]);
    assert_eq!(
        game.apply_lan("e1g1"),
        Err(ChessError::IllegalMove {
            from: sq("e1"),
            to: sq("g1")
        })
    );
    assert!(game.apply_lan("e1c1").is_ok());
}

#[test]
fn en_passant_window_is_one_move() {
    let mut game = Game::standard();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(game.en_passant_target(), Some(sq("d6")));

    let capture = game
        .legal_moves(sq("e5"))
        .into_iter()
        .find(|mv| mv.kind == MoveKind::EnPassant)
        .expect("en passant available");
    assert_eq!(capture.to, sq("d6"));

    // Let the window pass
    play(&mut game, &["a2a3", "a6a5"]);
    assert_eq!(game.en_passant_target(), None);
    assert!(
        game.legal_moves(sq("e5"))
            .iter()
            .all(|mv| mv.kind != MoveKind::EnPassant)
    );
}

#[test]
fn en_passant_capture_and_undo() {
    let mut game = Game::standard();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5", "e5d6"]);

    assert_eq!(game.piece_at(sq("d5")), None);
    assert!(game.last_move().is_some_and(|r| r.is_capture()));
    assert_eq!(game.last_move().map(|r| r.to_algebraic()), Some("exd6".to_string()));

    assert!(game.undo());
    let victim = game.piece_at(sq("d5")).expect("pawn restored");
    assert!(victim.is(PieceType::Pawn, Color::Black));
    assert_eq!(game.piece_at(sq("d6")), None);
    assert_eq!(game.en_passant_target(), Some(sq("d6")));
}

#[test]
fn fools_mate_is_terminal() {
    let mut game = Game::standard();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert_eq!(game.status(), GameStatus::Checkmate);
    assert!(game.all_legal_moves().is_empty());
    assert_eq!(game.winner(), Some(Color::Black));
    assert_eq!(game.movetext(), "1. f3 e5 2. g4 Qh4");
    assert!(matches!(
        game.apply(sq("a2"), sq("a3")),
        Err(ChessError::GameOver(GameStatus::Checkmate))
    ));
}

#[test]
fn promotion_and_undo() {
    let fen = "8/P3k3/8/8/8/8/8/4K3 w - - 0 1";
    let mut game = Game::from_fen(fen).expect("valid FEN");

    play(&mut game, &["a7a8q"]);
    let queen = game.piece_at(sq("a8")).expect("queen on a8");
    assert!(queen.is(PieceType::Queen, Color::White));
    assert!(game.last_move().is_some_and(|r| r.promoted()));

    assert!(game.undo());
    let pawn = game.piece_at(sq("a7")).expect("pawn back on a7");
    assert!(pawn.is(PieceType::Pawn, Color::White));
    assert_eq!(game.piece_at(sq("a8")), None);
    assert_eq!(game.to_fen(), fen);
}

#[test]
fn promotion_without_suffix_is_accepted() {
    let mut game = Game::from_fen("8/P3k3/8/8/8/8/8/4K3 w - - 0 1").expect("valid FEN");
    play(&mut game, &["a7a8"]);
    assert_eq!(game.last_move().map(|r| r.mv().to_lan()), Some("a7a8q".to_string()));
}

#[test]
fn underpromotion_suffix_is_rejected() {
    let mut game = Game::from_fen("8/P3k3/8/8/8/8/8/4K3 w - - 0 1").expect("valid FEN");
    assert!(matches!(game.apply_lan("a7a8n"), Err(ChessError::InvalidLan(_))));
    assert!(game.history().is_empty());
}
