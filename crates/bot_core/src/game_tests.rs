use shakmaty::{Color, Outcome};

use super::*;

#[test]
fn startpos_has_twenty_moves() {
    let game = Game::startpos();
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.legal_moves().len(), 20);
    assert!(game.last_move().is_none());
    assert_eq!(game.fullmoves(), 1);
    assert!(!game.is_game_over());
}

#[test]
fn push_uci_tracks_history() {
    let mut game = Game::startpos();
    game.push_uci("e2e4").unwrap();
    game.push_uci("e7e5").unwrap();

    assert_eq!(game.moves().len(), 2);
    let last = game.last_move().unwrap().clone();
    assert_eq!(game.uci(&last), "e7e5");
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.fullmoves(), 2);
}

#[test]
fn push_rejects_illegal_move() {
    let mut game = Game::startpos();
    // Pawns cannot move three squares
    let result = game.push_uci("e2e5");
    assert!(matches!(result, Err(EngineError::InvalidMove(_))));
    assert!(game.moves().is_empty());
}

#[test]
fn parse_uci_rejects_garbage() {
    let game = Game::startpos();
    assert!(matches!(
        game.parse_uci("not a move"),
        Err(EngineError::InvalidMove(_))
    ));
}

#[test]
fn from_fen_rejects_garbage() {
    assert!(Game::from_fen("definitely not fen").is_err());
}

#[test]
fn fools_mate_is_decisive() {
    let mut game = Game::startpos();
    for uci in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        game.push_uci(uci).unwrap();
    }
    assert!(game.is_game_over());
    assert_eq!(
        game.outcome(),
        Some(Outcome::Decisive {
            winner: Color::Black
        })
    );
    assert!(game.legal_moves().is_empty());
}

#[test]
fn stalemate_has_no_moves() {
    let game = Game::from_fen("8/8/8/8/8/6q1/5k2/7K w - - 0 1").unwrap();
    assert!(game.is_game_over());
    assert_eq!(game.outcome(), Some(Outcome::Draw));
    assert!(game.legal_moves().is_empty());
}

#[test]
fn san_and_uci_text() {
    let game = Game::startpos();
    let knight = game.parse_uci("g1f3").unwrap();
    assert_eq!(game.san(&knight), "Nf3");
    assert_eq!(game.uci(&knight), "g1f3");
}

#[test]
fn fen_roundtrip_preserves_turn() {
    let mut game = Game::startpos();
    game.push_uci("e2e4").unwrap();
    let restored = Game::from_fen(&game.to_fen()).unwrap();
    assert_eq!(restored.turn(), Color::Black);
}
