use super::*;

fn pick(game: &Game) -> Option<Move> {
    AlphabeticalStrategy::new()
        .search(game, &SearchLimits::none(), false, false)
        .unwrap()
        .best_move
}

#[test]
fn startpos_picks_na3() {
    // 'N' sorts before any lowercase pawn move, and "Na3" before "Nc3"
    let game = Game::startpos();
    let best = pick(&game).unwrap();
    assert_eq!(game.san(&best), "Na3");
    assert_eq!(game.uci(&best), "b1a3");
}

#[test]
fn picks_san_minimum_over_all_legal_moves() {
    let game = Game::startpos();
    let best = pick(&game).unwrap();
    let best_san = game.san(&best);
    for m in game.legal_moves() {
        assert!(best_san <= game.san(&m));
    }
}

#[test]
fn no_legal_moves_yields_none() {
    let game = Game::from_fen("8/8/8/8/8/6q1/5k2/7K w - - 0 1").unwrap();
    assert!(pick(&game).is_none());
}

#[test]
fn deterministic_for_the_same_position() {
    let mut game = Game::startpos();
    game.push_uci("e2e4").unwrap();
    let a = pick(&game).unwrap();
    let b = pick(&game).unwrap();
    assert_eq!(a, b);
}
