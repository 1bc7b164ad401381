use super::*;

fn pick(game: &Game) -> Option<Move> {
    FirstMoveStrategy::new()
        .search(game, &SearchLimits::none(), false, false)
        .unwrap()
        .best_move
}

#[test]
fn startpos_picks_a2a3() {
    let game = Game::startpos();
    let best = pick(&game).unwrap();
    assert_eq!(game.uci(&best), "a2a3");
}

#[test]
fn picks_uci_minimum_over_all_legal_moves() {
    let mut game = Game::startpos();
    game.push_uci("d2d4").unwrap();
    let best = pick(&game).unwrap();
    let best_uci = game.uci(&best);
    for m in game.legal_moves() {
        assert!(best_uci <= game.uci(&m));
    }
}

#[test]
fn no_legal_moves_yields_none() {
    let game = Game::from_fen("8/8/8/8/8/6q1/5k2/7K w - - 0 1").unwrap();
    assert!(pick(&game).is_none());
}
