//! Child side of the engine line protocol, for demos and integration tests.
//!
//! Reads its color from the first line of stdin. As White it opens
//! immediately; thereafter every line is the opponent's move in UCI
//! notation. Replies with its own move, or the literal `invalid` for a
//! line it cannot apply. Exits on EOF or when the game ends.

use std::io::{self, BufRead, Write};

use bot_core::{Engine, Game, SearchLimits};
use first_move_strategy::FirstMoveStrategy;
use shakmaty::Color;

fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    let mut game = Game::startpos();
    let mut strategy = FirstMoveStrategy::new();
    let limits = SearchLimits::none();

    let color = match lines.next() {
        Some(Ok(line)) => match line.trim() {
            "white" => Color::White,
            "black" => Color::Black,
            _ => return,
        },
        _ => return,
    };

    if color == Color::White && !reply(&mut game, &mut strategy, &limits, &mut stdout) {
        return;
    }

    for line in lines {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if game.push_uci(line).is_err() {
            writeln!(stdout, "invalid").ok();
            stdout.flush().ok();
            continue;
        }

        if game.is_game_over() || !reply(&mut game, &mut strategy, &limits, &mut stdout) {
            break;
        }
    }
}

/// Pick a move, apply it to our own state, and print it. Returns false when
/// there is nothing to play.
fn reply(
    game: &mut Game,
    strategy: &mut FirstMoveStrategy,
    limits: &SearchLimits,
    stdout: &mut impl Write,
) -> bool {
    let result = match strategy.search(game, limits, false, false) {
        Ok(result) => result,
        Err(_) => return false,
    };
    match result.best_move {
        Some(m) => {
            let uci = game.uci(&m);
            if game.push(&m).is_err() {
                return false;
            }
            writeln!(stdout, "{uci}").ok();
            stdout.flush().ok();
            true
        }
        None => false,
    }
}
