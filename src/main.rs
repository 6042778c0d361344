//! Text-mode front end: reads clicks from stdin and prints the board.
//!
//! Commands:
//! - `<row> <col>`: click a square
//! - `moves`: list the pieces that can move
//! - `hints`: toggle valid-move hints
//! - `pause`, `reset`, `state`, `quit`

use std::io::{self, BufRead, Write};
use std::time::Instant;

use checkers_engine::board::{Color, Square, SIZE};
use checkers_engine::game::{Game, GameConfig, GameView, SelectOutcome};

#[cfg(feature = "logging")]
fn init_logging() {
    use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

    if let Err(err) = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]) {
        eprintln!("logging disabled: {err}");
    }
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

fn render(view: &GameView<'_>) -> String {
    let mut out = String::new();
    out.push_str("   0 1 2 3 4 5 6 7\n");
    for row in 0..SIZE {
        out.push_str(&format!("{row} "));
        for col in 0..SIZE {
            let sq = Square(row, col);
            let ch = match view.board.piece_at(sq) {
                Some(piece) if view.selected == Some(piece) => '*',
                Some(piece) => piece.to_char(),
                None if view.show_valid_moves && view.valid_moves.contains(sq) => 'o',
                None => '.',
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "{} to move | score dark {} light {} | clock dark {} light {}{}\n",
        view.turn,
        view.score(Color::Dark),
        view.score(Color::Light),
        view.clock.format_remaining(Color::Dark),
        view.clock.format_remaining(Color::Light),
        if view.clock.is_paused() { " (paused)" } else { "" },
    ));
    out
}

fn parse_click(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn main() -> io::Result<()> {
    init_logging();

    let mut game = Game::with_config(GameConfig::default());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut last = Instant::now();

    write!(stdout, "{}", render(&game.view()))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let now = Instant::now();
        game.tick(now - last);
        last = now;

        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "pause" => game.toggle_pause(),
            "reset" => game.reset(),
            "hints" => {
                let show = !game.config().show_valid_moves;
                game.set_show_valid_moves(show);
            }
            "moves" => {
                for (from, moves) in game.movable_pieces() {
                    let dests: Vec<String> = moves.destinations().map(|sq| sq.to_string()).collect();
                    writeln!(stdout, "{from} -> {}", dests.join(" "))?;
                }
            }
            "state" => writeln!(stdout, "{:?}", game.export_state())?,
            other => match parse_click(other) {
                Some((row, col)) => {
                    let outcome = game.select(row, col);
                    if outcome == SelectOutcome::NothingSelected {
                        writeln!(stdout, "nothing selected")?;
                    }
                }
                None => writeln!(stdout, "unknown command: {other}")?,
            },
        }

        write!(stdout, "{}", render(&game.view()))?;
        if let Some(winner) = game.winner() {
            writeln!(stdout, "{winner} wins")?;
            break;
        }
        stdout.flush()?;
    }
    Ok(())
}
