//! Icepush entry point
//!
//! Terminal host standing in for the external collaborators: it renders the
//! board as text, maps key input to slide directions, and checks the win
//! condition against the goal cell. The core library knows nothing about any
//! of this.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use icepush::{Board, CellType, ObjectKind, PuzzleConfig, create_puzzle, move_player};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (config, seed_arg) = parse_args()?;
    let mut seed = seed_arg.unwrap_or_else(time_seed);

    log::info!("icepush starting, seed {seed}");
    let mut board = create_puzzle(&config, seed)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", render(&board))?;
    writeln!(out, "w/a/s/d: slide  n: new puzzle  q: quit")?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match line.trim().chars().next() {
            Some('q') => break,
            Some('n') => {
                seed = time_seed();
                board = create_puzzle(&config, seed)?;
                log::info!("new puzzle, seed {seed}");
            }
            Some(key) => {
                if let Some((dx, dy)) = direction_for(key) {
                    if !move_player(&mut board, dx, dy) {
                        writeln!(out, "blocked")?;
                    }
                }
            }
            None => {}
        }

        writeln!(out, "{}", render(&board))?;
        if solved(&board) {
            writeln!(out, "Solved! (seed {seed}) Starting a new puzzle...")?;
            seed = time_seed();
            board = create_puzzle(&config, seed)?;
            writeln!(out, "{}", render(&board))?;
        }
        out.flush()?;
    }
    Ok(())
}

/// `--config <path>` and `--seed <n>`; everything else is rejected.
fn parse_args() -> Result<(PuzzleConfig, Option<u64>), Box<dyn std::error::Error>> {
    let mut config = PuzzleConfig::default();
    let mut seed = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or("--config needs a file path")?;
                config = PuzzleConfig::from_json_file(&path)?;
            }
            "--seed" => {
                let value = args.next().ok_or("--seed needs a number")?;
                seed = Some(value.parse()?);
            }
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }
    Ok((config, seed))
}

/// Key → unit direction vector. This is the whole input mapper.
fn direction_for(key: char) -> Option<(i32, i32)> {
    match key.to_ascii_lowercase() {
        'w' => Some((0, -1)),
        's' => Some((0, 1)),
        'a' => Some((-1, 0)),
        'd' => Some((1, 0)),
        _ => None,
    }
}

/// Win check: some player stands on the goal cell.
fn solved(board: &Board) -> bool {
    match board.goal() {
        Some(goal) => board
            .objects_of(ObjectKind::Player)
            .iter()
            .any(|p| (p.x, p.y) == goal),
        None => false,
    }
}

/// ANSI truecolor text rendering; objects draw over terrain.
fn render(board: &Board) -> String {
    let mut out = String::new();
    for y in 0..board.height() {
        for x in 0..board.width() {
            let (glyph, [r, g, b]) = match board.object_at(x, y) {
                Some(obj) => (obj.kind.glyph(), obj.kind.color()),
                None => {
                    let cell = board.cell_at(x, y).unwrap_or(CellType::Empty);
                    (cell.glyph(), cell.color())
                }
            };
            out.push_str(&format!("\x1b[38;2;{r};{g};{b}m{glyph}\x1b[0m "));
        }
        out.push('\n');
    }
    out
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
