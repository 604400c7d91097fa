use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{bail, ensure, Context, Result};
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use slide_maze::solve::{self, Outcome};
use slide_maze::Maze;

const DEFAULT_DIR: &str = "input_files";
const EXTENSION: &str = "txt";
const LIMIT_VAR: &str = "SLIDE_MAZE_LIMIT";

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_DIR), PathBuf::from);
    let limit = match std::env::var(LIMIT_VAR) {
        Ok(v) => Some(
            v.parse::<usize>()
                .with_context(|| format!("Invalid {LIMIT_VAR}: {v:?}"))?,
        ),
        Err(_) => None,
    };

    if path.is_file() {
        return solve_file(&path, limit);
    }

    let files = list_mazes(&path)?;
    let term = Term::stdout();
    loop {
        println!("Available files:");
        for (file, i) in files.iter().zip(1..) {
            let name = file.file_name().unwrap_or(file.as_os_str());
            println!("{i}. {}", name.to_string_lossy());
        }
        println!("Select a file by entering the corresponding number (or enter 0 to exit):");

        let Some(input) = read_choice(&term)? else {
            break;
        };
        let file = match input.trim().parse::<usize>() {
            Ok(0) => {
                println!("Exiting...");
                break;
            }
            Ok(i) if i <= files.len() => &files[i - 1],
            _ => {
                eprintln!("Invalid file selection. Please try again.");
                continue;
            }
        };

        if let Err(err) = solve_file(file, limit) {
            eprintln!("Error: {err:#}");
        }
        println!();
    }

    Ok(())
}

/// Reads one line of input. `None` on end of input.
fn read_choice(term: &Term) -> Result<Option<String>> {
    if term.is_term() {
        return Ok(Some(term.read_line()?));
    }
    let mut line = String::new();
    let n = std::io::stdin().lock().read_line(&mut line)?;
    Ok((n != 0).then_some(line))
}

fn list_mazes(dir: &Path) -> Result<Vec<PathBuf>> {
    ensure!(
        dir.is_dir(),
        "Invalid directory path {}. Please ensure the path is correct.",
        dir.display(),
    );
    let mut files = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?
        .map(|ent| ent.map(|ent| ent.path()))
        .collect::<Result<Vec<_>, _>>()?;
    files.retain(|path| path.is_file() && path.extension().map_or(false, |ext| ext == EXTENSION));
    ensure!(
        !files.is_empty(),
        "No .{EXTENSION} files found in {}",
        dir.display(),
    );
    files.sort();
    Ok(files)
}

fn solve_file(path: &Path, limit: Option<usize>) -> Result<()> {
    let map_data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let maze = map_data
        .parse::<Maze>()
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    log::info!(
        "Loaded a {}x{} maze from {}",
        maze.height(),
        maze.width(),
        path.display(),
    );

    let pb = ProgressBar::new_spinner()
        .with_style(ProgressStyle::with_template("{spinner} {pos} positions expanded")?);
    let outcome = solve::bfs(&maze, limit, || pb.inc(1));
    pb.finish_and_clear();

    match outcome {
        Outcome::Found(route) => {
            println!("Path from S to F:");
            print!("{route}");
        }
        Outcome::NotFound => println!("No path found."),
        Outcome::LimitExceeded => bail!(
            "No route found within {} expanded positions ({LIMIT_VAR})",
            limit.unwrap_or_default(),
        ),
    }
    Ok(())
}
