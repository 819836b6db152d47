//! CLI for the SAT-backed sudoku generator and solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use sudoku_sat::{Board, Matrix};

#[derive(Parser)]
#[command(name = "sudoku_sat")]
#[command(about = "SAT-backed sudoku generator and solver")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new puzzle
    Generate {
        /// Difficulty level: easy, medium, hard or extreme
        #[arg(short, long, default_value = "medium")]
        difficulty: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Solve a puzzle
    Solve {
        /// Puzzle file: 9 lines of 9 digits, '.' or '0' for blanks.
        /// Reads stdin when omitted.
        #[arg(short, long)]
        puzzle: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct PuzzleOutput {
    difficulty: String,
    clues: usize,
    grid: Matrix,
}

#[derive(Serialize)]
struct SolutionOutput {
    grid: Matrix,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { difficulty, format } => generate_command(&difficulty, format),
        Commands::Solve { puzzle, format } => solve_command(puzzle, format),
    }
}

fn generate_command(difficulty: &str, format: OutputFormat) -> Result<()> {
    let matrix = sudoku_sat::generate(difficulty)
        .with_context(|| format!("Failed to generate a {} puzzle", difficulty))?;
    let clues = matrix.iter().flatten().filter(|&&v| v != 0).count();

    match format {
        OutputFormat::Text => {
            let board = Board::from_matrix(&matrix).context("Generated matrix is malformed")?;
            print!("{}", board);
            eprintln!("{} clues ({})", clues, difficulty.to_ascii_lowercase());
        }
        OutputFormat::Json => {
            let output = PuzzleOutput {
                difficulty: difficulty.to_ascii_lowercase(),
                clues,
                grid: matrix,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn solve_command(puzzle: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let content = match &puzzle {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read puzzle file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read puzzle from stdin")?;
            buffer
        }
    };

    let matrix = parse_matrix(&content).context("Failed to parse puzzle")?;
    let solved = sudoku_sat::solve(&matrix).context("Failed to solve puzzle")?;

    match format {
        OutputFormat::Text => {
            let board = Board::from_matrix(&solved).context("Solved matrix is malformed")?;
            print!("{}", board);
        }
        OutputFormat::Json => {
            let output = SolutionOutput { grid: solved };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Parse a puzzle from text: 9 non-empty lines of 9 cells each, digits
/// 1-9 for clues, '0' or '.' for blanks. Whitespace between cells is
/// ignored.
fn parse_matrix(content: &str) -> Result<Matrix> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() != 9 {
        anyhow::bail!("Expected 9 rows, found {}", lines.len());
    }

    let mut matrix = [[0u8; 9]; 9];
    for (row, line) in lines.iter().enumerate() {
        let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != 9 {
            anyhow::bail!("Row {} has {} cells, expected 9", row + 1, cells.len());
        }
        for (col, symbol) in cells.into_iter().enumerate() {
            matrix[row][col] = match symbol {
                '.' => 0,
                '0'..='9' => symbol as u8 - b'0',
                other => anyhow::bail!(
                    "Invalid cell symbol {:?} at row {}, column {}",
                    other,
                    row + 1,
                    col + 1
                ),
            };
        }
    }

    Ok(matrix)
}
