//! Output formatting for the CLI

use std::io::{self, Write};

use crate::{
    tictactoe::{Board, Cell},
    types::{BOARD_SIZE, Coord},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, &str)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Format a rate as a percentage with one decimal
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Write the board with row and column labels
///
/// ```text
///     0   1   2
/// 0   X | - | -
///    ---+---+---
/// 1   - | O | -
///    ---+---+---
/// 2   - | - | -
/// ```
pub fn write_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    writeln!(out, "    0   1   2")?;
    for row in 0..BOARD_SIZE {
        let symbols: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let cell = Coord::new(row, col)
                    .map(|coord| board.cell(coord))
                    .unwrap_or(Cell::Empty);
                cell.symbol().to_string()
            })
            .collect();
        writeln!(out, "{row}   {}", symbols.join(" | "))?;
        if row + 1 < BOARD_SIZE {
            writeln!(out, "   ---+---+---")?;
        }
    }
    Ok(())
}

/// Write the agent's learned value for each available cell
pub fn write_move_values<W: Write>(out: &mut W, values: &[(Coord, f64)]) -> io::Result<()> {
    for (coord, value) in values {
        writeln!(out, "  {coord}: {value:+.4}")?;
    }
    Ok(())
}
