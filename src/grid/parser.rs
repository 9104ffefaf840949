use std::io::BufRead;

use super::cell::{Cell, CellKind};


/// Read every grid row from a line-oriented text source
/// Each surviving token becomes one cell, rows and columns counted in reading order
pub(crate) fn read_rows<R: BufRead>(reader: R) -> Result<Vec<Vec<Cell>>, std::io::Error> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let Some(normalized) = normalize_line(&line) else {
            continue;
        };

        let row = rows.len();
        let cells: Vec<Cell> = normalized
            .split_whitespace()
            .enumerate()
            .map(|(col, token)| {
                let (kind, time_cost) = classify(token);
                Cell::new(row, col, time_cost, kind)
            })
            .collect();

        // lines that normalize to nothing do not consume a row index
        if !cells.is_empty() {
            rows.push(cells);
        }
    }

    Ok(rows)
}


/// Turn a raw line into whitespace separated tokens
/// Returns None for lines that carry no cells (blank lines, pure border lines)
fn normalize_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.chars().all(|c| c == '#') {
        return None;
    }

    // strip a single border marker pair
    let inner = if trimmed.len() > 2 && trimmed.starts_with('#') && trimmed.ends_with('#') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    let normalized = inner
        .replace('#', " # ")
        .replace('S', " S ")
        .replace('G', " G ")
        .replace("\"\"", " ")
        .replace('"', "");

    Some(normalized)
}

/// Token vocabulary: `#` wall, `S` start, `G` goal, integer cost, anything else costs 1
fn classify(token: &str) -> (CellKind, u32) {
    match token {
        "#" => (CellKind::Wall, 0),
        "S" => (CellKind::Start, 0),
        "G" => (CellKind::Goal, 0),
        _ => (CellKind::Open, token.parse().unwrap_or(1)),
    }
}
