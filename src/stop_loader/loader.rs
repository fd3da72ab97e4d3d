use std::fs;

use super::error::StopLoaderError;
use crate::mountain::{Obstacle, Stop, Supply};

//─────────────────────────────────────────────────────────────────────────────

/// Loads rest-stop records from a delimited trail file.
///
/// Each row describes one stop: the first entry is its label, the remaining
/// entries are supply and obstacle tokens. Entries are separated by spaces;
/// a double-quoted entry may itself contain spaces.
pub fn load_stops_from_file(file_path: &str) -> Result<Vec<Stop>, StopLoaderError> {
    // Read the file content
    let file_content =
        fs::read_to_string(file_path).map_err(|e| StopLoaderError::ReadFile(file_path.into(), e))?;

    let stops = parse_rows(&file_content);
    if stops.is_empty() {
        return Err(StopLoaderError::NoStops(file_path.into()));
    }
    Ok(stops)
}

/// Parses every non-empty row into a stop record. Rows without a label are
/// skipped.
fn parse_rows(content: &str) -> Vec<Stop> {
    content.lines().filter_map(parse_row).collect()
}

/// Parses one row. The supply tokens `food`, `raft` and `axe` and the
/// obstacle tokens `river` and `fallen tree` (two words) are recognized;
/// anything else is skipped. Once an obstacle has been seen, later supply
/// tokens on the row are ignored.
fn parse_row(line: &str) -> Option<Stop> {
    let entries = split_entries(line);
    let mut entries = entries.into_iter();
    let mut stop = Stop::new(entries.next()?);

    let tokens: Vec<String> = entries.collect();
    let mut supplies_open = true;
    let mut index = 0;
    while index < tokens.len() {
        let token = tokens[index].as_str();
        if token == "fallen" && tokens.get(index + 1).map(String::as_str) == Some("tree") {
            stop.add_obstacle(Obstacle::FallenTree);
            supplies_open = false;
            index += 2;
            continue;
        }
        if token == "river" {
            stop.add_obstacle(Obstacle::River);
            supplies_open = false;
        } else if let Some(supply) = Supply::from_token(token) {
            if supplies_open {
                stop.add_supply(supply);
            }
        }
        index += 1;
    }
    Some(stop)
}

/// Splits a row into entries on spaces, keeping double-quoted entries intact.
/// Runs of spaces produce no empty entries.
fn split_entries(line: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;
    for next_char in line.chars() {
        match next_char {
            '"' => inside_quotes = !inside_quotes,
            ' ' if !inside_quotes => {
                if !current.is_empty() {
                    entries.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(next_char),
        }
    }
    if !current.is_empty() {
        entries.push(current.trim().to_string());
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn parses_label_supplies_and_obstacles() {
        let stop = parse_row("A food raft river axe").unwrap();
        assert_eq!(stop.label(), "A");
        // the axe comes after the river and is ignored
        assert_eq!(stop.supplies(), &[Supply::Food, Supply::Raft]);
        assert_eq!(stop.obstacles(), &[Obstacle::River]);
    }

    #[test]
    fn fallen_tree_spans_two_tokens() {
        let stop = parse_row("B axe fallen tree food").unwrap();
        assert_eq!(stop.supplies(), &[Supply::Axe]);
        assert_eq!(stop.obstacles(), &[Obstacle::FallenTree]);
    }

    #[test]
    fn fallen_without_tree_is_not_an_obstacle() {
        let stop = parse_row("C fallen food").unwrap();
        assert_eq!(stop.supplies(), &[Supply::Food]);
        assert!(stop.obstacles().is_empty());
    }

    #[test]
    fn unknown_tokens_are_skipped() {
        let stop = parse_row("D boots food compass").unwrap();
        assert_eq!(stop.supplies(), &[Supply::Food]);
        assert!(stop.obstacles().is_empty());
    }

    #[test]
    fn quoted_labels_keep_their_spaces() {
        let stop = parse_row("\"Base Camp\" food").unwrap();
        assert_eq!(stop.label(), "Base Camp");
        assert_eq!(stop.supplies(), &[Supply::Food]);
    }

    #[test]
    fn a_bare_label_is_a_valid_stop() {
        let stop = parse_row("Summit").unwrap();
        assert_eq!(stop.label(), "Summit");
        assert!(stop.supplies().is_empty());
        assert!(stop.obstacles().is_empty());
    }

    #[test]
    fn blank_rows_are_skipped() {
        let stops = parse_rows("A food\n\n   \nB\n");
        let labels: Vec<&str> = stops.iter().map(Stop::label).collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn load_reads_rows_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "B food").unwrap();
        writeln!(file, "A river").unwrap();
        writeln!(file, "C").unwrap();
        file.flush().unwrap();

        let stops = load_stops_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].label(), "B");
        assert_eq!(stops[1].obstacles(), &[Obstacle::River]);
    }

    #[test]
    fn load_errors_on_a_missing_file() {
        let result = load_stops_from_file("definitely/not/here.txt");
        assert!(matches!(result, Err(StopLoaderError::ReadFile(_, _))));
    }

    #[test]
    fn load_errors_when_no_stops_are_present() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   ").unwrap();
        file.flush().unwrap();

        let result = load_stops_from_file(file.path().to_str().unwrap());
        assert!(matches!(result, Err(StopLoaderError::NoStops(_))));
    }
}
