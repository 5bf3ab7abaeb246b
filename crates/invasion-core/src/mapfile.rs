//! Line-based map parsing.
//!
//! Each record is a city name followed by `direction=neighbor` tokens
//! separated by single spaces. Malformed tokens drop the whole line with a
//! collected error; parsing always continues with the next line.

use std::str::FromStr;

use crate::direction::Direction;
use crate::error::MapError;
use crate::world::CityRecord;

const FIELD_SEPARATOR: char = ' ';
const EDGE_SEPARATOR: char = '=';

/// Parses the whole map input. Returns every well-formed record together
/// with the errors for the lines that were dropped.
pub fn parse_map(input: &str) -> (Vec<CityRecord>, Vec<MapError>) {
    let mut records = Vec::new();
    let mut errors = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }
        match parse_line(line, raw.trim_end()) {
            Ok(record) => records.push(record),
            Err(error) => errors.push(error),
        }
    }
    (records, errors)
}

fn parse_line(line: usize, raw: &str) -> Result<CityRecord, MapError> {
    let mut fields = raw.split(FIELD_SEPARATOR);
    let name = fields.next().unwrap_or_default();
    if name.is_empty() {
        return Err(MapError::EmptyCityName { line });
    }
    let mut edges = Vec::new();
    for token in fields {
        let Some((direction, target)) = token.split_once(EDGE_SEPARATOR) else {
            return Err(MapError::MalformedEdge {
                line,
                token: token.to_string(),
            });
        };
        let direction = Direction::from_str(direction)
            .map_err(|source| MapError::UnknownDirection { line, source })?;
        // A repeated direction on one line keeps the last value.
        edges.retain(|(existing, _)| *existing != direction);
        edges.push((direction, target.to_string()));
    }
    Ok(CityRecord {
        line,
        name: name.to_string(),
        edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::ParseDirectionError;

    #[test]
    fn test_parses_city_with_two_edges() {
        let (records, errors) = parse_map("Foo north=Bar south=Baz\n");
        assert!(errors.is_empty());
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.name, "Foo");
        assert_eq!(
            record.edges,
            vec![
                (Direction::North, "Bar".to_string()),
                (Direction::South, "Baz".to_string()),
            ]
        );
    }

    #[test]
    fn test_city_with_no_edges() {
        let (records, errors) = parse_map("Lonely\n");
        assert!(errors.is_empty());
        assert_eq!(records[0].name, "Lonely");
        assert!(records[0].edges.is_empty());
    }

    #[test]
    fn test_misspelled_direction_drops_only_that_line() {
        let input = "Foo norht=Bar\nBar south=Baz\n";
        let (records, errors) = parse_map(input);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Bar");
        assert_eq!(
            errors,
            vec![MapError::UnknownDirection {
                line: 1,
                source: ParseDirectionError("norht".into()),
            }]
        );
    }

    #[test]
    fn test_token_without_separator_is_rejected() {
        let (records, errors) = parse_map("Foo northBar\n");
        assert!(records.is_empty());
        assert_eq!(
            errors,
            vec![MapError::MalformedEdge { line: 1, token: "northBar".into() }]
        );
    }

    #[test]
    fn test_repeated_direction_keeps_last() {
        let (records, _) = parse_map("Foo north=Bar north=Baz\n");
        assert_eq!(records[0].edges, vec![(Direction::North, "Baz".to_string())]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (records, errors) = parse_map("Foo\n\n  \nBar\n");
        assert!(errors.is_empty());
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].line, 4);
    }
}
