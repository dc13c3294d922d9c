//! Reading city lists from disk.
//!
//! Text files hold one city per line as whitespace-separated `id x y`.
//! Blank lines and lines starting with `#` are skipped. Files ending in
//! `.json` are read as an array of `{ "id", "x", "y" }` objects.

use std::fs;
use std::path::Path;

use crate::{City, Error, Result};

pub fn read_cities(path: &Path) -> Result<Vec<City>> {
    let contents = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let cities = if is_json {
        serde_json::from_str(&contents)?
    } else {
        parse_cities(&contents)?
    };
    log::debug!("read {} cities from {}", cities.len(), path.display());
    Ok(cities)
}

pub fn parse_cities(input: &str) -> Result<Vec<City>> {
    let mut cities = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        cities.push(parse_record(idx + 1, line)?);
    }
    Ok(cities)
}

fn parse_record(line_no: usize, line: &str) -> Result<City> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [id_s, x_s, y_s] = fields.as_slice() else {
        return Err(Error::parse(
            line_no,
            format!("expected 'id x y' but got {} fields", fields.len()),
        ));
    };

    let id: u32 = id_s
        .parse()
        .map_err(|_| Error::parse(line_no, format!("invalid city id: {id_s}")))?;
    let x: f64 = x_s
        .parse()
        .map_err(|_| Error::parse(line_no, format!("invalid x coordinate: {x_s}")))?;
    let y: f64 = y_s
        .parse()
        .map_err(|_| Error::parse(line_no, format!("invalid y coordinate: {y_s}")))?;

    Ok(City::new(id, x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_and_real_coordinates() {
        let cities = parse_cities("1 0 0\n2\t3.5   -4\n").unwrap();
        assert_eq!(
            cities,
            vec![City::new(1, 0.0, 0.0), City::new(2, 3.5, -4.0)]
        );
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let cities = parse_cities("\n# header\n  1 1 1  \n\n2 2 2\n").unwrap();
        assert_eq!(cities.len(), 2);
    }

    #[test]
    fn reports_line_of_bad_field() {
        let err = parse_cities("1 0 0\n2 x 0\n").unwrap_err();
        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("x coordinate"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(matches!(
            parse_cities("1 0\n"),
            Err(Error::Parse { line: 1, .. })
        ));
        assert!(parse_cities("1 0 0 0\n").is_err());
    }

    #[test]
    fn rejects_negative_id() {
        assert!(parse_cities("-1 0 0\n").is_err());
    }

    #[test]
    fn empty_input_is_empty_list() {
        assert!(parse_cities("").unwrap().is_empty());
    }
}
