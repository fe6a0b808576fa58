//! Dataset loading
//!
//! Reads the delimited game table, validates that the required columns are
//! present and coerces the currency-formatted price to a number. Cells that
//! are empty or hold a conventional NA marker become `None`.

use crate::item::RawGame;
use crate::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub const PRICE_COLUMN: &str = "original_price";

/// Columns that must exist in the header row
pub const REQUIRED_COLUMNS: [&str; 6] = [
    PRICE_COLUMN,
    "genre",
    "game_details",
    "popular_tags",
    "developer",
    "name",
];

/// Cell values read as missing (after trimming)
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[inline]
pub fn is_missing(cell: &str) -> bool {
    NA_VALUES.contains(&cell.trim())
}

/// Coerce a price such as `$59.99` to a number.
///
/// The first character is dropped as the currency symbol. Anything that
/// does not then parse as a finite float is `None`, never an error.
pub fn parse_price(cell: &str) -> Option<f64> {
    if is_missing(cell) {
        return None;
    }
    let mut chars = cell.chars();
    chars.next()?;
    chars
        .as_str()
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn text_cell(record: &csv::StringRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .filter(|cell| !is_missing(cell))
        .map(str::to_string)
}

/// Positions of the required columns in the header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    price: usize,
    genre: usize,
    game_details: usize,
    popular_tags: usize,
    developer: usize,
    name: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let position = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == column)
        };

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|&c| position(c).is_none())
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::Schema { missing });
        }

        let at = |column: &str| position(column).ok_or_else(|| Error::Schema {
            missing: vec![column.to_string()],
        });
        Ok(Self {
            price: at(PRICE_COLUMN)?,
            genre: at("genre")?,
            game_details: at("game_details")?,
            popular_tags: at("popular_tags")?,
            developer: at("developer")?,
            name: at("name")?,
        })
    }

    fn extract(&self, row: usize, record: &csv::StringRecord) -> RawGame {
        RawGame {
            row,
            name: text_cell(record, self.name),
            developer: text_cell(record, self.developer),
            genre: text_cell(record, self.genre),
            popular_tags: text_cell(record, self.popular_tags),
            game_details: text_cell(record, self.game_details),
            price: record.get(self.price).and_then(parse_price),
        }
    }
}

/// Load every data row from a comma-delimited source with a header row.
pub fn load_games_from_reader<R: Read>(source: R) -> Result<Vec<RawGame>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers)?;
    debug!(?columns, "resolved required columns");

    let mut games = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        games.push(columns.extract(row, &record));
    }

    let unpriced = games.iter().filter(|g| g.price.is_none()).count();
    info!(rows = games.len(), unpriced, "loaded game table");
    Ok(games)
}

/// Load every data row from the file at `path`.
pub fn load_games<P: AsRef<Path>>(path: P) -> Result<Vec<RawGame>> {
    let path = path.as_ref();
    debug!("opening dataset {:?}", path);
    let file = File::open(path)?;
    load_games_from_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "url,name,developer,popular_tags,game_details,genre,original_price\n";

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("$59.99"), Some(59.99));
        assert_eq!(parse_price("$19.99"), Some(19.99));
        assert_eq!(parse_price("€5"), Some(5.0));
        assert_eq!(parse_price("Free"), None);
        assert_eq!(parse_price("Free to Play"), None);
        assert_eq!(parse_price("$"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("$inf"), None);
    }

    #[test]
    fn test_is_missing() {
        assert!(is_missing(""));
        assert!(is_missing("   "));
        assert!(is_missing("NaN"));
        assert!(is_missing("N/A"));
        assert!(!is_missing("Action"));
        assert!(!is_missing("0"));
    }

    #[test]
    fn test_load_rows_in_order() {
        let csv = format!(
            "{HEADER}\
             u1,DOOM,id Software,\"FPS,Gore\",Single-player,Action,$19.99\n\
             u2,Dota 2,Valve,\"MOBA,Free to Play\",Multi-player,\"Action,Strategy\",Free\n"
        );
        let games = load_games_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].row, 0);
        assert_eq!(games[0].name.as_deref(), Some("DOOM"));
        assert_eq!(games[0].popular_tags.as_deref(), Some("FPS,Gore"));
        assert_eq!(games[0].price, Some(19.99));
        assert_eq!(games[1].row, 1);
        assert_eq!(games[1].price, None);
    }

    #[test]
    fn test_empty_cells_are_missing() {
        let csv = format!("{HEADER}u1,Mystery,,Tags,Details,Genre,$29.99\n");
        let games = load_games_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(games[0].developer, None);
        assert_eq!(games[0].genre.as_deref(), Some("Genre"));
    }

    #[test]
    fn test_short_row_is_tolerated() {
        let csv = format!("{HEADER}u1,Truncated,Dev\n");
        let games = load_games_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].developer.as_deref(), Some("Dev"));
        assert_eq!(games[0].genre, None);
        assert_eq!(games[0].price, None);
    }

    #[test]
    fn test_missing_columns_schema_error() {
        let csv = "name,developer,genre\nDOOM,id Software,Action\n";
        match load_games_from_reader(csv.as_bytes()) {
            Err(Error::Schema { missing }) => {
                assert_eq!(missing, vec!["original_price", "game_details", "popular_tags"]);
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_column_order_is_irrelevant() {
        let csv = "original_price,name,genre,game_details,popular_tags,developer,extra\n\
                   $39.99,Witcher,RPG,Single-player,Open World,CD PROJEKT RED,x\n";
        let games = load_games_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(games[0].name.as_deref(), Some("Witcher"));
        assert_eq!(games[0].developer.as_deref(), Some("CD PROJEKT RED"));
        assert_eq!(games[0].price, Some(39.99));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.csv");
        std::fs::write(&path, format!("{HEADER}u1,DOOM,id,FPS,SP,Action,$19.99\n")).unwrap();

        let games = load_games(&path).unwrap();
        assert_eq!(games.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_games(dir.path().join("nope.csv"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
