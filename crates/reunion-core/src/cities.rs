//! City list for the destination and starting-point dropdowns.
//!
//! The source is a headerless CSV with one city per row. Only the first
//! column is used.

use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use crate::error::CoreResult;
use crate::types::CityEntry;

/// Parse city rows, trimming whitespace and skipping blank rows.
pub fn parse_cities<R: Read>(reader: R) -> CoreResult<Vec<CityEntry>> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut cities = Vec::new();
    for record in csv.records() {
        let record = record?;
        match record.get(0) {
            Some(name) if !name.is_empty() => cities.push(CityEntry::new(name)),
            _ => {}
        }
    }
    Ok(cities)
}

/// Read and parse a city list file.
pub async fn load_cities(path: impl AsRef<Path>) -> CoreResult<Vec<CityEntry>> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    let cities = parse_cities(bytes.as_slice())?;
    info!(count = cities.len(), "loaded city list from {:?}", path.as_ref());
    Ok(cities)
}

/// Load the city list, falling back to the single sentinel entry.
///
/// The dropdowns stay usable (if useless) when the file is missing or
/// malformed.
pub async fn load_cities_or_fallback(path: impl AsRef<Path>) -> Vec<CityEntry> {
    match load_cities(path.as_ref()).await {
        Ok(cities) if !cities.is_empty() => cities,
        Ok(_) => {
            warn!("city list {:?} is empty, using fallback entry", path.as_ref());
            vec![CityEntry::sentinel()]
        }
        Err(e) => {
            warn!("Error loading cities from {:?}: {}", path.as_ref(), e);
            vec![CityEntry::sentinel()]
        }
    }
}

/// Cities whose name contains `query`, ignoring case.
///
/// An empty query matches nothing so the dropdown waits for typing.
pub fn search_cities<'a>(cities: &'a [CityEntry], query: &str) -> Vec<&'a CityEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    cities
        .iter()
        .filter(|city| city.text.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_skips_blank_rows() {
        let data = "Madrid\n  Lisbon  \n\n   \nBarcelona\n";
        let cities = parse_cities(data.as_bytes()).unwrap();
        let names: Vec<&str> = cities.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(names, vec!["Madrid", "Lisbon", "Barcelona"]);
        assert_eq!(cities[1].id, "Lisbon");
    }

    #[test]
    fn test_parse_keeps_quoted_commas() {
        let data = "\"Washington, D.C.\"\nParis,France\n";
        let cities = parse_cities(data.as_bytes()).unwrap();
        assert_eq!(cities[0].text, "Washington, D.C.");
        assert_eq!(cities[1].text, "Paris");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let cities = vec![CityEntry::new("Madrid"), CityEntry::new("Amsterdam")];
        let found = search_cities(&cities, "AM");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "Amsterdam");
        assert!(search_cities(&cities, " ").is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let cities = load_cities_or_fallback(dir.path().join("missing.csv")).await;
        assert_eq!(cities, vec![CityEntry::sentinel()]);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations.csv");
        std::fs::write(&path, "Rome\nOslo\n").unwrap();
        let cities = load_cities_or_fallback(&path).await;
        assert_eq!(cities.len(), 2);
    }
}
