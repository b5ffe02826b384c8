//! Sortable table of ranked destinations.

use dioxus::prelude::*;
use reunion_core::{ResultRow, SortColumn, SortOrder, SortState};

/// Header arrow for the active column
fn sort_marker(sort: &SortState, column: SortColumn) -> &'static str {
    if sort.column != column {
        return "";
    }
    match sort.order {
        SortOrder::Ascending => " \u{25B2}",
        SortOrder::Descending => " \u{25BC}",
    }
}

/// Display strings for one row
struct RowCells {
    key: String,
    rank: String,
    iata: String,
    destination_fit: String,
    distance_fit: String,
    vibe_fit: String,
    city: String,
    location: String,
}

impl From<ResultRow> for RowCells {
    fn from(row: ResultRow) -> Self {
        let location = match row.coordinates() {
            Some((lat, lon)) => format!("{:.3}, {:.3}", lat, lon),
            None => "-".to_string(),
        };
        Self {
            key: format!("{}-{}", row.rank, row.iata),
            rank: row.rank.to_string(),
            destination_fit: format!("{:.2}", row.destination_fit),
            distance_fit: format!("{:.2}", row.distance_fit),
            vibe_fit: format!("{:.2}", row.vibe_fit),
            iata: row.iata,
            city: row.city,
            location,
        }
    }
}

/// Results table.
///
/// # Props
///
/// * `rows` - Rows in load order; sorting happens here
/// * `sort` - Active column and direction
/// * `on_sort` - Called with the header that was clicked
#[component]
pub fn ResultsTable(
    rows: Vec<ResultRow>,
    sort: SortState,
    on_sort: EventHandler<SortColumn>,
) -> Element {
    let headers: Vec<(SortColumn, String)> = SortColumn::all()
        .iter()
        .map(|&column| (column, format!("{}{}", column.label(), sort_marker(&sort, column))))
        .collect();
    let cells: Vec<RowCells> = sort.apply(&rows).into_iter().map(RowCells::from).collect();

    rsx! {
        table { class: "results-table",
            thead {
                tr {
                    for (column, title) in headers {
                        th {
                            key: "{title}",
                            class: if sort.column == column {
                                "sortable active"
                            } else {
                                "sortable"
                            },
                            onclick: move |_| on_sort.call(column),
                            "{title}"
                        }
                    }
                    th { "City" }
                    th { "Location" }
                }
            }
            tbody {
                for row in cells {
                    tr { key: "{row.key}",
                        td { "{row.rank}" }
                        td { "{row.iata}" }
                        td { "{row.destination_fit}" }
                        td { "{row.distance_fit}" }
                        td { "{row.vibe_fit}" }
                        td { "{row.city}" }
                        td { "{row.location}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_cells_format_fits() {
        let row = ResultRow {
            rank: 3,
            iata: "LIS".into(),
            city: "Lisbon".into(),
            destination_fit: 0.5,
            distance_fit: 0.25,
            vibe_fit: 1.0,
            latitude: None,
            longitude: None,
        };
        let cells = RowCells::from(row);
        assert_eq!(cells.key, "3-LIS");
        assert_eq!(cells.distance_fit, "0.25");
        assert_eq!(cells.vibe_fit, "1.00");
        assert_eq!(cells.location, "-");
    }

    #[test]
    fn test_marker_only_on_active_column() {
        let mut sort = SortState::default();
        assert_eq!(sort_marker(&sort, SortColumn::Rank), " \u{25B2}");
        assert_eq!(sort_marker(&sort, SortColumn::Iata), "");

        sort.select(SortColumn::Rank);
        assert_eq!(sort_marker(&sort, SortColumn::Rank), " \u{25BC}");
    }
}
