//! Extraction of titles and artists from an Anghami playlist export.
//!
//! The export renders every track as a row of `div.cell` elements. Titles sit
//! in a `span` inside a title cell (long titles get an extra `marquee` class so
//! they scroll), artists are the whole text of an artist cell:
//!
//! ```html
//! <div class="cell cell-title"><span>Song A</span></div>
//! <div class="cell cell-artist">Artist X</div>
//! <div class="cell cell-title marquee"><span>A Very Long Song Title</span></div>
//! <div class="cell cell-artist">Artist Y</div>
//! ```

use std::{collections::BTreeSet, path::Path};

use scraper::{ElementRef, Html};

use crate::error::{Error, Result};

/// Matches elements by tag name and exact class set.
#[derive(Debug, Clone, Copy)]
pub struct CellSelector {
    pub tag: &'static str,
    pub classes: &'static [&'static str],
}

impl CellSelector {
    pub fn matches(&self, element: &ElementRef) -> bool {
        let value = element.value();
        if value.name() != self.tag {
            return false;
        }

        let classes: BTreeSet<&str> = value.classes().collect();
        classes.len() == self.classes.len() && self.classes.iter().all(|c| classes.contains(c))
    }
}

/// Title cells. An element matching any alternative is a title cell.
pub const TITLE_CELLS: &[CellSelector] = &[
    CellSelector {
        tag: "div",
        classes: &["cell", "cell-title"],
    },
    CellSelector {
        tag: "div",
        classes: &["cell", "cell-title", "marquee"],
    },
];

pub const ARTIST_CELL: CellSelector = CellSelector {
    tag: "div",
    classes: &["cell", "cell-artist"],
};

/// Element inside a title cell holding the title text.
pub const TITLE_TEXT_TAG: &str = "span";

/// Reads the export at `path`.
///
/// # Errors
///
/// [`Error::SourceNotFound`] when the file is missing or not readable as UTF-8.
pub async fn read_source(path: &Path) -> Result<String> {
    async_fs::read_to_string(path)
        .await
        .map_err(|source| Error::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads the export at `path` and extracts `(titles, artists)`.
pub async fn parse_file(path: &Path) -> Result<(Vec<String>, Vec<String>)> {
    let content = read_source(path).await?;
    Ok(extract_songs_and_artists(&content))
}

/// Extracts titles and artists in document order.
///
/// The two sequences are returned as found; checking that they line up is the
/// caller's job.
pub fn extract_songs_and_artists(content: &str) -> (Vec<String>, Vec<String>) {
    let document = Html::parse_document(content);

    let mut titles = Vec::new();
    let mut artists = Vec::new();

    for element in document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
    {
        if TITLE_CELLS.iter().any(|s| s.matches(&element)) {
            titles.push(title_text(&element));
        } else if ARTIST_CELL.matches(&element) {
            artists.push(element.text().collect());
        }
    }

    (titles, artists)
}

fn title_text(cell: &ElementRef) -> String {
    cell.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == TITLE_TEXT_TAG)
        .map(|e| e.text().collect())
        .unwrap_or_default()
}
