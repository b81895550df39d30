//! Room fixture extraction from the tab-separated inventory table.
//!
//! Each physical line packs one or more groups of four cells
//! (room number, headboard, TV, safe) side by side. Groups whose first cell is
//! not a pure digit string are headers or gaps and are skipped.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::FIXTURE_GROUP_WIDTH;
use crate::error::{CoreError, Result};

static ROOM_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("room number pattern is valid"));

/// Sparse equipment record for one room. Absent fields had empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headboard: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe: Option<String>,
}

impl FixtureRecord {
    /// Builds a record from already-trimmed cells, or `None` when all are empty.
    fn from_cells(headboard: &str, tv: &str, safe: &str) -> Option<Self> {
        let record = Self {
            headboard: non_empty(headboard),
            tv: non_empty(tv),
            safe: non_empty(safe),
        };
        (!record.is_empty()).then_some(record)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headboard.is_none() && self.tv.is_none() && self.safe.is_none()
    }
}

fn non_empty(cell: &str) -> Option<String> {
    (!cell.is_empty()).then(|| cell.to_owned())
}

/// Room number -> fixture record lookup produced by one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixtureTable(BTreeMap<String, FixtureRecord>);

impl FixtureTable {
    #[must_use]
    pub fn get(&self, room_number: &str) -> Option<&FixtureRecord> {
        self.0.get(room_number)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FixtureRecord)> {
        self.0.iter().map(|(number, record)| (number.as_str(), record))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders the table as a Rust module for embedding into a room catalog.
    #[must_use]
    pub fn to_rust_source(&self) -> String {
        let mut out = String::from(
            "//! Generated by `roomlog extract`. Do not edit by hand.\n\
             \n\
             #[derive(Debug, Clone, Copy, PartialEq, Eq)]\n\
             pub struct RoomFixture {\n    \
                 pub headboard: Option<&'static str>,\n    \
                 pub tv: Option<&'static str>,\n    \
                 pub safe: Option<&'static str>,\n\
             }\n\
             \n\
             pub static ROOM_FIXTURES: &[(&str, RoomFixture)] = &[\n",
        );
        for (number, record) in self.iter() {
            // Writing into a String cannot fail.
            let _ = writeln!(
                out,
                "    ({number:?}, RoomFixture {{ headboard: {}, tv: {}, safe: {} }}),",
                option_literal(record.headboard.as_deref()),
                option_literal(record.tv.as_deref()),
                option_literal(record.safe.as_deref()),
            );
        }
        out.push_str("];\n");
        out
    }
}

fn option_literal(value: Option<&str>) -> String {
    value.map_or_else(|| "None".to_owned(), |v| format!("Some({v:?})"))
}

/// Extracts per-room fixture records from the raw inventory text.
///
/// Never fails: blank lines, non-numeric room cells and all-empty groups are
/// skipped. A later group for the same room replaces an earlier record only
/// when it carries at least one non-empty cell.
#[must_use]
pub fn extract(raw: &str) -> FixtureTable {
    let mut table = BTreeMap::new();
    let mut lines = 0usize;
    let mut skipped = 0usize;

    for line in raw.lines().filter(|l| !l.trim().is_empty()) {
        lines += 1;
        let cells: Vec<&str> = line.split('\t').collect();
        for group in cells.chunks(FIXTURE_GROUP_WIDTH) {
            let cell = |i: usize| group.get(i).map_or("", |c| c.trim());
            let room = cell(0);
            if !ROOM_NUMBER.is_match(room) {
                skipped += 1;
                continue;
            }
            match FixtureRecord::from_cells(cell(1), cell(2), cell(3)) {
                Some(record) => {
                    table.insert(room.to_owned(), record);
                },
                None => skipped += 1,
            }
        }
    }

    tracing::debug!(lines, skipped, rooms = table.len(), "extracted room fixtures");
    FixtureTable(table)
}

/// Reads and extracts an inventory file. Fails only when the file cannot be read as text.
pub fn extract_file(path: &Path) -> Result<FixtureTable> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| CoreError::Read { path: path.to_path_buf(), source })?;
    Ok(extract(&raw))
}
