use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use super::dimensions::SectionShape;
use super::record::{BoxSection, SectionRecord};
use crate::error::SectionError;

/// Box sections of one model, keyed by host section ID.
///
/// Built once per request from the host's section table and handed to the
/// extraction by reference.
#[derive(Debug, Clone, Default)]
pub struct SectionCatalog {
    sections: BTreeMap<u32, BoxSection>,
}

impl SectionCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a `/db/SECT` response (`{"SECT": {"<id>": {..}}}`).
    ///
    /// Entries that are not PSC box sections of a supported shape are skipped,
    /// matching the host's section picker.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::MissingField` when the `SECT` table is absent,
    /// `SectionError::Parse` for malformed box records, and the dimension
    /// errors of the records that claim a supported box shape.
    pub fn from_section_table(response: &Value) -> Result<Self, SectionError> {
        let table = response
            .get("SECT")
            .and_then(Value::as_object)
            .ok_or_else(|| SectionError::MissingField("SECT".to_owned()))?;

        let mut catalog = Self::new();
        for (key, entry) in table {
            let Ok(id) = key.parse::<u32>() else {
                debug!(key = %key, "skipping section with non-numeric id");
                continue;
            };
            if !is_box_entry(entry) {
                debug!(id, "skipping non-box section");
                continue;
            }
            let record: SectionRecord = serde_json::from_value(entry.clone())?;
            catalog.sections.insert(id, record.to_box_section()?);
        }
        debug!(count = catalog.sections.len(), "loaded box sections");
        Ok(catalog)
    }

    /// Next free ID: one past the largest ID in use, or `1` when empty.
    #[must_use]
    pub fn next_id(&self) -> u32 {
        self.sections.keys().next_back().map_or(1, |id| id + 1)
    }

    /// Inserts a section under a fresh ID and returns that ID.
    pub fn insert(&mut self, section: BoxSection) -> u32 {
        let id = self.next_id();
        self.sections.insert(id, section);
        id
    }

    /// Inserts or replaces the section stored under `id`.
    pub fn insert_with_id(&mut self, id: u32, section: BoxSection) -> Option<BoxSection> {
        self.sections.insert(id, section)
    }

    /// Returns the section stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::NotFound` if no such section exists.
    pub fn get(&self, id: u32) -> Result<&BoxSection, SectionError> {
        self.sections.get(&id).ok_or(SectionError::NotFound(id))
    }

    /// `(id, name)` pairs in ascending ID order.
    #[must_use]
    pub fn listing(&self) -> Vec<(u32, &str)> {
        self.sections
            .iter()
            .map(|(id, s)| (*id, s.name.as_str()))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Checks type and shape on the raw entry, so other section kinds are never
/// deserialized.
fn is_box_entry(entry: &Value) -> bool {
    let sect_type = entry.get("SECTTYPE").and_then(Value::as_str);
    let shape = entry
        .get("SECT_BEFORE")
        .and_then(|b| b.get("SHAPE"))
        .and_then(Value::as_str);
    sect_type == Some("PSC") && shape.is_some_and(|s| s.parse::<SectionShape>().is_ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::section::BoxDimensions;
    use serde_json::json;

    fn sizes() -> Value {
        json!({
            "vSIZE_PSC_A": [0.2, 0.3, 0, 0, 2.5, 0],
            "vSIZE_PSC_B": [1.5, 0.5, 0, 0.5, 0, 2.25],
            "vSIZE_PSC_C": [0.24, 0.26, 0, 0, 2.05, 0.71, 0.2, 0, 0, 0.25],
            "vSIZE_PSC_D": [2.2, 0.7, 0, 2.2, 1.932, 0.7, 0, 0]
        })
    }

    #[test]
    fn table_keeps_only_box_sections() {
        let response = json!({
            "SECT": {
                "4": { "SECTTYPE": "PSC", "SECT_NAME": "Span", "SECT_BEFORE": { "SHAPE": "1CEL", "SECT_I": sizes() } },
                "2": { "SECTTYPE": "PSC", "SECT_NAME": "Half", "SECT_BEFORE": { "SHAPE": "PSCH", "SECT_I": sizes() } },
                "1": { "SECTTYPE": "DBUSER", "SECT_NAME": "Pier", "SECT_BEFORE": { "SHAPE": "SB" } },
                "9": { "SECTTYPE": "PSC", "SECT_NAME": "Pier table", "SECT_BEFORE": { "SHAPE": "2CEL", "SECT_I": sizes() } }
            }
        });
        let catalog = SectionCatalog::from_section_table(&response).unwrap();
        assert_eq!(catalog.listing(), vec![(4, "Span"), (9, "Pier table")]);
        assert_eq!(catalog.next_id(), 10);
        assert!(catalog.get(2).is_err());
    }

    #[test]
    fn foreign_section_layouts_are_skipped() {
        let response = json!({
            "SECT": {
                "1": { "SECTTYPE": "PSC", "SECT_NAME": "Span", "SECT_BEFORE": { "SHAPE": "1CEL", "SECT_I": sizes() } },
                "2": { "SECTTYPE": "DBUSER", "SECT_BEFORE": { "SHAPE": "SB", "SECT_I": { "vSIZE": [1.0, 0.5] } } },
                "3": { "SECTTYPE": "VALUE", "SECT_BEFORE": "none" }
            }
        });
        let catalog = SectionCatalog::from_section_table(&response).unwrap();
        assert_eq!(catalog.listing(), vec![(1, "Span")]);
    }

    #[test]
    fn malformed_box_record_is_an_error() {
        let response = json!({
            "SECT": {
                "1": { "SECTTYPE": "PSC", "SECT_BEFORE": { "SHAPE": "2CEL", "SECT_I": { "vSIZE": [1.0] } } }
            }
        });
        assert!(matches!(
            SectionCatalog::from_section_table(&response),
            Err(SectionError::Parse(_))
        ));
    }

    #[test]
    fn missing_table_is_an_error() {
        assert!(matches!(
            SectionCatalog::from_section_table(&json!({ "message": "" })),
            Err(SectionError::MissingField(_))
        ));
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut catalog = SectionCatalog::new();
        assert!(catalog.is_empty());
        let section = BoxSection {
            name: "A".to_owned(),
            dims: BoxDimensions::default(),
        };
        assert_eq!(catalog.insert(section.clone()), 1);
        assert_eq!(catalog.insert(section.clone()), 2);
        assert!(catalog.insert_with_id(2, section).is_some());
        assert_eq!(catalog.len(), 2);
        assert!(matches!(catalog.get(5), Err(SectionError::NotFound(5))));
    }
}
