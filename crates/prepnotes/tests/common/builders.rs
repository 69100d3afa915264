//! Builders for creating test records and tables programmatically.

#![allow(dead_code)]

use prepnotes::{MaterialRecord, Stage};

/// Column layout of the site's materials export, including columns the tool never reads.
pub const HEADERS: &[&str] = &[
    "id",
    "name",
    "slug",
    "category",
    "hardness",
    "hardness_hb",
    "hardness_hrc",
    "hardness_hv",
    "composition",
    "microstructure",
    "sectioning_notes",
    "mounting_notes",
    "grinding_notes",
    "polishing_notes",
    "etching_notes",
    "recommended_grinding_sequence",
    "recommended_polishing_sequence",
    "common_etchants",
    "status",
    "updated_at",
];

/// Builder for `MaterialRecord` instances.
pub struct MaterialBuilder {
    record: MaterialRecord,
}

impl MaterialBuilder {
    /// A published record with every other field empty.
    pub fn new(name: &str, category: &str) -> Self {
        Self {
            record: MaterialRecord {
                name: name.to_string(),
                category: category.to_string(),
                status: "published".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn hardness(mut self, hardness: &str) -> Self {
        self.record.hardness = hardness.to_string();
        self
    }

    pub fn hardness_hb(mut self, value: &str) -> Self {
        self.record.hardness_hb = value.to_string();
        self
    }

    pub fn hardness_hrc(mut self, value: &str) -> Self {
        self.record.hardness_hrc = value.to_string();
        self
    }

    pub fn hardness_hv(mut self, value: &str) -> Self {
        self.record.hardness_hv = value.to_string();
        self
    }

    pub fn microstructure(mut self, value: &str) -> Self {
        self.record.microstructure = value.to_string();
        self
    }

    pub fn note(mut self, stage: Stage, note: &str) -> Self {
        self.record.set_note(stage, note.to_string());
        self
    }

    pub fn grinding_sequence(mut self, json: &str) -> Self {
        self.record.recommended_grinding_sequence = json.to_string();
        self
    }

    pub fn polishing_sequence(mut self, json: &str) -> Self {
        self.record.recommended_polishing_sequence = json.to_string();
        self
    }

    pub fn etchants(mut self, json: &str) -> Self {
        self.record.common_etchants = json.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.record.status = status.to_string();
        self
    }

    pub fn build(self) -> MaterialRecord {
        self.record
    }
}

/// Lays a record out in `HEADERS` order. `id`, `slug` and `updated_at` are
/// derived from `index` and the name so every row carries untouched columns.
pub fn record_to_row(index: usize, record: &MaterialRecord) -> Vec<String> {
    HEADERS
        .iter()
        .map(|header| match *header {
            "id" => format!("{}", index + 1),
            "name" => record.name.clone(),
            "slug" => record.name.to_lowercase().replace(' ', "-"),
            "category" => record.category.clone(),
            "hardness" => record.hardness.clone(),
            "hardness_hb" => record.hardness_hb.clone(),
            "hardness_hrc" => record.hardness_hrc.clone(),
            "hardness_hv" => record.hardness_hv.clone(),
            "composition" => record.composition.clone(),
            "microstructure" => record.microstructure.clone(),
            "sectioning_notes" => record.sectioning_notes.clone(),
            "mounting_notes" => record.mounting_notes.clone(),
            "grinding_notes" => record.grinding_notes.clone(),
            "polishing_notes" => record.polishing_notes.clone(),
            "etching_notes" => record.etching_notes.clone(),
            "recommended_grinding_sequence" => record.recommended_grinding_sequence.clone(),
            "recommended_polishing_sequence" => record.recommended_polishing_sequence.clone(),
            "common_etchants" => record.common_etchants.clone(),
            "status" => record.status.clone(),
            "updated_at" => "2024-05-01 12:00:00+00".to_string(),
            other => panic!("unmapped header {other}"),
        })
        .collect()
}

/// Builder for a whole materials table.
pub struct TableBuilder {
    records: Vec<MaterialRecord>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn record(mut self, record: MaterialRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn build(self) -> prepnotes::Table {
        let headers = HEADERS.iter().map(|h| h.to_string()).collect();
        let rows = self
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| record_to_row(i, r))
            .collect();
        prepnotes::Table::new(headers, rows)
    }

    pub fn to_text(self) -> String {
        self.build().to_text()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The aluminum record from the end-to-end acceptance example.
pub fn aluminum_example() -> MaterialRecord {
    MaterialBuilder::new("6061 Aluminum", "Aluminum Alloy")
        .hardness("80 HB")
        .hardness_hb("80")
        .build()
}
