//! Typed view over one row of the materials table.

use std::fmt;

use crate::error::TableError;
use crate::store::Table;

/// Material family, parsed by exact label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialCategory {
    Ceramic,
    TitaniumAlloy,
    StainlessSteel,
    CarbonSteel,
    AluminumAlloy,
    CopperAlloy,
    NickelAlloy,
    ToolSteel,
    CastIron,
    MagnesiumAlloy,
    Other,
}

impl MaterialCategory {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Ceramic" => Self::Ceramic,
            "Titanium Alloy" => Self::TitaniumAlloy,
            "Stainless Steel" => Self::StainlessSteel,
            "Carbon Steel" => Self::CarbonSteel,
            "Aluminum Alloy" => Self::AluminumAlloy,
            "Copper Alloy" => Self::CopperAlloy,
            "Nickel Alloy" => Self::NickelAlloy,
            "Tool Steel" => Self::ToolSteel,
            "Cast Iron" => Self::CastIron,
            "Magnesium Alloy" => Self::MagnesiumAlloy,
            _ => Self::Other,
        }
    }

    /// Aluminum and magnesium share most soft, non-ferrous guidance.
    pub fn is_light_alloy(self) -> bool {
        matches!(self, Self::AluminumAlloy | Self::MagnesiumAlloy)
    }
}

/// One step of metallographic sample preparation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Sectioning,
    Mounting,
    Grinding,
    Polishing,
    Etching,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Sectioning,
        Stage::Mounting,
        Stage::Grinding,
        Stage::Polishing,
        Stage::Etching,
    ];

    pub fn note_column(self) -> &'static str {
        match self {
            Stage::Sectioning => "sectioning_notes",
            Stage::Mounting => "mounting_notes",
            Stage::Grinding => "grinding_notes",
            Stage::Polishing => "polishing_notes",
            Stage::Etching => "etching_notes",
        }
    }

    /// Column holding the JSON-array sequence this stage is templated from.
    pub fn sequence_column(self) -> Option<&'static str> {
        match self {
            Stage::Sectioning | Stage::Mounting => None,
            Stage::Grinding => Some("recommended_grinding_sequence"),
            Stage::Polishing => Some("recommended_polishing_sequence"),
            Stage::Etching => Some("common_etchants"),
        }
    }

    fn index(self) -> usize {
        match self {
            Stage::Sectioning => 0,
            Stage::Mounting => 1,
            Stage::Grinding => 2,
            Stage::Polishing => 3,
            Stage::Etching => 4,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Sectioning => "sectioning",
            Stage::Mounting => "mounting",
            Stage::Grinding => "grinding",
            Stage::Polishing => "polishing",
            Stage::Etching => "etching",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialRecord {
    pub name: String,
    pub category: String,
    pub hardness: String,
    pub hardness_hb: String,
    pub hardness_hrc: String,
    pub hardness_hv: String,
    pub composition: String,
    pub microstructure: String,
    pub sectioning_notes: String,
    pub mounting_notes: String,
    pub grinding_notes: String,
    pub polishing_notes: String,
    pub etching_notes: String,
    pub recommended_grinding_sequence: String,
    pub recommended_polishing_sequence: String,
    pub common_etchants: String,
    pub status: String,
}

impl MaterialRecord {
    pub fn category_kind(&self) -> MaterialCategory {
        MaterialCategory::from_label(&self.category)
    }

    pub fn note(&self, stage: Stage) -> &str {
        match stage {
            Stage::Sectioning => &self.sectioning_notes,
            Stage::Mounting => &self.mounting_notes,
            Stage::Grinding => &self.grinding_notes,
            Stage::Polishing => &self.polishing_notes,
            Stage::Etching => &self.etching_notes,
        }
    }

    pub fn set_note(&mut self, stage: Stage, note: String) {
        let slot = match stage {
            Stage::Sectioning => &mut self.sectioning_notes,
            Stage::Mounting => &mut self.mounting_notes,
            Stage::Grinding => &mut self.grinding_notes,
            Stage::Polishing => &mut self.polishing_notes,
            Stage::Etching => &mut self.etching_notes,
        };
        *slot = note;
    }

    /// Raw JSON-array cell for the stage, or `""` for stages without one.
    pub fn sequence(&self, stage: Stage) -> &str {
        match stage {
            Stage::Sectioning | Stage::Mounting => "",
            Stage::Grinding => &self.recommended_grinding_sequence,
            Stage::Polishing => &self.recommended_polishing_sequence,
            Stage::Etching => &self.common_etchants,
        }
    }
}

/// Column positions resolved once per table.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    name: usize,
    status: usize,
    notes: [usize; 5],
    category: Option<usize>,
    hardness: Option<usize>,
    hardness_hb: Option<usize>,
    hardness_hrc: Option<usize>,
    hardness_hv: Option<usize>,
    composition: Option<usize>,
    microstructure: Option<usize>,
    grinding_sequence: Option<usize>,
    polishing_sequence: Option<usize>,
    etchants: Option<usize>,
}

impl ColumnIndex {
    /// Resolves columns against the table header. `name`, `status` and the
    /// five note columns are required; everything else reads as empty when absent.
    pub fn resolve(table: &Table, source: &std::path::Path) -> Result<Self, TableError> {
        let required = |column: &str| {
            table.column(column).ok_or_else(|| TableError::MissingColumn {
                path: source.to_path_buf(),
                column: column.to_string(),
            })
        };

        let mut notes = [0usize; 5];
        for stage in Stage::ALL {
            notes[stage.index()] = required(stage.note_column())?;
        }

        Ok(Self {
            name: required("name")?,
            status: required("status")?,
            notes,
            category: table.column("category"),
            hardness: table.column("hardness"),
            hardness_hb: table.column("hardness_hb"),
            hardness_hrc: table.column("hardness_hrc"),
            hardness_hv: table.column("hardness_hv"),
            composition: table.column("composition"),
            microstructure: table.column("microstructure"),
            grinding_sequence: table.column("recommended_grinding_sequence"),
            polishing_sequence: table.column("recommended_polishing_sequence"),
            etchants: table.column("common_etchants"),
        })
    }

    pub fn status<'t>(&self, table: &'t Table, row: usize) -> &'t str {
        table.cell(row, self.status)
    }

    pub fn record(&self, table: &Table, row: usize) -> MaterialRecord {
        let get = |column: Option<usize>| {
            column
                .map(|c| table.cell(row, c).to_string())
                .unwrap_or_default()
        };
        let note = |stage: Stage| table.cell(row, self.notes[stage.index()]).to_string();

        MaterialRecord {
            name: table.cell(row, self.name).to_string(),
            category: get(self.category),
            hardness: get(self.hardness),
            hardness_hb: get(self.hardness_hb),
            hardness_hrc: get(self.hardness_hrc),
            hardness_hv: get(self.hardness_hv),
            composition: get(self.composition),
            microstructure: get(self.microstructure),
            sectioning_notes: note(Stage::Sectioning),
            mounting_notes: note(Stage::Mounting),
            grinding_notes: note(Stage::Grinding),
            polishing_notes: note(Stage::Polishing),
            etching_notes: note(Stage::Etching),
            recommended_grinding_sequence: get(self.grinding_sequence),
            recommended_polishing_sequence: get(self.polishing_sequence),
            common_etchants: get(self.etchants),
            status: self.status(table, row).to_string(),
        }
    }

    /// Copies the given stage notes from `record` back into the row.
    pub fn write_notes(&self, table: &mut Table, row: usize, record: &MaterialRecord, stages: &[Stage]) {
        for &stage in stages {
            table.set_cell(row, self.notes[stage.index()], record.note(stage).to_string());
        }
    }
}
