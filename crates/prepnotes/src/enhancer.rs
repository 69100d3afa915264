//! Replaces brief stage notes on a single record.

use tracing::debug;

use crate::hardness::{classify, HardnessCategory};
use crate::material::{MaterialRecord, Stage};
use crate::notes::{
    etching_notes, grinding_notes, is_brief, mounting_notes, parse_sequence, polishing_notes,
    sectioning_notes,
};

/// What [`enhance`] did to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enhancement {
    pub hardness: HardnessCategory,
    /// Stages whose note text changed, in [`Stage::ALL`] order.
    pub changed: Vec<Stage>,
}

impl Enhancement {
    pub fn is_changed(&self) -> bool {
        !self.changed.is_empty()
    }
}

/// Generates the note for one stage from the record's current facts.
pub fn generate(record: &MaterialRecord, stage: Stage, hardness: HardnessCategory) -> String {
    let category = record.category_kind();
    match stage {
        Stage::Sectioning => sectioning_notes(record, category, hardness),
        Stage::Mounting => mounting_notes(record, category, hardness),
        Stage::Grinding => {
            let sequence = parse_sequence(record.sequence(stage));
            grinding_notes(record, category, hardness, &sequence)
        }
        Stage::Polishing => {
            let sequence = parse_sequence(record.sequence(stage));
            polishing_notes(record, category, hardness, &sequence)
        }
        Stage::Etching => {
            let sequence = parse_sequence(record.sequence(stage));
            etching_notes(record, category, hardness, &sequence)
        }
    }
}

/// Overwrites every brief stage note with a generated one. Notes that are
/// already detailed are left alone, and stages never read each other's notes.
pub fn enhance(record: &mut MaterialRecord) -> Enhancement {
    let hardness = classify(
        &record.hardness,
        &record.hardness_hb,
        &record.hardness_hrc,
        &record.hardness_hv,
    );

    let mut changed = Vec::new();
    for stage in Stage::ALL {
        if !is_brief(record.note(stage)) {
            continue;
        }
        let note = generate(record, stage, hardness);
        if note != record.note(stage) {
            debug!(stage = %stage, hardness = %hardness, "Replacing brief note");
            record.set_note(stage, note);
            changed.push(stage);
        }
    }

    Enhancement { hardness, changed }
}
