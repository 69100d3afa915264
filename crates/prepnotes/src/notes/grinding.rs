use std::sync::LazyLock;

use regex::Regex;

use super::markup::{labeled_item, LIST_OPEN, PARAGRAPH_BREAK};
use crate::hardness::HardnessCategory;
use crate::material::{MaterialCategory, MaterialRecord};

static GRIT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid grit pattern"));

const DEFAULT_GRITS: [&str; 5] = ["120", "240", "320", "400", "600"];
const MAX_STEPS: usize = 5;

struct GrindingParams {
    pressure: &'static str,
    duration: &'static str,
    warning: &'static str,
}

fn params_for(hardness: HardnessCategory) -> GrindingParams {
    match hardness {
        HardnessCategory::Soft => GrindingParams {
            pressure: "20-30 N per 30 mm sample",
            duration: "20-40 seconds",
            warning: "the soft material is prone to smearing if too much pressure is applied",
        },
        HardnessCategory::Medium => GrindingParams {
            pressure: "25-35 N per 30 mm sample",
            duration: "30-60 seconds",
            warning: "avoid excessive force that could cause work hardening",
        },
        HardnessCategory::Hard | HardnessCategory::VeryHard => GrindingParams {
            pressure: "30-40 N per 30 mm sample",
            duration: "40-90 seconds",
            warning: "the hard material may require longer grinding times",
        },
    }
}

/// Keeps plain grit numbers and anything naming a diamond disc.
fn usable_grits(sequence: &[String]) -> Vec<&str> {
    let grits: Vec<&str> = sequence
        .iter()
        .map(String::as_str)
        .filter(|g| {
            (!g.is_empty() && g.chars().all(|c| c.is_ascii_digit()))
                || g.to_lowercase().contains("diamond")
        })
        .collect();

    if grits.is_empty() {
        DEFAULT_GRITS.to_vec()
    } else {
        grits
    }
}

fn step_items(grits: &[&str], duration: &str) -> String {
    let mut html = String::new();
    // Step position counts entries without a grit number too.
    for (i, grit) in grits.iter().take(MAX_STEPS).enumerate() {
        let Some(number) = GRIT_NUMBER.find(grit) else {
            continue;
        };
        let body = if i == 0 {
            format!(
                "Remove sectioning damage ({}). Use moderate pressure to remove heat-affected zone.",
                duration
            )
        } else {
            format!(
                "Remove previous scratches ({}). Ensure complete scratch removal.",
                duration
            )
        };
        html.push_str(&labeled_item(&format!("{} grit", number.as_str()), &body));
    }
    html
}

pub fn grinding_notes(
    record: &MaterialRecord,
    category: MaterialCategory,
    hardness: HardnessCategory,
    sequence: &[String],
) -> String {
    let params = params_for(hardness);
    let steps = step_items(&usable_grits(sequence), params.duration);

    let mut intro = format!(
        "The {}ness ({}) of {} requires careful grinding. Use standard SiC grinding papers with adequate water lubrication. Disc speed: 200-300 RPM. Apply light to moderate pressure ({}) - {}. Use sharp, fresh grinding papers to minimize deformation.",
        hardness, record.hardness, record.name, params.pressure, params.warning
    );

    if category.is_light_alloy() {
        intro.push_str(" Over-grinding can affect grain boundary revelation during etching. The work hardening behavior means strain-hardened material may show different grinding characteristics than annealed material.");
    }
    if category == MaterialCategory::StainlessSteel {
        intro.push_str(
            " The austenitic structure can work-harden, so use sharp abrasives and avoid excessive pressure.",
        );
    }

    format!(
        "{intro}{PARAGRAPH_BREAK}<strong>Grinding sequence:</strong>{LIST_OPEN}{steps}</ul>Always rotate the specimen holder 90° between steps to ensure complete scratch removal. Use complementary rotation (platen and holder same direction, different speeds) rather than contra-rotation to minimize deformation. Adequate water lubrication is critical - avoid drying during grinding which can cause smearing."
    )
}
