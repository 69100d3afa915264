use std::sync::LazyLock;

use regex::Regex;

use super::markup::{labeled_item, LIST_OPEN};
use crate::hardness::HardnessCategory;
use crate::material::{MaterialCategory, MaterialRecord};

static CONCENTRATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid concentration pattern"));

const MAX_DETAILED_ETCHANTS: usize = 2;

const SAFETY: &str = "<strong>Safety:</strong> All etchants require proper PPE (gloves, safety glasses, lab coat), proper fume hood, and appropriate safety measures. Handle with care.";

fn default_etchants(category: MaterialCategory) -> &'static [&'static str] {
    use MaterialCategory::*;
    match category {
        CarbonSteel => &["2% Nital", "4% Picral"],
        StainlessSteel => &["Glyceregia", "Aqua Regia", "Electrolytic 10% Oxalic"],
        AluminumAlloy => &["Keller's Reagent", "0.5% HF"],
        TitaniumAlloy => &["Kroll's Reagent", "Modified Kroll's"],
        CopperAlloy | NickelAlloy => &["Ammonium Persulfate", "Ferric Chloride"],
        Ceramic | ToolSteel | CastIron | MagnesiumAlloy | Other => &["Standard etchant"],
    }
}

/// One etchant's reference card: a bold title line followed by a labeled list.
struct EtchantBlock {
    title: String,
    role: &'static str,
    items: Vec<(&'static str, String)>,
}

impl EtchantBlock {
    fn render(&self) -> String {
        let mut html = format!(
            "\n<strong>{} (Chemical Etching)</strong> - {}:{}\n",
            self.title, self.role, LIST_OPEN
        );
        for (label, body) in &self.items {
            html.push_str(&labeled_item(label, body));
            html.push('\n');
        }
        html.push_str("</ul>");
        html
    }
}

fn concentration(etchant: &str, fallback: u32) -> u32 {
    CONCENTRATION
        .find(etchant)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(fallback)
}

fn nital(etchant: &str) -> EtchantBlock {
    let conc = concentration(etchant, 2);
    let ethanol = 100 - i64::from(conc);
    EtchantBlock {
        title: format!("{conc}% Nital"),
        role: "Primary choice for carbon steels",
        items: vec![
            ("Composition", format!("{conc}ml HNO₃ (concentrated), {ethanol}ml ethanol")),
            ("Preparation", "Add nitric acid to ethanol slowly with stirring. Prepare fresh for best results. Solution is stable for several days if stored properly.".to_string()),
            ("Application", "Immerse sample or swab for 5-15 seconds. Standard etchant for carbon steels.".to_string()),
            ("Reveals", "Ferrite grain boundaries and pearlite structure clearly. Excellent for general microstructure examination.".to_string()),
            ("Rinse", "Immediately with water, then ethanol. Dry with compressed air or warm air to avoid staining.".to_string()),
            ("Note", "Prepare fresh when needed. Shelf life: several days. Use in fume hood.".to_string()),
        ],
    }
}

fn picral(etchant: &str) -> EtchantBlock {
    let conc = concentration(etchant, 4);
    EtchantBlock {
        title: format!("{conc}% Picral"),
        role: "For revealing pearlite structure",
        items: vec![
            ("Composition", format!("{conc}g picric acid, 100ml ethanol")),
            ("Preparation", "Dissolve picric acid in ethanol with stirring. Prepare fresh for best results. Solution is stable for several weeks if stored properly.".to_string()),
            ("Application", "Immerse sample or swab for 10-60 seconds. Excellent for revealing pearlite structure without attacking ferrite boundaries.".to_string()),
            ("Reveals", "Pearlite structure clearly with excellent contrast. Less aggressive on ferrite grain boundaries than nital.".to_string()),
            ("Rinse", "Immediately with water, then ethanol. Dry with compressed air.".to_string()),
            ("Note", "Prepare fresh when needed. Shelf life: several weeks if stored properly. Use in fume hood. Picric acid is explosive when dry - keep moist and handle with care.".to_string()),
        ],
    }
}

fn glyceregia() -> EtchantBlock {
    EtchantBlock {
        title: "Glyceregia".to_string(),
        role: "Primary choice for general microstructure",
        items: vec![
            ("Composition", "10ml glycerol, 15ml HCl, 5ml HNO₃".to_string()),
            ("Preparation", "Add acids to glycerol slowly with stirring. Prepare fresh for best results. The glycerol moderates the reaction rate.".to_string()),
            ("Application", "Immerse sample or swab for 10-30 seconds. Classic general-purpose micro-etchant for austenitic stainless steels and nickel alloys.".to_string()),
            ("Reveals", "Grain boundaries, grain structure, and twin boundaries clearly. Excellent for general microstructure examination.".to_string()),
            ("Rinse", "Immediately with water, then ethanol. Dry with compressed air or warm air to avoid staining.".to_string()),
            ("Note", "Prepare fresh when needed. Shelf life: several hours. Use in fume hood.".to_string()),
        ],
    }
}

fn kroll() -> EtchantBlock {
    EtchantBlock {
        title: "Kroll's Reagent".to_string(),
        role: "Primary choice for titanium alloys",
        items: vec![
            ("Composition", "2ml HF, 4ml HNO₃, 94ml H₂O".to_string()),
            ("Preparation", "Add acids to water slowly with stirring. Prepare fresh for best results. Store in plastic container (HF attacks glass).".to_string()),
            ("Application", "Immerse sample or swab for 5-15 seconds. Standard etchant for titanium alloys.".to_string()),
            ("Reveals", "Alpha and beta phases, grain boundaries, and grain structure clearly. Excellent for general microstructure examination.".to_string()),
            ("Rinse", "Immediately with water, then ethanol. Dry with compressed air.".to_string()),
            ("Note", "Prepare fresh when needed. Shelf life: several weeks if stored properly. Use in fume hood. HF is highly toxic - use proper PPE.".to_string()),
        ],
    }
}

fn keller() -> EtchantBlock {
    EtchantBlock {
        title: "Keller's Reagent".to_string(),
        role: "Primary choice for general microstructure",
        items: vec![
            ("Composition", "2ml HF, 3ml HCl, 5ml HNO₃, 190ml H₂O".to_string()),
            ("Preparation", "Add acids to water slowly with stirring. Prepare fresh for best results. Store in plastic container (HF attacks glass).".to_string()),
            ("Application", "Immerse sample or swab for 10-20 seconds. Classic general-purpose micro-etchant for Al alloys.".to_string()),
            ("Reveals", "Grain boundaries and grain structure clearly. Excellent for general microstructure examination.".to_string()),
            ("Rinse", "Immediately with water, then alcohol. Dry with compressed air or warm air to avoid staining.".to_string()),
            ("Note", "Prepare fresh when needed. Shelf life: several weeks if stored properly. Use in fume hood.".to_string()),
        ],
    }
}

fn generic(etchant: &str) -> EtchantBlock {
    EtchantBlock {
        title: etchant.to_string(),
        role: "Standard etchant for this material",
        items: vec![
            ("Application", format!("Follow standard procedures for {etchant}.")),
            ("Reveals", "Grain boundaries and microstructure clearly.".to_string()),
            ("Rinse", "Immediately with water, then ethanol. Dry with compressed air.".to_string()),
            ("Note", "Use appropriate safety measures. Consult material-specific guidelines.".to_string()),
        ],
    }
}

/// Picks the reference card for an etchant by case-insensitive name match.
fn block_for(etchant: &str) -> EtchantBlock {
    let lower = etchant.to_lowercase();
    if lower.contains("nital") {
        nital(etchant)
    } else if lower.contains("picral") {
        picral(etchant)
    } else if lower.contains("glyceregia") {
        glyceregia()
    } else if lower.contains("kroll") {
        kroll()
    } else if lower.contains("keller") {
        keller()
    } else {
        generic(etchant)
    }
}

fn strategy(first_etchant: &str) -> String {
    format!(
        "<strong>Etching Strategy:</strong>{LIST_OPEN}\n\
<li>Start with {first_etchant} for general microstructure examination</li>\n\
<li>Always clean and degrease before etching</li>\n\
<li>Use short initial etch times (a few seconds), check under the microscope, repeat if needed</li>\n\
<li>Check etching progress frequently - over-etching can obscure fine details</li>\n\
</ul>"
    )
}

pub fn etching_notes(
    record: &MaterialRecord,
    category: MaterialCategory,
    _hardness: HardnessCategory,
    etchants: &[String],
) -> String {
    let etchants: Vec<&str> = if etchants.is_empty() {
        default_etchants(category).to_vec()
    } else {
        etchants.iter().map(String::as_str).collect()
    };

    let details: Vec<String> = etchants
        .iter()
        .take(MAX_DETAILED_ETCHANTS)
        .map(|e| block_for(e).render())
        .collect();

    let microstructure = if record.microstructure.is_empty() {
        "microstructure".to_string()
    } else {
        record.microstructure.to_lowercase()
    };
    let intro = format!(
        "{} responds well to standard etchants for {} materials. The {} will reveal clearly with appropriate etchants.",
        record.name,
        record.category.to_lowercase(),
        microstructure
    );

    format!(
        "{} {}{}{}",
        intro,
        details.join(" "),
        strategy(etchants[0]),
        SAFETY
    )
}
