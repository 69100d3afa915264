use std::sync::LazyLock;

use regex::Regex;

use super::markup::{labeled_item, LIST_OPEN, PARAGRAPH_BREAK};
use crate::hardness::HardnessCategory;
use crate::material::{MaterialCategory, MaterialRecord};

static ABRASIVE_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("valid size pattern"));

const DEFAULT_FINAL_STEP: &str = "0.05μm colloidal silica";

struct PolishingParams {
    coarse_pressure: &'static str,
    medium_pressure: &'static str,
    fine_pressure: &'static str,
    pad: &'static str,
    final_pad: &'static str,
    warning: &'static str,
    default_diamonds: [&'static str; 3],
}

fn params_for(hardness: HardnessCategory) -> PolishingParams {
    match hardness {
        HardnessCategory::Soft => PolishingParams {
            coarse_pressure: "20-25 N per 30 mm sample",
            medium_pressure: "15-20 N",
            fine_pressure: "12-18 N",
            pad: "soft synthetic pad",
            final_pad: "soft final polishing pad (e.g., MICROPAD)",
            warning: "Monitor constantly for smearing and reduce pressure if any deformation is observed",
            default_diamonds: ["6μm diamond", "3μm diamond", "1μm diamond"],
        },
        HardnessCategory::Medium => PolishingParams {
            coarse_pressure: "25-35 N per 30 mm sample",
            medium_pressure: "20-30 N",
            fine_pressure: "20-30 N",
            pad: "medium-hard synthetic pad",
            final_pad: "high-napped final polishing pad (e.g., MICROPAD)",
            warning: "ensure complete scratch removal at each step",
            default_diamonds: ["9μm diamond", "3μm diamond", "1μm diamond"],
        },
        HardnessCategory::Hard | HardnessCategory::VeryHard => PolishingParams {
            coarse_pressure: "30-40 N per 30 mm sample",
            medium_pressure: "25-35 N",
            fine_pressure: "25-35 N",
            pad: "medium-hard synthetic pad",
            final_pad: "high-napped final polishing pad (e.g., MICROPAD)",
            warning: "the hard material may require longer polishing times",
            default_diamonds: ["9μm diamond", "3μm diamond", "1μm diamond"],
        },
    }
}

/// Splits a polishing sequence into ordered diamond steps and the last final-polish step.
fn split_sequence(sequence: &[String]) -> (Vec<&str>, Option<&str>) {
    let mut diamonds = Vec::new();
    let mut final_step = None;

    for step in sequence {
        let lower = step.to_lowercase();
        if lower.contains("colloidal") || lower.contains("silica") || lower.contains("0.05") {
            final_step = Some(step.as_str());
        } else if lower.contains("diamond") {
            diamonds.push(step.as_str());
        }
    }

    (diamonds, final_step)
}

fn abrasive_size<'a>(step: &'a str, fallback: &'a str) -> &'a str {
    ABRASIVE_SIZE
        .find(step)
        .map(|m| m.as_str())
        .unwrap_or(fallback)
}

pub fn polishing_notes(
    _record: &MaterialRecord,
    category: MaterialCategory,
    hardness: HardnessCategory,
    sequence: &[String],
) -> String {
    let params = params_for(hardness);
    let (mut diamonds, final_step) = split_sequence(sequence);
    if diamonds.is_empty() {
        diamonds = params.default_diamonds.to_vec();
    }
    let final_step = final_step.unwrap_or(DEFAULT_FINAL_STEP);

    let mut steps = String::new();
    if let Some(first) = diamonds.first() {
        let size = abrasive_size(first, "6");
        steps.push_str(&labeled_item(
            &format!("{size}μm diamond"),
            &format!(
                "2-4 minutes on a {} (e.g., TEXPAN) with light to moderate pressure ({}). Start with {}μm to minimize damage. {}.",
                params.pad, params.coarse_pressure, size, params.warning
            ),
        ));
    }
    if let Some(second) = diamonds.get(1) {
        let size = abrasive_size(second, "3");
        steps.push_str(&labeled_item(
            &format!("{size}μm diamond"),
            &format!(
                "2-4 minutes on a {} (e.g., TEXPAN) with light pressure ({}). Continue removing scratches from previous step.",
                params.pad, params.medium_pressure
            ),
        ));
    }
    if let Some(third) = diamonds.get(2) {
        let size = abrasive_size(third, "1");
        steps.push_str(&labeled_item(
            &format!("{size}μm diamond"),
            &format!(
                "2-3 minutes on a {} with lighter pressure ({}). These pads provide gentle material removal.",
                params.pad, params.fine_pressure
            ),
        ));
    }
    steps.push_str(&labeled_item(
        final_step,
        &format!(
            "1-2 minutes on a {} with very light pressure. This removes any remaining fine scratches and prepares the surface for etching. Monitor for relief - reduce polishing time if excessive relief develops.",
            params.final_pad
        ),
    ));

    let mut intro = format!(
        "The {}ness requires careful polishing. Use diamond polishing with appropriate polishing pads for each stage. Apply light to moderate pressure throughout to prevent deformation.",
        hardness
    );
    if category.is_light_alloy() {
        intro.push_str(" The work hardening behavior means strain-hardened material may show different polishing characteristics than annealed material.");
    }

    format!(
        "{intro}{PARAGRAPH_BREAK}<strong>Diamond polishing sequence:</strong>{LIST_OPEN}{steps}</ul>Use appropriate polishing lubricants. The {hardness} material means polishing times should be sufficient but not excessive - avoid over-polishing which can cause relief and affect grain boundary revelation. Monitor the surface frequently under the microscope to check for smearing or excessive relief."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn notes(category: MaterialCategory, hardness: HardnessCategory, sequence: &[String]) -> String {
        polishing_notes(&MaterialRecord::default(), category, hardness, sequence)
    }

    #[test]
    fn test_soft_defaults() {
        let n = notes(MaterialCategory::Other, HardnessCategory::Soft, &[]);
        assert!(n.contains("<strong>6μm diamond:</strong> 2-4 minutes on a soft synthetic pad (e.g., TEXPAN) with light to moderate pressure (20-25 N per 30 mm sample). Start with 6μm to minimize damage. Monitor constantly for smearing"));
        assert!(n.contains("<strong>3μm diamond:</strong>"));
        assert!(n.contains("<strong>1μm diamond:</strong> 2-3 minutes on a soft synthetic pad with lighter pressure (12-18 N)."));
        assert!(n.contains("<strong>0.05μm colloidal silica:</strong> 1-2 minutes on a soft final polishing pad (e.g., MICROPAD)"));
    }

    #[test]
    fn test_harder_defaults_start_at_nine_micron() {
        let n = notes(MaterialCategory::Other, HardnessCategory::Hard, &[]);
        assert!(n.contains("<strong>9μm diamond:</strong>"));
        assert!(n.contains("(30-40 N per 30 mm sample)"));
        assert!(n.contains("high-napped final polishing pad"));
        assert!(!n.contains("6μm"));
    }

    #[test]
    fn test_supplied_sequence_is_used() {
        let n = notes(
            MaterialCategory::Other,
            HardnessCategory::Medium,
            &seq(&["3 μm diamond", "1μm diamond", "OP-S colloidal silica"]),
        );
        assert!(n.contains("<strong>3μm diamond:</strong> 2-4 minutes on a medium-hard synthetic pad (e.g., TEXPAN) with light to moderate pressure"));
        assert!(n.contains("<strong>1μm diamond:</strong> 2-4 minutes"));
        assert!(n.contains("<strong>OP-S colloidal silica:</strong>"));
        assert_eq!(n.matches("<li>").count(), 3);
    }

    #[test]
    fn test_only_three_diamond_steps() {
        let n = notes(
            MaterialCategory::Other,
            HardnessCategory::Medium,
            &seq(&["15μm diamond", "9μm diamond", "6μm diamond", "1μm diamond"]),
        );
        assert_eq!(n.matches("<li>").count(), 4);
        assert!(n.contains("<strong>15μm diamond:</strong>"));
        assert!(!n.contains("<strong>1μm diamond:</strong>"));
    }

    #[test]
    fn test_last_final_step_wins_and_decimal_sizes() {
        let n = notes(
            MaterialCategory::Other,
            HardnessCategory::Medium,
            &seq(&["0.25 diamond paste", "silica suspension", "0.05 alumina"]),
        );
        assert!(n.contains("<strong>0.05 alumina:</strong>"));
        assert!(!n.contains("silica suspension"));
        assert!(n.contains("<strong>0.25μm diamond:</strong>"));
    }

    #[test]
    fn test_missing_size_falls_back_by_position() {
        let n = notes(
            MaterialCategory::Other,
            HardnessCategory::Medium,
            &seq(&["coarse diamond", "fine diamond"]),
        );
        assert!(n.contains("<strong>6μm diamond:</strong>"));
        assert!(n.contains("<strong>3μm diamond:</strong>"));
    }

    #[test]
    fn test_light_alloy_caveat() {
        let n = notes(MaterialCategory::MagnesiumAlloy, HardnessCategory::Soft, &[]);
        assert!(n.starts_with("The softness requires careful polishing."));
        assert!(n.contains("strain-hardened material may show different polishing characteristics"));
        assert!(n.contains("The soft material means polishing times"));
    }
}
