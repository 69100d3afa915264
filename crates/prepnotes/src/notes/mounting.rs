use super::markup::PARAGRAPH_BREAK;
use crate::hardness::HardnessCategory;
use crate::material::{MaterialCategory, MaterialRecord};

const COLD_MOUNTING: &str = "Cold mounting with epoxy resin is preferred to avoid heat that could affect the microstructure. Use a low-shrinkage epoxy resin for best edge retention. Ensure complete cure before grinding to prevent edge rounding and maintain sample integrity.";

const HOT_MOUNTING: &str = "Hot compression mounting is acceptable if the part tolerates ~150-180°C and moderate pressure (2000-3000 psi for phenolic). Use phenolic or epoxy-phenolic resins. Ensure proper cooling under pressure to minimize shrinkage.";

const CERAMIC_CAVEAT: &str = "The very hard material requires careful handling during mounting to avoid cracking. For cutting tool and wear-resistant applications, ensure the mounting material provides adequate edge retention.";

const DEFORMATION_CAVEAT: &str = "The material requires careful handling during mounting to avoid deformation. For critical applications, ensure the mounting material is compatible with the intended use environment.";

const CORROSION_CAVEAT: &str = "For critical applications, ensure the mounting material is compatible with the intended use environment and provides adequate edge retention for corrosion analysis.";

/// Cold mounting always; hot mounting unless the material is a ceramic.
pub fn mounting_notes(
    _record: &MaterialRecord,
    category: MaterialCategory,
    _hardness: HardnessCategory,
) -> String {
    use MaterialCategory::*;

    let hot_mounting = !matches!(category, Ceramic);
    let caveat = match category {
        Ceramic => Some(CERAMIC_CAVEAT),
        TitaniumAlloy | AluminumAlloy | MagnesiumAlloy => Some(DEFORMATION_CAVEAT),
        StainlessSteel => Some(CORROSION_CAVEAT),
        CarbonSteel | ToolSteel | CastIron | CopperAlloy | NickelAlloy | Other => None,
    };

    let mut out = String::from(COLD_MOUNTING);
    if hot_mounting {
        out.push_str(PARAGRAPH_BREAK);
        out.push_str(HOT_MOUNTING);
    }
    if let Some(caveat) = caveat {
        out.push(' ');
        out.push_str(caveat);
    }
    out
}
