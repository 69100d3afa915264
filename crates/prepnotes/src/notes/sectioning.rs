use crate::hardness::HardnessCategory;
use crate::material::{MaterialCategory, MaterialRecord};

/// Sentences of one cutting procedure, rendered in a fixed order.
struct SectioningTemplate {
    tool: &'static str,
    blade: &'static str,
    coolant: &'static str,
    handling: Option<&'static str>,
    speed: &'static str,
    pressure: &'static str,
    caution: &'static str,
    allowance: &'static str,
}

const CUTOFF_WHEEL: &str = "Standard cut-off wheel (1.0-1.5 mm thickness) is appropriate.";
const DIAMOND_BLADE: &str = "Standard diamond blade (0.3-0.5 mm thickness) is appropriate.";
const STEADY_PRESSURE: &str =
    "Apply steady, moderate pressure - the material allows for reasonable feed rates.";
const WHEEL_WEAR: &str = "Avoid forcing the cut which can cause wheel wear and sample damage.";
const HAZ_ALLOWANCE_WIDE: &str =
    "Leave adequate allowance (~2-3 mm) for grinding away the heat-affected zone from cutting.";
const HAZ_ALLOWANCE_NARROW: &str = "Leave adequate allowance (~1-2 mm) for grinding away the heat-affected zone and any deformation from cutting.";

const CERAMIC: SectioningTemplate = SectioningTemplate {
    tool: "Use diamond saw with continuous coolant flow. Diamond saws are essential for cutting hard ceramic materials.",
    blade: DIAMOND_BLADE,
    coolant: "Use adequate coolant flow to prevent overheating and minimize thermal shock.",
    handling: None,
    speed: "100-200 RPM for most diamond saws",
    pressure: "Apply light to moderate pressure - the very hard material requires careful handling to avoid cracking.",
    caution: "Avoid forcing the cut which can cause blade damage and sample cracking.",
    allowance: "Leave adequate allowance (~1-2 mm) for grinding away any damage from cutting.",
};

const TITANIUM: SectioningTemplate = SectioningTemplate {
    tool: "Use slow-speed diamond saw with continuous coolant flow. Diamond saws are preferred for titanium alloys to minimize deformation and work hardening.",
    blade: DIAMOND_BLADE,
    coolant: "Use adequate coolant flow to prevent overheating and minimize work hardening.",
    handling: Some("The reactive nature of titanium requires careful handling."),
    speed: "150-250 RPM for most diamond saws",
    pressure: "Apply light to moderate pressure - the material can work-harden if excessive pressure is applied.",
    caution: "Avoid forcing the cut which can cause sample damage and work hardening.",
    allowance: HAZ_ALLOWANCE_NARROW,
};

const LIGHT_ALLOY: SectioningTemplate = SectioningTemplate {
    tool: "Use slow-speed diamond saw or abrasive cut-off wheel designed for non-ferrous materials.",
    blade: CUTOFF_WHEEL,
    coolant: "Use adequate coolant flow to prevent overheating and minimize deformation.",
    handling: Some("The soft material requires gentle handling."),
    speed: "150-250 RPM for most cut-off saws",
    pressure: "Apply light to moderate pressure - the soft material requires gentle handling to avoid excessive deformation and work hardening.",
    caution: "Avoid forcing the cut which can cause sample damage, work hardening, and significant deformation.",
    allowance: HAZ_ALLOWANCE_NARROW,
};

const NON_FERROUS: SectioningTemplate = SectioningTemplate {
    tool: "Use slow-speed diamond saw or abrasive cut-off wheel designed for non-ferrous materials.",
    blade: CUTOFF_WHEEL,
    coolant: "Use adequate coolant flow to prevent overheating and minimize deformation.",
    handling: None,
    speed: "150-250 RPM for most cut-off saws",
    pressure: STEADY_PRESSURE,
    caution: WHEEL_WEAR,
    allowance: HAZ_ALLOWANCE_WIDE,
};

const STAINLESS: SectioningTemplate = SectioningTemplate {
    tool: "Use abrasive cut-off wheel designed for stainless steel (Al₂O₃ or SiC abrasive).",
    blade: CUTOFF_WHEEL,
    coolant: "Use adequate coolant flow to prevent overheating - excessive heat can cause sensitization (chromium carbide precipitation) in the heat-affected zone.",
    handling: None,
    speed: "200-300 RPM for most cut-off saws",
    pressure: STEADY_PRESSURE,
    caution: WHEEL_WEAR,
    allowance: HAZ_ALLOWANCE_WIDE,
};

const FERROUS: SectioningTemplate = SectioningTemplate {
    tool: "Use abrasive cut-off wheel designed for steel (Al₂O₃ or SiC abrasive).",
    blade: CUTOFF_WHEEL,
    coolant: "Use adequate coolant flow to prevent overheating - excessive heat can affect the microstructure.",
    handling: None,
    speed: "200-300 RPM for most cut-off saws",
    pressure: STEADY_PRESSURE,
    caution: WHEEL_WEAR,
    allowance: HAZ_ALLOWANCE_WIDE,
};

const GENERIC: SectioningTemplate = SectioningTemplate {
    tool: "Use abrasive cut-off wheel with adequate coolant flow.",
    blade: CUTOFF_WHEEL,
    coolant: "Use adequate coolant flow to prevent overheating.",
    handling: None,
    speed: "200-300 RPM for most cut-off saws",
    pressure: "Apply steady, moderate pressure.",
    caution: WHEEL_WEAR,
    allowance: HAZ_ALLOWANCE_WIDE,
};

fn template_for(category: MaterialCategory) -> &'static SectioningTemplate {
    use MaterialCategory::*;
    match category {
        Ceramic => &CERAMIC,
        TitaniumAlloy => &TITANIUM,
        AluminumAlloy | MagnesiumAlloy => &LIGHT_ALLOY,
        CopperAlloy | NickelAlloy => &NON_FERROUS,
        StainlessSteel => &STAINLESS,
        CarbonSteel | ToolSteel | CastIron => &FERROUS,
        Other => &GENERIC,
    }
}

/// Cutting procedure for the category. Hardness does not change the choice.
pub fn sectioning_notes(
    _record: &MaterialRecord,
    category: MaterialCategory,
    _hardness: HardnessCategory,
) -> String {
    let t = template_for(category);
    let mut out = format!("{} {} {}", t.tool, t.blade, t.coolant);
    if let Some(handling) = t.handling {
        out.push(' ');
        out.push_str(handling);
    }
    out.push_str(&format!(
        " Cutting speed: {}. {} {} {}",
        t.speed, t.pressure, t.caution, t.allowance
    ));
    out
}
