use crate::models::StageName;

pub struct PhaseDefinition {
    pub name: StageName,
    pub display_name: &'static str,
    pub description: &'static str,
}

pub static PHASES: &[PhaseDefinition] = &[
    PhaseDefinition {
        name: StageName::Build,
        display_name: "Production Build",
        description: "Run the project's production build command",
    },
    PhaseDefinition {
        name: StageName::BundleSize,
        display_name: "Bundle Size",
        description: "Measure the main bundle against size thresholds",
    },
    PhaseDefinition {
        name: StageName::PatternScan,
        display_name: "Debug Statement Scan",
        description: "Count debug statements left in the source tree",
    },
    PhaseDefinition {
        name: StageName::Audit,
        display_name: "Performance Audit",
        description: "Run Lighthouse and score the four audit categories",
    },
];

pub fn display_name(stage: StageName) -> &'static str {
    PHASES
        .iter()
        .find(|p| p.name == stage)
        .map(|p| p.display_name)
        .unwrap_or("Unknown")
}

pub fn description(stage: StageName) -> &'static str {
    PHASES
        .iter()
        .find(|p| p.name == stage)
        .map(|p| p.description)
        .unwrap_or("")
}
