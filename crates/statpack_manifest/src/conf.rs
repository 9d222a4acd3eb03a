//! Compiled-in package layout and default packaging plan.

use std::path::PathBuf;

use crate::spec::SpecManifest;

/// Unity workspace holding the ARPG Stats System sources.
pub const PATH_DIR_WORKSPACE: &str = r"e:\UnityProject\ARPG Stats System";
/// Destination root of the Essential package.
pub const PATH_DIR_ESSENTIAL: &str = r"c:\ARPG Stats System\Essential";
/// Destination root of the Bonus package.
pub const PATH_DIR_BONUS: &str = r"c:\ARPG Stats System\Bonus";
/// Root named in the completion message.
pub const PATH_DIR_PACKAGES: &str = r"C:\ARPG Stats System";

pub const NAME_ESSENTIAL: &str = "essential";
pub const NAME_BONUS: &str = "bonus";

/// Core stat system plus its documentation.
pub const L_ENTRIES_ESSENTIAL: [&str; 11] = [
    "Assets/Scripts/StatSystem/Stats/StatRegistry.cs",
    "Assets/Scripts/StatSystem/Stats/StatCollection.cs",
    "Assets/Scripts/StatSystem/Stats/StatModifier.cs",
    "Assets/Scripts/StatSystem/Stats/StatDefinition.cs",
    "Assets/Scripts/StatSystem/Stats/ConditionalStatDefinition.cs",
    "Assets/Scripts/StatSystem/Stats/StatValue.cs",
    "Assets/Scripts/StatSystem/Stats/TimedModifierDemo.cs",
    "Assets/StatRegistry.asset",
    "Assets/Scripts/StatSystem/Documentation/IntegrationGuide.md",
    "Assets/Scripts/StatSystem/Documentation/CoreStats.md",
    "Assets/Scripts/StatSystem/Documentation/ItemEquipExample.md",
];

/// Tests, item demos and editor tooling. Generic test scenes are left out.
pub const L_ENTRIES_BONUS: [&str; 8] = [
    "Assets/Scripts/StatSystem/Tests/ComprehensiveConditionalStatsTest.cs",
    "Assets/Scripts/StatSystem/Tests/AdvancedConditionalStatsTest.cs",
    "Assets/Scripts/StatSystem/Items/ItemSystemDemo.cs",
    "Assets/Scripts/StatSystem/Items/ItemFactory.cs",
    "Assets/Scripts/StatSystem/Editor/StatSystemSetupUtility.cs",
    "Assets/Scripts/StatSystem/Editor/StatRegistryEditor.cs",
    "Assets/Scripts/StatSystem/Documentation/ItemSystem.md",
    "Assets/Scripts/StatSystem/Documentation/ItemModifierDocumentation.md",
];

fn builtin_manifest(name: &str, dir_destination: &str, entries: &[&str]) -> SpecManifest {
    SpecManifest {
        name: name.to_string(),
        path_dir_dst: PathBuf::from(dir_destination),
        entries: entries.iter().map(|e| e.to_string()).collect(),
    }
}

/// Essential manifest at its compiled-in destination.
pub fn manifest_essential() -> SpecManifest {
    builtin_manifest(NAME_ESSENTIAL, PATH_DIR_ESSENTIAL, &L_ENTRIES_ESSENTIAL)
}

/// Bonus manifest at its compiled-in destination.
pub fn manifest_bonus() -> SpecManifest {
    builtin_manifest(NAME_BONUS, PATH_DIR_BONUS, &L_ENTRIES_BONUS)
}

/// Everything one packaging run needs: where to read, what to write where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecPackagingPlan {
    /// Source root every manifest entry is resolved against.
    pub path_dir_src: PathBuf,
    /// Manifests in processing order.
    pub manifests: Vec<SpecManifest>,
    /// Root shown in the completion message.
    pub path_dir_packages: PathBuf,
}

impl Default for SpecPackagingPlan {
    fn default() -> Self {
        Self {
            path_dir_src: PathBuf::from(PATH_DIR_WORKSPACE),
            manifests: vec![manifest_essential(), manifest_bonus()],
            path_dir_packages: PathBuf::from(PATH_DIR_PACKAGES),
        }
    }
}

impl SpecPackagingPlan {
    /// Completion line printed once every manifest has been processed.
    pub fn completion_message(&self) -> String {
        format!(
            "Packaging complete. Essential and Bonus packages are ready at {}.",
            self.path_dir_packages.display()
        )
    }
}
