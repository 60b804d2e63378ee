/// Every imported mesh references the scene's single material at this index.
pub const DEFAULT_MATERIAL_INDEX: u32 = 0;

/// Placeholder surface description. The source format's material data is not
/// imported, so no parameters are populated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Material {
    pub name: Option<String>,
}
