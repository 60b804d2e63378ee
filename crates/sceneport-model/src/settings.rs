/// Minimum stack headroom before recursion switches to a freshly allocated segment.
pub const STACK_RED_ZONE: usize = 64 * 1024;
/// Size of each stack segment allocated for deep hierarchies.
pub const STACK_SEGMENT_SIZE: usize = 1024 * 1024;

pub const DEFAULT_MAX_DEPTH: usize = 1024;
pub const DEFAULT_ROOT_NAME: &str = "<C4DRoot>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSettings {
    /// Deepest object nesting accepted before the import is aborted.
    pub max_depth: usize,
    /// Name given to the synthetic node that parents all top-level objects.
    pub root_name: String,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            root_name: DEFAULT_ROOT_NAME.to_owned(),
        }
    }
}
