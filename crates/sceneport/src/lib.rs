#![doc(html_no_source)]

mod sceneport;
pub use sceneport::Sceneport;

// Reexport all crates
pub use sceneport_asset_database;
pub use sceneport_model;
pub use sceneport_profiling;
pub use sceneport_source;
pub use sceneport_transform;
