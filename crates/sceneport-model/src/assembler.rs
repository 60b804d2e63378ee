use crate::{
    material::{Material, DEFAULT_MATERIAL_INDEX},
    walker::TraversalScope,
    Scene,
};

/// Moves a completed traversal into a [`Scene`] and attaches the default material.
///
/// Meshes keep their traversal order, so the mesh indices stored on nodes
/// stay valid.
pub fn assemble(scope: TraversalScope) -> Scene {
    sceneport_profiling::profile_function!();

    let (nodes, meshes) = scope.into_parts();
    debug_assert!(meshes
        .iter()
        .all(|mesh| mesh.material_index == DEFAULT_MATERIAL_INDEX));

    log::info!(
        "C4D: assembled scene with {} nodes and {} meshes",
        nodes.len(),
        meshes.len()
    );

    Scene {
        root: TraversalScope::ROOT,
        nodes,
        meshes,
        material: Material::default(),
    }
}
