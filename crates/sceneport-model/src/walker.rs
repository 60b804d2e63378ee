use std::collections::HashSet;

use sceneport_source::{ObjectId, ObjectKind, SourceObject};
use sceneport_transform::Transform;

use crate::{
    error::ImportError,
    mesh::Mesh,
    mesh_builder::build_mesh,
    settings::{ImportSettings, STACK_RED_ZONE, STACK_SEGMENT_SIZE},
    SceneNode,
};

/// Everything a hierarchy walk has built so far: the node arena (root at
/// [`TraversalScope::ROOT`]) and the meshes in creation order.
///
/// The scope owns its contents exclusively until the assembler consumes it.
/// Dropping it releases all of them.
#[derive(Debug)]
pub struct TraversalScope {
    nodes: Vec<SceneNode>,
    meshes: Vec<Mesh>,
}

#[derive(Debug, Clone, Copy)]
struct Checkpoint {
    parent: u32,
    parent_children: usize,
    nodes: usize,
    meshes: usize,
}

impl TraversalScope {
    pub const ROOT: u32 = 0;

    pub fn new(root_name: &str) -> Self {
        Self {
            nodes: vec![SceneNode {
                name: root_name.to_owned(),
                transform: Transform::default(),
                parent: None,
                children: vec![],
                meshes: vec![],
            }],
            meshes: vec![],
        }
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn into_parts(self) -> (Vec<SceneNode>, Vec<Mesh>) {
        (self.nodes, self.meshes)
    }

    fn push_node<O: SourceObject>(&mut self, parent: u32, object: &O) -> u32 {
        let matrix = object.local_matrix();
        let node_idx = self.nodes.len() as u32;

        self.nodes.push(SceneNode {
            name: object.name().to_owned(),
            transform: Transform::from_basis(
                matrix.x_axis,
                matrix.y_axis,
                matrix.z_axis,
                matrix.offset,
            ),
            parent: Some(parent),
            children: vec![],
            meshes: vec![],
        });
        self.nodes[parent as usize].children.push(node_idx);

        node_idx
    }

    fn attach_mesh(&mut self, node: u32, mesh: Mesh) {
        let mesh_idx = self.meshes.len() as u32;
        self.meshes.push(mesh);
        self.nodes[node as usize].meshes.push(mesh_idx);
    }

    fn checkpoint(&self, parent: u32) -> Checkpoint {
        Checkpoint {
            parent,
            parent_children: self.nodes[parent as usize].children.len(),
            nodes: self.nodes.len(),
            meshes: self.meshes.len(),
        }
    }

    // Nodes created after a checkpoint are only ever linked from nodes that
    // were also created after it, or from the checkpoint's parent.
    fn rollback(&mut self, checkpoint: Checkpoint) {
        self.nodes.truncate(checkpoint.nodes);
        self.meshes.truncate(checkpoint.meshes);
        self.nodes[checkpoint.parent as usize]
            .children
            .truncate(checkpoint.parent_children);
    }
}

/// Mirrors a source object tree into a [`TraversalScope`], one node per object.
pub struct HierarchyWalker<'a> {
    settings: &'a ImportSettings,
    scope: &'a mut TraversalScope,
    visited: HashSet<ObjectId>,
}

impl<'a> HierarchyWalker<'a> {
    pub fn new(settings: &'a ImportSettings, scope: &'a mut TraversalScope) -> Self {
        Self {
            settings,
            scope,
            visited: HashSet::new(),
        }
    }

    /// Appends `first` and all its siblings, recursively with their children,
    /// below `parent`. Children are expanded before the next sibling.
    ///
    /// On failure the scope is restored to the state it had before the call
    /// and the error is reported wrapped in [`ImportError::TraversalAborted`].
    pub fn walk<O: SourceObject>(
        &mut self,
        first: Option<O>,
        parent: u32,
    ) -> Result<(), ImportError> {
        sceneport_profiling::profile_function!();

        if parent as usize >= self.scope.nodes.len() {
            return Err(ImportError::ContractViolation(format!(
                "walk below node {parent}, but the scope only holds {} nodes",
                self.scope.nodes.len()
            )));
        }

        let checkpoint = self.scope.checkpoint(parent);
        self.visited.clear();

        let depth = self.depth_of(parent) + 1;
        if let Err(err) = self.walk_siblings(first, parent, depth) {
            self.scope.rollback(checkpoint);
            self.visited.clear();
            log::warn!("C4D: import aborted, {err}");
            return Err(ImportError::TraversalAborted(Box::new(err)));
        }

        Ok(())
    }

    fn walk_siblings<O: SourceObject>(
        &mut self,
        first: Option<O>,
        parent: u32,
        depth: usize,
    ) -> Result<(), ImportError> {
        if first.is_some() && depth > self.settings.max_depth {
            return Err(ImportError::DepthLimitExceeded {
                limit: self.settings.max_depth,
            });
        }

        let mut object = first;
        while let Some(current) = object {
            if !self.visited.insert(current.id()) {
                return Err(ImportError::CycleDetected {
                    object: current.name().to_owned(),
                });
            }

            let node = self.scope.push_node(parent, &current);
            log::debug!(
                "C4D: '{}' ({:?}) at depth {depth}",
                current.name(),
                current.kind()
            );

            match current.kind() {
                ObjectKind::Polygon => {
                    let mesh = build_mesh(&current)?;
                    self.scope.attach_mesh(node, mesh);
                }
                // Camera and light parameters are not imported, these stay
                // plain transform nodes.
                ObjectKind::Camera | ObjectKind::Light | ObjectKind::Other => {}
            }

            let child = current.first_child();
            stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT_SIZE, || {
                self.walk_siblings(child, node, depth + 1)
            })?;

            object = current.next_sibling();
        }

        Ok(())
    }

    fn depth_of(&self, node: u32) -> usize {
        let mut depth = 0;
        let mut current = self.scope.nodes[node as usize].parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.scope.nodes[parent as usize].parent;
        }
        depth
    }
}
