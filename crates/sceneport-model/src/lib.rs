use sceneport_source::SourceDocument;
use sceneport_transform::Transform;

pub mod assembler;
pub mod error;
pub mod material;
pub mod mesh;
pub mod mesh_builder;
pub mod settings;
pub mod walker;

pub use error::ImportError;
pub use material::Material;
pub use mesh::{Face, Mesh, PrimitiveType};
pub use settings::ImportSettings;

use walker::{HierarchyWalker, TraversalScope};

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,

    pub transform: Transform,
    pub parent: Option<u32>,
    pub children: Vec<u32>,

    pub meshes: Vec<u32>,
}

/// Imported scene. Nodes are stored in pre-order, the root first.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub root: u32,
    pub nodes: Vec<SceneNode>,
    pub meshes: Vec<Mesh>,
    pub material: Material,
}

impl Scene {
    pub fn root_node(&self) -> &SceneNode {
        &self.nodes[self.root as usize]
    }

    pub fn node(&self, index: u32) -> &SceneNode {
        &self.nodes[index as usize]
    }

    pub fn children(&self, index: u32) -> impl Iterator<Item = &SceneNode> {
        self.nodes[index as usize]
            .children
            .iter()
            .map(|&child| &self.nodes[child as usize])
    }

    /// Node indices in pre-order, following the child links from the root.
    pub fn pre_order(&self) -> Vec<u32> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(index) = stack.pop() {
            order.push(index);
            stack.extend(self.nodes[index as usize].children.iter().rev());
        }
        order
    }

    pub fn find_node(&self, name: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|node| node.name == name)
    }
}

/// Converts a decoded document into a [`Scene`]. Either the whole document
/// imports, or nothing built along the way survives.
pub fn import_document<D: SourceDocument>(
    document: &D,
    settings: &ImportSettings,
) -> Result<Scene, ImportError> {
    sceneport_profiling::profile_function!();

    let mut scope = TraversalScope::new(&settings.root_name);
    HierarchyWalker::new(settings, &mut scope)
        .walk(document.first_object(), TraversalScope::ROOT)?;

    Ok(assembler::assemble(scope))
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use sceneport_source::{MemoryDocument, MemoryObject, ObjectKind, Polygon, SourceMatrix};

    use super::*;

    fn unit_points() -> Vec<Vec3> {
        vec![Vec3::ZERO, Vec3::X, Vec3::X + Vec3::Y, Vec3::Y]
    }

    fn scenario_a() -> MemoryDocument {
        let mut document = MemoryDocument::new();
        document.insert(
            None,
            MemoryObject::polygon("Obj1", unit_points(), vec![Polygon::triangle(0, 1, 2)]),
        );
        let obj2 = document.insert(
            None,
            MemoryObject::polygon("Obj2", unit_points(), vec![Polygon::quad(0, 1, 2, 3)]),
        );
        document.insert(Some(obj2), MemoryObject::new(ObjectKind::Other, "Obj3"));
        document
    }

    #[test]
    fn scenario_a_builds_mirrored_tree() {
        let scene = import_document(&scenario_a(), &ImportSettings::default()).unwrap();

        let root = scene.root_node();
        assert_eq!(root.name, "<C4DRoot>");
        assert_eq!(root.parent, None);
        let top: Vec<_> = scene.children(scene.root).map(|n| n.name.as_str()).collect();
        assert_eq!(top, vec!["Obj1", "Obj2"]);

        let node1 = scene.find_node("Obj1").unwrap();
        let node2 = scene.find_node("Obj2").unwrap();
        let node3 = scene.find_node("Obj3").unwrap();
        assert!(node1.children.is_empty());
        assert_eq!(node2.children.len(), 1);
        assert_eq!(scene.node(node2.children[0]).name, "Obj3");
        assert_eq!(node3.parent, Some(root.children[1]));

        assert_eq!(node1.meshes, vec![0]);
        assert_eq!(node2.meshes, vec![1]);
        assert!(node3.meshes.is_empty());

        assert_eq!(scene.meshes.len(), 2);
        assert_eq!(scene.meshes[0].num_vertices(), 3);
        assert_eq!(scene.meshes[0].faces, vec![Face::new(vec![0, 1, 2])]);
        assert_eq!(scene.meshes[1].num_vertices(), 4);
        assert_eq!(scene.meshes[1].faces, vec![Face::new(vec![0, 1, 2, 3])]);
        assert_eq!(scene.material, Material::default());
    }

    #[test]
    fn scenario_b_empty_document() {
        let scene = import_document(&MemoryDocument::new(), &ImportSettings::default()).unwrap();

        assert_eq!(scene.nodes.len(), 1);
        assert!(scene.root_node().children.is_empty());
        assert!(scene.meshes.is_empty());
        assert_eq!(scene.material, Material::default());
    }

    #[test]
    fn scenario_c_failure_returns_single_abort() {
        let mut document = MemoryDocument::new();
        for i in 0..5 {
            let polygon = if i == 2 {
                Polygon::triangle(0, 1, 40)
            } else {
                Polygon::triangle(0, 1, 2)
            };
            document.insert(
                None,
                MemoryObject::polygon(format!("Obj{i}"), unit_points(), vec![polygon]),
            );
        }

        let err = import_document(&document, &ImportSettings::default()).unwrap_err();
        match err {
            ImportError::TraversalAborted(inner) => {
                assert!(matches!(*inner, ImportError::PointIndexOutOfRange { .. }))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn node_order_is_pre_order_with_depth_first() {
        let mut document = MemoryDocument::new();
        let a = document.insert(None, MemoryObject::new(ObjectKind::Other, "a"));
        let a0 = document.insert(Some(a), MemoryObject::new(ObjectKind::Camera, "a0"));
        document.insert(Some(a0), MemoryObject::new(ObjectKind::Light, "a00"));
        document.insert(Some(a), MemoryObject::new(ObjectKind::Other, "a1"));
        let b = document.insert(None, MemoryObject::new(ObjectKind::Other, "b"));
        document.insert(Some(b), MemoryObject::new(ObjectKind::Other, "b0"));

        let scene = import_document(&document, &ImportSettings::default()).unwrap();

        assert_eq!(scene.nodes.len(), document.len() + 1);
        let names: Vec<_> = scene
            .pre_order()
            .into_iter()
            .map(|i| scene.node(i).name.as_str())
            .collect();
        assert_eq!(names, vec!["<C4DRoot>", "a", "a0", "a00", "a1", "b", "b0"]);
        assert_eq!(scene.pre_order(), (0..scene.nodes.len() as u32).collect::<Vec<_>>());
        assert!(scene.meshes.is_empty());
        assert!(scene.nodes.iter().all(|node| node.meshes.is_empty()));
    }

    #[test]
    fn transforms_are_copied_component_wise() {
        let matrix = SourceMatrix {
            x_axis: Vec3::new(1.5, 0.25, -2.0),
            y_axis: Vec3::new(0.0, 3.0, 7.0),
            z_axis: Vec3::new(-1.0, 0.5, 0.125),
            offset: Vec3::new(100.0, -50.0, 12.5),
        };
        let mut document = MemoryDocument::new();
        document.insert(
            None,
            MemoryObject::new(ObjectKind::Camera, "camera").with_matrix(matrix),
        );

        let scene = import_document(&document, &ImportSettings::default()).unwrap();
        let transform = scene.find_node("camera").unwrap().transform;

        assert_eq!(transform.x_axis(), matrix.x_axis);
        assert_eq!(transform.y_axis(), matrix.y_axis);
        assert_eq!(transform.z_axis(), matrix.z_axis);
        assert_eq!(transform.offset(), matrix.offset);
    }

    #[test]
    fn importing_twice_is_deterministic() {
        let document = scenario_a();
        let settings = ImportSettings::default();

        let first = import_document(&document, &settings).unwrap();
        let second = import_document(&document, &settings).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn custom_root_name_is_used() {
        let settings = ImportSettings {
            root_name: "imported".to_owned(),
            ..Default::default()
        };
        let scene = import_document(&MemoryDocument::new(), &settings).unwrap();
        assert_eq!(scene.root_node().name, "imported");
    }
}
