use anyhow::Result;
use glam::Vec3;
use sceneport::{
    sceneport_model::{ImportError, ImportSettings, PrimitiveType},
    sceneport_source::{MemoryDocument, MemoryObject, ObjectKind, Polygon, SourceMatrix},
    Sceneport,
};

fn rig(_: &[u8]) -> Result<MemoryDocument> {
    let mut document = MemoryDocument::new();
    let body = document.insert(
        None,
        MemoryObject::polygon(
            "body",
            vec![Vec3::ZERO, Vec3::X, Vec3::X + Vec3::Y, Vec3::Y, Vec3::Z],
            vec![Polygon::quad(0, 1, 2, 3), Polygon::triangle(0, 1, 4)],
        )
        .with_matrix(SourceMatrix {
            offset: Vec3::new(0.0, 2.0, 0.0),
            ..Default::default()
        }),
    );
    document.insert(Some(body), MemoryObject::new(ObjectKind::Camera, "eye"));
    document.insert(None, MemoryObject::new(ObjectKind::Light, "sun"));
    Ok(document)
}

#[test]
fn imports_through_facade() {
    let sceneport = Sceneport::new("import-test");
    let mut importer = sceneport.importer(rig);

    let scene = importer.read_bytes("rig.c4d", b"").unwrap();

    assert_eq!(scene.nodes.len(), 4);
    assert_eq!(scene.meshes.len(), 1);

    let mesh = &scene.meshes[0];
    assert_eq!(mesh.num_vertices(), 7);
    assert_eq!(
        mesh.primitive_types,
        PrimitiveType::TRIANGLE | PrimitiveType::POLYGON
    );
    assert!(mesh.is_fully_expanded());

    let body = scene.find_node("body").unwrap();
    assert_eq!(body.meshes, vec![0]);
    assert_eq!(body.transform.offset(), Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(
        body.transform.get_matrix().w_axis,
        Vec3::new(0.0, 2.0, 0.0).extend(1.0)
    );
    assert_eq!(scene.node(body.children[0]).name, "eye");
    assert!(scene.find_node("sun").unwrap().meshes.is_empty());
}

#[test]
fn facade_settings_reach_the_importer() {
    let sceneport = Sceneport::new("import-test").with_settings(ImportSettings {
        max_depth: 1,
        ..Default::default()
    });
    let mut importer = sceneport.importer(rig);

    let err = importer.read_bytes("rig.c4d", b"").unwrap_err();
    assert!(matches!(
        err.root_cause(),
        ImportError::DepthLimitExceeded { limit: 1 }
    ));
}

#[test]
fn profiling_switch_reaches_puffin() {
    let sceneport = Sceneport::new("import-test").with_profiling(true);
    assert!(sceneport::sceneport_profiling::is_enabled());

    let mut importer = sceneport.importer(rig);
    let scene = importer.read_bytes("profiled.c4d", b"").unwrap();
    assert_eq!(scene.meshes.len(), 1);

    let _ = Sceneport::new("import-test").with_profiling(false);
    assert!(!sceneport::sceneport_profiling::is_enabled());
}
