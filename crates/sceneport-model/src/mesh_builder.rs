use sceneport_source::{ObjectKind, SourceObject};

use crate::{
    error::ImportError,
    mesh::{Face, Mesh, PrimitiveType},
};

/// Expands the polygons of a polygon object into a [`Mesh`].
///
/// Each polygon gets its own copy of the points it references, so a mesh with
/// `t` triangles and `q` quads always has `3t + 4q` vertices and face `n`
/// indexes the run of vertices right after face `n - 1`.
pub fn build_mesh<O: SourceObject>(object: &O) -> Result<Mesh, ImportError> {
    sceneport_profiling::profile_function!();

    if object.kind() != ObjectKind::Polygon {
        return Err(ImportError::ContractViolation(format!(
            "mesh requested for '{}', which is a {:?} object",
            object.name(),
            object.kind()
        )));
    }
    let payload = object.polygon_payload().ok_or_else(|| {
        ImportError::ContractViolation(format!(
            "polygon object '{}' has no polygon data",
            object.name()
        ))
    })?;

    let mut vertex_count = 0;
    let mut primitive_types = PrimitiveType::TRIANGLE;
    for polygon in payload.polygons {
        vertex_count += 3;
        if polygon.is_quad() {
            vertex_count += 1;
            primitive_types |= PrimitiveType::POLYGON;
        }
    }

    vertex_index(object.name(), vertex_count)?;

    let mut vertices = Vec::with_capacity(vertex_count);
    let mut faces = Vec::with_capacity(payload.polygons.len());

    for (polygon_idx, polygon) in payload.polygons.iter().enumerate() {
        let first_vertex = vertex_index(object.name(), vertices.len())?;

        for point_idx in polygon.corners() {
            let point = payload.points.get(point_idx as usize).ok_or_else(|| {
                ImportError::PointIndexOutOfRange {
                    object: object.name().to_owned(),
                    polygon: polygon_idx,
                    index: point_idx,
                    point_count: payload.points.len(),
                }
            })?;
            vertices.push(*point);
        }

        let end_vertex = vertex_index(object.name(), vertices.len())?;
        faces.push(Face::new((first_vertex..end_vertex).collect()));
    }

    debug_assert_eq!(vertices.len(), vertex_count);

    log::debug!(
        "C4D: expanded '{}' into {} vertices and {} faces",
        object.name(),
        vertices.len(),
        faces.len()
    );

    Ok(Mesh::new(vertices, faces, primitive_types))
}

/// Face index for the vertex at `position`. Faces store `u32` indices.
fn vertex_index(object: &str, position: usize) -> Result<u32, ImportError> {
    u32::try_from(position).map_err(|_| ImportError::MeshTooLarge {
        object: object.to_owned(),
        vertex_count: position,
    })
}
