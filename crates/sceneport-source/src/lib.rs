//! Read-only view of a decoded scene document.
//!
//! Decoders expose their object tree through [`SourceObject`] so the import
//! core never depends on how a particular format stores its objects.

use anyhow::Result;
use glam::Vec3;

mod memory;
pub use memory::{MemoryDocument, MemoryObject, ObjectHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObjectKind {
    Camera,
    Light,
    Polygon,
    #[default]
    Other,
}

/// Identity of an object inside its document, stable for the document's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

/// Affine 3x4 matrix as stored by the source format: three basis vectors and an offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceMatrix {
    pub x_axis: Vec3,
    pub y_axis: Vec3,
    pub z_axis: Vec3,
    pub offset: Vec3,
}

impl Default for SourceMatrix {
    fn default() -> Self {
        Self {
            x_axis: Vec3::X,
            y_axis: Vec3::Y,
            z_axis: Vec3::Z,
            offset: Vec3::ZERO,
        }
    }
}

/// Polygon referencing four point indices. `c == d` marks a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Polygon {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
}

impl Polygon {
    pub fn triangle(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c, d: c }
    }

    pub fn quad(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self { a, b, c, d }
    }

    pub fn is_quad(&self) -> bool {
        self.c != self.d
    }

    pub fn num_corners(&self) -> usize {
        if self.is_quad() {
            4
        } else {
            3
        }
    }

    /// Point indices in emission order, three for triangles and four for quads.
    pub fn corners(&self) -> impl Iterator<Item = u32> {
        [self.a, self.b, self.c, self.d]
            .into_iter()
            .take(self.num_corners())
    }
}

/// Point and polygon arrays of a polygon object.
#[derive(Debug, Clone, Copy)]
pub struct PolygonPayload<'a> {
    pub points: &'a [Vec3],
    pub polygons: &'a [Polygon],
}

pub trait SourceObject: Sized {
    fn id(&self) -> ObjectId;
    fn kind(&self) -> ObjectKind;
    fn name(&self) -> &str;
    fn local_matrix(&self) -> SourceMatrix;
    fn next_sibling(&self) -> Option<Self>;
    fn first_child(&self) -> Option<Self>;

    /// Geometry of the object. Only polygon objects carry a payload.
    ///
    /// The payload borrows the handle, not the document, so bind the handle
    /// to a local before asking for its geometry.
    fn polygon_payload(&self) -> Option<PolygonPayload<'_>>;
}

pub trait SourceDocument {
    type Object<'a>: SourceObject
    where
        Self: 'a;

    fn first_object(&self) -> Option<Self::Object<'_>>;
}

/// Turns raw file bytes into a decoded document.
pub trait DocumentLoader {
    type Document: SourceDocument;

    fn load_document(&self, data: &[u8]) -> Result<Self::Document>;
}

impl<D, F> DocumentLoader for F
where
    D: SourceDocument,
    F: Fn(&[u8]) -> Result<D>,
{
    type Document = D;

    fn load_document(&self, data: &[u8]) -> Result<D> {
        self(data)
    }
}
