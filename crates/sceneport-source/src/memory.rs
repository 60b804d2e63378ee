use glam::Vec3;

use crate::{
    ObjectId, ObjectKind, Polygon, PolygonPayload, SourceDocument, SourceMatrix, SourceObject,
};

#[derive(Debug, Clone, Default)]
pub struct MemoryObject {
    pub name: String,
    pub kind: ObjectKind,
    pub matrix: SourceMatrix,
    pub points: Vec<Vec3>,
    pub polygons: Vec<Polygon>,
}

impl MemoryObject {
    pub fn new(kind: ObjectKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    pub fn polygon(name: impl Into<String>, points: Vec<Vec3>, polygons: Vec<Polygon>) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Polygon,
            points,
            polygons,
            ..Default::default()
        }
    }

    pub fn with_matrix(mut self, matrix: SourceMatrix) -> Self {
        self.matrix = matrix;
        self
    }
}

#[derive(Debug, Clone)]
struct Slot {
    object: MemoryObject,
    next: Option<u32>,
    child: Option<u32>,
}

/// Object tree held in a flat arena, linked the way the source format links
/// its objects: every object knows its next sibling and its first child.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    slots: Vec<Slot>,
    first: Option<u32>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Appends `object` as the last child of `parent`, or as the last
    /// top-level object when `parent` is `None`. Returns the object's index.
    pub fn insert(&mut self, parent: Option<u32>, object: MemoryObject) -> u32 {
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            object,
            next: None,
            child: None,
        });

        let head = match parent {
            Some(parent) => self.slots[parent as usize].child,
            None => self.first,
        };

        match head.and_then(|head| self.last_sibling(head)) {
            Some(last) => self.slots[last as usize].next = Some(index),
            None => match parent {
                Some(parent) => self.slots[parent as usize].child = Some(index),
                None => self.first = Some(index),
            },
        }

        index
    }

    /// Overwrites the sibling link of `index`. Allows building malformed graphs.
    pub fn set_next_sibling(&mut self, index: u32, next: Option<u32>) {
        self.slots[index as usize].next = next;
    }

    /// Overwrites the child link of `index`. Allows building malformed graphs.
    pub fn set_first_child(&mut self, index: u32, child: Option<u32>) {
        self.slots[index as usize].child = child;
    }

    pub fn object(&self, index: u32) -> ObjectHandle<'_> {
        ObjectHandle {
            document: self,
            index,
        }
    }

    // Bounded by the arena size so relinked cycles cannot hang insertion.
    fn last_sibling(&self, head: u32) -> Option<u32> {
        let mut current = head;
        for _ in 0..self.slots.len() {
            match self.slots[current as usize].next {
                Some(next) => current = next,
                None => return Some(current),
            }
        }
        None
    }

    fn slot(&self, index: u32) -> &Slot {
        &self.slots[index as usize]
    }
}

impl SourceDocument for MemoryDocument {
    type Object<'a> = ObjectHandle<'a>;

    fn first_object(&self) -> Option<ObjectHandle<'_>> {
        self.first.map(|index| self.object(index))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ObjectHandle<'a> {
    document: &'a MemoryDocument,
    index: u32,
}

impl<'a> ObjectHandle<'a> {
    pub fn index(&self) -> u32 {
        self.index
    }

    fn object(&self) -> &'a MemoryObject {
        &self.document.slot(self.index).object
    }
}

impl SourceObject for ObjectHandle<'_> {
    fn id(&self) -> ObjectId {
        ObjectId(self.index as u64)
    }

    fn kind(&self) -> ObjectKind {
        self.object().kind
    }

    fn name(&self) -> &str {
        &self.object().name
    }

    fn local_matrix(&self) -> SourceMatrix {
        self.object().matrix
    }

    fn next_sibling(&self) -> Option<Self> {
        self.document
            .slot(self.index)
            .next
            .map(|index| self.document.object(index))
    }

    fn first_child(&self) -> Option<Self> {
        self.document
            .slot(self.index)
            .child
            .map(|index| self.document.object(index))
    }

    fn polygon_payload(&self) -> Option<PolygonPayload<'_>> {
        let object = self.object();
        (object.kind == ObjectKind::Polygon).then_some(PolygonPayload {
            points: &object.points,
            polygons: &object.polygons,
        })
    }
}
