use glam::{Mat4, Vec3};

/// Local node transform stored exactly as the source document wrote it.
///
/// The three basis vectors occupy the first three matrix columns and the
/// offset the fourth. Nothing is orthogonalized or renormalized, so a sheared
/// or non-uniformly scaled basis survives the import bit for bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_basis(Vec3::X, Vec3::Y, Vec3::Z, Vec3::ZERO)
    }
}

impl Transform {
    pub fn from_basis(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3, offset: Vec3) -> Self {
        Self {
            matrix: Mat4::from_cols(
                x_axis.extend(0.0),
                y_axis.extend(0.0),
                z_axis.extend(0.0),
                offset.extend(1.0),
            ),
        }
    }

    pub fn x_axis(&self) -> Vec3 {
        self.matrix.x_axis.truncate()
    }

    pub fn y_axis(&self) -> Vec3 {
        self.matrix.y_axis.truncate()
    }

    pub fn z_axis(&self) -> Vec3 {
        self.matrix.z_axis.truncate()
    }

    pub fn offset(&self) -> Vec3 {
        self.matrix.w_axis.truncate()
    }

    pub fn get_matrix(&self) -> Mat4 {
        self.matrix
    }
}
