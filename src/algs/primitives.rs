//! Small canned meshes built through the edit operators.

use crate::mesh_error::TopoMeshError;
use crate::topology::manifold::Manifold;

/// A triangle: three vertices, three edges, a front and a back face.
pub fn triangle<M: Manifold + Default>() -> Result<M, TopoMeshError> {
    let mut mesh = M::default();

    let c1 = mesh.create_point_sphere([1.0, 1.0, 1.0]);
    let c2 = mesh.create_point_sphere([1.0, -1.0, -1.0]);
    let c3 = mesh.create_point_sphere([-1.0, 1.0, -1.0]);

    let (f1, _) = mesh.insert_edge(&c1, &c2)?;
    let anchor = mesh.corner_at(f1, c2.vertex)?;
    let (f2, _) = mesh.insert_edge(&anchor, &c3)?;
    let closing_1 = mesh.corner_at(f2, c3.vertex)?;
    let closing_2 = mesh.corner_at(f2, c1.vertex)?;
    mesh.insert_edge(&closing_1, &closing_2)?;

    Ok(mesh)
}

/// A tetrahedron: four vertices, six edges, four triangular faces.
pub fn tetrahedron<M: Manifold + Default>() -> Result<M, TopoMeshError> {
    let mut mesh = M::default();

    let c1 = mesh.create_point_sphere([1.0, 1.0, 1.0]);
    let c2 = mesh.create_point_sphere([1.0, -1.0, -1.0]);
    let c3 = mesh.create_point_sphere([-1.0, 1.0, -1.0]);
    let c4 = mesh.create_point_sphere([-1.0, -1.0, 1.0]);

    let (f1, _) = mesh.insert_edge(&c1, &c2)?;
    let a1 = mesh.corner_at(f1, c2.vertex)?;
    let (f2, _) = mesh.insert_edge(&a1, &c3)?;
    let a2 = mesh.corner_at(f2, c3.vertex)?;
    let a3 = mesh.corner_at(f2, c1.vertex)?;
    let (f3, _) = mesh.insert_edge(&a2, &a3)?;
    let a4 = mesh.corner_at(f3, c1.vertex)?;
    let (f4, _) = mesh.insert_edge(&a4, &c4)?;
    let a5 = mesh.corner_at(f4, c4.vertex)?;
    let a6 = mesh.corner_at(f4, c2.vertex)?;
    let (f5, _) = mesh.insert_edge(&a5, &a6)?;
    let a7 = mesh.corner_at(f5, c4.vertex)?;
    let a8 = mesh.corner_at(f5, c3.vertex)?;
    mesh.insert_edge(&a7, &a8)?;

    Ok(mesh)
}

/// A square: four vertices, four edges, a front and a back face.
pub fn square<M: Manifold + Default>() -> Result<M, TopoMeshError> {
    let mut mesh = M::default();

    let c1 = mesh.create_point_sphere([-1.0, 1.0, 0.0]);
    let c2 = mesh.create_point_sphere([1.0, 1.0, 0.0]);
    let c3 = mesh.create_point_sphere([1.0, -1.0, 0.0]);
    let c4 = mesh.create_point_sphere([-1.0, -1.0, 0.0]);

    let (f1, _) = mesh.insert_edge(&c1, &c2)?;
    let a1 = mesh.corner_at(f1, c2.vertex)?;
    let (f2, _) = mesh.insert_edge(&a1, &c3)?;
    let a2 = mesh.corner_at(f2, c3.vertex)?;
    let (f3, _) = mesh.insert_edge(&a2, &c4)?;
    let closing_1 = mesh.corner_at(f3, c4.vertex)?;
    let closing_2 = mesh.corner_at(f3, c1.vertex)?;
    mesh.insert_edge(&closing_1, &closing_2)?;

    Ok(mesh)
}
