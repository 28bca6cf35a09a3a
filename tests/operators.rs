//! Edit-operator behavior shared by both connectivity encodings.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use topomesh::prelude::*;

fn total_boundary_slots<M: Manifold>(mesh: &M) -> usize {
    mesh.faces()
        .map(|f| mesh.face_boundary(f).map(|b| b.len()).unwrap_or(0))
        .sum()
}

fn point_sphere_idempotence<M: Manifold + Default>() {
    let mut mesh: M = primitives::tetrahedron().unwrap();
    let c = mesh.create_point_sphere([5.0, 5.0, 5.0]);
    assert!(c.is_point_sphere());
    assert_eq!(mesh.vertex_trace(c.vertex).unwrap().len(), 1);
    assert_eq!(mesh.face_boundary(c.face).unwrap(), vec![c.vertex]);
}

fn tetrahedron_closure<M: Manifold + Default>() {
    let mesh: M = primitives::tetrahedron().unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.face_count(), 4);
    for face in mesh.faces().collect::<Vec<_>>() {
        let trace = mesh.face_trace(face).unwrap();
        assert_eq!(trace.len(), 3);
        for corner in &trace {
            assert_eq!(corner.face, face);
        }
    }
    let vertices: Vec<_> = mesh.vertices().collect();
    for &v in &vertices {
        assert_eq!(mesh.vertex_trace(v).unwrap().len(), 3);
    }
    for (i, &u) in vertices.iter().enumerate() {
        for &v in &vertices[i + 1..] {
            assert!(mesh.has_edge(u, v));
        }
    }
    mesh.validate().unwrap();
}

fn cofacial_split_and_merge_duality<M: Manifold + Default>() {
    let mut mesh: M = primitives::square().unwrap();
    let faces: Vec<FaceId> = mesh.faces().collect();
    assert_eq!(faces.len(), 2);
    let front = faces[0];
    let quad = mesh.face_boundary(front).unwrap();
    assert_eq!(quad.len(), 4);

    let vertex_count = mesh.vertex_count();
    let face_count = mesh.face_count();
    let slots = total_boundary_slots(&mesh);
    let mut original: Vec<_> = quad.clone();
    original.sort();

    // Diagonal insertion splits the quad in two.
    let c1 = mesh.corner_at(front, quad[0]).unwrap();
    let c2 = mesh.corner_at(front, quad[2]).unwrap();
    let (fa, fb) = mesh.insert_edge(&c1, &c2).unwrap();
    assert_ne!(fa, fb);
    assert_eq!(mesh.face_count(), face_count + 1);
    assert_eq!(total_boundary_slots(&mesh), slots + 2);
    assert!(mesh.has_edge(quad[0], quad[2]));
    mesh.validate().unwrap();

    // Deleting the diagonal with recomputed corners merges back.
    let d1 = mesh.corner_at(fa, quad[0]).unwrap();
    let d2 = mesh.corner_at(fb, quad[2]).unwrap();
    let (merged, other) = mesh.delete_edge(&d1, &d2).unwrap();
    assert_eq!(merged, other);
    assert_eq!(mesh.face_count(), face_count);
    assert_eq!(mesh.vertex_count(), vertex_count);
    assert_eq!(total_boundary_slots(&mesh), slots);
    assert!(!mesh.has_edge(quad[0], quad[2]));
    let mut restored = mesh.face_boundary(merged).unwrap();
    assert_eq!(restored.len(), 4);
    restored.sort();
    assert_eq!(restored, original);
    mesh.validate().unwrap();
}

fn noncofacial_insert_merges<M: Manifold + Default>() {
    let mut mesh = M::default();
    let a = mesh.create_point_sphere([0.0; 3]);
    let b = mesh.create_point_sphere([1.0, 0.0, 0.0]);
    assert_eq!(mesh.face_count(), 2);
    let (f, g) = mesh.insert_edge(&a, &b).unwrap();
    assert_eq!(f, g);
    assert_eq!(mesh.face_count(), 1);
    assert_eq!(mesh.face_boundary(f).unwrap().len(), 2);
    mesh.validate().unwrap();
}

fn repeated_triangulation_stays_manifold<M: Manifold + Default>() {
    let mut mesh: M = primitives::tetrahedron().unwrap();
    let mut rng = SmallRng::seed_from_u64(0x7031);
    for _ in 0..5 {
        let faces: Vec<FaceId> = mesh.faces().collect();
        let face = faces[rng.gen_range(0..faces.len())];
        let before = mesh.face_count();
        let (centroid, fan) = triangulate_face(&mut mesh, face).unwrap();
        assert_eq!(
            mesh.face_count(),
            before - 1 + fan.len(),
            "fan replaces the face it covers"
        );
        assert_eq!(
            mesh.vertex_trace(centroid).unwrap().len(),
            fan.len(),
            "centroid rotation spans the fan"
        );
        mesh.validate().unwrap();
    }
}

mod face_list {
    use topomesh::prelude::FaceListMesh;

    #[test]
    fn point_sphere_idempotence() {
        super::point_sphere_idempotence::<FaceListMesh>();
    }

    #[test]
    fn tetrahedron_closure() {
        super::tetrahedron_closure::<FaceListMesh>();
    }

    #[test]
    fn cofacial_split_and_merge_duality() {
        super::cofacial_split_and_merge_duality::<FaceListMesh>();
    }

    #[test]
    fn noncofacial_insert_merges() {
        super::noncofacial_insert_merges::<FaceListMesh>();
    }

    #[test]
    fn repeated_triangulation_stays_manifold() {
        super::repeated_triangulation_stays_manifold::<FaceListMesh>();
    }
}

mod edge_list {
    use topomesh::prelude::EdgeListMesh;

    #[test]
    fn point_sphere_idempotence() {
        super::point_sphere_idempotence::<EdgeListMesh>();
    }

    #[test]
    fn tetrahedron_closure() {
        super::tetrahedron_closure::<EdgeListMesh>();
    }

    #[test]
    fn cofacial_split_and_merge_duality() {
        super::cofacial_split_and_merge_duality::<EdgeListMesh>();
    }

    #[test]
    fn noncofacial_insert_merges() {
        super::noncofacial_insert_merges::<EdgeListMesh>();
    }

    #[test]
    fn repeated_triangulation_stays_manifold() {
        super::repeated_triangulation_stays_manifold::<EdgeListMesh>();
    }
}
