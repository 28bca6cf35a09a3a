//! Refinement operators built on the edit primitives.

use topomesh::prelude::*;

fn centroid_triangulation_of_a_quad<M: Manifold + Default>() {
    let mut mesh: M = primitives::square().unwrap();
    let face = mesh.faces().next().unwrap();
    let face_count = mesh.face_count();

    let (centroid, fan) = triangulate_face(&mut mesh, face).unwrap();
    assert_eq!(fan.len(), 4);
    assert_eq!(mesh.face_count(), face_count + 3);
    assert_eq!(mesh.position(centroid).unwrap(), [0.0, 0.0, 0.0]);
    for &triangle in &fan {
        let boundary = mesh.face_boundary(triangle).unwrap();
        assert_eq!(boundary.len(), 3);
        assert!(boundary.contains(&centroid));
    }
    assert_eq!(mesh.vertex_trace(centroid).unwrap().len(), 4);
    mesh.validate().unwrap();
}

fn edge_subdivision_at_midpoint<M: Manifold + Default>() {
    let mut mesh: M = primitives::square().unwrap();
    let faces: Vec<FaceId> = mesh.faces().collect();
    let (front, back) = (faces[0], faces[1]);
    let quad = mesh.face_boundary(front).unwrap();
    let (u, v) = (quad[0], quad[1]);
    assert!(mesh.has_edge(u, v));

    let expected = {
        let a = mesh.position(u).unwrap();
        let b = mesh.position(v).unwrap();
        [
            (a[0] + b[0]) / 2.0,
            (a[1] + b[1]) / 2.0,
            (a[2] + b[2]) / 2.0,
        ]
    };

    let vertex_count = mesh.vertex_count();
    let face_count = mesh.face_count();
    let c1 = mesh.corner_at(front, u).unwrap();
    let c2 = mesh.corner_at(back, v).unwrap();
    let (mid, (fa, fb)) = subdivide_edge(&mut mesh, &c1, &c2).unwrap();

    assert_eq!(mesh.vertex_count(), vertex_count + 1);
    assert_eq!(mesh.face_count(), face_count);
    assert_eq!(mesh.position(mid).unwrap(), expected);
    assert!(!mesh.has_edge(u, v));
    assert!(mesh.has_edge(u, mid));
    assert!(mesh.has_edge(mid, v));
    assert_eq!(mesh.face_boundary(fa).unwrap().len(), 5);
    assert_eq!(mesh.face_boundary(fb).unwrap().len(), 5);
    assert_eq!(mesh.vertex_trace(mid).unwrap().len(), 2);
    mesh.validate().unwrap();
}

mod face_list {
    use topomesh::prelude::FaceListMesh;

    #[test]
    fn centroid_triangulation_of_a_quad() {
        super::centroid_triangulation_of_a_quad::<FaceListMesh>();
    }

    #[test]
    fn edge_subdivision_at_midpoint() {
        super::edge_subdivision_at_midpoint::<FaceListMesh>();
    }
}

mod edge_list {
    use topomesh::prelude::EdgeListMesh;

    #[test]
    fn centroid_triangulation_of_a_quad() {
        super::centroid_triangulation_of_a_quad::<EdgeListMesh>();
    }

    #[test]
    fn edge_subdivision_at_midpoint() {
        super::edge_subdivision_at_midpoint::<EdgeListMesh>();
    }
}
