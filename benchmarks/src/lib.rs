//! Shared setup helpers for lab-collision benchmarks.
//!
//! ## Running
//!
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision -- broadphase
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision -- epa

use glam::{Mat4, Quat, Vec3};
use lab_collision::{CollisionConfig, CollisionWorld, ConvexMesh, Portal, SceneObject, SphereProbe};

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

/// Axis-aligned cube of half-extent `half` centered at `position`.
pub fn cube(half: f32, position: Vec3) -> ConvexMesh {
    ConvexMesh::cuboid(Vec3::splat(half)).with_transform(Mat4::from_translation(position))
}

/// Cube rotated about the diagonal axis, so no face lines up with the world axes.
pub fn tilted_cube(half: f32, position: Vec3) -> ConvexMesh {
    let rotation = Quat::from_axis_angle(Vec3::ONE.normalize(), 0.6);
    ConvexMesh::cuboid(Vec3::splat(half))
        .with_transform(Mat4::from_rotation_translation(rotation, position))
}

/// Point cloud on a sphere of `radius`, `rings * segments` vertices plus poles.
///
/// Stands in for the lab's icosphere meshes: many vertices, every one on the hull.
pub fn sphere_cloud(radius: f32, rings: usize, segments: usize, position: Vec3) -> ConvexMesh {
    let mut vertices = vec![Vec3::Y * radius, Vec3::NEG_Y * radius];
    for ring in 1..=rings {
        let polar = std::f32::consts::PI * ring as f32 / (rings + 1) as f32;
        for segment in 0..segments {
            let azimuth = std::f32::consts::TAU * segment as f32 / segments as f32;
            vertices.push(
                Vec3::new(
                    polar.sin() * azimuth.cos(),
                    polar.cos(),
                    polar.sin() * azimuth.sin(),
                ) * radius,
            );
        }
    }

    ConvexMesh::new(vertices)
        .expect("sphere cloud always has its two poles")
        .with_transform(Mat4::from_translation(position))
}

// ---------------------------------------------------------------------------
// Scenes
// ---------------------------------------------------------------------------

/// `n` unit cubes on a grid with 1.5 spacing, so neighbours overlap.
pub fn setup_cube_grid(n: usize) -> Vec<ConvexMesh> {
    let cols = (n as f32).sqrt().ceil() as usize;
    (0..n)
        .map(|i| {
            let x = (i % cols) as f32 * 1.5;
            let z = (i / cols) as f32 * 1.5;
            cube(1.0, Vec3::new(x, 0.0, z))
        })
        .collect()
}

/// `n` small cubes spread far apart; nothing overlaps.
pub fn setup_sparse_grid(n: usize) -> Vec<ConvexMesh> {
    let cols = (n as f32).sqrt().ceil() as usize;
    (0..n)
        .map(|i| {
            let x = (i % cols) as f32 * 10.0;
            let z = (i / cols) as f32 * 10.0;
            cube(0.5, Vec3::new(x, 0.0, z))
        })
        .collect()
}

/// A closed room with a floor, four walls, two pillars and a portal.
pub fn setup_room() -> CollisionWorld {
    let mut world = CollisionWorld::new(CollisionConfig::default());

    let slab = |half: Vec3, position: Vec3| {
        ConvexMesh::cuboid(half).with_transform(Mat4::from_translation(position))
    };

    world.add_object(SceneObject::solid(slab(
        Vec3::new(8.0, 0.5, 8.0),
        Vec3::new(0.0, -0.5, 0.0),
    )));
    world.add_object(SceneObject::solid(slab(
        Vec3::new(8.0, 3.0, 0.5),
        Vec3::new(0.0, 3.0, -8.5),
    )));
    world.add_object(SceneObject::solid(slab(
        Vec3::new(8.0, 3.0, 0.5),
        Vec3::new(0.0, 3.0, 8.5),
    )));
    world.add_object(SceneObject::solid(slab(
        Vec3::new(0.5, 3.0, 8.0),
        Vec3::new(-8.5, 3.0, 0.0),
    )));
    world.add_object(SceneObject::solid(slab(
        Vec3::new(0.5, 3.0, 8.0),
        Vec3::new(8.5, 3.0, 0.0),
    )));
    world.add_object(SceneObject::solid(tilted_cube(1.0, Vec3::new(3.0, 1.0, 3.0))));
    world.add_object(SceneObject::solid(sphere_cloud(
        1.0,
        8,
        16,
        Vec3::new(-3.0, 1.0, 3.0),
    )));

    let mut door = ConvexMesh::cuboid(Vec3::new(1.0, 1.0, 0.01));
    door.set_position_yaw(Vec3::new(0.0, 1.0, -4.0), 0.0);
    world.add_object(SceneObject::portal(
        door,
        Portal::new(Vec3::new(0.0, 1.0, 4.0), std::f32::consts::PI),
    ));

    world
}

/// Probe resting in the corner between the floor and the back wall.
pub fn corner_probe() -> SphereProbe {
    SphereProbe::new(Vec3::new(0.0, 0.2, -7.8), SphereProbe::DEFAULT_RADIUS)
}
