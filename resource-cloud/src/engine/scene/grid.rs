use std::f32::consts::FRAC_PI_2;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

use constants::render_settings::GRID_DIVISIONS;

/// A straight line in cube space.
pub type Segment = (Vec3, Vec3);

#[derive(Component)]
pub struct BoundingFrame;

#[derive(Component)]
pub struct FloorGrid;

/// The twelve edges of the cube `[-box_size, box_size]^3`.
pub fn bounding_box_segments(box_size: f32) -> Vec<Segment> {
    let b = box_size;
    let corner = |x: f32, y: f32, z: f32| Vec3::new(x * b, y * b, z * b);
    let mut segments = Vec::with_capacity(12);

    for s in [-1.0, 1.0] {
        for t in [-1.0, 1.0] {
            segments.push((corner(-1.0, s, t), corner(1.0, s, t)));
            segments.push((corner(s, -1.0, t), corner(s, 1.0, t)));
            segments.push((corner(s, t, -1.0), corner(s, t, 1.0)));
        }
    }

    segments
}

/// Grid lines on the floor face, spaced `box_size / GRID_DIVISIONS`.
///
/// Lines are laid out in face-local 2D (a `2b x 2b` square from the face corner)
/// and carried into the cube frame by a translation to `(-b, -b, -b)` followed by a
/// quarter turn about X, which lays the square flat on the `y = -b` face.
pub fn floor_grid_segments(box_size: f32) -> Vec<Segment> {
    let b = box_size;
    let spacing = b / GRID_DIVISIONS as f32;
    let face = Transform::from_xyz(-b, -b, -b).with_rotation(Quat::from_rotation_x(FRAC_PI_2));
    let extent = 2.0 * b;
    let lines = 2 * GRID_DIVISIONS;

    let mut segments = Vec::with_capacity(2 * lines as usize);
    for i in 0..lines {
        let offset = i as f32 * spacing;
        segments.push((Vec3::new(offset, 0.0, 0.0), Vec3::new(offset, extent, 0.0)));
        segments.push((Vec3::new(0.0, offset, 0.0), Vec3::new(extent, offset, 0.0)));
    }

    segments
        .into_iter()
        .map(|(a, c)| (face.transform_point(a), face.transform_point(c)))
        .collect()
}

pub fn line_list_mesh(segments: &[Segment]) -> Mesh {
    let vertices: Vec<[f32; 3]> = segments
        .iter()
        .flat_map(|(a, b)| [a.to_array(), b.to_array()])
        .collect();
    let indices: Vec<u32> = (0..vertices.len() as u32).collect();

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

pub fn line_material(gray: u8) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgb_u8(gray, gray, gray),
        unlit: true,
        ..default()
    }
}
