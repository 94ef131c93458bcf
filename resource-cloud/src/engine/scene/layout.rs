use bevy::prelude::*;
use rand::Rng;

use constants::relevance::MAX_RELEVANCE_SCORE;
use constants::render_settings::{BOX_VIEWPORT_DIVISOR, MIN_BOX_SIZE};

use crate::engine::assets::resource_record::ResourceRecord;

/// Cached record positions for one generation. World space, Y up.
#[derive(Resource, Debug, Default, Clone)]
pub struct CloudLayout {
    pub positions: Vec<Vec3>,
    pub box_size: f32,
    /// Resource set generation these positions were built from.
    pub generation: Option<u64>,
}

impl CloudLayout {
    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.positions.get(index).copied()
    }
}

/// Half-extent of the bounding cube for a viewport height.
pub fn box_size_for_viewport(viewport_height: f32) -> f32 {
    (viewport_height / BOX_VIEWPORT_DIVISOR).max(MIN_BOX_SIZE)
}

/// Linear remap of `value` from one range to another. Degenerate input ranges map to `out_min`.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + (value - in_min) / span * (out_max - out_min)
}

/// Even spread from `+box_size` at index 0 down to `-box_size` at the last index.
pub fn spread_x(index: usize, count: usize, box_size: f32) -> f32 {
    if count <= 1 {
        return box_size;
    }
    box_size - map_range(index as f32, 0.0, (count - 1) as f32, 0.0, 2.0 * box_size)
}

/// World height for a relevance score. Computed in screen convention (y down)
/// and flipped, so a higher score sits higher in the Y-up world.
pub fn relevance_height(score: u8, box_size: f32) -> f32 {
    let screen_y = box_size - map_range(score as f32, 0.0, MAX_RELEVANCE_SCORE as f32, 0.0, box_size);
    -screen_y
}

/// One position per record, in order. `x` and `y` depend only on the inputs;
/// `z` is drawn from `rng` once per record.
pub fn layout_points<R: Rng + ?Sized>(
    records: &[ResourceRecord],
    box_size: f32,
    rng: &mut R,
) -> Vec<Vec3> {
    let count = records.len();
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            Vec3::new(
                spread_x(index, count, box_size),
                relevance_height(record.relevance_score(), box_size),
                rng.gen_range(-box_size..=box_size),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn records(relevances: &[&str]) -> Vec<ResourceRecord> {
        relevances
            .iter()
            .enumerate()
            .map(|(i, relevance)| {
                ResourceRecord::new(&format!("r{i}"), "Tool", "desc", relevance, "")
            })
            .collect()
    }

    #[test]
    fn box_size_has_a_floor() {
        assert_eq!(box_size_for_viewport(200.0), MIN_BOX_SIZE);
        assert_eq!(box_size_for_viewport(800.0), 200.0);
    }

    #[test]
    fn one_position_per_record_inside_the_cube() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in [0, 1, 2, 5, 40] {
            let labels: Vec<&str> = (0..count)
                .map(|i| ["High", "Key", "Medium", "Low", ""][i % 5])
                .collect();
            let points = layout_points(&records(&labels), 150.0, &mut rng);
            assert_eq!(points.len(), count);
            for p in points {
                assert!(p.abs().max_element() <= 150.0, "{p} escapes the cube");
            }
        }
    }

    #[test]
    fn x_decreases_from_first_to_last() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = layout_points(&records(&["", "", "", ""]), 100.0, &mut rng);
        assert_eq!(points[0].x, 100.0);
        assert_eq!(points[3].x, -100.0);
        assert!(points.windows(2).all(|w| w[0].x > w[1].x));
    }

    #[test]
    fn single_record_sits_at_positive_edge() {
        assert_eq!(spread_x(0, 1, 120.0), 120.0);
    }

    #[test]
    fn higher_relevance_is_raised() {
        let mut rng = StdRng::seed_from_u64(3);
        let points = layout_points(&records(&["High", "Medium", "Low"]), 180.0, &mut rng);
        assert!(points[0].y > points[1].y);
        assert!(points[1].y > points[2].y);
        assert!(relevance_height(5, 100.0) >= relevance_height(1, 100.0));
    }

    #[test]
    fn x_and_y_repeat_while_z_is_redrawn() {
        let input = records(&["High", "Low", "Key", "Useful"]);
        let first = layout_points(&input, 100.0, &mut StdRng::seed_from_u64(10));
        let second = layout_points(&input, 100.0, &mut StdRng::seed_from_u64(11));

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
        assert!(first.iter().zip(&second).any(|(a, b)| a.z != b.z));
    }

    #[test]
    fn degenerate_range_maps_to_lower_bound() {
        assert_eq!(map_range(3.0, 2.0, 2.0, 10.0, 20.0), 10.0);
        assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
    }
}
