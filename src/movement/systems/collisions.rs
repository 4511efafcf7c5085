//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementState, Player};

/// Ray length below the collider's bottom edge
const GROUND_RAY_LENGTH: f32 = 4.0;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut MovementState), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not coins or walls)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        let (half_width, half_height) = match collider.shape_scaled().as_cuboid() {
            Some(c) => (c.half_extents.x, c.half_extents.y),
            None => (16.0, 24.0),
        };

        // Cast under the centre and near each edge so ledges still count
        let feet = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let inset = half_width * 0.8;
        state.on_ground = [-inset, 0.0, inset].into_iter().any(|dx| {
            spatial_query
                .cast_ray(
                    feet + Vec2::new(dx, 0.0),
                    Dir2::NEG_Y,
                    GROUND_RAY_LENGTH,
                    true,
                    &ground_filter,
                )
                .is_some()
        });

        if state.on_ground && !was_on_ground {
            debug!("Landed at {:?}", transform.translation.truncate());
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground at {:?}", transform.translation.truncate());
        }
    }
}
