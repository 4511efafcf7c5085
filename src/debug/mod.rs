//! Debug tooling for level iteration (dev-tools builds).
//!
//! - Physics collider gizmos, initially shown per `show_colliders`
//! - F1 toggles the gizmos at runtime

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LevelConfig;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsDebugPlugin::default())
            .add_systems(Startup, apply_collider_visibility)
            .add_systems(Update, toggle_colliders);
    }
}

fn apply_collider_visibility(config: Res<LevelConfig>, mut store: ResMut<GizmoConfigStore>) {
    let (gizmos, _) = store.config_mut::<PhysicsGizmos>();
    gizmos.enabled = config.show_colliders;
}

fn toggle_colliders(keyboard: Res<ButtonInput<KeyCode>>, mut store: ResMut<GizmoConfigStore>) {
    if keyboard.just_pressed(KeyCode::F1) {
        let (gizmos, _) = store.config_mut::<PhysicsGizmos>();
        gizmos.enabled = !gizmos.enabled;
        info!("Collider gizmos {}", if gizmos.enabled { "on" } else { "off" });
    }
}
