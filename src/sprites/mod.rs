//! Sprites module for the player sheet and its animations.
//!
//! This module handles:
//! - Loading the player atlas metadata from JSON
//! - Registering the idle and walk clips from generated frame names
//! - Animation playback on the player sprite

pub mod animation;
pub mod atlas;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use std::collections::HashMap;
use std::path::Path;

pub use animation::*;
// Disambiguate from `bevy::prelude::AnimationClip`.
use animation::AnimationClip;
pub use atlas::*;

use crate::content::{LevelConfig, WalkAnimationDef, load_json_file};
use crate::level::LevelSet;
use crate::movement::PlayerControlSet;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationLibrary>()
            .add_systems(Startup, load_player_atlas.in_set(LevelSet::Load))
            .add_systems(Update, update_animation_frames.after(PlayerControlSet));
    }
}

/// System to load the player atlas and register its clips at startup.
fn load_player_atlas(
    mut commands: Commands,
    config: Res<LevelConfig>,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    mut library: ResMut<AnimationLibrary>,
) {
    let metadata: AtlasMetadata = match load_json_file(Path::new(&config.assets.player_atlas)) {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!("{}. Player animations disabled", e);
            return;
        }
    };

    let (layout, frames) = metadata.to_layout();
    info!(
        "Loaded player atlas {}: {} frames",
        config.assets.player_atlas,
        frames.len()
    );

    let missing = register_player_clips(&mut library, &config.walk_animation, &frames);
    if !missing.is_empty() {
        warn!("Player atlas is missing frames: {:?}", missing);
    }

    commands.insert_resource(PlayerAtlas {
        image: asset_server.load(config.assets.player_image.clone()),
        layout: layouts.add(layout),
        frames,
    });
}

/// Register `walk` and `idle` from atlas frame names. Returns the names
/// that the atlas doesn't contain.
pub(crate) fn register_player_clips(
    library: &mut AnimationLibrary,
    def: &WalkAnimationDef,
    frames: &HashMap<String, usize>,
) -> Vec<String> {
    let mut missing = Vec::new();
    let mut resolve = |names: Vec<String>| -> Vec<usize> {
        names
            .into_iter()
            .filter_map(|name| match frames.get(&name) {
                Some(&index) => Some(index),
                None => {
                    missing.push(name);
                    None
                }
            })
            .collect()
    };

    let walk = resolve(generate_frame_names(
        &def.prefix,
        def.start,
        def.end,
        def.zero_pad,
        "",
    ));
    let idle = resolve(vec![def.idle_frame.clone()]);

    library.register(
        AnimationState::Walk.name(),
        AnimationClip {
            frames: walk,
            frame_rate: def.frame_rate,
            repeat: Repeat::from_count(def.repeat),
        },
    );
    library.register(
        AnimationState::Idle.name(),
        AnimationClip {
            frames: idle,
            frame_rate: def.frame_rate,
            repeat: Repeat::Forever,
        },
    );

    missing
}
