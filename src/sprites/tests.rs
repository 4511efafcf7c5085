//! Sprites: tests for frame naming, atlas metadata and playback.

use std::collections::HashMap;

use super::{
    AnimationClip, AnimationController, AnimationLibrary, AnimationState, AtlasMetadata, Repeat,
    generate_frame_names, register_player_clips,
};
use crate::content::{WalkAnimationDef, parse_json};
use bevy::prelude::*;

fn clip(frames: usize, repeat: Repeat) -> AnimationClip {
    AnimationClip {
        frames: (0..frames).collect(),
        frame_rate: 10.0,
        repeat,
    }
}

// -----------------------------------------------------------------------------
// Frame names
// -----------------------------------------------------------------------------

#[test]
fn test_generate_walk_frame_names() {
    let names = generate_frame_names("p1_walk", 1, 11, 2, "");
    assert_eq!(names.len(), 11);
    assert_eq!(names[0], "p1_walk01");
    assert_eq!(names[9], "p1_walk10");
    assert_eq!(names[10], "p1_walk11");
}

#[test]
fn test_generate_frame_names_suffix_and_reverse() {
    assert_eq!(
        generate_frame_names("run_", 3, 1, 3, ".png"),
        vec!["run_003.png", "run_002.png", "run_001.png"]
    );
}

// -----------------------------------------------------------------------------
// Atlas metadata
// -----------------------------------------------------------------------------

#[test]
fn test_parse_atlas_hash_form() {
    let json = r#"{
        "frames": {
            "p1_walk02": { "frame": { "x": 66, "y": 0, "w": 66, "h": 92 } },
            "p1_walk01": { "frame": { "x": 0, "y": 0, "w": 66, "h": 92 } }
        },
        "meta": { "size": { "w": 512, "h": 256 } }
    }"#;
    let metadata: AtlasMetadata = parse_json("player.json", json).unwrap();

    let (layout, frames) = metadata.to_layout();
    assert_eq!(layout.size, UVec2::new(512, 256));
    assert_eq!(frames.len(), 2);
    // Hash form is sorted by name
    assert_eq!(frames["p1_walk01"], 0);
    assert_eq!(layout.textures[frames["p1_walk02"]], URect::new(66, 0, 132, 92));
}

#[test]
fn test_parse_atlas_array_form_without_meta() {
    let json = r#"{
        "frames": [
            { "filename": "p1_stand", "frame": { "x": 0, "y": 0, "w": 66, "h": 92 } },
            { "filename": "p1_walk01", "frame": { "x": 66, "y": 92, "w": 66, "h": 92 } }
        ]
    }"#;
    let metadata: AtlasMetadata = parse_json("player.json", json).unwrap();

    assert_eq!(metadata.sheet_size(), UVec2::new(132, 184));
    let (_, frames) = metadata.to_layout();
    assert_eq!(frames["p1_stand"], 0);
    assert_eq!(frames["p1_walk01"], 1);
}

#[test]
fn test_register_player_clips_reports_missing_frames() {
    let frames: HashMap<String, usize> = [("p1_stand", 0), ("p1_walk01", 1), ("p1_walk02", 2)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    let def = WalkAnimationDef {
        end: 3,
        ..Default::default()
    };

    let mut library = AnimationLibrary::default();
    let missing = register_player_clips(&mut library, &def, &frames);

    assert_eq!(missing, vec!["p1_walk03".to_string()]);
    let walk = library.get("walk").unwrap();
    assert_eq!(walk.frames, vec![1, 2]);
    assert_eq!(walk.repeat, Repeat::Forever);
    assert_eq!(library.get("idle").unwrap().frames, vec![0]);
}

// -----------------------------------------------------------------------------
// Playback
// -----------------------------------------------------------------------------

#[test]
fn test_repeat_from_count() {
    assert_eq!(Repeat::from_count(-1), Repeat::Forever);
    assert_eq!(Repeat::from_count(0), Repeat::Times(0));
    assert_eq!(Repeat::from_count(2), Repeat::Times(2));
}

#[test]
fn test_play_ignore_if_playing_keeps_frame() {
    let mut controller = AnimationController::new(AnimationState::Walk);
    controller.current_frame = 5;

    controller.play(AnimationState::Walk, true);
    assert_eq!(controller.current_frame, 5);

    controller.play(AnimationState::Walk, false);
    assert_eq!(controller.current_frame, 0);

    controller.current_frame = 3;
    controller.play(AnimationState::Idle, true);
    assert_eq!(controller.state, AnimationState::Idle);
    assert_eq!(controller.current_frame, 0);
}

#[test]
fn test_looping_clip_wraps() {
    let clip = clip(3, Repeat::Forever);
    let mut controller = AnimationController::new(AnimationState::Walk);

    // 0.35s at 10 fps = 3 frames advanced
    assert!(!controller.advance(0.35, &clip));
    assert_eq!(controller.current_frame, 0);
    assert!(!controller.finished);

    controller.advance(0.1, &clip);
    assert_eq!(controller.atlas_index(&clip), Some(1));
}

#[test]
fn test_finite_clip_stops_on_last_frame() {
    let clip = clip(2, Repeat::Times(1));
    let mut controller = AnimationController::new(AnimationState::Walk);

    // First play: frames 0,1 then one repeat
    assert!(!controller.advance(0.25, &clip));
    assert_eq!(controller.plays, 1);

    assert!(controller.advance(0.2, &clip));
    assert!(controller.finished);
    assert_eq!(controller.atlas_index(&clip), Some(1));

    // Finished clips no longer advance
    assert!(!controller.advance(1.0, &clip));
    assert_eq!(controller.current_frame, 1);
}
