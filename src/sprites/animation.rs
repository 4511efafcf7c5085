//! Animation clips and playback.
//!
//! Clips are registered by name from atlas frame names and played on the
//! player's sprite. Only the idle and walk states exist in this level.

use bevy::prelude::*;
use std::collections::HashMap;

/// Animation states for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
}

impl AnimationState {
    /// Clip name in the `AnimationLibrary`.
    pub fn name(self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Walk => "walk",
        }
    }
}

/// How many times a clip plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Forever,
    /// Extra plays after the first one
    Times(u32),
}

impl Repeat {
    /// Phaser-style count: negative means loop forever.
    pub fn from_count(count: i32) -> Self {
        u32::try_from(count).map_or(Repeat::Forever, Repeat::Times)
    }
}

/// A named sequence of atlas indices.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub frames: Vec<usize>,
    pub frame_rate: f32,
    pub repeat: Repeat,
}

impl AnimationClip {
    pub fn frame_duration(&self) -> f32 {
        if self.frame_rate > 0.0 {
            1.0 / self.frame_rate
        } else {
            f32::INFINITY
        }
    }
}

/// Registered clips, keyed by name.
#[derive(Resource, Debug, Default)]
pub struct AnimationLibrary {
    clips: HashMap<String, AnimationClip>,
}

impl AnimationLibrary {
    pub fn register(&mut self, name: impl Into<String>, clip: AnimationClip) {
        let name = name.into();
        debug!(
            "Registered animation '{}' ({} frames @ {} fps, {:?})",
            name,
            clip.frames.len(),
            clip.frame_rate,
            clip.repeat
        );
        self.clips.insert(name, clip);
    }

    pub fn get(&self, name: &str) -> Option<&AnimationClip> {
        self.clips.get(name)
    }
}

/// Build frame names like `p1_walk01..p1_walk11`.
pub fn generate_frame_names(
    prefix: &str,
    start: u32,
    end: u32,
    zero_pad: usize,
    suffix: &str,
) -> Vec<String> {
    let frames: Box<dyn Iterator<Item = u32>> = if start <= end {
        Box::new(start..=end)
    } else {
        Box::new((end..=start).rev())
    };

    frames
        .map(|n| format!("{}{:0width$}{}", prefix, n, suffix, width = zero_pad))
        .collect()
}

/// Component for animation playback on the player sprite.
#[derive(Component, Debug, Default)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Index into the clip's frame list.
    pub current_frame: usize,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Completed plays of a finite clip.
    pub plays: u32,
    /// Whether a finite clip has run out.
    pub finished: bool,
}

impl AnimationController {
    pub fn new(state: AnimationState) -> Self {
        Self {
            state,
            ..default()
        }
    }

    /// Start `state` from its first frame. With `ignore_if_playing` the call
    /// is a no-op while that state is already running.
    pub fn play(&mut self, state: AnimationState, ignore_if_playing: bool) {
        if ignore_if_playing && self.state == state && !self.finished {
            return;
        }
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.plays = 0;
        self.finished = false;
    }

    /// Advance by `dt` seconds. Returns true on the frame a finite clip ends.
    pub fn advance(&mut self, dt: f32, clip: &AnimationClip) -> bool {
        if self.finished || clip.frames.is_empty() {
            return false;
        }

        let frame_duration = clip.frame_duration();
        self.frame_timer += dt;

        while self.frame_timer >= frame_duration {
            self.frame_timer -= frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frames.len() {
                match clip.repeat {
                    Repeat::Forever => self.current_frame = 0,
                    Repeat::Times(n) if self.plays < n => {
                        self.plays += 1;
                        self.current_frame = 0;
                    }
                    Repeat::Times(_) => {
                        self.current_frame = clip.frames.len() - 1;
                        self.finished = true;
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Atlas index to display for the current frame.
    pub fn atlas_index(&self, clip: &AnimationClip) -> Option<usize> {
        clip.frames
            .get(self.current_frame.min(clip.frames.len().saturating_sub(1)))
            .copied()
    }
}

/// System that advances animations and writes the atlas index.
pub fn update_animation_frames(
    time: Res<Time>,
    library: Res<AnimationLibrary>,
    mut query: Query<(&mut AnimationController, &mut Sprite)>,
) {
    for (mut controller, mut sprite) in &mut query {
        let Some(clip) = library.get(controller.state.name()) else {
            continue;
        };

        if controller.advance(time.delta_secs(), clip) {
            debug!("Animation '{}' finished", controller.state.name());
        }

        let Some(index) = controller.atlas_index(clip) else {
            continue;
        };
        if let Some(atlas) = sprite.texture_atlas.as_mut()
            && atlas.index != index
        {
            atlas.index = index;
        }
    }
}
