//! UI domain: in-level HUD.

mod hud_score;


use bevy::prelude::*;

use crate::score::ScoreSet;
use crate::ui::hud_score::{spawn_score_text, update_score_text};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_score_text)
            .add_systems(Update, update_score_text.after(ScoreSet));
    }
}
