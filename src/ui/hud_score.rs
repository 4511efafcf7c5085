//! UI domain: coin score text.

use bevy::prelude::*;

use crate::content::{LevelConfig, parse_color};
use crate::score::ScoreTracker;

/// Marker for the coin score text
#[derive(Component)]
pub struct ScoreText;

/// Text shown for a given count, e.g. `Coins: 3`.
pub fn score_label(label: &str, count: u32) -> String {
    format!("{}: {}", label, count)
}

pub(crate) fn spawn_score_text(mut commands: Commands, config: Res<LevelConfig>) {
    let def = &config.score_text;

    // UI nodes are laid out in screen space, so the text ignores camera scroll
    commands.spawn((
        ScoreText,
        Text::new(score_label(&def.label, 0)),
        TextFont {
            font_size: def.font_size,
            ..default()
        },
        TextColor(parse_color(&def.color, Color::WHITE)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(def.position.x),
            top: Val::Px(def.position.y),
            ..default()
        },
    ));
}

pub(crate) fn update_score_text(
    config: Res<LevelConfig>,
    tracker: Res<ScoreTracker>,
    mut query: Query<&mut Text, With<ScoreText>>,
) {
    if tracker.is_changed() {
        for mut text in &mut query {
            **text = score_label(&config.score_text.label, tracker.count());
        }
    }
}
