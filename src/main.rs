mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod movement;
mod score;
mod sprites;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Coin Platformer".to_string(),
                    resolution: (core::VIEWPORT.x as u32, core::VIEWPORT.y as u32).into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        content::ContentPlugin,
        level::LevelPlugin,
        core::CorePlugin,
        sprites::SpritesPlugin,
        movement::MovementPlugin,
        score::ScorePlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
