mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod ui;
mod world;

use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Skyhook".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            world::WorldPlugin,
            movement::MovementPlugin,
            ui::UiPlugin,
        ))
        .add_plugins(dev_plugins)
        .run();
}

#[cfg(feature = "dev-tools")]
fn dev_plugins(app: &mut App) {
    app.add_plugins(debug::DebugPlugin);
}

#[cfg(not(feature = "dev-tools"))]
fn dev_plugins(_app: &mut App) {}
