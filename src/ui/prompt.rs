// src/ui/prompt.rs
//
// Screen-space interaction prompts. Each interactable owns one prompt node;
// the interaction dispatcher flips its Visibility.

use bevy::prelude::*;

use crate::interaction::config::InteractionSettings;

const BACKGROUND_COLOR: Color = Color::srgba(0.05, 0.05, 0.07, 0.8);
const BORDER_COLOR: Color = Color::srgb(0.85, 0.7, 0.35);
const TEXT_COLOR: Color = Color::srgb(0.98, 0.95, 0.88);
const BOTTOM_OFFSET_PX: f32 = 48.0;
const PADDING_PX: f32 = 10.0;

/// Marker for interaction prompt nodes.
#[derive(Component, Debug)]
pub struct InteractionPrompt;

/// Spawns a hidden prompt centred near the bottom of the screen and returns its entity.
pub fn spawn_prompt(
    commands: &mut Commands,
    settings: &InteractionSettings,
    text: impl Into<String>,
) -> Entity {
    let text = text.into();
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(BOTTOM_OFFSET_PX),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Visibility::Hidden,
            InteractionPrompt,
            Name::new(format!("Prompt: {}", text)),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        padding: UiRect::axes(Val::Px(PADDING_PX * 1.6), Val::Px(PADDING_PX)),
                        border: UiRect::all(Val::Px(1.5)),
                        ..default()
                    },
                    BackgroundColor(BACKGROUND_COLOR),
                    BorderColor::from(BORDER_COLOR),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new(text),
                        TextFont {
                            font_size: settings.prompt_font_size,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                });
        })
        .id()
}
