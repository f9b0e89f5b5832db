use engine::{Canvas, Color, Sprite};

use crate::simulation::SimulationState;

/// The two images the game draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprites {
    pub player: Sprite,
    pub shot: Sprite,
}

/// Paint one frame: background, then the player, then shots oldest first.
pub fn render<C: Canvas>(
    state: &SimulationState,
    sprites: &Sprites,
    background: Color,
    canvas: &mut C,
) {
    canvas.clear(background);
    canvas.blit(&sprites.player, state.player().bounds());
    for shot in state.shots() {
        canvas.blit(&sprites.shot, shot.bounds());
    }
}
