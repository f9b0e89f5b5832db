//! Ties input, simulation and rendering to the engine's tick driver.

use engine::{Canvas, Color, EngineError, EventQueue, Game, Graphics, Rect};

use crate::input::InputState;
use crate::render::{render, Sprites};
use crate::simulation::SimulationState;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

pub struct MainLoop {
    state: LoopState,
    input: InputState,
    sim: SimulationState,
    sprites: Sprites,
    background: Color,
    ticks: u64,
}

impl MainLoop {
    /// Load the sprites and build the opening world.
    pub fn setup(graphics: &mut Graphics, tuning: &Tuning) -> Result<Self, EngineError> {
        let sprites = Sprites {
            player: graphics.load_sprite(&tuning.player.sprite)?,
            shot: graphics.load_sprite(&tuning.shot.sprite)?,
        };
        let size = graphics.logical_size();
        let area = Rect::new(0, 0, size.x as i32, size.y as i32);
        Ok(Self::new(area, sprites, tuning))
    }

    pub fn new(area: Rect, sprites: Sprites, tuning: &Tuning) -> Self {
        let sim = SimulationState::new(area, sprites.player.size, sprites.shot.size, tuning);
        log::info!(
            "play area {}x{}, player at {:?}",
            area.width(),
            area.height(),
            sim.player().bounds().pos()
        );
        Self {
            state: LoopState::Running,
            input: InputState::new(),
            sim,
            sprites,
            background: tuning.render.background_color(),
            ticks: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn simulation(&self) -> &SimulationState {
        &self.sim
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Game for MainLoop {
    fn tick(&mut self, events: &mut EventQueue) {
        if self.state == LoopState::Terminated {
            return;
        }
        self.input.poll(events);
        let intent = self.input.intent();
        self.sim.update(&intent);
        self.ticks += 1;
        log::trace!(
            "tick {}: player {:?}, {} shot(s)",
            self.ticks,
            self.sim.player().bounds().pos(),
            self.sim.shots().len()
        );

        // This tick still gets drawn; the engine stops after showing it.
        if intent.quit {
            log::info!("quitting after {} ticks", self.ticks);
            self.state = LoopState::Terminated;
        }
    }

    fn draw<C: Canvas>(&self, canvas: &mut C) {
        render(&self.sim, &self.sprites, self.background, canvas);
    }

    fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }
}
