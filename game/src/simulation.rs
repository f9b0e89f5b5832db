//! The world and its per-tick update.

use engine::Rect;
use glam::{IVec2, UVec2};

use crate::actor::Actor;
use crate::input::Intent;
use crate::projectile::Projectile;
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct SimulationState {
    area: Rect,
    player: Actor,
    shots: Vec<Projectile>,
    /// Fire gate. Cleared by releasing fire, not by the shot disappearing.
    has_live_shot: bool,
    shot_size: IVec2,
    shot_speed: i32,
    shots_fired: u64,
}

impl SimulationState {
    /// Fresh world with the player centered in `area`.
    pub fn new(area: Rect, player_size: UVec2, shot_size: UVec2, tuning: &Tuning) -> Self {
        let center = IVec2::new(area.width() / 2, area.height() / 2);
        let player = Actor::new(
            Rect::from_center(center, player_size.as_ivec2()),
            tuning.player.speed,
            area,
        );
        Self {
            area,
            player,
            shots: Vec::new(),
            has_live_shot: false,
            shot_size: shot_size.as_ivec2(),
            shot_speed: tuning.shot.speed,
            shots_fired: 0,
        }
    }

    pub fn player(&self) -> &Actor {
        &self.player
    }

    /// Live shots, oldest first.
    pub fn shots(&self) -> &[Projectile] {
        &self.shots
    }

    pub fn has_live_shot(&self) -> bool {
        self.has_live_shot
    }

    /// Shots spawned since the world was created.
    pub fn shots_fired(&self) -> u64 {
        self.shots_fired
    }

    pub fn update(&mut self, intent: &Intent) {
        self.player.step(intent);

        if intent.fire {
            if !self.has_live_shot {
                self.spawn_shot();
                self.has_live_shot = true;
            }
        } else {
            self.has_live_shot = false;
        }

        for shot in &mut self.shots {
            shot.advance();
        }
        self.reap_outsiders();
    }

    fn spawn_shot(&mut self) {
        let muzzle = self.player.bounds().mid_right();
        let bounds = Rect::from_center(muzzle, self.shot_size);
        self.shots.push(Projectile::new(bounds, self.shot_speed));
        self.shots_fired += 1;
        log::debug!("shot {} fired at {:?}", self.shots_fired, bounds.pos());
    }

    fn reap_outsiders(&mut self) {
        let area = self.area;
        let before = self.shots.len();
        self.shots.retain(|shot| shot.bounds().intersects(&area));
        let reaped = before - self.shots.len();
        if reaped > 0 {
            log::debug!("reaped {reaped} shot(s), {} live", self.shots.len());
        }
    }

    #[cfg(test)]
    pub(crate) fn push_shot(&mut self, shot: Projectile) {
        self.shots.push(shot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const AREA: Rect = Rect::new(0, 0, 800, 600);

    fn world() -> SimulationState {
        let tuning = Tuning::builtin().unwrap();
        SimulationState::new(AREA, UVec2::new(40, 20), UVec2::new(10, 4), &tuning)
    }

    fn fire() -> Intent {
        Intent {
            fire: true,
            ..Intent::default()
        }
    }

    #[test]
    fn player_starts_centered() {
        let sim = world();
        assert_eq!(sim.player().bounds(), Rect::new(380, 290, 40, 20));
        assert!(sim.shots().is_empty());
        assert!(!sim.has_live_shot());
    }

    #[test]
    fn fire_spawns_one_shot_on_trailing_edge() {
        let mut sim = world();
        sim.update(&fire());

        assert_eq!(sim.shots().len(), 1);
        assert!(sim.has_live_shot());
        // centered on (420, 300), then advanced once
        assert_eq!(sim.shots()[0].bounds(), Rect::new(415 + 5, 298, 10, 4));
    }

    #[test]
    fn holding_fire_spawns_nothing_more() {
        let mut sim = world();
        for _ in 0..10 {
            sim.update(&fire());
        }
        assert_eq!(sim.shots_fired(), 1);
        assert_eq!(sim.shots().len(), 1);
    }

    #[test]
    fn release_and_repress_fires_again_while_first_is_alive() {
        let mut sim = world();
        sim.update(&fire());
        sim.update(&fire());
        assert_eq!(sim.shots_fired(), 1);

        sim.update(&Intent::default());
        assert!(!sim.has_live_shot());
        assert_eq!(sim.shots().len(), 1, "first shot is still on screen");

        sim.update(&fire());
        assert_eq!(sim.shots_fired(), 2);
        assert_eq!(sim.shots().len(), 2);
        assert!(sim.has_live_shot());
    }

    #[test]
    fn gate_stays_closed_after_shot_is_reaped() {
        let mut sim = world();
        sim.update(&fire());
        // long enough for the shot to leave the area
        for _ in 0..200 {
            sim.update(&fire());
        }
        assert!(sim.shots().is_empty());
        assert!(sim.has_live_shot());
        assert_eq!(sim.shots_fired(), 1);
    }

    #[test]
    fn shots_keep_firing_order() {
        let mut sim = world();
        for _ in 0..3 {
            sim.update(&fire());
            sim.update(&Intent::default());
        }
        let xs: Vec<i32> = sim.shots().iter().map(|s| s.bounds().left()).collect();
        assert_eq!(xs.len(), 3);
        assert!(xs.windows(2).all(|w| w[0] > w[1]), "{xs:?}");
    }

    #[test]
    fn shot_reaped_once_it_no_longer_overlaps() {
        let mut sim = world();
        sim.push_shot(Projectile::new(Rect::new(790, 100, 10, 4), 5));

        sim.update(&Intent::default());
        assert_eq!(sim.shots().len(), 1);
        assert_eq!(sim.shots()[0].bounds().left(), 795);

        sim.update(&Intent::default());
        assert!(sim.shots().is_empty(), "left edge at 800 touches but does not overlap");
    }

    #[test]
    fn reaping_keeps_survivor_order() {
        let mut sim = world();
        sim.push_shot(Projectile::new(Rect::new(100, 10, 10, 4), 5));
        sim.push_shot(Projectile::new(Rect::new(795, 20, 10, 4), 5));
        sim.push_shot(Projectile::new(Rect::new(200, 30, 10, 4), 5));

        sim.update(&Intent::default());
        let ys: Vec<i32> = sim.shots().iter().map(|s| s.bounds().top()).collect();
        assert_eq!(ys, vec![10, 30]);
    }

    #[test]
    fn moving_right_for_fifty_ticks() {
        let mut sim = world();
        let start = sim.player().bounds().left();
        let right = Intent {
            right: true,
            ..Intent::default()
        };
        for _ in 0..50 {
            sim.update(&right);
        }
        assert_eq!(sim.player().bounds().left(), start + 100);
    }

    #[test]
    fn moving_right_stops_at_the_wall() {
        let mut sim = world();
        let right = Intent {
            right: true,
            ..Intent::default()
        };
        for _ in 0..1000 {
            sim.update(&right);
        }
        assert_eq!(sim.player().bounds().right(), 800);
    }

    #[test]
    fn press_hold_release_press_fires_twice() {
        let mut sim = world();
        sim.update(&fire());
        sim.update(&fire());
        sim.update(&Intent::default());
        sim.update(&fire());
        assert_eq!(sim.shots_fired(), 2);
    }

    #[test]
    fn shot_follows_player_position() {
        let mut sim = world();
        let down_fire = Intent {
            down: true,
            fire: true,
            ..Intent::default()
        };
        sim.update(&down_fire);
        // player moved to y=292 first, so the muzzle is at y=302
        assert_eq!(sim.shots()[0].bounds().center().y, 302);
    }

    proptest! {
        #[test]
        fn live_shots_always_overlap_the_area(
            fires in proptest::collection::vec(any::<bool>(), 1..300),
        ) {
            let mut sim = world();
            for f in fires {
                sim.update(&Intent { fire: f, right: true, ..Intent::default() });
                for shot in sim.shots() {
                    prop_assert!(shot.bounds().intersects(&AREA));
                }
            }
        }
    }
}
