//! Bonus pickups
//!
//! A single pickup slot scrolls with the obstacles. Its height doubles as the
//! vertical placement offset, re-rolled every time the slot is recycled.

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::collision::Circle;
use super::obstacle::Obstacle;
use super::rng::RandomSource;
use super::scroll::Scroll;
use crate::consts::PICKUP_SIZE;

/// Pickup effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PickupKind {
    /// Flat score bonus
    #[default]
    ScoreBonus,
    /// Everything scrolls faster
    Speed,
    /// Everything starts drifting up and down
    Drift,
    /// Actor grows for a while
    Grow,
}

impl PickupKind {
    /// Map a 1..=4 roll to a kind; the roll also picks which obstacle the pickup follows
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            1 => PickupKind::ScoreBonus,
            2 => PickupKind::Speed,
            3 => PickupKind::Grow,
            _ => PickupKind::Drift,
        }
    }
}

/// The bonus item slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub scroll: Scroll,
    pub kind: PickupKind,
    pub collected: bool,
    area: Circle,
}

impl Pickup {
    pub fn new(x: f32, speed: f32) -> Self {
        let mut pickup = Self {
            scroll: Scroll::new(x, 0.0, PICKUP_SIZE, PICKUP_SIZE, speed),
            kind: PickupKind::default(),
            collected: false,
            area: Circle::default(),
        };
        pickup.refresh_area();
        pickup
    }

    pub fn tick(&mut self, dt: f32) {
        self.scroll.tick(dt);
        self.refresh_area();
        if !self.collected {
            self.scroll.rotate(1.0);
        }
        if self.area.right() < 0.0 {
            self.scroll.finished = true;
        }
    }

    fn refresh_area(&mut self) {
        let radius = PICKUP_SIZE as f32 / 2.0;
        self.area = Circle::new(
            self.scroll.left_x() + self.scroll.width as f32 / 2.0,
            self.scroll.height as f32 + self.scroll.pos.y + radius,
            radius,
        );
    }

    pub fn collision_area(&self) -> &Circle {
        &self.area
    }

    /// Recycle at `new_x` with a fresh vertical placement
    pub fn reset(&mut self, new_x: f32, rng: &mut dyn RandomSource) {
        self.scroll.reset(new_x);
        self.collected = false;
        self.scroll.height = rng.uniform(15, 104) as i32;
        self.refresh_area();
    }

    pub fn restart(&mut self, x: f32, speed: f32, rng: &mut dyn RandomSource) {
        self.scroll.restart(speed);
        self.kind = PickupKind::default();
        self.reset(x, rng);
    }

    /// True if the pickup sits inside any of the obstacle's shapes
    pub fn collides_with_obstacle(&self, obstacle: &Obstacle) -> bool {
        obstacle.collides_with(&self.area)
    }

    pub fn is_collected_by(&self, actor: &Actor) -> bool {
        self.area.overlaps_circle(actor.collision_area())
    }

    pub fn is_finished(&self) -> bool {
        self.scroll.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BASE_SCROLL_SPEED;
    use crate::sim::obstacle::ObstacleMode;
    use crate::sim::rng::SequenceRng;

    #[test]
    fn test_kind_table() {
        assert_eq!(PickupKind::from_roll(1), PickupKind::ScoreBonus);
        assert_eq!(PickupKind::from_roll(2), PickupKind::Speed);
        assert_eq!(PickupKind::from_roll(3), PickupKind::Grow);
        assert_eq!(PickupKind::from_roll(4), PickupKind::Drift);
    }

    #[test]
    fn test_reset_places_area_from_height() {
        let mut pickup = Pickup::new(50.0, BASE_SCROLL_SPEED);
        pickup.collected = true;
        pickup.reset(80.0, &mut SequenceRng::new(vec![40]));

        assert!(!pickup.collected);
        assert_eq!(*pickup.collision_area(), Circle::new(85.0, 45.0, 5.0));
    }

    #[test]
    fn test_finishes_when_offscreen() {
        let mut pickup = Pickup::new(-8.0, BASE_SCROLL_SPEED);
        pickup.tick(0.01);
        assert!(!pickup.is_finished());
        pickup.tick(0.1);
        assert!(pickup.is_finished());
    }

    #[test]
    fn test_overlap_with_obstacle_gap() {
        let obstacle = Obstacle::new(100.0, 60, BASE_SCROLL_SPEED);
        assert_eq!(obstacle.mode(), ObstacleMode::Vertical);
        let mut pickup = Pickup::new(0.0, BASE_SCROLL_SPEED);

        // Centered in the gap (y 70..107): clear of both bodies
        pickup.reset(101.0, &mut SequenceRng::new(vec![83]));
        assert!(!pickup.collides_with_obstacle(&obstacle));

        // Inside the upper body
        pickup.reset(101.0, &mut SequenceRng::new(vec![20]));
        assert!(pickup.collides_with_obstacle(&obstacle));
    }

    #[test]
    fn test_collected_only_rotates_while_live() {
        let mut pickup = Pickup::new(100.0, BASE_SCROLL_SPEED);
        pickup.tick(0.01);
        assert_eq!(pickup.scroll.rotation, 1.0);
        pickup.collected = true;
        pickup.tick(0.01);
        assert_eq!(pickup.scroll.rotation, 1.0);
    }
}
