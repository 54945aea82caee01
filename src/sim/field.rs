//! Obstacle field: the fixed pool of four obstacles and one pickup
//!
//! Per tick the field advances every member, recycles whatever scrolled off
//! the left edge, applies pending boosts and their decay, and answers the
//! scoring/pickup/collision queries for the actor.

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::{Obstacle, ObstacleMode};
use super::pickup::{Pickup, PickupKind};
use super::rng::RandomSource;
use super::state::{GameEvent, ScoreBoard};
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: [Obstacle; OBSTACLE_COUNT],
    pickup: Pickup,
    /// Set by a Speed pickup, consumed on the next tick
    speed_boost_pending: bool,
    /// Set by a Drift pickup, consumed on the next tick
    drift_boost_pending: bool,
}

impl ObstacleField {
    /// Build the pool and place it in its starting layout
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        let mut x = FIRST_OBSTACLE_X;
        let obstacles = OBSTACLE_START_HEIGHTS.map(|height| {
            let obstacle = Obstacle::new(x, height, BASE_SCROLL_SPEED);
            x = obstacle.scroll.right_x() + OBSTACLE_GAP;
            obstacle
        });
        let pickup = Pickup::new(
            obstacles[0].scroll.right_x() + OBSTACLE_GAP / 2.0,
            BASE_SCROLL_SPEED,
        );

        let mut field = Self {
            obstacles,
            pickup,
            speed_boost_pending: false,
            drift_boost_pending: false,
        };
        field.restart(rng);
        field
    }

    /// Return every pool member to the starting layout
    pub fn restart(&mut self, rng: &mut dyn RandomSource) {
        self.speed_boost_pending = false;
        self.drift_boost_pending = false;

        let mut x = FIRST_OBSTACLE_X;
        for obstacle in &mut self.obstacles {
            obstacle.restart(x, BASE_SCROLL_SPEED, rng);
            x = obstacle.right_extent() + OBSTACLE_GAP;
        }
        let pickup_x = self.obstacles[0].right_extent() + OBSTACLE_GAP / 2.0;
        self.pickup.restart(pickup_x, BASE_SCROLL_SPEED, rng);
    }

    /// Advance one frame
    pub fn tick(
        &mut self,
        dt: f32,
        actor: &mut Actor,
        board: &ScoreBoard,
        rng: &mut dyn RandomSource,
    ) {
        for obstacle in &mut self.obstacles {
            obstacle.tick(dt);
        }
        self.pickup.tick(dt);

        self.recycle_obstacle(board.score, rng);
        self.respawn_pickup(board.score, rng);
        self.apply_boosts();

        if actor.is_enlarged() && board.score.checked_sub(board.enlarged_at) == Some(GROW_DURATION) {
            log::debug!("Actor back to normal size at score {}", board.score);
            actor.normalize();
        }
    }

    /// Recycle the first finished obstacle behind its predecessor
    fn recycle_obstacle(&mut self, score: u32, rng: &mut dyn RandomSource) {
        let Some(index) = self.obstacles.iter().position(Obstacle::is_finished) else {
            return;
        };

        if score > UNLOCK_SCORE {
            let roll = rng.uniform(1, 100);
            if let Some(mode) = ObstacleMode::from_roll(roll) {
                if mode != self.obstacles[index].mode() {
                    log::debug!("Obstacle {} switches to {:?}", index + 1, mode);
                }
                self.obstacles[index].set_mode(mode);
            }
        }

        let previous = (index + OBSTACLE_COUNT - 1) % OBSTACLE_COUNT;
        let new_x = self.obstacles[previous].right_extent() + OBSTACLE_GAP;
        self.obstacles[index].reset(new_x, rng);
    }

    /// Give a finished pickup a new kind and, if possible, a new spot
    fn respawn_pickup(&mut self, score: u32, rng: &mut dyn RandomSource) {
        if !self.pickup.is_finished() || score <= UNLOCK_SCORE {
            return;
        }

        let slots = OBSTACLE_COUNT as u32;
        let roll = rng.uniform(1, slots).clamp(1, slots);
        self.pickup.kind = PickupKind::from_roll(roll);

        // Only follow an obstacle that has not entered the screen yet
        let anchor = &self.obstacles[roll as usize - 1];
        if anchor.scroll.left_x() >= ENTRY_X {
            let new_x = anchor.scroll.right_x() + OBSTACLE_GAP / 2.0;
            self.pickup.reset(new_x, rng);
            log::debug!("Pickup {:?} spawned at x={}", self.pickup.kind, new_x);
        }
    }

    /// Consume pending boosts, then decay speed and drift toward baseline
    fn apply_boosts(&mut self) {
        if self.speed_boost_pending {
            for obstacle in &mut self.obstacles {
                obstacle.scroll.modify_speed(SPEED_BOOST);
            }
            self.pickup.scroll.modify_speed(SPEED_BOOST);
            self.speed_boost_pending = false;
        }

        if self.drift_boost_pending {
            for (obstacle, boost) in self.obstacles.iter_mut().zip(DRIFT_BOOSTS) {
                obstacle.scroll.shift(boost);
            }
            self.pickup.scroll.shift(PICKUP_DRIFT_BOOST);
            self.drift_boost_pending = false;
        }

        // All members share one speed, so the first stands in for the rest
        if self.obstacles[0].scroll.speed() < BASE_SCROLL_SPEED {
            for obstacle in &mut self.obstacles {
                obstacle.scroll.modify_speed(-BOOST_DECAY);
            }
            self.pickup.scroll.modify_speed(-BOOST_DECAY);
        }

        for obstacle in &mut self.obstacles {
            if obstacle.scroll.shift_amount > 0.0 {
                obstacle.scroll.shift(-BOOST_DECAY);
            }
        }
        if self.pickup.scroll.shift_amount > 0.0 {
            self.pickup.scroll.shift(-BOOST_DECAY);
        }
    }

    /// Score, collect and test for a fatal hit
    ///
    /// At most one obstacle awards a point per call. Returns true if the actor
    /// touches any obstacle.
    pub fn resolve(
        &mut self,
        actor: &mut Actor,
        board: &mut ScoreBoard,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        if let Some(obstacle) = self
            .obstacles
            .iter_mut()
            .find(|o| !o.scored && o.scoring_line() < actor.right_x())
        {
            obstacle.scored = true;
            board.score += 1;
            events.push(GameEvent::Score);
        }

        if !self.pickup.collected
            && board.score > UNLOCK_SCORE
            && self.pickup.is_collected_by(actor)
            && !self.pickup_blocked()
        {
            self.pickup.collected = true;
            self.collect(self.pickup.kind, actor, board);
            events.push(GameEvent::PickupCollected(self.pickup.kind));
        }

        let area = *actor.collision_area();
        self.obstacles.iter().any(|o| o.collides_with(&area))
    }

    fn collect(&mut self, kind: PickupKind, actor: &mut Actor, board: &mut ScoreBoard) {
        log::debug!("Collected {:?} at score {}", kind, board.score);
        match kind {
            PickupKind::ScoreBonus => board.score += SCORE_BONUS,
            PickupKind::Speed => self.speed_boost_pending = true,
            PickupKind::Drift => self.drift_boost_pending = true,
            PickupKind::Grow => {
                actor.enlarge();
                board.enlarged_at = board.score;
            }
        }
    }

    /// True while the pickup overlaps any obstacle (it is hidden and uncollectable)
    pub fn pickup_blocked(&self) -> bool {
        self.obstacles
            .iter()
            .any(|o| self.pickup.collides_with_obstacle(o))
    }

    /// Freeze all scrolling
    pub fn stop(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.scroll.stop();
        }
        self.pickup.scroll.stop();
    }

    pub fn obstacles(&self) -> &[Obstacle; OBSTACLE_COUNT] {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut [Obstacle; OBSTACLE_COUNT] {
        &mut self.obstacles
    }

    pub fn pickup(&self) -> &Pickup {
        &self.pickup
    }

    pub fn pickup_mut(&mut self) -> &mut Pickup {
        &mut self.pickup
    }

    pub fn speed_boost_pending(&self) -> bool {
        self.speed_boost_pending
    }

    pub fn drift_boost_pending(&self) -> bool {
        self.drift_boost_pending
    }
}
