//! Pencil obstacles and their three behavioural modes
//!
//! An obstacle is a [`Scroll`] plus a mode. The mode decides the collision
//! geometry, which is rebuilt from position and height every tick; only the
//! active mode's shapes exist, so nothing stale can be hit.

use serde::{Deserialize, Serialize};

use super::collision::{Circle, Rect};
use super::rng::RandomSource;
use super::scroll::Scroll;
use crate::consts::OBSTACLE_WIDTH;

/// Vertical distance between the two spinning discs
pub const SPIN_GAP: f32 = 150.0;
/// Distance between consecutive horizontal bars
pub const BAR_SPACING: f32 = 65.0;

/// Obstacle behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ObstacleMode {
    /// Upper and lower pencil bodies with a gap between them
    #[default]
    Vertical,
    /// Three stacked horizontal bars
    Horizontal,
    /// Two spinning pencils, modelled as discs
    Spinning,
}

impl ObstacleMode {
    /// Closed range the height is drawn from on reset
    pub fn height_range(self) -> (u32, u32) {
        match self {
            ObstacleMode::Vertical => (15, 104),
            ObstacleMode::Horizontal => (35, 104),
            ObstacleMode::Spinning => (85, 104),
        }
    }

    /// Map a 1..=100 roll to a new mode; the gaps between bands keep the current one
    pub fn from_roll(roll: u32) -> Option<Self> {
        match roll {
            1..=20 => Some(ObstacleMode::Vertical),
            30..=50 => Some(ObstacleMode::Horizontal),
            60..=80 => Some(ObstacleMode::Spinning),
            _ => None,
        }
    }
}

/// Collision shapes for the active mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Vertical { top: Rect, bottom: Rect },
    Horizontal { top: Rect, middle: Rect, bottom: Rect },
    Spinning { top: Circle, bottom: Circle },
}

impl Geometry {
    /// Build the shapes for `mode` from the obstacle's kinematic state
    pub fn compute(mode: ObstacleMode, scroll: &Scroll) -> Self {
        let x = scroll.pos.x;
        let y = scroll.pos.y;
        let h = scroll.height as f32;
        let w = scroll.width;

        match mode {
            ObstacleMode::Vertical => {
                let shift = scroll.shift_amount;
                let body_width = (w / 2) as f32;
                Geometry::Vertical {
                    top: Rect::new(x + 6.0, y - shift * 2.0, body_width, h + shift * 2.0 + 10.0),
                    bottom: Rect::new(x + 6.0, y + h + 47.0, body_width, h + y + 129.0),
                }
            }
            ObstacleMode::Horizontal => {
                let bar_x = x - h / 2.0 + 15.0;
                let bar_width = h - 8.0;
                let bar_height = w as f32 / 2.0;
                let middle_y = h + h / 2.0 + w as f32 / 3.0 + 5.0 + y;
                Geometry::Horizontal {
                    top: Rect::new(bar_x, middle_y - BAR_SPACING, bar_width, bar_height),
                    middle: Rect::new(bar_x, middle_y, bar_width, bar_height),
                    bottom: Rect::new(bar_x, middle_y + BAR_SPACING, bar_width, bar_height),
                }
            }
            ObstacleMode::Spinning => {
                // Discs ignore drift: they spin in place
                let cx = x + ((w * 3) / 2) as f32;
                let radius = h / 2.0;
                let bottom = Circle::new(cx, h + radius, radius);
                let top = Circle::new(cx, bottom.center.y - radius - SPIN_GAP + h / 2.0, radius);
                Geometry::Spinning { top, bottom }
            }
        }
    }

    pub fn overlaps(&self, circle: &Circle) -> bool {
        match self {
            Geometry::Vertical { top, bottom } => {
                circle.overlaps_rect(top) || circle.overlaps_rect(bottom)
            }
            Geometry::Horizontal {
                top,
                middle,
                bottom,
            } => {
                circle.overlaps_rect(top)
                    || circle.overlaps_rect(middle)
                    || circle.overlaps_rect(bottom)
            }
            Geometry::Spinning { top, bottom } => {
                circle.overlaps_circle(top) || circle.overlaps_circle(bottom)
            }
        }
    }
}

/// A scrolling pencil hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub scroll: Scroll,
    mode: ObstacleMode,
    /// Mode to switch to on the next reset
    next_mode: Option<ObstacleMode>,
    geometry: Geometry,
    /// Whether passing this obstacle has already awarded its point
    pub scored: bool,
}

impl Obstacle {
    pub fn new(x: f32, height: i32, speed: f32) -> Self {
        let scroll = Scroll::new(x, 0.0, OBSTACLE_WIDTH, height, speed);
        let geometry = Geometry::compute(ObstacleMode::Vertical, &scroll);
        Self {
            scroll,
            mode: ObstacleMode::Vertical,
            next_mode: None,
            geometry,
            scored: false,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.scroll.tick(dt);
        self.refresh_geometry();
        if self.mode == ObstacleMode::Spinning {
            self.scroll.rotate(10.0);
        }
        if self.right_extent() < 0.0 {
            self.scroll.finished = true;
        }
    }

    fn refresh_geometry(&mut self) {
        self.geometry = Geometry::compute(self.mode, &self.scroll);
    }

    pub fn mode(&self) -> ObstacleMode {
        self.mode
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Switch behaviour; takes effect on the following [`Obstacle::reset`]
    pub fn set_mode(&mut self, mode: ObstacleMode) {
        self.next_mode = Some(mode);
    }

    /// Recycle the slot at `new_x` with a fresh height for the current mode
    pub fn reset(&mut self, new_x: f32, rng: &mut dyn RandomSource) {
        self.scroll.reset(new_x);
        self.scored = false;
        if let Some(mode) = self.next_mode.take() {
            self.mode = mode;
        }
        let (low, high) = self.mode.height_range();
        self.scroll.height = rng.uniform(low, high) as i32;
        self.scroll.rotation = 0.0;
        self.refresh_geometry();
    }

    /// Back to a vertical obstacle at `x` moving at `speed`
    pub fn restart(&mut self, x: f32, speed: f32, rng: &mut dyn RandomSource) {
        self.scroll.restart(speed);
        self.mode = ObstacleMode::Vertical;
        self.next_mode = None;
        self.reset(x, rng);
    }

    /// Rightmost x of whatever the active mode occupies
    pub fn right_extent(&self) -> f32 {
        match &self.geometry {
            Geometry::Vertical { .. } => self.scroll.right_x(),
            Geometry::Horizontal { middle, .. } => middle.right(),
            Geometry::Spinning { bottom, .. } => bottom.right(),
        }
    }

    /// x the actor must pass to score this obstacle
    pub fn scoring_line(&self) -> f32 {
        self.scroll.left_x() + (self.scroll.width / 2) as f32
    }

    pub fn collides_with(&self, circle: &Circle) -> bool {
        self.geometry.overlaps(circle)
    }

    pub fn is_finished(&self) -> bool {
        self.scroll.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BASE_SCROLL_SPEED;
    use crate::sim::rng::SequenceRng;

    #[test]
    fn test_mode_roll_bands() {
        assert_eq!(ObstacleMode::from_roll(1), Some(ObstacleMode::Vertical));
        assert_eq!(ObstacleMode::from_roll(20), Some(ObstacleMode::Vertical));
        assert_eq!(ObstacleMode::from_roll(21), None);
        assert_eq!(ObstacleMode::from_roll(29), None);
        assert_eq!(ObstacleMode::from_roll(30), Some(ObstacleMode::Horizontal));
        assert_eq!(ObstacleMode::from_roll(50), Some(ObstacleMode::Horizontal));
        assert_eq!(ObstacleMode::from_roll(51), None);
        assert_eq!(ObstacleMode::from_roll(60), Some(ObstacleMode::Spinning));
        assert_eq!(ObstacleMode::from_roll(80), Some(ObstacleMode::Spinning));
        assert_eq!(ObstacleMode::from_roll(81), None);
        assert_eq!(ObstacleMode::from_roll(100), None);
    }

    #[test]
    fn test_vertical_geometry() {
        let obstacle = Obstacle::new(100.0, 60, BASE_SCROLL_SPEED);
        let Geometry::Vertical { top, bottom } = *obstacle.geometry() else {
            panic!("expected vertical geometry");
        };
        assert_eq!(top, Rect::new(106.0, 0.0, 11.0, 70.0));
        assert_eq!(bottom, Rect::new(106.0, 107.0, 11.0, 189.0));
        assert_eq!(obstacle.right_extent(), 122.0);
    }

    #[test]
    fn test_mode_change_waits_for_reset() {
        let mut obstacle = Obstacle::new(100.0, 60, BASE_SCROLL_SPEED);
        let mut rng = SequenceRng::new(vec![90]);

        obstacle.set_mode(ObstacleMode::Spinning);
        obstacle.tick(0.0);
        assert_eq!(obstacle.mode(), ObstacleMode::Vertical);
        obstacle.reset(200.0, &mut rng);
        assert_eq!(obstacle.mode(), ObstacleMode::Spinning);
        assert_eq!(obstacle.scroll.height, 90);

        let Geometry::Spinning { top, bottom } = *obstacle.geometry() else {
            panic!("expected spinning geometry");
        };
        assert_eq!(bottom, Circle::new(233.0, 135.0, 45.0));
        assert_eq!(top.center.y, 135.0 - SPIN_GAP);
        assert_eq!(obstacle.right_extent(), 278.0);
    }

    #[test]
    fn test_reset_heights_follow_mode() {
        let mut obstacle = Obstacle::new(100.0, 60, BASE_SCROLL_SPEED);
        // Out-of-range script values get clamped into each mode's range
        let mut rng = SequenceRng::new(vec![0, 500]);

        obstacle.set_mode(ObstacleMode::Horizontal);
        obstacle.reset(0.0, &mut rng);
        assert_eq!(obstacle.scroll.height, 35);

        obstacle.set_mode(ObstacleMode::Spinning);
        obstacle.reset(0.0, &mut rng);
        assert_eq!(obstacle.scroll.height, 104);
    }

    #[test]
    fn test_horizontal_geometry_bars() {
        let mut obstacle = Obstacle::new(100.0, 60, BASE_SCROLL_SPEED);
        let mut rng = SequenceRng::new(vec![40]);
        obstacle.set_mode(ObstacleMode::Horizontal);
        obstacle.reset(100.0, &mut rng);

        let Geometry::Horizontal { top, middle, bottom } = *obstacle.geometry() else {
            panic!("expected horizontal geometry");
        };
        assert_eq!(middle.x, 100.0 - 20.0 + 15.0);
        assert_eq!(middle.width, 32.0);
        assert_eq!(middle.height, 11.0);
        assert_eq!(top.y, middle.y - BAR_SPACING);
        assert_eq!(bottom.y, middle.y + BAR_SPACING);
        assert_eq!(obstacle.right_extent(), middle.right());
    }

    #[test]
    fn test_finishes_when_offscreen() {
        let mut obstacle = Obstacle::new(-10.0, 60, BASE_SCROLL_SPEED);
        obstacle.tick(0.2);
        assert!(!obstacle.is_finished());
        obstacle.tick(0.2);
        assert!(obstacle.is_finished());
    }

    #[test]
    fn test_reset_clears_scored() {
        let mut obstacle = Obstacle::new(10.0, 60, BASE_SCROLL_SPEED);
        obstacle.scored = true;
        obstacle.scroll.finished = true;
        obstacle.reset(300.0, &mut SequenceRng::new(vec![50]));
        assert!(!obstacle.scored);
        assert!(!obstacle.is_finished());
        assert_eq!(obstacle.scroll.left_x(), 300.0);
    }

    #[test]
    fn test_collides_with_gap_edges() {
        let obstacle = Obstacle::new(100.0, 60, BASE_SCROLL_SPEED);
        // In the gap between the bodies (y 70..107)
        assert!(!obstacle.collides_with(&Circle::new(110.0, 88.0, 5.0)));
        // Touching the upper body
        assert!(obstacle.collides_with(&Circle::new(110.0, 72.0, 5.0)));
        // Touching the lower body
        assert!(obstacle.collides_with(&Circle::new(110.0, 104.0, 5.0)));
    }
}
