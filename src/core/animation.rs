//! Facing direction and walk-cycle frame tracking for render snapshots.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Eight-way facing bucket plus the current walk-cycle frame.
///
/// Facing buckets: 0=E, 1=SE, 2=S, 3=SW, 4=W, 5=NW, 6=N, 7=NE (screen
/// coordinates, y grows downward).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub facing: u8,
    pub frame: u32,
    frame_time: f64,
    frame_count: u32,
    frame_duration: f64,
}

impl Animation {
    pub fn new(facing: u8, frame_count: u32, frame_duration: f64) -> Self {
        Self {
            facing,
            frame: 0,
            frame_time: 0.0,
            frame_count: frame_count.max(1),
            frame_duration,
        }
    }

    /// Advances the walk cycle while moving; idle snaps back to frame 0 and keeps facing.
    pub fn update(&mut self, velocity: DVec2, delta_time: f64) {
        if velocity == DVec2::ZERO {
            self.frame = 0;
            return;
        }

        self.facing = facing_from_velocity(velocity);
        self.frame_time += delta_time;
        if self.frame_time >= self.frame_duration {
            self.frame_time = 0.0;
            self.frame = (self.frame + 1) % self.frame_count;
        }
    }
}

/// Maps a velocity angle onto a 45° sector.
pub fn facing_from_velocity(velocity: DVec2) -> u8 {
    let degrees = velocity.y.atan2(velocity.x).to_degrees();

    if (-22.5..22.5).contains(&degrees) {
        0
    } else if (22.5..67.5).contains(&degrees) {
        1
    } else if (67.5..112.5).contains(&degrees) {
        2
    } else if (112.5..157.5).contains(&degrees) {
        3
    } else if !(-157.5..157.5).contains(&degrees) {
        4
    } else if (-157.5..-112.5).contains(&degrees) {
        5
    } else if (-112.5..-67.5).contains(&degrees) {
        6
    } else {
        7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_and_diagonal_buckets() {
        assert_eq!(facing_from_velocity(DVec2::new(1.0, 0.0)), 0);
        assert_eq!(facing_from_velocity(DVec2::new(1.0, 1.0)), 1);
        assert_eq!(facing_from_velocity(DVec2::new(0.0, 1.0)), 2);
        assert_eq!(facing_from_velocity(DVec2::new(-1.0, 1.0)), 3);
        assert_eq!(facing_from_velocity(DVec2::new(-1.0, 0.0)), 4);
        assert_eq!(facing_from_velocity(DVec2::new(-1.0, -1.0)), 5);
        assert_eq!(facing_from_velocity(DVec2::new(0.0, -1.0)), 6);
        assert_eq!(facing_from_velocity(DVec2::new(1.0, -1.0)), 7);
    }

    #[test]
    fn test_idle_keeps_facing_and_resets_frame() {
        let mut anim = Animation::new(2, 4, 0.1);
        anim.update(DVec2::new(-50.0, 0.0), 0.15);
        assert_eq!(anim.facing, 4);
        assert_eq!(anim.frame, 1);
        anim.update(DVec2::ZERO, 0.15);
        assert_eq!(anim.facing, 4);
        assert_eq!(anim.frame, 0);
    }

    #[test]
    fn test_frame_wraps() {
        let mut anim = Animation::new(0, 2, 0.1);
        let v = DVec2::new(10.0, 0.0);
        anim.update(v, 0.1);
        assert_eq!(anim.frame, 1);
        anim.update(v, 0.1);
        assert_eq!(anim.frame, 0);
    }
}
