use crate::core::constants::{CAMERA_SMOOTHING, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Viewport that eases toward the player and never shows past the world edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Top-left corner in world units
    pub position: DVec2,
    pub viewport: DVec2,
    pub smoothing: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DVec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT))
    }
}

impl Camera {
    pub fn new(viewport: DVec2) -> Self {
        Self {
            position: DVec2::ZERO,
            viewport,
            smoothing: CAMERA_SMOOTHING,
        }
    }

    fn target_for(&self, focus: DVec2, world: DVec2) -> DVec2 {
        let desired = focus - self.viewport / 2.0;
        let max = (world - self.viewport).max(DVec2::ZERO);
        desired.clamp(DVec2::ZERO, max)
    }

    /// Jumps straight to `focus` without easing.
    pub fn snap_to(&mut self, focus: DVec2, world: DVec2) {
        self.position = self.target_for(focus, world);
    }

    pub fn follow(&mut self, focus: DVec2, world: DVec2) {
        let target = self.target_for(focus, world);
        self.position += (target - self.position) * self.smoothing;
    }

    pub fn world_to_screen(&self, point: DVec2) -> DVec2 {
        point - self.position
    }

    pub fn is_visible(&self, point: DVec2, margin: f64) -> bool {
        let local = self.world_to_screen(point);
        local.x >= -margin
            && local.y >= -margin
            && local.x <= self.viewport.x + margin
            && local.y <= self.viewport.y + margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_eases_toward_target() {
        let mut camera = Camera::default();
        let world = DVec2::new(3200.0, 3200.0);
        camera.follow(DVec2::new(1400.0, 1300.0), world);
        // Target is (1000, 1000); one step covers 10%
        assert!((camera.position - DVec2::new(100.0, 100.0)).length() < 1e-9);
    }

    #[test]
    fn test_clamped_to_world() {
        let mut camera = Camera::default();
        let world = DVec2::new(1000.0, 700.0);
        camera.snap_to(DVec2::new(990.0, 690.0), world);
        assert_eq!(camera.position, DVec2::new(200.0, 100.0));
        camera.snap_to(DVec2::new(0.0, 0.0), world);
        assert_eq!(camera.position, DVec2::ZERO);
    }

    #[test]
    fn test_world_smaller_than_viewport() {
        let mut camera = Camera::default();
        camera.snap_to(DVec2::new(50.0, 50.0), DVec2::new(100.0, 100.0));
        assert_eq!(camera.position, DVec2::ZERO);
    }
}
