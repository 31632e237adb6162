use serde::Serialize;

use crate::core::Vec2;
use crate::domain::body::Body;
use crate::domain::config::EngineConfig;
use crate::systems::aim::AimQuery;
use crate::systems::world::{BodyHandle, World};

/// The aiming and firing apparatus. Not a body: it owns nothing in the
/// world and only spawns projectiles into it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Launcher {
    pub position: Vec2,
    pub orbit_radius: f64,
    /// Radians, 0 = +x, π/2 = straight down
    pub angle: f64,
    pub launch_speed: f64,
}

impl Launcher {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            position: config.launcher_position,
            orbit_radius: config.orbit_radius,
            angle: config.aim.fallback_angle,
            launch_speed: config.launch_speed,
        }
    }

    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    /// Spawn point on the orbit circle.
    pub fn muzzle(&self) -> Vec2 {
        self.position + self.direction() * self.orbit_radius
    }

    pub fn launch_velocity(&self) -> Vec2 {
        self.direction() * self.launch_speed
    }

    pub fn aim_query(&self, target: Vec2, gravity: f64) -> AimQuery {
        AimQuery {
            target,
            launcher: self.position,
            orbit_radius: self.orbit_radius,
            launch_speed: self.launch_speed,
            gravity,
        }
    }

    pub fn fire(&self, world: &mut World, radius: f64) -> BodyHandle {
        let muzzle = self.muzzle();
        tracing::debug!(angle = self.angle, x = muzzle.x, y = muzzle.y, "projectile fired");
        world.insert(Body::projectile(muzzle, radius, self.launch_velocity()))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::domain::body::BodyKind;

    #[test]
    fn fires_from_orbit_with_launch_speed() {
        let config = EngineConfig::default();
        let mut launcher = Launcher::from_config(&config);
        launcher.angle = FRAC_PI_2;

        let mut world = World::default();
        let handle = launcher.fire(&mut world, config.projectile_radius);
        let body = world.get(handle).unwrap();

        assert_eq!(body.kind, BodyKind::Projectile);
        assert!((body.position.x - 400.0).abs() < 1e-9);
        assert!((body.position.y - 160.0).abs() < 1e-9);
        assert!(body.velocity.x.abs() < 1e-9);
        assert!((body.velocity.y - 200.0).abs() < 1e-9);
        assert_eq!(body.radius(), 6.5);
    }

    #[test]
    fn zero_angle_fires_to_the_right() {
        let launcher = Launcher {
            position: Vec2::new(0.0, 0.0),
            orbit_radius: 10.0,
            angle: 0.0,
            launch_speed: 5.0,
        };
        assert_eq!(launcher.muzzle(), Vec2::new(10.0, 0.0));
        assert_eq!(launcher.launch_velocity(), Vec2::new(5.0, 0.0));
    }
}
