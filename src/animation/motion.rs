//! Path motions for boats, wildlife and bridge traffic
//!
//! Entities are generated facing +z (boats, dolphins, gulls) or already
//! oriented by their side (cars), so each motion only has to place the
//! entity origin and turn it along its direction of travel.

use std::f32::consts::PI;

use crate::core::types::{Mat4, Quat, Vec2, Vec3};
use crate::generation::water::SURFACE_Y;
use crate::voxel::VOXEL_SCALE;

/// World height of the resting water surface
pub const WATER_LEVEL: f32 = SURFACE_Y as f32 * VOXEL_SCALE;

/// Vertical distance a dolphin arcs above its cruising depth
const JUMP_HEIGHT: f32 = 2.8;
/// A dolphin leaves the water while its phase sine exceeds this
const JUMP_THRESHOLD: f32 = 0.55;
const DOLPHIN_TEMPO: f32 = 1.5;

/// Slot of one dolphin inside a swimming pod
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PodMember {
    /// Phase offset of the jump cycle
    pub offset: f32,
    /// Offset across the direction of travel
    pub x: f32,
    /// Offset along the direction of travel
    pub z: f32,
}

/// Leader ahead, two wingmen, one trailer
pub const POD_FORMATION: [PodMember; 4] = [
    PodMember { offset: 0.0, x: 0.0, z: 1.0 },
    PodMember { offset: 1.5, x: 1.2, z: -0.7 },
    PodMember { offset: 2.5, x: -1.2, z: -0.7 },
    PodMember { offset: 4.0, x: 0.0, z: -2.2 },
];

/// How an entity instance moves through the scene.
///
/// All lengths are world units; `speed` is in radians per second for the
/// looping paths and units per second for the linear ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Fixed placement
    Static { position: Vec3, yaw: f32 },
    /// Long loop up and down one shore with a slow lateral sway
    FerryLoop {
        center_x: f32,
        sway: f32,
        reach: f32,
        speed: f32,
        y: f32,
    },
    /// Straight passage down the channel, wrapping at the path ends
    Transit {
        x: f32,
        speed: f32,
        path_length: f32,
        y: f32,
    },
    /// Narrow ellipse with bobbing, pitch and roll on the waves
    EllipseLoop {
        /// Ellipse centre as (x, z)
        center: Vec2,
        radii: Vec2,
        speed: f32,
        phase: f32,
        y: f32,
    },
    /// One member of a pod swimming an ellipse and jumping periodically
    DolphinPod {
        center: Vec2,
        radii: Vec2,
        speed: f32,
        start_angle: f32,
        depth: f32,
        member: PodMember,
    },
    /// Circling gull; `center.y` is the cruising height
    GullOrbit {
        center: Vec3,
        radius: f32,
        speed: f32,
        phase: f32,
    },
    /// Car running along one bridge lane and wrapping at the deck ends
    LaneTraffic {
        lane_z: f32,
        deck_y: f32,
        half_span: f32,
        speed: f32,
        phase: f32,
        /// +1 towards Asia, -1 towards Europe
        direction: f32,
    },
}

/// Yaw that turns +z onto the travel direction `(dx, dz)`
#[inline]
fn heading(dx: f32, dz: f32) -> f32 {
    dx.atan2(dz)
}

/// Pitch, yaw and roll applied in x, y, z order
#[inline]
fn attitude(pitch: f32, yaw: f32, roll: f32) -> Quat {
    Quat::from_rotation_x(pitch) * Quat::from_rotation_y(yaw) * Quat::from_rotation_z(roll)
}

impl Motion {
    pub fn fixed(position: Vec3) -> Self {
        Motion::Static { position, yaw: 0.0 }
    }

    pub fn is_animated(&self) -> bool {
        !matches!(self, Motion::Static { .. })
    }

    /// Entity origin transform at time `t` seconds
    pub fn transform_at(&self, t: f32) -> Mat4 {
        match *self {
            Motion::Static { position, yaw } => {
                Mat4::from_rotation_translation(Quat::from_rotation_y(yaw), position)
            }

            Motion::FerryLoop { center_x, sway, reach, speed, y } => {
                let a = t * speed;
                let x = center_x + (2.0 * a).cos() * sway;
                let z = a.sin() * reach;
                let dx = -sway * 2.0 * speed * (2.0 * a).sin();
                let dz = reach * speed * a.cos();
                Mat4::from_rotation_translation(
                    Quat::from_rotation_y(heading(dx, dz)),
                    Vec3::new(x, y, z),
                )
            }

            Motion::Transit { x, speed, path_length, y } => {
                let along = (t * speed).rem_euclid(path_length) - path_length * 0.5;
                let pitch = (t * 0.3).sin() * 0.01;
                let roll = (t * 0.5).sin() * 0.02;
                // bow (+z) turned to face the direction of travel (-z)
                Mat4::from_rotation_translation(
                    attitude(pitch, PI, roll),
                    Vec3::new(x, y, -along),
                )
            }

            Motion::EllipseLoop { center, radii, speed, phase, y } => {
                let a = (t + phase) * speed;
                let x = center.x + a.cos() * radii.x;
                let z = center.y + a.sin() * radii.y;
                let dx = -speed * a.sin() * radii.x;
                let dz = speed * a.cos() * radii.y;
                let bob = (x * 0.5 + t * 1.5).sin() * 0.1 + (z * 0.3 + t).sin() * 0.1;
                let pitch = (t * 1.2).sin() * 0.05;
                let roll = (t * 0.8).cos() * 0.05;
                Mat4::from_rotation_translation(
                    attitude(pitch, heading(dx, dz), roll),
                    Vec3::new(x, y + bob, z),
                )
            }

            Motion::DolphinPod { center, radii, speed, start_angle, depth, member } => {
                let a = t * speed + start_angle;
                let pod = Mat4::from_rotation_translation(
                    Quat::from_rotation_y(heading(a.cos() * radii.x, -a.sin() * radii.y)),
                    Vec3::new(center.x + a.sin() * radii.x, 0.0, center.y + a.cos() * radii.y),
                );
                let (lift, pitch, roll) = dolphin_stroke(t * DOLPHIN_TEMPO + member.offset);
                let body = Mat4::from_rotation_translation(
                    Quat::from_rotation_x(pitch) * Quat::from_rotation_z(roll),
                    Vec3::new(member.x, depth + lift, member.z),
                );
                pod * body
            }

            Motion::GullOrbit { center, radius, speed, phase } => {
                let a = t * speed + phase;
                let position = Vec3::new(
                    center.x + a.sin() * radius,
                    center.y + (a * 3.0).sin() * 0.5,
                    center.z + a.cos() * radius,
                );
                Mat4::from_rotation_translation(Quat::from_rotation_y(-a), position)
            }

            Motion::LaneTraffic { lane_z, deck_y, half_span, speed, phase, direction } => {
                let span = half_span * 2.0;
                let travelled = (phase + t * speed).rem_euclid(span) - half_span;
                Mat4::from_translation(Vec3::new(travelled * direction, deck_y, lane_z))
            }
        }
    }

    /// World position of the entity origin at time `t`
    pub fn position_at(&self, t: f32) -> Vec3 {
        self.transform_at(t).w_axis.truncate()
    }
}

/// Height above cruising depth, pitch and roll of a dolphin at stroke
/// phase `phase`
fn dolphin_stroke(phase: f32) -> (f32, f32, f32) {
    let s = phase.sin();
    if s > JUMP_THRESHOLD {
        let n = (s - JUMP_THRESHOLD) / (1.0 - JUMP_THRESHOLD);
        ((n * PI).sin() * JUMP_HEIGHT, -(n * PI).cos() * 1.2, 0.0)
    } else {
        (0.0, (phase * 2.0).sin() * 0.1, (phase * 1.5).cos() * 0.15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ferry() -> Motion {
        Motion::FerryLoop { center_x: 6.0, sway: 1.5, reach: 20.0, speed: 0.08, y: WATER_LEVEL }
    }

    /// Forward (+z) axis of a transform projected on the water plane
    fn forward(m: Mat4) -> Vec2 {
        let f = m.transform_vector3(Vec3::Z);
        Vec2::new(f.x, f.z).normalize()
    }

    #[test]
    fn test_water_level() {
        assert_eq!(WATER_LEVEL, -1.0);
    }

    #[test]
    fn test_static_is_constant() {
        let m = Motion::fixed(Vec3::new(1.0, 2.0, 3.0));
        assert!(!m.is_animated());
        assert_eq!(m.transform_at(0.0), m.transform_at(100.0));
        assert_eq!(m.position_at(5.0), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_ferry_stays_in_lane() {
        let m = ferry();
        for i in 0..2000 {
            let p = m.position_at(i as f32 * 0.37);
            assert!((4.5..=7.5).contains(&p.x), "x {}", p.x);
            assert!(p.z.abs() <= 20.0);
        }
    }

    #[test]
    fn test_ferry_faces_travel_direction() {
        let m = ferry();
        let (t, dt) = (3.0, 1e-2);
        let v = m.position_at(t + dt) - m.position_at(t - dt);
        let travel = Vec2::new(v.x, v.z).normalize();
        assert!(forward(m.transform_at(t)).dot(travel) > 0.99);
    }

    #[test]
    fn test_transit_wraps() {
        let m = Motion::Transit { x: -5.0, speed: 2.0, path_length: 160.0, y: WATER_LEVEL };
        for i in 0..500 {
            let p = m.position_at(i as f32 * 0.9);
            assert!(p.z > -80.0 && p.z <= 80.0);
            assert_eq!(p.x, -5.0);
        }
        // one full path later the tanker is back where it started
        let a = m.position_at(7.0);
        let b = m.position_at(7.0 + 80.0);
        assert!((a - b).length() < 1e-3);
        assert!(forward(m.transform_at(1.0)).y < -0.99);
    }

    #[test]
    fn test_ellipse_bobs_near_base() {
        let m = Motion::EllipseLoop {
            center: Vec2::new(-11.0, 0.0),
            radii: Vec2::new(2.0, 22.0),
            speed: 0.08,
            phase: 100.0,
            y: WATER_LEVEL,
        };
        for i in 0..500 {
            let p = m.position_at(i as f32 * 0.5);
            assert!((-13.0..=-9.0).contains(&p.x));
            assert!((p.y - WATER_LEVEL).abs() <= 0.2 + 1e-5);
        }
    }

    #[test]
    fn test_dolphin_jumps_only_on_high_phase() {
        // halfway through the jump window is the top of the arc
        let apex = (JUMP_THRESHOLD + 0.5 * (1.0 - JUMP_THRESHOLD)).asin();
        let (lift, _, roll) = dolphin_stroke(apex);
        assert!((lift - JUMP_HEIGHT).abs() < 1e-3);
        assert_eq!(roll, 0.0);
        let (lift, _, _) = dolphin_stroke(0.0);
        assert_eq!(lift, 0.0);
        let (lift, _, _) = dolphin_stroke(-PI / 2.0);
        assert_eq!(lift, 0.0);
    }

    #[test]
    fn test_dolphin_depth_bounds() {
        let m = Motion::DolphinPod {
            center: Vec2::new(12.0, 0.0),
            radii: Vec2::new(2.0, 14.0),
            speed: 0.1,
            start_angle: 3.5,
            depth: WATER_LEVEL - 1.0,
            member: POD_FORMATION[1],
        };
        let mut surfaced = false;
        for i in 0..1000 {
            let y = m.position_at(i as f32 * 0.05).y;
            assert!(y >= WATER_LEVEL - 1.0 - 1e-4);
            assert!(y <= WATER_LEVEL - 1.0 + JUMP_HEIGHT + 1e-4);
            surfaced |= y > WATER_LEVEL;
        }
        assert!(surfaced);
    }

    #[test]
    fn test_gull_orbit_radius() {
        let center = Vec3::new(2.0, 7.0, -3.0);
        let m = Motion::GullOrbit { center, radius: 9.0, speed: 1.1, phase: 4.0 };
        for i in 0..200 {
            let p = m.position_at(i as f32 * 0.3);
            let flat = Vec2::new(p.x - center.x, p.z - center.z).length();
            assert!((flat - 9.0).abs() < 1e-3);
            assert!((p.y - 7.0).abs() <= 0.5 + 1e-5);
        }
    }

    #[test]
    fn test_lane_traffic_direction_and_span() {
        let east = Motion::LaneTraffic {
            lane_z: -5.0,
            deck_y: 8.125,
            half_span: 32.0,
            speed: 3.0,
            phase: 0.0,
            direction: 1.0,
        };
        assert!(east.position_at(1.0).x > east.position_at(0.5).x);
        for i in 0..300 {
            let p = east.position_at(i as f32 * 0.7);
            assert!(p.x >= -32.0 && p.x < 32.0);
            assert_eq!(p.z, -5.0);
            assert_eq!(p.y, 8.125);
        }
        let west = Motion::LaneTraffic {
            lane_z: 5.0,
            deck_y: 8.125,
            half_span: 32.0,
            speed: 3.0,
            phase: 0.0,
            direction: -1.0,
        };
        assert!(west.position_at(1.0).x < west.position_at(0.5).x);
    }

    #[test]
    fn test_pure_function_of_time() {
        let m = Motion::DolphinPod {
            center: Vec2::ZERO,
            radii: Vec2::new(3.0, 28.0),
            speed: 0.12,
            start_angle: 0.0,
            depth: -2.0,
            member: POD_FORMATION[0],
        };
        // evaluation order does not matter
        let late = m.transform_at(40.0);
        let _ = m.transform_at(3.0);
        assert_eq!(m.transform_at(40.0), late);
    }
}
