//! Rays and axis-aligned room walls.

use crate::vec2::Vec2;

/// Walls closer than this are treated as the surface the ray starts on.
const MIN_HIT_DISTANCE: f64 = 1e-9;

/// A ray with a unit-length direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point.
    pub origin: Vec2,
    /// Unit direction.
    pub direction: Vec2,
}

/// A ray/wall intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    /// Distance along the ray to the wall.
    pub distance: f64,
    /// Intersection point on the wall.
    pub point: Vec2,
    /// Inward-facing wall normal at the intersection.
    pub normal: Vec2,
}

impl Ray {
    /// Creates a ray; the direction is normalized.
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// The point `t` units along the ray.
    pub fn point_at(&self, t: f64) -> Vec2 {
        self.origin + self.direction * t
    }

    /// The specular bounce of this ray off a surface.
    ///
    /// `normal` is the unit surface normal at `hit`; the reflected ray
    /// starts at the hit point.
    pub fn reflected(&self, hit: Vec2, normal: Vec2) -> Self {
        let direction = self.direction - normal * (2.0 * self.direction.dot(normal));
        Self {
            origin: hit,
            direction,
        }
    }
}

/// A rectangular room spanning `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Room {
    /// Extent along x, meters.
    pub width: f64,
    /// Extent along y, meters.
    pub height: f64,
}

impl Room {
    /// Creates a room of the given extent.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a point lies inside the room.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    /// The nearest wall a ray starting inside the room will hit.
    ///
    /// Returns `None` for a degenerate (zero) direction. Hits at distances
    /// below a small epsilon are ignored so a bounced ray does not re-hit
    /// the wall it starts on.
    pub fn first_wall_hit(&self, ray: &Ray) -> Option<WallHit> {
        let mut best: Option<WallHit> = None;

        let mut consider = |distance: f64, normal: Vec2| {
            if distance <= MIN_HIT_DISTANCE {
                return;
            }
            if best.map_or(true, |hit| distance < hit.distance) {
                best = Some(WallHit {
                    distance,
                    point: ray.point_at(distance),
                    normal,
                });
            }
        };

        if ray.direction.x > 0.0 {
            consider((self.width - ray.origin.x) / ray.direction.x, Vec2::LEFT);
        } else if ray.direction.x < 0.0 {
            consider(-ray.origin.x / ray.direction.x, Vec2::RIGHT);
        }

        if ray.direction.y > 0.0 {
            consider((self.height - ray.origin.y) / ray.direction.y, Vec2::DOWN);
        } else if ray.direction.y < 0.0 {
            consider(-ray.origin.y / ray.direction.y, Vec2::UP);
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_direction_is_normalized() {
        let ray = Ray::new(Vec2::ZERO, Vec2::new(3.0, 4.0));
        assert!((ray.direction.magnitude() - 1.0).abs() < EPS);
        assert!((ray.direction.x - 0.6).abs() < EPS);
    }

    #[test]
    fn test_point_at() {
        let ray = Ray::new(Vec2::new(1.0, 1.0), Vec2::RIGHT);
        let p = ray.point_at(2.5);
        assert!((p.x - 3.5).abs() < EPS);
        assert!((p.y - 1.0).abs() < EPS);
    }

    #[test]
    fn test_specular_reflection() {
        // 45-degree incidence on the floor bounces up at 45 degrees.
        let ray = Ray::new(Vec2::new(0.0, 1.0), Vec2::new(1.0, -1.0));
        let bounced = ray.reflected(Vec2::new(1.0, 0.0), Vec2::UP);

        assert_eq!(bounced.origin, Vec2::new(1.0, 0.0));
        assert!((bounced.direction.x - ray.direction.x).abs() < EPS);
        assert!((bounced.direction.y + ray.direction.y).abs() < EPS);
    }

    #[test]
    fn test_room_contains() {
        let room = Room::new(4.0, 3.0);
        assert!(room.contains(Vec2::new(2.0, 1.5)));
        assert!(room.contains(Vec2::ZERO));
        assert!(!room.contains(Vec2::new(5.0, 1.0)));
        assert!(!room.contains(Vec2::new(1.0, -0.1)));
    }

    #[test]
    fn test_first_wall_hit_right_wall() {
        let room = Room::new(4.0, 3.0);
        let ray = Ray::new(Vec2::new(1.0, 1.0), Vec2::RIGHT);
        let hit = room.first_wall_hit(&ray).unwrap();

        assert!((hit.distance - 3.0).abs() < EPS);
        assert!((hit.point.x - 4.0).abs() < EPS);
        assert_eq!(hit.normal, Vec2::LEFT);
    }

    #[test]
    fn test_first_wall_hit_picks_nearest() {
        let room = Room::new(4.0, 3.0);
        // Heading up-left from near the left wall: the left wall is closer.
        let ray = Ray::new(Vec2::new(0.5, 1.0), Vec2::new(-1.0, 1.0));
        let hit = room.first_wall_hit(&ray).unwrap();

        assert_eq!(hit.normal, Vec2::RIGHT);
        assert!((hit.point.x - 0.0).abs() < EPS);
    }

    #[test]
    fn test_degenerate_direction_has_no_hit() {
        let room = Room::new(4.0, 3.0);
        let ray = Ray::new(Vec2::new(1.0, 1.0), Vec2::ZERO);
        assert!(room.first_wall_hit(&ray).is_none());
    }

    #[test]
    fn test_bounce_stays_inside_the_room() {
        let room = Room::new(4.0, 3.0);
        let mut ray = Ray::new(Vec2::new(2.0, 1.5), Vec2::new(0.7, 0.3));

        for _ in 0..16 {
            let hit = room.first_wall_hit(&ray).expect("ray escaped the room");
            ray = ray.reflected(hit.point, hit.normal);
            assert!(room.contains(ray.origin));
        }
    }
}
