//! Angle conversion and point-to-point aiming helpers.

use cgmath::Vector3;

/// Degrees to radians.
pub fn rads(degs: f32) -> f32 {
    (degs / 180.0) * std::f32::consts::PI
}

/// Radians to degrees.
pub fn degs(rads: f32) -> f32 {
    (rads * 180.0) / std::f32::consts::PI
}

/// Euler angles (radians, X/Y/Z) that orient an object at `a` towards `b`,
/// under the scene's y-flipped world convention.
///
/// The Z component of the delta is nudged off exact zero before the
/// `atan2` calls; a perfectly axis-aligned pair would otherwise hit the
/// `atan2(_, 0)` branch cut and snap the yaw.
pub fn rotation_between_points(a: Vector3<f32>, b: Vector3<f32>) -> Vector3<f32> {
    let x = a.x - b.x;
    let y = -(a.y - b.y);
    let mut z = a.z - b.z;

    if z == 0.0 {
        z -= 0.0001;
    }

    let pitch = y.atan2(z);
    let yaw = if z >= 0.0 {
        (x * pitch.cos()).atan2(-z)
    } else {
        -(x * pitch.cos()).atan2(z)
    };
    let roll = pitch.cos().atan2(pitch.sin() * yaw.sin());

    Vector3::new(pitch, yaw, roll)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn rads_and_degs_round_trip() {
        assert!((rads(180.0) - std::f32::consts::PI).abs() < EPS);
        assert!((degs(std::f32::consts::PI) - 180.0).abs() < EPS);
        assert!((degs(rads(65.0)) - 65.0).abs() < EPS);
    }

    #[test]
    fn aiming_along_depth_axis_has_no_pitch() {
        let a = Vector3::new(0.0, 0.0, 5.0);
        let b = Vector3::new(0.0, 0.0, 0.0);
        let r = rotation_between_points(a, b);
        assert!(r.x.abs() < 1e-3);
        assert!((r.y.abs() - std::f32::consts::PI).abs() < 1e-3);
    }

    #[test]
    fn aiming_handles_exactly_zero_depth() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 2.0, 3.0);
        let r = rotation_between_points(a, b);
        assert!(r.x.is_finite());
        assert!(r.y.is_finite());
        assert!(r.z.is_finite());
    }
}
