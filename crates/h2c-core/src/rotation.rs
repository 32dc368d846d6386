use glam::{EulerRot, Quat};

/// Compose a hand rotation from the three Euler sliders.
///
/// `euler` is `[x, y, z]` in whole degrees. Yaw is the Y angle, pitch the X
/// angle and roll the Z angle, applied as yaw * pitch * roll.
pub fn quat_from_euler_degrees(euler: [i32; 3]) -> Quat {
    let [x, y, z] = euler.map(|deg| (deg as f32).to_radians());
    Quat::from_euler(EulerRot::YXZ, y, x, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_quat(q: Quat, expected: [f32; 4]) {
        let got = q.to_array();
        for i in 0..4 {
            assert!(
                (got[i] - expected[i]).abs() < 1e-4,
                "component {i}: got {:?}, expected {:?}",
                got,
                expected
            );
        }
    }

    #[test]
    fn test_zero_is_identity() {
        assert_quat(quat_from_euler_degrees([0, 0, 0]), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_pitch_is_x_axis() {
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert_quat(quat_from_euler_degrees([90, 0, 0]), [h, 0.0, 0.0, h]);
    }

    #[test]
    fn test_yaw_is_y_axis_and_roll_is_z_axis() {
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert_quat(quat_from_euler_degrees([0, 90, 0]), [0.0, h, 0.0, h]);
        assert_quat(quat_from_euler_degrees([0, 0, 90]), [0.0, 0.0, h, h]);
    }

    #[test]
    fn test_composition_order() {
        // yaw * pitch * roll, matching the closed form
        // x = cy*sp*cr + sy*cp*sr
        let (x, y, z) = (30.0f32, 45.0f32, 60.0f32);
        let (sp, cp) = (x.to_radians() * 0.5).sin_cos();
        let (sy, cy) = (y.to_radians() * 0.5).sin_cos();
        let (sr, cr) = (z.to_radians() * 0.5).sin_cos();
        let expected = [
            cy * sp * cr + sy * cp * sr,
            sy * cp * cr - cy * sp * sr,
            cy * cp * sr - sy * sp * cr,
            cy * cp * cr + sy * sp * sr,
        ];
        assert_quat(quat_from_euler_degrees([30, 45, 60]), expected);
    }
}
