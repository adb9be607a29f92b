use bevy::prelude::*;

use crate::components::{PulsingRing, RingLight};
use crate::scene::RING_LIGHT_LUMENS;

/// Scale factor for a ring at `t` seconds; each ring's index shifts the
/// phase so the four rings pulse in sequence rather than in unison
fn ring_scale(t: f32, index: usize) -> f32 {
    1.0 + (t + index as f32).sin() * 0.2
}

/// Intensity factor for a ring's spot light at `t` seconds
fn ring_intensity(t: f32, index: usize) -> f32 {
    1.0 + (t + index as f32).sin() * 0.5
}

pub fn update_rings(
    time: Res<Time>,
    mut rings: Query<(&mut Transform, &PulsingRing)>,
    mut lights: Query<(&mut SpotLight, &RingLight)>,
) {
    let t = time.elapsed_secs();

    for (mut transform, ring) in rings.iter_mut() {
        // Scale the annulus plane only; thickness stays fixed
        let scale = ring_scale(t, ring.index);
        transform.scale = Vec3::new(scale, scale, 1.0);
    }

    for (mut light, ring) in lights.iter_mut() {
        light.intensity = RING_LIGHT_LUMENS * ring_intensity(t, ring.index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_matches_oscillator() {
        for index in 0..4 {
            for t in [0.0_f32, 0.5, 1.0, 2.75, 10.0] {
                let expected = (t + index as f32).sin();
                assert!((ring_scale(t, index) - (1.0 + expected * 0.2)).abs() < 1e-6);
                assert!((ring_intensity(t, index) - (1.0 + expected * 0.5)).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_pulse_output_is_bounded() {
        let mut t = 0.0_f32;
        while t < 20.0 {
            for index in 0..4 {
                let scale = ring_scale(t, index);
                assert!((0.8..=1.2).contains(&scale));
                let intensity = ring_intensity(t, index);
                assert!((0.5..=1.5).contains(&intensity));
            }
            t += 0.1;
        }
    }

    #[test]
    fn test_rings_pulse_out_of_phase() {
        // Neighboring rings are one radian apart in phase
        let t = 1.25;
        assert!((ring_scale(t, 1) - ring_scale(t + 1.0, 0)).abs() < 1e-6);
        assert!((ring_intensity(t, 3) - ring_intensity(t + 3.0, 0)).abs() < 1e-6);
    }
}
