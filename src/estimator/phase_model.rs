//! Theoretical pairwise phase differences for a planar arrival direction.
//!
//! For a plane wave arriving from `angle`, the phase difference seen by a
//! pair of elements is the baseline vector between them projected onto the
//! arrival direction, scaled to a phase at the operating frequency:
//!
//! ```text
//! phase = 2π · f / c · (baseline · (cos angle, sin angle))
//! ```
//!
//! Results are raw phases in canonical pair order and are NOT wrapped into a
//! bounded range; values beyond one period are expected at short wavelengths.
//! Wrapping is the scorer's concern, not the model's.

use std::f64::consts::PI;

use crate::array::AntennaArray;
use crate::core::constants::SPEED_OF_LIGHT;

/// Theoretical phase-difference vector at (`angle`, `frequency`).
///
/// One entry per canonical pair of `array`, in canonical pair order. Pure
/// and deterministic; exactly periodic in `angle` with period 2π.
pub fn phase_differences(array: &AntennaArray, angle: f64, frequency: f64) -> Vec<f64> {
    let scale = 2.0 * PI * frequency / SPEED_OF_LIGHT;
    let positions = array.positions();
    array
        .pairs()
        .iter()
        .map(|&(a, b)| {
            let baseline = positions[a].sub(&positions[b]);
            scale * baseline.project_onto_direction(angle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FREQ: f64 = 250e6;

    #[test]
    fn test_vector_length_matches_pair_count() {
        let array = AntennaArray::circular(0.5, 4).unwrap();
        assert_eq!(phase_differences(&array, 0.3, FREQ).len(), array.pair_count());

        let with_ref = AntennaArray::circular_with_reference(0.5, 4).unwrap();
        assert_eq!(
            phase_differences(&with_ref, 0.3, FREQ).len(),
            with_ref.pair_count()
        );
    }

    #[test]
    fn test_periodic_in_angle() {
        let array = AntennaArray::circular(0.5, 4).unwrap();
        for k in 0..8 {
            let angle = -PI + k as f64 * (PI / 4.0);
            let base = phase_differences(&array, angle, FREQ);
            let shifted = phase_differences(&array, angle + 2.0 * PI, FREQ);
            for (a, b) in base.iter().zip(&shifted) {
                assert_relative_eq!(a, b, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let array = AntennaArray::circular_with_reference(1.0, 5).unwrap();
        assert_eq!(
            phase_differences(&array, 1.234, FREQ),
            phase_differences(&array, 1.234, FREQ)
        );
    }

    #[test]
    fn test_reference_pair_phase_is_projected_ring_position() {
        // Reference at the origin: the baseline for pair (i, ref) is just the
        // ring element position, so the phase is its projection scaled by k.
        let radius = 0.5;
        let array = AntennaArray::circular_with_reference(radius, 4).unwrap();
        let phases = phase_differences(&array, 0.0, FREQ);
        let k = 2.0 * PI * FREQ / SPEED_OF_LIGHT;

        // Element 0 sits at (radius, 0); arrival from angle 0 projects fully.
        assert_relative_eq!(phases[0], k * radius, epsilon = 1e-9);
        // Element 1 sits at (0, radius); zero projection onto the x axis.
        assert_relative_eq!(phases[1], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_opposite_arrival_negates_phases() {
        let array = AntennaArray::circular(0.5, 4).unwrap();
        let forward = phase_differences(&array, 0.4, FREQ);
        let backward = phase_differences(&array, 0.4 + PI, FREQ);
        for (f, b) in forward.iter().zip(&backward) {
            assert_relative_eq!(*f, -*b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_raw_phases_are_not_wrapped() {
        // At 1 GHz a 1 m baseline spans several periods; the model must
        // report the raw value rather than a wrapped one.
        let array = AntennaArray::circular(0.5, 4).unwrap();
        let phases = phase_differences(&array, 0.0, 1e9);
        assert!(phases.iter().any(|p| p.abs() > PI));
    }
}
