use serde::{Deserialize, Serialize};

/// Simulation configuration.
///
/// All rates are per millisecond: frame deltas arrive as fractional
/// milliseconds, positions are in world units (roughly pixels, ~0..1000 per
/// axis in the bundled level).
///
/// Replaces the process-global debug flag of earlier builds: telemetry is
/// opted into per world via [`SimConfig::trace`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimConfig {
    /// Downward acceleration applied while airborne (units/ms²).
    pub gravity: f32,

    /// Magnitude cap for vertical velocity (units/ms).
    pub max_fall_speed: f32,

    /// Horizontal acceleration while a move key is held (units/ms²).
    pub run_accel: f32,

    /// Magnitude cap for input-driven horizontal velocity (units/ms).
    pub max_run_speed: f32,

    /// Deceleration toward zero while grounded with no input (units/ms²).
    pub friction: f32,

    /// Vertical velocity set on jump (units/ms).
    pub jump_speed: f32,

    /// Largest single integration step (ms). Frame deltas above this are
    /// split so the swept ray cannot tunnel through a solid on a hitch.
    pub max_substep: f32,

    /// Record the player position after every tick.
    pub trace: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: 0.005,
            max_fall_speed: 5.0,
            run_accel: 0.011,
            max_run_speed: 0.8,
            friction: 0.005,
            jump_speed: 2.5,
            max_substep: 0.24,
            trace: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuning() {
        let c = SimConfig::default();
        assert_eq!(c.gravity, 0.005);
        assert_eq!(c.max_fall_speed, 5.0);
        assert_eq!(c.run_accel, 0.011);
        assert_eq!(c.max_run_speed, 0.8);
        assert_eq!(c.friction, 0.005);
        assert_eq!(c.jump_speed, 2.5);
        assert_eq!(c.max_substep, 0.24);
        assert!(!c.trace);
    }
}
