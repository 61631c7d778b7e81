//! Semantic checks on loaded tuning values.

use super::data::*;

/// Largest frame step the integrator may be configured to take.
pub const MAX_FRAME_DELTA_LIMIT: f32 = 0.25;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.source_type, self.field, self.message)
    }
}

/// Helper macro for checking a value is finite and strictly positive
macro_rules! check_positive {
    ($errors:expr, $source_type:expr, $def:expr, $field:ident) => {
        if !($def.$field.is_finite() && $def.$field > 0.0) {
            $errors.push(ValidationError {
                source_type: $source_type,
                field: stringify!($field),
                message: format!("must be positive, got {}", $def.$field),
            });
        }
    };
}

/// Helper macro for checking a min..max range is non-empty
macro_rules! check_range {
    ($errors:expr, $source_type:expr, $def:expr, $field:ident) => {
        if !$def.$field.is_valid() {
            $errors.push(ValidationError {
                source_type: $source_type,
                field: stringify!($field),
                message: format!(
                    "range {}..{} is empty or not finite",
                    $def.$field.min, $def.$field.max
                ),
            });
        }
    };
}

pub fn validate_movement(file: &MovementFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let loco = &file.locomotion;
    check_positive!(errors, "Locomotion", loco, walk_speed);
    check_positive!(errors, "Locomotion", loco, sprint_speed);
    check_positive!(errors, "Locomotion", loco, walk_accel);
    check_positive!(errors, "Locomotion", loco, sprint_accel);
    check_positive!(errors, "Locomotion", loco, ground_friction);
    check_positive!(errors, "Locomotion", loco, air_friction);
    check_positive!(errors, "Locomotion", loco, gravity);
    check_positive!(errors, "Locomotion", loco, jump_velocity);
    check_positive!(errors, "Locomotion", loco, standing_height);
    check_positive!(errors, "Locomotion", loco, max_frame_delta);

    if loco.walk_speed > loco.sprint_speed {
        errors.push(ValidationError {
            source_type: "Locomotion",
            field: "walk_speed",
            message: format!(
                "walk speed {} exceeds sprint speed {}",
                loco.walk_speed, loco.sprint_speed
            ),
        });
    }
    if loco.max_frame_delta > MAX_FRAME_DELTA_LIMIT {
        errors.push(ValidationError {
            source_type: "Locomotion",
            field: "max_frame_delta",
            message: format!(
                "{} is above the {} limit",
                loco.max_frame_delta, MAX_FRAME_DELTA_LIMIT
            ),
        });
    }
    // Explicit friction steps overshoot zero once rate * dt exceeds 1
    if loco.ground_friction * loco.max_frame_delta > 1.0 {
        errors.push(ValidationError {
            source_type: "Locomotion",
            field: "ground_friction",
            message: "friction times max_frame_delta must not exceed 1".to_string(),
        });
    }

    let grapple = &file.grapple;
    check_positive!(errors, "Grapple", grapple, strength);
    check_positive!(errors, "Grapple", grapple, max_distance);
    check_positive!(errors, "Grapple", grapple, min_rest_length);
    check_positive!(errors, "Grapple", grapple, rest_length_ratio);
    check_positive!(errors, "Grapple", grapple, dead_zone);
    if !(grapple.baseline_pull.is_finite() && grapple.baseline_pull >= 0.0) {
        errors.push(ValidationError {
            source_type: "Grapple",
            field: "baseline_pull",
            message: format!("must not be negative, got {}", grapple.baseline_pull),
        });
    }
    if !(grapple.swing_boost.is_finite() && grapple.swing_boost >= 0.0) {
        errors.push(ValidationError {
            source_type: "Grapple",
            field: "swing_boost",
            message: format!("must not be negative, got {}", grapple.swing_boost),
        });
    }

    let look = &file.look;
    check_positive!(errors, "Look", look, sensitivity);
    if !(look.pitch_margin.is_finite()
        && look.pitch_margin >= 0.0
        && look.pitch_margin < std::f32::consts::FRAC_PI_2)
    {
        errors.push(ValidationError {
            source_type: "Look",
            field: "pitch_margin",
            message: format!("must be within [0, pi/2), got {}", look.pitch_margin),
        });
    }

    errors
}

pub fn validate_world(file: &WorldFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_range!(errors, "World", file, ring_radius);
    check_range!(errors, "World", file, platform_width);
    check_range!(errors, "World", file, platform_depth);
    check_range!(errors, "World", file, platform_height);
    check_range!(errors, "World", file, platform_lift);
    check_positive!(errors, "World", file, ground_size);

    if !(file.position_jitter.is_finite() && file.position_jitter >= 0.0) {
        errors.push(ValidationError {
            source_type: "World",
            field: "position_jitter",
            message: format!("must not be negative, got {}", file.position_jitter),
        });
    }
    if file.spawn_platform.size.iter().any(|s| !(s.is_finite() && *s > 0.0)) {
        errors.push(ValidationError {
            source_type: "World",
            field: "spawn_platform",
            message: format!("size {:?} must be positive", file.spawn_platform.size),
        });
    }

    errors
}
