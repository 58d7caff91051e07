//! Tuning values of an attraction arc.

use crate::trajectory::error::TrajectoryError;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Boundary configuration of a parabolic attraction.
///
/// Accelerations are per axis in world units per second squared. The apex
/// height is measured from the launch point along the axis opposing
/// `y_acceleration`, so with the usual negative gravity it is a positive
/// height above the origin.
///
/// Missing fields take their default when deserialized.
///
/// # Example
///
/// ```rust
/// use vaultline::trajectory::AttractionConfig;
///
/// let config = AttractionConfig::from_json(r#"{ "jump_height": 4.0, "y_acceleration": -20.0 }"#).unwrap();
/// assert_eq!(config.jump_height, 4.0);
/// assert_eq!(config.x_acceleration, AttractionConfig::default().x_acceleration);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttractionConfig {
    pub jump_height: f32,
    pub y_acceleration: f32,
    pub x_acceleration: f32,
    pub z_acceleration: f32,
}

impl Default for AttractionConfig {
    fn default() -> Self {
        Self {
            jump_height: 25.0,
            y_acceleration: -18.0,
            x_acceleration: 5.0,
            z_acceleration: 0.0,
        }
    }
}

impl AttractionConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, TrajectoryError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the parts of the configuration that do not depend on the
    /// target.
    pub fn validate(&self) -> Result<(), TrajectoryError> {
        let fields = [
            ("jump_height", self.jump_height),
            ("y_acceleration", self.y_acceleration),
            ("x_acceleration", self.x_acceleration),
            ("z_acceleration", self.z_acceleration),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(TrajectoryError::NonFinite { field });
        }

        if self.y_acceleration == 0.0 {
            return Err(TrajectoryError::ZeroVerticalAcceleration);
        }
        if self.jump_height * self.y_acceleration > 0.0 {
            return Err(TrajectoryError::ApexAgainstGravity {
                jump_height: self.jump_height,
                y_acceleration: self.y_acceleration,
            });
        }
        Ok(())
    }

    pub fn acceleration(&self) -> Vector3<f32> {
        Vector3::new(self.x_acceleration, self.y_acceleration, self.z_acceleration)
    }
}
