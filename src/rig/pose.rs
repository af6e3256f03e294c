//! Per-bone pose state: the per-axis channels that make up a bone's
//! rotation and position.

use serde::{Deserialize, Serialize};

use crate::gesture::model::{Axis, BoneProperty};

/// Three independent axis channels of one bone property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisTriple {
    /// X channel.
    #[serde(default)]
    pub x: f64,
    /// Y channel.
    #[serde(default)]
    pub y: f64,
    /// Z channel.
    #[serde(default)]
    pub z: f64,
}

impl AxisTriple {
    /// Value of the channel on `axis`.
    pub fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Mutable channel on `axis`.
    pub fn channel_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

/// Live pose of a single bone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BonePose {
    /// Local rotation channels, radians.
    #[serde(default)]
    pub rotation: AxisTriple,
    /// Local position channels, model units.
    #[serde(default)]
    pub position: AxisTriple,
}

impl BonePose {
    /// Value of the `(property, axis)` channel.
    pub fn channel(self, property: BoneProperty, axis: Axis) -> f64 {
        match property {
            BoneProperty::Rotation => self.rotation.get(axis),
            BoneProperty::Position => self.position.get(axis),
        }
    }

    /// Mutable `(property, axis)` channel.
    pub fn channel_mut(&mut self, property: BoneProperty, axis: Axis) -> &mut f64 {
        match property {
            BoneProperty::Rotation => self.rotation.channel_mut(axis),
            BoneProperty::Position => self.position.channel_mut(axis),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rig/pose.rs"]
mod tests;
