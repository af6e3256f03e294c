//! Bone-transform primitives: the per-bone properties, axes, and move
//! definitions that compose a gesture.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::foundation::error::{SignwaveError, SignwaveResult};

/// Bone property a move drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoneProperty {
    /// Local rotation, radians.
    Rotation,
    /// Local position, model units.
    Position,
}

/// Axis within a bone property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

/// Direction a move travels toward its limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    /// Increase the channel value until it reaches the limit.
    #[serde(rename = "+")]
    Increase,
    /// Decrease the channel value until it reaches the limit.
    #[serde(rename = "-")]
    Decrease,
}

/// One primitive directive: drive a named bone channel toward a limit at
/// fixed per-tick speed.
///
/// The property and axis are resolved to typed fields at construction time;
/// there is no stringly-typed channel access at tick time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoneMove {
    /// Name of the skeletal node to drive.
    pub bone: String,
    /// Property to drive.
    pub property: BoneProperty,
    /// Axis within the property.
    pub axis: Axis,
    /// Limit value the channel moves toward.
    pub limit: f64,
    /// Travel direction.
    pub direction: MoveDirection,
}

impl BoneMove {
    /// `true` when `value` has reached or passed the limit in this direction.
    pub fn at_limit(&self, value: f64) -> bool {
        match self.direction {
            MoveDirection::Increase => value >= self.limit,
            MoveDirection::Decrease => value <= self.limit,
        }
    }

    /// Advance `value` one tick toward the limit, clamped to never overshoot.
    pub fn advance(&self, value: f64, speed: f64) -> f64 {
        match self.direction {
            MoveDirection::Increase => (value + speed).min(self.limit),
            MoveDirection::Decrease => (value - speed).max(self.limit),
        }
    }

    pub(crate) fn validate(&self) -> SignwaveResult<()> {
        if self.bone.is_empty() {
            return Err(SignwaveError::validation("BoneMove bone must be non-empty"));
        }
        if !self.limit.is_finite() {
            return Err(SignwaveError::validation("BoneMove limit must be finite"));
        }
        Ok(())
    }
}

/// Moves advanced concurrently within one animation step.
///
/// The batch completes when every move has reached its limit.
pub type BoneBatch = SmallVec<[BoneMove; 4]>;

/// A whole-word or single-letter gesture: bone batches performed in order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Gesture {
    /// Batches performed in order, one inter-step pause between each.
    pub batches: Vec<BoneBatch>,
}

impl Gesture {
    pub(crate) fn validate(&self) -> SignwaveResult<()> {
        for batch in &self.batches {
            for mv in batch {
                mv.validate()?;
            }
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Gesture {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bare(Vec<BoneBatch>),
            Obj { batches: Vec<BoneBatch> },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Bare(batches) | Repr::Obj { batches } => Ok(Self { batches }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gesture/model.rs"]
mod tests;
