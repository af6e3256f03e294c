//! The avatar skeleton: named bones and their rest poses.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::foundation::error::{SignwaveError, SignwaveResult};
use crate::rig::pose::BonePose;

/// Named-bone view of the loaded rig.
///
/// The avatar interpreter mutates poses here one tick at a time; the
/// rendering substrate reads them back after each frame tick. Bones carry a
/// rest pose that [`Skeleton::reset`] restores.
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    bones: BTreeMap<String, BonePose>,
    rest: BTreeMap<String, BonePose>,
}

#[derive(Deserialize)]
struct RigDef {
    bones: BTreeMap<String, BonePose>,
}

impl Skeleton {
    /// Empty skeleton modelling a rig that has not loaded yet.
    ///
    /// An empty skeleton is not [loaded](Self::is_loaded); word playback on
    /// it is refused as resource-unready rather than silently doing nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a skeleton whose live pose starts at `rest`.
    pub fn from_rest(rest: BTreeMap<String, BonePose>) -> Self {
        Self {
            bones: rest.clone(),
            rest,
        }
    }

    /// Load a skeleton from a JSON rig definition (`{"bones": {name: pose}}`).
    pub fn from_json(json: &str) -> SignwaveResult<Self> {
        let def: RigDef = serde_json::from_str(json)
            .map_err(|e| SignwaveError::validation(format!("rig definition: {e}")))?;
        for (name, pose) in &def.bones {
            let channels = [
                pose.rotation.x,
                pose.rotation.y,
                pose.rotation.z,
                pose.position.x,
                pose.position.y,
                pose.position.z,
            ];
            if channels.iter().any(|v| !v.is_finite()) {
                return Err(SignwaveError::validation(format!(
                    "bone '{name}' rest pose must be finite"
                )));
            }
        }
        Ok(Self::from_rest(def.bones))
    }

    /// `true` once the rig has bones to drive.
    pub fn is_loaded(&self) -> bool {
        !self.bones.is_empty()
    }

    /// Number of bones in the rig.
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    /// `true` when the rig has no bones.
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Live pose of the bone called `name`.
    pub fn bone(&self, name: &str) -> Option<&BonePose> {
        self.bones.get(name)
    }

    /// Iterate bone names in stable order.
    pub fn bone_names(&self) -> impl Iterator<Item = &str> {
        self.bones.keys().map(String::as_str)
    }

    pub(crate) fn bone_mut(&mut self, name: &str) -> Option<&mut BonePose> {
        self.bones.get_mut(name)
    }

    /// Restore every bone to its rest pose.
    pub fn reset(&mut self) {
        for (name, pose) in &mut self.bones {
            if let Some(rest) = self.rest.get(name) {
                *pose = *rest;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rig/skeleton.rs"]
mod tests;
