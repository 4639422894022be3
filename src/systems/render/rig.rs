use bevy::prelude::*;

use crate::components::SuitRig;

/// Copy each rig's pose into its `Transform` so the camera rig follows it.
///
/// Scale is owned by the scene and left untouched.
pub fn sync_rig_transform_system(mut query: Query<(&SuitRig, &mut Transform)>) {
    for (rig, mut transform) in query.iter_mut() {
        let pose = rig.pose().to_transform();
        transform.translation = pose.translation;
        transform.rotation = pose.rotation;
    }
}
