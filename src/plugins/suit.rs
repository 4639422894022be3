use bevy::prelude::*;

use crate::components::{SuitConfig, SuitControls, SuitRig};
use crate::resources::{FrameClock, RigSettings, SuitPads};
use crate::systems::{
    suit_diagnostics_system, suit_input_system, suit_integrator_system,
    sync_rig_transform_system, DiagnosticsTimer,
};

/// Per-frame suit stages, run in this order
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum SuitSet {
    Input,
    Integration,
    Sync,
    Diagnostics,
}

#[derive(Default)]
pub struct SuitRigPlugin {
    settings: RigSettings,
}

impl SuitRigPlugin {
    pub fn new(settings: RigSettings) -> Self {
        SuitRigPlugin { settings }
    }

    fn setup_rig(mut commands: Commands, config: SuitConfig) {
        let rig = SuitRig::new(config);
        let transform = rig.pose().to_transform();
        commands.spawn((rig, SuitControls::default(), transform, Name::new("suit_rig")));
    }
}

impl Plugin for SuitRigPlugin {
    fn build(&self, app: &mut App) {
        let config = self.settings.suit;

        app.insert_resource(FrameClock::new(self.settings.frame.max_delta))
            .insert_resource(self.settings.input.clone())
            .init_resource::<SuitPads>()
            .init_resource::<DiagnosticsTimer>();

        // Variable-step: integrated once per rendered frame, not in FixedUpdate
        app.configure_sets(
            Update,
            (
                SuitSet::Input,
                SuitSet::Integration,
                SuitSet::Sync,
                SuitSet::Diagnostics,
            )
                .chain(),
        );

        app.add_systems(
            Startup,
            move |commands: Commands| Self::setup_rig(commands, config),
        )
        .add_systems(
            Update,
            (
                suit_input_system.in_set(SuitSet::Input),
                suit_integrator_system.in_set(SuitSet::Integration),
                sync_rig_transform_system.in_set(SuitSet::Sync),
                suit_diagnostics_system.in_set(SuitSet::Diagnostics),
            ),
        );
    }
}
