use bevy::prelude::*;
use std::time::Duration;
use suit_rig::{
    resources::{GamepadSnapshot, RigSettings, SuitPads},
    SuitRig, SuitRigPlugin,
};

/// Headless app driven by a manually advanced clock
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn new(settings: RigSettings) -> Self {
        let mut app = App::new();
        app.init_resource::<Time>()
            .add_plugins(SuitRigPlugin::new(settings));

        // Runs Startup and spawns the rig; zero delta, so nothing integrates
        app.update();

        Self { app }
    }

    pub fn run_frame(&mut self, dt: f64) {
        self.app
            .world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f64(dt));
        self.app.update();
    }

    pub fn run_frames(&mut self, frames: usize, dt: f64) {
        for _ in 0..frames {
            self.run_frame(dt);
        }
    }

    pub fn set_right_pad(&mut self, pad: Option<GamepadSnapshot>) {
        self.app.world_mut().resource_mut::<SuitPads>().right = pad;
    }

    pub fn set_left_pad(&mut self, pad: Option<GamepadSnapshot>) {
        self.app.world_mut().resource_mut::<SuitPads>().left = pad;
    }

    pub fn rig(&mut self) -> SuitRig {
        let mut query = self.app.world_mut().query::<&SuitRig>();
        query.single(self.app.world()).clone()
    }

    pub fn transform(&mut self) -> Transform {
        let mut query = self
            .app
            .world_mut()
            .query_filtered::<&Transform, With<SuitRig>>();
        *query.single(self.app.world())
    }
}
