use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use std::time::Duration;

use suit_rig::{
    plugins::{SuitRigPlugin, SuitSet},
    resources::{GamepadSnapshot, RigSettings, SuitPads},
};

const FRAME_RATE: f64 = 72.0; // Hz, typical headset refresh
const THRUST_FRAMES: u32 = 180;
const TURN_FRAMES: u32 = 120;
const BRAKE_FRAMES: u32 = 300;

fn main() -> AppExit {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / FRAME_RATE,
        ))),
        LogPlugin::default(),
    ));

    // After LogPlugin so settings fallbacks are reported
    let settings = RigSettings::load_or_default();

    app.add_plugins(SuitRigPlugin::new(settings))
        .add_systems(Update, scripted_pads_system.before(SuitSet::Input));

    app.run()
}

/// Stands in for the device layer: push forward, turn left, then hold the brake.
fn scripted_pads_system(
    mut frame: Local<u32>,
    mut pads: ResMut<SuitPads>,
    mut exit: EventWriter<AppExit>,
) {
    *frame += 1;

    let mut right = GamepadSnapshot::with_axes(vec![0.0; 4]);
    if *frame <= THRUST_FRAMES {
        right.axes[3] = -1.0;
    } else if *frame <= THRUST_FRAMES + TURN_FRAMES {
        right.axes[2] = -0.6;
    } else if *frame <= THRUST_FRAMES + TURN_FRAMES + BRAKE_FRAMES {
        right.press(4);
    } else {
        info!("Script finished after {} frames", *frame - 1);
        exit.send(AppExit::Success);
    }

    pads.right = Some(right);
}
