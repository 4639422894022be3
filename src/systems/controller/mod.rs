mod suit;

pub use suit::{dead_zone, map_controls, safe_axis, suit_input_system};
