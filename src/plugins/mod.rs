mod suit;

pub use suit::{SuitRigPlugin, SuitSet};
