// Win prediction: feature projection plus the serialized regression model.

pub mod features;
pub mod model;

pub use features::{project, FEATURE_COUNT, FEATURE_ORDER};
pub use model::{predict_remaining_wins, WinsModel, REMAINING_GAMES};
