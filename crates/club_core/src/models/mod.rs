pub mod evaluation;
pub mod player;

pub use evaluation::{AttributeEvaluation, EvaluationEntry, EvaluationLog, EvaluationPeriod};
pub use player::Player;
