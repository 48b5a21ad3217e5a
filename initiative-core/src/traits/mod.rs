pub mod evaluator;

pub use evaluator::IInitiativeEvaluator;
