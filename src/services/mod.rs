pub mod evaluations;

pub use evaluations::EvaluationService;
