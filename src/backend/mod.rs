pub mod builtins;
pub mod evaluator;
