//! Requirement evaluation seam.
//!
//! The tracker never decides reachability itself. Each location carries a
//! [`Requirement`] and the registry asks a [`RequirementEvaluator`] whether it
//! is satisfied under the current inventory and settings. Evaluators must be
//! side-effect free; the registry may call them any number of times.
//!
//! [`RuleEvaluator`] is the bundled evaluator for the built-in requirement
//! language. Games with their own logic engine implement the trait directly
//! or route game-specific checks through `Requirement::Custom`.

mod inventory;
mod requirement;

pub use inventory::Inventory;
pub use requirement::{
    CustomEval, EvalContext, EvalError, Requirement, RequirementEvaluator, RuleEvaluator,
};
