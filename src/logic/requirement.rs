//! Requirement expressions and their evaluation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::inventory::Inventory;
use crate::settings::Settings;

/// What must hold for a location to be reachable.
///
/// The registry treats requirements as opaque; only evaluators look inside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Requirement {
    /// Always reachable.
    Always,

    /// Never reachable (location disabled by logic).
    Never,

    /// At least one copy of the item.
    Item(String),

    /// At least `count` copies of the item.
    Count { item: String, count: u32 },

    /// A boolean setting is enabled.
    Setting(String),

    /// The named dungeon has its boss shortcut active.
    Shortcut(String),

    /// The named dungeon is resolved to master quest.
    MasterQuest(String),

    /// All requirements must hold.
    All(Vec<Requirement>),

    /// At least one requirement must hold.
    Any(Vec<Requirement>),

    /// The requirement must not hold.
    Not(Box<Requirement>),

    /// Game-specific check handled by the evaluator's custom hook.
    Custom(String),
}

impl Requirement {
    pub fn item(item: impl Into<String>) -> Self {
        Self::Item(item.into())
    }

    pub fn count(item: impl Into<String>, count: u32) -> Self {
        Self::Count {
            item: item.into(),
            count,
        }
    }

    pub fn setting(flag: impl Into<String>) -> Self {
        Self::Setting(flag.into())
    }

    pub fn all(requirements: impl IntoIterator<Item = Requirement>) -> Self {
        Self::All(requirements.into_iter().collect())
    }

    pub fn any(requirements: impl IntoIterator<Item = Requirement>) -> Self {
        Self::Any(requirements.into_iter().collect())
    }

    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Add another requirement with AND.
    pub fn and(self, other: Requirement) -> Self {
        match self {
            Self::All(mut requirements) => {
                requirements.push(other);
                Self::All(requirements)
            }
            _ => Self::All(vec![self, other]),
        }
    }

    /// Add another requirement with OR.
    pub fn or(self, other: Requirement) -> Self {
        match self {
            Self::Any(mut requirements) => {
                requirements.push(other);
                Self::Any(requirements)
            }
            _ => Self::Any(vec![self, other]),
        }
    }
}

/// Everything an evaluator may consult.
#[derive(Clone, Copy, Debug)]
pub struct EvalContext<'a> {
    pub inventory: &'a Inventory,
    pub settings: &'a Settings,
}

impl<'a> EvalContext<'a> {
    pub fn new(inventory: &'a Inventory, settings: &'a Settings) -> Self {
        Self { inventory, settings }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("no evaluator registered for custom requirement {0:?}")]
    UnknownCustom(String),

    #[error("requirement evaluation failed: {0}")]
    Failed(String),
}

/// Answers "is this requirement satisfied right now?".
///
/// Implementations must be pure with respect to the tracker: the same
/// requirement and context always give the same answer.
pub trait RequirementEvaluator {
    fn is_satisfied(&self, requirement: &Requirement, ctx: &EvalContext<'_>) -> Result<bool, EvalError>;
}

impl<F> RequirementEvaluator for F
where
    F: Fn(&Requirement, &EvalContext<'_>) -> Result<bool, EvalError>,
{
    fn is_satisfied(&self, requirement: &Requirement, ctx: &EvalContext<'_>) -> Result<bool, EvalError> {
        self(requirement, ctx)
    }
}

/// Hook for `Requirement::Custom` keys.
pub type CustomEval = Box<dyn Fn(&str, &EvalContext<'_>) -> Result<bool, EvalError>>;

/// Evaluator for the built-in requirement language.
#[derive(Default)]
pub struct RuleEvaluator {
    custom: Option<CustomEval>,
}

impl RuleEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route `Custom` requirements to `eval`.
    #[must_use]
    pub fn with_custom(
        mut self,
        eval: impl Fn(&str, &EvalContext<'_>) -> Result<bool, EvalError> + 'static,
    ) -> Self {
        self.custom = Some(Box::new(eval));
        self
    }
}

impl fmt::Debug for RuleEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEvaluator")
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

impl RequirementEvaluator for RuleEvaluator {
    fn is_satisfied(&self, requirement: &Requirement, ctx: &EvalContext<'_>) -> Result<bool, EvalError> {
        Ok(match requirement {
            Requirement::Always => true,

            Requirement::Never => false,

            Requirement::Item(item) => ctx.inventory.has(item),

            Requirement::Count { item, count } => ctx.inventory.count(item) >= *count,

            Requirement::Setting(flag) => ctx.settings.flag(flag),

            Requirement::Shortcut(dungeon) => ctx.settings.has_shortcut(dungeon),

            Requirement::MasterQuest(dungeon) => ctx.settings.is_mq(dungeon),

            Requirement::All(requirements) => {
                for inner in requirements {
                    if !self.is_satisfied(inner, ctx)? {
                        return Ok(false);
                    }
                }
                true
            }

            Requirement::Any(requirements) => {
                for inner in requirements {
                    if self.is_satisfied(inner, ctx)? {
                        return Ok(true);
                    }
                }
                false
            }

            Requirement::Not(inner) => !self.is_satisfied(inner, ctx)?,

            Requirement::Custom(key) => match &self.custom {
                Some(eval) => eval(key, ctx)?,
                None => return Err(EvalError::UnknownCustom(key.clone())),
            },
        })
    }
}
