//! Settings store: the ruleset the tracker resolves dungeon variants from.
//!
//! Settings are driven by a configuration UI outside this crate. The tracker
//! reads them to choose each dungeon's active variant and hands them to the
//! requirement evaluator. The only writes made from inside the crate are the
//! per-dungeon master quest and shortcut toggles.
//!
//! ## Fallback Policy
//!
//! Enumerated settings deserialize leniently: an unrecognized value is
//! logged and treated as `off`, so a bad settings file never stops the
//! derived computations. Strict parsing is available through `FromStr`.

mod modes;
mod store;

pub use modes::{InvalidSetting, MqDungeonsMode, ShortcutsChoice};
pub use store::{Settings, SettingsStore};
