//! Closed enumerations for the dungeon-variant settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An enumerated setting held a value outside its closed set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognized value {value:?} for setting {setting}")]
pub struct InvalidSetting {
    pub setting: &'static str,
    pub value: String,
}

/// How master quest dungeons are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MqDungeonsMode {
    /// Every dungeon uses its regular layout.
    #[default]
    Off,
    /// Each dungeon may independently be master quest.
    Random,
    /// A fixed number of dungeons are master quest.
    Count,
    /// An explicit list of dungeons are master quest.
    Specific,
}

impl MqDungeonsMode {
    pub const SETTING: &'static str = "mq_dungeons_mode";

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Random => "random",
            Self::Count => "count",
            Self::Specific => "specific",
        }
    }

    /// Parse, falling back to `Off` on unrecognized input.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|err: InvalidSetting| {
            tracing::warn!(%err, "falling back to {}", Self::Off);
            Self::Off
        })
    }
}

impl FromStr for MqDungeonsMode {
    type Err = InvalidSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" | "vanilla" => Ok(Self::Off),
            "random" => Ok(Self::Random),
            "count" => Ok(Self::Count),
            "specific" => Ok(Self::Specific),
            _ => Err(InvalidSetting {
                setting: Self::SETTING,
                value: s.to_string(),
            }),
        }
    }
}

impl From<String> for MqDungeonsMode {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl From<MqDungeonsMode> for String {
    fn from(mode: MqDungeonsMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for MqDungeonsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How dungeon boss shortcuts are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShortcutsChoice {
    #[default]
    Off,
    /// Shortcuts were rolled per dungeon; the player marks what they find.
    Random,
    /// An explicit list of dungeons have shortcuts.
    Specific,
}

impl ShortcutsChoice {
    pub const SETTING: &'static str = "dungeon_shortcuts_choice";

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Random => "random",
            Self::Specific => "specific",
        }
    }

    /// Parse, falling back to `Off` on unrecognized input.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|err: InvalidSetting| {
            tracing::warn!(%err, "falling back to {}", Self::Off);
            Self::Off
        })
    }
}

impl FromStr for ShortcutsChoice {
    type Err = InvalidSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "random" => Ok(Self::Random),
            "specific" | "choice" => Ok(Self::Specific),
            _ => Err(InvalidSetting {
                setting: Self::SETTING,
                value: s.to_string(),
            }),
        }
    }
}

impl From<String> for ShortcutsChoice {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl From<ShortcutsChoice> for String {
    fn from(choice: ShortcutsChoice) -> Self {
        choice.as_str().to_string()
    }
}

impl fmt::Display for ShortcutsChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_parse() {
        assert_eq!("count".parse::<MqDungeonsMode>(), Ok(MqDungeonsMode::Count));
        assert_eq!("vanilla".parse::<MqDungeonsMode>(), Ok(MqDungeonsMode::Off));
        assert_eq!("choice".parse::<ShortcutsChoice>(), Ok(ShortcutsChoice::Specific));

        let err = "randon".parse::<MqDungeonsMode>().unwrap_err();
        assert_eq!(err.setting, "mq_dungeons_mode");
        assert_eq!(err.value, "randon");
    }

    #[test]
    fn test_lenient_parse_falls_back_to_off() {
        assert_eq!(MqDungeonsMode::parse_lenient("Random"), MqDungeonsMode::Off);
        assert_eq!(ShortcutsChoice::parse_lenient(""), ShortcutsChoice::Off);
        assert_eq!(ShortcutsChoice::parse_lenient("random"), ShortcutsChoice::Random);
    }

    #[test]
    fn test_serde_uses_plain_strings() {
        let json = serde_json::to_string(&MqDungeonsMode::Specific).unwrap();
        assert_eq!(json, "\"specific\"");

        let mode: MqDungeonsMode = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(mode, MqDungeonsMode::Off);

        let choice: ShortcutsChoice = serde_json::from_str("\"random\"").unwrap();
        assert_eq!(choice, ShortcutsChoice::Random);
    }
}
