//! Roster model and roster.toml parsing.
//!
//! The roster is an ordered table; row order is preserved because pinning
//! is processed in roster order and issues are reported in that order.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

/// One roster row.
///
/// `desired_role` stays a raw string: an unknown identifier must reach
/// the pinner (which reports it and falls back to automatic allocation)
/// instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_level")]
    pub sb_level: i32,
    #[serde(default, deserialize_with = "lenient_level")]
    pub mag_level: i32,
    #[serde(default = "auto_role")]
    pub desired_role: String,
}

fn auto_role() -> String {
    "Auto".to_string()
}

/// Accepts integers, floats, and numeric strings; anything malformed
/// coerces to 0 (unusable) rather than failing the whole roster.
fn lenient_level<'de, D>(de: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
        Other(toml::Value),
    }

    let level = match Raw::deserialize(de)? {
        Raw::Int(v) => v.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
        Raw::Float(v) => v as i32,
        Raw::Text(s) => s.trim().parse::<i32>().unwrap_or(0),
        Raw::Other(_) => 0,
    };
    Ok(level)
}

/// An ordered roster of participants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub players: Vec<Participant>,
}

impl Roster {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let roster: Roster = toml::from_str(&content)?;
        Ok(roster)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Scaffold an empty n-row roster for the operator to fill in.
    pub fn scaffold(players: usize) -> Self {
        Roster {
            players: (1..=players)
                .map(|i| Participant {
                    name: format!("Player {i}"),
                    sb_level: 0,
                    mag_level: 0,
                    desired_role: auto_role(),
                })
                .collect(),
        }
    }
}
