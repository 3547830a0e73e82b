//! The trait table: named categories that drive each group's palette.

use serde::{Deserialize, Serialize};

/// Hue/saturation seeds for a normal (colored) trait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitParams {
    /// Base hue angle in degrees, [0, 360)
    pub hue: f64,

    /// Saturation seed in percent
    pub saturation: f64,
}

/// A named trait.
///
/// Rare traits carry no hue/saturation: they use the monochrome palette
/// generator, the speckled background and the watermark glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitDef {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<TraitParams>,
}

impl TraitDef {
    /// Creates a normal trait.
    pub fn normal(name: &str, hue: f64, saturation: f64) -> Self {
        Self {
            name: name.to_string(),
            params: Some(TraitParams { hue, saturation }),
        }
    }

    /// Creates a rare trait.
    pub fn rare(name: &str) -> Self {
        Self {
            name: name.to_string(),
            params: None,
        }
    }

    /// Returns true if this trait uses the rare rendering path.
    pub fn is_rare(&self) -> bool {
        self.params.is_none()
    }
}

/// The sixteen traits of the canonical catalog, in catalog order.
pub fn default_traits() -> Vec<TraitDef> {
    vec![
        TraitDef::normal("KERNEL", 0.0, 40.0),
        TraitDef::normal("DAEMON", 25.0, 45.0),
        TraitDef::normal("THREAD", 45.0, 50.0),
        TraitDef::normal("SOCKET", 75.0, 35.0),
        TraitDef::normal("SIGNAL", 130.0, 30.0),
        TraitDef::normal("PIPE", 170.0, 40.0),
        TraitDef::normal("MUTEX", 200.0, 45.0),
        TraitDef::normal("BUFFER", 225.0, 40.0),
        TraitDef::normal("STACK", 255.0, 35.0),
        TraitDef::normal("HEAP", 280.0, 38.0),
        TraitDef::normal("CACHE", 315.0, 32.0),
        TraitDef::normal("FORK", 345.0, 38.0),
        TraitDef::normal("EXEC", 15.0, 12.0),
        TraitDef::normal("SWAP", 190.0, 15.0),
        TraitDef::rare("Z-RARE-I"),
        TraitDef::rare("Z-RARE-II"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_shape() {
        let traits = default_traits();
        assert_eq!(traits.len(), 16);
        assert_eq!(traits[0].name, "KERNEL");
        assert_eq!(traits[15].name, "Z-RARE-II");
    }

    #[test]
    fn test_only_last_two_are_rare() {
        let rare: Vec<usize> = default_traits()
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_rare())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(rare, vec![14, 15]);
    }
}
