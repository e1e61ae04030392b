// SPDX-License-Identifier: MIT

//!
//! Display colours attached to entries and weeks
//!

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors that can arise in relation to a [`Colour`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    #[error("`{0}` is not a hex colour (e.g. `#3b82f6`)")]
    InvalidHex(String),
}

/// The `Colour` type
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl From<Colour> for [u8; 3] {
    fn from(value: Colour) -> Self {
        [value.r, value.g, value.b]
    }
}

impl From<[u8; 3]> for Colour {
    fn from(value: [u8; 3]) -> Self {
        Colour::from_rgb(value[0], value[1], value[2])
    }
}

impl Colour {
    /// Create a colour from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    /// Create a colour from a hex colour (e.g. `#ab66ef`, `ab66ef`, `#ab66efff`).
    /// If the hex value has an alpha component, it is removed.
    pub fn from_hex<S: AsRef<str>>(hex_colour: S) -> Result<Self, ColourError> {
        let original = hex_colour.as_ref();
        let invalid = || ColourError::InvalidHex(original.to_string());

        let hex_colour = original.trim().trim_start_matches('#');
        // Every digit, alpha included, must be hex
        if !hex_colour.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let hex_colour = match hex_colour.len() {
            6 => hex_colour,
            8 => &hex_colour[0..6],
            _ => return Err(invalid()),
        };

        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex_colour[range], 16).map_err(|_| invalid())
        };
        Ok(Colour::from_rgb(
            component(0..2)?,
            component(2..4)?,
            component(4..6)?,
        ))
    }

    /// Lowercase `#rrggbb`
    pub fn as_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Get a colour as RGB values
    pub fn as_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_hex())
    }
}

impl Serialize for Colour {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.as_hex())
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Colour::from_hex(string).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_hex() {
        assert_eq!(
            Colour::from_hex("#3b82f6").unwrap(),
            Colour::from_rgb(0x3b, 0x82, 0xf6)
        );
        assert_eq!(
            Colour::from_hex("3B82F6").unwrap(),
            Colour::from_rgb(0x3b, 0x82, 0xf6)
        );
        // Alpha is dropped
        assert_eq!(
            Colour::from_hex("#3b82f680").unwrap(),
            Colour::from_rgb(0x3b, 0x82, 0xf6)
        );

        // Alpha must still be hex
        assert!(Colour::from_hex("#3b82f6zz").is_err());
        assert!(Colour::from_hex("#3b82f6+1").is_err());
        assert!(Colour::from_hex("#+b82f6").is_err());

        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#3b82f").is_err());
        assert!(Colour::from_hex("#zz82f6").is_err());
        assert!(Colour::from_hex("blue").is_err());
        assert!(Colour::from_hex("#ééé").is_err());
    }

    #[test]
    fn as_rgb() {
        let colour = Colour::from_hex("#3b82f6").unwrap();
        assert_eq!(colour.as_rgb(), (0x3b, 0x82, 0xf6));
        assert_eq!(<[u8; 3]>::from(colour), [0x3b, 0x82, 0xf6]);
        assert_eq!(Colour::from([0x3b, 0x82, 0xf6]), colour);
    }

    #[test]
    fn as_hex() {
        assert_eq!(Colour::from_rgb(0x10, 0xb9, 0x81).as_hex(), "#10b981");
        assert_eq!(Colour::from_rgb(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn serde() {
        let colour = Colour::from_rgb(0xec, 0x48, 0x99);
        let json = serde_json::to_string(&colour).unwrap();
        assert_eq!(json, r##""#ec4899""##);
        assert_eq!(serde_json::from_str::<Colour>(&json).unwrap(), colour);
        assert!(serde_json::from_str::<Colour>(r#""pink""#).is_err());
    }
}
