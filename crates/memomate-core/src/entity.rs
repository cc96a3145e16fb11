//! Static descriptors for the interactive buildings in the city.

use ratatui::style::Color;

use crate::SceneError;

/// A point in world space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Component-wise sum.
    pub fn offset(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

/// Building footprint and height, all strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size3 {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Size3 {
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    fn is_valid(&self) -> bool {
        [self.width, self.height, self.depth]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// An opaque RGB colour token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` token.
    pub fn from_hex(hex: &str) -> Result<Self, SceneError> {
        let invalid = || SceneError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Scale the brightness of the colour by `factor`, saturating at white.
    pub fn scaled(self, factor: f32) -> Rgb {
        let scale = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
        Rgb::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Linear blend towards `other`, `t` in 0..=1.
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// A feature of the product, shown as a building.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Unique identifier, e.g. `"dashboard"`.
    pub id: String,
    /// Display name of the feature.
    pub name: String,
    /// Label drawn above the building.
    pub building_name: String,
    /// One-line description shown in the list view and the detail panel.
    pub description: String,
    /// Category glyph.
    pub icon: String,
    /// Accent colour.
    pub color: Rgb,
    /// Ground position of the building centre.
    pub position: Vec3,
    pub size: Size3,
}

impl Entity {
    /// Height above which a building carries a spire.
    pub const SPIRE_HEIGHT_THRESHOLD: f32 = 8.0;

    /// Build an entity, validating the accent colour and the size.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        name: &str,
        building_name: &str,
        description: &str,
        icon: &str,
        color: &str,
        position: Vec3,
        size: Size3,
    ) -> Result<Self, SceneError> {
        if !size.is_valid() {
            return Err(SceneError::InvalidSize(id.to_string()));
        }
        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            building_name: building_name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            color: Rgb::from_hex(color)?,
            position,
            size,
        })
    }

    /// Tall buildings get a spire; the cutoff is exclusive.
    pub fn has_spire(&self) -> bool {
        self.size.height > Self::SPIRE_HEIGHT_THRESHOLD
    }

    /// Number of window rows on the facade.
    pub fn window_rows(&self) -> usize {
        (self.size.height / 2.0).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tower(height: f32) -> Entity {
        Entity::new(
            "tower",
            "Tower",
            "Test Tower",
            "A tower",
            "T",
            "#123456",
            Vec3::ZERO,
            Size3::new(2.0, height, 2.0),
        )
        .unwrap()
    }

    #[test]
    fn test_spire_threshold_is_strict() {
        assert!(!tower(8.0).has_spire());
        assert!(tower(8.01).has_spire());
        assert!(!tower(6.0).has_spire());
    }

    #[test]
    fn test_window_rows() {
        assert_eq!(tower(12.0).window_rows(), 6);
        assert_eq!(tower(15.0).window_rows(), 7);
        assert_eq!(tower(1.5).window_rows(), 0);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(Rgb::from_hex("#ff0033").unwrap(), Rgb::new(255, 0, 51));
        assert!(Rgb::from_hex("ff0033").is_err());
        assert!(Rgb::from_hex("#ff00").is_err());
        assert!(Rgb::from_hex("#gg0033").is_err());
    }

    #[test]
    fn test_rejects_non_positive_size() {
        let err = Entity::new(
            "flat",
            "Flat",
            "Flat",
            "",
            "",
            "#000000",
            Vec3::ZERO,
            Size3::new(1.0, 0.0, 1.0),
        )
        .unwrap_err();
        assert_eq!(err, SceneError::InvalidSize("flat".to_string()));
    }

    #[test]
    fn test_color_mix_and_scale() {
        let black = Rgb::BLACK;
        assert_eq!(black.mix(Rgb::WHITE, 1.0), Rgb::WHITE);
        assert_eq!(black.mix(Rgb::WHITE, 0.0), black);
        assert_eq!(Rgb::new(200, 100, 0).scaled(2.0), Rgb::new(255, 200, 0));
    }
}
