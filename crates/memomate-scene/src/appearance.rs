//! Appearance tokens as a pure function of building, hover and time of day.

use memomate_core::{Entity, Rgb, TimeOfDay};

const DAY_BODY: Rgb = Rgb::new(0x66, 0x66, 0x66);
const NIGHT_BODY: Rgb = Rgb::new(0x33, 0x33, 0x33);
const DAY_WINDOW: Rgb = Rgb::new(0x87, 0xce, 0xeb);
const NIGHT_LIGHT: Rgb = Rgb::new(0xff, 0x00, 0x33);

/// How a single building should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingAppearance {
    pub body: Rgb,
    pub emissive: Rgb,
    pub emissive_intensity: f32,
    pub edge: Rgb,
    pub edge_opacity: f32,
    pub label: Rgb,
    pub platform_intensity: f32,
    pub window: Rgb,
    pub window_opacity: f32,
    pub side_window_opacity: f32,
    /// Holographic ring around the base.
    pub ring: bool,
    pub spire: bool,
}

impl BuildingAppearance {
    pub fn new(entity: &Entity, hovered: bool, time_of_day: TimeOfDay) -> Self {
        let night = time_of_day.is_night();
        let accent = entity.color;

        let body = match (hovered, night) {
            (true, _) => accent,
            (false, true) => NIGHT_BODY,
            (false, false) => DAY_BODY,
        };
        let emissive = if hovered || night { accent } else { Rgb::BLACK };
        let emissive_intensity = match (hovered, night) {
            (true, _) => 0.5,
            (false, true) => 0.2,
            (false, false) => 0.0,
        };
        let (window, window_opacity, side_window_opacity) = if night {
            (accent, 0.8, 0.6)
        } else {
            (DAY_WINDOW, 0.3, 0.2)
        };

        Self {
            body,
            emissive,
            emissive_intensity,
            edge: accent,
            edge_opacity: if hovered { 1.0 } else { 0.6 },
            label: if hovered { Rgb::WHITE } else { accent },
            platform_intensity: if hovered { 0.3 } else { 0.1 },
            window,
            window_opacity,
            side_window_opacity,
            ring: hovered,
            spire: entity.has_spire(),
        }
    }

    /// Body colour with the emissive glow folded in.
    pub fn lit_body(&self) -> Rgb {
        self.body.mix(self.emissive, self.emissive_intensity)
    }
}

/// Global light levels for the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLighting {
    pub ambient: f32,
    pub directional: f32,
    pub directional_color: Rgb,
    pub stars: bool,
    pub sky: Rgb,
    pub ground: Rgb,
}

impl SceneLighting {
    pub fn for_time(time_of_day: TimeOfDay) -> Self {
        match time_of_day {
            TimeOfDay::Day => Self {
                ambient: 0.6,
                directional: 1.0,
                directional_color: Rgb::WHITE,
                stars: false,
                sky: Rgb::new(0x1c, 0x2a, 0x3e),
                ground: Rgb::new(0x2a, 0x2a, 0x2a),
            },
            TimeOfDay::Night => Self {
                ambient: 0.2,
                directional: 0.3,
                directional_color: NIGHT_LIGHT,
                stars: true,
                sky: Rgb::new(0x05, 0x05, 0x0a),
                ground: Rgb::new(0x0a, 0x0a, 0x0a),
            },
        }
    }

    /// Brightness multiplier for lit surfaces.
    pub fn surface_gain(&self) -> f32 {
        0.6 + self.ambient * 0.5 + self.directional * 0.2
    }
}

#[cfg(test)]
mod tests {
    use memomate_core::Catalog;

    use super::*;

    #[test]
    fn test_hovered_uses_accent() {
        let catalog = Catalog::memomate().unwrap();
        let dashboard = catalog.get("dashboard").unwrap();
        for time in [TimeOfDay::Day, TimeOfDay::Night] {
            let look = BuildingAppearance::new(dashboard, true, time);
            assert_eq!(look.body, dashboard.color);
            assert_eq!(look.emissive, dashboard.color);
            assert_eq!(look.emissive_intensity, 0.5);
            assert_eq!(look.edge_opacity, 1.0);
            assert_eq!(look.label, Rgb::WHITE);
            assert!(look.ring);
        }
    }

    #[test]
    fn test_idle_depends_on_time_of_day() {
        let catalog = Catalog::memomate().unwrap();
        let reminders = catalog.get("reminders").unwrap();

        let night = BuildingAppearance::new(reminders, false, TimeOfDay::Night);
        assert_eq!(night.body, NIGHT_BODY);
        assert_eq!(night.emissive, reminders.color);
        assert_eq!(night.emissive_intensity, 0.2);
        assert_eq!(night.window, reminders.color);
        assert_eq!(night.window_opacity, 0.8);
        assert!(!night.ring);
        assert!(!night.spire);

        let day = BuildingAppearance::new(reminders, false, TimeOfDay::Day);
        assert_eq!(day.body, DAY_BODY);
        assert_eq!(day.emissive, Rgb::BLACK);
        assert_eq!(day.emissive_intensity, 0.0);
        assert_eq!(day.window, DAY_WINDOW);
        assert_eq!(day.edge_opacity, 0.6);
        assert_eq!(day.lit_body(), DAY_BODY);
    }

    #[test]
    fn test_lighting() {
        let day = SceneLighting::for_time(TimeOfDay::Day);
        let night = SceneLighting::for_time(TimeOfDay::Night);
        assert!(!day.stars);
        assert!(night.stars);
        assert!(day.surface_gain() > night.surface_gain());
    }
}
