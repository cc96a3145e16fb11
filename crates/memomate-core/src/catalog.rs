//! The fixed set of buildings and decorative bots that make up the city.

use std::collections::HashSet;

use crate::entity::{Entity, Rgb, Size3, Vec3};
use crate::SceneError;

/// A decorative flying bot. Bots are not part of the entity set and cannot be
/// hovered or selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotSpec {
    /// Centre of the circular flight path.
    pub center: Vec3,
    pub color: Rgb,
}

/// Read-only collection of entities, keyed by unique id.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entities: Vec<Entity>,
    bots: Vec<BotSpec>,
}

impl Catalog {
    /// Build a catalogue, rejecting duplicate ids.
    pub fn new(entities: Vec<Entity>, bots: Vec<BotSpec>) -> Result<Self, SceneError> {
        let mut seen = HashSet::new();
        for entity in &entities {
            if !seen.insert(entity.id.as_str()) {
                return Err(SceneError::DuplicateId(entity.id.clone()));
            }
        }
        Ok(Self { entities, bots })
    }

    /// The MEMOMATE feature city.
    pub fn memomate() -> Result<Self, SceneError> {
        let entities = vec![
            Entity::new(
                "dashboard",
                "Dashboard",
                "Central Command",
                "Mission control center with system overview",
                "🏢",
                "#ff0033",
                Vec3::new(0.0, 0.0, 0.0),
                Size3::new(4.0, 12.0, 4.0),
            )?,
            Entity::new(
                "ai-chat",
                "AI Chat",
                "AI Core",
                "Intelligent conversation and assistance",
                "🤖",
                "#0099ff",
                Vec3::new(-8.0, 0.0, -3.0),
                Size3::new(3.0, 15.0, 3.0),
            )?,
            Entity::new(
                "timeline",
                "Timeline",
                "Chrono Tower",
                "Time management and scheduling",
                "⏰",
                "#9933ff",
                Vec3::new(6.0, 0.0, -5.0),
                Size3::new(3.5, 10.0, 3.5),
            )?,
            Entity::new(
                "reminders",
                "Reminders",
                "Reminder Dome",
                "Smart notifications and alerts",
                "🔔",
                "#ff6600",
                Vec3::new(-5.0, 0.0, 4.0),
                Size3::new(4.0, 6.0, 4.0),
            )?,
            Entity::new(
                "analytics",
                "Analytics",
                "Data Vault",
                "Performance metrics and insights",
                "📊",
                "#00ff88",
                Vec3::new(8.0, 0.0, 3.0),
                Size3::new(3.0, 8.0, 5.0),
            )?,
            Entity::new(
                "collaboration",
                "Collaboration",
                "Collab Hub",
                "Team coordination and sharing",
                "👥",
                "#ff3399",
                Vec3::new(-2.0, 0.0, -8.0),
                Size3::new(5.0, 9.0, 3.0),
            )?,
            Entity::new(
                "settings",
                "Settings",
                "Control Nexus",
                "System configuration and preferences",
                "⚙",
                "#ffaa00",
                Vec3::new(3.0, 0.0, 7.0),
                Size3::new(2.5, 7.0, 2.5),
            )?,
        ];

        let bots = vec![
            BotSpec {
                center: Vec3::new(5.0, 8.0, 5.0),
                color: Rgb::new(0xff, 0x00, 0x33),
            },
            BotSpec {
                center: Vec3::new(-8.0, 6.0, -3.0),
                color: Rgb::new(0x00, 0x99, 0xff),
            },
            BotSpec {
                center: Vec3::new(0.0, 10.0, -8.0),
                color: Rgb::new(0x99, 0x33, 0xff),
            },
        ];

        Self::new(entities, bots)
    }

    /// Look up an entity by id.
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Whether an entity with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Position of an entity in catalogue order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn bots(&self) -> &[BotSpec] {
        &self.bots
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memomate_catalog() {
        let catalog = Catalog::memomate().unwrap();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.bots().len(), 3);
        assert!(catalog.contains("timeline"));
        assert!(!catalog.contains("nonexistent-id"));
        assert_eq!(catalog.index_of("ai-chat"), Some(1));

        let dashboard = catalog.get("dashboard").unwrap();
        assert_eq!(dashboard.building_name, "Central Command");
        assert_eq!(dashboard.color, Rgb::new(0xff, 0x00, 0x33));
    }

    #[test]
    fn test_tall_buildings_in_catalog() {
        let catalog = Catalog::memomate().unwrap();
        let tall: Vec<&str> = catalog
            .entities()
            .iter()
            .filter(|e| e.has_spire())
            .map(|e| e.id.as_str())
            .collect();
        // Analytics is exactly 8 units high and sits on the boundary.
        assert_eq!(tall, ["dashboard", "ai-chat", "timeline", "collaboration"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = Catalog::memomate().unwrap();
        let mut entities = catalog.entities().to_vec();
        entities.push(entities[0].clone());
        assert_eq!(
            Catalog::new(entities, Vec::new()).unwrap_err(),
            SceneError::DuplicateId("dashboard".to_string())
        );
    }
}
