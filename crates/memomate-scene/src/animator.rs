//! Per-frame motion for buildings and bots.
//!
//! Every function here is a pure function of the elapsed time (seconds since
//! the city came up) and the identity of the thing being animated, so a frame
//! can be recomputed at any clock value with identical results.

use std::collections::BTreeMap;

use memomate_core::{BotSpec, Catalog, Entity, Vec3};

/// Peak vertical bob of a building, in world units.
pub const BOB_AMPLITUDE: f32 = 0.1;
/// Peak deviation of the hover pulse from unit scale.
pub const PULSE_AMPLITUDE: f32 = 0.05;
/// Angular frequency of the hover pulse, rad/s.
pub const PULSE_FREQUENCY: f32 = 3.0;
/// Angular velocity of a bot around its centre, rad/s.
pub const ORBIT_ANGULAR_VELOCITY: f32 = 0.5;
/// Radius of a bot's flight circle.
pub const ORBIT_RADIUS: f32 = 3.0;
/// Peak vertical bob of a bot.
pub const ORBIT_BOB_AMPLITUDE: f32 = 0.5;
/// Peak pitch wobble of a bot, radians.
pub const ORBIT_PITCH_AMPLITUDE: f32 = 0.1;
/// How far, in seconds, the trail marker runs behind its bot.
pub const TRAIL_LAG_SECS: f32 = 0.4;

/// Transient transform of one animated object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Offset from the object's rest position.
    pub offset: Vec3,
    /// Uniform scale factor.
    pub scale: f32,
    /// Rotation about the vertical axis, radians.
    pub yaw: f32,
    /// Rotation about the horizontal axis, radians.
    pub pitch: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            scale: 1.0,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

/// A bot and its trailing marker at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotState {
    pub body: Vec3,
    pub trail: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

/// Everything that moves, sampled at one clock value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationFrame {
    pub elapsed: f32,
    pub buildings: BTreeMap<String, AnimationState>,
    pub bots: Vec<BotState>,
}

impl AnimationFrame {
    /// Animation state of a building, unit transform if unknown.
    pub fn building(&self, id: &str) -> AnimationState {
        self.buildings.get(id).copied().unwrap_or_default()
    }
}

/// Vertical bob of a building. The phase comes from the building's x so
/// neighbours float out of step.
pub fn bob_offset(entity: &Entity, elapsed: f32) -> f32 {
    BOB_AMPLITUDE * (elapsed + entity.position.x).sin()
}

/// Scale of a building; pulses only while hovered.
pub fn hover_scale(hovered: bool, elapsed: f32) -> f32 {
    if hovered {
        1.0 + PULSE_AMPLITUDE * (elapsed * PULSE_FREQUENCY).sin()
    } else {
        1.0
    }
}

/// Animation state of a building.
pub fn building_state(entity: &Entity, elapsed: f32, hovered: bool) -> AnimationState {
    AnimationState {
        offset: Vec3::new(0.0, bob_offset(entity, elapsed), 0.0),
        scale: hover_scale(hovered, elapsed),
        ..AnimationState::default()
    }
}

/// Position of a bot on its flight circle. The vertical bob runs at twice
/// the orbit's angular frequency.
pub fn orbit_position(center: Vec3, elapsed: f32) -> Vec3 {
    let phase = elapsed * ORBIT_ANGULAR_VELOCITY;
    Vec3::new(
        center.x + phase.cos() * ORBIT_RADIUS,
        center.y + (phase * 2.0).sin() * ORBIT_BOB_AMPLITUDE,
        center.z + phase.sin() * ORBIT_RADIUS,
    )
}

/// Position of a bot's trail marker: the orbit, [`TRAIL_LAG_SECS`] ago.
pub fn trail_position(center: Vec3, elapsed: f32) -> Vec3 {
    orbit_position(center, elapsed - TRAIL_LAG_SECS)
}

/// Full state of a bot.
pub fn bot_state(bot: &BotSpec, elapsed: f32) -> BotState {
    let phase = elapsed * ORBIT_ANGULAR_VELOCITY;
    BotState {
        body: orbit_position(bot.center, elapsed),
        trail: trail_position(bot.center, elapsed),
        yaw: phase,
        pitch: (phase * 3.0).sin() * ORBIT_PITCH_AMPLITUDE,
    }
}

/// Samples the animation of a whole catalogue.
#[derive(Debug, Clone, Copy)]
pub struct Animator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Animator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Compute every transform at `elapsed` seconds.
    pub fn tick(&self, elapsed: f32, hovered: Option<&str>) -> AnimationFrame {
        let buildings = self
            .catalog
            .entities()
            .iter()
            .map(|entity| {
                let is_hovered = hovered == Some(entity.id.as_str());
                (entity.id.clone(), building_state(entity, elapsed, is_hovered))
            })
            .collect();
        let bots = self
            .catalog
            .bots()
            .iter()
            .map(|bot| bot_state(bot, elapsed))
            .collect();

        AnimationFrame {
            elapsed,
            buildings,
            bots,
        }
    }
}
