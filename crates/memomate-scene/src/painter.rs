//! Paints one frame of the city onto a [`Canvas`].

use std::cmp::Ordering;

use memomate_core::{BotSpec, Catalog, Entity, InteractionState, Rgb, TimeOfDay, Vec3};
use ratatui::layout::{Position, Rect};

use crate::animator::{AnimationFrame, BotState};
use crate::appearance::{BuildingAppearance, SceneLighting};
use crate::canvas::Canvas;
use crate::chars::{
    BODY_CHAR, BOT_BODY_CHAR, BOT_TRAIL_CHAR, BOT_WING_CHARS, EDGE_CHARS, PLATFORM_CHAR,
    RING_CHARS, SIDE_WINDOW_CHAR, SPIRE_CHAR, SPIRE_TIP_CHAR, WINDOW_CHAR,
};
use crate::color::fade;
use crate::projection::{Camera, Projector};
use crate::sky::{ground_cell, sky_cell};

/// How far out the ground grid reaches, in world units.
const GROUND_RADIUS: f32 = 12.0;
/// Opacity of a bot's trail marker.
const TRAIL_OPACITY: f32 = 0.3;
/// Glow of a spire relative to white.
const SPIRE_GLOW: f32 = 0.8;

/// Screen area that belongs to one building, used for pointer hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub id: String,
    pub rect: Rect,
}

/// A painted frame and the hit regions of its buildings, nearest last.
#[derive(Debug, Clone)]
pub struct PaintedCity {
    pub canvas: Canvas,
    pub hits: Vec<HitRegion>,
}

impl PaintedCity {
    /// The building under a cell, preferring the one nearest the viewer.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<&str> {
        hit_test(&self.hits, col, row)
    }
}

/// The building under a cell, preferring the last (nearest) region.
pub fn hit_test(hits: &[HitRegion], col: u16, row: u16) -> Option<&str> {
    let position = Position::new(col, row);
    hits.iter()
        .rev()
        .find(|hit| hit.rect.contains(position))
        .map(|hit| hit.id.as_str())
}

enum Drawable<'a> {
    Building(&'a Entity),
    Bot(&'a BotSpec, BotState),
}

/// Inputs sampled for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInputs<'a> {
    pub catalog: &'a Catalog,
    pub animation: &'a AnimationFrame,
    pub interaction: &'a InteractionState,
    pub time_of_day: TimeOfDay,
    pub camera: Camera,
    pub elapsed_ms: u64,
}

/// Paint the whole city into a `width` by `height` canvas.
pub fn paint_city(inputs: FrameInputs<'_>, width: u16, height: u16) -> PaintedCity {
    let lighting = SceneLighting::for_time(inputs.time_of_day);
    let projector = Projector::new(inputs.camera, width, height);
    let mut canvas = Canvas::new(width, height, lighting.sky);

    let horizon = projector
        .project(Vec3::new(0.0, 0.0, -GROUND_RADIUS))
        .row
        .min(projector.project(Vec3::new(0.0, 0.0, GROUND_RADIUS)).row)
        .clamp(0.0, height as f32) as u16;
    paint_backdrop(&mut canvas, &lighting, horizon, inputs);

    let mut drawables: Vec<(f32, Drawable)> = inputs
        .catalog
        .entities()
        .iter()
        .map(|entity| (projector.project(entity.position).depth, Drawable::Building(entity)))
        .chain(
            inputs
                .catalog
                .bots()
                .iter()
                .zip(inputs.animation.bots.iter())
                .map(|(spec, state)| {
                    (projector.project(state.body).depth, Drawable::Bot(spec, *state))
                }),
        )
        .collect();
    drawables.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut hits = Vec::new();
    for (_, drawable) in drawables {
        match drawable {
            Drawable::Building(entity) => {
                let hovered = inputs.interaction.is_hovered(&entity.id);
                if let Some(rect) =
                    paint_building(&mut canvas, &projector, &lighting, entity, hovered, inputs)
                {
                    hits.push(HitRegion {
                        id: entity.id.clone(),
                        rect,
                    });
                }
            }
            Drawable::Bot(spec, state) => {
                paint_bot(&mut canvas, &projector, &lighting, spec, &state);
            }
        }
    }

    PaintedCity { canvas, hits }
}

fn paint_backdrop(
    canvas: &mut Canvas,
    lighting: &SceneLighting,
    horizon: u16,
    inputs: FrameInputs,
) {
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let (xi, yi) = (x as i32, y as i32);
            if y >= horizon {
                canvas.tint(xi, yi, lighting.ground);
                if let Some((ch, color)) = ground_cell(x, y, horizon, lighting.ground) {
                    canvas.put(xi, yi, ch, color);
                }
            } else if let Some((ch, color)) =
                sky_cell(x, y, horizon, inputs.elapsed_ms, inputs.time_of_day)
            {
                canvas.put(xi, yi, ch, color);
            }
        }
    }
}

fn paint_building(
    canvas: &mut Canvas,
    projector: &Projector,
    lighting: &SceneLighting,
    entity: &Entity,
    hovered: bool,
    inputs: FrameInputs,
) -> Option<Rect> {
    let look = BuildingAppearance::new(entity, hovered, inputs.time_of_day);
    let motion = inputs.animation.building(&entity.id);
    let base = projector.project(entity.position.offset(motion.offset));
    let scale = motion.scale;

    let rows_for = |world_y: f32| (projector.height_rows(world_y) * scale).round() as i32;
    let half_cols = (projector.footprint_cols(entity.size.width, entity.size.depth) * scale / 2.0)
        .round()
        .max(1.0) as i32;
    let (center, bottom) = base.cell();
    let left = center - half_cols;
    let right = center + half_cols;
    let top = bottom - rows_for(entity.size.height).max(2);

    let body = look.lit_body().scaled(lighting.surface_gain());
    let background = lighting.sky;

    // Body.
    for y in top + 1..bottom {
        for x in left + 1..right {
            canvas.put(x, y, BODY_CHAR, body);
            canvas.tint(x, y, body.scaled(0.45));
        }
    }

    // Windows, one strip every two world units.
    for i in 0..entity.window_rows() {
        let y = bottom - rows_for(i as f32 * 2.0 + 1.0);
        if y <= top || y >= bottom {
            continue;
        }
        for x in left + 2..right - 1 {
            canvas.put(x, y, WINDOW_CHAR, fade(look.window, look.window_opacity, body));
        }
        if right - 1 > left + 1 {
            canvas.put(
                right - 1,
                y,
                SIDE_WINDOW_CHAR,
                fade(look.window, look.side_window_opacity, body),
            );
        }
    }

    // Outline.
    let edge = fade(look.edge, look.edge_opacity, background);
    let [tl, tr, bl, br, horizontal, vertical] = EDGE_CHARS;
    for x in left + 1..right {
        canvas.put(x, top, horizontal, edge);
        canvas.put(x, bottom, horizontal, edge);
    }
    for y in top + 1..bottom {
        canvas.put(left, y, vertical, edge);
        canvas.put(right, y, vertical, edge);
    }
    canvas.put(left, top, tl, edge);
    canvas.put(right, top, tr, edge);
    canvas.put(left, bottom, bl, edge);
    canvas.put(right, bottom, br, edge);

    // Base platform.
    let platform_radius = (entity.size.width * 0.8 * projector.scale_x() * scale).round() as i32;
    let platform = entity.color.scaled(0.4 + look.platform_intensity * 2.0);
    for x in center - platform_radius..=center + platform_radius {
        canvas.put(x, bottom + 1, PLATFORM_CHAR, platform);
    }

    if look.ring {
        let y = (bottom - rows_for(0.5)).min(bottom - 1);
        canvas.put(left - 1, y, RING_CHARS[0], entity.color);
        canvas.put(right + 1, y, RING_CHARS[1], entity.color);
    }

    let mut crest = top;
    if look.spire {
        let spire = entity.color.mix(Rgb::WHITE, SPIRE_GLOW * 0.3);
        let spire_rows = rows_for(1.0).max(1);
        for dy in 1..=spire_rows {
            canvas.put(center, top - dy, SPIRE_CHAR, spire);
        }
        crest = top - spire_rows - 1;
        canvas.put(center, crest, SPIRE_TIP_CHAR, spire);
    }

    // Floating icon and label above the roof.
    let icon_row = (bottom - rows_for(entity.size.height + 1.5)).min(crest - 1);
    canvas.put_str_centered(center, icon_row, &entity.icon, entity.color, false);
    let label_row = (bottom - rows_for(entity.size.height + 2.5)).min(icon_row - 1);
    canvas.put_str_centered(
        center,
        label_row,
        &entity.building_name.to_uppercase(),
        look.label,
        hovered,
    );

    clip_rect(
        left.min(center - 1),
        label_row,
        right.max(center + 1),
        bottom + 1,
        canvas,
    )
}

fn paint_bot(
    canvas: &mut Canvas,
    projector: &Projector,
    lighting: &SceneLighting,
    spec: &BotSpec,
    state: &BotState,
) {
    let (tx, ty) = projector.project(state.trail).cell();
    canvas.put(tx, ty, BOT_TRAIL_CHAR, fade(spec.color, TRAIL_OPACITY, lighting.sky));

    let (x, y) = projector.project(state.body).cell();
    let eighth = std::f32::consts::FRAC_PI_4;
    let wing = BOT_WING_CHARS[((state.yaw / eighth).round() as i64).rem_euclid(4) as usize];
    let wing_color = spec.color.scaled(0.8 + state.pitch);
    canvas.put(x - 1, y, wing, wing_color);
    canvas.put(x + 1, y, wing, wing_color);
    canvas.put_bold(x, y, BOT_BODY_CHAR, spec.color);
}

/// Clip an inclusive cell rectangle to the canvas.
fn clip_rect(left: i32, top: i32, right: i32, bottom: i32, canvas: &Canvas) -> Option<Rect> {
    let max_x = canvas.width() as i32 - 1;
    let max_y = canvas.height() as i32 - 1;
    let (l, t) = (left.max(0), top.max(0));
    let (r, b) = (right.min(max_x), bottom.min(max_y));
    if l > r || t > b {
        return None;
    }
    Some(Rect::new(
        l as u16,
        t as u16,
        (r - l + 1) as u16,
        (b - t + 1) as u16,
    ))
}
