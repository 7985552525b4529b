//! Draw-list collection.
//!
//! Produces one [`Sprite`] per visible glyph in registry order, so later
//! entities draw over earlier ones. Positions are in world columns and grid
//! rows; projection onto the screen is the renderer's job.

use hecs::{Entity, World};

use skirmish_core::components::{Hull, Particle, Ship, Swell};
use skirmish_core::constants::{HEADING_GLYPHS, MUZZLE_OFFSETS};
use skirmish_core::enums::{EntityKind, Palette};
use skirmish_core::motion::InertialBody;
use skirmish_core::state::Sprite;
use skirmish_core::types::Vector;

use crate::registry::Registry;

pub fn collect(registry: &Registry, space_theme: bool) -> Vec<Sprite> {
    let world = registry.world();
    let mut sprites = Vec::new();
    for entity in registry.live_in_order() {
        let Some(kind) = registry.kind(entity) else {
            continue;
        };
        match kind {
            EntityKind::Ship => ship(world, entity, &mut sprites),
            EntityKind::Torpedo => {
                if let Some((x, row)) = cell_of(world, entity) {
                    sprites.push(glyph(x, row, '*', Palette::Ember));
                }
            }
            EntityKind::Particle => {
                let color = world
                    .get::<&Particle>(entity)
                    .ok()
                    .and_then(|p| p.color())
                    .unwrap_or(Palette::Hud);
                if let Some((x, row)) = cell_of(world, entity) {
                    sprites.push(glyph(x, row, '.', color));
                }
            }
            EntityKind::Chaser => {
                if let Some((x, row)) = cell_of(world, entity) {
                    sprites.push(glyph(x, row, 'X', Palette::Bright));
                }
            }
            EntityKind::Swell => {
                if let Ok(swell) = world.get::<&Swell>(entity) {
                    sprites.push(Sprite {
                        x: swell.column as f64,
                        row: swell.row as f64,
                        symbol: if space_theme { '.' } else { '~' },
                        bold: !space_theme,
                        color: Palette::Sea,
                    });
                }
            }
            EntityKind::Autopilot => {}
        }
    }
    sprites
}

/// Hull glyph plus the heading glyph one step ahead of it.
fn ship(world: &World, entity: Entity, sprites: &mut Vec<Sprite>) {
    let Some((x, row)) = cell_of(world, entity) else {
        return;
    };
    let Ok(ship) = world.get::<&Ship>(entity) else {
        return;
    };
    let flash = world.get::<&Hull>(entity).map(|h| h.flash_for).unwrap_or(0.0);
    sprites.push(glyph(x, row, ship.symbol, flash_color(flash)));

    let facing = ship.facing as usize % MUZZLE_OFFSETS.len();
    let (ox, oy) = MUZZLE_OFFSETS[facing];
    sprites.push(glyph(
        x + ox as f64,
        row + oy as f64,
        HEADING_GLYPHS[facing],
        Palette::Bright,
    ));
}

/// Hull color while a hit flash runs: alternates four times a second.
pub fn flash_color(flash_for: f64) -> Palette {
    if (flash_for * 4.0).floor() as i64 % 2 == 0 {
        Palette::Bright
    } else {
        Palette::Ember
    }
}

/// Integer column and grid row of a body.
fn cell_of(world: &World, entity: Entity) -> Option<(f64, f64)> {
    let body = world.get::<&InertialBody>(entity).ok()?;
    Some(grid_cell(body.position))
}

/// World position to (column, grid row), both truncated to whole cells.
pub fn grid_cell(position: Vector) -> (f64, f64) {
    (position.x.floor(), (position.y.floor() / 2.0).floor())
}

fn glyph(x: f64, row: f64, symbol: char, color: Palette) -> Sprite {
    Sprite {
        x,
        row,
        symbol,
        bold: true,
        color,
    }
}
