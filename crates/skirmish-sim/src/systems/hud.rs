//! Status bar aggregation.
//!
//! The bar is laid out as `slot 0 | centre text | slot 1 reversed`, with the
//! free columns split evenly either side of the centre.

use hecs::Entity;

use skirmish_core::components::{Hull, Ship};
use skirmish_core::constants::{HUD_DISABLED, SHIP_SYMBOLS};
use skirmish_core::state::ShipStatus;

use crate::registry::Registry;

/// HUD state of the ship in `slot`. A missing ship reads as destroyed.
pub fn ship_status(registry: &Registry, slot: usize, ship: Option<Entity>) -> ShipStatus {
    let world = registry.world();
    let symbol = SHIP_SYMBOLS[slot % SHIP_SYMBOLS.len()];
    let live = ship.and_then(|e| {
        let ship = world.get::<&Ship>(e).ok()?;
        let hull = world.get::<&Hull>(e).ok()?;
        Some(ShipStatus {
            slot,
            symbol: ship.symbol,
            speed: ship.speed,
            top_speed: hull.top_speed,
            ammo: ship.ammo,
            destroyed: hull.disabled(),
        })
    });
    live.unwrap_or(ShipStatus {
        slot,
        symbol,
        speed: 0,
        top_speed: 0,
        ammo: 0,
        destroyed: true,
    })
}

/// Throttle gauge and magazine of one ship.
pub fn slot_text(status: &ShipStatus) -> String {
    if status.destroyed || status.top_speed <= 0 {
        return HUD_DISABLED.to_string();
    }
    let speed = status.speed.clamp(0, status.top_speed) as usize;
    let spare = (status.top_speed as usize).saturating_sub(speed);
    format!(
        "  {}{}  {}",
        "=".repeat(speed),
        "-".repeat(spare),
        "*".repeat(status.ammo as usize)
    )
}

/// The full status bar, exactly `width` characters or fewer.
pub fn status_line(statuses: &[ShipStatus], centre: &str, width: usize) -> String {
    let left = statuses.first().map(slot_text).unwrap_or_default();
    let right: String = statuses
        .get(1)
        .map(slot_text)
        .unwrap_or_default()
        .chars()
        .rev()
        .collect();

    let used = left.chars().count() + centre.chars().count() + right.chars().count();
    let free = width.saturating_sub(used);
    let gap = free / 2;

    let mut line = String::with_capacity(width);
    line.push_str(&left);
    line.push_str(&" ".repeat(gap));
    line.push_str(centre);
    line.push_str(&" ".repeat(free - gap));
    line.push_str(&right);
    line.chars().take(width).collect()
}
