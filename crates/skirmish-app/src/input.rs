//! Keyboard input.
//!
//! Terminals report key presses (and auto-repeat), not key state. A control
//! counts as held for a frame when its key arrived during that frame, which
//! makes the input level-triggered: every frame starts from nothing pressed.

use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use skirmish_core::controls::{ShipControls, TickInput};
use skirmish_core::enums::Players;

/// Anything that can produce the input for one tick.
pub trait InputSource {
    fn sample(&mut self) -> anyhow::Result<TickInput>;
}

/// Keys flying one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipKeys {
    pub turn_left: KeyCode,
    pub turn_right: KeyCode,
    pub thrust: KeyCode,
    pub brake: KeyCode,
    pub fire: KeyCode,
}

/// Key map for both ship slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    pub ships: [ShipKeys; 2],
    pub one_player: KeyCode,
    pub two_players: KeyCode,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            ships: [
                ShipKeys {
                    turn_left: KeyCode::Left,
                    turn_right: KeyCode::Right,
                    thrust: KeyCode::Up,
                    brake: KeyCode::Down,
                    fire: KeyCode::Char('/'),
                },
                ShipKeys {
                    turn_left: KeyCode::Char('a'),
                    turn_right: KeyCode::Char('d'),
                    thrust: KeyCode::Char('w'),
                    brake: KeyCode::Char('s'),
                    fire: KeyCode::Char('q'),
                },
            ],
            one_player: KeyCode::Char('n'),
            two_players: KeyCode::Char('N'),
        }
    }
}

/// Fold one key event into the input being collected for this frame.
/// Keys with no binding are ignored.
pub fn apply_key(input: &mut TickInput, key: KeyEvent, bindings: &Bindings) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => input.quit = true,
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => input.quit = true,
        (code, _) if code == bindings.one_player => input.new_game = Some(Players::One),
        (code, _) if code == bindings.two_players => input.new_game = Some(Players::Two),
        (code, _) => {
            for (keys, controls) in bindings.ships.iter().zip(input.slots.iter_mut()) {
                press(keys, controls, code);
            }
        }
    }
}

fn press(keys: &ShipKeys, controls: &mut ShipControls, code: KeyCode) {
    if code == keys.turn_left {
        controls.turn_left = true;
    }
    if code == keys.turn_right {
        controls.turn_right = true;
    }
    if code == keys.thrust {
        controls.thrust = true;
    }
    if code == keys.brake {
        controls.brake = true;
    }
    if code == keys.fire {
        controls.fire = true;
    }
}

/// Reads whatever key events are queued on the terminal without blocking.
pub struct KeyboardInput {
    bindings: Bindings,
}

impl KeyboardInput {
    pub fn new(bindings: Bindings) -> Self {
        Self { bindings }
    }
}

impl InputSource for KeyboardInput {
    fn sample(&mut self) -> anyhow::Result<TickInput> {
        let mut input = TickInput::default();
        while event::poll(Duration::ZERO).context("failed to poll terminal events")? {
            if let Event::Key(key) = event::read().context("failed to read terminal event")? {
                apply_key(&mut input, key, &self.bindings);
            }
        }
        Ok(input)
    }
}
