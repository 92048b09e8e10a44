use aura_core::{ShapeKind, PALETTE};

/// Arrow keys that rotate the cloud while held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotateKey {
    Left,
    Right,
    Up,
    Down,
}

/// Motion layers that can be switched off from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Breathing,
    Turbulence,
    Heartbeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SelectShape(ShapeKind),
    SelectColor(usize),
    ToggleTensionLock,
    /// Same as a detected clap: fire an explosion.
    Clap,
    /// Close the simulated hand's pinch while the key is held.
    Pinch,
    ToggleLayer(Layer),
    Quit,
}

#[inline]
pub fn shape_for_digit(key: &str) -> Option<ShapeKind> {
    match key {
        "1" => Some(ShapeKind::Sphere),
        "2" => Some(ShapeKind::Heart),
        "3" => Some(ShapeKind::Flower),
        "4" => Some(ShapeKind::Saturn),
        "5" => Some(ShapeKind::NameComposite),
        _ => None,
    }
}

/// Palette index for a single letter key: `a` is entry 0, `w` is entry 22.
#[inline]
pub fn color_index_for_key(key: &str) -> Option<usize> {
    let mut chars = key.chars();
    let c = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() || !c.is_ascii_lowercase() {
        return None;
    }
    let index = (c as u8 - b'a') as usize;
    (index < PALETTE.len()).then_some(index)
}

#[inline]
pub fn rotate_key(key: &str) -> Option<RotateKey> {
    match key {
        "ArrowLeft" => Some(RotateKey::Left),
        "ArrowRight" => Some(RotateKey::Right),
        "ArrowUp" => Some(RotateKey::Up),
        "ArrowDown" => Some(RotateKey::Down),
        _ => None,
    }
}

/// Map a key name (DOM-style: `"1"`, `"a"`, `"Control"`, `" "`, `"Enter"`)
/// to a command. Arrow keys are handled separately by [`rotate_key`].
pub fn command_for_key(key: &str) -> Option<Command> {
    if let Some(shape) = shape_for_digit(key) {
        return Some(Command::SelectShape(shape));
    }
    match key {
        "Control" => Some(Command::ToggleTensionLock),
        " " => Some(Command::Clap),
        "Enter" | "Tab" => Some(Command::Pinch),
        "F1" => Some(Command::ToggleLayer(Layer::Breathing)),
        "F2" => Some(Command::ToggleLayer(Layer::Turbulence)),
        "F3" => Some(Command::ToggleLayer(Layer::Heartbeat)),
        "Escape" => Some(Command::Quit),
        _ => color_index_for_key(key).map(Command::SelectColor),
    }
}
