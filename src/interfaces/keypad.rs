use crate::application::engine::CalculatorEngine;
use crate::domain::key::Key;
use crate::domain::state::CalculatorState;
use tracing::debug;

/// Options for the key input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadConfig {
    /// Ignore `.` while the display already contains one.
    pub guard_decimal_point: bool,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            guard_decimal_point: true,
        }
    }
}

/// Whether a key press reached the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Applied,
    Ignored,
}

/// What the calculator screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub main: String,
    pub secondary: Option<String>,
}

/// The button surface in front of a [`CalculatorEngine`].
///
/// Mirrors a physical keypad: a disabled button is simply not pressed, so the
/// engine never sees it.
#[derive(Debug, Default, Clone)]
pub struct Keypad {
    engine: CalculatorEngine,
    config: KeypadConfig,
}

impl Keypad {
    pub fn new(config: KeypadConfig) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            config,
        }
    }

    pub fn with_engine(engine: CalculatorEngine, config: KeypadConfig) -> Self {
        Self { engine, config }
    }

    pub fn is_enabled(&self, key: Key) -> bool {
        match key {
            Key::Digit(d) if d.is_decimal_point() && self.config.guard_decimal_point => {
                self.engine.accepts_decimal_point()
            }
            _ => true,
        }
    }

    pub fn press(&mut self, key: Key) -> KeyOutcome {
        if !self.is_enabled(key) {
            debug!(%key, display = %self.engine.display(), "key disabled, ignoring");
            return KeyOutcome::Ignored;
        }
        self.engine.press(key);
        KeyOutcome::Applied
    }

    pub fn screen(&self) -> Screen {
        Screen {
            main: self.engine.formatted_display(),
            secondary: self.engine.pending_expression(),
        }
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    pub fn state(&self) -> &CalculatorState {
        self.engine.state()
    }
}
