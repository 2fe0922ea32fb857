use clap::ValueEnum;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// How the engine treats a reference to a variable that was not supplied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum UndefinedMode {
    /// Undefined values render as empty strings
    #[default]
    Lenient,
    /// Any use of an undefined value fails the render
    Strict,
    /// Like lenient, but attribute access on undefined values also yields undefined
    Chainable,
}

impl From<UndefinedMode> for UndefinedBehavior {
    fn from(mode: UndefinedMode) -> Self {
        match mode {
            UndefinedMode::Lenient => UndefinedBehavior::Lenient,
            UndefinedMode::Strict => UndefinedBehavior::Strict,
            UndefinedMode::Chainable => UndefinedBehavior::Chainable,
        }
    }
}

/// Engine settings applied to every template this process renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub undefined: UndefinedMode,
    /// Keep the final newline of the template source in the output.
    pub keep_trailing_newline: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            undefined: UndefinedMode::default(),
            keep_trailing_newline: true,
        }
    }
}

impl RenderConfig {
    pub fn with_undefined(mut self, undefined: UndefinedMode) -> Self {
        self.undefined = undefined;
        self
    }

    pub fn with_trailing_newline(mut self, keep: bool) -> Self {
        self.keep_trailing_newline = keep;
        self
    }

    pub(crate) fn apply(&self, env: &mut Environment<'_>) {
        env.set_undefined_behavior(self.undefined.into());
        env.set_keep_trailing_newline(self.keep_trailing_newline);
        // Output is plain text whatever the file extension.
        env.set_auto_escape_callback(|_| AutoEscape::None);
    }
}
