/// Line ending convention to use in formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Keep the convention the input uses (first match wins)
    #[default]
    Auto,
    Lf,
    Crlf,
}

/// Formatting configuration.
///
/// The canonical printer itself takes no options; configuration only
/// covers how the output is re-assembled around it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Line ending convention for the output
    pub line_ending: LineEnding,
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn line_ending(mut self, ending: LineEnding) -> Self {
        self.config.line_ending = ending;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
