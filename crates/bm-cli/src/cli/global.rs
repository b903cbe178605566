use std::io::IsTerminal;

/// Global flags available before or after subcommands.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalFlags {
    pub quiet: bool,
    pub verbose: bool,
}

impl GlobalFlags {
    /// Progress bars draw on stderr, and only for interactive, non-quiet runs.
    #[must_use]
    pub fn show_progress(self) -> bool {
        !self.quiet && std::io::stderr().is_terminal()
    }
}
