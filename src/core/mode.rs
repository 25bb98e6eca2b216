//! Development vs production mode.

/// Command the host tool is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Development server.
    Serve,
    /// Production build.
    Build,
}

/// What the plugin produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// DOM injection script served as a virtual module.
    #[default]
    Dev,
    /// Static sprite document, emitted or written once per build.
    Build,
}

impl Mode {
    /// Resolve the mode: an explicit override wins over the host command.
    pub const fn resolve(is_build: Option<bool>, command: HostCommand) -> Self {
        match (is_build, command) {
            (Some(true), _) | (None, HostCommand::Build) => Self::Build,
            (Some(false), _) | (None, HostCommand::Serve) => Self::Dev,
        }
    }

    #[inline]
    pub const fn is_build(self) -> bool {
        matches!(self, Self::Build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inferred_from_command() {
        assert_eq!(Mode::resolve(None, HostCommand::Build), Mode::Build);
        assert_eq!(Mode::resolve(None, HostCommand::Serve), Mode::Dev);
    }

    #[test]
    fn test_override_wins() {
        assert_eq!(Mode::resolve(Some(true), HostCommand::Serve), Mode::Build);
        assert_eq!(Mode::resolve(Some(false), HostCommand::Build), Mode::Dev);
    }
}
