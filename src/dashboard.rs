//! Text dashboards built from the output of system administration commands.

pub mod layout;
pub mod network;
pub mod panel;
pub mod system;

use crate::utils::runner::{ensure_installed, CommandRunner};

/// A program the dashboard depends on and the package providing it.
pub struct Requirement {
    pub program: &'static str,
    pub package: &'static str,
}

pub fn install_requirements(
    runner: &dyn CommandRunner,
    requirements: &[Requirement],
    install_command: &str,
) {
    for req in requirements {
        ensure_installed(runner, req.program, &install_command.replace("{}", req.package));
    }
}
