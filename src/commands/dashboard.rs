use crate::dashboard::layout::{header, Layout};
use crate::dashboard::{install_requirements, network, system, Requirement};
use crate::utils::config::AppConfig;
use crate::utils::error::Result;
use crate::utils::runner::{CommandRunner, ShellRunner};
use crate::utils::tools::wait_for_enter;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::info;
use std::io::{stdin, stdout, BufRead, IsTerminal, Write};

pub fn command() -> Command<'static> {
    Command::new("dashboard")
        .about("Show system and network state of this host")
        .arg(
            Arg::new("no-install")
                .long("no-install")
                .action(ArgAction::SetTrue)
                .help("Do not install missing scanners"),
        )
        .arg(
            Arg::new("no-pause")
                .long("no-pause")
                .action(ArgAction::SetTrue)
                .help("Show both dashboards without waiting for Enter"),
        )
}

pub struct DashboardOptions {
    pub width: usize,
    /// Install command template, `None` skips installation.
    pub install_command: Option<String>,
    pub pause: bool,
    pub styled: bool,
}

fn show<W: Write>(
    runner: &dyn CommandRunner,
    options: &DashboardOptions,
    title: &str,
    requirements: &[Requirement],
    build: fn(&dyn CommandRunner) -> Layout,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{}", header(title, options.width, options.styled))?;
    if let Some(install_command) = &options.install_command {
        install_requirements(runner, requirements, install_command);
    }
    info!("Collecting {}", title);
    for line in build(runner).render(options.width, options.styled) {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}

pub fn render<R: BufRead, W: Write>(
    runner: &dyn CommandRunner,
    options: &DashboardOptions,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    show(
        runner,
        options,
        "System Dashboard",
        system::REQUIREMENTS,
        system::build,
        output,
    )?;
    if options.pause {
        wait_for_enter(input, output, "Press Enter to proceed to the Network Dashboard...")?;
    }
    show(
        runner,
        options,
        "Network Dashboard",
        network::REQUIREMENTS,
        network::build,
        output,
    )
}

pub fn main(cmd: &ArgMatches, config: &AppConfig) -> Result<()> {
    let skip_install = cmd.get_one::<bool>("no-install").copied().unwrap_or(false);
    let options = DashboardOptions {
        width: config.dashboard.width,
        install_command: match config.dashboard.auto_install && !skip_install {
            true => Some(config.dashboard.install_command.clone()),
            false => None,
        },
        pause: !cmd.get_one::<bool>("no-pause").copied().unwrap_or(false),
        styled: stdout().is_terminal(),
    };
    render(&ShellRunner, &options, &mut stdin().lock(), &mut stdout())
}
