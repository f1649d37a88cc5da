use log::{debug, info, warn};
use subprocess::{ExitStatus, Popen, PopenConfig, Redirection};

pub struct CmdResult {
    pub out: String,
    pub err: String,
    pub status: ExitStatus,
}

impl CmdResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Text shown for this command: stdout on success, stderr otherwise.
    pub fn text(&self) -> &str {
        match self.success() {
            true => self.out.trim(),
            false => self.err.trim(),
        }
    }

    fn failed(message: String) -> CmdResult {
        CmdResult {
            out: String::new(),
            err: message,
            status: ExitStatus::Undetermined,
        }
    }
}

/// Runs one shell command line and captures its output.
pub trait CommandRunner {
    fn run(&self, command: &str) -> CmdResult;
}

/// Runs commands through `sh -c`.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> CmdResult {
        debug!("Running `{}`", command);
        let mut p = match Popen::create(
            &["sh", "-c", command],
            PopenConfig {
                stdout: Redirection::Pipe,
                stderr: Redirection::Pipe,
                ..Default::default()
            },
        ) {
            Ok(p) => p,
            Err(e) => return CmdResult::failed(e.to_string()),
        };

        let (out, err) = match p.communicate(None) {
            Ok(streams) => streams,
            Err(e) => {
                let _ = p.terminate();
                return CmdResult::failed(e.to_string());
            }
        };
        let status = match p.wait() {
            Ok(status) => status,
            Err(e) => return CmdResult::failed(e.to_string()),
        };
        if !status.success() {
            warn!("`{}` exited with {:?}", command, status);
        }

        CmdResult {
            out: out.unwrap_or_default(),
            err: err.unwrap_or_default(),
            status,
        }
    }
}

pub fn is_installed(runner: &dyn CommandRunner, program: &str) -> bool {
    runner.run(&format!("command -v {}", program)).success()
}

/// Installs `program` with `install_command` unless it is already on the PATH.
pub fn ensure_installed(runner: &dyn CommandRunner, program: &str, install_command: &str) {
    if is_installed(runner, program) {
        debug!("{} is already installed", program);
        return;
    }
    info!("Installing {}...", program);
    let result = runner.run(install_command);
    match result.success() {
        true => info!("Installed {}", program),
        false => warn!("Failed to install {}: {}", program, result.text()),
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeRunner;
    use super::*;

    #[test]
    fn text_is_stdout_on_success() {
        let result = CmdResult {
            out: "  host\n".to_owned(),
            err: "noise".to_owned(),
            status: ExitStatus::Exited(0),
        };
        assert_eq!(result.text(), "host");
    }

    #[test]
    fn text_is_stderr_on_failure() {
        let result = CmdResult {
            out: "partial".to_owned(),
            err: "permission denied\n".to_owned(),
            status: ExitStatus::Exited(1),
        };
        assert_eq!(result.text(), "permission denied");
    }

    #[test]
    fn shell_runner_captures_output() {
        let result = ShellRunner.run("echo hello; echo oops 1>&2");
        assert!(result.success());
        assert_eq!(result.text(), "hello");
        assert_eq!(result.err.trim(), "oops");
    }

    #[test]
    fn shell_runner_reports_failure_text() {
        let result = ShellRunner.run("echo broken 1>&2; exit 3");
        assert!(!result.success());
        assert_eq!(result.text(), "broken");
    }

    #[test]
    fn ensure_installed_skips_present_program() {
        let runner = FakeRunner::default().respond("command -v ufw", "/usr/sbin/ufw", "", 0);
        ensure_installed(&runner, "ufw", "sudo apt-get install -y ufw");
        assert_eq!(*runner.calls.borrow(), vec!["command -v ufw".to_owned()]);
    }

    #[test]
    fn ensure_installed_runs_install_command() {
        let runner = FakeRunner::default();
        ensure_installed(&runner, "rkhunter", "sudo apt-get install -y rkhunter");
        assert_eq!(
            *runner.calls.borrow(),
            vec![
                "command -v rkhunter".to_owned(),
                "sudo apt-get install -y rkhunter".to_owned()
            ]
        );
    }
}
