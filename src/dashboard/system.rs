use crate::dashboard::layout::Layout;
use crate::dashboard::panel::Panel;
use crate::dashboard::Requirement;
use crate::utils::runner::CommandRunner;

pub const REQUIREMENTS: &[Requirement] = &[
    Requirement {
        program: "clamscan",
        package: "clamav",
    },
    Requirement {
        program: "rkhunter",
        package: "rkhunter",
    },
];

pub const SYSTEM_INFO: &str = "hostnamectl";
pub const LIMITED_SUPPORT: &str =
    "sudo check-support-status | grep 'Source:' | awk -F 'Source:' '{print $2}' | tr -d ' '";
pub const USERS: &str = r"getent passwd | awk -F: '$7 ~ /(\/bin\/bash|\/bin\/sh)/ {print $1}'";
pub const SUDO_USERS: &str = r"grep -Po '^sudo.+:\K.*$' /etc/group";
pub const GROUPS: &str = "getent group | awk -F: '$3 >= 1000 {print $1}'";
pub const LOGIN_HISTORY: &str =
    "last | awk '!/reboot/ {print $1, $2, $3, $4, $5, $6, $7, $8, $9, $10}'";
pub const CLAMAV_SCAN: &str = "clamscan -i -r";
pub const RKHUNTER_SCAN: &str =
    "sudo rkhunter --check -q --sk --propupd; sudo grep -E 'Warning:' /var/log/rkhunter.log";

pub fn build(runner: &dyn CommandRunner) -> Layout {
    let run = |cmd: &str| runner.run(cmd).text().to_owned();

    let system_info = run(SYSTEM_INFO);
    let limited_support = run(LIMITED_SUPPORT);
    let users = run(USERS);
    let sudo_users = run(SUDO_USERS);
    let groups = run(GROUPS);
    let logins = run(LOGIN_HISTORY);
    let clamav = run(CLAMAV_SCAN);
    let rkhunter = run(RKHUNTER_SCAN);

    let sysinfo_panel = Panel::with_sections(
        "System Info",
        &[
            ("System Information", system_info.as_str()),
            ("Limited Security Support Packages", limited_support.as_str()),
        ],
    );
    let users_panel = Panel::with_sections(
        "Users",
        &[("Users", users.as_str()), ("Sudo Users", sudo_users.as_str())],
    );

    Layout::Column(vec![
        Layout::Row(vec![
            Layout::Panel(sysinfo_panel),
            Layout::Row(vec![
                Layout::Panel(users_panel),
                Layout::Panel(Panel::new("Groups", &groups)),
            ]),
        ]),
        Layout::Row(vec![
            Layout::Panel(Panel::new("Recent Logins", &logins)),
            Layout::Panel(Panel::new("ClamAV Scan Results", &clamav)),
        ]),
        Layout::Panel(Panel::new("Rkhunter Warnings", &rkhunter).fixed_height(10)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::runner::fake::FakeRunner;

    #[test]
    fn panels_show_command_output() {
        let runner = FakeRunner::default()
            .respond(SYSTEM_INFO, "Static hostname: box\n", "", 0)
            .respond(USERS, "root\nalice\n", "", 0)
            .respond(SUDO_USERS, "alice\n", "", 0)
            .respond(GROUPS, "alice\n", "", 0)
            .respond(CLAMAV_SCAN, "", "clamscan: not permitted\n", 2)
            .respond(RKHUNTER_SCAN, "Warning: suspicious file\n", "", 0);
        let lines = build(&runner).render(120, false);
        let screen = lines.join("\n");

        assert!(lines.iter().all(|l| l.chars().count() == 120));
        for expected in [
            "System Info",
            "Static hostname: box",
            "Limited Security Support Packages:",
            "Sudo Users:",
            "Recent Logins",
            "clamscan: not permitted",
            "Rkhunter Warnings",
            "Warning: suspicious file",
        ] {
            assert!(screen.contains(expected), "missing {:?}", expected);
        }
    }

    #[test]
    fn every_command_runs_once() {
        let runner = FakeRunner::default();
        build(&runner);
        assert_eq!(
            *runner.calls.borrow(),
            vec![
                SYSTEM_INFO,
                LIMITED_SUPPORT,
                USERS,
                SUDO_USERS,
                GROUPS,
                LOGIN_HISTORY,
                CLAMAV_SCAN,
                RKHUNTER_SCAN
            ]
        );
    }

    #[test]
    fn rkhunter_panel_is_ten_lines() {
        let runner = FakeRunner::default();
        let lines = build(&runner).render(80, false);
        let start = lines
            .iter()
            .position(|l| l.contains("Rkhunter Warnings"))
            .unwrap();
        assert_eq!(lines.len() - start, 10);
    }
}
