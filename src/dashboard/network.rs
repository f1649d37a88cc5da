use crate::dashboard::layout::Layout;
use crate::dashboard::panel::Panel;
use crate::dashboard::Requirement;
use crate::utils::runner::CommandRunner;

pub const REQUIREMENTS: &[Requirement] = &[Requirement {
    program: "ufw",
    package: "ufw",
}];

pub const IP_ADDRESSES: &str = "ip -4 -o addr show | awk '{print $1, $2, $3, $4}'";
pub const ROUTES: &str = "ip route show | awk -F 'src' '{print $1}'";
pub const RULES: &str = "ip rule show";
pub const UFW_STATUS: &str = "sudo ufw status verbose";
pub const CONNECTIONS: &str = "netstat -tulpna";
pub const TOP_PROCESSES: &str = "ps aux --sort=-%cpu | head";

pub fn build(runner: &dyn CommandRunner) -> Layout {
    let run = |cmd: &str| runner.run(cmd).text().to_owned();

    let ip_info = run(IP_ADDRESSES);
    let routes = run(ROUTES);
    let rules = run(RULES);
    let ufw = run(UFW_STATUS);
    let connections = run(CONNECTIONS);
    let processes = run(TOP_PROCESSES);

    let ip_panel = Panel::with_sections(
        "IP Information",
        &[
            ("IP Addresses", ip_info.as_str()),
            ("Routing Table", routes.as_str()),
            ("Routing Rules", rules.as_str()),
        ],
    );

    Layout::Column(vec![
        Layout::Row(vec![
            Layout::Panel(ip_panel),
            Layout::Panel(Panel::new("UFW Status", &ufw)),
        ]),
        Layout::Panel(Panel::new("Active Network Connections", &connections)),
        Layout::Panel(Panel::new("Top Processes by CPU Usage", &processes)),
    ])
}
