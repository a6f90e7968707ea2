/// A selectable column name from [`COLUMN_OPTIONS`].
pub type ColumnOption = &'static str;

/// Every column the filter panel offers, in display order.
pub const COLUMN_OPTIONS: [ColumnOption; 23] = [
	"Access modes",
	"Iqn",
	"Logical Sector Size",
	"Lowest Temperature",
	"Model",
	"Percent Endurance Used",
	"Physical Sector Size",
	"Provisioner",
	"Replication Factor",
	"Rotation Rate",
	"Serial",
	"Storage class",
	"Storage driver",
	"Total Bytes Written",
	"Type",
	"Vendor",
	"Volume",
	"Iops(R)",
	"Iops(W)",
	"Latency(R)",
	"Latency(W)",
	"Throughput(R)",
	"Throughput(W)",
];

/// Columns the viewer shows before the user commits anything.
pub const DEFAULT_COMMITTED_COLUMNS: [&str; 29] = [
	"docker_container_ports",
	"Current Temperature",
	"Device Utilization Rate",
	"docker_container_id",
	"docker_image_id",
	"docker_container_command",
	"docker_container_networks",
	"Firmware Revision",
	"Memory",
	"Load (1m)",
	"CPU",
	"Highest Temperature",
	"Capacity",
	"State",
	"Volume claim",
	"Status",
	"# Threads",
	"Command",
	"PID",
	"Parent PID",
	"Created",
	"IPs",
	"Image name",
	"Image tag",
	"Restart #",
	"Uptime",
	"IP",
	"Namespace",
	"Observed gen.",
];

/// Looks a name up in the catalog, returning the catalog's own `'static` copy.
pub fn lookup(name: &str) -> Option<ColumnOption> {
	COLUMN_OPTIONS.into_iter().find(|option| *option == name)
}
