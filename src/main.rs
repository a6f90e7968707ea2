use leptos::prelude::*;
use topology_panels::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
