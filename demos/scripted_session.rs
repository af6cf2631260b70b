//! Scripted session demo: plays a short install-and-run session on the
//! real terminal through the ANSI mount.
//!
//! Run with: cargo run --example scripted_session

use crossterm::{cursor, execute};
use std::io::stdout;
use termscript::{
    compile, AnsiMount, LineDescriptor, Player, PlayerEvent, Sequencer, VisibilityGate,
};

fn main() {
    let script = compile(&[
        LineDescriptor::input("freyja machine create -c examples/myconf.yaml"),
        LineDescriptor::progress(),
        LineDescriptor::text("Create host vm1 ...").with_color("#4bfcd2"),
        LineDescriptor::text("Create host vm2 ...").with_color("#4bfcd2"),
        LineDescriptor::text("Domain creation completed.").with_color("#4bfcd2"),
        LineDescriptor::blank(),
        LineDescriptor::input("freyja machine info"),
        LineDescriptor::text("vm1:").with_color("cyan"),
        LineDescriptor::text("  state: running").with_color("gray"),
        LineDescriptor::text("  vcpus: 2").with_color("gray"),
        LineDescriptor::text("  memory: 4.0 GB").with_color("gray"),
    ]);

    // The demo widget is always on screen, so the gate fires at once.
    let _ = execute!(stdout(), cursor::Hide);

    let player = Player::spawn(
        Sequencer::new(script),
        VisibilityGate::always(),
        AnsiMount::new(stdout()),
    );

    for event in player.events().iter() {
        if matches!(event, PlayerEvent::Finished | PlayerEvent::Cancelled) {
            break;
        }
    }
    player.wait();

    let _ = execute!(stdout(), cursor::Show);
    println!();
}
