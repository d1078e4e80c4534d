//! Terminal rendering: status lines and the rescuer table.

use ss_output::{OutputWriter, SwarmOutputObserver};
use ss_sim::{Rescuer, ResponseSnapshot, Swarm, SwarmObserver};

/// Width of the episode progress bar, in cells.
const BAR_CELLS: usize = 20;

/// Prints the episode to stdout and forwards every event to an output
/// writer.
pub struct ConsoleObserver<W: OutputWriter> {
    pub inner: SwarmOutputObserver<W>,
    verbose:   bool,
}

impl<W: OutputWriter> ConsoleObserver<W> {
    pub fn new(inner: SwarmOutputObserver<W>, verbose: bool) -> Self {
        Self { inner, verbose }
    }
}

impl<W: OutputWriter> SwarmObserver for ConsoleObserver<W> {
    fn on_activate(&mut self, swarm: &Swarm, snapshot: &ResponseSnapshot) {
        println!("🚨 PANIC DETECTED! Rescuers are en route.");
        println!("Emergency detected. Alerts sent to {} rescuers.", swarm.rescuers().len());
        println!();
        print_table(swarm);
        println!();
        self.inner.on_activate(swarm, snapshot);
    }

    fn on_arrival(&mut self, rescuer: &Rescuer, elapsed: f64) {
        println!("{} {} arrived after {elapsed:.1} s", rescuer.status.marker(), rescuer.id);
        self.inner.on_arrival(rescuer, elapsed);
    }

    fn on_tick(&mut self, swarm: &Swarm, snapshot: &ResponseSnapshot) {
        if self.verbose {
            println!("{}", status_line(swarm));
        }
        self.inner.on_tick(swarm, snapshot);
    }

    fn on_episode_end(&mut self, swarm: &Swarm) {
        println!();
        print_table(swarm);
        self.inner.on_episode_end(swarm);
    }

    fn on_reset(&mut self, swarm: &Swarm) {
        println!("🕊️ System idle. Awaiting emergency trigger.");
        self.inner.on_reset(swarm);
    }
}

/// One-line panel: progress bar, arrivals, closest ETA.
pub fn status_line(swarm: &Swarm) -> String {
    let s = swarm.summary();
    let filled = (s.progress * BAR_CELLS as f64).round() as usize;
    format!(
        "[{:>5.1}s] {}{}  responding {}/{}  arrived {}/{}  closest ETA {:.1} min",
        s.elapsed,
        "█".repeat(filled),
        "░".repeat(BAR_CELLS - filled),
        s.responding,
        s.total,
        s.arrived,
        s.total,
        s.closest_eta,
    )
}

/// Rescuer table: name, status, ETA, distance, direction to the victim.
pub fn print_table(swarm: &Swarm) {
    let victim = swarm.victim();
    println!(
        "{:<12} {:<14} {:<10} {:<10} {:<4}",
        "Rescuer", "Status", "ETA", "Distance", "Dir"
    );
    println!("{}", "-".repeat(54));
    for r in swarm.rescuers() {
        println!(
            "{:<12} {:<14} {:<10} {:<10} {:<4}",
            r.id.to_string(),
            format!("{} {}", r.status.marker(), r.status),
            r.eta_label(),
            format!("{:.2} km", r.distance),
            r.bearing_to(victim).arrow(),
        );
    }
}
