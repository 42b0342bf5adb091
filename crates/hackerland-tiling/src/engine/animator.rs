//! The `hackerland-anim` thread.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::shared::Shared;

pub(super) fn spawn(shared: Arc<Shared>) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("hackerland-anim".into())
        .spawn(move || run(&shared))
}

fn run(shared: &Shared) {
    info!("animation thread started");
    let mut last = Instant::now();

    while !shared.stop.load(Ordering::Acquire) {
        let period = shared.tick_ms.load(Ordering::Relaxed).max(1);
        std::thread::sleep(Duration::from_millis(period));

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f64();
        last = now;

        shared.host.invoke_under_lock(&mut || shared.tick(dt));
    }

    debug!("animation thread exiting");
}
