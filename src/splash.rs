use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Fallback delay before the pipeline fires when nobody skips the splash.
pub const BOOT_DURATION: Duration = Duration::from_millis(4500);

const BOOT_LINES: &[&str] = &[
    "Initializing portfolio terminal...",
    "Loading kernel modules............ OK",
    "Mounting /dev/projects............ OK",
    "Starting network services......... OK",
];

/// One-shot latch guarding the single pipeline invocation. The boot timer
/// and the user skip are alternate wakeup paths to the same call; both
/// funnel through `try_fire`, and only the first caller gets `true`.
#[derive(Default)]
pub struct FireOnce(AtomicBool);

impl FireOnce {
    pub fn new() -> Self {
        FireOnce(AtomicBool::new(false))
    }

    /// Claim the trigger. Returns `true` exactly once per latch.
    pub fn try_fire(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }

    pub fn has_fired(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Show the boot banner, then wait until either the boot timer expires or
/// the user skips (any input on stdin), whichever settles first.
pub async fn boot_splash() {
    for line in BOOT_LINES {
        println!("{}", line.green());
    }
    println!("{}", "[ press Enter to skip ]".dimmed());

    tokio::select! {
        _ = tokio::time::sleep(BOOT_DURATION) => {
            debug!("boot timer expired");
        }
        _ = wait_for_skip() => {
            debug!("boot splash skipped");
        }
    }
}

async fn wait_for_skip() {
    let mut buf = [0u8; 1];
    // An error (e.g. closed stdin on EOF) also counts as a skip; the timer
    // still bounds the wait either way.
    let _ = tokio::io::stdin().read(&mut buf).await;
}
