//! Process interrupt (SIGINT/SIGTERM) as a shared flag the loop can poll.
//!
//! The handler only raises the flag. The game loop and the terminal input
//! notice it within one wait slice and take the normal quit path, so the
//! terminal guard is dropped and the process exits 0.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Route the process's interrupt and termination signals to this flag.
    /// Can only be done once per process.
    pub fn install_signal_handler(&self) -> io::Result<()> {
        let flag = self.clone();
        ctrlc::set_handler(move || flag.raise())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
    }
}
