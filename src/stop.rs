use core::sync::atomic::{AtomicBool, Ordering};

/// Checked by the runners between loop iterations.
pub trait StopSignal {
    fn should_stop(&self) -> bool;
}

/// Stop request that can be raised from another context.
#[derive(Debug, Default)]
pub struct StopFlag(AtomicBool);

impl StopFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }
}

impl StopSignal for StopFlag {
    fn should_stop(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl<S: StopSignal + ?Sized> StopSignal for &S {
    fn should_stop(&self) -> bool {
        (**self).should_stop()
    }
}
