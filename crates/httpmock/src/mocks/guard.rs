//! Scoped interception.

use crate::mocks::controller::InterceptionController;
use parking_lot::MutexGuard;

/// Keeps a controller active for as long as it lives.
///
/// Creating a guard takes exclusive ownership of the controller, then activates it. Dropping
/// the guard deactivates the controller on every exit path, including a panicking test, and
/// releases ownership. Test threads that acquire guards on the same controller therefore
/// run one after another instead of swapping the shared transport under each other.
///
/// Acquiring a second guard on the same controller from the thread that already holds one
/// deadlocks.
#[must_use = "interception ends when the guard is dropped"]
pub struct InterceptionGuard<'a> {
    controller: &'a InterceptionController,
    _owner: MutexGuard<'a, ()>,
}

impl InterceptionGuard<'static> {
    /// Guard over the process-wide controller driving the default client.
    pub fn acquire() -> Self {
        Self::new(InterceptionController::global())
    }
}

impl<'a> InterceptionGuard<'a> {
    pub(crate) fn new(controller: &'a InterceptionController) -> Self {
        let owner = controller.owner.lock();
        controller.activate();
        Self {
            controller,
            _owner: owner,
        }
    }

    pub fn controller(&self) -> &'a InterceptionController {
        self.controller
    }
}

impl Drop for InterceptionGuard<'_> {
    fn drop(&mut self) {
        self.controller.deactivate();
    }
}
