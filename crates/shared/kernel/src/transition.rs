//! Enter/exit state machine for CSS-class driven transitions.
//!
//! The machine only decides which phase a wrapper is in and which classes it carries. The
//! caller owns the clock: whenever [`Transition::set_in`] returns a generation, sleep for
//! [`Transition::timeout`] and hand the generation back to [`Transition::complete`].

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionPhase {
    /// Not rendered at all (`mount_on_enter` before the first enter, `unmount_on_exit` after
    /// an exit).
    Unmounted,
    Exited,
    Entering,
    Entered,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionOptions {
    pub timeout: Duration,
    pub mount_on_enter: bool,
    pub unmount_on_exit: bool,
}

impl TransitionOptions {
    /// Keeps the wrapper mounted in every phase.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout, mount_on_enter: false, unmount_on_exit: false }
    }

    /// Mounts on enter and unmounts once the exit finished.
    #[must_use]
    pub const fn mount_on_demand(timeout: Duration) -> Self {
        Self { timeout, mount_on_enter: true, unmount_on_exit: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    phase: TransitionPhase,
    options: TransitionOptions,
    generation: u64,
    has_exited: bool,
}

impl Transition {
    /// Starts settled: `Entered` when `is_in`, otherwise `Exited` (or `Unmounted` with
    /// `mount_on_enter`). There is no appear animation.
    #[must_use]
    pub const fn new(is_in: bool, options: TransitionOptions) -> Self {
        let phase = if is_in {
            TransitionPhase::Entered
        } else if options.mount_on_enter {
            TransitionPhase::Unmounted
        } else {
            TransitionPhase::Exited
        };
        Self { phase, options, generation: 0, has_exited: false }
    }

    #[must_use]
    pub const fn phase(&self) -> TransitionPhase {
        self.phase
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.options.timeout
    }

    #[must_use]
    pub const fn options(&self) -> TransitionOptions {
        self.options
    }

    /// Whether the wrapped content should be rendered.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase != TransitionPhase::Unmounted
    }

    /// Points the transition at `is_in`.
    ///
    /// Returns the generation to complete after the timeout when a new enter or exit
    /// started, `None` when the transition already heads that way.
    pub fn set_in(&mut self, is_in: bool) -> Option<u64> {
        let next = match (is_in, self.phase) {
            (true, TransitionPhase::Unmounted | TransitionPhase::Exited | TransitionPhase::Exiting) => {
                TransitionPhase::Entering
            }
            (false, TransitionPhase::Entering | TransitionPhase::Entered) => TransitionPhase::Exiting,
            _ => return None,
        };

        self.phase = next;
        self.generation = self.generation.wrapping_add(1);
        tracing::trace!(phase = ?next, generation = self.generation, "transition started");
        Some(self.generation)
    }

    /// Settles the transition started as `generation`.
    ///
    /// Completions from superseded transitions are ignored. Returns `true` when the phase
    /// changed.
    pub fn complete(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::trace!(generation, current = self.generation, "stale transition timer ignored");
            return false;
        }

        self.phase = match self.phase {
            TransitionPhase::Entering => TransitionPhase::Entered,
            TransitionPhase::Exiting => {
                self.has_exited = true;
                if self.options.unmount_on_exit {
                    TransitionPhase::Unmounted
                } else {
                    TransitionPhase::Exited
                }
            }
            _ => return false,
        };
        true
    }

    /// Classes for the wrapper, following the `<prefix>-enter`, `<prefix>-enter-active`,
    /// `<prefix>-enter-done`, `<prefix>-exit`, `<prefix>-exit-active`, `<prefix>-exit-done`
    /// convention. Empty before the first transition.
    #[must_use]
    pub fn class_names(&self, prefix: &str) -> String {
        match self.phase {
            TransitionPhase::Entering => format!("{prefix}-enter {prefix}-enter-active"),
            TransitionPhase::Entered if self.generation > 0 => format!("{prefix}-enter-done"),
            TransitionPhase::Exiting => format!("{prefix}-exit {prefix}-exit-active"),
            TransitionPhase::Exited if self.has_exited => format!("{prefix}-exit-done"),
            _ => String::new(),
        }
    }
}
