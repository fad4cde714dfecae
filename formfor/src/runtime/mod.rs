//! Event-loop plumbing shared by widgets: terminal event conversion, deferred
//! tasks, one-shot listeners and change detection.

pub mod events;
pub mod listeners;
pub mod timer;
pub mod watch;

pub use listeners::{ListenerRegistry, ListenerTarget};
pub use timer::{TimerHandle, TimerQueue};
pub use watch::Watch;
