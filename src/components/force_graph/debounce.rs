//! Settle-latest text channel.
//!
//! The editor pushes the complete text buffer on every keystroke; reparsing
//! and relaying the graph that often is wasted work and makes the layout
//! jitter. [`TextDebouncer`] coalesces a burst of pushes into one settled
//! value: each push cancels the pending timer and starts a new one, and only
//! a timer that is still current when it fires publishes its value.

use std::time::Duration;

use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use leptos::prelude::*;

/// Quiet period a value must survive before it is considered settled.
pub const SETTLE_DELAY: Duration = Duration::from_millis(400);

/// Monotonic token issue/check for superseding timers.
///
/// Every push arms the gate and gets a fresh token; a timer publishes only
/// if its token is still the current one. This makes the ordering guarantee
/// (a stale value never lands after a newer push) hold even if a cleared
/// browser timeout were to fire anyway.
#[derive(Debug, Default)]
pub(crate) struct SettleGate {
	current: u64,
}

impl SettleGate {
	/// Invalidate all outstanding tokens and issue a new one.
	pub fn arm(&mut self) -> u64 {
		self.current = self.current.wrapping_add(1);
		self.current
	}

	/// Whether `token` is the most recently issued one.
	pub fn is_current(&self, token: u64) -> bool {
		self.current == token
	}
}

/// Debounced text channel backed by leptos signals and browser timeouts.
///
/// `new` publishes the initial value immediately; afterwards the settled
/// signal only changes [`SETTLE_DELAY`] (or the given delay) after the last
/// push.
#[derive(Clone, Copy)]
pub struct TextDebouncer {
	settled: RwSignal<String>,
	pending: StoredValue<Option<TimeoutHandle>>,
	gate: StoredValue<SettleGate>,
	delay: Duration,
}

impl TextDebouncer {
	/// Channel with the given initial value and quiet period.
	pub fn new(initial: String, delay: Duration) -> Self {
		Self {
			settled: RwSignal::new(initial),
			pending: StoredValue::new(None),
			gate: StoredValue::new(SettleGate::default()),
			delay,
		}
	}

	/// The latest settled value.
	pub fn settled(&self) -> ReadSignal<String> {
		self.settled.read_only()
	}

	/// Push a new raw value, cancelling any pending emission.
	pub fn push(&self, text: String) {
		let mut token = 0;
		self.gate.update_value(|g| token = g.arm());
		self.pending.update_value(|p| {
			if let Some(handle) = p.take() {
				handle.clear();
			}
		});

		let (settled, pending, gate) = (self.settled, self.pending, self.gate);
		let scheduled = set_timeout_with_handle(
			move || {
				if gate.with_value(|g| g.is_current(token)) {
					pending.set_value(None);
					settled.set(text);
				}
			},
			self.delay,
		);
		match scheduled {
			Ok(handle) => self.pending.set_value(Some(handle)),
			Err(e) => log::warn!("graphpad: failed to schedule settle timer: {:?}", e),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn newer_push_supersedes_older_token() {
		// Pushes at t=0, 100, 200: the first two timers must not publish.
		let mut gate = SettleGate::default();
		let t0 = gate.arm();
		let t100 = gate.arm();
		let t200 = gate.arm();
		assert!(!gate.is_current(t0));
		assert!(!gate.is_current(t100));
		assert!(gate.is_current(t200));
	}

	#[test]
	fn single_push_settles_exactly_once() {
		let mut gate = SettleGate::default();
		let token = gate.arm();
		assert!(gate.is_current(token));
		// The timer fired and a later push re-armed: the old token is dead.
		let next = gate.arm();
		assert!(!gate.is_current(token));
		assert!(gate.is_current(next));
	}

	#[test]
	fn tokens_stay_monotonic_across_many_pushes() {
		let mut gate = SettleGate::default();
		let tokens: Vec<u64> = (0..50).map(|_| gate.arm()).collect();
		for stale in &tokens[..49] {
			assert!(!gate.is_current(*stale));
		}
		assert!(gate.is_current(tokens[49]));
	}
}
