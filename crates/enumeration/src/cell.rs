//! Compute-once storage for a published registry.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::error::Result;
use crate::index::Registry;
use crate::traits::Enumeration;

/// Process-wide slot holding one enumeration's [`Registry`].
///
/// The slot moves from empty to built exactly once. Callers racing on the first access
/// serialize on a build gate: one runs the build while the others wait, then all of
/// them read the published registry. A failed build leaves the slot empty, so the next
/// caller that acquires the gate builds again and observes the same error.
///
/// After publication, [`get_or_try_init`](Self::get_or_try_init) is a single atomic
/// load.
pub struct RegistryCell<T: Enumeration> {
	slot: OnceLock<Registry<T>>,
	gate: Mutex<()>,
	attempts: AtomicUsize,
}

impl<T: Enumeration> RegistryCell<T> {
	/// Creates an empty cell; usable in `static` items.
	pub const fn new() -> Self {
		Self {
			slot: OnceLock::new(),
			gate: parking_lot::const_mutex(()),
			attempts: AtomicUsize::new(0),
		}
	}

	/// Returns the registry if it has been published.
	#[inline]
	pub fn get(&self) -> Option<&Registry<T>> {
		self.slot.get()
	}

	/// Returns true once a build has succeeded.
	#[inline]
	pub fn is_built(&self) -> bool {
		self.slot.get().is_some()
	}

	/// Number of times a build has been started in this cell.
	pub fn build_attempts(&self) -> usize {
		self.attempts.load(Ordering::Acquire)
	}

	/// Returns the published registry, running `build` if there is none yet.
	///
	/// # Errors
	///
	/// Returns whatever `build` returns; the error is not cached.
	pub fn get_or_try_init<F>(&self, build: F) -> Result<&Registry<T>>
	where
		F: FnOnce() -> Result<Registry<T>>,
	{
		if let Some(registry) = self.slot.get() {
			return Ok(registry);
		}

		let _gate = self.gate.lock();
		if let Some(registry) = self.slot.get() {
			return Ok(registry);
		}

		self.attempts.fetch_add(1, Ordering::AcqRel);
		match build() {
			Ok(registry) => Ok(self.slot.get_or_init(|| registry)),
			Err(e) => {
				tracing::error!(enumeration = T::TYPE_NAME, error = %e, "enumeration registry build failed");
				Err(e)
			}
		}
	}
}

impl<T: Enumeration> Default for RegistryCell<T> {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Barrier;

	use super::*;
	use crate::{EnumerationError, Member, RegistryBuilder};

	struct Probe {
		meta: Member<u32>,
	}

	crate::enumeration!(Probe, id: u32, members: [PROBE_A, PROBE_B]);

	static PROBE_A: Probe = Probe { meta: Member::new(1, "a") };
	static PROBE_B: Probe = Probe { meta: Member::new(2, "b") };

	fn build_probe() -> Result<Registry<Probe>> {
		RegistryBuilder::new("Probe").extend([&PROBE_A, &PROBE_B]).build()
	}

	#[test]
	fn builds_once_and_reuses() {
		let cell = RegistryCell::<Probe>::new();
		assert!(cell.get().is_none());

		let first = cell.get_or_try_init(build_probe).expect("build");
		let second = cell.get_or_try_init(|| panic!("must not rebuild")).expect("cached");

		assert!(std::ptr::eq(first, second));
		assert_eq!(cell.build_attempts(), 1);
		assert!(cell.is_built());
	}

	#[test]
	fn failed_build_is_not_cached() {
		let cell = RegistryCell::<Probe>::new();
		let fail = || {
			Err(EnumerationError::InvalidMember {
				enumeration: "Probe",
				id: "0".into(),
			})
		};

		assert!(cell.get_or_try_init(fail).is_err());
		assert!(cell.get_or_try_init(fail).is_err());
		assert_eq!(cell.build_attempts(), 2);
		assert!(!cell.is_built());

		cell.get_or_try_init(build_probe).expect("recovers once members are valid");
		assert_eq!(cell.build_attempts(), 3);
	}

	#[test]
	fn concurrent_first_access_builds_once() {
		const THREADS: usize = 16;
		let cell = RegistryCell::<Probe>::new();
		let barrier = Barrier::new(THREADS);

		let seen: Vec<usize> = std::thread::scope(|s| {
			let handles: Vec<_> = (0..THREADS)
				.map(|_| {
					let (barrier, cell) = (&barrier, &cell);
					s.spawn(move || {
						barrier.wait();
						let registry = cell.get_or_try_init(build_probe).expect("build");
						registry as *const Registry<Probe> as usize
					})
				})
				.collect();
			handles.into_iter().map(|h| h.join().expect("thread")).collect()
		});

		assert_eq!(cell.build_attempts(), 1);
		assert!(seen.windows(2).all(|w| w[0] == w[1]));
		assert_eq!(cell.get().map(Registry::len), Some(2));
	}
}
