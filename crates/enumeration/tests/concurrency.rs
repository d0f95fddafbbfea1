//! Concurrent first access builds each registry exactly once.

use std::sync::Barrier;

use roster_enumeration::{Enumeration, Member, Registry, enumeration};

const THREADS: usize = 32;

#[derive(Debug)]
pub struct Planet {
	meta: Member<u16>,
}

impl Planet {
	const fn new(id: u16, name: &'static str) -> Self {
		Self {
			meta: Member::new(id, name),
		}
	}
}

static MERCURY: Planet = Planet::new(1, "Mercury");
static VENUS: Planet = Planet::new(2, "Venus");
static EARTH: Planet = Planet::new(3, "Earth");
static MARS: Planet = Planet::new(4, "Mars");

enumeration!(Planet, id: u16, members: [MERCURY, VENUS, EARTH, MARS]);

#[derive(Debug)]
pub struct Broken {
	meta: Member<u16>,
}

static BROKEN_A: Broken = Broken {
	meta: Member::new(1, "Twin"),
};
static BROKEN_B: Broken = Broken {
	meta: Member::new(2, "Twin"),
};

enumeration!(Broken, id: u16, members: [BROKEN_A, BROKEN_B]);

fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_max_level(tracing::Level::TRACE)
		.with_test_writer()
		.try_init();
}

#[test]
fn racing_first_lookups_share_one_build() {
	init_tracing();
	let barrier = Barrier::new(THREADS);

	let seen: Vec<(usize, u16)> = std::thread::scope(|s| {
		let handles: Vec<_> = (0..THREADS)
			.map(|i| {
				let barrier = &barrier;
				s.spawn(move || {
					barrier.wait();
					let planet = if i % 2 == 0 {
						Planet::from_name("earth", true).expect("declared")
					} else {
						Planet::from_id(&3).expect("declared")
					};
					(Planet::registry() as *const Registry<Planet> as usize, *planet.id())
				})
			})
			.collect();
		handles.into_iter().map(|h| h.join().expect("lookup thread")).collect()
	});

	assert_eq!(Planet::registry_cell().build_attempts(), 1);
	assert!(seen.windows(2).all(|w| w[0] == w[1]));
	assert!(seen.iter().all(|&(_, id)| id == 3));
}

#[test]
fn racing_failed_builds_all_observe_the_error() {
	init_tracing();
	let barrier = Barrier::new(THREADS);

	let failures = std::thread::scope(|s| {
		let handles: Vec<_> = (0..THREADS)
			.map(|_| {
				let barrier = &barrier;
				s.spawn(move || {
					barrier.wait();
					Broken::try_registry().is_err_and(|e| e.is_structural())
				})
			})
			.collect();
		handles
			.into_iter()
			.map(|h| h.join().expect("lookup thread"))
			.filter(|&failed| failed)
			.count()
	});

	assert_eq!(failures, THREADS);
	assert_eq!(Broken::registry_cell().build_attempts(), THREADS);
	assert!(!Broken::registry_cell().is_built());
}
