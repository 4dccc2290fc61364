use std::time::Duration;

use bevy::prelude::*;
use constants::flicker::{FLICKER_DURATION_MS, FLICKER_INTERVAL_MS};
use rand::Rng;

use crate::engine::emissive::EmissiveLimits;
use crate::engine::scene::sign_meshes::{MeshId, SignMeshes};

/// Cadence and length of the power-up flicker.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct FlickerTiming {
    pub interval: Duration,
    pub duration: Duration,
}

impl Default for FlickerTiming {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(FLICKER_INTERVAL_MS),
            duration: Duration::from_millis(FLICKER_DURATION_MS),
        }
    }
}

impl FlickerTiming {
    /// Ticks needed before `ticks * interval` reaches the duration.
    pub fn total_ticks(&self) -> u32 {
        let interval = self.interval.as_millis().max(1);
        u32::try_from(self.duration.as_millis().div_ceil(interval)).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlickerPhase {
    Idle,
    Running,
    Done,
}

/// Result of advancing the sequencer by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlickerStatus {
    /// Not started, or finished in an earlier frame.
    Inactive,
    Running,
    /// The last tick fired during this advance. Reported once.
    Finished,
}

/// A deferred write back to the dimmed floor.
#[derive(Debug)]
struct PendingRestore {
    mesh: MeshId,
    timer: Timer,
}

/// One-shot power-up sequence that pulses random sign meshes on a fixed cadence.
///
/// Owns its repeating tick timer and every outstanding restore, so dropping or
/// cancelling the sequencer releases all of them.
#[derive(Resource, Debug)]
pub struct FlickerSequencer {
    timing: FlickerTiming,
    phase: FlickerPhase,
    ticker: Option<Timer>,
    ticks: u32,
    pending: Vec<PendingRestore>,
}

impl FlickerSequencer {
    pub fn new(timing: FlickerTiming) -> Self {
        Self {
            timing,
            phase: FlickerPhase::Idle,
            ticker: None,
            ticks: 0,
            pending: Vec::new(),
        }
    }

    pub fn phase(&self) -> FlickerPhase {
        self.phase
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn pending_restores(&self) -> usize {
        self.pending.len()
    }

    /// Arm the repeating timer. Only valid from `Idle`; the sequence cannot be restarted.
    pub fn start(&mut self) -> bool {
        if self.phase != FlickerPhase::Idle {
            return false;
        }
        self.ticker = Some(Timer::new(self.timing.interval, TimerMode::Repeating));
        self.ticks = 0;
        self.phase = FlickerPhase::Running;
        true
    }

    /// Drop the repeating timer and every outstanding restore.
    pub fn cancel(&mut self) {
        self.ticker = None;
        self.pending.clear();
        if self.phase == FlickerPhase::Running {
            self.phase = FlickerPhase::Done;
        }
    }

    /// Advance by `delta`: apply restores that came due, then fire every elapsed tick.
    ///
    /// Ticks that fired earlier within a long frame have their restores aged by
    /// the time since they fired, so each pulse still lasts one interval.
    pub fn advance(
        &mut self,
        delta: Duration,
        meshes: &mut SignMeshes,
        limits: &EmissiveLimits,
        rng: &mut impl Rng,
    ) -> FlickerStatus {
        self.apply_due_restores(delta, meshes, limits);

        if self.phase != FlickerPhase::Running {
            return FlickerStatus::Inactive;
        }
        let Some(ticker) = self.ticker.as_mut() else {
            return FlickerStatus::Inactive;
        };

        ticker.tick(delta);
        let fired = ticker.times_finished_this_tick();
        let since_last = ticker.elapsed();

        let mut status = FlickerStatus::Running;
        for k in 0..fired {
            // A restore from an earlier tick of this frame is due before this one fires.
            self.apply_due_restores(Duration::ZERO, meshes, limits);
            let age = since_last + self.timing.interval * (fired - 1 - k);
            self.tick(age, meshes, limits, rng);
            if self.is_complete() {
                self.ticker = None;
                self.phase = FlickerPhase::Done;
                status = FlickerStatus::Finished;
                break;
            }
        }
        self.apply_due_restores(Duration::ZERO, meshes, limits);
        status
    }

    fn is_complete(&self) -> bool {
        self.timing
            .interval
            .checked_mul(self.ticks)
            .is_none_or(|elapsed| elapsed >= self.timing.duration)
    }

    fn tick(
        &mut self,
        age: Duration,
        meshes: &mut SignMeshes,
        limits: &EmissiveLimits,
        rng: &mut impl Rng,
    ) {
        self.ticks += 1;
        if meshes.is_empty() {
            debug!("Flicker tick {} skipped: sign has no meshes", self.ticks);
            return;
        }

        // Sampling with replacement; the same mesh may pulse on consecutive ticks.
        let mesh = MeshId(rng.random_range(0..meshes.len()));
        meshes.set_intensity(mesh, limits.max_intensity, limits);
        let mut timer = Timer::new(self.timing.interval, TimerMode::Once);
        timer.tick(age);
        self.pending.push(PendingRestore { mesh, timer });
        debug!("Flicker tick {} pulsed {:?}", self.ticks, mesh);
    }

    fn apply_due_restores(
        &mut self,
        delta: Duration,
        meshes: &mut SignMeshes,
        limits: &EmissiveLimits,
    ) {
        self.pending.retain_mut(|restore| {
            restore.timer.tick(delta);
            if !restore.timer.finished() {
                return true;
            }
            // Rows removed by teardown make this a no-op.
            meshes.set_intensity(restore.mesh, limits.dimmed, limits);
            false
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::sign_meshes::tests::sign_table;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const INTERVAL: Duration = Duration::from_millis(100);

    fn lit(meshes: &SignMeshes, limits: &EmissiveLimits) -> Vec<MeshId> {
        meshes
            .iter()
            .filter(|(_, mesh)| mesh.emissive.intensity > limits.dimmed)
            .map(|(id, _)| id)
            .collect()
    }

    #[test]
    fn default_timing_needs_seventy_ticks() {
        assert_eq!(FlickerTiming::default().total_ticks(), 70);
    }

    #[test]
    fn runs_exactly_seventy_ticks_then_finishes_once() {
        let limits = EmissiveLimits::default();
        let mut meshes = sign_table(6, &limits);
        let mut rng = SmallRng::seed_from_u64(7);
        let mut sequencer = FlickerSequencer::new(FlickerTiming::default());
        assert!(sequencer.start());

        let mut finished = 0;
        for _ in 0..100 {
            if sequencer.advance(INTERVAL, &mut meshes, &limits, &mut rng)
                == FlickerStatus::Finished
            {
                finished += 1;
            }
        }

        assert_eq!(finished, 1);
        assert_eq!(sequencer.ticks(), 70);
        assert_eq!(sequencer.phase(), FlickerPhase::Done);
        assert!(!sequencer.start());
    }

    #[test]
    fn each_tick_boosts_one_mesh_and_restores_it_one_interval_later() {
        let limits = EmissiveLimits::default();
        let mut meshes = sign_table(6, &limits);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut sequencer = FlickerSequencer::new(FlickerTiming::default());
        sequencer.start();

        for _ in 0..70 {
            sequencer.advance(INTERVAL, &mut meshes, &limits, &mut rng);
            let boosted = lit(&meshes, &limits);
            assert_eq!(boosted.len(), 1);
            assert_eq!(meshes.intensity(boosted[0]), Some(limits.max_intensity));
        }

        // The final pulse dims one interval after the sequence ends.
        assert_eq!(sequencer.pending_restores(), 1);
        assert_eq!(
            sequencer.advance(INTERVAL, &mut meshes, &limits, &mut rng),
            FlickerStatus::Inactive
        );
        assert!(lit(&meshes, &limits).is_empty());
        assert_eq!(sequencer.pending_restores(), 0);
    }

    #[test]
    fn restore_waits_a_full_interval() {
        let limits = EmissiveLimits::default();
        let mut meshes = sign_table(0, &limits);
        let mut rng = SmallRng::seed_from_u64(1);
        let mut sequencer = FlickerSequencer::new(FlickerTiming::default());
        sequencer.start();

        sequencer.advance(INTERVAL, &mut meshes, &limits, &mut rng);
        assert_eq!(meshes.intensity(MeshId(0)), Some(limits.max_intensity));

        sequencer.advance(Duration::from_millis(50), &mut meshes, &limits, &mut rng);
        assert_eq!(meshes.intensity(MeshId(0)), Some(limits.max_intensity));
        assert_eq!(sequencer.pending_restores(), 1);
    }

    #[test]
    fn long_frame_fires_every_elapsed_tick_but_never_overshoots() {
        let limits = EmissiveLimits::default();
        let mut meshes = sign_table(6, &limits);
        let mut rng = SmallRng::seed_from_u64(3);
        let mut sequencer = FlickerSequencer::new(FlickerTiming::default());
        sequencer.start();

        sequencer.advance(Duration::from_millis(350), &mut meshes, &limits, &mut rng);
        assert_eq!(sequencer.ticks(), 3);
        // Pulses from the first two ticks are already an interval old.
        assert_eq!(lit(&meshes, &limits).len(), 1);
        assert_eq!(sequencer.pending_restores(), 1);

        let status =
            sequencer.advance(Duration::from_secs(60), &mut meshes, &limits, &mut rng);
        assert_eq!(status, FlickerStatus::Finished);
        assert_eq!(sequencer.ticks(), 70);
    }

    #[test]
    fn last_tick_of_a_long_frame_stays_lit_for_the_rest_of_its_interval() {
        let limits = EmissiveLimits::default();
        let mut meshes = sign_table(0, &limits);
        let mut rng = SmallRng::seed_from_u64(13);
        let mut sequencer = FlickerSequencer::new(FlickerTiming::default());
        sequencer.start();

        // Single row, so every tick pulses the label: the last pulse must survive.
        sequencer.advance(Duration::from_millis(250), &mut meshes, &limits, &mut rng);
        assert_eq!(sequencer.ticks(), 2);
        assert_eq!(meshes.intensity(MeshId(0)), Some(limits.max_intensity));

        // Fired 50 ms ago, so it is due 50 ms later, together with the next tick.
        sequencer.advance(Duration::from_millis(40), &mut meshes, &limits, &mut rng);
        assert_eq!(meshes.intensity(MeshId(0)), Some(limits.max_intensity));
        assert_eq!(sequencer.pending_restores(), 1);
    }

    #[test]
    fn huge_duration_saturates_the_tick_estimate() {
        let timing = FlickerTiming {
            interval: Duration::from_millis(1),
            duration: Duration::from_secs(u64::MAX / 1000),
        };
        assert_eq!(timing.total_ticks(), u32::MAX);
    }

    #[test]
    fn empty_sign_still_counts_ticks() {
        let limits = EmissiveLimits::default();
        let mut meshes = SignMeshes::default();
        let mut rng = SmallRng::seed_from_u64(9);
        let mut sequencer = FlickerSequencer::new(FlickerTiming::default());
        sequencer.start();

        let mut status = FlickerStatus::Running;
        for _ in 0..70 {
            status = sequencer.advance(INTERVAL, &mut meshes, &limits, &mut rng);
        }
        assert_eq!(status, FlickerStatus::Finished);
        assert_eq!(sequencer.pending_restores(), 0);
    }

    #[test]
    fn restores_to_removed_rows_are_dropped_silently() {
        let limits = EmissiveLimits::default();
        let mut meshes = sign_table(6, &limits);
        let mut rng = SmallRng::seed_from_u64(5);
        let mut sequencer = FlickerSequencer::new(FlickerTiming::default());
        sequencer.start();
        sequencer.advance(INTERVAL, &mut meshes, &limits, &mut rng);

        meshes.clear();
        sequencer.advance(INTERVAL, &mut meshes, &limits, &mut rng);
        sequencer.advance(INTERVAL, &mut meshes, &limits, &mut rng);
        assert_eq!(sequencer.pending_restores(), 0);
    }

    #[test]
    fn cancel_releases_timer_and_pending_restores() {
        let limits = EmissiveLimits::default();
        let mut meshes = sign_table(6, &limits);
        let mut rng = SmallRng::seed_from_u64(11);
        let mut sequencer = FlickerSequencer::new(FlickerTiming::default());
        sequencer.start();
        sequencer.advance(INTERVAL, &mut meshes, &limits, &mut rng);

        sequencer.cancel();
        assert_eq!(sequencer.phase(), FlickerPhase::Done);
        assert_eq!(sequencer.pending_restores(), 0);
        assert_eq!(
            sequencer.advance(INTERVAL, &mut meshes, &limits, &mut rng),
            FlickerStatus::Inactive
        );
        assert_eq!(sequencer.ticks(), 1);
    }
}
