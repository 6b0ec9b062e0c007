//! Job progress state machine
//!
//! The host drives simulated jobs with a periodic `tick()` (the UI ticks
//! every 50 ms); each tick advances the running job by a fixed step. A
//! job checks its cancellation token before advancing, so cancellation
//! takes effect on the next tick at the latest.

use crate::cancel::CancelToken;
use crate::job::{JobError, JobId, JobSpec, Outcome};

/// Progress added per tick; 50 ticks from start to completion
pub const PROGRESS_STEP: u8 = 2;

/// Lifecycle state of a job
#[derive(Debug, Clone, PartialEq)]
pub enum JobState {
    /// Accepted but not yet ticked
    Pending,
    Running,
    Complete(Outcome),
    Cancelled,
}

/// A submitted job with its progress
#[derive(Debug, Clone)]
pub struct Job {
    id: JobId,
    spec: JobSpec,
    percent: u8,
    state: JobState,
    token: CancelToken,
}

impl Job {
    fn new(id: JobId, spec: JobSpec) -> Self {
        Self {
            id,
            spec,
            percent: 0,
            state: JobState::Pending,
            token: CancelToken::new(),
        }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn spec(&self) -> &JobSpec {
        &self.spec
    }

    /// Completion percentage, 0 to 100
    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn state(&self) -> &JobState {
        &self.state
    }

    /// Whether the job has reached a terminal state
    pub fn is_finished(&self) -> bool {
        matches!(self.state, JobState::Complete(_) | JobState::Cancelled)
    }

    /// Advance the job by one tick
    ///
    /// A cancelled token moves the job to `Cancelled` and resets its
    /// progress; otherwise progress advances by [`PROGRESS_STEP`] and the
    /// job completes with its fabricated outcome at 100.
    fn tick(&mut self) {
        match self.state {
            JobState::Pending => self.state = JobState::Running,
            JobState::Running => {}
            JobState::Complete(_) | JobState::Cancelled => return,
        }

        if self.token.is_cancelled() {
            self.percent = 0;
            self.state = JobState::Cancelled;
            return;
        }

        self.percent = (self.percent + PROGRESS_STEP).min(100);
        if self.percent >= 100 {
            self.state = JobState::Complete(self.spec.outcome());
        }
    }
}

/// Owns submitted jobs, assigns ids, and drives progress
#[derive(Debug)]
pub struct JobRunner {
    jobs: Vec<Job>,
    next_id: JobId,
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            next_id: 1,
        }
    }

    /// Validate and accept a job, returning its id
    pub fn submit(&mut self, spec: JobSpec) -> Result<JobId, JobError> {
        spec.validate()?;
        let id = self.next_id;
        self.next_id += 1;
        self.jobs.push(Job::new(id, spec));
        Ok(id)
    }

    /// The cancellation token for a job, for handing to a cancel control
    pub fn token(&self, id: JobId) -> Option<CancelToken> {
        self.job(id).map(|job| job.token.clone())
    }

    /// Request cancellation of a job
    ///
    /// Takes effect on the job's next tick. Unknown ids are a no-op.
    pub fn cancel(&mut self, id: JobId) -> bool {
        match self.job(id) {
            Some(job) if !job.is_finished() => {
                job.token.cancel();
                true
            }
            _ => false,
        }
    }

    /// Advance every unfinished job by one tick
    pub fn tick(&mut self) {
        for job in &mut self.jobs {
            job.tick();
        }
    }

    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// All jobs in submission order
    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter()
    }

    /// Drop finished jobs from the list
    pub fn clear_finished(&mut self) {
        self.jobs.retain(|job| !job.is_finished());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{CompressionLevel, Outcome};

    fn compress_spec() -> JobSpec {
        JobSpec::Compress {
            level: CompressionLevel::High,
            input_bytes: 8 * 1024 * 1024,
        }
    }

    #[test]
    fn test_submit_validates() {
        let mut runner = JobRunner::new();
        let rejected = runner.submit(JobSpec::Combine { inputs: vec![] });
        assert_eq!(rejected, Err(JobError::NoInput));
        assert_eq!(runner.jobs().count(), 0);

        let id = runner.submit(compress_spec()).unwrap();
        assert_eq!(id, 1);
        assert_eq!(*runner.job(id).unwrap().state(), JobState::Pending);
    }

    #[test]
    fn test_progress_steps_to_completion() {
        let mut runner = JobRunner::new();
        let id = runner.submit(compress_spec()).unwrap();

        runner.tick();
        let job = runner.job(id).unwrap();
        assert_eq!(*job.state(), JobState::Running);
        assert_eq!(job.percent(), PROGRESS_STEP);

        for _ in 0..49 {
            runner.tick();
        }
        let job = runner.job(id).unwrap();
        assert_eq!(job.percent(), 100);
        assert_eq!(
            *job.state(),
            JobState::Complete(Outcome::Compressed {
                output_bytes: 2 * 1024 * 1024,
                reduction_percent: 75,
            })
        );

        // Ticks past completion change nothing
        runner.tick();
        assert_eq!(runner.job(id).unwrap().percent(), 100);
    }

    #[test]
    fn test_cancel_resets_progress() {
        let mut runner = JobRunner::new();
        let id = runner.submit(compress_spec()).unwrap();

        for _ in 0..10 {
            runner.tick();
        }
        assert_eq!(runner.job(id).unwrap().percent(), 20);

        assert!(runner.cancel(id));
        runner.tick();

        let job = runner.job(id).unwrap();
        assert_eq!(*job.state(), JobState::Cancelled);
        assert_eq!(job.percent(), 0);

        // No retry; a cancelled job never resumes
        runner.tick();
        assert_eq!(*runner.job(id).unwrap().state(), JobState::Cancelled);
    }

    #[test]
    fn test_cancel_unknown_or_finished_is_noop() {
        let mut runner = JobRunner::new();
        assert!(!runner.cancel(42));

        let id = runner.submit(compress_spec()).unwrap();
        for _ in 0..50 {
            runner.tick();
        }
        assert!(runner.job(id).unwrap().is_finished());
        assert!(!runner.cancel(id));
    }

    #[test]
    fn test_token_observed_by_clone() {
        let mut runner = JobRunner::new();
        let id = runner.submit(compress_spec()).unwrap();
        let token = runner.token(id).unwrap();

        runner.tick();
        token.cancel();
        runner.tick();

        assert_eq!(*runner.job(id).unwrap().state(), JobState::Cancelled);
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let mut runner = JobRunner::new();
        let a = runner.submit(compress_spec()).unwrap();
        let b = runner.submit(compress_spec()).unwrap();
        assert_ne!(a, b);

        let ids: Vec<_> = runner.jobs().map(Job::id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_clear_finished() {
        let mut runner = JobRunner::new();
        let done = runner.submit(compress_spec()).unwrap();
        for _ in 0..50 {
            runner.tick();
        }
        let live = runner.submit(compress_spec()).unwrap();

        runner.clear_finished();
        assert!(runner.job(done).is_none());
        assert!(runner.job(live).is_some());
    }
}
