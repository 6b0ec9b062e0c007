//! Malaf Tasks Library
//!
//! Cancellable simulated document jobs for the Malaf PDF workspace.
//! Compress, protect, and combine jobs validate their inputs, advance a
//! progress bar tick by tick, and fabricate their results; no document
//! bytes are touched.
//!
//! # Example
//!
//! ```
//! use malaf_tasks::{CompressionLevel, JobRunner, JobSpec, JobState};
//!
//! let mut runner = JobRunner::new();
//! let id = runner
//!     .submit(JobSpec::Compress {
//!         level: CompressionLevel::Medium,
//!         input_bytes: 4 * 1024 * 1024,
//!     })
//!     .unwrap();
//!
//! // The host ticks on a timer; 50 ticks complete the job.
//! for _ in 0..50 {
//!     runner.tick();
//! }
//! assert!(matches!(
//!     runner.job(id).unwrap().state(),
//!     JobState::Complete(_)
//! ));
//! ```

pub mod cancel;
pub mod job;
pub mod progress;

pub use cancel::CancelToken;
pub use job::{
    format_size, move_input, password_strength, CombineInput, CompressionLevel, EncryptionLevel,
    JobError, JobId, JobSpec, Outcome, PasswordStrength, Permissions, ProtectionSettings,
};
pub use progress::{Job, JobRunner, JobState, PROGRESS_STEP};
