//! Optional observability helpers for credential acquisition.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth2_authorizer.acquire` with the `grant`
//!   and `stage` fields around each provider call.
//! - Enable `metrics` to increment the `oauth2_authorizer_acquisition_total` counter for every
//!   attempt/success/failure, labeled by `grant` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each acquisition attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AcquisitionOutcome {
	/// Entry into the acquisition path.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl AcquisitionOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AcquisitionOutcome::Attempt => "attempt",
			AcquisitionOutcome::Success => "success",
			AcquisitionOutcome::Failure => "failure",
		}
	}
}
impl Display for AcquisitionOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
