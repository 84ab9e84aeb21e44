// self
use crate::{
	obs::AcquisitionOutcome,
	provider::GrantType,
};

/// Records an acquisition outcome via the global metrics recorder (when enabled).
pub fn record_acquisition(grant: GrantType, outcome: AcquisitionOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_authorizer_acquisition_total",
			"grant" => grant.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (grant, outcome);
	}
}
