// Copyright 2023-2025 Irreducible Inc.

/// Install the global tracing subscriber used by the binaries and benchmarks.
///
/// The filter is taken from `RUST_LOG` and defaults to `info`. Setting `CRYPTONIGHT_LOG_SPANS`
/// additionally reports span close events, which gives a rough per-phase timing of a hash.
/// Calling this more than once is harmless; only the first call installs a subscriber.
pub fn init_tracing() {
	use tracing_subscriber::{
		fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
	};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let span_events = if crate::env::boolean_env_flag_set("CRYPTONIGHT_LOG_SPANS") {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_span_events(span_events)
				.with_writer(std::io::stderr),
		)
		.try_init();
}
