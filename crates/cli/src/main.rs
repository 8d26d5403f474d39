// Copyright 2024-2025 Irreducible Inc.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use cryptonight_core::{hash_batch, Backend, Variant};
use cryptonight_utils::{rayon::adjust_thread_pool, tracing::init_tracing};
use tracing::info;

/// Computes CryptoNight digests.
#[derive(Debug, Parser)]
#[command(name = "cn-hash")]
struct Args {
	/// Hash variant, e.g. cn/0, cn/1, cn/2, cn-lite/1 or cn-turtle/2.
	#[arg(short, long, default_value_t = Variant::V0)]
	variant: Variant,
	/// Use the reference backend instead of the optimized one.
	#[arg(long)]
	reference: bool,
	/// Treat inputs as hex strings rather than raw text.
	#[arg(long)]
	hex: bool,
	/// Inputs to hash. Standard input is hashed as one input when none are given.
	inputs: Vec<String>,
}

impl Args {
	fn backend(&self) -> Backend {
		if self.reference {
			Backend::Reference
		} else {
			Backend::from_env()
		}
	}

	fn decode_inputs(&self) -> Result<Vec<Vec<u8>>> {
		let raw = if self.inputs.is_empty() {
			let mut stdin = String::new();
			io::stdin()
				.read_to_string(&mut stdin)
				.context("failed to read standard input")?;
			vec![stdin.trim_end_matches(['\r', '\n']).to_owned()]
		} else {
			self.inputs.clone()
		};

		raw.into_iter()
			.map(|input| {
				if self.hex {
					hex::decode(input.trim()).with_context(|| format!("invalid hex input {input:?}"))
				} else {
					Ok(input.into_bytes())
				}
			})
			.collect()
	}
}

fn main() -> Result<()> {
	adjust_thread_pool()
		.as_ref()
		.expect("failed to init thread pool");

	let args = Args::parse();

	init_tracing();

	let backend = args.backend();
	let inputs = args.decode_inputs()?;
	info!(variant = %args.variant, %backend, count = inputs.len(), "hashing");

	for (input, result) in inputs.iter().zip(hash_batch(&inputs, args.variant, backend)) {
		let digest = result.with_context(|| format!("failed to hash {} bytes", input.len()))?;
		println!("{digest}  {}", args.variant);
	}

	Ok(())
}
