// Copyright 2024-2025 Irreducible Inc.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cryptonight_core::{
	aes::{Accelerated, AesRound, Block, Portable, RoundKeys, Tables},
	hash_batch, hash_with_scratchpad, Backend, Scratchpad, Variant,
};
use rand::{thread_rng, RngCore};

fn bench_aes(c: &mut Criterion) {
	let mut group = c.benchmark_group("AES");

	let mut rng = thread_rng();
	let mut key = [0u8; 32];
	rng.fill_bytes(&mut key);
	let keys = RoundKeys::expand(&key);
	let mut block = Block::default();
	rng.fill_bytes(&mut block);

	group.throughput(Throughput::Bytes(block.len() as u64));
	group.bench_function("portable", |bench| {
		bench.iter(|| Portable::pseudo_rounds(&mut block, &keys))
	});
	group.bench_function("tables", |bench| bench.iter(|| Tables::pseudo_rounds(&mut block, &keys)));
	group.bench_function("accelerated", |bench| {
		bench.iter(|| Accelerated::pseudo_rounds(&mut block, &keys))
	});

	group.finish()
}

fn bench_hash(c: &mut Criterion) {
	let mut group = c.benchmark_group("CryptoNight");
	group.sample_size(10);

	let mut input = [0u8; 76];
	thread_rng().fill_bytes(&mut input);

	for variant in [Variant::V0, Variant::V1, Variant::V2, Variant::LiteV1, Variant::TurtleV2] {
		let mut scratchpad = Scratchpad::new(variant);
		for backend in [Backend::Reference, Backend::Optimized] {
			group.bench_with_input(
				BenchmarkId::new(variant.name(), backend),
				&input,
				|bench, input| {
					bench.iter(|| hash_with_scratchpad(input, variant, backend, &mut scratchpad))
				},
			);
		}
	}

	group.finish()
}

fn bench_batch(c: &mut Criterion) {
	let mut group = c.benchmark_group("Batch");
	group.sample_size(10);

	let mut rng = thread_rng();
	let inputs: Vec<[u8; 76]> = (0..64)
		.map(|_| {
			let mut input = [0u8; 76];
			rng.fill_bytes(&mut input);
			input
		})
		.collect();

	group.throughput(Throughput::Elements(inputs.len() as u64));
	group.bench_function("cn-turtle/2", |bench| {
		bench.iter(|| hash_batch(&inputs, Variant::TurtleV2, Backend::Optimized))
	});

	group.finish()
}

criterion_group!(cryptonight, bench_aes, bench_hash, bench_batch);
criterion_main!(cryptonight);
