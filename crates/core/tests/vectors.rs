// Copyright 2024-2025 Irreducible Inc.

use assert_matches::assert_matches;
use cryptonight_core::{hash, Backend, Digest, Error, Variant};
use hex_literal::hex;

const QUICK_FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";
const QUICK_FOX_PERIOD: &[u8] = b"The quick brown fox jumps over the lazy dog.";
const INTERJECTION: &[u8] = b"I'd just like to interject for a moment. What you're referring to as Linux, \
	is in fact, GNU/Linux, or as I've recently taken to calling it, GNU plus Linux. Linux is not an \
	operating system unto itself";
/// A block hashing blob, taken as raw bytes.
const BLOCK_BLOB: &[u8] = &hex!(
	"0100fb8e8ac805899323371bb790db19218afd8db8e3755d8b90f39b3d5506a9abce4fa912244500000000"
	"ee8146d49fa93ee724deb57d12cbc6c6f3b924d946127c7a97418f9348828f0f02"
);

fn check(variant: Variant, vectors: &[(&[u8], &str)]) {
	for &(input, expected) in vectors {
		let expected: Digest = expected.parse().unwrap();
		let actual = hash(input, variant, Backend::Optimized).unwrap();
		assert_eq!(actual, expected, "{variant} on {:?}", String::from_utf8_lossy(input));
	}
}

#[test]
fn test_inputs_are_as_published() {
	assert_eq!(INTERJECTION.len(), 200);
	assert_eq!(BLOCK_BLOB.len(), 76);
}

#[test]
fn test_v0() {
	check(
		Variant::V0,
		&[
			(b"", "eb14e8a833fac6fe9a43b57b336789c46ffe93f2868452240720607b14387e11"),
			(QUICK_FOX, "3ebb7f9f7d273d7c318d869477550cc800cfb11b0cadb7ffbdf6f89f3a471c59"),
			(QUICK_FOX_PERIOD, "e37cc1b6fabcd3652b6d2879ac806e39f591f9d1c20be0c6b99cf6bef31158a2"),
			(INTERJECTION, "d986f765ad299c605eba4712ffe11918ed9f39c4358949fd11a2cfd3f04fab35"),
			(BLOCK_BLOB, "1b606a3f4a07d6489a1bcd07697bd16696b61c8ae982f61a90160f4e52828a7f"),
		],
	);
}

#[test]
fn test_v1() {
	check(
		Variant::V1,
		&[
			(QUICK_FOX, "94f5dec524fad6d32004c55c035e5ea223e7315be20e2dc5b8a0ac7464ffeb1f"),
			(QUICK_FOX_PERIOD, "86d34efc73e709dcc0f862725be692d1f8c5b407b4d730cd309acf80cc8f7c73"),
			(INTERJECTION, "246e1f4e7a61e0b29d4fefe33bb48b175468d28c0e44e84cb0cf244be8af9a12"),
			(BLOCK_BLOB, "c9fae8425d8688dc236bcdbc42fdb42d376c6ec190501aa84b04a4b4cf1ee122"),
		],
	);
}

#[test]
fn test_v2() {
	check(
		Variant::V2,
		&[
			(b"", "e34985722288be50a2068f973f02248d62e7bc6a0a0dfca2eb84909724857a72"),
			(QUICK_FOX, "89dc534dd473da35f6360dcdc5583aa54279d4370475a46d623463e5d2846c13"),
			(QUICK_FOX_PERIOD, "6426bc9c004916344b27e66cbc64f7efc1f4f7c7fba00a37e6928915ae88a552"),
			(INTERJECTION, "17ef5baf4fe920df66387a719e6df60f5441fc79f3c1684aa925e72358b2bdaf"),
			(BLOCK_BLOB, "871fcd6823f6a879bb3f33951c8e8e891d4043880b02dfa1bb3be498b50e7578"),
		],
	);
}

#[test]
fn test_lite_v0() {
	check(
		Variant::LiteV0,
		&[
			(b"", "4cec4a947f670ffdd591f89cdb56ba066c31cd093d1d4d7ce15d33704c090611"),
			(QUICK_FOX, "fbbbc024c37acff2e7302275458447f888a8d6361ce407c391be72ed34c16fee"),
			(QUICK_FOX_PERIOD, "6d0e743fca6358bd0e9b365a68887fa9abf9f2940fe50682be28759b776d0fb0"),
			(INTERJECTION, "38c887c08c2c9398d411c4bbf9b3eb707087906a5326ebeb3b238e7867fb1a9b"),
			(BLOCK_BLOB, "28a22bad3f93d1408fca472eb5ad1cbe75f21d053c8ce5b3af105a57713e21dd"),
		],
	);
}

#[test]
fn test_lite_v1() {
	check(
		Variant::LiteV1,
		&[
			(QUICK_FOX, "973a324237703e0f2ebe678a0000a00afb14c2c394c1859c84bcaa7b90bc56db"),
			(QUICK_FOX_PERIOD, "b860f59d6aef32c7cacac02c4ac794066402dbd30c64c7fb733600a91441326d"),
			(INTERJECTION, "f7a5217873b802940a629573f6a100deb25764af254f8f4fef1a8b9d51ef3cc5"),
			(BLOCK_BLOB, "87c4e570653eb4c2b42b7a0d546559452dfab573b82ec52f152b7ff98e79446f"),
		],
	);
}

#[test]
fn test_turtle_v2() {
	check(
		Variant::TurtleV2,
		&[
			(b"", "16cba4f89786b8aa785a4085f529f757296402aca4edbaefc1470bc691071ed9"),
			(QUICK_FOX, "32406c24600411f331e8a1decf38b65442a2feb6a3b71384bb50473e3e0dc11b"),
			(QUICK_FOX_PERIOD, "9684a0c6bc9d1256bb64ee9eaecf429e545073a3a06d88478cd4d2aa6f15263c"),
			(INTERJECTION, "decefe366f49f7fc26c8b4f87caf7da47552162c236ebc1819c851bc37861ae0"),
			(BLOCK_BLOB, "b2172ec9466e1aee70ec8572a14c233ee354582bcb93f869d429744de5726a26"),
		],
	);
}

#[test]
fn test_byte_xor_variants_reject_short_input() {
	for variant in [Variant::V1, Variant::LiteV1, Variant::TurtleV1] {
		for backend in [Backend::Reference, Backend::Optimized] {
			assert_matches!(
				hash(b"", variant, backend),
				Err(Error::InvalidInput {
					min_len: 43,
					len: 0,
					..
				})
			);
			assert_matches!(
				hash(&QUICK_FOX[..42], variant, backend),
				Err(Error::InvalidInput { len: 42, .. })
			);
		}
	}
}

#[test]
fn test_byte_xor_gate_boundary() {
	assert_eq!(QUICK_FOX.len(), 43);
	assert!(hash(QUICK_FOX, Variant::TurtleV1, Backend::Optimized).is_ok());
}
