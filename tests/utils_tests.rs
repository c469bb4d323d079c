//! tests/utils_tests.rs
//! Unit tests for utility functions

use shcrypt::utils::{container_len, padding_length, xor_blocks};

#[test]
fn xor_blocks_basic() {
    let block_a = [0xFFu8; 16];
    let block_b = [0x0Fu8; 16];
    let mut output = [0u8; 16];

    xor_blocks(&block_a, &block_b, &mut output);
    assert_eq!(output, [0xF0u8; 16]);
}

#[test]
fn xor_blocks_self_xor_is_zero() {
    let block: [u8; 16] = core::array::from_fn(|i| i as u8 * 17);
    let mut output = [0xAAu8; 16];

    xor_blocks(&block, &block, &mut output);
    assert_eq!(output, [0u8; 16]);
}

#[test]
fn xor_blocks_reversible() {
    let original = *b"sixteen byte blk";
    let key = [0x5Cu8; 16];
    let mut masked = [0u8; 16];
    let mut restored = [0u8; 16];

    xor_blocks(&original, &key, &mut masked);
    xor_blocks(&masked, &key, &mut restored);
    assert_eq!(restored, original);
}

#[test]
fn xor_blocks_ignores_bytes_past_one_block() {
    let block_a = [0x01u8; 20];
    let block_b = [0x02u8; 20];
    let mut output = [0u8; 20];

    xor_blocks(&block_a, &block_b, &mut output);
    assert_eq!(&output[..16], &[0x03u8; 16]);
    assert_eq!(&output[16..], &[0u8; 4]);
}

#[test]
fn padding_length_range() {
    for len in 0..1024 {
        let p = padding_length(len);
        assert!((1..=16).contains(&p), "len {len} → {p}");
        assert_eq!((len + p as usize) % 16, 0);
    }
}

#[test]
fn container_len_examples() {
    assert_eq!(container_len(5), 33);
    assert_eq!(container_len(16), 49);
    assert_eq!(container_len(1000), 1025);
}
