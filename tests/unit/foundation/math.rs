use super::*;

fn fnv32(bytes: &[u8]) -> u32 {
    let mut h = Fnv1a32::new_default();
    h.write_bytes(bytes);
    h.finish()
}

#[test]
fn fnv32_matches_reference_vectors() {
    assert_eq!(fnv32(b""), 0x811c_9dc5);
    assert_eq!(fnv32(b"a"), 0xe40c_292c);
    assert_eq!(fnv32(b"foobar"), 0xbf9c_f968);
}

#[test]
fn fnv32_split_writes_match_single_write() {
    let mut a = Fnv1a32::new_default();
    a.write_bytes(b"ali");
    a.write_bytes(b"ce");
    assert_eq!(a.finish(), fnv32(b"alice"));
}

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn rng_differs_across_seeds() {
    let mut a = Rng64::new(1);
    let mut b = Rng64::new(2);
    assert_ne!(a.next_u64(), b.next_u64());
}

#[test]
fn next_index_stays_in_range() {
    let mut rng = Rng64::new(0xDEAD_BEEF);
    for n in [1usize, 2, 3, 7, 100] {
        for _ in 0..200 {
            assert!(rng.next_index(n) < n);
        }
    }
}

#[test]
fn next_index_of_one_is_zero_but_still_consumes_a_draw() {
    let mut a = Rng64::new(9);
    let mut b = Rng64::new(9);
    assert_eq!(a.next_index(1), 0);
    b.next_u64();
    assert_eq!(a.next_u64(), b.next_u64());
}

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255(255, 255), 255);
    assert_eq!(mul_div255(0, 255), 0);
    assert_eq!(mul_div255(100, 128), ((100u32 * 128 + 127) / 255) as u8);
}
