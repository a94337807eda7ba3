#![no_main]

use libfuzzer_sys::fuzz_target;

use qsort_engines::records;
use qsort_engines::unstable::{allocating, in_place};

// Fuzzer input as 12 byte records, ordered by their first 4 bytes read as little endian.
fuzz_target!(|data: &[u8]| {
    let usable = data.len() - (data.len() % 12);
    let mut a = data[..usable].to_vec();
    let mut b = a.clone();

    let key = |r: &[u8; 12]| u32::from_le_bytes([r[0], r[1], r[2], r[3]]);

    in_place::sort_by(records::as_records_mut::<12>(&mut a).unwrap(), |x, y| {
        key(x).cmp(&key(y))
    });
    allocating::sort_by(records::as_records_mut::<12>(&mut b).unwrap(), |x, y| {
        key(x).cmp(&key(y))
    });

    for sorted in [&a, &b] {
        let recs = records::as_records::<12>(sorted).unwrap();
        assert!(recs.windows(2).all(|w| key(&w[0]) <= key(&w[1])));
    }

    let mut multiset_a = records::as_records::<12>(&a).unwrap().to_vec();
    let mut multiset_b = records::as_records::<12>(&b).unwrap().to_vec();
    let mut multiset_in = records::as_records::<12>(&data[..usable]).unwrap().to_vec();
    multiset_a.sort_unstable();
    multiset_b.sort_unstable();
    multiset_in.sort_unstable();
    assert_eq!(multiset_a, multiset_in);
    assert_eq!(multiset_b, multiset_in);
});
