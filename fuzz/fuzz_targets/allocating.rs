#![no_main]

use libfuzzer_sys::fuzz_target;

use qsort_engines::unstable::allocating as test_sort;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    test_sort::try_sort_by(&mut v, |a, b| b.cmp(a)).unwrap();

    let mut expected = data.to_vec();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(v, expected);
});
