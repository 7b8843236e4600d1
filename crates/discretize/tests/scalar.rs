use discretize::{BinError, ScalarBinner};

#[test]
fn four_bins_over_zero_to_eight() {
    let binner = ScalarBinner::new(4, 8.0, 0.0).unwrap();
    assert_eq!(binner.width(), 2.0);
    assert_eq!(binner.boundaries(), &[0.0, 2.0, 4.0, 6.0, 8.0]);

    assert_eq!(binner.bin(0.0), Ok(0));
    assert_eq!(binner.bin(1.9), Ok(0));
    assert_eq!(binner.bin(2.0), Ok(1));
    assert_eq!(binner.bin(7.9), Ok(3));
    assert!(matches!(binner.bin(8.0), Err(BinError::OutOfRangeHigh { .. })));
    assert!(matches!(binner.bin(-1.0), Err(BinError::OutOfRangeLow { .. })));
}

#[test]
fn out_of_range_errors_carry_value_and_range() {
    let binner = ScalarBinner::new(4, 8.0, 0.0).unwrap();
    assert_eq!(
        binner.bin(-1.0),
        Err(BinError::OutOfRangeLow {
            dim: 0,
            value: -1.0,
            low: 0.0,
            high: 8.0,
        })
    );
    let msg = binner.bin(9.5).unwrap_err().to_string();
    assert!(msg.contains("9.5"), "{msg}");
    assert!(msg.contains("[0, 8)"), "{msg}");
}

#[test]
fn nan_is_rejected() {
    let binner = ScalarBinner::new(3, 1.0, -1.0).unwrap();
    assert_eq!(binner.bin(f32::NAN), Err(BinError::NotANumber { dim: 0 }));
}

#[test]
fn oversized_interval_count_is_an_error() {
    let err = ScalarBinner::new(usize::MAX, 1.0, 0.0).unwrap_err();
    assert!(matches!(err, BinError::InvalidAxis { dim: 0, .. }), "{err:?}");
}

#[test]
fn every_edge_opens_its_own_bin() {
    let binner = ScalarBinner::new(5, 2.5, -2.5).unwrap();
    for (i, &edge) in binner.boundaries()[..5].iter().enumerate() {
        assert_eq!(binner.bin(edge), Ok(i), "edge {edge}");
    }
}

#[test]
fn indices_stay_in_range_and_never_decrease() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..50 {
        let intervals = rng.usize(1..64);
        let low = rng.f32() * 200.0 - 100.0;
        let high = low + 0.5 + rng.f32() * 100.0;
        let binner = ScalarBinner::new(intervals, high, low).unwrap();

        let mut values: Vec<f32> = (0..200).map(|_| low + rng.f32() * (high - low)).collect();
        values.retain(|&v| v < high);
        values.sort_by(f32::total_cmp);

        let mut previous = 0;
        for v in values {
            let idx = binner.bin(v).unwrap();
            assert!(idx < intervals, "index {idx} for {v} in [{low}, {high}) / {intervals}");
            assert!(idx >= previous, "index went down at {v}");
            previous = idx;
        }
        assert!(matches!(binner.bin(high), Err(BinError::OutOfRangeHigh { .. })));
        assert!(matches!(binner.bin(low - 1.0), Err(BinError::OutOfRangeLow { .. })));
    }
}

#[test]
fn boundaries_are_strictly_increasing_and_end_near_high() {
    for intervals in [1, 3, 7, 10, 33, 100] {
        let binner = ScalarBinner::new(intervals, 1.0, -0.3).unwrap();
        let b = binner.boundaries();
        assert_eq!(b.len(), intervals + 1);
        assert_eq!(b[0], -0.3);
        assert!(b.windows(2).all(|w| w[0] < w[1]));
        assert!((b[intervals] - 1.0).abs() < 1e-4, "last boundary {}", b[intervals]);
    }
}

#[test]
fn repeated_calls_agree() {
    let binner = ScalarBinner::new(7, 3.0, 0.0).unwrap();
    let first = binner.bin(1.234);
    for _ in 0..10 {
        assert_eq!(binner.bin(1.234), first);
    }
}

#[test]
fn rejects_inverted_range() {
    assert!(matches!(
        ScalarBinner::new(4, 0.0, 8.0),
        Err(BinError::InvalidAxis { dim: 0, .. })
    ));
}
