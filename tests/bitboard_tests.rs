use naval_duel::{BitBoard, BitBoardError};

#[test]
fn test_get_set_and_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(1, 2).unwrap());
    assert_eq!(bb.count_ones(), 1);

    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 4, col: 0 }
    );
    assert!(bb.get(0, 4).is_err());
}

#[test]
fn test_iter_set_bits_row_major() {
    let mut bb = BitBoard::<u16, 4>::new();
    bb.set(3, 3).unwrap();
    bb.set(0, 1).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_subset_and_not_stay_in_bounds() {
    let mut small = BitBoard::<u128, 10>::new();
    let mut big = BitBoard::<u128, 10>::new();
    small.set(2, 2).unwrap();
    big.set(2, 2).unwrap();
    big.set(9, 9).unwrap();

    assert!(small.is_subset_of(&big));
    assert!(!big.is_subset_of(&small));
    assert!(BitBoard::<u128, 10>::new().is_subset_of(&small));

    // Inverting an empty 10x10 board sets exactly the 100 playable cells.
    assert_eq!((!BitBoard::<u128, 10>::new()).count_ones(), 100);
}

#[test]
fn test_decoded_stray_bits_out_of_bounds() {
    let bytes = bincode::serialize(&0xFFFFu16).unwrap();
    let bb: BitBoard<u16, 3> = bincode::deserialize(&bytes).unwrap();
    assert!(!bb.is_within_bounds());
    assert!(BitBoard::<u16, 3>::from_raw(0xFFFF).is_within_bounds());
    assert!(BitBoard::<u128, 10>::new().is_within_bounds());
}
