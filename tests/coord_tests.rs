use naval_duel::{Coordinate, EngineError};

#[test]
fn test_parse_corners() {
    let a1 = Coordinate::parse("a1").unwrap();
    assert_eq!((a1.row(), a1.col()), (0, 0));
    let j10 = Coordinate::parse("j10").unwrap();
    assert_eq!((j10.row(), j10.col()), (9, 9));
    let a8: Coordinate = "a8".parse().unwrap();
    assert_eq!((a8.row(), a8.col()), (0, 7));
}

#[test]
fn test_parse_normalizes_case_and_whitespace() {
    assert_eq!(Coordinate::parse("  B7 ").unwrap(), Coordinate::parse("b7").unwrap());
    assert_eq!(Coordinate::parse("c 10").unwrap(), Coordinate::parse("c10").unwrap());
    assert_eq!(Coordinate::parse("\tJ1\n").unwrap(), Coordinate::new(9, 0).unwrap());
}

#[test]
fn test_parse_rejects_bad_tokens() {
    for token in [
        "z99", "", "a", "k1", "a0", "a11", "a01", "1a", "aa1", "a100", "é1", "a-1", "a 1 0 0",
    ] {
        assert_eq!(
            Coordinate::parse(token),
            Err(EngineError::InvalidCoordinate),
            "token {:?} should be rejected",
            token
        );
    }
}

#[test]
fn test_new_bounds_and_display() {
    assert_eq!(Coordinate::new(10, 0), Err(EngineError::InvalidCoordinate));
    assert_eq!(Coordinate::new(0, 10), Err(EngineError::InvalidCoordinate));
    assert_eq!(Coordinate::new(0, 7).unwrap().to_string(), "a8");
    assert_eq!(Coordinate::new(9, 9).unwrap().to_string(), "j10");
}

#[test]
fn test_all_covers_grid_once() {
    let all: Vec<_> = Coordinate::all().collect();
    assert_eq!(all.len(), 100);
    assert_eq!(all[0].to_string(), "a1");
    assert_eq!(all[99].to_string(), "j10");
    for c in &all {
        assert_eq!(Coordinate::parse(&c.to_string()).unwrap(), *c);
    }
}
