use crate::ship::ShipType;

/// Rows and columns of every board.
pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in a full fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Upper bound on random tries per ship before auto-placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Number of action-log entries shown when a log is rendered.
pub const LOG_WINDOW: usize = 17;

/// Catalog index of the ship called `name`, ignoring ASCII case.
pub fn ship_index(name: &str) -> Option<usize> {
    SHIPS
        .iter()
        .position(|def| def.name().eq_ignore_ascii_case(name.trim()))
}

