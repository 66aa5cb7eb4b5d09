//! 4x4 matrix keypad scanning
//!
//! The keypad is wired as four column-drive lines and four row-sense
//! lines with pull-ups. Scanning drives one column low at a time, waits
//! for the lines to settle, then samples the rows active-low. This needs
//! only eight lines for sixteen keys.

use crate::traits::{DelayMs, InputPin, OutputPin};

/// Number of rows in the key matrix
pub const ROWS: usize = 4;
/// Number of columns in the key matrix
pub const COLS: usize = 4;

/// Settle time after driving a column, in ms
pub const SETTLE_MS: u32 = 1;

/// Key legend, row-major, matching the silkscreen of the membrane keypad
pub const LAYOUT: [[char; COLS]; ROWS] = [
    ['7', '8', '9', 'A'],
    ['4', '5', '6', 'B'],
    ['1', '2', '3', 'C'],
    ['*', '0', '#', 'D'],
];

/// Look up the key character at a matrix position
pub fn key_at(row: usize, col: usize) -> Option<char> {
    LAYOUT.get(row).and_then(|r| r.get(col)).copied()
}

/// Find the matrix position of a key character
pub fn position(key: char) -> Option<(usize, usize)> {
    for (row, keys) in LAYOUT.iter().enumerate() {
        for (col, &k) in keys.iter().enumerate() {
            if k == key {
                return Some((row, col));
            }
        }
    }
    None
}

/// 4x4 matrix keypad scanner
///
/// Owns the four column-drive outputs and four row-sense inputs.
/// Columns are parked high whenever no scan is in progress.
pub struct Keypad<C, R> {
    columns: [C; COLS],
    rows: [R; ROWS],
}

impl<C: OutputPin, R: InputPin> Keypad<C, R> {
    /// Create a new scanner and park all columns high
    pub fn new(mut columns: [C; COLS], rows: [R; ROWS]) -> Self {
        for column in columns.iter_mut() {
            column.set_high();
        }
        Self { columns, rows }
    }

    /// Scan the matrix once and resolve the pressed key, if any
    ///
    /// Columns are walked in order, rows sensed in order within each
    /// column; the first asserted row wins, so simultaneous presses are
    /// not disambiguated. A full no-hit sweep takes four settle periods
    /// (~4 ms) and returns `None`.
    pub fn scan<D: DelayMs>(&mut self, delay: &mut D) -> Option<char> {
        for (col, column) in self.columns.iter_mut().enumerate() {
            column.set_low();
            delay.delay_ms(SETTLE_MS);

            let hit = self.rows.iter().position(|row| row.is_low());
            column.set_high();

            if let Some(row) = hit {
                return key_at(row, col);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::{Cell, RefCell};

    /// Simulated keypad wiring: a shared bus the mock pins hang off
    struct SimBus {
        column_low: [Cell<bool>; COLS],
        pressed: RefCell<[[bool; COLS]; ROWS]>,
        settle_calls: Cell<u32>,
    }

    impl SimBus {
        fn new() -> Self {
            Self {
                column_low: Default::default(),
                pressed: RefCell::new([[false; COLS]; ROWS]),
                settle_calls: Cell::new(0),
            }
        }

        fn press(&self, row: usize, col: usize) {
            self.pressed.borrow_mut()[row][col] = true;
        }

        fn release_all(&self) {
            *self.pressed.borrow_mut() = [[false; COLS]; ROWS];
        }
    }

    struct SimColumn<'a> {
        bus: &'a SimBus,
        index: usize,
    }

    impl OutputPin for SimColumn<'_> {
        fn set_high(&mut self) {
            self.bus.column_low[self.index].set(false);
        }

        fn set_low(&mut self) {
            self.bus.column_low[self.index].set(true);
        }
    }

    struct SimRow<'a> {
        bus: &'a SimBus,
        index: usize,
    }

    impl InputPin for SimRow<'_> {
        fn is_high(&self) -> bool {
            // A row reads low only while its key's column is driven low
            let pressed = self.bus.pressed.borrow();
            !(0..COLS)
                .any(|col| self.bus.column_low[col].get() && pressed[self.index][col])
        }
    }

    struct SimDelay<'a> {
        bus: &'a SimBus,
    }

    impl DelayMs for SimDelay<'_> {
        fn delay_ms(&mut self, _ms: u32) {
            self.bus.settle_calls.set(self.bus.settle_calls.get() + 1);
        }
    }

    fn keypad(bus: &SimBus) -> Keypad<SimColumn<'_>, SimRow<'_>> {
        let columns = [
            SimColumn { bus, index: 0 },
            SimColumn { bus, index: 1 },
            SimColumn { bus, index: 2 },
            SimColumn { bus, index: 3 },
        ];
        let rows = [
            SimRow { bus, index: 0 },
            SimRow { bus, index: 1 },
            SimRow { bus, index: 2 },
            SimRow { bus, index: 3 },
        ];
        Keypad::new(columns, rows)
    }

    #[test]
    fn test_no_key_returns_none() {
        let bus = SimBus::new();
        let mut keypad = keypad(&bus);
        let mut delay = SimDelay { bus: &bus };

        assert_eq!(keypad.scan(&mut delay), None);
        // One settle period per column
        assert_eq!(bus.settle_calls.get(), 4);
    }

    #[test]
    fn test_every_position_resolves_to_layout() {
        let bus = SimBus::new();
        let mut keypad = keypad(&bus);
        let mut delay = SimDelay { bus: &bus };

        for row in 0..ROWS {
            for col in 0..COLS {
                bus.press(row, col);
                assert_eq!(keypad.scan(&mut delay), Some(LAYOUT[row][col]));
                bus.release_all();
            }
        }
    }

    #[test]
    fn test_first_row_wins_within_a_column() {
        let bus = SimBus::new();
        let mut keypad = keypad(&bus);
        let mut delay = SimDelay { bus: &bus };

        // '8' (row 0) and '5' (row 1) share column 1
        bus.press(0, 1);
        bus.press(1, 1);
        assert_eq!(keypad.scan(&mut delay), Some('8'));
    }

    #[test]
    fn test_columns_parked_high_after_scan() {
        let bus = SimBus::new();
        let mut keypad = keypad(&bus);
        let mut delay = SimDelay { bus: &bus };

        bus.press(2, 1);
        assert_eq!(keypad.scan(&mut delay), Some('2'));
        assert!(bus.column_low.iter().all(|c| !c.get()));

        bus.release_all();
        assert_eq!(keypad.scan(&mut delay), None);
        assert!(bus.column_low.iter().all(|c| !c.get()));
    }

    #[test]
    fn test_position_inverts_key_at() {
        for row in 0..ROWS {
            for col in 0..COLS {
                let key = key_at(row, col).unwrap();
                assert_eq!(position(key), Some((row, col)));
            }
        }
        assert_eq!(position('X'), None);
        assert_eq!(key_at(4, 0), None);
    }
}
