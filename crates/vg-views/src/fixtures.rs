//! Shared test data

use vg_core::{Dataset, Record};

/// A record whose global sales are split evenly across the four regions
pub fn record(
    name: &str,
    year: i32,
    genre: &str,
    platform: &str,
    publisher: &str,
    global: f64,
) -> Record {
    full(name, year, genre, platform, publisher, [global / 4.0; 4], global)
}

pub fn full(
    name: &str,
    year: i32,
    genre: &str,
    platform: &str,
    publisher: &str,
    regions: [f64; 4],
    global: f64,
) -> Record {
    Record {
        name: name.to_string(),
        year,
        genre: genre.to_string(),
        platform: platform.to_string(),
        publisher: publisher.to_string(),
        sales_na: regions[0],
        sales_eu: regions[1],
        sales_jp: regions[2],
        sales_other: regions[3],
        sales_global: global,
    }
}

/// A slice of the best-selling games list
#[rustfmt::skip]
pub fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        full("Wii Sports", 2006, "Sports", "Wii", "Nintendo", [41.49, 29.02, 3.77, 8.46], 82.74),
        full("Super Mario Bros.", 1985, "Platform", "NES", "Nintendo", [29.08, 3.58, 6.81, 0.77], 40.24),
        full("Mario Kart Wii", 2008, "Racing", "Wii", "Nintendo", [15.85, 12.88, 3.79, 3.31], 35.82),
        full("Grand Theft Auto V", 2013, "Action", "PS3", "Take-Two Interactive", [7.01, 9.27, 0.97, 4.14], 21.40),
        full("Grand Theft Auto V", 2014, "Action", "PS4", "Take-Two Interactive", [3.80, 5.81, 0.36, 2.02], 11.98),
        full("Call of Duty: Black Ops 3", 2015, "Shooter", "PS4", "Activision", [5.77, 5.81, 0.35, 2.31], 14.24),
        full("Call of Duty: Modern Warfare 3", 2011, "Shooter", "X360", "Activision", [9.03, 4.28, 0.13, 1.32], 14.76),
        full("Pokemon Red/Pokemon Blue", 1996, "Role-Playing", "GB", "Nintendo", [11.27, 8.89, 10.22, 1.00], 31.37),
        full("Tetris", 1989, "Puzzle", "GB", "Nintendo", [23.20, 2.26, 4.22, 0.58], 30.26),
        full("Kinect Adventures!", 2010, "Misc", "X360", "Microsoft Game Studios", [14.97, 4.94, 0.24, 1.67], 21.82),
        full("Grand Theft Auto: San Andreas", 2004, "Action", "PS2", "Take-Two Interactive", [9.43, 0.40, 0.41, 10.57], 20.81),
        full("Grand Theft Auto: Vice City", 2002, "Action", "PS2", "Take-Two Interactive", [8.41, 5.49, 0.47, 1.78], 16.15),
    ])
    .unwrap()
}

/// Three Action games (10, 20, 5) and two Sports games (3, 4)
pub fn five_record_dataset() -> Dataset {
    Dataset::new(vec![
        record("Action A", 2001, "Action", "PS2", "Alpha", 10.0),
        record("Action B", 2002, "Action", "PS2", "Beta", 20.0),
        record("Sports A", 2001, "Sports", "Wii", "Alpha", 3.0),
        record("Action C", 2003, "Action", "Wii", "Gamma", 5.0),
        record("Sports B", 2002, "Sports", "PS2", "Beta", 4.0),
    ])
    .unwrap()
}
