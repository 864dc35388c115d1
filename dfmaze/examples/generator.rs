use std::env;

use dfmaze::{find_path, Generator, Tile};

fn main() {
    let args = env::args()
        .skip(1)
        .take(3)
        .map(|s| s.parse())
        .collect::<Result<Vec<i64>, _>>()
        .expect("Expected 2 or 3 integers");

    assert!(
        args.len() == 2 || args.len() == 3,
        "Expected 2 or 3 integers"
    );

    let input_seed = args.get(2).copied().map(|seed| seed as u64);
    let generator = Generator::new(input_seed);

    if input_seed.is_none() {
        println!("Seed: {}", generator.seed());
    }

    let maze = generator
        .generate(args[0] as i32, args[1] as i32)
        .unwrap_or_else(|err| panic!("{err}"));
    let (start, end) = maze.default_endpoints();
    let path = find_path(&maze, start, end).unwrap().unwrap_or_default();

    for (row, tiles) in maze.rows().enumerate() {
        for (col, tile) in tiles.iter().enumerate() {
            let on_path = path.contains(&dfmaze::Pos(row as i32, col as i32));
            match (tile, on_path) {
                (_, true) => print!("\x1b[42m  \x1b[0m"),
                (Tile::Wall, _) => print!("\x1b[47m  \x1b[0m"),
                (Tile::Open, _) => print!("  "),
            }
        }
        println!();
    }
}
