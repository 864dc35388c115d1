use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dfmaze::{
    algorithms::{DepthFirstSearch, MazeCarver as _, Random},
    find_path, Generator, Grid,
};
use rand::SeedableRng as _;

const SIZE: (i32, i32) = (501, 501);

pub fn carve(c: &mut Criterion) {
    c.bench_function("dfs_carve", |b| {
        b.iter(|| {
            let grid = Grid::build(black_box(SIZE.0), black_box(SIZE.1)).unwrap();
            let mut rng = Random::seed_from_u64(black_box(0));
            DepthFirstSearch.carve(grid, &mut rng)
        })
    });
}

pub fn search(c: &mut Criterion) {
    let maze = Generator::new(Some(0)).generate(SIZE.0, SIZE.1).unwrap();
    let (start, end) = maze.default_endpoints();

    c.bench_function("dfs_find_path", |b| {
        b.iter(|| find_path(black_box(&maze), black_box(start), black_box(end)).unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = carve, search}
criterion_main!(benches);
