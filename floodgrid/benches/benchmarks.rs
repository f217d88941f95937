use floodgrid::Grid;

fn main() {
    divan::main();
}

// 3x3 blocks of alternating values; plenty of distinct regions without
// degenerating into single-cell noise
fn striped_input(rows: usize, cols: usize) -> String {
    let mut input = String::with_capacity(rows * (cols + 1));
    for i in 0..rows {
        for j in 0..cols {
            input.push(if (i / 3 + j / 3) % 2 == 0 { 'A' } else { 'B' });
        }
        input.push('\n');
    }
    input
}

#[divan::bench]
fn parse() {
    let input = striped_input(128, 128);
    divan::black_box(Grid::parse(divan::black_box(&input)).unwrap());
}

#[divan::bench]
fn partition() {
    let input = striped_input(128, 128);
    let grid = Grid::parse(&input).unwrap();
    divan::black_box(grid.all_regions());
}

#[divan::bench]
fn perimeters() {
    let input = striped_input(128, 128);
    let grid = Grid::parse(&input).unwrap();
    let total: usize = grid
        .all_regions()
        .iter()
        .map(|region| region.area() * region.perimeter())
        .sum();
    divan::black_box(total);
}
