use std::hint::black_box;

use divan::Bencher;
use nbt_codec::{compound, from_binary, from_snbt_str, to_binary, to_snbt_string, Compound, List};

fn main() {
    divan::main();
}

fn example_compound() -> Compound {
    let player = compound! {
        "name" => "Steve",
        "health" => 20.0_f32,
        "pos" => List::Double(vec![123.5, 64.0, -789.25]),
        "inventory" => List::Compound((0..36).map(|slot| compound! {
            "Slot" => slot as i8,
            "id" => "minecraft:stone",
            "Count" => 64_i8,
        }).collect()),
    };

    compound! {
        "heightmap" => vec![123_i64; 256],
        "sections" => List::ByteArray(vec![vec![0x40; 4096]; 4]),
        "player" => player,
        "title" => "aé日\0😺",
    }
}

#[divan::bench]
fn encode_binary(bencher: Bencher) {
    let c = example_compound();
    let mut buf = vec![];

    bencher.bench_local(|| {
        buf.clear();
        to_binary(black_box(&c), &mut buf).unwrap();
        black_box(&buf);
    });
}

#[divan::bench]
fn decode_binary(bencher: Bencher) {
    let mut buf = vec![];
    to_binary(&example_compound(), &mut buf).unwrap();

    bencher.bench(|| {
        let mut r = black_box(buf.as_slice());
        let _ = black_box(from_binary(&mut r));
    });
}

#[divan::bench]
fn write_snbt(bencher: Bencher) {
    let c = example_compound();

    bencher.bench(|| black_box(to_snbt_string(black_box(&c))));
}

#[divan::bench]
fn parse_snbt(bencher: Bencher) {
    let text = to_snbt_string(&example_compound());

    bencher.bench(|| {
        let _ = black_box(from_snbt_str(black_box(&text)));
    });
}
