//! Benchmark: convert vs read throughput over a synthetic mix of subrecords
//! (placed references, cell grids, float tables, navmesh triangles, strings).
//! Convert runs on a fresh copy per iteration so every pass sees console bytes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use esmconv::{convert, convert_in_place, read_fields, Endianness};

fn floats_be(n: usize) -> Vec<u8> {
    (0..n).flat_map(|i| (i as f32 * 0.25).to_be_bytes()).collect()
}

fn workload() -> Vec<(&'static str, &'static str, Vec<u8>)> {
    let mut out = Vec::new();
    for i in 0..64u32 {
        out.push(("NAME", "REFR", i.to_be_bytes().to_vec()));
        out.push(("DATA", "REFR", floats_be(6)));
        out.push(("XSCL", "REFR", 1.0f32.to_be_bytes().to_vec()));
    }
    out.push(("XCLC", "CELL", floats_be(3)));
    out.push(("FGGS", "NPC_", floats_be(50)));
    out.push(("NVVX", "NAVM", floats_be(3 * 256)));
    out.push(("NVTR", "NAVM", (0..16 * 512).map(|i| i as u8).collect()));
    out.push(("EDID", "WEAP", b"WeapNVHuntingRifle\0".to_vec()));
    out.push(("DATA", "ZZZZ", floats_be(8)));
    out
}

fn bench(c: &mut Criterion) {
    let records = workload();
    let bytes: usize = records.iter().map(|(_, _, p)| p.len()).sum();
    eprintln!("{} subrecords, {} bytes per pass", records.len(), bytes);

    c.bench_function("convert (copy)", |b| {
        b.iter(|| {
            for (sig, rt, payload) in &records {
                black_box(convert(sig, rt, black_box(payload)));
            }
        })
    });

    c.bench_function("convert_in_place", |b| {
        b.iter_batched(
            || records.clone(),
            |mut batch| {
                for (sig, rt, payload) in batch.iter_mut() {
                    black_box(convert_in_place(sig, rt, payload));
                }
                batch
            },
            criterion::BatchSize::SmallInput,
        )
    });

    c.bench_function("read_fields (big-endian)", |b| {
        b.iter(|| {
            for (sig, rt, payload) in &records {
                black_box(read_fields(sig, rt, black_box(payload), Endianness::Big));
            }
        })
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
