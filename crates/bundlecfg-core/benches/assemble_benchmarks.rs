use bundlecfg_core::catalog::{load_css, load_images, load_svg, load_svgr, split_chunks};
use bundlecfg_core::{AssemblyInputs, BuildMode, RevisionSource, assemble, merge};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn assemble_benchmark(c: &mut Criterion) {
    for mode in BuildMode::ALL {
        c.bench_function(&format!("assembly::assemble ({mode})"), |b| {
            b.iter(|| {
                let inputs = AssemblyInputs::new(black_box(mode), "/app")
                    .with_revision(RevisionSource::Fixed("v1.0.0".to_string()));
                assemble(inputs).unwrap()
            })
        });
    }
}

fn merge_benchmark(c: &mut Criterion) {
    c.bench_function("merge::merge (rule fragments)", |b| {
        b.iter(|| {
            merge(black_box([
                load_css(),
                load_images(30_000),
                load_svgr(),
                load_svg(),
                split_chunks(),
            ]))
        })
    });
}

criterion_group!(benches, assemble_benchmark, merge_benchmark);
criterion_main!(benches);
