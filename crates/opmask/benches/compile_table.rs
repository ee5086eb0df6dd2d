use criterion::{Criterion, criterion_group, criterion_main};
use opmask::table::{DEFAULT_NAMESPACE, OpcodeTable};

fn gen_patterns(count: usize) -> String {
    let mut out = String::new();

    // Deterministic primary/extended opcode pairs, X-form style
    for i in 0..count {
        out.push_str(&format!(
            "op{} 0,5,{} 6,10,0 21,30,{} 31,31,{}\n",
            i,
            i % 64,
            (i * 7) % 1024,
            i % 2
        ));
    }

    out
}

fn bench_compile_table(c: &mut Criterion) {
    for &count in &[1usize, 100, 1000] {
        let input = gen_patterns(count);

        c.bench_function(&format!("compile_{}_patterns", count), |b| {
            b.iter(|| {
                let _ = OpcodeTable::from_patterns(&input).unwrap();
            })
        });

        let table = OpcodeTable::from_patterns(&input).unwrap();
        c.bench_function(&format!("render_{}_patterns", count), |b| {
            b.iter(|| {
                let _ = table.to_source(DEFAULT_NAMESPACE);
            })
        });
    }
}

criterion_group!(benches, bench_compile_table);
criterion_main!(benches);
