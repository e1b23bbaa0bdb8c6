use criterion::{Criterion, black_box, criterion_group, criterion_main};
use field_core::{EditOperation, FieldId, InputKind, MaskedValueStore, SelectionRange};

fn bench_reconstruct_and_apply(c: &mut Criterion) {
    let value = "correct horse battery staple".repeat(8);
    let len = value.chars().count();

    c.bench_function("reconstruct_insert_mid", |b| {
        b.iter(|| {
            let op = EditOperation::reconstruct(
                InputKind::Insert,
                Some("x"),
                SelectionRange::collapsed(black_box(len / 2)),
                len,
            );
            black_box(op.apply(&value))
        })
    });

    c.bench_function("reconstruct_delete_selection", |b| {
        b.iter(|| {
            let op = EditOperation::reconstruct(
                InputKind::DeleteBackward,
                None,
                SelectionRange::new(black_box(10), black_box(len - 10)),
                len,
            );
            black_box(op.apply(&value))
        })
    });
}

fn bench_store_typing(c: &mut Criterion) {
    c.bench_function("store_type_64_chars", |b| {
        b.iter(|| {
            let mut store = MaskedValueStore::new();
            let id = FieldId::from_raw(1);
            store.ensure_initial(id, String::new());
            for _ in 0..64 {
                store.apply_input(id, InputKind::Insert, Some("a"));
            }
            black_box(store.masked(id).map(str::len))
        })
    });
}

criterion_group!(benches, bench_reconstruct_and_apply, bench_store_typing);
criterion_main!(benches);
