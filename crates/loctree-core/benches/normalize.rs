use criterion::{black_box, criterion_group, criterion_main, Criterion};
use loctree_core::{normalize_tree, Alphabet};
use serde_json::json;

fn bench_normalize(c: &mut Criterion) {
    let alphabet = Alphabet::cyrillic();
    let tree = json!({
        "item.wrench.name": "гаечный Ключ",
        "item.wrench.tooltip": "§7используй МЭ терминал. т. е. вот так!\nвторая строка",
        "item.battery.name": "Изготовь Зарядник",
        "gui.status": "осталось %d штук из %s",
        "book": {
            "title": "руководство Инженера",
            "pages": [
                "первое предложение. второе предложение! ТЭС готова?",
                "plain english page with no work to do at all"
            ]
        }
    });

    c.bench_function("normalize_tree/lang_map", |b| {
        b.iter(|| normalize_tree(&alphabet, black_box(&tree)))
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
