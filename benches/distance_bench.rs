use criterion::{Criterion, black_box, criterion_group, criterion_main};
use winnower::util::levenshtein::{keyword_distance, levenshtein_distance, within_distance};

fn generate_keywords(count: usize) -> Vec<String> {
    let stems = [
        "chaussure", "keyword", "refinement", "summer", "window", "marche", "canal", "velo",
    ];
    let mut keywords = Vec::with_capacity(count);
    for i in 0..count {
        let stem = stems[i % stems.len()];
        let mut word = stem.to_string();
        if i % 3 == 0 {
            word.push('s');
        }
        if i % 5 == 0 {
            word.push_str(" soldes");
        }
        keywords.push(word);
    }
    keywords
}

fn bench_distances(c: &mut Criterion) {
    let keywords = generate_keywords(101);
    let query = keywords[0].clone();
    let targets = &keywords[1..101];

    let mut group = c.benchmark_group("edit_distance");

    group.bench_function("full_matrix", |b| {
        b.iter(|| {
            for target in targets {
                let _ = black_box(levenshtein_distance(black_box(&query), black_box(target)));
            }
        })
    });

    group.bench_function("digit_guarded", |b| {
        b.iter(|| {
            for target in targets {
                let _ = black_box(keyword_distance(black_box(&query), black_box(target)));
            }
        })
    });

    group.bench_function("threshold_early_exit", |b| {
        b.iter(|| {
            for target in targets {
                let _ = black_box(within_distance(
                    black_box(&query),
                    black_box(target),
                    black_box(1),
                ));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_distances);
criterion_main!(benches);
