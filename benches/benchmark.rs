use criterion::{criterion_group, criterion_main, Criterion};
use soup_recommender::{Record, Recommender, RecordStore};

const COUNTRIES: [&str; 6] = ["United States", "France", "Japan", "India", "Spain", "Unknown"];
const DIRECTORS: [&str; 8] = [
    "Luc Besson", "Hayao Miyazaki", "Pedro Almodovar", "Martin Scorsese",
    "Kathryn Bigelow", "Satyajit Ray", "Agnes Varda", "Unknown",
];
const ACTORS: [&str; 10] = [
    "Jean Reno", "Natalie Portman", "Penelope Cruz", "Robert Niro", "Shah Rukh Khan",
    "Isabelle Huppert", "Toshiro Mifune", "Viola Davis", "Antonio Banderas", "Juliette Binoche",
];

// deterministic synthetic catalog
fn synthetic_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let cast = format!("{}, {}", ACTORS[i % ACTORS.len()], ACTORS[(i * 7 + 3) % ACTORS.len()]);
            Record::new(
                &format!("Title {}", i),
                Some(COUNTRIES[i % COUNTRIES.len()]),
                Some(DIRECTORS[(i / 3) % DIRECTORS.len()]),
                Some(&cast),
            )
        })
        .collect()
}

fn build_and_query_benchmark(c: &mut Criterion) {
    let records = synthetic_records(2_000);

    c.bench_function("build_2000", |b| {
        b.iter(|| {
            let store = RecordStore::from_records(records.clone()).expect("non-empty catalog");
            Recommender::build(store)
        });
    });

    let recommender = Recommender::build(RecordStore::from_records(records).expect("non-empty catalog"));
    c.bench_function("get_recommendations", |b| {
        b.iter(|| recommender.get_recommendations("Title 42", 10));
    });
}

criterion_group!(benches, build_and_query_benchmark);
criterion_main!(benches);
