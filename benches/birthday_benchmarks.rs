//! Performance benchmarks for the upcoming-birthdays query.
//!
//! These benchmarks measure the query under different book sizes and the
//! cost of a save/load cycle through the JSON file repository.

use chrono::NaiveDate;
use contact_book::{AddressBook, BookRepository, JsonFileRepository, Record};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Build a book of `size` contacts with birthdays spread over the year.
fn create_test_book(size: usize) -> AddressBook {
    (0..size)
        .map(|i| {
            let mut record = Record::new(format!("Contact {}", i));
            record
                .add_phone(&format!("{:010}", i))
                .expect("generated phone is valid");
            let day = (i % 28) + 1;
            let month = (i % 12) + 1;
            record
                .add_birthday(&format!("{:02}.{:02}.1990", day, month))
                .expect("generated birthday is valid");
            record
        })
        .collect()
}

/// Benchmark the upcoming-birthdays query for several book sizes.
fn bench_upcoming_birthdays(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2023, 12, 27).expect("valid date");
    let mut group = c.benchmark_group("upcoming_birthdays");

    for size in [10, 100, 1_000, 10_000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| black_box(book.upcoming_birthdays_from(black_box(today), 7)));
        });
    }

    group.finish();
}

/// Benchmark a full save and load of a 1 000 contact book.
fn bench_save_load(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("temp dir");
    let repository = JsonFileRepository::new(dir.path().join("bench.json"));
    let book = create_test_book(1_000);

    c.bench_function("save_load_1000", |b| {
        b.iter(|| {
            repository.save(&book).expect("save");
            black_box(repository.load().expect("load"))
        });
    });
}

criterion_group!(benches, bench_upcoming_birthdays, bench_save_load);
criterion_main!(benches);
