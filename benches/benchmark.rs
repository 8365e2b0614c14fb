use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use voicecal::config::CalendarConfig;
use voicecal::{format_timestamp, parse, schedule_from_transcript};

fn parse_benchmark(c: &mut Criterion) {
    let now = NaiveDate::from_ymd_opt(2025, 1, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let config = CalendarConfig::default();

    c.bench_function("parse evening meeting", |b| {
        b.iter(|| parse(black_box("4월 28일 저녁 9시 회의"), now))
    });

    c.bench_function("parse without date", |b| {
        b.iter(|| parse(black_box("내일 회의 잡아줘"), now))
    });

    c.bench_function("format timestamp", |b| b.iter(|| format_timestamp(black_box(&now))));

    c.bench_function("schedule from transcript", |b| {
        b.iter(|| schedule_from_transcript(black_box("12월 24일 밤 8시 크리스마스 파티"), now, &config))
    });
}

criterion_group!(benches, parse_benchmark);
criterion_main!(benches);
