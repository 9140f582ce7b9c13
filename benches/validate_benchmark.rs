use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{thread_rng, Rng};
use royella_booking::{BookingIntentValidator, BookingRequest, DateLocale, GuestCounts};

// Random mix of valid and invalid booking requests
fn generate_requests(count: usize) -> Vec<BookingRequest> {
    let mut rng = thread_rng();
    let base = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    (0..count)
        .map(|_| {
            let check_in = base + Duration::days(rng.gen_range(0..365));
            let check_out = check_in + Duration::days(rng.gen_range(-2..21));
            let counts = GuestCounts::new(
                rng.gen_range(1..4),
                rng.gen_range(1..6),
                rng.gen_range(0..4),
            )
            .unwrap();

            // 10% of requests are missing a date
            let missing = rng.gen::<f64>() < 0.1;
            BookingRequest::new()
                .with_check_in(if missing { None } else { Some(check_in) })
                .with_check_out(Some(check_out))
                .with_counts(counts)
        })
        .collect()
}

pub fn validate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("booking_validation");

    for locale in [DateLocale::EnUs, DateLocale::Iso] {
        let validator = BookingIntentValidator::new(locale);
        let requests = generate_requests(1000);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", locale)),
            &requests,
            |b, requests| {
                b.iter(|| {
                    for request in requests {
                        let _ = black_box(validator.validate(black_box(request)));
                    }
                });
            },
        );
    }

    group.finish();
}

pub fn counter_benchmark(c: &mut Criterion) {
    c.bench_function("guest_counter_transitions", |b| {
        b.iter(|| {
            let mut request = BookingRequest::new();
            for field in royella_booking::CounterField::ALL {
                for _ in 0..10 {
                    request = request.increment(field);
                }
                for _ in 0..15 {
                    request = request.decrement(field);
                }
            }
            black_box(request)
        });
    });
}

criterion_group!(benches, validate_benchmark, counter_benchmark);
criterion_main!(benches);
