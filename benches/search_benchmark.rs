use criterion::{criterion_group, criterion_main, Criterion};
use octofit_dashboard::models::User;
use octofit_dashboard::view::filter_users;
use std::hint::black_box;

const TEAMS: [&str; 4] = ["Team Marvel", "Team DC", "Team Avengers", "Team Justice"];

fn synthetic_users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| User {
            id: Some(i as i64),
            username: Some(format!("athlete{}", i)),
            email: Some(format!("athlete{}@octofit.example", i)),
            team_name: Some(TEAMS[i % TEAMS.len()].to_string()),
            ..Default::default()
        })
        .collect()
}

fn benchmark_filter_users(c: &mut Criterion) {
    let users = synthetic_users(5_000);

    let mut group = c.benchmark_group("users_search");

    group.bench_function("team_query_many_hits", |b| {
        b.iter(|| filter_users(black_box(&users), black_box("marvel")))
    });

    group.bench_function("email_query_single_hit", |b| {
        b.iter(|| filter_users(black_box(&users), black_box("athlete4242@")))
    });

    group.bench_function("no_match", |b| {
        b.iter(|| filter_users(black_box(&users), black_box("zzz")))
    });

    group.finish();
}

criterion_group!(benches, benchmark_filter_users);
criterion_main!(benches);
