// Criterion benchmarks for the trailmatch recommendation pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trailmatch::core::{passes_filters, Matcher};
use trailmatch::models::{
    CarbonFootprint, Destination, Difficulty, MatchingLimits, NaturePreference, TravelStyle,
    UserPreferences,
};

fn create_destination(id: usize) -> Destination {
    let difficulty = match id % 3 {
        0 => Difficulty::Easy,
        1 => Difficulty::Moderate,
        _ => Difficulty::Challenging,
    };

    Destination {
        id: id.to_string(),
        name: format!("Trek {}", id),
        location: "Nepal".to_string(),
        description: String::new(),
        image_url: String::new(),
        image_detail_url: None,
        difficulty,
        duration_min: 2 + (id % 5) as u32,
        duration_max: 7 + (id % 9) as u32,
        altitude: "3,000m".to_string(),
        rating: 3.0 + (id % 20) as f64 / 10.0,
        reviews_count: (id * 13 % 500) as i64,
        eco_score: (id * 17 % 101) as i32,
        carbon_footprint: CarbonFootprint::Low,
        cost_budget: 300,
        cost_medium: 600,
        cost_luxury: 1200,
        is_hidden_gem: id % 7 == 0,
        group_friendly: true,
        children_friendly: id % 2 == 0,
        elderly_friendly: id % 3 == 0,
        accessibility_notes: String::new(),
        vibes: if id % 4 == 0 {
            vec![]
        } else {
            vec!["Adventure".to_string(), "Peaceful".to_string()]
        },
        highlights: vec![],
        amenities: vec![],
        activities_list: vec![],
        sustainable_tips: vec![],
        warnings: vec![],
        health_advisories: vec![],
        best_months: vec![],
        created_at: None,
        updated_at: None,
    }
}

fn create_preferences() -> UserPreferences {
    UserPreferences {
        nature_preference: vec![NaturePreference::Mountains],
        travel_style: TravelStyle::EcoFriendly,
        duration: 7,
        travelers: 2,
        has_children: true,
        ..Default::default()
    }
}

fn bench_filter_pipeline(c: &mut Criterion) {
    let preferences = create_preferences();
    let limits = MatchingLimits::default();
    let catalog: Vec<Destination> = (0..100).map(create_destination).collect();

    c.bench_function("filter_pipeline_100_destinations", |b| {
        b.iter(|| {
            let passed: Vec<_> = catalog
                .iter()
                .filter(|d| passes_filters(d, black_box(&preferences), &limits))
                .collect();
            black_box(passed)
        });
    });
}

fn bench_recommend(c: &mut Criterion) {
    let matcher = Matcher::with_default_limits();
    let preferences = create_preferences();

    let mut group = c.benchmark_group("matching");

    for catalog_size in [10usize, 50, 100, 500, 1000].iter() {
        let catalog: Vec<Destination> = (0..*catalog_size).map(create_destination).collect();

        group.bench_with_input(
            BenchmarkId::new("recommend", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| {
                    matcher.recommend(black_box(&preferences), black_box(catalog.clone()))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_filter_pipeline, bench_recommend);
criterion_main!(benches);
