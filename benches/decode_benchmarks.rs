use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use gmaps_geocode::{Location, RouteMapping};

const RESPONSE: &str = r#"{
    "results": [{
        "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
        "geometry": { "location": { "lat": 37.4224764, "lng": -122.0842499 } },
        "address_components": [
            { "long_name": "1600", "short_name": "1600", "types": ["street_number"] },
            { "long_name": "Amphitheatre Parkway", "short_name": "Amphitheatre Pkwy", "types": ["route"] },
            { "long_name": "Mountain View", "short_name": "Mountain View", "types": ["locality", "political"] },
            { "long_name": "Santa Clara County", "short_name": "Santa Clara County", "types": ["administrative_area_level_2", "political"] },
            { "long_name": "California", "short_name": "CA", "types": ["administrative_area_level_1", "political"] },
            { "long_name": "United States", "short_name": "US", "types": ["country", "political"] },
            { "long_name": "94043", "short_name": "94043", "types": ["postal_code"] }
        ]
    }],
    "status": "OK"
}"#;

fn bench_response_decoding(c: &mut Criterion) {
    c.bench_function("decode_single_result", |b| {
        b.iter(|| Location::from_response_body(black_box(RESPONSE), RouteMapping::Compatible))
    });

    c.bench_function("decode_zero_results", |b| {
        b.iter(|| {
            Location::from_response_body(
                black_box(r#"{"results": [], "status": "ZERO_RESULTS"}"#),
                RouteMapping::Compatible,
            )
        })
    });
}

criterion_group!(benches, bench_response_decoding);
criterion_main!(benches);
