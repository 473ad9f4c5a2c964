//! Tests for the catalog query engine
//!
//! These tests drive the engine directly with fixture records, covering:
//! - Filter soundness and completeness
//! - The relevance tie-break chain
//! - Pagination metadata and clamping
//! - Filter-options aggregation
//! - Similar-cars ranking invariants

use chrono::{TimeZone, Utc};

use dealership::catalog::{self, CatalogQuery, SortBy};
use dealership::model::{
    Car, CarBodyType, CarFuelType, CarHistory, CarListQuery, CarSales, CarStatus,
    CarTransmission, DocumentStatus,
};
use dealership::seed::seed_cars;

/// Minimal catalog record; tests tweak the fields they care about
fn car(id: &str, brand: &str, model: &str, year: i32, price: f64) -> Car {
    Car {
        id: id.to_string(),
        model: model.to_string(),
        brand: brand.to_string(),
        year,
        price,
        image: String::new(),
        mileage: 10_000,
        transmission: CarTransmission::Automatic,
        highlighted: false,
        views: 0,
        date_created: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        model_year: year,
        fuel: CarFuelType::Flex,
        power: "150 cv".to_string(),
        color: "Preto".to_string(),
        doors: 4,
        body_type: CarBodyType::Sedan,
        engine: "2.0".to_string(),
        plate_end: 0,
        status: CarStatus::Available,
        photos: Vec::new(),
        items: Vec::new(),
        history: CarHistory {
            provenance: "Particular".to_string(),
            owner_count: 1,
            warranty: "Sem garantia".to_string(),
            revisions: Vec::new(),
            claims: Vec::new(),
        },
        sales: CarSales {
            payment_methods: Vec::new(),
            financing_conditions: None,
            accepts_trade: true,
            documentation: Vec::new(),
            document_status: DocumentStatus {
                status: "Regular".to_string(),
                pending: Vec::new(),
                observation: String::new(),
            },
            observation: None,
        },
    }
}

fn ids(cars: &[Car]) -> Vec<&str> {
    cars.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn test_brand_filter_sound_and_complete() {
    let cars = vec![
        car("a", "Toyota", "Corolla", 2023, 100.0),
        car("b", "Honda", "Civic", 2022, 110.0),
        car("c", "Toyota", "Hilux", 2023, 120.0),
        car("d", "Ford", "Ranger", 2024, 130.0),
    ];

    let query = CatalogQuery {
        brand: vec!["Toyota".to_string(), "Honda".to_string()],
        ..CatalogQuery::default()
    };
    let page = catalog::search(cars, &query);

    // Sound: every result matches the predicate
    assert!(page
        .data
        .iter()
        .all(|c| c.brand == "Toyota" || c.brand == "Honda"));
    // Complete: nothing matching was dropped
    assert_eq!(page.metadata.total, 3);
}

#[test]
fn test_filters_are_conjunctive() {
    let cars = vec![
        car("a", "Toyota", "Corolla", 2023, 100_000.0),
        car("b", "Toyota", "Hilux", 2020, 100_000.0),
        car("c", "Toyota", "Corolla", 2023, 500_000.0),
        car("d", "Honda", "Civic", 2023, 100_000.0),
    ];

    let query = CatalogQuery {
        brand: vec!["Toyota".to_string()],
        year_min: Some(2022),
        year_max: Some(2024),
        price_max: Some(200_000.0),
        ..CatalogQuery::default()
    };
    let page = catalog::search(cars, &query);

    assert_eq!(ids(&page.data), vec!["a"]);
}

#[test]
fn test_range_bounds_are_inclusive() {
    let cars = vec![
        car("a", "Toyota", "Corolla", 2022, 100_000.0),
        car("b", "Toyota", "Hilux", 2024, 300_000.0),
    ];

    let query = CatalogQuery {
        year_min: Some(2022),
        year_max: Some(2024),
        price_min: Some(100_000.0),
        price_max: Some(300_000.0),
        ..CatalogQuery::default()
    };
    let page = catalog::search(cars, &query);

    assert_eq!(page.metadata.total, 2);
}

#[test]
fn test_transmission_filter_matches_wire_label() {
    let mut cvt = car("a", "Honda", "Civic", 2022, 100.0);
    cvt.transmission = CarTransmission::Cvt;
    let cars = vec![cvt, car("b", "Toyota", "Corolla", 2023, 100.0)];

    let query = CatalogQuery {
        transmission: vec!["CVT".to_string()],
        ..CatalogQuery::default()
    };
    let page = catalog::search(cars, &query);

    assert_eq!(ids(&page.data), vec!["a"]);
}

#[test]
fn test_relevance_highlighted_first_then_views_then_recency() {
    let mut popular = car("popular", "A", "M1", 2023, 1.0);
    popular.views = 900;

    let mut featured_low = car("featured-low", "B", "M2", 2023, 1.0);
    featured_low.highlighted = true;
    featured_low.views = 10;

    let mut featured_high = car("featured-high", "C", "M3", 2023, 1.0);
    featured_high.highlighted = true;
    featured_high.views = 50;

    let mut old = car("old", "D", "M4", 2023, 1.0);
    old.views = 900;
    old.date_created = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();

    // popular and old tie on highlight and views; popular is newer
    let cars = vec![popular, featured_low, featured_high, old];
    let page = catalog::search(cars, &CatalogQuery::default());

    assert_eq!(
        ids(&page.data),
        vec!["featured-high", "featured-low", "popular", "old"]
    );
}

#[test]
fn test_sort_by_price_and_year() {
    let cars = vec![
        car("mid", "A", "M1", 2022, 200.0),
        car("cheap", "B", "M2", 2024, 100.0),
        car("expensive", "C", "M3", 2023, 300.0),
    ];

    let asc = catalog::search(
        cars.clone(),
        &CatalogQuery {
            sort_by: SortBy::PriceAsc,
            ..CatalogQuery::default()
        },
    );
    assert_eq!(ids(&asc.data), vec!["cheap", "mid", "expensive"]);

    let desc = catalog::search(
        cars.clone(),
        &CatalogQuery {
            sort_by: SortBy::PriceDesc,
            ..CatalogQuery::default()
        },
    );
    assert_eq!(ids(&desc.data), vec!["expensive", "mid", "cheap"]);

    let year_desc = catalog::search(
        cars,
        &CatalogQuery {
            sort_by: SortBy::YearDesc,
            ..CatalogQuery::default()
        },
    );
    assert_eq!(ids(&year_desc.data), vec!["cheap", "expensive", "mid"]);
}

#[test]
fn test_sort_by_model_is_case_insensitive() {
    let cars = vec![
        car("b", "X", "civic", 2023, 1.0),
        car("a", "X", "Corolla", 2023, 1.0),
        car("c", "X", "Argo", 2023, 1.0),
    ];

    let page = catalog::search(
        cars,
        &CatalogQuery {
            sort_by: SortBy::ModelAsc,
            ..CatalogQuery::default()
        },
    );

    assert_eq!(ids(&page.data), vec!["c", "b", "a"]);
}

#[test]
fn test_unrecognized_sort_falls_back_to_relevance() {
    assert_eq!(SortBy::parse(Some("nonsense")), SortBy::Relevance);
    assert_eq!(SortBy::parse(None), SortBy::Relevance);
    assert_eq!(SortBy::parse(Some("price_asc")), SortBy::PriceAsc);
}

#[test]
fn test_query_defaults_from_wire_params() {
    let query = CatalogQuery::from_params(CarListQuery::default());

    assert_eq!(query.page, 1);
    assert_eq!(query.page_size, 12);
    assert_eq!(query.sort_by, SortBy::Relevance);
    assert!(query.brand.is_empty());
}

#[test]
fn test_comma_separated_filters_are_split() {
    let params = CarListQuery {
        brand: Some("Toyota, Honda".to_string()),
        ..CarListQuery::default()
    };
    let query = CatalogQuery::from_params(params);

    assert_eq!(query.brand, vec!["Toyota".to_string(), "Honda".to_string()]);
}

#[test]
fn test_seed_example_toyota_price_asc() {
    let query = CatalogQuery {
        brand: vec!["Toyota".to_string()],
        sort_by: SortBy::PriceAsc,
        ..CatalogQuery::default()
    };
    let page = catalog::search(seed_cars(), &query);

    assert_eq!(page.metadata.total, 2);
    assert_eq!(page.data[0].model, "Corolla XEi");
    assert_eq!(page.data[0].price, 145_000.0);
    assert_eq!(page.data[1].model, "Hilux SRX");
    assert_eq!(page.data[1].price, 320_000.0);
}

#[test]
fn test_seed_example_page_two_of_three() {
    let query = CatalogQuery {
        page: 2,
        page_size: 5,
        ..CatalogQuery::default()
    };
    let page = catalog::search(seed_cars(), &query);

    assert_eq!(page.data.len(), 5);
    assert_eq!(page.metadata.total, 15);
    assert_eq!(page.metadata.total_pages, 3);
    assert!(page.metadata.has_next);
    assert!(page.metadata.has_previous);
}

#[test]
fn test_page_beyond_last_is_empty_not_an_error() {
    let query = CatalogQuery {
        page: 99,
        page_size: 5,
        ..CatalogQuery::default()
    };
    let page = catalog::search(seed_cars(), &query);

    assert!(page.data.is_empty());
    assert_eq!(page.metadata.total, 15);
    assert!(!page.metadata.has_next);
    assert!(page.metadata.has_previous);
}

#[test]
fn test_total_counts_filtered_set_regardless_of_page() {
    let cars: Vec<Car> = (0..7)
        .map(|i| car(&format!("t{}", i), "Toyota", "Corolla", 2023, 100.0))
        .collect();

    for page_number in 1..=4 {
        let query = CatalogQuery {
            brand: vec!["Toyota".to_string()],
            page: page_number,
            page_size: 3,
            ..CatalogQuery::default()
        };
        let page = catalog::search(cars.clone(), &query);
        assert_eq!(page.metadata.total, 7);
        assert_eq!(page.metadata.total_pages, 3);
    }
}

#[test]
fn test_filter_options_distinct_and_sorted() {
    let options = catalog::filter_options(&seed_cars());

    assert_eq!(options.brands.len(), 10);
    assert_eq!(options.brands[0], "BMW");
    assert!(options.brands.windows(2).all(|w| w[0] < w[1]));

    // Years descend
    assert_eq!(options.years, vec![2024, 2023, 2022, 2021]);

    assert_eq!(options.price_range.min, 95_000.0);
    assert_eq!(options.price_range.max, 680_000.0);

    assert_eq!(
        options.transmissions,
        vec!["Automático".to_string(), "CVT".to_string()]
    );
}

#[test]
fn test_filter_options_idempotent() {
    let cars = seed_cars();
    assert_eq!(catalog::filter_options(&cars), catalog::filter_options(&cars));
}

#[test]
fn test_filter_options_empty_catalog() {
    let options = catalog::filter_options(&[]);

    assert!(options.brands.is_empty());
    assert!(options.years.is_empty());
    assert_eq!(options.price_range.min, 0.0);
    assert_eq!(options.price_range.max, 0.0);
}

#[test]
fn test_similar_excludes_target_and_requires_shared_attribute() {
    let mut target = car("target", "Toyota", "Corolla", 2023, 100_000.0);
    target.body_type = CarBodyType::Sedan;

    let mut same_body = car("same-body", "Honda", "Civic", 2022, 110_000.0);
    same_body.body_type = CarBodyType::Sedan;

    let mut same_brand = car("same-brand", "Toyota", "Hilux", 2023, 300_000.0);
    same_brand.body_type = CarBodyType::Pickup;

    let mut unrelated = car("unrelated", "BMW", "X5", 2023, 100_000.0);
    unrelated.body_type = CarBodyType::Suv;

    let cars = vec![target.clone(), same_body, same_brand, unrelated];
    let similar = catalog::similar(cars, &target);

    assert_eq!(ids(&similar), vec!["same-body", "same-brand"]);
}

#[test]
fn test_similar_ranked_by_price_distance() {
    let target = car("target", "Toyota", "Corolla", 2023, 150_000.0);
    let cars = vec![
        target.clone(),
        car("far-above", "Toyota", "A", 2023, 400_000.0),
        car("close-below", "Toyota", "B", 2023, 140_000.0),
        car("close-above", "Toyota", "C", 2023, 165_000.0),
    ];

    let similar = catalog::similar(cars, &target);

    assert_eq!(ids(&similar), vec!["close-below", "close-above", "far-above"]);

    // Distances never decrease along the ranking
    let distances: Vec<f64> = similar
        .iter()
        .map(|c| (c.price - target.price).abs())
        .collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_similar_equal_distance_breaks_on_id() {
    let target = car("target", "Toyota", "Corolla", 2023, 150_000.0);
    let cars = vec![
        target.clone(),
        car("z", "Toyota", "A", 2023, 160_000.0),
        car("a", "Toyota", "B", 2023, 140_000.0),
    ];

    let similar = catalog::similar(cars, &target);

    assert_eq!(ids(&similar), vec!["a", "z"]);
}

#[test]
fn test_similar_truncated_to_six() {
    let target = car("target", "Toyota", "Corolla", 2023, 150_000.0);
    let mut cars = vec![target.clone()];
    for i in 0..10 {
        cars.push(car(
            &format!("c{}", i),
            "Toyota",
            "Model",
            2023,
            150_000.0 + (i as f64) * 1_000.0,
        ));
    }

    let similar = catalog::similar(cars, &target);

    assert_eq!(similar.len(), 6);
    assert!(similar.iter().all(|c| c.id != "target"));
}
