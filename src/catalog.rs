//! Catalog query engine
//!
//! Pure functions over a snapshot of the car collection:
//! - `search` - filter, sort and paginate a listing request
//! - `filter_options` - reduce the full catalog to the distinct option space
//! - `similar` - rank recommendations for a given car
//!
//! The engine never touches a store directly; callers hand it the records,
//! which keeps every code path testable with plain fixtures.

use std::collections::BTreeSet;

use crate::model::{Car, CarListQuery, CatalogPage, FilterOptions, PageMetadata, PriceRange};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Maximum number of entries returned by `similar`
pub const SIMILAR_LIMIT: usize = 6;

/// Active comparator for a listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    YearAsc,
    YearDesc,
    ModelAsc,
    ModelDesc,
}

impl SortBy {
    /// Parse the wire value; unrecognized or missing values fall back to
    /// relevance
    pub fn parse(value: Option<&str>) -> SortBy {
        match value {
            Some("price_asc") => SortBy::PriceAsc,
            Some("price_desc") => SortBy::PriceDesc,
            Some("year_asc") => SortBy::YearAsc,
            Some("year_desc") => SortBy::YearDesc,
            Some("model_asc") => SortBy::ModelAsc,
            Some("model_desc") => SortBy::ModelDesc,
            _ => SortBy::Relevance,
        }
    }
}

/// A validated listing request as the engine consumes it
///
/// Multi-value filters are already split; paging fields carry their defaults.
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    pub brand: Vec<String>,
    pub model: Vec<String>,
    pub transmission: Vec<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub sort_by: SortBy,
    pub page: usize,
    pub page_size: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        CatalogQuery {
            brand: Vec::new(),
            model: Vec::new(),
            transmission: Vec::new(),
            year_min: None,
            year_max: None,
            price_min: None,
            price_max: None,
            sort_by: SortBy::Relevance,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogQuery {
    /// Build an engine query from validated wire parameters
    pub fn from_params(params: CarListQuery) -> CatalogQuery {
        CatalogQuery {
            brand: csv_values(params.brand.as_deref()),
            model: csv_values(params.model.as_deref()),
            transmission: csv_values(params.transmission.as_deref()),
            year_min: params.year_min,
            year_max: params.year_max,
            price_min: params.price_min,
            price_max: params.price_max,
            sort_by: SortBy::parse(params.sort_by.as_deref()),
            page: params.page.map(|p| p as usize).unwrap_or(DEFAULT_PAGE),
            page_size: params
                .page_size
                .map(|p| p as usize)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

/// Split a comma-separated filter value into its entries
fn csv_values(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Filter, sort and paginate a snapshot of the catalog
///
/// All filter predicates are conjunctive. `metadata.total` counts the
/// filtered set before pagination; a page beyond the last yields an empty
/// `data` slice, not an error.
pub fn search(cars: Vec<Car>, query: &CatalogQuery) -> CatalogPage {
    let mut cars = cars;
    cars.retain(|car| matches_filters(car, query));
    sort_cars(&mut cars, query.sort_by);
    paginate(cars, query.page, query.page_size)
}

fn matches_filters(car: &Car, query: &CatalogQuery) -> bool {
    if !query.brand.is_empty() && !query.brand.iter().any(|b| *b == car.brand) {
        return false;
    }
    if !query.model.is_empty() && !query.model.iter().any(|m| *m == car.model) {
        return false;
    }
    if !query.transmission.is_empty()
        && !query
            .transmission
            .iter()
            .any(|t| t == car.transmission.as_str())
    {
        return false;
    }
    if let Some(min) = query.year_min {
        if car.year < min {
            return false;
        }
    }
    if let Some(max) = query.year_max {
        if car.year > max {
            return false;
        }
    }
    if let Some(min) = query.price_min {
        if car.price < min {
            return false;
        }
    }
    if let Some(max) = query.price_max {
        if car.price > max {
            return false;
        }
    }
    true
}

/// Apply the active comparator in place
///
/// `Vec::sort_by` is stable, so records comparing equal keep their incoming
/// order. Relevance is a three-level tie-break: highlighted first, then more
/// views, then more recent creation.
fn sort_cars(cars: &mut [Car], sort_by: SortBy) {
    match sort_by {
        SortBy::PriceAsc => cars.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceDesc => cars.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::YearAsc => cars.sort_by(|a, b| a.year.cmp(&b.year)),
        SortBy::YearDesc => cars.sort_by(|a, b| b.year.cmp(&a.year)),
        SortBy::ModelAsc => {
            cars.sort_by(|a, b| a.model.to_lowercase().cmp(&b.model.to_lowercase()))
        }
        SortBy::ModelDesc => {
            cars.sort_by(|a, b| b.model.to_lowercase().cmp(&a.model.to_lowercase()))
        }
        SortBy::Relevance => cars.sort_by(|a, b| {
            b.highlighted
                .cmp(&a.highlighted)
                .then_with(|| b.views.cmp(&a.views))
                .then_with(|| b.date_created.cmp(&a.date_created))
        }),
    }
}

fn paginate(cars: Vec<Car>, page: usize, page_size: usize) -> CatalogPage {
    let total = cars.len();
    let total_pages = total.div_ceil(page_size);
    let offset = (page - 1).saturating_mul(page_size);

    let data: Vec<Car> = cars.into_iter().skip(offset).take(page_size).collect();

    CatalogPage {
        data,
        metadata: PageMetadata {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        },
    }
}

/// Reduce the full catalog to the distinct, sorted option space
///
/// Brands, models and transmissions are lexicographic; years descend; the
/// price range collapses to zeroes on an empty collection. No filtering is
/// applied here so the UI can always offer every option.
pub fn filter_options(cars: &[Car]) -> FilterOptions {
    let brands: Vec<String> = cars
        .iter()
        .map(|car| car.brand.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let models: Vec<String> = cars
        .iter()
        .map(|car| car.model.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let years: Vec<i32> = cars
        .iter()
        .map(|car| car.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect();

    let transmissions: Vec<String> = cars
        .iter()
        .map(|car| car.transmission.as_str().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let price_range = if cars.is_empty() {
        PriceRange { min: 0.0, max: 0.0 }
    } else {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for car in cars {
            min = min.min(car.price);
            max = max.max(car.price);
        }
        PriceRange { min, max }
    };

    FilterOptions {
        brands,
        models,
        years,
        price_range,
        transmissions,
    }
}

/// Rank recommendations for the target car
///
/// Candidates share the target's body type or brand (inclusive or) and never
/// include the target itself. Ordering is by absolute price distance
/// ascending; equal distances break on candidate id so the result does not
/// depend on collection iteration order. At most `SIMILAR_LIMIT` entries.
pub fn similar(cars: Vec<Car>, target: &Car) -> Vec<Car> {
    let mut candidates: Vec<Car> = cars
        .into_iter()
        .filter(|car| {
            car.id != target.id
                && (car.body_type == target.body_type || car.brand == target.brand)
        })
        .collect();

    candidates.sort_by(|a, b| {
        let dist_a = (a.price - target.price).abs();
        let dist_b = (b.price - target.price).abs();
        dist_a.total_cmp(&dist_b).then_with(|| a.id.cmp(&b.id))
    });

    candidates.truncate(SIMILAR_LIMIT);
    candidates
}
