//! Data models for the dealership catalog service
//!
//! This module defines all the data structures used throughout the application:
//! the car and contact entities, their enumerated fields, and the
//! request/response models exchanged over the API.
//!
//! Wire format notes: JSON field names are camelCase and enumerated values
//! keep their Portuguese labels (`"Automático"`, `"Disponível"`, `"Novo"`, ...)
//! so payloads stay compatible with the storefront frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Gearbox type of a vehicle
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarTransmission {
    #[serde(rename = "Manual")]
    Manual,
    #[serde(rename = "Automático")]
    Automatic,
    #[serde(rename = "CVT")]
    Cvt,
    #[serde(rename = "Semi-automático")]
    SemiAutomatic,
    #[serde(rename = "Automatizado")]
    Automated,
}

impl CarTransmission {
    /// Wire label, used by the filter engine for string matching
    pub fn as_str(&self) -> &'static str {
        match self {
            CarTransmission::Manual => "Manual",
            CarTransmission::Automatic => "Automático",
            CarTransmission::Cvt => "CVT",
            CarTransmission::SemiAutomatic => "Semi-automático",
            CarTransmission::Automated => "Automatizado",
        }
    }
}

/// Fuel type of a vehicle
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarFuelType {
    #[serde(rename = "Gasolina")]
    Gasoline,
    #[serde(rename = "Etanol")]
    Ethanol,
    #[serde(rename = "Flex")]
    Flex,
    #[serde(rename = "Diesel")]
    Diesel,
    #[serde(rename = "Elétrico")]
    Electric,
    #[serde(rename = "Híbrido")]
    Hybrid,
}

/// Body style of a vehicle
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarBodyType {
    #[serde(rename = "Hatch")]
    Hatch,
    #[serde(rename = "Sedan")]
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    #[serde(rename = "Picape")]
    Pickup,
    #[serde(rename = "Minivan")]
    Minivan,
    #[serde(rename = "Conversível")]
    Convertible,
    #[serde(rename = "Cupê")]
    Coupe,
    #[serde(rename = "Wagon")]
    Wagon,
}

/// Availability status of a vehicle
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarStatus {
    #[serde(rename = "Disponível")]
    Available,
    #[serde(rename = "Reservado")]
    Reserved,
    #[serde(rename = "Vendido")]
    Sold,
}

/// A standard or optional feature item of a vehicle
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CarItem {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: CarItemType,
    pub category: CarItemCategory,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CarItemType {
    Standard,
    Optional,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarItemCategory {
    #[serde(rename = "Conforto")]
    Comfort,
    #[serde(rename = "Segurança")]
    Safety,
    #[serde(rename = "Tecnologia")]
    Technology,
    #[serde(rename = "Performance")]
    Performance,
    #[serde(rename = "Estética")]
    Aesthetics,
}

/// A maintenance revision entry in a vehicle's history
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CarRevision {
    pub date: String,
    pub mileage: u32,
    pub location: String,
}

/// An insurance claim entry in a vehicle's history
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CarClaim {
    pub date: String,
    #[serde(rename = "type")]
    pub claim_type: String,
    pub description: String,
}

/// Provenance and maintenance history of a vehicle
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CarHistory {
    pub provenance: String,
    pub owner_count: u32,
    pub warranty: String,
    pub revisions: Vec<CarRevision>,
    pub claims: Vec<CarClaim>,
}

/// Financing terms offered for a vehicle
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FinancingConditions {
    pub min_down_payment: f64,
    pub interest_rate: f64,
    pub max_installments: u32,
}

/// A document attached to the sale (registration certificate, spare key, ...)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CarDocument {
    pub name: String,
    pub observation: String,
}

/// Regularity of the vehicle paperwork
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DocumentStatus {
    pub status: String,
    pub pending: Vec<String>,
    pub observation: String,
}

/// Sales conditions and documentation of a vehicle
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CarSales {
    pub payment_methods: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financing_conditions: Option<FinancingConditions>,
    pub accepts_trade: bool,
    pub documentation: Vec<CarDocument>,
    pub document_status: DocumentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
}

/// Represents a car record in the catalog
///
/// This structure carries the full vehicle listing:
/// - Identification (unique `id`, brand, model, years)
/// - Commercial data (price, status, highlight flag, view counter)
/// - Technical details (transmission, fuel, engine, body type)
/// - Media, feature items, history and sales terms
///
/// The record is created once at seed time; the catalog engine treats it as a
/// read-only value during a query.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Unique identifier across the whole catalog (e.g. "car-001")
    pub id: String,

    pub model: String,
    pub brand: String,

    /// Manufacture year; filtering and year sorting use this field
    pub year: i32,

    /// Asking price, non-negative
    pub price: f64,

    /// Cover image URL
    pub image: String,

    pub mileage: u32,
    pub transmission: CarTransmission,

    /// Highlighted records sort first under relevance ordering
    pub highlighted: bool,

    /// Number of detail-page views, second relevance key
    /// Defaults to 0 if not present during deserialization
    #[serde(default)]
    pub views: u64,

    /// Timestamp when this record entered the catalog, third relevance key
    pub date_created: DateTime<Utc>,

    // Extended details
    pub model_year: i32,
    pub fuel: CarFuelType,
    pub power: String,
    pub color: String,
    pub doors: u8,
    pub body_type: CarBodyType,
    pub engine: String,
    pub plate_end: u8,
    pub status: CarStatus,

    // Media
    pub photos: Vec<String>,

    // Features
    pub items: Vec<CarItem>,

    // History
    pub history: CarHistory,

    // Sales
    pub sales: CarSales,
}

/// Lifecycle status of a contact request
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    #[serde(rename = "Novo")]
    New,
    #[serde(rename = "Em atendimento")]
    InProgress,
    #[serde(rename = "Concluído")]
    Completed,
    #[serde(rename = "Cancelado")]
    Canceled,
}

/// Subject of a contact request
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSubject {
    #[serde(rename = "Informações gerais")]
    General,
    #[serde(rename = "Agendamento de test drive")]
    TestDrive,
    #[serde(rename = "Negociação de preço")]
    Negotiation,
    #[serde(rename = "Financiamento")]
    Financing,
    #[serde(rename = "Outro")]
    Other,
}

/// Preferred communication channel of the requester
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPreference {
    #[serde(rename = "Telefone")]
    Phone,
    #[serde(rename = "E-mail")]
    Email,
    #[serde(rename = "WhatsApp")]
    WhatsApp,
}

/// Preferred time window for being contacted
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactBestTime {
    #[serde(rename = "Manhã")]
    Morning,
    #[serde(rename = "Tarde")]
    Afternoon,
    #[serde(rename = "Noite")]
    Night,
    #[serde(rename = "Qualquer horário")]
    #[default]
    Any,
}

/// Represents a contact/lead record
///
/// Created by the lead-intake workflow after the referenced car is confirmed
/// to exist. Mutated only through the explicit update operation
/// (status/consultant/notes); never deleted.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique identifier (e.g. "contact-1722873600000-042")
    pub id: String,

    /// Human-facing daily-sequential number, format YYYYMMDD + 5-digit sequence
    pub protocol: String,

    /// Identifier of the car this lead refers to (read-only foreign reference)
    pub car_id: String,

    /// Denormalized vehicle label, "{brand} {model} ({year})"
    pub car_model: String,

    // Personal data
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preference: ContactPreference,
    pub best_time: ContactBestTime,

    // Message data
    pub subject: ContactSubject,
    pub message: String,
    pub financing: bool,

    // Meta & legal
    pub terms_accepted: bool,
    pub newsletter: bool,
    pub ip_address: String,

    // System data
    pub status: ContactStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
}

/// Query parameters for listing cars with filtering, sorting and pagination
///
/// Multi-value filters (`brand`, `model`, `transmission`) arrive as
/// comma-separated strings. Range bounds are inclusive. Unknown `sortBy`
/// values fall back to relevance ordering.
///
/// # Example
/// Query string: `?brand=Toyota,Honda&yearMin=2022&sortBy=price_asc&page=2`
#[derive(Deserialize, Validate, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CarListQuery {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub transmission: Option<String>,

    #[validate(range(min = 1, message = "yearMin must be a positive integer"))]
    pub year_min: Option<i32>,

    #[validate(range(min = 1, message = "yearMax must be a positive integer"))]
    pub year_max: Option<i32>,

    #[validate(range(min = 0.0, message = "priceMin must be non-negative"))]
    pub price_min: Option<f64>,

    #[validate(range(min = 0.0, message = "priceMax must be non-negative"))]
    pub price_max: Option<f64>,

    pub sort_by: Option<String>,

    /// Page number, starts from 1 (default: 1)
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u32>,

    /// Items per page (default: 12)
    #[validate(range(min = 1, message = "pageSize must be at least 1"))]
    pub page_size: Option<u32>,
}

/// Pagination metadata returned alongside a page of cars
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// One page of catalog results
#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub data: Vec<Car>,
    pub metadata: PageMetadata,
}

/// Min/max price across the whole catalog, both zero when empty
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// The distinct option space offered to the filter UI
///
/// Always reflects the entire catalog, never a filtered subset.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub brands: Vec<String>,
    pub models: Vec<String>,
    pub years: Vec<i32>,
    pub price_range: PriceRange,
    pub transmissions: Vec<String>,
}

/// Request payload for submitting a contact form
///
/// # Example
/// ```json
/// {
///   "carId": "car-001",
///   "name": "Maria Silva",
///   "email": "maria@example.com",
///   "phone": "(11) 98765-4321",
///   "preference": "WhatsApp",
///   "subject": "Agendamento de test drive",
///   "message": "Gostaria de agendar um test drive.",
///   "termsAccepted": true,
///   "captcha": "token"
/// }
/// ```
#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ContactCreateRequest {
    #[validate(length(min = 1, message = "Vehicle ID is required"))]
    pub car_id: String,

    #[validate(
        length(min = 3, max = 100, message = "Name must be 3 to 100 characters"),
        custom(function = validate_full_name)
    )]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(
        length(min = 10, message = "Phone must have at least 10 digits"),
        custom(function = validate_phone)
    )]
    pub phone: String,

    pub preference: ContactPreference,

    #[serde(default)]
    pub best_time: ContactBestTime,

    pub subject: ContactSubject,

    #[validate(length(min = 10, max = 1000, message = "Message must be 10 to 1000 characters"))]
    pub message: String,

    #[serde(default)]
    pub financing: bool,

    /// Must be true; checked by the intake handler
    pub terms_accepted: bool,

    #[serde(default)]
    pub newsletter: bool,

    /// Captcha token; verification is mocked, the literal "invalid" is rejected
    #[validate(length(min = 1, message = "Captcha is required"))]
    pub captcha: String,
}

/// Partial update payload for a contact request (admin/consultant side)
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdateRequest {
    pub status: Option<ContactStatus>,
    pub consultant_id: Option<String>,
    pub notes: Option<String>,
}

/// Fields assembled by the intake workflow before the store assigns
/// the identifier and protocol number
#[derive(Debug, Clone)]
pub struct ContactDraft {
    pub car_id: String,
    pub car_model: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preference: ContactPreference,
    pub best_time: ContactBestTime,
    pub subject: ContactSubject,
    pub message: String,
    pub financing: bool,
    pub terms_accepted: bool,
    pub newsletter: bool,
    pub ip_address: String,
}

/// Name must contain at least a first and a last name
fn validate_full_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().split_whitespace().count() < 2 {
        let mut err = ValidationError::new("full_name");
        err.message = Some("Name must include first and last name".into());
        return Err(err);
    }
    Ok(())
}

/// Phone may only contain digits, parentheses, dashes and spaces
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let valid = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '(' | ')' | '-' | ' '));
    if !valid {
        let mut err = ValidationError::new("phone_chars");
        err.message = Some("Phone contains invalid characters".into());
        return Err(err);
    }
    Ok(())
}
