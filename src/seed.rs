//! Startup catalog data
//!
//! Builds the demonstration inventory loaded into the `CarStore` at process
//! start. Base listings carry the per-vehicle facts; `enrich` fills in the
//! extended details shared by the whole demo fleet.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::model::{
    Car, CarBodyType, CarDocument, CarFuelType, CarHistory, CarItem, CarItemCategory,
    CarItemType, CarRevision, CarSales, CarStatus, CarTransmission, DocumentStatus,
    FinancingConditions,
};

struct BaseCar {
    id: &'static str,
    brand: &'static str,
    model: &'static str,
    year: i32,
    price: f64,
    image: &'static str,
    mileage: u32,
    transmission: CarTransmission,
    highlighted: bool,
    views: u64,
    body_type: CarBodyType,
}

const BASE_CATALOG: [BaseCar; 15] = [
    BaseCar {
        id: "car-001",
        brand: "Toyota",
        model: "Corolla XEi",
        year: 2023,
        price: 145_000.0,
        image: "https://images.unsplash.com/photo-1623869675781-80e6c6782c47?auto=format&fit=crop&w=600&q=80",
        mileage: 15_000,
        transmission: CarTransmission::Automatic,
        highlighted: true,
        views: 150,
        body_type: CarBodyType::Sedan,
    },
    BaseCar {
        id: "car-002",
        brand: "Honda",
        model: "Civic Touring",
        year: 2022,
        price: 160_000.0,
        image: "https://images.unsplash.com/photo-1606618754116-0c03481368d8?auto=format&fit=crop&w=600&q=80",
        mileage: 22_000,
        transmission: CarTransmission::Cvt,
        highlighted: true,
        views: 120,
        body_type: CarBodyType::Sedan,
    },
    BaseCar {
        id: "car-003",
        brand: "Ford",
        model: "Mustang GT",
        year: 2021,
        price: 450_000.0,
        image: "https://images.unsplash.com/photo-1584345604476-8ec5e12e42dd?auto=format&fit=crop&w=600&q=80",
        mileage: 5_000,
        transmission: CarTransmission::Automatic,
        highlighted: true,
        views: 300,
        body_type: CarBodyType::Coupe,
    },
    BaseCar {
        id: "car-004",
        brand: "Chevrolet",
        model: "Onix Plus",
        year: 2024,
        price: 95_000.0,
        image: "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?auto=format&fit=crop&w=600&q=80",
        mileage: 0,
        transmission: CarTransmission::Automatic,
        highlighted: false,
        views: 80,
        body_type: CarBodyType::Sedan,
    },
    BaseCar {
        id: "car-005",
        brand: "BMW",
        model: "X5 xDrive45e",
        year: 2023,
        price: 680_000.0,
        image: "https://images.unsplash.com/photo-1556189250-72ba95452250?auto=format&fit=crop&w=600&q=80",
        mileage: 8_000,
        transmission: CarTransmission::Automatic,
        highlighted: true,
        views: 200,
        body_type: CarBodyType::Suv,
    },
    BaseCar {
        id: "car-006",
        brand: "Fiat",
        model: "Pulse Audace",
        year: 2023,
        price: 115_000.0,
        image: "https://images.unsplash.com/photo-1626847037657-fd3622613ce3?auto=format&fit=crop&w=600&q=80",
        mileage: 12_000,
        transmission: CarTransmission::Cvt,
        highlighted: false,
        views: 95,
        body_type: CarBodyType::Suv,
    },
    BaseCar {
        id: "car-007",
        brand: "Jeep",
        model: "Compass Longitude",
        year: 2022,
        price: 175_000.0,
        image: "https://images.unsplash.com/photo-1533473359331-0135ef1b58bf?auto=format&fit=crop&w=600&q=80",
        mileage: 28_000,
        transmission: CarTransmission::Automatic,
        highlighted: false,
        views: 110,
        body_type: CarBodyType::Suv,
    },
    BaseCar {
        id: "car-008",
        brand: "Volkswagen",
        model: "T-Cross Highline",
        year: 2023,
        price: 155_000.0,
        image: "https://images.unsplash.com/photo-1541899481282-d53bffe3c35d?auto=format&fit=crop&w=600&q=80",
        mileage: 18_000,
        transmission: CarTransmission::Automatic,
        highlighted: false,
        views: 105,
        body_type: CarBodyType::Suv,
    },
    BaseCar {
        id: "car-009",
        brand: "Hyundai",
        model: "Creta Ultimate",
        year: 2024,
        price: 165_000.0,
        image: "https://images.unsplash.com/photo-1549317661-bd32c8ce0db2?auto=format&fit=crop&w=600&q=80",
        mileage: 5_000,
        transmission: CarTransmission::Automatic,
        highlighted: false,
        views: 90,
        body_type: CarBodyType::Suv,
    },
    BaseCar {
        id: "car-010",
        brand: "Nissan",
        model: "Kicks Exclusive",
        year: 2022,
        price: 135_000.0,
        image: "https://images.unsplash.com/photo-1580273916550-e323be2ae537?auto=format&fit=crop&w=600&q=80",
        mileage: 35_000,
        transmission: CarTransmission::Cvt,
        highlighted: false,
        views: 75,
        body_type: CarBodyType::Suv,
    },
    BaseCar {
        id: "car-011",
        brand: "Toyota",
        model: "Hilux SRX",
        year: 2023,
        price: 320_000.0,
        image: "https://images.unsplash.com/photo-1533473359331-0135ef1b58bf?auto=format&fit=crop&w=600&q=80",
        mileage: 25_000,
        transmission: CarTransmission::Automatic,
        highlighted: true,
        views: 180,
        body_type: CarBodyType::Pickup,
    },
    BaseCar {
        id: "car-012",
        brand: "Ford",
        model: "Ranger Limited",
        year: 2024,
        price: 340_000.0,
        image: "https://images.unsplash.com/photo-1609521263047-f8f205293f24?auto=format&fit=crop&w=600&q=80",
        mileage: 2_000,
        transmission: CarTransmission::Automatic,
        highlighted: true,
        views: 160,
        body_type: CarBodyType::Pickup,
    },
    BaseCar {
        id: "car-013",
        brand: "Chevrolet",
        model: "Tracker Premier",
        year: 2023,
        price: 140_000.0,
        image: "https://images.unsplash.com/photo-1626847037657-fd3622613ce3?auto=format&fit=crop&w=600&q=80",
        mileage: 15_000,
        transmission: CarTransmission::Automatic,
        highlighted: false,
        views: 85,
        body_type: CarBodyType::Suv,
    },
    BaseCar {
        id: "car-014",
        brand: "Volkswagen",
        model: "Nivus Highline",
        year: 2022,
        price: 130_000.0,
        image: "https://images.unsplash.com/photo-1541899481282-d53bffe3c35d?auto=format&fit=crop&w=600&q=80",
        mileage: 30_000,
        transmission: CarTransmission::Automatic,
        highlighted: false,
        views: 95,
        body_type: CarBodyType::Suv,
    },
    BaseCar {
        id: "car-015",
        brand: "Fiat",
        model: "Toro Ultra",
        year: 2023,
        price: 210_000.0,
        image: "https://images.unsplash.com/photo-1533473359331-0135ef1b58bf?auto=format&fit=crop&w=600&q=80",
        mileage: 18_000,
        transmission: CarTransmission::Automatic,
        highlighted: false,
        views: 100,
        body_type: CarBodyType::Pickup,
    },
];

/// Demonstration inventory, all records stamped with the same creation time
pub fn seed_cars() -> Vec<Car> {
    let now = Utc::now();
    BASE_CATALOG.iter().map(|base| enrich(base, now)).collect()
}

/// Fill in the extended details shared by the demo fleet
fn enrich(base: &BaseCar, now: DateTime<Utc>) -> Car {
    // Vehicles with effectively no mileage are sold as new
    let is_new = base.mileage < 100;

    let history = if is_new {
        CarHistory {
            provenance: "Concessionária".to_string(),
            owner_count: 0,
            warranty: "3 anos".to_string(),
            revisions: Vec::new(),
            claims: Vec::new(),
        }
    } else {
        CarHistory {
            provenance: "Particular".to_string(),
            owner_count: 1,
            warranty: "Sem garantia".to_string(),
            revisions: vec![CarRevision {
                date: "2023-01-15".to_string(),
                mileage: 10_000,
                location: "Concessionária Oficial".to_string(),
            }],
            claims: Vec::new(),
        }
    };

    Car {
        id: base.id.to_string(),
        model: base.model.to_string(),
        brand: base.brand.to_string(),
        year: base.year,
        price: base.price,
        image: base.image.to_string(),
        mileage: base.mileage,
        transmission: base.transmission,
        highlighted: base.highlighted,
        views: base.views,
        date_created: now,
        model_year: base.year,
        fuel: CarFuelType::Flex,
        power: "150 cv".to_string(),
        color: "Preto".to_string(),
        doors: 4,
        body_type: base.body_type,
        engine: "2.0".to_string(),
        plate_end: rand::rng().random_range(0..10),
        status: CarStatus::Available,
        photos: vec![
            base.image.to_string(),
            "https://images.unsplash.com/photo-1542282088-fe8426682b8f?auto=format&fit=crop&w=600&q=80".to_string(),
            "https://images.unsplash.com/photo-1549399542-7e3f8b79c341?auto=format&fit=crop&w=600&q=80".to_string(),
            "https://images.unsplash.com/photo-1503376763036-066120622c74?auto=format&fit=crop&w=600&q=80".to_string(),
        ],
        items: default_items(),
        history,
        sales: CarSales {
            payment_methods: vec![
                "À vista".to_string(),
                "Financiamento".to_string(),
                "Consórcio".to_string(),
            ],
            financing_conditions: Some(FinancingConditions {
                min_down_payment: base.price * 0.2,
                interest_rate: 1.49,
                max_installments: 60,
            }),
            accepts_trade: true,
            documentation: vec![
                CarDocument {
                    name: "CRV".to_string(),
                    observation: "Certificado de Registro de Veículo".to_string(),
                },
                CarDocument {
                    name: "Manual e Chave Reserva".to_string(),
                    observation: "Disponível".to_string(),
                },
            ],
            document_status: DocumentStatus {
                status: "Regular".to_string(),
                pending: Vec::new(),
                observation: "IPVA 2024 Pago".to_string(),
            },
            observation: None,
        },
    }
}

fn default_items() -> Vec<CarItem> {
    let item = |name: &str, item_type: CarItemType, category: CarItemCategory| CarItem {
        name: name.to_string(),
        item_type,
        category,
    };

    vec![
        item("Ar condicionado digital", CarItemType::Standard, CarItemCategory::Comfort),
        item("Direção elétrica", CarItemType::Standard, CarItemCategory::Comfort),
        item("Vidros elétricos", CarItemType::Standard, CarItemCategory::Comfort),
        item("Airbags frontais e laterais", CarItemType::Standard, CarItemCategory::Safety),
        item("Freios ABS", CarItemType::Standard, CarItemCategory::Safety),
        item("Controle de estabilidade", CarItemType::Standard, CarItemCategory::Safety),
        item("Central multimídia", CarItemType::Standard, CarItemCategory::Technology),
        item("Câmera de ré", CarItemType::Standard, CarItemCategory::Technology),
        item("Bancos em couro", CarItemType::Optional, CarItemCategory::Aesthetics),
        item("Teto solar", CarItemType::Optional, CarItemCategory::Aesthetics),
    ]
}
