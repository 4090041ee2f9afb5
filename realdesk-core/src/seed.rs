//! Demo data the application starts with.

use chrono::{Duration, Utc};

use crate::lead::{Lead, LeadId, LeadStatus};
use crate::property::{Property, PropertyCatalog, PropertyStatus, PropertyType};
use crate::store::LeadStore;

fn avatar(photo: &str) -> Option<String> {
    Some(format!(
        "https://images.unsplash.com/photo-{photo}?auto=format&fit=crop&w=150&h=150&q=80"
    ))
}

/// Five leads spread across the first four stages, newest first.
pub fn leads() -> LeadStore {
    let now = Utc::now();
    LeadStore::with_leads([
        Lead {
            id: LeadId::new("1"),
            name: "Alice Johnson".into(),
            email: "alice@example.com".into(),
            phone: "(555) 123-4567".into(),
            budget: 450_000.0,
            status: LeadStatus::New,
            interest: "2BR Condo in Downtown".into(),
            notes: Some(
                "First time home buyer. Pre-approved for $450k. Interested in amenities like gym \
                 and pool. Available for viewings on weekends only."
                    .into(),
            ),
            avatar: avatar("1494790108377-be9c29b29330"),
            assigned_to: Some("Sarah Miller".into()),
            created_at: now - Duration::hours(2),
        },
        Lead {
            id: LeadId::new("2"),
            name: "Bob Smith".into(),
            email: "bob@example.com".into(),
            phone: "(555) 987-6543".into(),
            budget: 600_000.0,
            status: LeadStatus::New,
            interest: "Family House with backyard".into(),
            notes: Some(
                "Looking for a school district area. Needs a fenced yard for dogs. Prefer \
                 move-in ready but open to minor renovations."
                    .into(),
            ),
            avatar: avatar("1599566150163-29194dcaad36"),
            assigned_to: None,
            created_at: now - Duration::hours(5),
        },
        Lead {
            id: LeadId::new("3"),
            name: "Charlie Brown".into(),
            email: "charlie@example.com".into(),
            phone: "(555) 456-7890".into(),
            budget: 300_000.0,
            status: LeadStatus::Contacted,
            interest: "Fixer upper investment".into(),
            notes: Some("Cash buyer. Looking for ROI properties. Experienced investor.".into()),
            avatar: avatar("1535713875002-d1d0cf377fde"),
            assigned_to: Some("Mike Ross".into()),
            created_at: now - Duration::hours(24),
        },
        Lead {
            id: LeadId::new("4"),
            name: "Diana Prince".into(),
            email: "diana@example.com".into(),
            phone: "(555) 222-3333".into(),
            budget: 1_200_000.0,
            status: LeadStatus::Viewing,
            interest: "Luxury Penthouse".into(),
            notes: Some(
                "High net worth client. Requires 24/7 security building. Wants a view of the \
                 water."
                    .into(),
            ),
            avatar: avatar("1580489944761-15a19d654956"),
            assigned_to: Some("Sarah Miller".into()),
            created_at: now - Duration::hours(48),
        },
        Lead {
            id: LeadId::new("5"),
            name: "Evan Wright".into(),
            email: "evan@example.com".into(),
            phone: "(555) 777-8888".into(),
            budget: 500_000.0,
            status: LeadStatus::Negotiation,
            interest: "Suburban Home".into(),
            notes: Some("Offer submitted on 123 Maple Dr. Negotiating closing costs.".into()),
            avatar: avatar("1527980965255-d3b416303d12"),
            assigned_to: Some("Jessica Pearson".into()),
            created_at: now - Duration::hours(72),
        },
    ])
}

fn listing(
    id: &str,
    title: &str,
    address: &str,
    price: f64,
    (beds, baths, sqft): (u32, f32, u32),
    property_type: PropertyType,
    status: PropertyStatus,
) -> Property {
    Property {
        id: id.into(),
        title: title.into(),
        address: address.into(),
        price,
        image: format!("https://picsum.photos/400/300?random={id}"),
        beds,
        baths,
        sqft,
        property_type,
        status,
        description: None,
    }
}

/// Four listings: two active, one sold, one draft.
pub fn properties() -> PropertyCatalog {
    PropertyCatalog::with_properties(vec![
        listing(
            "1",
            "Modern Downtown Loft",
            "123 Main St, Downtown, Seattle",
            450_000.0,
            (1, 1.0, 850),
            PropertyType::Apartment,
            PropertyStatus::Active,
        ),
        listing(
            "2",
            "Family Home with Garden",
            "456 Oak Ave, Suburbia, Portland",
            850_000.0,
            (4, 2.5, 2400),
            PropertyType::House,
            PropertyStatus::Active,
        ),
        listing(
            "3",
            "Luxury Penthouse Suite",
            "789 High Rise Blvd, Metropolis",
            1_200_000.0,
            (3, 3.0, 1800),
            PropertyType::Apartment,
            PropertyStatus::Sold,
        ),
        listing(
            "4",
            "Cozy Cottage",
            "101 Pine Ln, Forest Edge",
            350_000.0,
            (2, 1.0, 950),
            PropertyType::House,
            PropertyStatus::Draft,
        ),
    ])
}
