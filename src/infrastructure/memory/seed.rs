use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::{
    domain::{
        entities::{
            payments::PaymentEntity, products::ProductEntity, stores::StoreEntity,
            subscriptions::SubscriptionEntity, users::UserEntity,
        },
        value_objects::{
            enums::{
                payment_methods::PaymentMethod, payment_statuses::PaymentStatus,
                product_statuses::ProductStatus, store_statuses::StoreStatus,
                store_types::StoreType, user_roles::UserRole,
            },
            payments::DEFAULT_ANNUAL_FEE_MINOR,
            subscriptions::SubscriptionState,
        },
    },
    infrastructure::memory::memory_connection::MarketTables,
};

struct DemoStore {
    email: &'static str,
    name: &'static str,
    logo_seed: &'static str,
    store_type: StoreType,
    description: &'static str,
    phone: &'static str,
    status: StoreStatus,
    subscription: fn(DateTime<Utc>) -> SubscriptionState,
}

struct DemoProduct {
    store: usize,
    name: &'static str,
    price_dzd: i64,
    description: &'static str,
    image_seeds: &'static [&'static str],
    quantity: u32,
}

const DEMO_STORES: [DemoStore; 4] = [
    DemoStore {
        email: "fellah@example.com",
        name: "مزرعة الخيرات",
        logo_seed: "farm1",
        store_type: StoreType::Producer,
        description: "أجود أنواع الخضروات والفواكه الطازجة مباشرة من الحقل.",
        phone: "0555123456",
        status: StoreStatus::Active,
        subscription: |now| SubscriptionState::Active {
            expires: now + Duration::days(300),
        },
    },
    DemoStore {
        email: "dates@example.com",
        name: "تمور الواحات",
        logo_seed: "dates",
        store_type: StoreType::Wholesaler,
        description: "بيع التمور بالجملة لكل أنحاء الوطن.",
        phone: "0666789012",
        status: StoreStatus::Trial,
        subscription: |now| SubscriptionState::Trial {
            trial_ends: now + Duration::days(15),
        },
    },
    DemoStore {
        email: "olive@example.com",
        name: "زيت زيتون القبائل",
        logo_seed: "olive",
        store_type: StoreType::Retailer,
        description: "زيت زيتون بكر عصْرة أولى على البارد.",
        phone: "0777456789",
        status: StoreStatus::Active,
        subscription: |now| SubscriptionState::Active {
            expires: now + Duration::days(5),
        },
    },
    DemoStore {
        email: "transport@example.com",
        name: "نقل سريع",
        logo_seed: "truck",
        store_type: StoreType::Transport,
        description: "خدمات نقل وتوصيل المنتجات الفلاحية.",
        phone: "0550987654",
        status: StoreStatus::Suspended,
        subscription: |_| SubscriptionState::Expired,
    },
];

const DEMO_PRODUCTS: [DemoProduct; 4] = [
    DemoProduct {
        store: 0,
        name: "طماطم طازجة",
        price_dzd: 120,
        description: "طماطم حمراء ناضجة، مثالية للسلطات والطبخ.",
        image_seeds: &["tomato1", "tomato2"],
        quantity: 500,
    },
    DemoProduct {
        store: 0,
        name: "بطاطا",
        price_dzd: 80,
        description: "بطاطا عالية الجودة من حقولنا.",
        image_seeds: &["potato1"],
        quantity: 1000,
    },
    DemoProduct {
        store: 1,
        name: "تمر دقلة نور",
        price_dzd: 800,
        description: "تمر دقلة نور الفاخر من بسكرة.",
        image_seeds: &["dates1", "dates2"],
        quantity: 15,
    },
    DemoProduct {
        store: 2,
        name: "زيت زيتون 5 لتر",
        price_dzd: 4500,
        description: "عبوة 5 لتر من زيت الزيتون البكر الممتاز.",
        image_seeds: &["oliveoil1"],
        quantity: 0,
    },
];

/// Fills `tables` with the demo marketplace: four stores with their owners, products,
/// subscriptions, and one historical payment for the first store.
pub fn seed_demo_market(tables: &mut MarketTables, now: DateTime<Utc>, password_hash: &str) {
    let mut store_ids = Vec::with_capacity(DEMO_STORES.len());

    for demo in &DEMO_STORES {
        let user_id = Uuid::new_v4();
        let store_id = Uuid::new_v4();
        store_ids.push(store_id);

        tables.users.push(UserEntity {
            id: user_id,
            email: demo.email.to_string(),
            phone: demo.phone.to_string(),
            password_hash: password_hash.to_string(),
            role: UserRole::Seller,
            store_id,
            created_at: now,
        });
        tables.stores.push(StoreEntity {
            id: store_id,
            owner_id: user_id,
            name: demo.name.to_string(),
            logo: format!("https://picsum.photos/seed/{}/200", demo.logo_seed),
            store_type: demo.store_type,
            description: demo.description.to_string(),
            phone: demo.phone.to_string(),
            status: demo.status,
            created_at: now,
        });
        tables.subscriptions.push(SubscriptionEntity {
            store_id,
            state: (demo.subscription)(now),
        });
    }

    for demo in &DEMO_PRODUCTS {
        tables.products.push(ProductEntity {
            id: Uuid::new_v4(),
            store_id: store_ids[demo.store],
            name: demo.name.to_string(),
            description: demo.description.to_string(),
            price_minor: demo.price_dzd * 100,
            images: demo
                .image_seeds
                .iter()
                .map(|seed| format!("https://picsum.photos/seed/{}/400/300", seed))
                .collect(),
            quantity: demo.quantity,
            status: ProductStatus::from_quantity(demo.quantity),
            created_at: now,
        });
    }

    tables.payments.push(PaymentEntity {
        id: Uuid::new_v4(),
        store_id: store_ids[0],
        amount_minor: DEFAULT_ANNUAL_FEE_MINOR,
        method: PaymentMethod::BaridiMob,
        status: PaymentStatus::Completed,
        paid_at: now - Duration::days(65),
    });
}
