use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopCategory {
    RealEstate,
    Vehicles,
    LuxuryGoods,
}

impl ShopCategory {
    pub const ALL: [ShopCategory; 3] = [
        ShopCategory::RealEstate,
        ShopCategory::Vehicles,
        ShopCategory::LuxuryGoods,
    ];
}

impl fmt::Display for ShopCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ShopCategory::RealEstate => "Real Estate",
            ShopCategory::Vehicles => "Vehicles",
            ShopCategory::LuxuryGoods => "Luxury Goods",
        };
        write!(f, "{}", label)
    }
}

/// A purchasable item. Buying freezes the price and upkeep into an owned
/// asset record; the boosts are one-time.
#[derive(Debug, Clone, Copy)]
pub struct ShopItem {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ShopCategory,
    pub price: i64,
    pub weekly_upkeep: i64,
    pub happiness_boost: i32,
    pub reputation_boost: i32,
}

pub static SHOP_ITEMS: &[ShopItem] = &[
    // Real Estate
    ShopItem { id: "apt_studio", name: "Studio Apartment", category: ShopCategory::RealEstate, price: 120_000, weekly_upkeep: 300, happiness_boost: 5, reputation_boost: 1 },
    ShopItem { id: "apt_loft", name: "Trendy Loft Apt", category: ShopCategory::RealEstate, price: 250_000, weekly_upkeep: 500, happiness_boost: 10, reputation_boost: 2 },
    ShopItem { id: "house_suburban", name: "Suburban House", category: ShopCategory::RealEstate, price: 600_000, weekly_upkeep: 1_200, happiness_boost: 15, reputation_boost: 5 },
    ShopItem { id: "condo_luxury", name: "Luxury Condo", category: ShopCategory::RealEstate, price: 1_500_000, weekly_upkeep: 2_500, happiness_boost: 20, reputation_boost: 10 },
    ShopItem { id: "villa_hills", name: "Hollywood Hills Villa", category: ShopCategory::RealEstate, price: 5_000_000, weekly_upkeep: 8_000, happiness_boost: 25, reputation_boost: 15 },
    ShopItem { id: "mansion_malibu", name: "Malibu Beachfront Mansion", category: ShopCategory::RealEstate, price: 20_000_000, weekly_upkeep: 25_000, happiness_boost: 35, reputation_boost: 25 },
    // Vehicles
    ShopItem { id: "car_used", name: "Used Sedan", category: ShopCategory::Vehicles, price: 8_000, weekly_upkeep: 50, happiness_boost: 2, reputation_boost: 0 },
    ShopItem { id: "car_suv", name: "Luxury SUV", category: ShopCategory::Vehicles, price: 65_000, weekly_upkeep: 150, happiness_boost: 7, reputation_boost: 2 },
    ShopItem { id: "car_sports", name: "Sports Car", category: ShopCategory::Vehicles, price: 120_000, weekly_upkeep: 300, happiness_boost: 10, reputation_boost: 5 },
    ShopItem { id: "car_vintage", name: "Vintage Convertible", category: ShopCategory::Vehicles, price: 200_000, weekly_upkeep: 400, happiness_boost: 12, reputation_boost: 7 },
    ShopItem { id: "car_super", name: "Supercar", category: ShopCategory::Vehicles, price: 750_000, weekly_upkeep: 1_500, happiness_boost: 20, reputation_boost: 15 },
    ShopItem { id: "jet_private", name: "Private Jet", category: ShopCategory::Vehicles, price: 10_000_000, weekly_upkeep: 20_000, happiness_boost: 30, reputation_boost: 20 },
    // Luxury Goods
    ShopItem { id: "handbag_designer", name: "Designer Handbag", category: ShopCategory::LuxuryGoods, price: 5_000, weekly_upkeep: 0, happiness_boost: 3, reputation_boost: 1 },
    ShopItem { id: "watch_luxury", name: "Luxury Watch", category: ShopCategory::LuxuryGoods, price: 15_000, weekly_upkeep: 0, happiness_boost: 5, reputation_boost: 2 },
    ShopItem { id: "gown_couture", name: "Haute Couture Gown", category: ShopCategory::LuxuryGoods, price: 50_000, weekly_upkeep: 0, happiness_boost: 8, reputation_boost: 4 },
    ShopItem { id: "jewelry_custom", name: "Custom Jewelry", category: ShopCategory::LuxuryGoods, price: 250_000, weekly_upkeep: 0, happiness_boost: 15, reputation_boost: 8 },
    ShopItem { id: "art_collection", name: "Art Collection", category: ShopCategory::LuxuryGoods, price: 1_000_000, weekly_upkeep: 1_000, happiness_boost: 18, reputation_boost: 12 },
    ShopItem { id: "yacht", name: "Super Yacht", category: ShopCategory::LuxuryGoods, price: 15_000_000, weekly_upkeep: 18_000, happiness_boost: 40, reputation_boost: 30 },
];

pub fn by_id(id: &str) -> Option<&'static ShopItem> {
    SHOP_ITEMS.iter().find(|item| item.id == id)
}

pub fn in_category(category: ShopCategory) -> impl Iterator<Item = &'static ShopItem> {
    SHOP_ITEMS.iter().filter(move |item| item.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<&str> = SHOP_ITEMS.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SHOP_ITEMS.len());
    }

    #[test]
    fn every_category_is_stocked() {
        for category in ShopCategory::ALL {
            assert!(in_category(category).count() >= 6);
        }
    }
}
