//! Static seed catalog loaded by `load`

use crate::models::{Category, InventoryItem};

const SEED: &[(i32, &str, Category, f64)] = &[
    (1, "Compact cordless drill, 12V", Category::Tools, 99.99),
    (2, "Waterproof outdoor paint, blue", Category::Paint, 39.99),
    (3, "Stainless steel garden shovel", Category::Gardening, 29.99),
    (4, "LED floor lamp, adjustable brightness", Category::Lighting, 49.99),
    (5, "Bamboo indoor flooring, 10 sq ft", Category::Flooring, 59.99),
    (6, "Ergonomic office chair with lumbar support", Category::Furniture, 199.99),
    (7, "Heavy-duty extension cord, 50ft", Category::Tools, 34.99),
    (8, "Organic potting mix, 50lb bag", Category::Gardening, 22.99),
    (9, "Industrial air compressor 5 HP", Category::Tools, 889.99),
    (10, "Designer table lamp, modern aesthetic", Category::Lighting, 120.50),
    (11, "Wireless doorbell with two receivers", Category::Electronics, 24.99),
    (12, "Smart thermostat with Wi-Fi feature", Category::Electronics, 249.99),
    (13, "Electric pressure washer 1800 PSI", Category::Tools, 150.99),
    (14, "Luxury silk curtains 90-inch length", Category::HomeDecor, 85.99),
    (15, "Robotic vacuum cleaner with app control", Category::Electronics, 299.99),
    (16, "Rustic wooden coffee table", Category::Furniture, 219.95),
    (17, "Professional gas chainsaw 60cc", Category::Tools, 239.99),
    (18, "Luxury goose down comforter king size", Category::Bedding, 179.99),
    (19, "Multi-purpose kitchen blender 6-speed", Category::Appliances, 99.99),
    (20, "Professional ceramic hair straightener", Category::Beauty, 79.99),
    (21, "Non-stick cookware set 10 pieces", Category::Kitchen, 129.99),
    (22, "Outdoor patio heater 48000 BTU", Category::Garden, 149.99),
    (23, "Decorative outdoor string lights, 48 ft", Category::Lighting, 59.99),
    (24, "Ultralight camping tent for 4 persons", Category::Outdoors, 99.99),
    (25, "Wall-mounted coat rack with shelf", Category::HomeDecor, 45.99),
    (26, "Adjustable dumbbell set, up to 40 lbs", Category::Fitness, 399.99),
];

/// The catalog written by `load`, in item id order, without ids or embeddings
pub fn seed_catalog() -> Vec<InventoryItem> {
    SEED.iter()
        .map(|(item_id, description, category, price)| {
            InventoryItem::new(*item_id, *description, category.clone(), *price)
        })
        .collect()
}
