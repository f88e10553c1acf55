use crate::models::route::TransferRoute;
use crate::models::vehicle::Vehicle;

/// The six-vehicle rental fleet. Loaded once per call site, never mutated.
pub fn fleet() -> Vec<Vehicle> {
    vec![
        Vehicle {
            slug: "toyota-commuter-vip".to_string(),
            name: "Toyota Commuter All New".to_string(),
            vehicle_type: "VIP".to_string(),
            description: "รถตู้ VIP สุดหรู เบาะปรับนอนได้ เหมาะสำหรับทริปท่องเที่ยวและงานบริษัท"
                .to_string(),
            seats: 9,
            bags: 9,
            price_per_day: 3000,
            badge: "ยอดนิยม".to_string(),
            badge_color: "#C6A75E".to_string(),
        },
        Vehicle {
            slug: "toyota-commuter-standard".to_string(),
            name: "Toyota Commuter All New".to_string(),
            vehicle_type: "Standard".to_string(),
            description: "รถตู้มาตรฐาน จุคนได้เยอะ เหมาะสำหรับหมู่คณะและรับส่งพนักงาน".to_string(),
            seats: 13,
            bags: 10,
            price_per_day: 1800,
            badge: "ประหยัด".to_string(),
            badge_color: "#3B82F6".to_string(),
        },
        Vehicle {
            slug: "hyundai-h1-vip".to_string(),
            name: "Hyundai H1".to_string(),
            vehicle_type: "VIP".to_string(),
            description: "หรูหรา นั่งสบาย เหมาะสำหรับผู้บริหารและครอบครัวเล็ก".to_string(),
            seats: 5,
            bags: 4,
            price_per_day: 2500,
            badge: "VIP".to_string(),
            badge_color: "#C6A75E".to_string(),
        },
        Vehicle {
            slug: "toyota-alphard-executive".to_string(),
            name: "Toyota Alphard".to_string(),
            vehicle_type: "Executive".to_string(),
            description: "ระดับ Executive สำหรับผู้บริหารและแขก VIP ความเป็นส่วนตัวสูงสุด"
                .to_string(),
            seats: 4,
            bags: 3,
            price_per_day: 4500,
            badge: "Executive".to_string(),
            badge_color: "#7C3AED".to_string(),
        },
        Vehicle {
            slug: "toyota-majesty-premium".to_string(),
            name: "Toyota Majesty".to_string(),
            vehicle_type: "Premium".to_string(),
            description: "พรีเมียมแวน นั่งสบาย ดีไซน์หรู ทริปครอบครัวและกลุ่มเล็ก".to_string(),
            seats: 7,
            bags: 5,
            price_per_day: 3500,
            badge: "Premium".to_string(),
            badge_color: "#C6A75E".to_string(),
        },
        Vehicle {
            slug: "hyundai-staria-luxury".to_string(),
            name: "Hyundai Staria".to_string(),
            vehicle_type: "Luxury".to_string(),
            description: "แวนหรูดีไซน์แห่งอนาคต นั่งสบายระดับ First Class".to_string(),
            seats: 7,
            bags: 5,
            price_per_day: 3500,
            badge: "Luxury".to_string(),
            badge_color: "#DC2626".to_string(),
        },
    ]
}

/// Built-in airport transfer price table. The admin-editable `Routes`
/// collection takes precedence for public display; the price estimator
/// always reads this table.
pub fn transfer_routes() -> Vec<TransferRoute> {
    let rows = [
        ("สุวรรณภูมิ (BKK)", "กรุงเทพ ในเมือง", "~45 นาที", 1200, 1800),
        ("สุวรรณภูมิ (BKK)", "พัทยา", "~2 ชม.", 2000, 2800),
        ("สุวรรณภูมิ (BKK)", "หัวหิน", "~3 ชม.", 3000, 4000),
        ("สุวรรณภูมิ (BKK)", "เขาใหญ่", "~3 ชม.", 3200, 4200),
        ("ดอนเมือง (DMK)", "กรุงเทพ ในเมือง", "~40 นาที", 1000, 1500),
        ("ดอนเมือง (DMK)", "พัทยา", "~2.5 ชม.", 2500, 3200),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (from, to, time, sedan, van))| TransferRoute {
            id: None,
            from_location: from.to_string(),
            to_location: to.to_string(),
            travel_time: time.to_string(),
            sedan_price: *sedan,
            van_price: *van,
            sort_order: i as i32,
        })
        .collect()
}
