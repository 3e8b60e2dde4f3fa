use chrono::{DateTime, TimeZone, Utc};

use super::Review;

/// Built-in sample reviews used to seed an empty store. All six belong to
/// property 1 and carry distinct helpful counts, so sorting and aggregation
/// can be exercised before any write has happened.
pub fn default_reviews() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            property_id: 1,
            user_id: "u1".to_string(),
            user_name: "Sarah M.".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b789?w=100&h=100&fit=crop&crop=face".to_string(),
            rating: 5,
            title: "Amazing property with stunning views!".to_string(),
            comment: "Amazing property with stunning views! The host was incredibly responsive and the location was perfect for exploring the city. Would definitely stay again.".to_string(),
            date: ts(2024, 12, 15, 10, 30),
            verified: true,
            helpful: 8,
        },
        Review {
            id: 2,
            property_id: 1,
            user_id: "u2".to_string(),
            user_name: "James L.".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face".to_string(),
            rating: 5,
            title: "Clean and comfortable".to_string(),
            comment: "Clean, comfortable, and exactly as described. Great amenities and the neighborhood felt very safe. Easy check-in process too.".to_string(),
            date: ts(2024, 11, 28, 14, 15),
            verified: true,
            helpful: 12,
        },
        Review {
            id: 3,
            property_id: 1,
            user_id: "u3".to_string(),
            user_name: "Maria K.".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face".to_string(),
            rating: 4,
            title: "Lovely place with great attention to detail".to_string(),
            comment: "Lovely place with great attention to detail. Minor issue with WiFi but host resolved it quickly. Overall excellent experience!".to_string(),
            date: ts(2024, 10, 22, 16, 45),
            verified: true,
            helpful: 6,
        },
        Review {
            id: 4,
            property_id: 1,
            user_id: "u4".to_string(),
            user_name: "David R.".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face".to_string(),
            rating: 5,
            title: "Exceeded expectations!".to_string(),
            comment: "Exceeded expectations! Beautiful space, perfect location, and the host provided excellent local recommendations. Highly recommend.".to_string(),
            date: ts(2024, 10, 18, 9, 20),
            verified: true,
            helpful: 15,
        },
        Review {
            id: 5,
            property_id: 1,
            user_id: "u5".to_string(),
            user_name: "Emma T.".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1544725176-7c40e5a71c5e?w=100&h=100&fit=crop&crop=face".to_string(),
            rating: 4,
            title: "Great value for money".to_string(),
            comment: "Great value for money. The apartment was spotless and had everything we needed. Would stay here again on our next visit.".to_string(),
            date: ts(2024, 9, 30, 11, 10),
            verified: true,
            helpful: 9,
        },
        Review {
            id: 6,
            property_id: 1,
            user_id: "u6".to_string(),
            user_name: "Alex P.".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=100&h=100&fit=crop&crop=face".to_string(),
            rating: 5,
            title: "Perfect for our weekend getaway".to_string(),
            comment: "Perfect for our weekend getaway. The photos don't do it justice - it's even better in person! Great communication from the host.".to_string(),
            date: ts(2024, 9, 15, 13, 30),
            verified: true,
            helpful: 11,
        },
    ]
}

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}
