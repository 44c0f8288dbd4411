//! Daily health tips

use chrono::{Datelike, Local, NaiveDate};

pub const HEALTH_TIPS: [&str; 14] = [
    "Drink at least 8 glasses of water daily to stay hydrated and support bodily functions.",
    "Get 7-9 hours of quality sleep each night for optimal health and cognitive function.",
    "Include a variety of colorful fruits and vegetables in your diet for essential vitamins and antioxidants.",
    "Take short breaks every hour if you work at a desk to reduce strain on your body.",
    "Practice deep breathing exercises to reduce stress and improve mental clarity.",
    "Walk for at least 30 minutes daily to boost cardiovascular health and mood.",
    "Limit processed foods and added sugars for better energy levels and weight management.",
    "Wash your hands frequently to prevent the spread of germs and infections.",
    "Maintain good posture to prevent back and neck pain, especially when using devices.",
    "Spend time outdoors to get natural sunlight and vitamin D for bone health.",
    "Practice mindfulness or meditation for 10 minutes daily to reduce stress and improve focus.",
    "Include healthy fats like avocados, nuts, and olive oil in your diet for brain health.",
    "Take the stairs instead of the elevator to increase daily physical activity.",
    "Laugh often - it's good for your immune system and releases endorphins.",
];

/// Same tip for the whole calendar day, cycling through the list by day of year.
pub fn tip_for_date(date: NaiveDate) -> &'static str {
    HEALTH_TIPS[date.ordinal0() as usize % HEALTH_TIPS.len()]
}

pub fn daily_tip() -> &'static str {
    tip_for_date(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_first_day_of_year_when_picking_tip_then_first_tip() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(tip_for_date(date), HEALTH_TIPS[0]);
    }

    #[test]
    fn given_day_fifteen_when_picking_tip_then_wraps_around() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(tip_for_date(date), HEALTH_TIPS[0]);
        let date = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
        assert_eq!(tip_for_date(date), HEALTH_TIPS[1]);
    }
}
