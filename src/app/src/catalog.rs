use serde::Deserialize;
use serde::Serialize;

/// Category value that matches every event.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub host: String,
    pub tags: Vec<String>,
    pub image: String,
    pub attendees: u32,
}

/// An event stays in when the query matches its title or location and the
/// selected category matches its tag set. Catalog order is preserved.
pub fn filter(events: &[Event], query: &str, category: &str) -> Vec<Event> {
    let query = query.to_lowercase();
    events
        .iter()
        .filter(|event| {
            let matches_query = query.is_empty()
                || event.title.to_lowercase().contains(&query)
                || event.location.to_lowercase().contains(&query);
            let matches_category =
                category == ALL_CATEGORIES || event.tags.iter().any(|tag| tag == category);
            matches_query && matches_category
        })
        .cloned()
        .collect()
}

/// Distinct tags across the catalog, with "all" always first.
pub fn categories(events: &[Event]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for event in events {
        for tag in &event.tags {
            if !out.iter().any(|seen| seen == tag) {
                out.push(tag.clone());
            }
        }
    }

    out
}

fn event(
    id: u64,
    title: &str,
    date: &str,
    time: &str,
    location: &str,
    host: &str,
    tags: &[&str],
    image: &str,
    attendees: u32,
) -> Event {
    Event {
        id,
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        host: host.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        image: image.to_string(),
        attendees,
    }
}

/// The demo catalog the discovery page ships with.
pub fn builtin() -> Vec<Event> {
    vec![
        event(
            1,
            "Rooftop Jazz Night",
            "Jul 15, 2025",
            "7:00 PM",
            "Downtown Loft, Brooklyn",
            "Sarah Chen",
            &["Music", "Jazz", "Drinks"],
            "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=800&h=600&fit=crop",
            45,
        ),
        event(
            2,
            "Artisan Coffee & Conversation",
            "Jul 18, 2025",
            "10:00 AM",
            "Cozy Corner Café, Manhattan",
            "Mike Rodriguez",
            &["Coffee", "Networking", "Casual"],
            "https://images.unsplash.com/photo-1501339847302-ac426a4a7cbb?w=800&h=600&fit=crop",
            32,
        ),
        event(
            3,
            "Game Night Extravaganza",
            "Jul 20, 2025",
            "6:30 PM",
            "Community Center, Queens",
            "Alex Johnson",
            &["Games", "Social", "Indoor"],
            "https://images.unsplash.com/photo-1606092195730-5d7b9af1efc5?w=800&h=600&fit=crop",
            28,
        ),
        event(
            4,
            "Sunset Yoga Session",
            "Jul 22, 2025",
            "5:30 PM",
            "Central Park, Manhattan",
            "Emma Wilson",
            &["Wellness", "Outdoor", "Yoga"],
            "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=800&h=600&fit=crop",
            36,
        ),
        event(
            5,
            "Food Truck Festival",
            "Jul 25, 2025",
            "12:00 PM",
            "Pier 45, Brooklyn",
            "David Park",
            &["Food", "Festival", "Outdoor"],
            "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=800&h=600&fit=crop",
            120,
        ),
        event(
            6,
            "Book Club & Wine",
            "Jul 28, 2025",
            "7:00 PM",
            "Literary Lounge, Manhattan",
            "Lisa Thompson",
            &["Books", "Wine", "Discussion"],
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800&h=600&fit=crop",
            24,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_and_all_keeps_everything() {
        let catalog = builtin();
        assert_eq!(filter(&catalog, "", ALL_CATEGORIES), catalog);
    }

    #[test]
    fn query_matches_title_or_location_case_insensitively() {
        let catalog = builtin();

        let by_title = filter(&catalog, "jazz", ALL_CATEGORIES);
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Rooftop Jazz Night");

        let by_location = filter(&catalog, "MANHATTAN", ALL_CATEGORIES);
        assert_eq!(
            by_location.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![2, 4, 6]
        );

        for event in filter(&catalog, "brooklyn", ALL_CATEGORIES) {
            assert!(event.location.to_lowercase().contains("brooklyn"));
        }
    }

    #[test]
    fn category_keeps_exactly_the_tagged_events() {
        let catalog = builtin();

        let outdoor = filter(&catalog, "", "Outdoor");
        assert!(!outdoor.is_empty());
        for event in &outdoor {
            assert!(event.tags.iter().any(|tag| tag == "Outdoor"));
        }
        // completeness: everything tagged Outdoor made it through
        let expected = catalog
            .iter()
            .filter(|event| event.tags.iter().any(|tag| tag == "Outdoor"))
            .count();
        assert_eq!(outdoor.len(), expected);
    }

    #[test]
    fn query_and_category_must_both_match() {
        let catalog = builtin();

        let matched = filter(&catalog, "festival", "Food");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 5);

        assert!(filter(&catalog, "jazz", "Food").is_empty());
    }

    #[test]
    fn filter_is_idempotent_and_order_preserving() {
        let catalog = builtin();

        let once = filter(&catalog, "o", ALL_CATEGORIES);
        let twice = filter(&once, "o", ALL_CATEGORIES);
        assert_eq!(once, twice);

        let ids = once.iter().map(|e| e.id).collect::<Vec<_>>();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn an_unmatched_query_yields_an_empty_result() {
        let catalog = builtin();
        assert!(filter(&catalog, "underwater basket weaving", ALL_CATEGORIES).is_empty());
    }

    #[test]
    fn categories_start_with_all_and_deduplicate() {
        let catalog = builtin();
        let cats = categories(&catalog);

        assert_eq!(cats[0], ALL_CATEGORIES);
        assert!(cats.iter().any(|c| c == "Outdoor"));

        let mut deduped = cats.clone();
        deduped.dedup();
        assert_eq!(cats.len(), deduped.len());
        // Outdoor is tagged on two events but listed once
        assert_eq!(cats.iter().filter(|c| *c == "Outdoor").count(), 1);
    }

    #[test]
    fn categories_of_an_empty_catalog_is_just_all() {
        assert_eq!(categories(&[]), vec![ALL_CATEGORIES.to_string()]);
    }
}
