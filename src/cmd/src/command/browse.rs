use app::catalog;

use crate::error::Result;

/// Offline view over the demo catalog, mainly a smoke check for the
/// discovery filter without standing up a UI.
pub fn run(query: String, category: String) -> Result<()> {
    let events = catalog::builtin();
    let matches = catalog::filter(&events, &query, &category);

    println!("categories: {}", catalog::categories(&events).join(", "));
    println!("{} upcoming events", matches.len());
    if matches.is_empty() {
        println!("no events found, try adjusting the search or filters");
        return Ok(());
    }

    for event in matches {
        println!(
            "#{} {} - {} {} @ {} (host: {}, {} attending) [{}]",
            event.id,
            event.title,
            event.date,
            event.time,
            event.location,
            event.host,
            event.attendees,
            event.tags.join(", "),
        );
    }

    Ok(())
}
