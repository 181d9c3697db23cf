use std::env::temp_dir;
use std::sync::Arc;

use metadata::error::Result;
use metadata::events::CreateEventRequest;
use metadata::events::Events;
use uuid::Uuid;

fn create_req(host_id: u64, title: &str) -> CreateEventRequest {
    CreateEventRequest {
        host_id,
        title: title.to_string(),
        date: "2025-07-12".to_string(),
        time: "7:00 PM".to_string(),
        location: "Downtown Loft, Brooklyn".to_string(),
        description: "An evening of live music".to_string(),
        tags: vec!["Music".to_string(), "Drinks".to_string()],
        image: None,
    }
}

#[test]
fn test_events() -> Result<()> {
    let mut path = temp_dir();
    path.push(format!("{}.db", Uuid::new_v4()));

    let db = Arc::new(metadata::rocksdb::new(path)?);
    let events = Events::new(db);

    assert!(events.get_by_id(1).is_err());
    assert_eq!(events.list()?.data.len(), 0);
    assert_eq!(events.list_by_host(1)?.data.len(), 0);

    let event1 = events.create(create_req(1, "Rooftop Jazz Night"))?;
    assert_eq!(event1.id, 1);
    assert_eq!(event1.attendees, 0);

    let event2 = events.create(create_req(2, "Game Night"))?;
    assert_eq!(event2.id, 2);

    let event3 = events.create(create_req(1, "Book Club & Wine"))?;
    assert_eq!(event3.id, 3);

    assert_eq!(events.get_by_id(2)?.title, "Game Night");
    assert_eq!(events.list()?.data.len(), 3);

    let hosted = events.list_by_host(1)?;
    assert_eq!(
        hosted.data.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![1, 3]
    );
    assert!(hosted.data.iter().all(|e| e.host_id == 1));

    Ok(())
}
