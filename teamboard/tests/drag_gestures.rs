//! Integration test: touch gestures driven end to end through the board.

use teamboard::{
    CardBox, CategoryId, ColumnId, DragEnd, DropTarget, DropTargetResolver, MemoryStorage, Point,
    Rect, TeamBoard,
};

/// A stand-in for the platform's hit-testing: the pool on the left, one
/// team column with a tank and a healer section on the right.
struct StubLayout {
    team_tank_boxes: Vec<CardBox>,
}

impl DropTargetResolver for StubLayout {
    fn target_at(&self, point: Point) -> Option<DropTarget> {
        if (0.0..300.0).contains(&point.x) {
            Some(DropTarget {
                column: ColumnId::pool(),
                category: None,
                card_boxes: Vec::new(),
            })
        } else if (300.0..600.0).contains(&point.x) && point.y < 300.0 {
            Some(DropTarget {
                column: ColumnId::from_string("team1"),
                category: Some(CategoryId::from_string("tank")),
                card_boxes: self.team_tank_boxes.clone(),
            })
        } else if (300.0..600.0).contains(&point.x) {
            Some(DropTarget {
                column: ColumnId::from_string("team1"),
                category: Some(CategoryId::from_string("healer")),
                card_boxes: Vec::new(),
            })
        } else {
            None
        }
    }
}

fn grabbed_at(x: f64, y: f64) -> (Point, Rect) {
    (Point::new(x, y), Rect::new(x - 10.0, y - 10.0, 140.0, 48.0))
}

#[test]
fn test_tap_never_moves_anything() {
    let mut board = TeamBoard::open(Box::new(MemoryStorage::new()));
    let id = board.add_card("A", vec!["vanguard".to_string()], vec![]).unwrap();
    let layout = StubLayout { team_tank_boxes: vec![] };

    let (touch, rect) = grabbed_at(50.0, 50.0);
    let mut session = board.begin_touch_drag(&id, touch, rect).unwrap();
    assert!(session.update(Point::new(53.0, 52.0), &layout).is_none());

    let before = board.store().clone();
    assert!(board
        .finish_touch_drag(session, Point::new(53.0, 52.0), &layout)
        .is_none());
    assert_eq!(board.store(), &before);
}

#[test]
fn test_drag_into_team_section() {
    let mut board = TeamBoard::open(Box::new(MemoryStorage::new()));
    let tank = board.add_card("T", vec!["vanguard".to_string()], vec![]).unwrap();
    let healer = board.add_card("H", vec!["mender".to_string()], vec![]).unwrap();
    board
        .move_card_to_end(&tank, &ColumnId::from_string("team1"))
        .unwrap();

    let layout = StubLayout {
        team_tank_boxes: vec![CardBox::new(80.0, 48.0)],
    };

    // Pick the healer up in the pool and carry it over the tank section
    let (touch, rect) = grabbed_at(100.0, 120.0);
    let mut session = board.begin_touch_drag(&healer, touch, rect).unwrap();
    let frame = session.update(Point::new(400.0, 90.0), &layout).unwrap();
    assert!(frame.lift);
    assert_eq!(frame.hover, Some(ColumnId::from_string("team1")));
    let slot = frame.indicator.as_ref().unwrap();
    assert_eq!(slot.category, Some(CategoryId::from_string("tank")));
    assert_eq!(slot.index, 0);

    // Release above the resident tank's center: slot 0 of the section
    let outcome = board
        .finish_touch_drag(session, Point::new(400.0, 90.0), &layout)
        .unwrap();
    assert_eq!(outcome.card, healer);
    assert_eq!(outcome.index, 0);

    let team_cards = board.store().cards_in(&ColumnId::from_string("team1"));
    assert_eq!(team_cards[0].name, "H");
    // Dropping a healer into the tank section records the deviation
    assert_eq!(
        team_cards[0].category_override,
        Some(CategoryId::from_string("tank"))
    );
}

#[test]
fn test_drag_into_own_section_records_nothing() {
    let mut board = TeamBoard::open(Box::new(MemoryStorage::new()));
    let healer = board.add_card("H", vec!["mender".to_string()], vec![]).unwrap();
    let layout = StubLayout { team_tank_boxes: vec![] };

    let (touch, rect) = grabbed_at(100.0, 120.0);
    let mut session = board.begin_touch_drag(&healer, touch, rect).unwrap();
    let _ = session.update(Point::new(400.0, 350.0), &layout);
    board
        .finish_touch_drag(session, Point::new(400.0, 350.0), &layout)
        .unwrap();

    let card = board.card(&healer).unwrap();
    assert!(card.category_override.is_none());
    let (column, _) = board.store().find_card(&healer).unwrap();
    assert_eq!(column.as_str(), "team1");
}

#[test]
fn test_release_off_board_aborts() {
    let mut board = TeamBoard::open(Box::new(MemoryStorage::new()));
    let id = board.add_card("A", vec!["vanguard".to_string()], vec![]).unwrap();
    let layout = StubLayout { team_tank_boxes: vec![] };

    let (touch, rect) = grabbed_at(100.0, 120.0);
    let mut session = board.begin_touch_drag(&id, touch, rect).unwrap();
    let _ = session.update(Point::new(400.0, 90.0), &layout);

    let before = board.store().clone();
    assert!(board
        .finish_touch_drag(session, Point::new(900.0, 90.0), &layout)
        .is_none());
    assert_eq!(board.store(), &before);
}

#[test]
fn test_card_deleted_mid_gesture_aborts_quietly() {
    let mut board = TeamBoard::open(Box::new(MemoryStorage::new()));
    let id = board.add_card("A", vec!["vanguard".to_string()], vec![]).unwrap();
    let layout = StubLayout { team_tank_boxes: vec![] };

    let (touch, rect) = grabbed_at(100.0, 120.0);
    let mut session = board.begin_touch_drag(&id, touch, rect).unwrap();
    let _ = session.update(Point::new(400.0, 90.0), &layout);

    // A deferred callback deletes the card while the finger is down
    board.delete_card(&id).unwrap();
    assert!(board
        .finish_touch_drag(session, Point::new(400.0, 90.0), &layout)
        .is_none());
}

#[test]
fn test_raw_release_api_reports_gesture_end() {
    let board = TeamBoard::open(Box::new(MemoryStorage::new()));
    let layout = StubLayout { team_tank_boxes: vec![] };
    // Gestures on unknown cards never even arm
    assert!(board
        .begin_touch_drag(
            &teamboard::CardId::from_string("ghost"),
            Point::new(0.0, 0.0),
            Rect::new(0.0, 0.0, 10.0, 10.0)
        )
        .is_none());

    // A session released while still armed is a tap
    let mut board = TeamBoard::open(Box::new(MemoryStorage::new()));
    let id = board.add_card("A", vec!["vanguard".to_string()], vec![]).unwrap();
    let (touch, rect) = grabbed_at(10.0, 10.0);
    let session = board.begin_touch_drag(&id, touch, rect).unwrap();
    assert_eq!(session.release(touch, &layout), DragEnd::Tap);
}
