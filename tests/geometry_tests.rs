//! Connector overlay tests, standalone and through the controller.

mod common;

use common::{left_with_key, right_with_key, seeded_game};
use pair_match::{
    resolve_lines, CardId, Column, GameEvent, Layout, LineSegment, MatchGame, MatchedPair, Point,
    Rect, RectMap,
};

fn card_rect(center: Point) -> Rect {
    Rect::centered_at(center, 40.0, 60.0)
}

/// Centres (10,10) and (50,10) in a frame at the origin.
#[test]
fn test_segment_in_origin_frame() {
    let a = CardId::new(Column::Left, 0);
    let b = CardId::new(Column::Right, 0);

    let mut rects = RectMap::new();
    rects.insert(a.clone(), card_rect(Point::new(10.0, 10.0)));
    rects.insert(b.clone(), card_rect(Point::new(50.0, 10.0)));

    let pairs = vec![MatchedPair::new(a, b)];
    let lines = resolve_lines(&pairs, &rects, Rect::new(0.0, 0.0, 300.0, 300.0));

    assert_eq!(lines, vec![LineSegment::new(10.0, 10.0, 50.0, 10.0)]);
}

/// Moving the frame origin to (5,5) shifts both endpoints by (-5,-5).
#[test]
fn test_frame_translation() {
    let a = CardId::new(Column::Left, 0);
    let b = CardId::new(Column::Right, 0);

    let mut rects = RectMap::new();
    rects.insert(a.clone(), card_rect(Point::new(10.0, 10.0)));
    rects.insert(b.clone(), card_rect(Point::new(50.0, 10.0)));

    let pairs = vec![MatchedPair::new(a, b)];
    let at_origin = resolve_lines(&pairs, &rects, Rect::new(0.0, 0.0, 300.0, 300.0));
    let shifted = resolve_lines(&pairs, &rects, Rect::new(5.0, 5.0, 300.0, 300.0));

    assert_eq!(shifted[0].x1, at_origin[0].x1 - 5.0);
    assert_eq!(shifted[0].y1, at_origin[0].y1 - 5.0);
    assert_eq!(shifted[0].x2, at_origin[0].x2 - 5.0);
    assert_eq!(shifted[0].y2, at_origin[0].y2 - 5.0);
}

/// A live lookup closure works in place of a map.
#[test]
fn test_closure_lookup() {
    let pairs = vec![MatchedPair::new(
        CardId::new(Column::Left, 1),
        CardId::new(Column::Right, 4),
    )];

    let lookup = |id: &CardId| {
        let x = if id.column() == Some(Column::Left) { 0.0 } else { 200.0 };
        Some(card_rect(Point::new(x, 100.0)))
    };

    let lines = resolve_lines(&pairs, &lookup, Rect::default());
    assert_eq!(lines, vec![LineSegment::new(0.0, 100.0, 200.0, 100.0)]);
}

/// Grid layout for the whole board: left at x=100, right at x=500.
fn board_layout(game: &MatchGame, frame: Rect) -> Layout {
    board_layout_without(game, frame, None)
}

/// Grid layout with one card not mounted.
fn board_layout_without(game: &MatchGame, frame: Rect, missing: Option<&CardId>) -> Layout {
    let session = game.session();
    let mut layout = Layout::new(frame);
    for (i, card) in session.left_column().iter().enumerate() {
        let rect = card_rect(Point::new(100.0, 50.0 + 100.0 * i as f64));
        layout = layout.with_element(card.id.clone(), rect);
    }
    for (i, card) in session.right_column().iter().enumerate() {
        if Some(&card.id) == missing {
            continue;
        }
        let rect = card_rect(Point::new(500.0, 50.0 + 100.0 * i as f64));
        layout = layout.with_element(card.id.clone(), rect);
    }
    layout
}

/// Lines track matches in order, and resize recomputes them.
#[test]
fn test_overlay_through_controller() {
    let mut game = seeded_game(42);
    let frame = Rect::new(0.0, 0.0, 800.0, 600.0);
    game.handle(GameEvent::ViewportChanged {
        layout: board_layout(&game, frame),
    });

    for key in ["C", "A"] {
        let own = left_with_key(&game, key);
        let partner = right_with_key(&game, key);
        game.on_card_click(&own);
        game.on_card_click(&partner);
    }

    let lines = game.snapshot().line_segments;
    assert_eq!(lines.len(), 2);
    // Left C is left-2, left A is left-0
    assert_eq!(lines[0].start(), Point::new(100.0, 250.0));
    assert_eq!(lines[1].start(), Point::new(100.0, 50.0));
    assert!(lines.iter().all(|l| l.x2 == 500.0));

    // Window scrolled: the frame moved by (20, 30)
    let moved = Rect::new(20.0, 30.0, 800.0, 600.0);
    game.on_viewport_change(board_layout(&game, moved));
    let lines = game.snapshot().line_segments;
    assert_eq!(lines[0].start(), Point::new(80.0, 220.0));
}

/// Pairs whose cards are not mounted are skipped.
#[test]
fn test_unmounted_cards_skipped() {
    let mut game = seeded_game(7);

    let a_right = right_with_key(&game, "A");
    game.on_viewport_change(board_layout_without(&game, Rect::default(), Some(&a_right)));

    for key in ["A", "B"] {
        let own = left_with_key(&game, key);
        let partner = right_with_key(&game, key);
        game.on_card_click(&own);
        game.on_card_click(&partner);
    }

    let lines = game.line_segments();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].start(), Point::new(100.0, 150.0));
}

/// Reset drops every line.
#[test]
fn test_reset_clears_lines() {
    let mut game = seeded_game(3);
    game.on_viewport_change(board_layout(&game, Rect::default()));

    let own = left_with_key(&game, "E");
    let partner = right_with_key(&game, "E");
    game.on_card_click(&own);
    game.on_card_click(&partner);
    assert_eq!(game.line_segments().len(), 1);

    game.on_reset_click();
    assert!(game.line_segments().is_empty());
}

/// Reported positions stay valid across a reset; the next match draws a line.
#[test]
fn test_match_after_reset_draws_line() {
    let mut game = seeded_game(11);
    game.on_viewport_change(board_layout(&game, Rect::default()));

    let own = left_with_key(&game, "A");
    let partner = right_with_key(&game, "A");
    game.on_card_click(&own);
    game.on_card_click(&partner);
    assert_eq!(game.line_segments().len(), 1);

    game.on_reset_click();
    assert!(game.line_segments().is_empty());

    let own = left_with_key(&game, "A");
    let partner = right_with_key(&game, "A");
    game.on_card_click(&own);
    game.on_card_click(&partner);

    assert_eq!(game.session().score(), 1);
    let lines = game.line_segments();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].start(), Point::new(100.0, 50.0));
    assert_eq!(lines[0].x2, 500.0);
}
