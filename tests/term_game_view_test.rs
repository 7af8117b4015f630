use tui_skirmish::core::{Actor, Game};
use tui_skirmish::term::{GameView, Viewport, FRAME_HEIGHT, FRAME_WIDTH};
use tui_skirmish::types::{Command, Position, BORDER_GLYPH, ENEMY_GLYPH, PLAYER_GLYPH, PROMPT};

fn render(game: &Game) -> tui_skirmish::term::FrameBuffer {
    GameView::default().render(&game.snapshot(), Viewport::new(80, 24))
}

#[test]
fn term_view_renders_plus_border_around_grid() {
    let fb = render(&Game::new(1));

    // 12x8 grid plus a one-cell border => 14x10 frame.
    assert_eq!((FRAME_WIDTH, FRAME_HEIGHT), (14, 10));
    for x in 0..FRAME_WIDTH {
        assert_eq!(fb.get(x, 0).unwrap().ch, BORDER_GLYPH);
        assert_eq!(fb.get(x, FRAME_HEIGHT - 1).unwrap().ch, BORDER_GLYPH);
    }
    for y in 0..FRAME_HEIGHT {
        assert_eq!(fb.get(0, y).unwrap().ch, BORDER_GLYPH);
        assert_eq!(fb.get(FRAME_WIDTH - 1, y).unwrap().ch, BORDER_GLYPH);
    }
    assert_ne!(fb.get(FRAME_WIDTH, 1).unwrap().ch, BORDER_GLYPH);
}

#[test]
fn term_view_places_player_and_enemies_inside_border() {
    let game = Game::from_parts(
        1,
        Actor::player(Position::new(6, 4)),
        vec![Actor::enemy(Position::new(0, 0)), Actor::enemy(Position::new(11, 7))],
    );
    let fb = render(&game);

    assert_eq!(fb.get(7, 5).unwrap().ch, PLAYER_GLYPH);
    assert_eq!(fb.get(1, 1).unwrap().ch, ENEMY_GLYPH);
    assert_eq!(fb.get(12, 8).unwrap().ch, ENEMY_GLYPH);
}

#[test]
fn term_view_draws_player_over_coincident_enemy() {
    let game = Game::from_parts(
        1,
        Actor::player(Position::new(3, 3)),
        vec![Actor::enemy(Position::new(3, 3))],
    );
    let fb = render(&game);
    assert_eq!(fb.get(4, 4).unwrap().ch, PLAYER_GLYPH);
}

#[test]
fn term_view_skips_defeated_enemies() {
    let mut game = Game::from_parts(
        1,
        Actor::player(Position::new(2, 2)),
        vec![
            Actor::enemy(Position::new(3, 3)).with_health(1),
            Actor::enemy(Position::new(9, 6)),
        ],
    );
    assert_eq!(game.attack_nearby(), 1);
    assert!(game.enemies()[0].is_defeated());

    let fb = render(&game);
    assert_eq!(fb.get(4, 4).unwrap().ch, ' ');
    assert_eq!(fb.get(10, 7).unwrap().ch, ENEMY_GLYPH);
    assert!(fb.row_text(FRAME_HEIGHT).contains("Enemies 1/2"));
}

#[test]
fn term_view_shows_status_events_and_prompt() {
    let mut game = Game::from_parts(
        7,
        Actor::player(Position::new(6, 4)),
        vec![Actor::enemy(Position::new(6, 4))],
    );
    game.step(Command::Attack);
    let fb = render(&game);

    let status = fb.row_text(FRAME_HEIGHT);
    assert!(status.starts_with("HP "), "{status}");
    assert!(status.contains("Enemies 1/1"), "{status}");
    assert!(status.contains("Turn 1"), "{status}");

    assert!(fb
        .row_text(FRAME_HEIGHT + 1)
        .starts_with("Player attacks, dealing "));
    assert!(fb
        .row_text(FRAME_HEIGHT + 2)
        .starts_with("Enemy attacks player, dealing "));
    assert_eq!(fb.row_text(FRAME_HEIGHT + 3), PROMPT.trim_end());
}

#[test]
fn term_view_clips_to_small_viewports() {
    let fb = GameView::default().render(&Game::new(1).snapshot(), Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
    assert_eq!(fb.get(0, 0).unwrap().ch, BORDER_GLYPH);
}
