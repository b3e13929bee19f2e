use spritelab::animation::{AnimationClock, MAX_FPS, MIN_FPS};
use spritelab::command::{History, HISTORY_CAPACITY};
use spritelab::{EditorError, FrameSequence, Pixel, PixelGrid};

fn grid_with(side: usize, x: usize, y: usize, pixel: Pixel) -> PixelGrid {
    let mut grid = PixelGrid::new(side);
    grid.set(x, y, pixel).unwrap();
    grid
}

#[test]
fn test_history_never_exceeds_capacity() {
    let mut history = History::new(&PixelGrid::new(4));
    for i in 0..50u8 {
        history.snapshot(&grid_with(4, 0, 0, Pixel::new(i, 0, 0)));
        assert!(history.len() <= HISTORY_CAPACITY);
    }
    assert_eq!(history.len(), HISTORY_CAPACITY);
    assert_eq!(history.top().unwrap().get(0, 0).unwrap(), Pixel::new(49, 0, 0));
}

#[test]
fn test_history_evicts_oldest_first() {
    let mut history = History::new(&PixelGrid::new(2));
    for i in 0..HISTORY_CAPACITY as u8 {
        history.snapshot(&grid_with(2, 0, 0, Pixel::new(i, 0, 0)));
    }
    // The initial blank state was the oldest and is gone; undo all the way down
    let mut last = None;
    while history.can_undo() {
        last = history.undo();
    }
    assert_eq!(last.unwrap().get(0, 0).unwrap(), Pixel::new(0, 0, 0));
    assert_eq!(history.len(), 1);
}

#[test]
fn test_undo_restores_previous_snapshot() {
    let blank = PixelGrid::new(3);
    let mut history = History::new(&blank);
    history.snapshot(&grid_with(3, 1, 1, Pixel::BLACK));
    assert_eq!(history.undo().unwrap(), blank);
    assert_eq!(history.len(), 1);
}

#[test]
fn test_undo_with_single_entry_is_noop() {
    let initial = grid_with(3, 2, 2, Pixel::BLACK);
    let mut history = History::new(&initial);
    assert!(!history.can_undo());
    assert_eq!(history.undo().unwrap(), initial);
    assert_eq!(history.undo().unwrap(), initial);
    assert_eq!(history.len(), 1);
}

#[test]
fn test_history_snapshots_are_deep() {
    let mut grid = PixelGrid::new(3);
    let mut history = History::new(&grid);
    grid.set(0, 0, Pixel::BLACK).unwrap();
    history.snapshot(&grid);
    grid.set(1, 0, Pixel::BLACK).unwrap();
    assert_eq!(history.top().unwrap().get(1, 0).unwrap(), Pixel::BACKGROUND);
}

#[test]
fn test_history_reset() {
    let mut history = History::new(&PixelGrid::new(3));
    history.snapshot(&PixelGrid::new(3));
    history.reset(&PixelGrid::new(16));
    assert_eq!(history.len(), 1);
    assert_eq!(history.top().unwrap().side(), 16);
}

#[test]
fn test_add_frame_appends_blank_and_selects_it() {
    let mut frames = FrameSequence::new(8);
    frames.current_mut().set(0, 0, Pixel::BLACK).unwrap();
    frames.add_frame();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames.current_index(), 1);
    assert!(frames.current().is_blank());
    assert_eq!(frames.current().side(), 8);
}

#[test]
fn test_remove_last_frame_is_noop() {
    let mut frames = FrameSequence::new(4);
    assert!(!frames.remove_frame());
    assert_eq!(frames.len(), 1);
    assert_eq!(frames.current_index(), 0);
}

#[test]
fn test_remove_frame_clamps_cursor() {
    let mut frames = FrameSequence::new(4);
    frames.add_frame();
    frames.add_frame();
    assert_eq!(frames.current_index(), 2);
    assert!(frames.remove_frame());
    assert_eq!(frames.len(), 2);
    assert_eq!(frames.current_index(), 1);

    frames.set_current(0).unwrap();
    frames.current_mut().set(0, 0, Pixel::BLACK).unwrap();
    assert!(frames.remove_frame());
    assert_eq!(frames.current_index(), 0);
    assert!(frames.current().is_blank());
}

#[test]
fn test_set_current_out_of_range() {
    let mut frames = FrameSequence::new(4);
    frames.add_frame();
    let err = frames.set_current(2).unwrap_err();
    assert!(matches!(err, EditorError::IndexOutOfRange { index: 2, len: 2 }));
    assert_eq!(frames.current_index(), 1);
}

#[test]
fn test_manual_navigation_stops_at_ends() {
    let mut frames = FrameSequence::new(4);
    frames.add_frame();
    assert!(!frames.next());
    assert!(frames.previous());
    assert!(!frames.previous());
    assert_eq!(frames.current_index(), 0);
}

#[test]
fn test_resize_discards_frames() {
    let mut frames = FrameSequence::new(32);
    frames.add_frame();
    frames.current_mut().set(3, 3, Pixel::BLACK).unwrap();
    frames.resize(16);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames.side(), 16);
    assert_eq!(frames.current_index(), 0);
    assert!(frames.current().is_blank());
}

#[test]
fn test_from_frames_rejects_mixed_sides() {
    assert!(matches!(FrameSequence::from_frames(vec![]), Err(EditorError::Format(_))));
    let mixed = vec![PixelGrid::new(4), PixelGrid::new(5)];
    assert!(matches!(FrameSequence::from_frames(mixed), Err(EditorError::Format(_))));
}

#[test]
fn test_clock_wraps_after_full_cycle() {
    let rate = 5;
    let len = 3;
    let mut frames = FrameSequence::new(4);
    for _ in 1..len {
        frames.add_frame();
    }
    frames.set_current(0).unwrap();

    let mut clock = AnimationClock::new(rate);
    clock.play();

    // Four ticks per frame, L/R seconds in total
    let dt = 1.0 / (rate as f64 * 4.0);
    let mut advances = 0;
    for _ in 0..(len * 4) {
        if clock.tick(dt, &mut frames) {
            advances += 1;
        }
    }
    assert_eq!(advances, len);
    assert_eq!(frames.current_index(), 0);
}

#[test]
fn test_clock_idle_when_stopped_or_single_frame() {
    let mut frames = FrameSequence::new(4);
    let mut clock = AnimationClock::new(10);
    clock.play();
    assert!(!clock.tick(1.0, &mut frames));
    assert_eq!(clock.accumulated(), 0.0);

    frames.add_frame();
    clock.stop();
    assert!(!clock.tick(1.0, &mut frames));
    assert_eq!(frames.current_index(), 1);
}

#[test]
fn test_clock_keeps_accumulator_across_pause() {
    let mut frames = FrameSequence::new(4);
    frames.add_frame();
    frames.set_current(0).unwrap();
    let mut clock = AnimationClock::new(2);
    clock.play();
    assert!(!clock.tick(0.3, &mut frames));
    clock.stop();
    clock.play();
    assert!(clock.tick(0.2, &mut frames));
    assert_eq!(frames.current_index(), 1);
}

#[test]
fn test_clock_rate_is_clamped() {
    let mut clock = AnimationClock::new(0);
    assert_eq!(clock.fps(), MIN_FPS);
    clock.set_fps(120);
    assert_eq!(clock.fps(), MAX_FPS);
    assert!(clock.toggle());
    assert!(!clock.toggle());
}
