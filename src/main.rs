//! Terminal runner (default binary).
//!
//! Owns all scheduling: gravity is delivered to the engine as a `tick()`
//! every 500ms and key presses become discrete commands, so the engine
//! stays passive and deterministic. The game-over/high-score flow also
//! lives here: when a finished game qualifies, a name prompt opens and
//! the table is saved fire-and-forget.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use quadris::core::GameState;
use quadris::input::{map_key, should_quit};
use quadris::scores::{HighScoreTable, HIGH_SCORE_FILE};
use quadris::term::{FrameBuffer, GameView, NamePrompt, TerminalRenderer, Viewport};
use quadris::types::{GameEvent, GRAVITY_MS};

/// Longest accepted player name.
const MAX_NAME_LEN: usize = 24;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut scores = HighScoreTable::load(HIGH_SCORE_FILE).unwrap_or_default();
    let mut game = GameState::new(clock_seed());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    // Open name prompt: typed text plus the score it will record.
    let mut name_entry: Option<(String, u32)> = None;

    let gravity = Duration::from_millis(GRAVITY_MS);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let prompt = name_entry
            .as_ref()
            .map(|(input, _)| NamePrompt { input: input.as_str() });
        view.render_into(&game.snapshot(), &scores, prompt, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Wait for input until the next gravity step is due.
        let timeout = gravity
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if name_entry.is_some() {
                        if is_ctrl_c(key) {
                            return Ok(());
                        }
                        handle_name_entry(key, &mut name_entry, &mut scores);
                    } else {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = map_key(key) {
                            game.apply_action(action);
                        }
                    }
                }
            }
        }

        if last_tick.elapsed() >= gravity {
            last_tick = Instant::now();
            game.tick();
        }

        match game.take_event() {
            Some(GameEvent::GameOver { score }) => {
                if scores.qualifies(score) {
                    name_entry = Some((String::new(), score));
                }
            }
            Some(GameEvent::Restarted) | None => {}
        }
    }
}

/// Modal name entry: it swallows every key until committed or cancelled.
fn handle_name_entry(
    key: KeyEvent,
    name_entry: &mut Option<(String, u32)>,
    scores: &mut HighScoreTable,
) {
    let Some((input, score)) = name_entry.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Enter => {
            let name = input.trim().to_string();
            if !name.is_empty() {
                scores.record(&name, *score);
                // Score recording is fire-and-forget; a failed save
                // must not take down the game.
                let _ = scores.save(HIGH_SCORE_FILE);
            }
            *name_entry = None;
        }
        KeyCode::Esc => {
            *name_entry = None;
        }
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(c) if !c.is_control() => {
            if input.chars().count() < MAX_NAME_LEN {
                input.push(c);
            }
        }
        _ => {}
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Seed piece randomization from the wall clock.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
