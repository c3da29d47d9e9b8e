//! Replays a scripted drag and prints the card's property values per frame.
//!
//! Run with `RUST_LOG=debug` to see the controller's mode transitions.

use card_test_fixtures::sessions;
use card_transition_core::{
    BlurEffect, CardTransitionController, Mode, RenderTarget, Session, SessionStep,
};

#[derive(Default)]
struct ConsoleCard {
    origin_y: f32,
    corner_radius: f32,
    blur: Option<BlurEffect>,
}

impl RenderTarget for ConsoleCard {
    fn set_card_origin_y(&mut self, y: f32) {
        self.origin_y = y;
    }
    fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius;
    }
    fn set_blur(&mut self, effect: BlurEffect) {
        self.blur = Some(effect);
    }
}

impl ConsoleCard {
    fn print(&self, label: &str) {
        println!(
            "{label:>14}  y={:7.2}  radius={:5.2}  blur={:?}",
            self.origin_y,
            self.corner_radius,
            self.blur.unwrap_or(BlurEffect::None)
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "collapse-after-expand".to_string());
    let session = Session::from_json(&sessions::json(&name)?)?;
    let mut ctl = CardTransitionController::new(session.config.clone().unwrap_or_default())?;

    let mut card = ConsoleCard::default();
    ctl.resting_outputs().apply_to(&mut card);
    card.print("initial");

    for step in &session.steps {
        match *step {
            SessionStep::Gesture(event) => {
                ctl.handle(event).apply_to(&mut card);
                card.print(event.name());
            }
            SessionStep::Tick { dt } => {
                ctl.update(dt).apply_to(&mut card);
                card.print("tick");
            }
            SessionStep::Settle { dt, max_ticks } => {
                for _ in 0..max_ticks {
                    if ctl.mode() == Mode::Idle {
                        break;
                    }
                    ctl.update(dt).apply_to(&mut card);
                    card.print("frame");
                }
            }
        }
    }

    println!(
        "session '{}' done: visible={} next={:?}",
        session.name,
        ctl.is_card_visible(),
        ctl.next_state()
    );
    Ok(())
}
