use card_transition_core::{
    config::CardConfig,
    controller::CardTransitionController,
    inputs::GestureEvent,
    machine::Mode,
    outputs::TransitionEvent,
    tracker::fraction_from_translation,
};

#[derive(Copy, Clone, Debug)]
enum Step {
    Gesture(GestureEvent),
    Tick(f32),
}

const ALPHABET: [Step; 7] = [
    Step::Gesture(GestureEvent::Tap),
    Step::Gesture(GestureEvent::PanBegan),
    Step::Gesture(GestureEvent::PanChanged {
        translation_y: -240.0,
    }),
    Step::Gesture(GestureEvent::PanChanged {
        translation_y: 180.0,
    }),
    Step::Gesture(GestureEvent::PanEnded),
    Step::Gesture(GestureEvent::PanCancelled),
    Step::Tick(0.35),
];

/// Every sequence of `len` steps over the alphabet, in lexicographic order.
fn sequences(len: u32) -> impl Iterator<Item = Vec<Step>> {
    let n = ALPHABET.len();
    (0..n.pow(len)).map(move |mut code| {
        (0..len)
            .map(|_| {
                let step = ALPHABET[code % n];
                code /= n;
                step
            })
            .collect()
    })
}

/// it should keep the animation set empty or exactly three, in agreement with the mode
#[test]
fn set_size_agrees_with_mode_for_all_short_sequences() {
    for seq in sequences(5) {
        let mut ctl = CardTransitionController::new(CardConfig::default()).unwrap();
        let mut visible = ctl.is_card_visible();
        let mut flips = 0;
        let mut completions = 0;
        for step in &seq {
            let out = match *step {
                Step::Gesture(ev) => ctl.handle(ev),
                Step::Tick(dt) => ctl.update(dt),
            };
            completions += out
                .events
                .iter()
                .filter(|e| matches!(e, TransitionEvent::TransitionCompleted { .. }))
                .count();

            let running = ctl.running_animations();
            assert!(running == 0 || running == 3, "{seq:?}: {running} animations");
            assert_eq!(
                ctl.mode() == Mode::Idle,
                running == 0,
                "{seq:?}: mode {:?} with {running} animations",
                ctl.mode()
            );
            if ctl.is_card_visible() != visible {
                visible = ctl.is_card_visible();
                flips += 1;
            }
            assert_eq!(
                ctl.next_state().is_expanded(),
                !ctl.is_card_visible(),
                "{seq:?}"
            );
        }
        assert_eq!(flips, completions, "{seq:?}");
    }
}

/// it should never observe a partially applied command across the three animations
#[test]
fn animations_share_one_fraction_for_all_short_sequences() {
    use card_transition_core::outputs::CardProperty;

    for seq in sequences(4) {
        let mut ctl = CardTransitionController::new(CardConfig::default()).unwrap();
        for step in &seq {
            match *step {
                Step::Gesture(ev) => {
                    ctl.handle(ev);
                }
                Step::Tick(dt) => {
                    ctl.update(dt);
                }
            }
            let set = ctl.animations();
            if set.is_empty() {
                continue;
            }
            let f = set.fraction_complete().unwrap();
            for property in CardProperty::ALL {
                let a = set.animator(property).unwrap();
                assert_eq!(a.fraction_complete(), f, "{seq:?}: {}", property.name());
                assert_eq!(a.state(), set.animator(CardProperty::CardOriginY).unwrap().state());
            }
        }
    }
}

/// it should grow the fraction towards the target for both starting visibilities
#[test]
fn fraction_sign_convention() {
    for dy in [1.0f32, 50.0, 599.0] {
        assert!(fraction_from_translation(dy, 600.0, true) > 0.0);
        assert!(fraction_from_translation(dy, 600.0, false) < 0.0);
        assert_eq!(
            fraction_from_translation(dy, 600.0, true),
            -fraction_from_translation(dy, 600.0, false)
        );
    }
}
