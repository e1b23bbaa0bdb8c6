//! Randomized edit sequences against a mounted password field, checked
//! against a naive `Vec<char>` model.
//!
//! `HASIR_FIELD_FUZZ_SEED` and `HASIR_FIELD_FUZZ_RUNS` override the defaults.

use field_core::{FieldId, SelectionRange, SelectionSurface};
use field_host::{FieldConfig, FieldEvent, FieldProps, Form, NativeEvent, TextSurface};
use field_test_support::env_u64;
use std::cell::RefCell;
use std::rc::Rc;

const FIELD: FieldId = FieldId::from_raw(7);
const STEPS_PER_RUN: usize = 64;
const ALPHABET: [char; 8] = ['a', 'Z', '0', ' ', 'é', '€', '😀', '*'];

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "invalid bound: {bound}");
        ((self.next_u64() >> 33) % bound as u64) as usize
    }

    fn text(&mut self, max_len: usize) -> String {
        let len = self.below(max_len) + 1;
        (0..len).map(|_| ALPHABET[self.below(ALPHABET.len())]).collect()
    }
}

/// What the user does next, and the `inputType` it reports.
#[derive(Debug)]
enum Action {
    Select(SelectionRange),
    Edit {
        input_type: Option<&'static str>,
        data: Option<String>,
    },
    Frame,
}

fn next_action(rng: &mut Lcg, len: usize) -> Action {
    match rng.below(10) {
        0 | 1 => Action::Select(SelectionRange::new(rng.below(len + 2), rng.below(len + 2))),
        2 | 3 => Action::Edit {
            input_type: Some("insertText"),
            data: Some(rng.text(1)),
        },
        4 => Action::Edit {
            input_type: Some("insertFromPaste"),
            data: Some(rng.text(5)),
        },
        5 => Action::Edit {
            input_type: Some("deleteContentBackward"),
            data: None,
        },
        6 => Action::Edit {
            input_type: Some("deleteContentForward"),
            data: None,
        },
        7 => Action::Edit {
            input_type: Some("deleteByCut"),
            data: None,
        },
        8 => Action::Edit {
            input_type: [None, Some("historyUndo"), Some("deleteWordBackward")][rng.below(3)],
            data: None,
        },
        _ => Action::Frame,
    }
}

/// Reference semantics over chars.
fn model_edit(model: &mut Vec<char>, sel: SelectionRange, input_type: Option<&str>, data: Option<&str>) {
    let SelectionRange { start, end } = sel.clamp_to(model.len());
    let replace = |model: &mut Vec<char>, s: usize, e: usize, text: &str| {
        model.splice(s..e, text.chars());
    };
    match input_type {
        Some(tag) if tag.starts_with("delete") => {
            if start != end {
                replace(model, start, end, "");
            } else if matches!(tag, "deleteContentBackward" | "deleteByCut") && start > 0 {
                replace(model, start - 1, start, "");
            } else if tag == "deleteContentForward" && start < model.len() {
                replace(model, start, start + 1, "");
            }
        }
        Some(tag) if tag.starts_with("insert") => {
            replace(model, start, end, data.unwrap_or_default());
        }
        _ => {}
    }
}

fn run_one(seed: u64) {
    let events: Rc<RefCell<Vec<FieldEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let mut form = Form::new(FieldConfig::default());
    form.mount(
        FIELD,
        FieldProps::password()
            .with_default_value("seed")
            .on_input(move |e| sink.borrow_mut().push(e.clone())),
        TextSurface::new(),
    )
    .unwrap();

    let mut rng = Lcg::new(seed);
    let mut model: Vec<char> = "seed".chars().collect();

    for step in 0..STEPS_PER_RUN {
        let action = next_action(&mut rng, model.len());
        let ctx = || format!("seed {seed:#x} step {step}");
        match &action {
            Action::Select(range) => {
                form.surface_mut(FIELD).unwrap().select(*range);
                form.dispatch(FIELD, &NativeEvent::Select).unwrap();
            }
            Action::Edit { input_type, data } => {
                let before = form.surface(FIELD).unwrap().before_input(*input_type, data.as_deref());
                let captured = form.surface(FIELD).unwrap().selection();
                form.dispatch(FIELD, &before).unwrap();
                let input = form
                    .surface_mut(FIELD)
                    .unwrap()
                    .user_edit(*input_type, data.as_deref());
                form.dispatch(FIELD, &input).unwrap();
                model_edit(&mut model, captured, *input_type, data.as_deref());

                let reported = events.borrow().last().map(|e| e.value().to_string());
                assert_eq!(reported.as_deref(), form.value(FIELD), "{}: {action:?}", ctx());
            }
            Action::Frame => {
                form.run_frame();
            }
        }

        let value = form.value(FIELD).unwrap();
        let expected: String = model.iter().collect();
        assert_eq!(value, expected, "{}: {action:?}", ctx());

        let surface = form.surface(FIELD).unwrap();
        let display = surface.text();
        assert_eq!(display.chars().count(), model.len(), "{}: mask length", ctx());
        assert!(display.chars().all(|c| c == '*'), "{}: mask leaked {display:?}", ctx());

        let sel = surface.selection();
        assert!(sel.start <= sel.end && sel.end <= model.len(), "{}: caret {sel}", ctx());
    }
}

#[test]
fn random_edit_sequences_track_the_model() {
    let seed = env_u64("HASIR_FIELD_FUZZ_SEED", 0xC0FFEE);
    let runs = env_u64("HASIR_FIELD_FUZZ_RUNS", 32);
    let mut rng = Lcg::new(seed);
    for _ in 0..runs {
        run_one(rng.next_u64());
    }
}
