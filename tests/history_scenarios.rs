use proptest::prelude::*;
use sketch_history::codec::{Scalar, SerializedValue};
use sketch_history::controller::Controller;
use sketch_history::error::GuiError;
use sketch_history::gui::{Gui, GuiBuilder};
use sketch_history::snapshot::{Snapshot, SnapshotEntry};
use sketch_history::storage::{FileStore, MemoryStore};
use sketch_history::value::{Color, Value, Vector};
use sketch_history::widgets::{ColorPicker, Range, Select, Slider, Toggle, VectorPad};

fn sketch<'a>(mut gui: Gui<'a>) -> Gui<'a> {
    gui.add(
        Controller::builder("speed", Slider::new(0.0, 10.0, 1.0))
            .default_value(5.0)
            .randomizable(true)
            .build()
            .unwrap(),
    )
    .unwrap();
    gui.add(
        Controller::builder("pattern", Select::new(["grid", "spiral", "waves"]))
            .default_value("grid")
            .build()
            .unwrap(),
    )
    .unwrap();
    gui.add(
        Controller::builder("band", Range::new(0.0, 1.0, 0.25))
            .default_value(Vector::new2(0.25, 0.75))
            .build()
            .unwrap(),
    )
    .unwrap();
    gui.add(
        Controller::builder("origin", VectorPad::new(Vector::new2(-1.0, -1.0), Vector::new2(1.0, 1.0)))
            .default_value(Vector::new2(0.0, 0.0))
            .build()
            .unwrap(),
    )
    .unwrap();
    gui.add(
        Controller::builder("tint", ColorPicker::new())
            .default_value(Color::rgb(200, 40, 90))
            .build()
            .unwrap(),
    )
    .unwrap();
    gui.add(
        Controller::builder("mirror", Toggle)
            .default_value(false)
            .build()
            .unwrap(),
    )
    .unwrap();
    gui
}

fn started() -> Gui<'static> {
    let mut gui = sketch(GuiBuilder::new("generator").build());
    gui.restore_from_storage().unwrap();
    gui
}

#[test]
fn repeated_value_records_once() {
    let mut gui = started();
    assert!(gui.set_value("speed", 7.0).unwrap());
    assert!(!gui.set_value("speed", 7.0).unwrap());
    assert_eq!(2, gui.history().len());
    assert_eq!(Some(1), gui.history().cursor());

    gui.undo().unwrap();
    assert_eq!(Some(&Value::Number(5.0)), gui.value("speed"));
}

#[test]
fn undo_then_edit_drops_redo_branch() {
    let mut gui = started();
    gui.set_value("speed", 1.0).unwrap();
    gui.set_value("speed", 2.0).unwrap();
    gui.set_value("speed", 3.0).unwrap();
    gui.undo().unwrap();
    gui.undo().unwrap();

    gui.set_value("pattern", "waves").unwrap();
    assert_eq!(3, gui.history().len());
    assert!(!gui.redo().unwrap());
    assert_eq!(Some(&Value::Number(1.0)), gui.value("speed"));

    gui.undo().unwrap();
    assert_eq!(Some(&Value::from("grid")), gui.value("pattern"));
    assert_eq!(Some(&Value::Number(1.0)), gui.value("speed"));
}

#[test]
fn undo_redo_symmetry_across_kinds() {
    let mut gui = started();
    gui.set_value("band", Vector::new2(0.0, 0.5)).unwrap();
    gui.set_value("origin", Vector::new2(0.5, -0.5)).unwrap();
    gui.set_value("tint", Color::rgba(1, 2, 3, 4)).unwrap();
    gui.set_value("mirror", true).unwrap();
    let last = gui.registry().snapshot();

    while gui.undo().unwrap() {}
    assert_eq!(Some(0), gui.history().cursor());
    assert_eq!(Some(&Value::Bool(false)), gui.value("mirror"));
    assert_eq!(
        Some(&Value::Vector(Vector::new2(0.25, 0.75))),
        gui.value("band")
    );

    while gui.redo().unwrap() {}
    assert_eq!(last, gui.registry().snapshot());
}

#[test]
fn rejected_load_keeps_recording_on() {
    let mut gui = started();
    let bad = r#"{"generator": {
        "speed": {"type": "Scalar", "value": 9},
        "pattern": {"type": "Scalar", "value": "noise"}
    }}"#;
    assert!(matches!(
        gui.load_from_json(bad),
        Err(GuiError::InvalidOption { .. })
    ));
    assert!(!gui.is_suspended());
    assert_eq!(Some(&Value::Number(5.0)), gui.value("speed"));

    assert!(gui.set_value("speed", 3.0).unwrap());
    assert_eq!(2, gui.history().len());
}

#[test]
fn restore_failing_midway_resumes_recording() {
    let mut gui = started();
    let mut snapshot = Snapshot::new();
    snapshot.insert(
        "speed",
        SnapshotEntry::new(SerializedValue::Scalar(Scalar::Number(9.0))),
    );
    snapshot.insert(
        "pattern",
        SnapshotEntry::new(SerializedValue::Scalar(Scalar::Text("noise".to_string()))),
    );

    assert!(matches!(
        gui.restore_snapshot(&snapshot),
        Err(GuiError::InvalidOption { .. })
    ));
    assert!(!gui.is_suspended());
    // Entries before the rejected one were applied.
    assert_eq!(Some(&Value::Number(9.0)), gui.value("speed"));
    assert_eq!(1, gui.history().len());

    assert!(gui.set_value("pattern", "waves").unwrap());
    assert_eq!(2, gui.history().len());
}

#[test]
fn stale_snapshot_entries_are_ignored() {
    let mut gui = started();
    let json = r#"{"generator": {
        "longRemovedSlider": {"type": "Scalar", "value": 42},
        "speed": {"type": "Scalar", "value": 8, "isDieActive": false}
    }}"#;
    let report = gui.load_from_json(json).unwrap();
    assert_eq!(vec!["longRemovedSlider".to_string()], report.missing);
    assert_eq!(Some(&Value::Number(8.0)), gui.value("speed"));
    assert_eq!(Some(false), gui.controller("speed").unwrap().die_active());
    assert!(!gui
        .history()
        .head()
        .unwrap()
        .contains("longRemovedSlider"));
}

#[test]
fn file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut gui = sketch(
            GuiBuilder::new("generator")
                .store(FileStore::new(dir.path()))
                .build(),
        );
        gui.restore_from_storage().unwrap();
        gui.set_value("tint", Color::rgba(9, 8, 7, 6)).unwrap();
        gui.set_value("speed", 2.0).unwrap();
        gui.undo().unwrap();
    }

    let mut gui = sketch(
        GuiBuilder::new("generator")
            .store(FileStore::new(dir.path()))
            .build(),
    );
    assert!(gui.restore_from_storage().unwrap());
    assert_eq!(Some(&Value::Color(Color::rgba(9, 8, 7, 6))), gui.value("tint"));
    assert_eq!(Some(&Value::Number(5.0)), gui.value("speed"));
    assert_eq!(1, gui.history().len());
}

#[test]
fn non_persistent_gui_leaves_store_alone() {
    let store = MemoryStore::with_contents("{}");
    let mut gui = sketch(
        GuiBuilder::new("generator")
            .store(store.clone())
            .persist(false)
            .build(),
    );
    gui.restore_from_storage().unwrap();
    gui.set_value("speed", 1.0).unwrap();
    assert_eq!(Some("{}".to_string()), store.contents());
}

#[derive(Clone, Debug)]
enum Op {
    Set(u8),
    Undo,
    Redo,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..=10).prop_map(Op::Set),
        Just(Op::Undo),
        Just(Op::Redo),
    ]
}

proptest! {
    #[test]
    fn history_matches_a_model(ops in prop::collection::vec(op(), 0..40)) {
        let mut gui = started();
        let mut model: Vec<u8> = vec![5];
        let mut cursor = 0usize;

        for op in ops {
            match op {
                Op::Set(v) => {
                    let saved = gui.set_value("speed", f64::from(v)).unwrap();
                    prop_assert_eq!(model[cursor] != v, saved);
                    if saved {
                        model.truncate(cursor + 1);
                        model.push(v);
                        cursor += 1;
                    }
                }
                Op::Undo => {
                    prop_assert_eq!(0 < cursor, gui.undo().unwrap());
                    cursor = cursor.saturating_sub(1);
                }
                Op::Redo => {
                    let can = cursor + 1 < model.len();
                    prop_assert_eq!(can, gui.redo().unwrap());
                    if can {
                        cursor += 1;
                    }
                }
            }
            prop_assert_eq!(model.len(), gui.history().len());
            prop_assert_eq!(Some(cursor), gui.history().cursor());
            prop_assert_eq!(Some(&Value::Number(f64::from(model[cursor]))), gui.value("speed"));
        }
    }
}
