use h2c_core::{Axis, Bound, Decoded, Edit, Gesture, Hand, Record, Settings, SettingKey, SinkKind};

// ── Helpers ──────────────────────────────────────────────────────

fn tuned() -> Settings {
    let mut s = Settings::default();
    for edit in [
        Edit::Offset { hand: Hand::Left, axis: Axis::X, mm: 500 },
        Edit::Offset { hand: Hand::Right, axis: Axis::Z, mm: -125 },
        Edit::Rotation { hand: Hand::Right, axis: Axis::Y, degrees: 90 },
        Edit::HandDisabled { hand: Hand::Left, disabled: true },
        Edit::AimJoint(3),
        Edit::Binding { hand: Hand::Right, gesture: Gesture::PalmTap, choice: 4 },
        Edit::InteractionProfile(0),
        Edit::Threshold { gesture: Gesture::Squeeze, bound: Bound::Far, value: 95 },
        Edit::ClickThreshold(33),
        Edit::DisplayDisabled(true),
        Edit::ProjLayerIndex(2),
        Edit::SkinTone(3),
        Edit::Opacity(57),
    ] {
        s.apply(edit);
    }
    s
}

// ── 1. File text carries every control ───────────────────────────

#[test]
fn file_lines_rebuild_settings() {
    let source = tuned();
    let lines: Vec<String> = SettingKey::flush_order()
        .into_iter()
        .filter_map(|k| k.encode(&source, SinkKind::File))
        .map(|r| r.to_string())
        .collect();

    let mut rebuilt = Settings::default();
    for line in &lines {
        let record = Record::parse(line).expect("encoded line has a separator");
        let key = SettingKey::from_name(&record.key).expect("encoded key is known");
        match key.decode(&record.value).unwrap() {
            Decoded::Edits(edits) => {
                for edit in edits {
                    rebuilt.apply(edit);
                }
            }
            Decoded::WriteOnly => assert!(matches!(key, SettingKey::Quat(_))),
            Decoded::UnknownAction { name, .. } => panic!("unexpected unknown action {name}"),
        }
    }

    assert_eq!(rebuilt, source);
}

// ── 2. Live records omit file-only keys ──────────────────────────

#[test]
fn live_records_skip_euler() {
    let settings = tuned();
    let live: Vec<String> = SettingKey::flush_order()
        .into_iter()
        .filter_map(|k| k.encode(&settings, SinkKind::Live))
        .map(|r| r.key)
        .collect();

    assert!(live.iter().all(|k| !k.ends_with(".transform.euler")));
    assert!(live.contains(&"right.transform.quat".to_string()));
}
