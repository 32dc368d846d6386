use std::collections::HashMap;
use std::sync::OnceLock;

use crate::catalog::{Catalog, ACTIONS, INTERACTION_PROFILES};
use crate::record::{Record, SinkKind};
use crate::rotation::quat_from_euler_degrees;
use crate::settings::{Axis, Edit, Hand, Settings};
use crate::threshold::{Bound, Gesture, ThresholdPair};

/// Offsets are edited in millimeters and sent in meters.
pub const OFFSET_SCALE: f32 = 1000.0;
/// Click threshold and opacity are edited in percent.
pub const PERCENT_SCALE: f32 = 100.0;
/// Added before truncating a loaded opacity so that `0.29` reads back as 29.
pub const OPACITY_LOAD_BIAS: f64 = 1e-3;

/// Every named value the runtime understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Offset(Hand),
    /// Debug copy of the rotation sliders, only ever written to files.
    Euler(Hand),
    /// The rotation the runtime actually applies.
    Quat(Hand),
    Enabled(Hand),
    GripJoint,
    AimJoint,
    Binding(Hand, Gesture),
    InteractionProfile,
    Threshold(Gesture, Bound),
    ClickThreshold,
    DisplayEnabled,
    ProjLayerIndex,
    ForceOwnDepthBuffer,
    SkinTone,
    Opacity,
}

/// What a persisted value turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Edits(Vec<Edit>),
    /// The named action is not in the slot's list. `fallback` selects the
    /// list's first entry.
    UnknownAction { name: String, fallback: Edit },
    /// The key is derived from other settings and has no control of its own.
    WriteOnly,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid number {0:?}")]
    Number(String),
    #[error("expected {expected} components, got {value:?}")]
    Components { expected: usize, value: String },
}

impl SettingKey {
    /// All keys, in the order a full flush emits them.
    pub fn flush_order() -> Vec<SettingKey> {
        let mut keys = vec![
            SettingKey::Offset(Hand::Left),
            SettingKey::Offset(Hand::Right),
            SettingKey::Euler(Hand::Left),
            SettingKey::Quat(Hand::Left),
            SettingKey::Euler(Hand::Right),
            SettingKey::Quat(Hand::Right),
            SettingKey::Enabled(Hand::Left),
            SettingKey::Enabled(Hand::Right),
            SettingKey::GripJoint,
            SettingKey::AimJoint,
        ];
        for hand in Hand::BOTH {
            keys.extend(hand.gestures().iter().map(|&g| SettingKey::Binding(hand, g)));
        }
        keys.push(SettingKey::InteractionProfile);
        for gesture in Gesture::ALL {
            keys.push(SettingKey::Threshold(gesture, Bound::Near));
            keys.push(SettingKey::Threshold(gesture, Bound::Far));
        }
        keys.extend([
            SettingKey::ClickThreshold,
            SettingKey::DisplayEnabled,
            SettingKey::ProjLayerIndex,
            SettingKey::ForceOwnDepthBuffer,
            SettingKey::SkinTone,
            SettingKey::Opacity,
        ]);
        keys
    }

    /// Look a key up by its dotted name.
    pub fn from_name(name: &str) -> Option<SettingKey> {
        static TABLE: OnceLock<HashMap<String, SettingKey>> = OnceLock::new();
        TABLE
            .get_or_init(|| SettingKey::flush_order().into_iter().map(|k| (k.name(), k)).collect())
            .get(name)
            .copied()
    }

    pub fn name(&self) -> String {
        match self {
            SettingKey::Offset(hand) => format!("{}.transform.vec", hand.id()),
            SettingKey::Euler(hand) => format!("{}.transform.euler", hand.id()),
            SettingKey::Quat(hand) => format!("{}.transform.quat", hand.id()),
            SettingKey::Enabled(hand) => format!("{}.enabled", hand.id()),
            SettingKey::GripJoint => "grip_joint".to_string(),
            SettingKey::AimJoint => "aim_joint".to_string(),
            SettingKey::Binding(hand, gesture) => format!("{}.{}", hand.id(), gesture.id()),
            SettingKey::InteractionProfile => "interaction_profile".to_string(),
            SettingKey::Threshold(gesture, Bound::Near) => format!("{}.near", gesture.id()),
            SettingKey::Threshold(gesture, Bound::Far) => format!("{}.far", gesture.id()),
            SettingKey::ClickThreshold => "click_threshold".to_string(),
            SettingKey::DisplayEnabled => "display.enabled".to_string(),
            SettingKey::ProjLayerIndex => "proj_layer_index".to_string(),
            SettingKey::ForceOwnDepthBuffer => "force_own_depth_buffer".to_string(),
            SettingKey::SkinTone => "skin_tone".to_string(),
            SettingKey::Opacity => "opacity".to_string(),
        }
    }

    /// Serialize the current value of this key. Returns `None` when the key
    /// is not sent to this kind of sink.
    pub fn encode(&self, settings: &Settings, sink: SinkKind) -> Option<Record> {
        let value = match *self {
            SettingKey::Offset(hand) => {
                let [x, y, z] = settings.hand(hand).offset_mm;
                format!("{} {} {}", x as f32 / OFFSET_SCALE, y as f32 / OFFSET_SCALE, z as f32 / OFFSET_SCALE)
            }
            SettingKey::Euler(hand) => {
                if sink != SinkKind::File {
                    return None;
                }
                let [x, y, z] = settings.hand(hand).euler_deg;
                format!("{} {} {}", x, y, z)
            }
            SettingKey::Quat(hand) => {
                let q = quat_from_euler_degrees(settings.hand(hand).euler_deg);
                format!("{} {} {} {}", q.x, q.y, q.z, q.w)
            }
            SettingKey::Enabled(hand) => (!settings.hand(hand).disabled).to_string(),
            SettingKey::GripJoint => settings.grip_joint.to_string(),
            SettingKey::AimJoint => settings.aim_joint.to_string(),
            SettingKey::Binding(hand, gesture) => {
                ACTIONS.value(settings.hand(hand).binding(gesture)).to_string()
            }
            SettingKey::InteractionProfile => {
                INTERACTION_PROFILES.value(settings.interaction_profile).to_string()
            }
            SettingKey::Threshold(gesture, bound) => {
                (settings.threshold(gesture).get(bound) as f32 / ThresholdPair::SCALE).to_string()
            }
            SettingKey::ClickThreshold => (settings.click_threshold as f32 / PERCENT_SCALE).to_string(),
            SettingKey::DisplayEnabled => (!settings.display_disabled).to_string(),
            SettingKey::ProjLayerIndex => settings.proj_layer_index.to_string(),
            SettingKey::ForceOwnDepthBuffer => settings.force_own_depth_buffer.to_string(),
            SettingKey::SkinTone => settings.skin_tone.to_string(),
            SettingKey::Opacity => (settings.opacity as f32 / PERCENT_SCALE).to_string(),
        };
        Some(Record::new(self.name(), value))
    }

    /// Parse a persisted value back into control edits.
    pub fn decode(&self, value: &str) -> Result<Decoded, DecodeError> {
        let edits: Vec<Edit> = match *self {
            SettingKey::Offset(hand) => {
                let v = parse_triple(value, parse_f64)?;
                Axis::ALL
                    .iter()
                    .zip(v)
                    .map(|(&axis, m)| Edit::Offset { hand, axis, mm: scale_round(m, OFFSET_SCALE) })
                    .collect()
            }
            SettingKey::Euler(hand) => {
                let v = parse_triple(value, parse_int)?;
                Axis::ALL
                    .iter()
                    .zip(v)
                    .map(|(&axis, deg)| Edit::Rotation { hand, axis, degrees: saturate(deg) })
                    .collect()
            }
            SettingKey::Quat(_) => return Ok(Decoded::WriteOnly),
            SettingKey::Enabled(hand) => vec![Edit::HandDisabled { hand, disabled: !truthy(value) }],
            SettingKey::GripJoint => vec![Edit::GripJoint(parse_index(value)?)],
            SettingKey::AimJoint => vec![Edit::AimJoint(parse_index(value)?)],
            SettingKey::Binding(hand, gesture) => {
                return Ok(select_by_name(&ACTIONS, value, |choice| Edit::Binding { hand, gesture, choice }));
            }
            SettingKey::InteractionProfile => {
                return Ok(select_by_name(&INTERACTION_PROFILES, value, Edit::InteractionProfile));
            }
            SettingKey::Threshold(gesture, bound) => vec![Edit::Threshold {
                gesture,
                bound,
                value: scale_round(parse_f64(value)?, ThresholdPair::SCALE),
            }],
            SettingKey::ClickThreshold => vec![Edit::ClickThreshold(scale_round(parse_f64(value)?, PERCENT_SCALE))],
            SettingKey::DisplayEnabled => vec![Edit::DisplayDisabled(!truthy(value))],
            SettingKey::ProjLayerIndex => vec![Edit::ProjLayerIndex(saturate(parse_int(value)?))],
            SettingKey::ForceOwnDepthBuffer => vec![Edit::ForceOwnDepthBuffer(truthy(value))],
            SettingKey::SkinTone => vec![Edit::SkinTone(parse_index(value)?)],
            SettingKey::Opacity => {
                let v = parse_f64(value)?;
                vec![Edit::Opacity((v * PERCENT_SCALE as f64 + OPACITY_LOAD_BIAS) as i32)]
            }
        };
        Ok(Decoded::Edits(edits))
    }
}

fn select_by_name(catalog: &Catalog, name: &str, edit: impl Fn(usize) -> Edit) -> Decoded {
    match catalog.position(name) {
        Some(choice) => Decoded::Edits(vec![edit(choice)]),
        None => Decoded::UnknownAction {
            name: name.to_string(),
            fallback: edit(0),
        },
    }
}

fn truthy(value: &str) -> bool {
    value == "1" || value == "true"
}

fn parse_f64(value: &str) -> Result<f64, DecodeError> {
    value.trim().parse().map_err(|_| DecodeError::Number(value.to_string()))
}

fn parse_int(value: &str) -> Result<i64, DecodeError> {
    value.trim().parse().map_err(|_| DecodeError::Number(value.to_string()))
}

fn parse_index(value: &str) -> Result<usize, DecodeError> {
    Ok(parse_int(value)?.max(0) as usize)
}

fn parse_triple<T>(value: &str, parse: fn(&str) -> Result<T, DecodeError>) -> Result<[T; 3], DecodeError> {
    let mut parts = value.split_whitespace();
    let mut next = || {
        parts.next().ok_or_else(|| DecodeError::Components {
            expected: 3,
            value: value.to_string(),
        })
    };
    Ok([parse(next()?)?, parse(next()?)?, parse(next()?)?])
}

/// Convert a wire fraction back into control units, rounding half to even.
fn scale_round(value: f64, scale: f32) -> i32 {
    (value * scale as f64).round_ties_even() as i32
}

fn saturate(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_lookup() {
        for key in SettingKey::flush_order() {
            assert_eq!(SettingKey::from_name(&key.name()), Some(key));
        }
        assert_eq!(SettingKey::from_name("right.index_tip_tap"), None);
        assert_eq!(SettingKey::from_name("nonsense"), None);
    }

    #[test]
    fn test_flush_order_covers_all_keys_once() {
        let keys = SettingKey::flush_order();
        assert_eq!(keys.len(), 44);
        let mut names: Vec<String> = keys.iter().map(|k| k.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 44);
    }

    #[test]
    fn test_euler_only_goes_to_files() {
        let s = Settings::default();
        assert!(SettingKey::Euler(Hand::Left).encode(&s, SinkKind::Live).is_none());
        let r = SettingKey::Euler(Hand::Left).encode(&s, SinkKind::File).unwrap();
        assert_eq!(r.to_string(), "left.transform.euler=0 0 0");
    }

    #[test]
    fn test_encode_scaled_values() {
        let mut s = Settings::default();
        s.apply(Edit::Offset { hand: Hand::Left, axis: Axis::X, mm: 500 });
        let r = SettingKey::Offset(Hand::Left).encode(&s, SinkKind::Live).unwrap();
        assert_eq!(r.to_string(), "left.transform.vec=0.5 0 0");

        let r = SettingKey::Threshold(Gesture::IndexBend, Bound::Near).encode(&s, SinkKind::Live).unwrap();
        assert_eq!(r.to_string(), "index_bend.near=0.045");
        let r = SettingKey::ClickThreshold.encode(&s, SinkKind::Live).unwrap();
        assert_eq!(r.to_string(), "click_threshold=0.75");
        let r = SettingKey::Opacity.encode(&s, SinkKind::Live).unwrap();
        assert_eq!(r.to_string(), "opacity=1");
    }

    #[test]
    fn test_encode_inverted_flags() {
        let mut s = Settings::default();
        s.apply(Edit::HandDisabled { hand: Hand::Right, disabled: true });
        s.apply(Edit::ForceOwnDepthBuffer(true));
        let enabled = SettingKey::Enabled(Hand::Right).encode(&s, SinkKind::Live).unwrap();
        assert_eq!(enabled.value, "false");
        let depth = SettingKey::ForceOwnDepthBuffer.encode(&s, SinkKind::Live).unwrap();
        assert_eq!(depth.value, "true");
    }

    #[test]
    fn test_binding_strips_note() {
        let mut s = Settings::default();
        s.apply(Edit::Binding { hand: Hand::Right, gesture: Gesture::PalmTap, choice: 7 });
        let r = SettingKey::Binding(Hand::Right, Gesture::PalmTap).encode(&s, SinkKind::Live).unwrap();
        assert_eq!(r.to_string(), "right.palm_tap=/input/a/click");
        let r = SettingKey::Binding(Hand::Right, Gesture::ThumbPress).encode(&s, SinkKind::Live).unwrap();
        assert_eq!(r.to_string(), "right.thumb_press=");
    }

    #[test]
    fn test_decode_fractions() {
        assert_eq!(
            SettingKey::ClickThreshold.decode("0.75"),
            Ok(Decoded::Edits(vec![Edit::ClickThreshold(75)]))
        );
        assert_eq!(
            SettingKey::Opacity.decode("0.29"),
            Ok(Decoded::Edits(vec![Edit::Opacity(29)]))
        );
        assert_eq!(
            SettingKey::Threshold(Gesture::Pinch, Bound::Far).decode("0.05"),
            Ok(Decoded::Edits(vec![Edit::Threshold { gesture: Gesture::Pinch, bound: Bound::Far, value: 50 }]))
        );
    }

    #[test]
    fn test_decode_opacity_truncates_after_bias() {
        for (text, expected) in [("0.57", 57), ("0.999", 99), ("1", 100), (" 0.07 ", 7)] {
            assert_eq!(
                SettingKey::Opacity.decode(text),
                Ok(Decoded::Edits(vec![Edit::Opacity(expected)])),
                "{text}"
            );
        }
        assert_eq!(
            SettingKey::Opacity.decode("half"),
            Err(DecodeError::Number("half".to_string()))
        );
    }

    #[test]
    fn test_decode_triples() {
        let Ok(Decoded::Edits(edits)) = SettingKey::Offset(Hand::Right).decode("0.12 -0.034 0") else {
            panic!("expected edits");
        };
        assert_eq!(
            edits,
            vec![
                Edit::Offset { hand: Hand::Right, axis: Axis::X, mm: 120 },
                Edit::Offset { hand: Hand::Right, axis: Axis::Y, mm: -34 },
                Edit::Offset { hand: Hand::Right, axis: Axis::Z, mm: 0 },
            ]
        );
        assert!(matches!(
            SettingKey::Euler(Hand::Left).decode("10 20"),
            Err(DecodeError::Components { expected: 3, .. })
        ));
    }

    #[test]
    fn test_decode_unknown_action_falls_back_to_first_entry() {
        let decoded = SettingKey::Binding(Hand::Left, Gesture::Pinch).decode("nonexistent_action").unwrap();
        assert_eq!(
            decoded,
            Decoded::UnknownAction {
                name: "nonexistent_action".to_string(),
                fallback: Edit::Binding { hand: Hand::Left, gesture: Gesture::Pinch, choice: 0 },
            }
        );
    }

    #[test]
    fn test_decode_quat_is_write_only() {
        assert_eq!(SettingKey::Quat(Hand::Left).decode("0 0 0 1"), Ok(Decoded::WriteOnly));
    }

    #[test]
    fn test_decode_bad_number() {
        assert_eq!(
            SettingKey::AimJoint.decode("eight"),
            Err(DecodeError::Number("eight".to_string()))
        );
    }
}
