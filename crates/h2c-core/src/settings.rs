use crate::catalog::{ACTIONS, HAND_JOINTS, INTERACTION_PROFILES, SKIN_TONES};
use crate::key::SettingKey;
use crate::threshold::{Bound, Gesture, ThresholdPair};

/// Hand offsets are edited in millimeters, within +/- this range.
pub const OFFSET_RANGE_MM: i32 = 1000;
/// Hand rotations are edited in whole degrees, within +/- this range.
pub const ROTATION_RANGE_DEG: i32 = 180;
pub const CLICK_THRESHOLD_MAX: i32 = 100;
pub const OPACITY_MAX: i32 = 100;
pub const PROJ_LAYER_INDEX_MAX: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub const BOTH: [Hand; 2] = [Hand::Left, Hand::Right];

    pub fn id(&self) -> &'static str {
        match self {
            Hand::Left => "left",
            Hand::Right => "right",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Hand::Left => "Left",
            Hand::Right => "Right",
        }
    }

    /// Gestures that have a binding slot on this hand. The index tip tap is
    /// performed by the right hand onto the left, so only the left hand binds it.
    pub fn gestures(&self) -> &'static [Gesture] {
        match self {
            Hand::Left => &Gesture::ALL,
            Hand::Right => &Gesture::ALL[..6],
        }
    }

    pub fn binds(&self, gesture: Gesture) -> bool {
        self.gestures().contains(&gesture)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Per-hand pose correction and gesture bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct HandSettings {
    pub offset_mm: [i32; 3],
    pub euler_deg: [i32; 3],
    /// Mirrors the "disable" checkbox; dispatched inverted as `enabled`.
    pub disabled: bool,
    /// Selected [`ACTIONS`] entry per [`Gesture`]. Slots the hand does not
    /// bind are kept at 0 and never dispatched.
    pub bindings: [usize; 7],
}

impl HandSettings {
    pub fn binding(&self, gesture: Gesture) -> usize {
        self.bindings[gesture.index()]
    }
}

/// The complete set of values the panel edits, in control units.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub hands: [HandSettings; 2],
    pub grip_joint: usize,
    pub aim_joint: usize,
    pub interaction_profile: usize,
    pub thresholds: [ThresholdPair; 7],
    pub click_threshold: i32,
    pub display_disabled: bool,
    pub proj_layer_index: i32,
    pub force_own_depth_buffer: bool,
    pub skin_tone: usize,
    pub opacity: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hands: [
                HandSettings {
                    offset_mm: [0; 3],
                    euler_deg: [0; 3],
                    disabled: false,
                    bindings: [2, 0, 0, 3, 1, 0, 8],
                },
                HandSettings {
                    offset_mm: [0; 3],
                    euler_deg: [0; 3],
                    disabled: false,
                    bindings: [2, 0, 0, 3, 0, 0, 0],
                },
            ],
            grip_joint: 0,
            aim_joint: 8,
            interaction_profile: 1,
            thresholds: [
                ThresholdPair::new(0, 50),
                ThresholdPair::new(0, 50),
                ThresholdPair::new(45, 70),
                ThresholdPair::new(35, 70),
                ThresholdPair::new(40, 60),
                ThresholdPair::new(20, 60),
                ThresholdPair::new(0, 70),
            ],
            click_threshold: 75,
            display_disabled: false,
            proj_layer_index: 0,
            force_own_depth_buffer: false,
            skin_tone: 1,
            opacity: 100,
        }
    }
}

/// One user-facing change to a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Offset { hand: Hand, axis: Axis, mm: i32 },
    Rotation { hand: Hand, axis: Axis, degrees: i32 },
    HandDisabled { hand: Hand, disabled: bool },
    GripJoint(usize),
    AimJoint(usize),
    Binding { hand: Hand, gesture: Gesture, choice: usize },
    InteractionProfile(usize),
    Threshold { gesture: Gesture, bound: Bound, value: i32 },
    ClickThreshold(i32),
    DisplayDisabled(bool),
    ProjLayerIndex(i32),
    ForceOwnDepthBuffer(bool),
    SkinTone(usize),
    Opacity(i32),
}

impl Settings {
    pub fn hand(&self, hand: Hand) -> &HandSettings {
        &self.hands[hand.index()]
    }

    fn hand_mut(&mut self, hand: Hand) -> &mut HandSettings {
        &mut self.hands[hand.index()]
    }

    pub fn threshold(&self, gesture: Gesture) -> &ThresholdPair {
        &self.thresholds[gesture.index()]
    }

    /// Apply an edit, clamping it to its control's range.
    ///
    /// Returns the keys whose dispatched value is affected, in the order they
    /// should go out. A threshold edit that drags its partner lists the
    /// partner first.
    pub fn apply(&mut self, edit: Edit) -> Vec<SettingKey> {
        match edit {
            Edit::Offset { hand, axis, mm } => {
                self.hand_mut(hand).offset_mm[axis.index()] = mm.clamp(-OFFSET_RANGE_MM, OFFSET_RANGE_MM);
                vec![SettingKey::Offset(hand)]
            }
            Edit::Rotation { hand, axis, degrees } => {
                self.hand_mut(hand).euler_deg[axis.index()] =
                    degrees.clamp(-ROTATION_RANGE_DEG, ROTATION_RANGE_DEG);
                vec![SettingKey::Euler(hand), SettingKey::Quat(hand)]
            }
            Edit::HandDisabled { hand, disabled } => {
                self.hand_mut(hand).disabled = disabled;
                vec![SettingKey::Enabled(hand)]
            }
            Edit::GripJoint(index) => {
                self.grip_joint = clamp_choice(index, HAND_JOINTS.len());
                vec![SettingKey::GripJoint]
            }
            Edit::AimJoint(index) => {
                self.aim_joint = clamp_choice(index, HAND_JOINTS.len());
                vec![SettingKey::AimJoint]
            }
            Edit::Binding { hand, gesture, choice } => {
                if !hand.binds(gesture) {
                    return Vec::new();
                }
                self.hand_mut(hand).bindings[gesture.index()] = clamp_choice(choice, ACTIONS.len());
                vec![SettingKey::Binding(hand, gesture)]
            }
            Edit::InteractionProfile(index) => {
                self.interaction_profile = clamp_choice(index, INTERACTION_PROFILES.len());
                vec![SettingKey::InteractionProfile]
            }
            Edit::Threshold { gesture, bound, value } => {
                let dragged = self.thresholds[gesture.index()].set(bound, value);
                let touched = SettingKey::Threshold(gesture, bound);
                if dragged {
                    let partner = match bound {
                        Bound::Near => Bound::Far,
                        Bound::Far => Bound::Near,
                    };
                    vec![SettingKey::Threshold(gesture, partner), touched]
                } else {
                    vec![touched]
                }
            }
            Edit::ClickThreshold(value) => {
                self.click_threshold = value.clamp(0, CLICK_THRESHOLD_MAX);
                vec![SettingKey::ClickThreshold]
            }
            Edit::DisplayDisabled(disabled) => {
                self.display_disabled = disabled;
                vec![SettingKey::DisplayEnabled]
            }
            Edit::ProjLayerIndex(index) => {
                self.proj_layer_index = index.clamp(0, PROJ_LAYER_INDEX_MAX);
                vec![SettingKey::ProjLayerIndex]
            }
            Edit::ForceOwnDepthBuffer(force) => {
                self.force_own_depth_buffer = force;
                vec![SettingKey::ForceOwnDepthBuffer]
            }
            Edit::SkinTone(index) => {
                self.skin_tone = clamp_choice(index, SKIN_TONES.len());
                vec![SettingKey::SkinTone]
            }
            Edit::Opacity(value) => {
                self.opacity = value.clamp(0, OPACITY_MAX);
                vec![SettingKey::Opacity]
            }
        }
    }

    /// Express this snapshot as the sequence of edits that reproduces it
    /// from any starting state, control by control.
    pub fn as_edits(&self) -> Vec<Edit> {
        let mut edits = Vec::new();
        for hand in Hand::BOTH {
            let h = self.hand(hand);
            for axis in Axis::ALL {
                edits.push(Edit::Offset { hand, axis, mm: h.offset_mm[axis.index()] });
            }
            for axis in Axis::ALL {
                edits.push(Edit::Rotation { hand, axis, degrees: h.euler_deg[axis.index()] });
            }
            edits.push(Edit::HandDisabled { hand, disabled: h.disabled });
        }
        edits.push(Edit::GripJoint(self.grip_joint));
        edits.push(Edit::AimJoint(self.aim_joint));
        for hand in Hand::BOTH {
            for &gesture in hand.gestures() {
                edits.push(Edit::Binding { hand, gesture, choice: self.hand(hand).binding(gesture) });
            }
        }
        edits.push(Edit::InteractionProfile(self.interaction_profile));
        for gesture in Gesture::ALL {
            let pair = self.threshold(gesture);
            edits.push(Edit::Threshold { gesture, bound: Bound::Near, value: pair.near() });
            edits.push(Edit::Threshold { gesture, bound: Bound::Far, value: pair.far() });
        }
        edits.push(Edit::ClickThreshold(self.click_threshold));
        edits.push(Edit::DisplayDisabled(self.display_disabled));
        edits.push(Edit::ProjLayerIndex(self.proj_layer_index));
        edits.push(Edit::ForceOwnDepthBuffer(self.force_own_depth_buffer));
        edits.push(Edit::SkinTone(self.skin_tone));
        edits.push(Edit::Opacity(self.opacity));
        edits
    }
}

fn clamp_choice(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
