/// Gestures that map a joint distance onto a controller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Pinch,
    ThumbPress,
    IndexBend,
    Squeeze,
    WristTap,
    PalmTap,
    IndexTipTap,
}

impl Gesture {
    pub const ALL: [Gesture; 7] = [
        Gesture::Pinch,
        Gesture::ThumbPress,
        Gesture::IndexBend,
        Gesture::Squeeze,
        Gesture::WristTap,
        Gesture::PalmTap,
        Gesture::IndexTipTap,
    ];

    /// Key fragment used on the wire (`pinch`, `thumb_press`, ...).
    pub fn id(&self) -> &'static str {
        match self {
            Gesture::Pinch => "pinch",
            Gesture::ThumbPress => "thumb_press",
            Gesture::IndexBend => "index_bend",
            Gesture::Squeeze => "squeeze",
            Gesture::WristTap => "wrist_tap",
            Gesture::PalmTap => "palm_tap",
            Gesture::IndexTipTap => "index_tip_tap",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Pinch => "Pinch",
            Gesture::ThumbPress => "Thumb press",
            Gesture::IndexBend => "Index bend",
            Gesture::Squeeze => "Squeeze",
            Gesture::WristTap => "Wrist tap",
            Gesture::PalmTap => "Palm tap",
            Gesture::IndexTipTap => "Index tip tap",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Near/far distance thresholds for one gesture, in thousandths of the
/// normalized scale.
///
/// `near < far` holds after every mutation. Moving one bound across the
/// other drags the other along by one unit, staying within `0..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdPair {
    near: i32,
    far: i32,
}

/// Which bound of a pair moved, used to report dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Near,
    Far,
}

impl ThresholdPair {
    pub const MAX: i32 = 1000;
    pub const SCALE: f32 = 1000.0;

    pub fn new(near: i32, far: i32) -> Self {
        let mut pair = Self { near: 0, far: Self::MAX };
        pair.set_far(far);
        pair.set_near(near);
        pair
    }

    pub fn near(&self) -> i32 {
        self.near
    }

    pub fn far(&self) -> i32 {
        self.far
    }

    /// Set the near bound. Returns `true` if far had to move.
    pub fn set_near(&mut self, value: i32) -> bool {
        let value = value.clamp(0, Self::MAX);
        if value < self.far {
            self.near = value;
            return false;
        }
        if value + 1 > Self::MAX {
            self.near = Self::MAX - 1;
            self.far = Self::MAX;
        } else {
            self.near = value;
            self.far = value + 1;
        }
        true
    }

    /// Set the far bound. Returns `true` if near had to move.
    pub fn set_far(&mut self, value: i32) -> bool {
        let value = value.clamp(0, Self::MAX);
        if value > self.near {
            self.far = value;
            return false;
        }
        if value - 1 < 0 {
            self.near = 0;
            self.far = 1;
        } else {
            self.far = value;
            self.near = value - 1;
        }
        true
    }

    pub fn set(&mut self, bound: Bound, value: i32) -> bool {
        match bound {
            Bound::Near => self.set_near(value),
            Bound::Far => self.set_far(value),
        }
    }

    pub fn get(&self, bound: Bound) -> i32 {
        match bound {
            Bound::Near => self.near,
            Bound::Far => self.far,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_pushes_far() {
        let mut p = ThresholdPair::new(0, 50);
        assert!(p.set_near(50));
        assert_eq!((p.near(), p.far()), (50, 51));
        assert!(!p.set_near(10));
        assert_eq!((p.near(), p.far()), (10, 51));
    }

    #[test]
    fn test_far_pulls_near() {
        let mut p = ThresholdPair::new(45, 70);
        assert!(p.set_far(30));
        assert_eq!((p.near(), p.far()), (29, 30));
    }

    #[test]
    fn test_edges_stay_in_scale() {
        let mut p = ThresholdPair::new(0, 50);
        p.set_near(ThresholdPair::MAX);
        assert_eq!((p.near(), p.far()), (999, 1000));
        p.set_far(0);
        assert_eq!((p.near(), p.far()), (0, 1));
        p.set_far(-20);
        assert_eq!((p.near(), p.far()), (0, 1));
        p.set_near(5000);
        assert_eq!((p.near(), p.far()), (999, 1000));
    }

    #[test]
    fn test_new_orders_inverted_bounds() {
        let p = ThresholdPair::new(900, 10);
        assert_eq!((p.near(), p.far()), (900, 901));
        let p = ThresholdPair::new(1000, 1000);
        assert_eq!((p.near(), p.far()), (999, 1000));
        let p = ThresholdPair::new(0, 0);
        assert!(p.near() < p.far());
    }

    #[test]
    fn test_invariant_holds_for_any_sequence() {
        let mut p = ThresholdPair::new(35, 70);
        let moves = [
            (Bound::Near, 900),
            (Bound::Far, 3),
            (Bound::Near, -4),
            (Bound::Far, 1200),
            (Bound::Near, 1000),
            (Bound::Far, 999),
        ];
        for (bound, value) in moves {
            p.set(bound, value);
            assert!(p.near() < p.far(), "{:?} after {:?}={}", p, bound, value);
            assert!(p.near() >= 0 && p.far() <= ThresholdPair::MAX);
        }
    }

    #[test]
    fn test_gesture_ids_unique() {
        let mut ids: Vec<&str> = Gesture::ALL.iter().map(|g| g.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Gesture::ALL.len());
    }
}
