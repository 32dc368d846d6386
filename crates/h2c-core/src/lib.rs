pub mod catalog;
pub mod key;
pub mod record;
pub mod rotation;
pub mod settings;
pub mod threshold;

pub use catalog::{strip_note, Catalog};
pub use key::{DecodeError, Decoded, SettingKey};
pub use record::{Record, SinkKind};
pub use rotation::quat_from_euler_degrees;
pub use settings::{Axis, Edit, Hand, HandSettings, Settings};
pub use threshold::{Bound, Gesture, ThresholdPair};
