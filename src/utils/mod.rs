pub mod clock;
pub mod timezone;

pub use clock::{Clock, FixedClock, SystemClock};
pub use timezone::{format_wall_clock, offset_seconds, to_local_wall_clock};
